use crate::expr::Expr;

/// Color triple rendered as `{red: R; green: G; blue: B}`.
///
/// Channels pass through unvalidated: out-of-range or negative values are
/// serialized exactly as given, never clamped. Whether they make sense is
/// between the caller and the server.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RgbColor {
    red: i32,
    green: i32,
    blue: i32,
}

impl RgbColor {
    pub fn new(red: i32, green: i32, blue: i32) -> Self {
        Self { red, green, blue }
    }
}

impl std::fmt::Display for RgbColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{{red: {}; green: {}; blue: {}}}",
            self.red, self.green, self.blue
        )
    }
}

/// One `case`/`return` line of a [`Switch`] block.
#[derive(Debug, Clone)]
pub struct Case {
    condition: Expr,
    color: RgbColor,
}

impl Case {
    /// Pair a boolean condition with the color returned when it holds.
    ///
    /// The condition is any expression-capable value: a comparison node, a
    /// coverage, or raw text written out verbatim.
    pub fn new(condition: impl Into<Expr>, color: RgbColor) -> Self {
        Self {
            condition: condition.into(),
            color,
        }
    }
}

impl std::fmt::Display for Case {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "case {}\n\t\treturn {}", self.condition, self.color)
    }
}

/// Ordered conditional color mapping with a default fallback.
///
/// Cases serialize in insertion order; which case actually fires is decided
/// by the server's first-match evaluation, this layer only fixes the textual
/// order.
#[derive(Debug, Clone)]
pub struct Switch {
    cases: Vec<Case>,
    default: RgbColor,
}

impl Switch {
    /// Start a switch block that falls back to `default`.
    pub fn new(default: RgbColor) -> Self {
        Self {
            cases: Vec::new(),
            default,
        }
    }

    /// Append a case after the ones already added.
    pub fn with_case(mut self, case: Case) -> Self {
        self.cases.push(case);
        self
    }
}

impl std::fmt::Display for Switch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "switch\n")?;
        for case in &self.cases {
            write!(f, "\t{}\n", case)?;
        }
        write!(f, "\tdefault return {}", self.default)
    }
}
