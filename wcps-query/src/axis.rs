use crate::scalar::Scalar;

/// One dimension bound applied to a coverage subset: a point such as
/// `Lat(53.08)` or a closed range such as `ansi("2014-01":"2014-12")`.
///
/// Bounds are opaque; numeric values print in their natural form and
/// pre-quoted strings keep their quotes.
#[derive(Debug, Clone)]
pub struct Axis {
    name: String,
    lower: Scalar,
    upper: Option<Scalar>,
}

impl Axis {
    /// Bind the axis to a single point.
    pub fn point(name: &str, lower: impl Into<Scalar>) -> Self {
        Self {
            name: name.to_string(),
            lower: lower.into(),
            upper: None,
        }
    }

    /// Bind the axis to a closed range.
    pub fn range(name: &str, lower: impl Into<Scalar>, upper: impl Into<Scalar>) -> Self {
        Self {
            name: name.to_string(),
            lower: lower.into(),
            upper: Some(upper.into()),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl std::fmt::Display for Axis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.upper {
            Some(upper) => write!(f, "{}({}:{})", self.name, self.lower, upper),
            None => write!(f, "{}({})", self.name, self.lower),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_has_no_colon() {
        let axis = Axis::point("Lat", 53.08);
        assert_eq!(axis.to_string(), "Lat(53.08)");
        assert!(!axis.to_string().contains(':'));
    }

    #[test]
    fn test_range_has_exactly_one_colon() {
        let axis = Axis::range("Long", -20, 40);
        assert_eq!(axis.to_string(), "Long(-20:40)");
        assert_eq!(axis.to_string().matches(':').count(), 1);
    }

    #[test]
    fn test_quoted_string_bounds_keep_quotes() {
        let axis = Axis::range("ansi", "\"2014-01\"", "\"2014-12\"");
        assert_eq!(axis.to_string(), "ansi(\"2014-01\":\"2014-12\")");
    }

    #[test]
    fn test_name_accessor() {
        assert_eq!(Axis::point("time", 0).name(), "time");
    }
}
