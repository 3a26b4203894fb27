/// Operand value carried by axis bounds, expression literals, and raw return
/// values.
///
/// Values serialize in their natural textual form: integers and floats print
/// the way Rust displays them (`8.80` becomes `8.8`), strings pass through
/// verbatim. Callers supply their own quoting for string bounds, e.g.
/// `"\"2014-07\""`.
#[derive(Debug, Clone, PartialEq)]
pub enum Scalar {
    Int(i64),
    Float(f64),
    Str(String),
}

impl std::fmt::Display for Scalar {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Scalar::Int(value) => write!(f, "{}", value),
            Scalar::Float(value) => write!(f, "{}", value),
            Scalar::Str(value) => write!(f, "{}", value),
        }
    }
}

impl From<i32> for Scalar {
    fn from(value: i32) -> Self {
        Scalar::Int(value as i64)
    }
}

impl From<i64> for Scalar {
    fn from(value: i64) -> Self {
        Scalar::Int(value)
    }
}

impl From<f64> for Scalar {
    fn from(value: f64) -> Self {
        Scalar::Float(value)
    }
}

impl From<&str> for Scalar {
    fn from(value: &str) -> Self {
        Scalar::Str(value.to_string())
    }
}

impl From<String> for Scalar {
    fn from(value: String) -> Self {
        Scalar::Str(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_int_display() {
        assert_eq!(Scalar::from(1).to_string(), "1");
        assert_eq!(Scalar::from(-20).to_string(), "-20");
        assert_eq!(Scalar::from(99999).to_string(), "99999");
    }

    #[test]
    fn test_float_display_drops_trailing_zero() {
        assert_eq!(Scalar::from(8.80).to_string(), "8.8");
        assert_eq!(Scalar::from(53.08).to_string(), "53.08");
        assert_eq!(Scalar::from(273.15).to_string(), "273.15");
    }

    #[test]
    fn test_str_passes_through_verbatim() {
        assert_eq!(Scalar::from("\"2014-07\"").to_string(), "\"2014-07\"");
        assert_eq!(Scalar::from("abc".to_string()).to_string(), "abc");
    }
}
