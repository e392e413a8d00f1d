//! Raw value normalization.

/// Parse a raw reading value to a numeric (f64).
///
/// Inequality prefixes are stripped, not interpreted: `"<5"` parses to
/// `5.0` and `">120"` to `120.0`. The less-than/greater-than semantics are
/// intentionally discarded — downstream classification treats the reading
/// as the bare number. Non-numeric values ("Negative", "Not Detected") and
/// empty strings return `None`.
pub fn parse_numeric_value(raw: &str) -> Option<f64> {
    if raw.is_empty() {
        return None;
    }
    let stripped: String = raw.chars().filter(|c| !matches!(c, '<' | '>')).collect();
    let trimmed = stripped.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_numbers() {
        assert_eq!(parse_numeric_value("650"), Some(650.0));
        assert_eq!(parse_numeric_value("4.7"), Some(4.7));
        assert_eq!(parse_numeric_value("-0.5"), Some(-0.5));
    }

    #[test]
    fn test_inequality_prefixes() {
        assert_eq!(parse_numeric_value("<5"), Some(5.0));
        assert_eq!(parse_numeric_value(">120"), Some(120.0));
        assert_eq!(parse_numeric_value("< 0.1"), Some(0.1));
    }

    #[test]
    fn test_whitespace() {
        assert_eq!(parse_numeric_value("  42  "), Some(42.0));
    }

    #[test]
    fn test_non_numeric() {
        assert_eq!(parse_numeric_value("Negative"), None);
        assert_eq!(parse_numeric_value("Not Detected"), None);
        assert_eq!(parse_numeric_value("1-5"), None);
    }

    #[test]
    fn test_empty() {
        assert_eq!(parse_numeric_value(""), None);
        assert_eq!(parse_numeric_value("   "), None);
        assert_eq!(parse_numeric_value("<>"), None);
    }
}
