//! Number formatting for dashboard lines.

/// Formats a value without trailing zeros: `8000.0` as `8000`, `512.30` as `512.3`.
pub fn format_numeric(value: f64) -> String {
    let s = value.to_string();
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.').to_string()
    } else {
        s
    }
}

/// Formats a value with exactly one decimal place.
pub(crate) fn one_decimal(value: f64) -> String {
    format!("{value:.1}")
}

/// Formats a value rounded to a whole number.
pub(crate) fn whole(value: f64) -> String {
    format!("{:.0}", value.round())
}

/// Renders an optional value followed by its unit, or `n/a`.
pub(crate) fn with_unit(value: Option<String>, unit: &str) -> String {
    match value {
        Some(v) if unit.is_empty() => v,
        Some(v) => format!("{v} {unit}"),
        None => "n/a".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_numeric() {
        assert_eq!(format_numeric(8000.0), "8000");
        assert_eq!(format_numeric(512.3), "512.3");
        assert_eq!(format_numeric(61.0), "61");
        assert_eq!(format_numeric(0.5), "0.5");
        assert_eq!(format_numeric(100.0), "100");
    }

    #[test]
    fn test_with_unit() {
        assert_eq!(with_unit(Some("7.5".into()), "h"), "7.5 h");
        assert_eq!(with_unit(Some("8000".into()), ""), "8000");
        assert_eq!(with_unit(None, "kg"), "n/a");
    }

    #[test]
    fn test_whole_and_one_decimal() {
        assert_eq!(whole(6885.714), "6886");
        assert_eq!(whole(2.5), "3");
        assert_eq!(one_decimal(66.7), "66.7");
        assert_eq!(one_decimal(7.0), "7.0");
    }
}
