//! Numeric normalization utilities.

/// Parses a cell as f64, returning None for blank, non-numeric or non-finite values.
pub fn parse_f64(value: &str) -> Option<f64> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|v| v.is_finite())
}
