//! Utility functions for mapping operations.

/// Normalizes text for comparison by lowercasing and replacing separators with spaces.
pub fn normalize_text(raw: &str) -> String {
    raw.trim()
        .to_lowercase()
        .replace(['_', '-', '.', '/', '\\'], " ")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collapses_separators_and_case() {
        assert_eq!(normalize_text("  Sleep_Duration-Hours "), "sleep duration hours");
        assert_eq!(normalize_text("start_date"), "start date");
        assert_eq!(normalize_text("Start Date"), "start date");
    }

    #[test]
    fn leaves_japanese_untouched() {
        assert_eq!(normalize_text("体重(kg)"), "体重(kg)");
        assert_eq!(normalize_text(" 安静時心拍数 "), "安静時心拍数");
    }
}
