//! Runtime configuration shared by all requests.

use chrono_tz::Tz;
use vitals_report::DEFAULT_TIMEZONE;

/// Settings established once at startup and read by every handler.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Shared secret for `X-API-Key`. `None` rejects every protected request.
    pub api_key: Option<String>,
    /// Storage folder holding the exports.
    pub folder_id: Option<String>,
    /// Dashboard timezone when the request names none (or an unknown one).
    pub default_timezone: Tz,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            folder_id: None,
            default_timezone: DEFAULT_TIMEZONE,
        }
    }
}

impl AppConfig {
    /// Builds a config, treating blank values as unset.
    pub fn new(api_key: Option<String>, folder_id: Option<String>, default_timezone: Tz) -> Self {
        Self {
            api_key: non_blank(api_key),
            folder_id: non_blank(folder_id),
            default_timezone,
        }
    }

    /// Checks a presented API key against the configured secret.
    pub fn is_authorized(&self, presented: Option<&str>) -> bool {
        match (self.api_key.as_deref(), presented) {
            (Some(expected), Some(presented)) => {
                constant_time_eq(expected.as_bytes(), presented.as_bytes())
            }
            _ => false,
        }
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// Compares without short-circuiting on the first differing byte.
fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.iter().zip(b).fold(0u8, |acc, (x, y)| acc | (x ^ y)) == 0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(key: Option<&str>) -> AppConfig {
        AppConfig::new(key.map(str::to_string), Some("folder".into()), DEFAULT_TIMEZONE)
    }

    #[test]
    fn test_is_authorized() {
        let config = config(Some("s3cret"));
        assert!(config.is_authorized(Some("s3cret")));
        assert!(!config.is_authorized(Some("s3creT")));
        assert!(!config.is_authorized(Some("s3cret ")));
        assert!(!config.is_authorized(None));
    }

    #[test]
    fn test_no_key_rejects_everything() {
        assert!(!config(None).is_authorized(Some("")));
        assert!(!config(Some("  ")).is_authorized(Some("  ")));
    }

    #[test]
    fn test_constant_time_eq() {
        assert!(constant_time_eq(b"abc", b"abc"));
        assert!(!constant_time_eq(b"abc", b"abd"));
        assert!(!constant_time_eq(b"abc", b"ab"));
        assert!(constant_time_eq(b"", b""));
    }
}
