//! Post-render adjustments: "in progress" headers and last-updated stamps.

use chrono::{DateTime, NaiveDate, Utc};
use chrono_tz::Tz;

/// Zone used when no timezone is configured or the configured one is unknown.
pub const DEFAULT_TIMEZONE: Tz = chrono_tz::Asia::Tokyo;

/// Caller-supplied decoration settings.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Zone for "today" and the last-updated stamp.
    pub timezone: Tz,
    /// Replace the header date with today's date marked as in progress.
    pub force_today: bool,
    /// Current instant, injected so rendering stays deterministic.
    pub now: DateTime<Utc>,
    /// Modification time of the source file, when known.
    pub source_modified: Option<DateTime<Utc>>,
}

impl RenderOptions {
    pub fn new(timezone: Tz, now: DateTime<Utc>) -> Self {
        Self {
            timezone,
            force_today: false,
            now,
            source_modified: None,
        }
    }

    pub fn with_force_today(mut self, force_today: bool) -> Self {
        self.force_today = force_today;
        self
    }

    pub fn with_source_modified(mut self, modified: Option<DateTime<Utc>>) -> Self {
        self.source_modified = modified;
        self
    }
}

/// Resolves an IANA zone name, returning `fallback` when it is absent or unknown.
pub fn resolve_timezone(name: Option<&str>, fallback: Tz) -> Tz {
    let Some(name) = name.map(str::trim).filter(|n| !n.is_empty()) else {
        return fallback;
    };
    match name.parse::<Tz>() {
        Ok(tz) => tz,
        Err(_) => {
            tracing::warn!(timezone = name, %fallback, "unknown timezone");
            fallback
        }
    }
}

/// Applies the optional decorations to rendered dashboard text.
///
/// The header replacement runs first and touches only the first literal
/// occurrence of `header_date`; the last-updated line is prepended after.
pub fn decorate(text: &str, header_date: NaiveDate, options: &RenderOptions) -> String {
    let tz = options.timezone;
    let mut out = if options.force_today {
        let today = options.now.with_timezone(&tz).date_naive();
        let original = header_date.format("%Y-%m-%d").to_string();
        text.replacen(&original, &format!("{today} (in progress)"), 1)
    } else {
        text.to_string()
    };

    if let Some(modified) = options.source_modified {
        let local = modified.with_timezone(&tz);
        out = format!(
            "Last updated: {} ({})\n\n{out}",
            local.format("%Y-%m-%d %H:%M"),
            tz.name()
        );
    }

    out
}
