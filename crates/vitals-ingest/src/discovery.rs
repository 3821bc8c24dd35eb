//! Latest-file selection for the export folder.

use std::sync::LazyLock;

use chrono::{DateTime, NaiveDate, Utc};
use regex::Regex;
use vitals_model::CandidateFile;

use crate::error::{IngestError, Result};

/// MIME types a health export may be listed under.
pub const ACCEPTED_MIME_TYPES: [&str; 2] = ["text/csv", "application/vnd.ms-excel"];

/// `20YY`, optional `-`/`_`, `MM`, optional `-`/`_`, `DD`.
static NAME_DATE: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"(20\d{2})[-_]?(\d{2})[-_]?(\d{2})").ok());

/// Returns true if `mime_type` is one of [`ACCEPTED_MIME_TYPES`].
pub fn is_accepted_mime_type(mime_type: &str) -> bool {
    ACCEPTED_MIME_TYPES.contains(&mime_type)
}

/// Extracts the calendar date embedded in a file name.
///
/// Only the first match is considered. Returns `None` when there is no
/// match or when the digits do not form a real date (`2025-13-40`).
pub fn parse_name_date(name: &str) -> Option<NaiveDate> {
    let caps = NAME_DATE.as_ref()?.captures(name)?;
    let year = caps[1].parse().ok()?;
    let month = caps[2].parse().ok()?;
    let day = caps[3].parse().ok()?;
    NaiveDate::from_ymd_opt(year, month, day)
}

/// Parses a listing `modifiedTime` (RFC 3339, `Z` or offset) into UTC.
pub fn parse_modified_time(value: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(value.trim())
        .ok()
        .map(|dt| dt.with_timezone(&Utc))
}

/// Sort key: name-date first, modification time as tie-break.
///
/// Unparseable parts fall back to the minimum representable value so they
/// sort last under a descending order.
fn recency_key(file: &CandidateFile) -> (NaiveDate, DateTime<Utc>) {
    (
        parse_name_date(&file.name).unwrap_or(NaiveDate::MIN),
        parse_modified_time(&file.modified_time).unwrap_or(DateTime::<Utc>::MIN_UTC),
    )
}

/// Picks the file that represents the most recent data.
///
/// A file whose name encodes a valid date always outranks one without,
/// even if the undated file was modified later. Among equal name-dates the
/// most recently modified file wins; full ties keep listing order.
pub fn select_latest(files: &[CandidateFile]) -> Result<&CandidateFile> {
    let mut best: Option<(&CandidateFile, (NaiveDate, DateTime<Utc>))> = None;
    for file in files {
        let key = recency_key(file);
        match &best {
            Some((_, best_key)) if key <= *best_key => {}
            _ => best = Some((file, key)),
        }
    }

    let (latest, (name_date, modified)) = best.ok_or(IngestError::NoCandidateFiles)?;
    tracing::info!(
        file_id = %latest.id,
        name = %latest.name,
        name_date = %name_date,
        modified = %modified,
        candidates = files.len(),
        "selected latest export"
    );
    Ok(latest)
}
