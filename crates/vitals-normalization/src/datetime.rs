//! Calendar date parsing for export date columns.
//!
//! Exports write dates in many shapes: plain ISO dates, Apple Health
//! timestamps with offsets, spreadsheet slash dates, Japanese dates. Only
//! the calendar date is kept; times and offsets are dropped without shifting
//! the day.

use chrono::{DateTime, NaiveDate, NaiveDateTime};

/// Parse a date cell into a calendar date.
///
/// Returns `None` for blank or unrecognised values; callers drop such rows.
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }

    try_parse_zoned(trimmed)
        .or_else(|| try_parse_datetime(trimmed).map(|dt| dt.date()))
        .or_else(|| try_parse_date(trimmed))
}

/// Timestamps carrying an explicit offset.
fn try_parse_zoned(value: &str) -> Option<NaiveDate> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.naive_local().date());
    }

    let formats = [
        "%Y-%m-%d %H:%M:%S %z", // Apple Health: 2025-08-25 00:00:00 +0900
        "%Y-%m-%d %H:%M:%S%z",
        "%Y-%m-%dT%H:%M:%S%z",
    ];

    for fmt in &formats {
        if let Ok(dt) = DateTime::parse_from_str(value, fmt) {
            return Some(dt.naive_local().date());
        }
    }

    None
}

/// Try to parse full datetime formats.
fn try_parse_datetime(value: &str) -> Option<NaiveDateTime> {
    let formats = [
        "%Y-%m-%dT%H:%M:%S%.f", // With fractional seconds
        "%Y-%m-%dT%H:%M:%S",
        "%Y-%m-%dT%H:%M",
        "%Y-%m-%d %H:%M:%S%.f",
        "%Y-%m-%d %H:%M:%S",
        "%Y-%m-%d %H:%M",
        "%Y/%m/%d %H:%M:%S",
        "%Y/%m/%d %H:%M",
        "%m/%d/%Y %H:%M:%S", // US
        "%m/%d/%Y %H:%M",
        "%d-%b-%Y %H:%M:%S", // 15-Jan-2024 10:30:00
        "%d-%b-%Y %H:%M",
    ];

    for fmt in &formats {
        if let Ok(dt) = NaiveDateTime::parse_from_str(value, fmt) {
            return Some(dt);
        }
    }

    None
}

/// Try to parse date-only formats.
fn try_parse_date(value: &str) -> Option<NaiveDate> {
    let formats = [
        "%Y-%m-%d",
        "%Y/%m/%d",
        "%Y.%m.%d",
        "%Y年%m月%d日", // 2025年8月25日
        "%m/%d/%Y",    // US month-first takes precedence: 01/02/2025 is Jan 2
        "%d/%m/%Y",    // European, only reached when month-first is impossible
        "%d-%b-%Y",    // 15-Jan-2024
        "%d %b %Y",    // 15 Jan 2024
        "%b %d, %Y",   // Jan 15, 2024
        "%B %d, %Y",   // January 15, 2024
        "%Y%m%d",      // Compact: 20240115
    ];

    for fmt in &formats {
        if let Ok(d) = NaiveDate::parse_from_str(value, fmt) {
            return Some(d);
        }
    }

    None
}
