//! Weekly health dashboard rendering.
//!
//! Turns the normalized window of daily records into a short Markdown-style
//! text report: the latest day, weekly averages, a per-day summary, and any
//! attention flags. [`decorate`] then adjusts the header for "today" views
//! and prepends the source file's last-updated stamp.

mod alerts;
mod decorate;
mod error;
mod format;
mod render;
mod stats;

pub use alerts::{
    Alert, ELEVATED_RESTING_HR_BPM, LOW_STEPS_THRESHOLD, SHORT_SLEEP_HOURS, evaluate_alerts,
};
pub use decorate::{DEFAULT_TIMEZONE, RenderOptions, decorate, resolve_timezone};
pub use error::{ReportError, Result};
pub use format::format_numeric;
pub use render::{Dashboard, build_dashboard, render_dashboard};
pub use stats::WeeklyAverages;
