//! Data model types for daily health metrics.
//!
//! This crate holds the plain data shared by every stage of the pipeline:
//! - [`CandidateFile`]: one entry of a storage folder listing
//! - [`HealthRecord`]: one calendar day of canonical metrics
//! - [`Metric`] and [`ColumnMapping`]: canonical keys and the source columns they resolve to
//!
//! # Example
//!
//! ```
//! use chrono::NaiveDate;
//! use vitals_model::HealthRecord;
//!
//! let mut record = HealthRecord::new(NaiveDate::from_ymd_opt(2025, 8, 25).unwrap());
//! record.steps = Some(8000.0);
//!
//! assert_eq!(record.sleep_hours, None);
//! ```

pub mod file;
pub mod mapping;
pub mod record;

pub use file::CandidateFile;
pub use mapping::{ColumnMapping, Metric};
pub use record::HealthRecord;

/// Maximum number of daily records kept after normalization.
pub const WINDOW_DAYS: usize = 7;
