//! Normalization of health exports into canonical daily records.
//!
//! Given a table with unknown column names, this crate:
//! - maps columns onto canonical metrics (via `vitals-map`)
//! - parses each row's date, dropping rows where that fails
//! - coerces metric cells to numbers, nulling anything blank or non-numeric
//! - sorts by date and keeps the trailing [`WINDOW_DAYS`](vitals_model::WINDOW_DAYS) records
//!
//! Only a missing date column is an error. Bad cells never are.

mod datetime;
mod error;
mod executor;
mod numeric;

pub use datetime::parse_date;
pub use error::{NormalizeError, Result};
pub use executor::{normalize, normalize_csv_bytes};
pub use numeric::parse_f64;
