//! Health data ingestion utilities.
//!
//! This crate turns what the storage backend hands us into something the
//! normalizer can work with.
//!
//! # Features
//!
//! - **Latest-File Selection**: Pick "today's" export from a folder listing,
//!   preferring dates embedded in file names over modification times
//! - **CSV Loading**: Decode raw bytes (UTF-8, UTF-16, Shift_JIS) into a
//!   Polars DataFrame with every column kept as text
//!
//! # Example
//!
//! ```ignore
//! use vitals_ingest::{read_csv_bytes, select_latest};
//!
//! let latest = select_latest(&files)?;
//! let df = read_csv_bytes(&store.download(&latest.id)?)?;
//! ```

mod csv;
mod discovery;
mod error;

// === Error Types ===
pub use error::{IngestError, Result};

// === CSV Reading ===
pub use csv::{decode_text, read_csv_bytes};

// === File Discovery ===
pub use discovery::{
    ACCEPTED_MIME_TYPES, is_accepted_mime_type, parse_modified_time, parse_name_date,
    select_latest,
};
