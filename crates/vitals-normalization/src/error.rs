//! Error types for normalization.

use thiserror::Error;
use vitals_ingest::IngestError;

/// Errors that abort normalization of a table.
#[derive(Debug, Error)]
pub enum NormalizeError {
    /// No column could be identified as the date column.
    #[error("no date column found in CSV (columns: {})", columns.join(", "))]
    MissingDateColumn { columns: Vec<String> },

    /// The raw bytes could not be loaded as a table.
    #[error(transparent)]
    Ingest(#[from] IngestError),

    /// Failed DataFrame operation.
    #[error("DataFrame operation failed: {message}")]
    DataFrame { message: String },
}

impl From<polars::prelude::PolarsError> for NormalizeError {
    fn from(err: polars::prelude::PolarsError) -> Self {
        Self::DataFrame {
            message: err.to_string(),
        }
    }
}

/// Result type for normalization operations.
pub type Result<T> = std::result::Result<T, NormalizeError>;
