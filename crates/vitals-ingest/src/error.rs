//! Error types for health data ingestion.

use thiserror::Error;

/// Errors that can occur during data ingestion operations.
#[derive(Debug, Error)]
pub enum IngestError {
    // === Discovery Errors ===
    /// The folder listing contained no candidate files.
    #[error("no CSV files found in the configured folder")]
    NoCandidateFiles,

    // === CSV Parsing Errors ===
    /// Input was empty or whitespace only.
    #[error("CSV file is empty")]
    EmptyCsv,

    /// Failed to parse CSV with Polars.
    #[error("failed to parse CSV: {message}")]
    CsvParse { message: String },

    /// Input used an encoding that could not be decoded.
    #[error("could not decode CSV as {encoding}")]
    UnsupportedEncoding { encoding: &'static str },
}

impl From<polars::prelude::PolarsError> for IngestError {
    fn from(err: polars::prelude::PolarsError) -> Self {
        Self::CsvParse {
            message: err.to_string(),
        }
    }
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;
