//! CSV parsing into a text-typed DataFrame.

use std::io::Cursor;

use polars::prelude::*;

use crate::error::{IngestError, Result};

use super::encoding::decode_text;

/// Reads CSV bytes into a Polars DataFrame.
///
/// The first row is the header. Schema inference is disabled so every
/// column is a string column; coercion happens per cell during
/// normalization, where bad values are nulled instead of failing the load.
/// Rows with extra fields are truncated, short rows are padded with nulls.
pub fn read_csv_bytes(bytes: &[u8]) -> Result<DataFrame> {
    let text = decode_text(bytes)?;
    if text.trim().is_empty() {
        return Err(IngestError::EmptyCsv);
    }

    let df = CsvReadOptions::default()
        .with_has_header(true)
        .with_infer_schema_length(Some(0))
        .map_parse_options(|opts| opts.with_truncate_ragged_lines(true))
        .into_reader_with_file_handle(Cursor::new(text.into_owned().into_bytes()))
        .finish()
        .map_err(|e| IngestError::CsvParse {
            message: e.to_string(),
        })?;

    tracing::debug!(rows = df.height(), columns = df.width(), "parsed CSV");
    Ok(df)
}
