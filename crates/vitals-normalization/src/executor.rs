//! Table-to-records normalization.

use polars::prelude::*;
use vitals_map::build_column_mapping;
use vitals_model::{HealthRecord, Metric, WINDOW_DAYS};

use crate::datetime::parse_date;
use crate::error::{NormalizeError, Result};
use crate::numeric::parse_f64;

/// Reads one column as optional strings, whatever its dtype.
fn text_cells(df: &DataFrame, name: &str) -> Result<Vec<Option<String>>> {
    let column = df.column(name)?.cast(&DataType::String)?;
    let series = column.as_materialized_series();
    let chunked = series.str()?;
    Ok(chunked
        .iter()
        .map(|value| value.map(str::to_string))
        .collect())
}

/// Normalizes a raw table into at most [`WINDOW_DAYS`] daily records.
///
/// Rows whose date cannot be parsed are dropped. Metric cells that are
/// blank or non-numeric become `None`; values are otherwise kept as-is
/// (no unit conversion, no range checks). Records are sorted ascending by
/// date (duplicates keep source order) and only the trailing window is
/// returned. A table with no parseable dates yields an empty vector.
///
/// # Errors
///
/// [`NormalizeError::MissingDateColumn`] when no column resolves to the
/// date metric.
pub fn normalize(df: &DataFrame) -> Result<Vec<HealthRecord>> {
    let columns = df.get_column_names_str();
    let mapping = build_column_mapping(&columns);

    let Some(date_column) = mapping.column(Metric::Date) else {
        return Err(NormalizeError::MissingDateColumn {
            columns: columns.iter().map(|c| (*c).to_string()).collect(),
        });
    };
    tracing::debug!(?mapping, "resolved columns");

    let dates = text_cells(df, date_column)?;
    let mut metric_cells = Vec::new();
    for metric in Metric::NUMERIC {
        if let Some(column) = mapping.column(metric) {
            metric_cells.push((metric, text_cells(df, column)?));
        }
    }

    let mut records = Vec::with_capacity(dates.len());
    let mut dropped = 0usize;
    for (row, cell) in dates.iter().enumerate() {
        let Some(date) = cell.as_deref().and_then(parse_date) else {
            dropped += 1;
            continue;
        };
        let mut record = HealthRecord::new(date);
        for (metric, cells) in &metric_cells {
            let value = cells
                .get(row)
                .and_then(Option::as_deref)
                .and_then(parse_f64);
            record.set_value(*metric, value);
        }
        records.push(record);
    }

    if dropped > 0 {
        tracing::debug!(dropped, "skipped rows without a parseable date");
    }

    records.sort_by_key(|r| r.date);
    let start = records.len().saturating_sub(WINDOW_DAYS);
    let window = records.split_off(start);

    tracing::info!(
        rows = df.height(),
        kept = window.len(),
        "normalized health records"
    );
    Ok(window)
}

/// Decodes CSV bytes and normalizes them in one step.
pub fn normalize_csv_bytes(bytes: &[u8]) -> Result<Vec<HealthRecord>> {
    let df = vitals_ingest::read_csv_bytes(bytes)?;
    normalize(&df)
}
