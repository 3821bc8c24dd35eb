//! Storage → selection → normalization, run once per request.

use thiserror::Error;
use vitals_drive::{FileStore, FolderQuery, StorageError};
use vitals_ingest::{IngestError, select_latest};
use vitals_model::{CandidateFile, HealthRecord};
use vitals_normalization::{NormalizeError, normalize_csv_bytes};

#[derive(Debug, Error)]
pub enum PipelineError {
    #[error(transparent)]
    Storage(#[from] StorageError),
    #[error(transparent)]
    Ingest(#[from] IngestError),
    #[error(transparent)]
    Normalize(#[from] NormalizeError),
}

impl PipelineError {
    /// True when the folder held no candidate export.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Ingest(IngestError::NoCandidateFiles))
    }
}

/// The selected export and its raw content.
#[derive(Debug, Clone)]
pub struct LatestCsv {
    pub file: CandidateFile,
    pub bytes: Vec<u8>,
}

/// The selected export and its normalized window.
#[derive(Debug, Clone)]
pub struct LoadedRecords {
    pub file: CandidateFile,
    pub records: Vec<HealthRecord>,
}

/// Lists `folder_id`, picks the latest export and downloads it.
pub fn fetch_latest(store: &dyn FileStore, folder_id: &str) -> Result<LatestCsv, PipelineError> {
    let files = store.list_files(&FolderQuery::csv_in(folder_id))?;
    let file = select_latest(&files)?.clone();
    let bytes = store.download(&file.id)?;
    Ok(LatestCsv { file, bytes })
}

/// [`fetch_latest`] followed by decoding and normalization.
pub fn load_records(store: &dyn FileStore, folder_id: &str) -> Result<LoadedRecords, PipelineError> {
    let LatestCsv { file, bytes } = fetch_latest(store, folder_id)?;
    let records = normalize_csv_bytes(&bytes)?;
    tracing::info!(file = %file.name, records = records.len(), "loaded health records");
    Ok(LoadedRecords { file, records })
}
