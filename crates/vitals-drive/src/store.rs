//! Storage abstraction used by the pipeline.

use vitals_ingest::ACCEPTED_MIME_TYPES;
use vitals_model::CandidateFile;

use crate::error::Result;

/// Which files to list: a parent folder plus an accepted MIME set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FolderQuery {
    pub folder_id: String,
    pub mime_types: Vec<String>,
}

impl FolderQuery {
    /// Query for CSV-typed files directly inside `folder_id`.
    pub fn csv_in(folder_id: impl Into<String>) -> Self {
        Self {
            folder_id: folder_id.into(),
            mime_types: ACCEPTED_MIME_TYPES.iter().map(|m| (*m).to_string()).collect(),
        }
    }

    /// Renders the Drive `q` search expression.
    ///
    /// Trashed files are excluded. An empty MIME set means any type.
    pub fn to_drive_query(&self) -> String {
        let mut q = format!(
            "'{}' in parents and trashed=false",
            escape(&self.folder_id)
        );
        if !self.mime_types.is_empty() {
            let mimes: Vec<String> = self
                .mime_types
                .iter()
                .map(|m| format!("mimeType='{}'", escape(m)))
                .collect();
            q.push_str(&format!(" and ({})", mimes.join(" or ")));
        }
        q
    }
}

fn escape(value: &str) -> String {
    value.replace('\\', "\\\\").replace('\'', "\\'")
}

/// Read-only file storage.
///
/// Implementations are called from blocking worker threads, one request at
/// a time each, and hold no per-request state.
pub trait FileStore: Send + Sync {
    /// Lists files matching `query`, in whatever order storage returns them.
    fn list_files(&self, query: &FolderQuery) -> Result<Vec<CandidateFile>>;

    /// Downloads the full content of one file.
    fn download(&self, file_id: &str) -> Result<Vec<u8>>;
}
