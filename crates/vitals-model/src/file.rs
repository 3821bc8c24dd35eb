//! Folder listing entries.

use serde::{Deserialize, Serialize};

/// One file returned by a storage folder listing.
///
/// Field names follow the Drive v3 `files` resource so a listing response
/// deserializes directly. `modified_time` stays a raw string; parsing it
/// (and recovering from bad values) is the selector's job.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CandidateFile {
    /// Opaque storage identifier.
    pub id: String,
    /// File name, possibly embedding the data date.
    #[serde(default)]
    pub name: String,
    /// Last modification time (ISO-8601, UTC).
    #[serde(default)]
    pub modified_time: String,
    /// MIME type reported by storage.
    #[serde(default)]
    pub mime_type: String,
}

impl CandidateFile {
    /// Creates a candidate with the given id, name and modification time.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        modified_time: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            modified_time: modified_time.into(),
            mime_type: "text/csv".to_string(),
        }
    }
}
