//! Service-account key loading.

use std::fmt;
use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::{Result, StorageError};

/// Token endpoint used when a key file omits `token_uri`.
pub const DEFAULT_TOKEN_URI: &str = "https://oauth2.googleapis.com/token";

fn default_token_uri() -> String {
    DEFAULT_TOKEN_URI.to_string()
}

/// The fields of a Google service-account JSON key that token signing needs.
#[derive(Clone, Deserialize)]
pub struct ServiceAccountKey {
    pub client_email: String,
    pub private_key: String,
    #[serde(default)]
    pub private_key_id: Option<String>,
    #[serde(default = "default_token_uri")]
    pub token_uri: String,
}

impl fmt::Debug for ServiceAccountKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ServiceAccountKey")
            .field("client_email", &self.client_email)
            .field("private_key_id", &self.private_key_id)
            .field("token_uri", &self.token_uri)
            .finish_non_exhaustive()
    }
}

impl ServiceAccountKey {
    /// Parses a key from its JSON text.
    pub fn from_json(json: &str) -> Result<Self> {
        let key: Self = serde_json::from_str(json)?;
        if key.client_email.trim().is_empty() {
            return Err(StorageError::InvalidCredentials(
                "client_email is empty".to_string(),
            ));
        }
        if !key.private_key.contains("PRIVATE KEY") {
            return Err(StorageError::InvalidCredentials(
                "private_key is not a PEM key".to_string(),
            ));
        }
        Ok(key)
    }

    /// Reads and parses a key file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let json = fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Loads the key from `path` when that file exists, otherwise from
    /// `inline` JSON.
    ///
    /// # Errors
    ///
    /// [`StorageError::CredentialsNotFound`] when neither source is available.
    pub fn load(path: &Path, inline: Option<&str>) -> Result<Self> {
        if path.is_file() {
            tracing::debug!(path = %path.display(), "loading service account key file");
            return Self::from_file(path);
        }
        match inline.map(str::trim).filter(|json| !json.is_empty()) {
            Some(json) => {
                tracing::debug!("loading inline service account key");
                Self::from_json(json)
            }
            None => Err(StorageError::CredentialsNotFound {
                path: path.to_path_buf(),
            }),
        }
    }
}
