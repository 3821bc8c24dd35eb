//! Error types for storage access.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while authenticating, listing or downloading.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("HTTP: {0}")]
    Http(#[from] reqwest::Error),

    /// Storage answered with a non-success status.
    #[error("API error {status}: {message}")]
    Api { status: u16, message: String },

    #[error("service account key not found at {} and no inline key provided", path.display())]
    CredentialsNotFound { path: PathBuf },

    #[error("invalid service account key: {0}")]
    InvalidCredentials(String),

    #[error("token exchange failed: {0}")]
    TokenExchange(String),

    #[error("JWT: {0}")]
    Jwt(#[from] jsonwebtoken::errors::Error),

    #[error("IO: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for storage operations.
pub type Result<T> = std::result::Result<T, StorageError>;
