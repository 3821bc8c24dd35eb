//! Google Drive access for health exports.
//!
//! The pipeline only needs two things from storage: list the files in a
//! folder, and download one of them. [`FileStore`] captures that so request
//! handlers can be tested against an in-memory fake; [`DriveClient`] is the
//! real implementation over the Drive v3 REST API, authenticated with a
//! service-account key.

mod auth;
mod client;
mod credentials;
mod error;
mod store;

pub use auth::{DRIVE_READONLY_SCOPE, fetch_access_token, signed_assertion};
pub use client::{DOWNLOAD_CHUNK_SIZE, DRIVE_API_URL, DriveClient};
pub use credentials::{DEFAULT_TOKEN_URI, ServiceAccountKey};
pub use error::{Result, StorageError};
pub use store::{FileStore, FolderQuery};
