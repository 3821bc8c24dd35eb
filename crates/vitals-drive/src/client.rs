//! Drive v3 REST client.

use std::io::Read;

use reqwest::blocking::{Client, Response};
use reqwest::header::{HeaderMap, HeaderValue, USER_AGENT};
use serde::Deserialize;
use vitals_model::CandidateFile;

use crate::auth::fetch_access_token;
use crate::credentials::ServiceAccountKey;
use crate::error::{Result, StorageError};
use crate::store::{FileStore, FolderQuery};

/// Drive v3 API base URL.
pub const DRIVE_API_URL: &str = "https://www.googleapis.com/drive/v3";

/// Download read size.
pub const DOWNLOAD_CHUNK_SIZE: usize = 1024 * 1024;

const LIST_FIELDS: &str = "files(id,name,modifiedTime,createdTime,size,mimeType)";
const LIST_PAGE_SIZE: &str = "100";

const USER_AGENT_VALUE: &str = concat!("health-vitals/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Deserialize)]
struct FileList {
    #[serde(default)]
    files: Vec<CandidateFile>,
}

/// Blocking Drive client authenticated with a service-account key.
#[derive(Debug, Clone)]
pub struct DriveClient {
    http: Client,
    key: ServiceAccountKey,
    base_url: String,
}

impl DriveClient {
    pub fn new(key: ServiceAccountKey) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(USER_AGENT, HeaderValue::from_static(USER_AGENT_VALUE));

        let http = Client::builder().default_headers(headers).build()?;
        Ok(Self {
            http,
            key,
            base_url: DRIVE_API_URL.to_string(),
        })
    }

    /// Points the client at another API root.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    /// Service account the client authenticates as.
    pub fn account(&self) -> &str {
        &self.key.client_email
    }
}

impl FileStore for DriveClient {
    fn list_files(&self, query: &FolderQuery) -> Result<Vec<CandidateFile>> {
        let token = fetch_access_token(&self.http, &self.key)?;
        let q = query.to_drive_query();
        let url = format!("{}/files", self.base_url);

        tracing::debug!(folder = %query.folder_id, "listing files");

        let response = self
            .http
            .get(&url)
            .bearer_auth(token)
            .query(&[
                ("q", q.as_str()),
                ("fields", LIST_FIELDS),
                ("orderBy", "modifiedTime desc"),
                ("pageSize", LIST_PAGE_SIZE),
                ("supportsAllDrives", "true"),
                ("includeItemsFromAllDrives", "true"),
            ])
            .send()?;
        let list: FileList = check_status(response)?.json()?;

        tracing::info!(folder = %query.folder_id, count = list.files.len(), "listed files");
        Ok(list.files)
    }

    fn download(&self, file_id: &str) -> Result<Vec<u8>> {
        let token = fetch_access_token(&self.http, &self.key)?;
        let url = format!("{}/files/{}", self.base_url, file_id);

        let response = self
            .http
            .get(&url)
            .bearer_auth(token)
            .query(&[("alt", "media"), ("supportsAllDrives", "true")])
            .send()?;
        let bytes = read_chunked(check_status(response)?)?;

        tracing::info!(file_id, bytes = bytes.len(), "downloaded file");
        Ok(bytes)
    }
}

fn read_chunked(mut response: Response) -> Result<Vec<u8>> {
    let mut bytes = Vec::new();
    let mut chunk = vec![0u8; DOWNLOAD_CHUNK_SIZE];
    loop {
        let n = response.read(&mut chunk)?;
        if n == 0 {
            break;
        }
        bytes.extend_from_slice(&chunk[..n]);
    }
    Ok(bytes)
}

/// Turns a non-success response into [`StorageError::Api`].
fn check_status(response: Response) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().unwrap_or_default();
    Err(StorageError::Api {
        status: status.as_u16(),
        message: api_error_message(&body),
    })
}

/// Extracts `error.message` from a Google error body, falling back to the raw text.
fn api_error_message(body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| v["error"]["message"].as_str().map(str::to_string))
        .unwrap_or_else(|| body.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_message() {
        let body = r#"{"error": {"code": 404, "message": "File not found: xyz.", "errors": []}}"#;
        assert_eq!(api_error_message(body), "File not found: xyz.");
        assert_eq!(api_error_message(" Bad Gateway \n"), "Bad Gateway");
    }

    #[test]
    fn test_file_list_deserializes() {
        let body = r#"{"files": [
            {"id": "a", "name": "health_20250825.csv", "modifiedTime": "2025-08-25T21:04:11.000Z", "mimeType": "text/csv", "size": "10"},
            {"id": "b", "name": "old.csv", "modifiedTime": "2025-08-20T00:00:00Z", "mimeType": "text/csv"}
        ]}"#;
        let list: FileList = serde_json::from_str(body).unwrap();
        assert_eq!(list.files.len(), 2);
        assert_eq!(list.files[0].name, "health_20250825.csv");

        let empty: FileList = serde_json::from_str("{}").unwrap();
        assert!(empty.files.is_empty());
    }

    #[test]
    fn test_base_url_trims_slash() {
        let key = ServiceAccountKey {
            client_email: "reader@project.iam.gserviceaccount.com".to_string(),
            private_key: String::new(),
            private_key_id: None,
            token_uri: crate::DEFAULT_TOKEN_URI.to_string(),
        };
        let client = DriveClient::new(key).unwrap().with_base_url("http://localhost:9000/");
        assert_eq!(client.base_url, "http://localhost:9000");
        assert_eq!(client.account(), "reader@project.iam.gserviceaccount.com");
    }
}
