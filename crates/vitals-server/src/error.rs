//! Request failures and their JSON rendering.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use thiserror::Error;
use vitals_report::ReportError;

use crate::pipeline::PipelineError;

/// Prefix for storage and parsing failures.
pub const FETCH_ERROR_PREFIX: &str = "failed to fetch or read CSV";

/// Every way a request can fail. Rendered as `{"error": "<message>"}`.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Unauthorized")]
    Unauthorized,

    #[error("GDRIVE_FOLDER_ID is not configured")]
    MissingFolderId,

    /// Query string that does not fit the route's parameters.
    #[error("invalid query string: {0}")]
    BadQuery(String),

    #[error(transparent)]
    Pipeline(#[from] PipelineError),

    #[error(transparent)]
    Report(#[from] ReportError),

    #[error("{0}")]
    Internal(String),
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Unauthorized => StatusCode::UNAUTHORIZED,
            Self::BadQuery(_) => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Client-facing message. "No files" is passed through as-is; a missing
    /// folder id and other pipeline failures carry [`FETCH_ERROR_PREFIX`].
    pub fn message(&self) -> String {
        match self {
            Self::Pipeline(err) if !err.is_not_found() => format!("{FETCH_ERROR_PREFIX}: {err}"),
            Self::MissingFolderId => format!("{FETCH_ERROR_PREFIX}: {self}"),
            other => other.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = self.message();
        if status.is_server_error() {
            tracing::error!(%status, error = %message, "request failed");
        } else {
            tracing::warn!(%status, "request rejected");
        }
        (status, Json(ErrorBody { error: message })).into_response()
    }
}
