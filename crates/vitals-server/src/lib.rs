//! Health dashboard service.
//!
//! Wires storage, normalization and rendering into an HTTP API:
//!
//! - `GET /healthz`: liveness
//! - `GET /latest-health`: the last seven days as JSON records
//! - `GET /daily-dashboard`: the weekly dashboard as plain text
//! - `GET /daily-dashboard.json`: the same text wrapped as `{"content": ...}`
//!
//! Every route except `/healthz` requires the `X-API-Key` header.

pub mod config;
pub mod error;
pub mod logging;
pub mod pipeline;
pub mod routes;

pub use config::AppConfig;
pub use error::ApiError;
pub use routes::{AppState, router};
