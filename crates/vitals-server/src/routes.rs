//! HTTP routes.

use std::sync::Arc;

use axum::extract::{Query, State};
use axum::http::{HeaderMap, Uri, header};
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use tower_http::trace::TraceLayer;
use vitals_drive::FileStore;
use vitals_ingest::parse_modified_time;
use vitals_model::HealthRecord;
use vitals_report::{RenderOptions, render_dashboard, resolve_timezone};

use crate::config::AppConfig;
use crate::error::ApiError;
use crate::pipeline::{self, LoadedRecords};

/// Header carrying the shared secret.
pub const API_KEY_HEADER: &str = "x-api-key";

/// Handles shared by every request: the storage client and read-only config.
#[derive(Clone)]
pub struct AppState {
    store: Arc<dyn FileStore>,
    config: Arc<AppConfig>,
}

impl AppState {
    pub fn new(store: Arc<dyn FileStore>, config: AppConfig) -> Self {
        Self {
            store,
            config: Arc::new(config),
        }
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/healthz", get(healthz))
        .route("/latest-health", get(latest_health))
        .route("/daily-dashboard", get(daily_dashboard))
        .route("/daily-dashboard.json", get(daily_dashboard_json))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Query parameters of the dashboard routes.
#[derive(Debug, Default, Deserialize)]
pub struct DashboardParams {
    pub tz: Option<String>,
    pub force_today: Option<String>,
}

#[derive(Debug, Serialize)]
struct DashboardContent {
    content: String,
}

/// Accepts `1`, `true` and `yes`, ignoring case.
pub fn is_truthy(value: Option<&str>) -> bool {
    value.is_some_and(|v| {
        let v = v.trim();
        v == "1" || v.eq_ignore_ascii_case("true") || v.eq_ignore_ascii_case("yes")
    })
}

async fn healthz() -> &'static str {
    "ok"
}

async fn latest_health(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<Vec<HealthRecord>>, ApiError> {
    authorize(&state, &headers)?;
    let loaded = load(&state).await?;
    Ok(Json(loaded.records))
}

async fn daily_dashboard(
    State(state): State<AppState>,
    headers: HeaderMap,
    uri: Uri,
) -> Result<impl IntoResponse, ApiError> {
    let text = dashboard_text(&state, &headers, &uri).await?;
    Ok((
        [
            (header::CONTENT_TYPE, "text/plain; charset=utf-8"),
            (header::CACHE_CONTROL, "no-store"),
        ],
        text,
    ))
}

async fn daily_dashboard_json(
    State(state): State<AppState>,
    headers: HeaderMap,
    uri: Uri,
) -> Result<Json<DashboardContent>, ApiError> {
    let content = dashboard_text(&state, &headers, &uri).await?;
    Ok(Json(DashboardContent { content }))
}

fn authorize(state: &AppState, headers: &HeaderMap) -> Result<(), ApiError> {
    let presented = headers
        .get(API_KEY_HEADER)
        .and_then(|value| value.to_str().ok());
    if state.config.is_authorized(presented) {
        Ok(())
    } else {
        Err(ApiError::Unauthorized)
    }
}

/// Runs the blocking storage pipeline off the async runtime.
async fn load(state: &AppState) -> Result<LoadedRecords, ApiError> {
    let folder_id = state
        .config
        .folder_id
        .clone()
        .ok_or(ApiError::MissingFolderId)?;
    let store = Arc::clone(&state.store);

    let loaded = tokio::task::spawn_blocking(move || {
        pipeline::load_records(store.as_ref(), &folder_id)
    })
    .await
    .map_err(|e| ApiError::Internal(format!("pipeline task failed: {e}")))??;
    Ok(loaded)
}

/// Parses dashboard parameters from the request URI.
///
/// Runs after [`authorize`] so unauthenticated requests never see a query error.
fn dashboard_params(uri: &Uri) -> Result<DashboardParams, ApiError> {
    Query::<DashboardParams>::try_from_uri(uri)
        .map(|Query(params)| params)
        .map_err(|rejection| ApiError::BadQuery(rejection.body_text()))
}

async fn dashboard_text(
    state: &AppState,
    headers: &HeaderMap,
    uri: &Uri,
) -> Result<String, ApiError> {
    authorize(state, headers)?;
    let params = dashboard_params(uri)?;
    let loaded = load(state).await?;

    let timezone = resolve_timezone(params.tz.as_deref(), state.config.default_timezone);
    let options = RenderOptions::new(timezone, Utc::now())
        .with_force_today(is_truthy(params.force_today.as_deref()))
        .with_source_modified(parse_modified_time(&loaded.file.modified_time));

    Ok(render_dashboard(&loaded.records, &options)?)
}
