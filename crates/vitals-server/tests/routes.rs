use std::collections::HashMap;
use std::sync::Arc;

use axum::Router;
use axum::body::{Body, to_bytes};
use axum::http::{Request, StatusCode, header};
use serde_json::Value;
use tower::ServiceExt;
use vitals_drive::{FileStore, FolderQuery, StorageError};
use vitals_model::CandidateFile;
use vitals_report::DEFAULT_TIMEZONE;
use vitals_server::{AppConfig, AppState, router};

const API_KEY: &str = "test-key";

const WEEK_CSV: &str = "Date,Step Count,Sleep Duration (hr),Active Energy (kcal),Resting Heart Rate (bpm),体重(kg)\n\
2025-08-19,8000,7.0,450,62,60.5\n\
2025-08-20,9500,5.5,520,64,60.4\n\
2025-08-21,7000,,380,,\n\
2025-08-22,6200,6.8,300,63,60.3\n\
2025-08-23,10400,5.9,610,66,60.2\n\
2025-08-24,4100,7.2,250,70,\n\
2025-08-25,3000,6.1,320,75,60.1\n";

#[derive(Default)]
struct FakeStore {
    files: Vec<CandidateFile>,
    contents: HashMap<String, Vec<u8>>,
    list_error: Option<(u16, String)>,
}

impl FakeStore {
    fn with_file(mut self, file: CandidateFile, body: &str) -> Self {
        self.contents.insert(file.id.clone(), body.as_bytes().to_vec());
        self.files.push(file);
        self
    }
}

impl FileStore for FakeStore {
    fn list_files(&self, query: &FolderQuery) -> vitals_drive::Result<Vec<CandidateFile>> {
        assert_eq!(query.folder_id, "folder-1");
        if let Some((status, message)) = &self.list_error {
            return Err(StorageError::Api {
                status: *status,
                message: message.clone(),
            });
        }
        Ok(self.files.clone())
    }

    fn download(&self, file_id: &str) -> vitals_drive::Result<Vec<u8>> {
        self.contents
            .get(file_id)
            .cloned()
            .ok_or_else(|| StorageError::Api {
                status: 404,
                message: format!("File not found: {file_id}"),
            })
    }
}

fn week_store() -> FakeStore {
    FakeStore::default()
        .with_file(
            CandidateFile::new("old", "health_2025-08-18.csv", "2025-08-27T00:00:00Z"),
            "date,steps\n2025-08-18,1\n",
        )
        .with_file(
            CandidateFile::new("new", "health_2025-08-25.csv", "2025-08-25T21:04:00Z"),
            WEEK_CSV,
        )
}

fn app(store: FakeStore) -> Router {
    let config = AppConfig::new(
        Some(API_KEY.to_string()),
        Some("folder-1".to_string()),
        DEFAULT_TIMEZONE,
    );
    router(AppState::new(Arc::new(store), config))
}

fn get(uri: &str, key: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().uri(uri).method("GET");
    if let Some(key) = key {
        builder = builder.header("X-API-Key", key);
    }
    builder.body(Body::empty()).expect("request")
}

async fn body_text(response: axum::response::Response) -> String {
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body bytes");
    String::from_utf8(bytes.to_vec()).expect("utf-8 body")
}

async fn body_json(response: axum::response::Response) -> Value {
    serde_json::from_str(&body_text(response).await).expect("json body")
}

#[tokio::test]
async fn healthz_needs_no_key() {
    let response = app(FakeStore::default())
        .oneshot(get("/healthz", None))
        .await
        .expect("response");

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_text(response).await, "ok");
}

#[tokio::test]
async fn protected_routes_reject_missing_or_wrong_key() {
    for uri in ["/latest-health", "/daily-dashboard", "/daily-dashboard.json"] {
        for key in [None, Some("wrong")] {
            let response = app(week_store()).oneshot(get(uri, key)).await.expect("response");
            assert_eq!(response.status(), StatusCode::UNAUTHORIZED, "{uri}");
            assert_eq!(body_json(response).await["error"], "Unauthorized");
        }
    }
}

#[tokio::test]
async fn unconfigured_key_rejects_everyone() {
    let config = AppConfig::new(None, Some("folder-1".to_string()), DEFAULT_TIMEZONE);
    let app = router(AppState::new(Arc::new(week_store()), config));

    let response = app
        .oneshot(get("/latest-health", Some("")))
        .await
        .expect("response");
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn latest_health_returns_week_from_newest_export() {
    let response = app(week_store())
        .oneshot(get("/latest-health", Some(API_KEY)))
        .await
        .expect("response");

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    let records = json.as_array().expect("array");
    assert_eq!(records.len(), 7);

    let first = &records[0];
    assert_eq!(first["date"], "2025-08-19");
    assert_eq!(first["steps"], 8000.0);
    assert_eq!(first["weight_kg"], 60.5);

    let gap = &records[2];
    assert_eq!(gap["date"], "2025-08-21");
    assert!(gap["sleep_hours"].is_null());
    assert!(gap["resting_hr_bpm"].is_null());
    assert_eq!(gap["active_energy_kcal"], 380.0);

    assert_eq!(records[6]["date"], "2025-08-25");
}

#[tokio::test]
async fn empty_folder_is_plain_not_found_error() {
    let response = app(FakeStore::default())
        .oneshot(get("/latest-health", Some(API_KEY)))
        .await
        .expect("response");

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        body_json(response).await["error"],
        "no CSV files found in the configured folder"
    );
}

#[tokio::test]
async fn storage_failures_are_wrapped() {
    let store = FakeStore {
        list_error: Some((403, "The caller does not have permission".to_string())),
        ..FakeStore::default()
    };
    let response = app(store)
        .oneshot(get("/latest-health", Some(API_KEY)))
        .await
        .expect("response");

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        body_json(response).await["error"],
        "failed to fetch or read CSV: API error 403: The caller does not have permission"
    );
}

#[tokio::test]
async fn missing_date_column_is_wrapped() {
    let store = FakeStore::default().with_file(
        CandidateFile::new("x", "health_2025-08-25.csv", "2025-08-25T00:00:00Z"),
        "steps,weight\n100,60\n",
    );
    let response = app(store)
        .oneshot(get("/latest-health", Some(API_KEY)))
        .await
        .expect("response");

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let error = body_json(response).await["error"].as_str().unwrap().to_string();
    assert!(error.starts_with("failed to fetch or read CSV: no date column found"));
}

#[tokio::test]
async fn missing_folder_id_is_configuration_error() {
    let config = AppConfig::new(Some(API_KEY.to_string()), None, DEFAULT_TIMEZONE);
    let app = router(AppState::new(Arc::new(week_store()), config));

    let response = app
        .oneshot(get("/daily-dashboard", Some(API_KEY)))
        .await
        .expect("response");

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        body_json(response).await["error"],
        "failed to fetch or read CSV: GDRIVE_FOLDER_ID is not configured"
    );
}

#[tokio::test]
async fn malformed_query_is_rejected_after_auth_as_json() {
    let uri = "/daily-dashboard.json?tz=Asia/Tokyo&tz=UTC";

    for key in [None, Some("wrong")] {
        let response = app(week_store()).oneshot(get(uri, key)).await.expect("response");
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(body_json(response).await["error"], "Unauthorized");
    }

    let response = app(week_store())
        .oneshot(get(uri, Some(API_KEY)))
        .await
        .expect("response");
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let error = body_json(response).await["error"].as_str().unwrap().to_string();
    assert!(error.starts_with("invalid query string: "), "{error}");
}

#[tokio::test]
async fn daily_dashboard_is_uncached_text() {
    let response = app(week_store())
        .oneshot(get("/daily-dashboard", Some(API_KEY)))
        .await
        .expect("response");

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()[header::CONTENT_TYPE],
        "text/plain; charset=utf-8"
    );
    assert_eq!(response.headers()[header::CACHE_CONTROL], "no-store");

    let text = body_text(response).await;
    let mut lines = text.lines();
    assert_eq!(lines.next(), Some("Last updated: 2025-08-26 06:04 (Asia/Tokyo)"));
    assert_eq!(lines.next(), Some(""));
    assert_eq!(lines.next(), Some("# Health Dashboard 2025-08-25"));
    assert!(text.contains("- Short sleep: 2 nights under 6.0 h"));
    assert!(text.contains("- Elevated resting heart rate: 75 bpm (75 or above)"));
}

#[tokio::test]
async fn dashboard_json_honours_timezone_and_force_today() {
    let response = app(week_store())
        .oneshot(get(
            "/daily-dashboard.json?tz=Europe/London&force_today=yes",
            Some(API_KEY),
        ))
        .await
        .expect("response");

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    let content = json["content"].as_str().expect("content string");

    assert!(content.starts_with("Last updated: 2025-08-25 22:04 (Europe/London)\n\n"));
    assert!(content.contains("(in progress)"));
    assert!(!content.contains("# Health Dashboard 2025-08-25\n"));
    assert!(content.contains("## Weekly summary (2025-08-19 to 2025-08-25)"));
}

#[tokio::test]
async fn unknown_timezone_falls_back_to_default() {
    let response = app(week_store())
        .oneshot(get("/daily-dashboard.json?tz=Not/AZone", Some(API_KEY)))
        .await
        .expect("response");

    let json = body_json(response).await;
    let content = json["content"].as_str().expect("content string");
    assert!(content.starts_with("Last updated: 2025-08-26 06:04 (Asia/Tokyo)"));
}

#[tokio::test]
async fn dashboard_of_undated_export_is_empty_data_error() {
    let store = FakeStore::default().with_file(
        CandidateFile::new("x", "export.csv", "2025-08-25T00:00:00Z"),
        "date,steps\nnot a date,100\n",
    );
    let response = app(store)
        .oneshot(get("/daily-dashboard", Some(API_KEY)))
        .await
        .expect("response");

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        body_json(response).await["error"],
        "no health records available to render a dashboard"
    );
}
