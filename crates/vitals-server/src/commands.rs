//! Subcommand implementations.

use std::fs;
use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use chrono::Utc;
use vitals_drive::{DriveClient, FileStore, ServiceAccountKey};
use vitals_normalization::normalize_csv_bytes;
use vitals_report::{DEFAULT_TIMEZONE, RenderOptions, render_dashboard, resolve_timezone};
use vitals_server::{AppConfig, AppState, router};

use crate::cli::{DashboardArgs, ServeArgs};

/// Loads credentials, then serves until Ctrl-C.
pub fn run_serve(args: &ServeArgs) -> Result<()> {
    let key = ServiceAccountKey::load(
        &args.service_account_file,
        args.service_account_json.as_deref(),
    )
    .context("loading service account credentials")?;
    tracing::info!(account = %key.client_email, "loaded service account");

    // The blocking client is created and finally dropped outside the runtime.
    let store: Arc<dyn FileStore> =
        Arc::new(DriveClient::new(key).context("building Drive client")?);

    let config = AppConfig::new(
        args.api_key.clone(),
        args.folder_id.clone(),
        resolve_timezone(args.default_tz.as_deref(), DEFAULT_TIMEZONE),
    );
    if config.api_key.is_none() {
        tracing::warn!("API_KEY is not set; protected routes will answer 401");
    }
    if config.folder_id.is_none() {
        tracing::warn!("GDRIVE_FOLDER_ID is not set; data routes will fail");
    }

    let state = AppState::new(Arc::clone(&store), config);
    let addr = SocketAddr::new(args.host, args.port);

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("starting async runtime")?;
    runtime.block_on(serve(state, addr))?;
    drop(runtime);
    drop(store);
    Ok(())
}

async fn serve(state: AppState, addr: SocketAddr) -> Result<()> {
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("binding {addr}"))?;
    tracing::info!(%addr, "listening");

    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("serving HTTP")?;

    tracing::info!("shut down");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(error) = tokio::signal::ctrl_c().await {
        tracing::error!(%error, "failed to listen for shutdown signal");
    }
}

/// Renders a local export to stdout.
pub fn run_dashboard(args: &DashboardArgs) -> Result<()> {
    let bytes =
        fs::read(&args.csv).with_context(|| format!("reading {}", args.csv.display()))?;
    let records = normalize_csv_bytes(&bytes)
        .with_context(|| format!("normalizing {}", args.csv.display()))?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&records)?);
        return Ok(());
    }

    let modified = fs::metadata(&args.csv)
        .and_then(|m| m.modified())
        .ok()
        .map(chrono::DateTime::<Utc>::from);
    let timezone = resolve_timezone(args.tz.as_deref(), DEFAULT_TIMEZONE);
    let options = RenderOptions::new(timezone, Utc::now())
        .with_force_today(args.force_today)
        .with_source_modified(modified);

    print!("{}", render_dashboard(&records, &options)?);
    Ok(())
}
