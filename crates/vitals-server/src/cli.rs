//! CLI argument definitions.

use std::net::IpAddr;
use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{InfoLevel, Verbosity};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "health-vitals",
    version,
    about = "Serve a weekly health dashboard from the latest Drive CSV export",
    long_about = "Serve a weekly health dashboard from the latest Drive CSV export.\n\n\
                  Picks the newest export in a Google Drive folder, normalizes its\n\
                  columns, keeps the last seven days, and serves them as JSON or text."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for warnings only).
    #[command(flatten)]
    pub verbosity: Verbosity<InfoLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format.
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the HTTP service.
    Serve(ServeArgs),

    /// Render the dashboard for a local CSV export.
    Dashboard(DashboardArgs),
}

#[derive(Parser)]
pub struct ServeArgs {
    /// Shared secret expected in the X-API-Key header.
    #[arg(long = "api-key", env = "API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Google Drive folder holding the exports.
    #[arg(long = "folder-id", env = "GDRIVE_FOLDER_ID")]
    pub folder_id: Option<String>,

    /// Service-account key file.
    #[arg(
        long = "service-account-file",
        env = "SERVICE_ACCOUNT_FILE",
        value_name = "PATH",
        default_value = "/etc/secrets/gcp-service-account.json"
    )]
    pub service_account_file: PathBuf,

    /// Inline service-account key JSON, used when the key file does not exist.
    #[arg(
        long = "service-account-json",
        env = "SERVICE_ACCOUNT_JSON",
        hide_env_values = true
    )]
    pub service_account_json: Option<String>,

    /// Address to bind.
    #[arg(long = "host", env = "HOST", default_value = "0.0.0.0")]
    pub host: IpAddr,

    /// Port to bind.
    #[arg(long = "port", env = "PORT", default_value_t = 10000)]
    pub port: u16,

    /// Dashboard timezone when a request does not name a valid one.
    #[arg(long = "default-tz", env = "DASHBOARD_TZ", value_name = "TZ")]
    pub default_tz: Option<String>,
}

#[derive(Parser)]
pub struct DashboardArgs {
    /// CSV export to render.
    #[arg(long = "csv", value_name = "PATH")]
    pub csv: PathBuf,

    /// Timezone for "today" (default Asia/Tokyo).
    #[arg(long = "tz", value_name = "TZ")]
    pub tz: Option<String>,

    /// Show today's date in the header, marked as in progress.
    #[arg(long = "force-today")]
    pub force_today: bool,

    /// Print the normalized records as JSON instead of the dashboard.
    #[arg(long = "json")]
    pub json: bool,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
