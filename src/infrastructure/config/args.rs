use super::app_config::{EndpointLayout, LogLevel};
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    name = "garagedash",
    version,
    about = "A rewards dashboard for the terminal",
    long_about = None
)]
/// Command line arguments.
pub struct CliArgs {
    /// Configuration file path.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Log file path.
    #[arg(long, value_name = "PATH")]
    pub log_path: Option<PathBuf>,

    /// Log verbosity level.
    #[arg(long, value_enum)]
    pub log_level: Option<LogLevel>,

    /// Base URL of the mock API.
    #[arg(long, value_name = "URL", env = "GARAGEDASH_BASE_URL")]
    pub base_url: Option<String>,

    /// Endpoint layout of the mock API.
    #[arg(long, value_enum)]
    pub endpoints: Option<EndpointLayout>,

    /// Read data from a local JSON fixture instead of the API.
    #[arg(long, value_name = "PATH")]
    pub fixture: Option<PathBuf>,

    /// Enable `TachyonFX` animations and the staged loading delay.
    #[arg(long)]
    pub enable_animations: Option<bool>,

    /// Accent color (name or hex code).
    #[arg(long)]
    pub accent_color: Option<String>,
}
