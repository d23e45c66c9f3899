//! Application configuration.

/// Application configuration.
pub mod app_config;
/// Command line arguments.
pub mod args;
/// Persisted UI state.
pub mod state_config;
/// Config and state files on disk.
pub mod storage;

pub use app_config::{
    AppConfig, DataSourceConfig, EndpointLayout, LogLevel, ThemeConfig, UiConfig,
};
pub use args::CliArgs;
pub use state_config::StateConfig;
pub use storage::{ConfigError, StorageManager};
