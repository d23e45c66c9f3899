//! Infrastructure layer with external service adapters.

/// Mock dashboard API client.
pub mod api;
/// Application configuration.
pub mod config;
/// Data port selection.
pub mod data_source;
/// Local JSON fixture.
pub mod fixture;

pub use api::HttpDashboardClient;
pub use config::{AppConfig, CliArgs, EndpointLayout, LogLevel, StorageManager};
pub use data_source::create_data_port;
pub use fixture::FixtureDataSource;
