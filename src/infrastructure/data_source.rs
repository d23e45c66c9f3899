//! Data port selection.

use std::sync::Arc;

use tracing::info;

use crate::domain::errors::FetchError;
use crate::domain::ports::DashboardDataPort;
use crate::infrastructure::api::HttpDashboardClient;
use crate::infrastructure::config::DataSourceConfig;
use crate::infrastructure::fixture::FixtureDataSource;

/// Builds the data port described by the configuration.
///
/// A configured fixture wins over the HTTP API.
///
/// # Errors
/// Returns error if the HTTP client cannot be created.
pub fn create_data_port(config: &DataSourceConfig) -> Result<Arc<dyn DashboardDataPort>, FetchError> {
    if let Some(path) = &config.fixture {
        info!(path = %path.display(), "Using local fixture data source");
        return Ok(Arc::new(FixtureDataSource::new(path.clone())));
    }

    info!(
        base_url = %config.base_url,
        endpoints = %config.endpoints,
        "Using HTTP data source"
    );
    Ok(Arc::new(HttpDashboardClient::new(
        config.base_url.clone(),
        config.endpoints,
    )?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_default_config_builds_http_port() {
        assert!(create_data_port(&DataSourceConfig::default()).is_ok());
    }

    #[tokio::test]
    async fn test_fixture_takes_precedence() {
        let config = DataSourceConfig {
            fixture: Some(PathBuf::from("/nonexistent/db.json")),
            ..DataSourceConfig::default()
        };
        let port = create_data_port(&config).unwrap();

        let err = port.fetch_user().await.unwrap_err();
        assert_eq!(err.to_string(), "Failed to fetch user data");
    }
}
