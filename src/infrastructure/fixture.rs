//! Local JSON fixture data source.

use std::path::PathBuf;

use async_trait::async_trait;
use tokio::fs;
use tracing::{debug, warn};

use crate::domain::entities::{Benefit, RewardPoints, UserProfile};
use crate::domain::errors::FetchError;
use crate::domain::ports::DashboardDataPort;
use crate::infrastructure::api::{MockDataResponse, Resource};

/// Serves dashboard data from a `db.json` style file.
///
/// The file is re-read on every fetch so edits show up on refresh.
pub struct FixtureDataSource {
    path: PathBuf,
}

impl FixtureDataSource {
    /// Creates a fixture source for the given file.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    async fn load(&self, resource: Resource) -> Result<MockDataResponse, FetchError> {
        debug!(path = %self.path.display(), resource = %resource, "Reading fixture");

        let content = fs::read_to_string(&self.path).await.map_err(|e| {
            warn!(error = %e, path = %self.path.display(), "Failed to read fixture");
            resource.fetch_failed()
        })?;

        serde_json::from_str(&content).map_err(|e| {
            warn!(error = %e, path = %self.path.display(), "Failed to parse fixture");
            FetchError::decode(e.to_string())
        })
    }
}

#[async_trait]
impl DashboardDataPort for FixtureDataSource {
    async fn fetch_user(&self) -> Result<UserProfile, FetchError> {
        self.load(Resource::User).await?.into_user()
    }

    async fn fetch_reward_points(&self) -> Result<RewardPoints, FetchError> {
        self.load(Resource::XpPoints).await?.into_reward_points()
    }

    async fn fetch_benefits(&self) -> Result<Vec<Benefit>, FetchError> {
        self.load(Resource::Benefits).await?.into_benefits()
    }
}
