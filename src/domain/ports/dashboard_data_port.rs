//! Dashboard data port definition.

use async_trait::async_trait;

use crate::domain::entities::{Benefit, RewardPoints, UserProfile};
use crate::domain::errors::FetchError;

/// Port for the reads behind the three dashboard stores.
///
/// Each call performs exactly one read with no retry.
#[async_trait]
pub trait DashboardDataPort: Send + Sync {
    /// Reads the user profile.
    async fn fetch_user(&self) -> Result<UserProfile, FetchError>;

    /// Reads the reward points.
    async fn fetch_reward_points(&self) -> Result<RewardPoints, FetchError>;

    /// Reads the benefits list.
    async fn fetch_benefits(&self) -> Result<Vec<Benefit>, FetchError>;
}
