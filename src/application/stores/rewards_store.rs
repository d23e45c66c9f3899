use std::future::Future;
use std::sync::Arc;

use tokio::sync::watch;

use crate::application::store::{ErrorPolicy, Store, StoreState};
use crate::domain::entities::RewardPoints;
use crate::domain::ports::DashboardDataPort;

/// Store for the reward points donut.
#[derive(Clone)]
pub struct RewardsStore {
    store: Store<RewardPoints>,
    data_port: Arc<dyn DashboardDataPort>,
}

impl RewardsStore {
    const ERROR_POLICY: ErrorPolicy = ErrorPolicy::KeepData;

    /// Creates the store in its loading state.
    #[must_use]
    pub fn new(data_port: Arc<dyn DashboardDataPort>) -> Self {
        Self {
            store: Store::new("rewards"),
            data_port,
        }
    }

    /// Snapshot of the current state.
    #[must_use]
    pub fn state(&self) -> StoreState<RewardPoints> {
        self.store.get()
    }

    /// Receiver notified on every write.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<StoreState<RewardPoints>> {
        self.store.subscribe()
    }

    /// Replaces the whole state.
    pub fn set(&self, state: StoreState<RewardPoints>) {
        self.store.set(state);
    }

    /// Fetches the reward points. See [`super::UserStore::fetch_user`].
    pub fn fetch_points(&self) -> impl Future<Output = ()> + Send + 'static + use<> {
        self.store.begin_fetch();
        let store = self.store.clone();
        let data_port = Arc::clone(&self.data_port);
        async move {
            let result = data_port.fetch_reward_points().await;
            store.finish_fetch(result, Self::ERROR_POLICY);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::FetchError;
    use crate::domain::ports::mocks::MockDashboardData;

    #[test]
    fn test_initial_state() {
        let store = RewardsStore::new(Arc::new(MockDashboardData::failing("down")));
        let state = store.state();
        assert!(state.loading);
        assert!(state.error.is_none());
        assert_eq!(state.data, RewardPoints::default());
    }

    #[tokio::test]
    async fn test_fetch_success() {
        let port =
            MockDashboardData::failing("down").with_points(Ok(RewardPoints::new(42.0, 100.0)));
        let store = RewardsStore::new(Arc::new(port));

        store.fetch_points().await;

        let state = store.state();
        assert!(!state.loading);
        assert!(state.error.is_none());
        assert_eq!(state.data, RewardPoints::new(42.0, 100.0));
    }

    #[tokio::test]
    async fn test_fetch_failure_keeps_previous_points() {
        let port = Arc::new(
            MockDashboardData::failing("down").with_points(Ok(RewardPoints::new(42.0, 100.0))),
        );
        let store = RewardsStore::new(port.clone());
        store.fetch_points().await;

        port.set_points(Err(FetchError::missing("XP Points not found in response")));
        store.fetch_points().await;

        let state = store.state();
        assert!(!state.loading);
        assert_eq!(
            state.error.as_deref(),
            Some("XP Points not found in response")
        );
        assert_eq!(state.data, RewardPoints::new(42.0, 100.0));
    }

    #[tokio::test]
    async fn test_concurrent_fetches_last_write_wins() {
        let port = Arc::new(
            MockDashboardData::failing("down").with_points(Ok(RewardPoints::new(1.0, 10.0))),
        );
        let store = RewardsStore::new(port.clone());

        let first = store.fetch_points();
        let second = store.fetch_points();

        second.await;
        assert_eq!(store.state().data, RewardPoints::new(1.0, 10.0));

        port.set_points(Ok(RewardPoints::new(2.0, 10.0)));
        first.await;

        assert_eq!(store.state().data, RewardPoints::new(2.0, 10.0));
        assert_eq!(port.calls(), 2);
    }
}
