use std::future::Future;
use std::sync::Arc;

use tokio::sync::watch;

use crate::application::store::{ErrorPolicy, Store, StoreState};
use crate::domain::entities::Benefit;
use crate::domain::ports::DashboardDataPort;

/// Store for the benefits list.
///
/// Unlike the other stores, a failed fetch empties the list.
#[derive(Clone)]
pub struct BenefitsStore {
    store: Store<Vec<Benefit>>,
    data_port: Arc<dyn DashboardDataPort>,
}

impl BenefitsStore {
    const ERROR_POLICY: ErrorPolicy = ErrorPolicy::ClearData;

    /// Creates the store in its loading state.
    #[must_use]
    pub fn new(data_port: Arc<dyn DashboardDataPort>) -> Self {
        Self {
            store: Store::new("benefits"),
            data_port,
        }
    }

    /// Snapshot of the current state.
    #[must_use]
    pub fn state(&self) -> StoreState<Vec<Benefit>> {
        self.store.get()
    }

    /// Receiver notified on every write.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<StoreState<Vec<Benefit>>> {
        self.store.subscribe()
    }

    /// Replaces the whole state.
    pub fn set(&self, state: StoreState<Vec<Benefit>>) {
        self.store.set(state);
    }

    /// Fetches the benefits. See [`super::UserStore::fetch_user`].
    pub fn fetch_benefits(&self) -> impl Future<Output = ()> + Send + 'static + use<> {
        self.store.begin_fetch();
        let store = self.store.clone();
        let data_port = Arc::clone(&self.data_port);
        async move {
            let result = data_port.fetch_benefits().await;
            if let Ok(benefits) = &result {
                tracing::debug!(count = benefits.len(), "Benefits loaded");
            }
            store.finish_fetch(result, Self::ERROR_POLICY);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::BenefitIcon;
    use crate::domain::errors::FetchError;
    use crate::domain::ports::mocks::MockDashboardData;

    fn sample_benefits() -> Vec<Benefit> {
        vec![
            Benefit::new(
                "10% Off on Shopping",
                BenefitIcon::Tag,
                "Get 10% instant discount on select partners.",
                "Claim",
            ),
            Benefit::new(
                "Free Movie Ticket",
                BenefitIcon::Ticket,
                "Redeem a free ticket every month.",
                "Redeem",
            ),
        ]
    }

    #[test]
    fn test_initial_state() {
        let store = BenefitsStore::new(Arc::new(MockDashboardData::failing("down")));
        let state = store.state();
        assert!(state.loading);
        assert!(state.error.is_none());
        assert!(state.data.is_empty());
    }

    #[tokio::test]
    async fn test_fetch_success() {
        let port = MockDashboardData::failing("down").with_benefits(Ok(sample_benefits()));
        let store = BenefitsStore::new(Arc::new(port));

        store.fetch_benefits().await;

        let state = store.state();
        assert!(!state.loading);
        assert!(state.error.is_none());
        assert_eq!(state.data, sample_benefits());
    }

    #[tokio::test]
    async fn test_fetch_failure_clears_benefits() {
        let port =
            Arc::new(MockDashboardData::failing("down").with_benefits(Ok(sample_benefits())));
        let store = BenefitsStore::new(port.clone());
        store.fetch_benefits().await;
        assert_eq!(store.state().data.len(), 2);

        port.set_benefits(Err(FetchError::network("Failed to fetch benefits")));
        store.fetch_benefits().await;

        let state = store.state();
        assert!(!state.loading);
        assert_eq!(state.error.as_deref(), Some("Failed to fetch benefits"));
        assert!(state.data.is_empty());
    }

    #[test]
    fn test_set_error_directly() {
        let store = BenefitsStore::new(Arc::new(MockDashboardData::failing("down")));
        let mut state = store.state();
        state.error = Some("Test error".to_string());
        store.set(state);
        assert_eq!(store.state().error.as_deref(), Some("Test error"));
    }
}
