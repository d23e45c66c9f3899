use std::future::Future;
use std::sync::Arc;

use tokio::sync::watch;

use crate::application::store::{ErrorPolicy, Store, StoreState};
use crate::domain::entities::UserProfile;
use crate::domain::ports::DashboardDataPort;

/// Store for the profile card.
#[derive(Clone)]
pub struct UserStore {
    store: Store<Option<UserProfile>>,
    data_port: Arc<dyn DashboardDataPort>,
}

impl UserStore {
    const ERROR_POLICY: ErrorPolicy = ErrorPolicy::KeepData;

    /// Creates the store in its loading state.
    #[must_use]
    pub fn new(data_port: Arc<dyn DashboardDataPort>) -> Self {
        Self {
            store: Store::new("user"),
            data_port,
        }
    }

    /// Snapshot of the current state.
    #[must_use]
    pub fn state(&self) -> StoreState<Option<UserProfile>> {
        self.store.get()
    }

    /// Receiver notified on every write.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<StoreState<Option<UserProfile>>> {
        self.store.subscribe()
    }

    /// Replaces the whole state.
    pub fn set(&self, state: StoreState<Option<UserProfile>>) {
        self.store.set(state);
    }

    /// Fetches the profile.
    ///
    /// `loading` is raised before this returns; the read itself happens when
    /// the returned future runs.
    pub fn fetch_user(&self) -> impl Future<Output = ()> + Send + 'static + use<> {
        self.store.begin_fetch();
        let store = self.store.clone();
        let data_port = Arc::clone(&self.data_port);
        async move {
            let result = data_port.fetch_user().await.map(Some);
            store.finish_fetch(result, Self::ERROR_POLICY);
        }
    }
}
