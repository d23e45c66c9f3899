use std::sync::Arc;

use tokio::sync::watch;
use tracing::{debug, warn};

use crate::domain::errors::FetchError;

/// Snapshot of a store.
#[derive(Debug, Clone, PartialEq)]
pub struct StoreState<T> {
    /// Last successfully fetched data.
    pub data: T,
    /// Set while a fetch is outstanding, and before the first one.
    pub loading: bool,
    /// Message of the last failed fetch.
    pub error: Option<String>,
}

impl<T: Default> StoreState<T> {
    /// State before the first fetch completes.
    #[must_use]
    pub fn initial() -> Self {
        Self {
            data: T::default(),
            loading: true,
            error: None,
        }
    }
}

impl<T: Default> Default for StoreState<T> {
    fn default() -> Self {
        Self::initial()
    }
}

/// What a failed fetch does to previously loaded data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorPolicy {
    /// Keep showing the last good data next to the error.
    KeepData,
    /// Reset data to its empty value.
    ClearData,
}

/// Owned state container with change notification.
///
/// Clones share the same state. Writes go through [`Store::set`] and
/// [`Store::update`]; readers take snapshots with [`Store::get`] or follow
/// changes through [`Store::subscribe`].
#[derive(Debug)]
pub struct Store<T> {
    name: &'static str,
    tx: Arc<watch::Sender<StoreState<T>>>,
}

impl<T> Clone for Store<T> {
    fn clone(&self) -> Self {
        Self {
            name: self.name,
            tx: Arc::clone(&self.tx),
        }
    }
}

impl<T> Store<T>
where
    T: Clone + Default + Send + Sync + 'static,
{
    /// Creates a store in its initial loading state.
    #[must_use]
    pub fn new(name: &'static str) -> Self {
        let (tx, _rx) = watch::channel(StoreState::initial());
        Self {
            name,
            tx: Arc::new(tx),
        }
    }

    /// Returns a snapshot of the current state.
    #[must_use]
    pub fn get(&self) -> StoreState<T> {
        self.tx.borrow().clone()
    }

    /// Returns a receiver notified on every write.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<StoreState<T>> {
        self.tx.subscribe()
    }

    /// Replaces the whole state.
    pub fn set(&self, state: StoreState<T>) {
        self.tx.send_replace(state);
    }

    /// Mutates the state in place.
    pub fn update(&self, f: impl FnOnce(&mut StoreState<T>)) {
        self.tx.send_modify(f);
    }

    /// Marks a fetch as started.
    pub fn begin_fetch(&self) {
        debug!(store = self.name, "Fetch started");
        self.update(|state| {
            state.loading = true;
            state.error = None;
        });
    }

    /// Applies the outcome of a fetch.
    pub fn finish_fetch(&self, result: Result<T, FetchError>, policy: ErrorPolicy) {
        match result {
            Ok(data) => {
                debug!(store = self.name, "Fetch succeeded");
                self.update(|state| {
                    state.data = data;
                    state.loading = false;
                });
            }
            Err(e) => {
                warn!(store = self.name, error = %e, "Fetch failed");
                self.update(|state| {
                    state.error = Some(e.to_string());
                    state.loading = false;
                    if policy == ErrorPolicy::ClearData {
                        state.data = T::default();
                    }
                });
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let store: Store<Vec<u32>> = Store::new("numbers");
        let state = store.get();
        assert!(state.loading);
        assert!(state.error.is_none());
        assert!(state.data.is_empty());
    }

    #[test]
    fn test_clones_share_state() {
        let store: Store<u32> = Store::new("count");
        let other = store.clone();
        other.update(|state| state.data = 7);
        assert_eq!(store.get().data, 7);
    }

    #[test]
    fn test_set_replaces_state() {
        let store: Store<u32> = Store::new("count");
        store.set(StoreState {
            data: 3,
            loading: false,
            error: Some("boom".to_string()),
        });
        assert_eq!(store.get().error.as_deref(), Some("boom"));
        assert!(!store.get().loading);
    }

    #[tokio::test]
    async fn test_subscribe_sees_writes() {
        let store: Store<u32> = Store::new("count");
        let mut rx = store.subscribe();
        store.update(|state| state.data = 1);
        rx.changed().await.unwrap();
        assert_eq!(rx.borrow_and_update().data, 1);
    }

    #[test]
    fn test_begin_fetch_clears_error() {
        let store: Store<u32> = Store::new("count");
        store.update(|state| {
            state.loading = false;
            state.error = Some("old".to_string());
        });
        store.begin_fetch();
        assert!(store.get().loading);
        assert!(store.get().error.is_none());
    }

    #[test]
    fn test_finish_fetch_error_policies() {
        let keep: Store<u32> = Store::new("keep");
        keep.finish_fetch(Ok(5), ErrorPolicy::KeepData);
        keep.finish_fetch(Err(FetchError::network("down")), ErrorPolicy::KeepData);
        assert_eq!(keep.get().data, 5);
        assert_eq!(keep.get().error.as_deref(), Some("down"));
        assert!(!keep.get().loading);

        let clear: Store<u32> = Store::new("clear");
        clear.finish_fetch(Ok(5), ErrorPolicy::ClearData);
        clear.finish_fetch(Err(FetchError::network("down")), ErrorPolicy::ClearData);
        assert_eq!(clear.get().data, 0);
        assert!(!clear.get().loading);
    }
}
