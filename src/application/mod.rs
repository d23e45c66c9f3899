//! Application layer: state containers and the stores built on them.

/// Generic state container.
pub mod store;
/// Fetch-backed dashboard stores.
pub mod stores;

pub use store::{ErrorPolicy, Store, StoreState};
pub use stores::{BenefitsStore, RewardsStore, UserStore};
