//! Domain layer with dashboard entities, errors and port definitions.

/// Entity definitions.
pub mod entities;
/// Error types.
pub mod errors;
/// Port definitions.
pub mod ports;

pub use entities::{Benefit, BenefitIcon, RewardPoints, ThemeMode, UserProfile};
pub use errors::FetchError;
pub use ports::DashboardDataPort;
