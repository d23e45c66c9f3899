//! Dashboard entities.

mod benefit;
mod reward_points;
mod theme_mode;
mod user_profile;

pub use benefit::{Benefit, BenefitIcon};
pub use reward_points::RewardPoints;
pub use theme_mode::ThemeMode;
pub use user_profile::UserProfile;
