mod benefits_store;
mod rewards_store;
mod user_store;

pub use benefits_store::BenefitsStore;
pub use rewards_store::RewardsStore;
pub use user_store::UserStore;
