mod benefit_modal;
mod benefits_list;
mod footer_bar;
mod header_bar;
mod profile_card;
mod reward_donut;
mod skeleton;

pub use benefit_modal::BenefitModal;
pub use benefits_list::BenefitsList;
pub use footer_bar::{FooterBar, FooterBarStyle};
pub use header_bar::{HeaderBar, HeaderBarStyle};
pub use profile_card::ProfileCard;
pub use reward_donut::RewardDonut;
pub use skeleton::SkeletonBar;
