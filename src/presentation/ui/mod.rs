//! UI screens.

mod app;
mod dashboard_screen;
mod mount;

pub use app::App;
pub use dashboard_screen::{DashboardScreen, DashboardState};
pub use mount::{MountedFetch, Section};
