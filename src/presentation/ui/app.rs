//! Main application orchestrator.

use std::sync::Arc;
use std::time::Duration;

use chrono::Datelike;
use crossterm::event::{Event, EventStream};
use futures_util::StreamExt;
use ratatui::DefaultTerminal;
use tokio::time::interval;
use tracing::{debug, info};

use super::dashboard_screen::{DashboardScreen, DashboardState};
use super::mount::{MountedFetch, Section};
use crate::application::{BenefitsStore, RewardsStore, UserStore};
use crate::domain::entities::ThemeMode;
use crate::domain::ports::DashboardDataPort;
use crate::infrastructure::config::{AppConfig, StorageManager};
use crate::presentation::events::EventResult;
use crate::presentation::theme::Theme;

const ANIMATION_TICK_RATE: Duration = Duration::from_millis(33);

/// Owns the stores, the dashboard state and the mounted fetches.
pub struct App {
    user: UserStore,
    rewards: RewardsStore,
    benefits: BenefitsStore,
    dashboard: DashboardState,
    mounts: Vec<MountedFetch>,
    animations: bool,
}

impl App {
    /// Builds the stores over `data_port` and loads the persisted theme.
    #[must_use]
    pub fn new(
        data_port: Arc<dyn DashboardDataPort>,
        storage: StorageManager,
        config: &AppConfig,
    ) -> Self {
        let animations = config.ui.enable_animations;
        let base_theme = Theme::new(ThemeMode::default(), &config.theme.accent_color);

        Self {
            user: UserStore::new(Arc::clone(&data_port)),
            rewards: RewardsStore::new(Arc::clone(&data_port)),
            benefits: BenefitsStore::new(data_port),
            dashboard: DashboardState::load(storage, base_theme, animations),
            mounts: Vec::new(),
            animations,
        }
    }

    /// # Errors
    /// Returns error if the terminal cannot be drawn.
    pub async fn run(mut self, terminal: &mut DefaultTerminal) -> color_eyre::Result<()> {
        let mut terminal_events = EventStream::new();
        let mut animation_interval = interval(ANIMATION_TICK_RATE);
        let mut user_rx = self.user.subscribe();
        let mut rewards_rx = self.rewards.subscribe();
        let mut benefits_rx = self.benefits.subscribe();

        self.draw(terminal)?;
        self.mount();

        loop {
            let terminal_event = terminal_events.next();

            tokio::select! {
                Ok(()) = user_rx.changed() => {
                    let loading = user_rx.borrow_and_update().loading;
                    self.on_store_changed(Section::Profile, loading);
                    self.draw(terminal)?;
                }

                Ok(()) = rewards_rx.changed() => {
                    let loading = rewards_rx.borrow_and_update().loading;
                    self.on_store_changed(Section::Rewards, loading);
                    self.draw(terminal)?;
                }

                Ok(()) = benefits_rx.changed() => {
                    benefits_rx.mark_unchanged();
                    self.on_benefits_changed();
                    self.draw(terminal)?;
                }

                _ = animation_interval.tick() => {
                    self.dashboard.tick(ANIMATION_TICK_RATE);
                    if self.needs_animation_frame() {
                        self.draw(terminal)?;
                    }
                }

                Some(Ok(event)) = terminal_event => {
                    match self.handle_terminal_event(&event) {
                        EventResult::Exit => break,
                        EventResult::Refresh => self.refresh(),
                        EventResult::Continue => {}
                    }
                    self.draw(terminal)?;
                }
            }
        }

        self.unmount();
        info!("Application exiting normally");
        Ok(())
    }

    /// Schedules the first fetch of every section.
    fn mount(&mut self) {
        for section in Section::ALL {
            let delay = if self.animations {
                section.mount_delay()
            } else {
                Duration::ZERO
            };

            let mounted = match section {
                Section::Profile => {
                    let store = self.user.clone();
                    MountedFetch::spawn(section, delay, move || store.fetch_user())
                }
                Section::Rewards => {
                    let store = self.rewards.clone();
                    MountedFetch::spawn(section, delay, move || store.fetch_points())
                }
                Section::Benefits => {
                    let store = self.benefits.clone();
                    MountedFetch::spawn(section, delay, move || store.fetch_benefits())
                }
            };
            self.mounts.push(mounted);
        }
    }

    fn unmount(&mut self) {
        debug!(pending = self.mounts.iter().filter(|m| !m.is_finished()).count(), "Unmounting");
        self.mounts.clear();
    }

    /// Refetches every store at once.
    fn refresh(&self) {
        info!("Refreshing dashboard data");
        tokio::spawn(self.user.fetch_user());
        tokio::spawn(self.rewards.fetch_points());
        tokio::spawn(self.benefits.fetch_benefits());
    }

    fn on_store_changed(&mut self, section: Section, loading: bool) {
        debug!(section = section.name(), loading, "Store changed");
        if !loading {
            self.dashboard.arm_intro(section);
        }
    }

    fn on_benefits_changed(&mut self) {
        let benefits = self.benefits.state();
        self.dashboard.sync_benefits(&benefits);
        self.on_store_changed(Section::Benefits, benefits.loading);
    }

    fn needs_animation_frame(&self) -> bool {
        self.dashboard.is_animating()
            || self.user.state().loading
            || self.rewards.state().loading
            || self.benefits.state().loading
    }

    fn handle_terminal_event(&mut self, event: &Event) -> EventResult {
        match event {
            Event::Key(key) => {
                let benefits = self.benefits.state().data;
                self.dashboard.handle_key(key, &benefits)
            }
            _ => EventResult::Continue,
        }
    }

    fn draw(&mut self, terminal: &mut DefaultTerminal) -> color_eyre::Result<()> {
        let user = self.user.state();
        let rewards = self.rewards.state();
        let benefits = self.benefits.state();
        let year = chrono::Local::now().year();

        terminal.draw(|frame| {
            frame.render_stateful_widget(
                DashboardScreen::new(&user, &rewards, &benefits, year),
                frame.area(),
                &mut self.dashboard,
            );
        })?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::{Benefit, BenefitIcon, RewardPoints, UserProfile};
    use crate::domain::errors::FetchError;
    use crate::domain::ports::mocks::MockDashboardData;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    fn port() -> Arc<MockDashboardData> {
        Arc::new(
            MockDashboardData::failing("down")
                .with_user(Ok(UserProfile::new("a.png", "Aarav Mehta", 7, 1250.0, 2000.0)))
                .with_points(Ok(RewardPoints::new(42.0, 100.0)))
                .with_benefits(Ok(vec![Benefit::new(
                    "Cashback",
                    BenefitIcon::Tag,
                    "Fuel cashback",
                    "Claim",
                )])),
        )
    }

    fn app(port: Arc<MockDashboardData>, dir: &tempfile::TempDir) -> App {
        let mut config = AppConfig::default();
        config.ui.enable_animations = false;
        App::new(port, StorageManager::with_dir(dir.path().to_path_buf()), &config)
    }

    async fn settle(app: &App) {
        let mut user = app.user.subscribe();
        let mut rewards = app.rewards.subscribe();
        let mut benefits = app.benefits.subscribe();
        user.wait_for(|s| !s.loading).await.unwrap();
        rewards.wait_for(|s| !s.loading).await.unwrap();
        benefits.wait_for(|s| !s.loading).await.unwrap();
    }

    #[tokio::test]
    async fn test_mount_loads_every_store() {
        let dir = tempfile::tempdir().unwrap();
        let port = port();
        let mut app = app(port.clone(), &dir);

        app.mount();
        settle(&app).await;

        assert_eq!(port.calls(), 3);
        assert_eq!(app.rewards.state().data, RewardPoints::new(42.0, 100.0));
        assert_eq!(app.benefits.state().data.len(), 1);
        assert!(!app.needs_animation_frame());
    }

    #[tokio::test]
    async fn test_refresh_raises_loading_then_refetches() {
        let dir = tempfile::tempdir().unwrap();
        let port = port();
        let mut app = app(port.clone(), &dir);
        app.mount();
        settle(&app).await;

        port.set_points(Ok(RewardPoints::new(50.0, 100.0)));
        app.refresh();
        assert!(app.rewards.state().loading);

        settle(&app).await;
        assert_eq!(port.calls(), 6);
        assert_eq!(app.rewards.state().data, RewardPoints::new(50.0, 100.0));
    }

    #[tokio::test]
    async fn test_enter_opens_modal_for_loaded_benefit() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = app(port(), &dir);
        app.mount();
        settle(&app).await;

        let enter = Event::Key(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE));
        assert_eq!(app.handle_terminal_event(&enter), EventResult::Continue);
        assert_eq!(
            app.dashboard.modal().map(|b| b.title.as_str()),
            Some("Cashback")
        );

        let quit = Event::Key(KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE));
        assert_eq!(app.handle_terminal_event(&quit), EventResult::Exit);
    }

    #[tokio::test]
    async fn test_failed_refresh_closes_benefit_modal() {
        let dir = tempfile::tempdir().unwrap();
        let port = port();
        let mut app = app(port.clone(), &dir);
        app.mount();
        settle(&app).await;

        let enter = Event::Key(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE));
        app.handle_terminal_event(&enter);
        assert!(app.dashboard.modal().is_some());

        port.set_benefits(Err(FetchError::network("Failed to fetch benefits")));
        app.refresh();
        settle(&app).await;
        app.on_benefits_changed();

        assert!(app.benefits.state().data.is_empty());
        assert!(app.dashboard.modal().is_none());
    }

    #[tokio::test]
    async fn test_unmount_before_delay_leaves_stores_loading() {
        let dir = tempfile::tempdir().unwrap();
        let port = port();
        let mut app = App::new(
            port.clone(),
            StorageManager::with_dir(dir.path().to_path_buf()),
            &AppConfig::default(),
        );

        app.mount();
        app.unmount();
        tokio::task::yield_now().await;

        assert_eq!(port.calls(), 0);
        assert!(app.user.state().loading);
    }
}
