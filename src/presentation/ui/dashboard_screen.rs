use std::time::Duration;

use crossterm::event::KeyEvent;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    widgets::{StatefulWidget, Widget},
};
use tachyonfx::{Effect, Interpolation, fx};
use tracing::{debug, info, warn};

use super::mount::Section;
use crate::application::StoreState;
use crate::domain::entities::{Benefit, RewardPoints, ThemeMode, UserProfile};
use crate::infrastructure::config::StorageManager;
use crate::presentation::events::{EventHandler, EventResult, KEY_HINTS, KeyCommand};
use crate::presentation::theme::Theme;
use crate::presentation::widgets::{
    BenefitModal, BenefitsList, FooterBar, HeaderBar, ProfileCard, RewardDonut,
};

const APP_TITLE: &str = "Cred Garage";
const PULSE_PERIOD: Duration = Duration::from_millis(600);
const INTRO_MS: u32 = 700;

/// UI state of the dashboard: theme, benefit cursor, modal and animations.
pub struct DashboardState {
    storage: StorageManager,
    theme: Theme,
    cursor: usize,
    selected_benefit: Option<Benefit>,
    modal_open: bool,
    animations: bool,
    intros: [Option<Effect>; 3],
    intro_played: [bool; 3],
    intro_pending: Duration,
    pulse: bool,
    pulse_elapsed: Duration,
}

impl DashboardState {
    /// Builds the state, reading the persisted theme mode.
    ///
    /// An unreadable state file falls back to the default mode.
    #[must_use]
    pub fn load(storage: StorageManager, base_theme: Theme, animations: bool) -> Self {
        let mode = storage.load_theme_mode().unwrap_or_else(|e| {
            warn!(error = %e, "Failed to load theme mode, using default");
            ThemeMode::default()
        });
        debug!(mode = %mode, "Theme mode loaded");

        Self {
            storage,
            theme: base_theme.with_mode(mode),
            cursor: 0,
            selected_benefit: None,
            modal_open: false,
            animations,
            intros: [None, None, None],
            intro_played: [false; 3],
            intro_pending: Duration::ZERO,
            pulse: false,
            pulse_elapsed: Duration::ZERO,
        }
    }

    /// Active theme.
    #[must_use]
    pub const fn theme(&self) -> &Theme {
        &self.theme
    }

    /// Active theme mode.
    #[must_use]
    pub const fn theme_mode(&self) -> ThemeMode {
        self.theme.mode
    }

    /// Flips dark/light and persists the new mode.
    pub fn toggle_theme(&mut self) {
        let mode = self.theme.mode.toggled();
        self.theme = self.theme.with_mode(mode);
        info!(mode = %mode, "Theme toggled");

        if let Err(e) = self.storage.save_theme_mode(mode) {
            warn!(error = %e, "Failed to persist theme mode");
        }
    }

    /// Index of the highlighted benefit.
    #[must_use]
    pub const fn cursor(&self) -> usize {
        self.cursor
    }

    /// Cursor clamped to a list of `len` benefits.
    #[must_use]
    pub fn selected_index(&self, len: usize) -> Option<usize> {
        (len > 0).then(|| self.cursor.min(len - 1))
    }

    /// Benefit shown in the modal, if it is open.
    #[must_use]
    pub fn modal(&self) -> Option<&Benefit> {
        self.selected_benefit
            .as_ref()
            .filter(|_| self.modal_open)
    }

    /// Shows the detail popup for `benefit`.
    pub fn open_modal(&mut self, benefit: Benefit) {
        debug!(title = %benefit.title, "Opening benefit modal");
        self.selected_benefit = Some(benefit);
        self.modal_open = true;
    }

    /// Hides the detail popup and forgets the selected benefit.
    pub fn close_modal(&mut self) {
        self.modal_open = false;
        self.selected_benefit = None;
    }

    /// Reacts to a benefits store write.
    ///
    /// A failed fetch clears the list, so an open modal would show a benefit
    /// that is no longer listed; it is closed.
    pub fn sync_benefits(&mut self, benefits: &StoreState<Vec<Benefit>>) {
        if self.modal_open && benefits.error.is_some() {
            debug!("Benefits fetch failed, closing modal");
            self.close_modal();
        }
    }

    /// Maps a key press to a command and applies it.
    ///
    /// `benefits` is the current list; Enter opens the modal for the entry
    /// under the cursor.
    pub fn handle_key(&mut self, key: &KeyEvent, benefits: &[Benefit]) -> EventResult {
        EventHandler::command_for(key).map_or(EventResult::Continue, |command| {
            self.handle_command(command, benefits)
        })
    }

    /// Applies a command against the current benefits list.
    pub fn handle_command(&mut self, command: KeyCommand, benefits: &[Benefit]) -> EventResult {
        match command {
            KeyCommand::Quit => return EventResult::Exit,
            KeyCommand::ToggleTheme => self.toggle_theme(),
            KeyCommand::Refresh => return EventResult::Refresh,
            KeyCommand::Up if !self.modal_open => {
                self.cursor = self.selected_index(benefits.len()).unwrap_or(0).saturating_sub(1);
            }
            KeyCommand::Down if !self.modal_open => {
                self.cursor = self
                    .selected_index(benefits.len())
                    .map_or(0, |index| (index + 1).min(benefits.len() - 1));
            }
            KeyCommand::Up | KeyCommand::Down => {}
            KeyCommand::Select => {
                if self.modal_open {
                    self.close_modal();
                } else if let Some(index) = self.selected_index(benefits.len()) {
                    self.open_modal(benefits[index].clone());
                }
            }
            KeyCommand::Dismiss => {
                if !self.modal_open {
                    return EventResult::Exit;
                }
                self.close_modal();
            }
        }
        EventResult::Continue
    }

    /// Advances the skeleton pulse and pending intro time.
    pub fn tick(&mut self, elapsed: Duration) {
        self.pulse_elapsed = self.pulse_elapsed.saturating_add(elapsed);
        if self.pulse_elapsed >= PULSE_PERIOD {
            self.pulse_elapsed = Duration::ZERO;
            self.pulse = !self.pulse;
        }

        if self.is_animating() {
            self.intro_pending = self.intro_pending.saturating_add(elapsed);
        }
    }

    /// Phase of the loading pulse.
    #[must_use]
    pub const fn pulse(&self) -> bool {
        self.pulse
    }

    /// Starts the intro effect of a section the first time it has data.
    pub fn arm_intro(&mut self, section: Section) {
        let index = section.index();
        if !self.animations || self.intro_played[index] {
            return;
        }
        debug!(section = section.name(), "Section ready, starting intro");
        self.intro_played[index] = true;
        self.intros[index] = Some(fx::coalesce((INTRO_MS, Interpolation::CircOut)));
    }

    /// Whether an intro effect is still running.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.intros.iter().any(Option::is_some)
    }

    fn process_intro(&mut self, section: Section, elapsed: Duration, area: Rect, buf: &mut Buffer) {
        let slot = &mut self.intros[section.index()];
        let finished = slot
            .as_mut()
            .is_some_and(|effect| effect.process(elapsed.into(), buf, area).is_some());
        if finished {
            *slot = None;
        }
    }
}

/// Snapshot of the three stores rendered as the dashboard.
pub struct DashboardScreen<'a> {
    user: &'a StoreState<Option<UserProfile>>,
    rewards: &'a StoreState<RewardPoints>,
    benefits: &'a StoreState<Vec<Benefit>>,
    year: i32,
}

impl<'a> DashboardScreen<'a> {
    /// Screen over snapshots of the three stores.
    #[must_use]
    pub const fn new(
        user: &'a StoreState<Option<UserProfile>>,
        rewards: &'a StoreState<RewardPoints>,
        benefits: &'a StoreState<Vec<Benefit>>,
        year: i32,
    ) -> Self {
        Self {
            user,
            rewards,
            benefits,
            year,
        }
    }
}

impl StatefulWidget for DashboardScreen<'_> {
    type State = DashboardState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        let theme = state.theme;
        buf.set_style(area, theme.base_style());

        let [header_area, body_area, footer_area] = Layout::vertical([
            Constraint::Length(3),
            Constraint::Min(8),
            Constraint::Length(2),
        ])
        .areas(area);
        let [cards_area, benefits_area] =
            Layout::vertical([Constraint::Length(12), Constraint::Min(4)]).areas(body_area);
        let [profile_area, rewards_area] =
            Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)])
                .areas(cards_area);

        HeaderBar::new(APP_TITLE, &theme).render(header_area, buf);

        ProfileCard::new(self.user, &theme)
            .pulse(state.pulse)
            .render(profile_area, buf);
        RewardDonut::new(self.rewards, &theme)
            .pulse(state.pulse)
            .render(rewards_area, buf);
        BenefitsList::new(self.benefits, &theme)
            .selected(state.selected_index(self.benefits.data.len()))
            .pulse(state.pulse)
            .render(benefits_area, buf);

        FooterBar::new(KEY_HINTS, self.year, &theme).render(footer_area, buf);

        let elapsed = std::mem::take(&mut state.intro_pending);
        state.process_intro(Section::Profile, elapsed, profile_area, buf);
        state.process_intro(Section::Rewards, elapsed, rewards_area, buf);
        state.process_intro(Section::Benefits, elapsed, benefits_area, buf);

        if let Some(benefit) = state.modal() {
            BenefitModal::new(benefit, &theme).render(area, buf);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::BenefitIcon;
    use crate::presentation::widgets::test_utils::buffer_text;

    fn benefits() -> Vec<Benefit> {
        vec![
            Benefit::new("Cashback", BenefitIcon::Tag, "Fuel cashback every week", "Claim"),
            Benefit::new("Movie pass", BenefitIcon::Ticket, "One free ticket", "Book"),
            Benefit::new("Hamper", BenefitIcon::Gift, "Festive gift hamper", "Redeem"),
        ]
    }

    fn loaded<T>(data: T) -> StoreState<T> {
        StoreState {
            data,
            loading: false,
            error: None,
        }
    }

    fn state_in(dir: &tempfile::TempDir) -> DashboardState {
        let storage = StorageManager::with_dir(dir.path().to_path_buf());
        DashboardState::load(storage, Theme::default(), true)
    }

    fn render(state: &mut DashboardState, benefits: &[Benefit], area: Rect) -> Buffer {
        let user = loaded(Some(UserProfile::new("a.png", "Aarav Mehta", 7, 1250.0, 2000.0)));
        let rewards = loaded(RewardPoints::new(420.0, 1000.0));
        let benefits = loaded(benefits.to_vec());
        let mut buf = Buffer::empty(area);
        DashboardScreen::new(&user, &rewards, &benefits, 2026).render(area, &mut buf, state);
        buf
    }

    fn region_text(buf: &Buffer, region: Rect) -> String {
        let mut sub = Buffer::empty(region);
        for y in region.top()..region.bottom() {
            for x in region.left()..region.right() {
                sub[(x, y)] = buf[(x, y)].clone();
            }
        }
        buffer_text(&sub)
    }

    #[test]
    fn test_theme_defaults_to_dark() {
        let dir = tempfile::tempdir().unwrap();
        let state = state_in(&dir);

        assert_eq!(state.theme_mode(), ThemeMode::Dark);
    }

    #[test]
    fn test_toggle_persists_across_loads() {
        let dir = tempfile::tempdir().unwrap();
        let mut state = state_in(&dir);

        state.toggle_theme();
        assert_eq!(state.theme_mode(), ThemeMode::Light);

        let reloaded = state_in(&dir);
        assert_eq!(reloaded.theme_mode(), ThemeMode::Light);
    }

    #[test]
    fn test_modal_open_and_close() {
        let dir = tempfile::tempdir().unwrap();
        let mut state = state_in(&dir);
        let benefits = benefits();
        let area = Rect::new(0, 0, 100, 40);
        let popup = BenefitModal::popup_area(area);

        state.handle_command(KeyCommand::Select, &benefits);
        assert_eq!(state.modal().map(|b| b.title.as_str()), Some("Cashback"));

        let text = region_text(&render(&mut state, &benefits, area), popup);
        assert!(text.contains("Cashback"));
        assert!(text.contains("Fuel cashback every week"));
        assert!(text.contains("Esc close"));

        let result = state.handle_command(KeyCommand::Dismiss, &benefits);
        assert_eq!(result, EventResult::Continue);
        assert!(state.modal().is_none());

        let text = buffer_text(&render(&mut state, &benefits, area));
        assert!(!text.contains("Esc close"));
    }

    #[test]
    fn test_failed_benefits_fetch_closes_modal() {
        let dir = tempfile::tempdir().unwrap();
        let mut state = state_in(&dir);
        let benefits = benefits();

        state.handle_command(KeyCommand::Select, &benefits);
        state.sync_benefits(&StoreState {
            data: benefits.clone(),
            loading: true,
            error: None,
        });
        assert!(state.modal().is_some());

        state.sync_benefits(&StoreState {
            data: Vec::new(),
            loading: false,
            error: Some("Failed to fetch benefits".to_string()),
        });
        assert!(state.modal().is_none());

        let area = Rect::new(0, 0, 100, 40);
        let text = buffer_text(&render(&mut state, &[], area));
        assert!(!text.contains("Fuel cashback every week"));
    }

    #[test]
    fn test_select_toggles_modal() {
        let dir = tempfile::tempdir().unwrap();
        let mut state = state_in(&dir);
        let benefits = benefits();

        state.handle_command(KeyCommand::Down, &benefits);
        state.handle_command(KeyCommand::Select, &benefits);
        assert_eq!(state.modal().map(|b| b.title.as_str()), Some("Movie pass"));

        state.handle_command(KeyCommand::Select, &benefits);
        assert!(state.modal().is_none());
    }

    #[test]
    fn test_cursor_moves_within_bounds() {
        let dir = tempfile::tempdir().unwrap();
        let mut state = state_in(&dir);
        let benefits = benefits();

        state.handle_command(KeyCommand::Up, &benefits);
        assert_eq!(state.cursor(), 0);

        for _ in 0..5 {
            state.handle_command(KeyCommand::Down, &benefits);
        }
        assert_eq!(state.cursor(), 2);

        state.handle_command(KeyCommand::Up, &benefits);
        assert_eq!(state.cursor(), 1);
    }

    #[test]
    fn test_select_on_empty_list_is_noop() {
        let dir = tempfile::tempdir().unwrap();
        let mut state = state_in(&dir);

        state.handle_command(KeyCommand::Select, &[]);
        state.handle_command(KeyCommand::Down, &[]);

        assert!(state.modal().is_none());
        assert_eq!(state.selected_index(0), None);
    }

    #[test]
    fn test_command_results() {
        let dir = tempfile::tempdir().unwrap();
        let mut state = state_in(&dir);

        assert_eq!(state.handle_command(KeyCommand::Refresh, &[]), EventResult::Refresh);
        assert_eq!(state.handle_command(KeyCommand::Dismiss, &[]), EventResult::Exit);
        assert_eq!(state.handle_command(KeyCommand::Quit, &[]), EventResult::Exit);
    }

    #[test]
    fn test_pulse_flips_after_period() {
        let dir = tempfile::tempdir().unwrap();
        let mut state = state_in(&dir);

        state.tick(Duration::from_millis(300));
        assert!(!state.pulse());
        state.tick(PULSE_PERIOD);
        assert!(state.pulse());
    }

    #[test]
    fn test_intro_runs_once_per_section() {
        let dir = tempfile::tempdir().unwrap();
        let mut state = state_in(&dir);

        state.arm_intro(Section::Rewards);
        assert!(state.is_animating());

        state.tick(Duration::from_secs(2));
        render(&mut state, &benefits(), Rect::new(0, 0, 100, 40));
        assert!(!state.is_animating());

        state.arm_intro(Section::Rewards);
        assert!(!state.is_animating());
    }

    #[test]
    fn test_intro_disabled_without_animations() {
        let dir = tempfile::tempdir().unwrap();
        let storage = StorageManager::with_dir(dir.path().to_path_buf());
        let mut state = DashboardState::load(storage, Theme::default(), false);

        state.arm_intro(Section::Profile);

        assert!(!state.is_animating());
    }

    #[test]
    fn test_renders_all_sections() {
        let dir = tempfile::tempdir().unwrap();
        let mut state = state_in(&dir);

        let text = buffer_text(&render(&mut state, &benefits(), Rect::new(0, 0, 100, 40)));

        assert!(text.contains("C R E D   G A R A G E"));
        assert!(text.contains("Aarav Mehta"));
        assert!(text.contains("Reward Points"));
        assert!(text.contains("Movie pass"));
        assert!(text.contains("All rights reserved."));
    }
}
