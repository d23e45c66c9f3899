//! Profile card view.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, BorderType, Gauge, Paragraph, Widget, Wrap},
};

use super::skeleton::SkeletonBar;
use crate::application::StoreState;
use crate::domain::entities::UserProfile;
use crate::presentation::theme::Theme;

const FALLBACK_MESSAGE: &str = "User not found";

/// Renders the user store: skeleton, error or profile.
pub struct ProfileCard<'a> {
    state: &'a StoreState<Option<UserProfile>>,
    theme: &'a Theme,
    pulse: bool,
}

impl<'a> ProfileCard<'a> {
    /// Card over the user store state.
    #[must_use]
    pub fn new(state: &'a StoreState<Option<UserProfile>>, theme: &'a Theme) -> Self {
        Self {
            state,
            theme,
            pulse: false,
        }
    }

    /// Alternates the skeleton shade.
    #[must_use]
    pub const fn pulse(mut self, pulse: bool) -> Self {
        self.pulse = pulse;
        self
    }

    fn block(&self) -> Block<'a> {
        Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(self.theme.border_style())
            .title(Line::from(" Profile ").centered())
            .style(self.theme.card_style())
    }

    fn render_skeleton(&self, area: Rect, buf: &mut Buffer) {
        let style = Style::default().fg(self.theme.skeleton_color(self.pulse));
        let rows = Layout::vertical([Constraint::Length(1); 7]).split(area);
        let shares = [30, 0, 40, 20, 0, 100, 35];

        for (row, share) in rows.iter().zip(shares) {
            if share > 0 {
                SkeletonBar::new(share, style).render(*row, buf);
            }
        }
    }

    fn render_error(&self, message: &str, area: Rect, buf: &mut Buffer) {
        let y = area.y + area.height.saturating_sub(1) / 2;
        let row = Rect::new(area.x, y, area.width, area.bottom() - y);
        Paragraph::new(Span::styled(message.to_string(), self.theme.error_style()))
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .render(row, buf);
    }

    fn render_profile(&self, user: &UserProfile, area: Rect, buf: &mut Buffer) {
        let [avatar, name, level, _, gauge, xp] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .areas(area);

        Paragraph::new(Line::from(vec![
            Span::styled("◉ ", self.theme.accent_style()),
            Span::styled(user.avatar_url.as_str(), self.theme.muted_style()),
        ]))
        .alignment(Alignment::Center)
        .render(avatar, buf);

        Paragraph::new(Span::styled(user.name.as_str(), self.theme.title_style()))
            .alignment(Alignment::Center)
            .render(name, buf);

        Paragraph::new(Span::styled(
            format!(" {} ", user.level_label()),
            self.theme.muted_style().bg(self.theme.border),
        ))
        .alignment(Alignment::Center)
        .render(level, buf);

        let gauge_area = Rect::new(
            gauge.x + 2,
            gauge.y,
            gauge.width.saturating_sub(4),
            gauge.height,
        );
        Gauge::default()
            .ratio(user.progress_percent() / 100.0)
            .label("")
            .gauge_style(Style::default().fg(self.theme.accent).bg(self.theme.track_color()))
            .use_unicode(true)
            .render(gauge_area, buf);

        Paragraph::new(Span::styled(user.xp_label(), self.theme.muted_style()))
            .alignment(Alignment::Center)
            .render(xp, buf);
    }
}

impl Widget for ProfileCard<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = self.block();
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.is_empty() {
            return;
        }

        if self.state.loading {
            self.render_skeleton(inner, buf);
            return;
        }

        match (&self.state.error, &self.state.data) {
            (Some(error), _) => self.render_error(error, inner, buf),
            (None, None) => self.render_error(FALLBACK_MESSAGE, inner, buf),
            (None, Some(user)) => self.render_profile(user, inner, buf),
        }
    }
}
