use crate::domain::entities::ThemeMode;
use crate::presentation::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};
use unicode_width::UnicodeWidthStr;

trait ThemeModeExt {
    fn indicator(self) -> &'static str;
}

impl ThemeModeExt for ThemeMode {
    fn indicator(self) -> &'static str {
        match self {
            Self::Dark => "☾",
            Self::Light => "☀",
        }
    }
}

/// Styles used by [`HeaderBar`].
/// Title row with the theme indicator.
pub struct HeaderBarStyle {
    /// Bar background.
    pub background: Style,
    /// Dashboard title.
    pub title: Style,
    /// Theme indicator.
    pub toggle: Style,
    /// Toggle hint.
    pub hint: Style,
}

impl HeaderBarStyle {
    /// Derives the header styles from a theme.
    #[must_use]
    pub fn from_theme(theme: &Theme) -> Self {
        Self {
            background: Style::default().bg(theme.surface),
            title: Style::default()
                .fg(theme.text)
                .add_modifier(Modifier::BOLD),
            toggle: Style::default().fg(theme.accent).add_modifier(Modifier::BOLD),
            hint: theme.muted_style(),
        }
    }
}

pub struct HeaderBar<'a> {
    title: &'a str,
    mode: ThemeMode,
    style: HeaderBarStyle,
}

impl<'a> HeaderBar<'a> {
    /// Header showing `title`.
    #[must_use]
    pub fn new(title: &'a str, theme: &Theme) -> Self {
        Self {
            title,
            mode: theme.mode,
            style: HeaderBarStyle::from_theme(theme),
        }
    }

    fn spaced_title(&self) -> String {
        self.title
            .to_uppercase()
            .chars()
            .map(String::from)
            .collect::<Vec<_>>()
            .join(" ")
    }

    fn toggle_text(&self) -> String {
        format!("{} {}  [t] ", self.mode.indicator(), self.mode)
    }
}

impl Widget for HeaderBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.is_empty() {
            return;
        }

        buf.set_style(area, self.style.background);

        let title_y = area.y + area.height.saturating_sub(1) / 2;
        let title_area = Rect::new(area.x, title_y, area.width, 1);

        Paragraph::new(Line::from(Span::styled(self.spaced_title(), self.style.title)))
            .alignment(Alignment::Center)
            .render(title_area, buf);

        let toggle = self.toggle_text();
        let toggle_width = u16::try_from(toggle.width()).unwrap_or(u16::MAX);
        if toggle_width < area.width {
            let toggle_area = Rect::new(
                area.right().saturating_sub(toggle_width),
                title_y,
                toggle_width,
                1,
            );
            let (icon, rest) = toggle.split_at(toggle.find(' ').unwrap_or(0));
            Paragraph::new(Line::from(vec![
                Span::styled(icon.to_string(), self.style.toggle),
                Span::styled(rest.to_string(), self.style.hint),
            ]))
            .render(toggle_area, buf);
        }
    }
}
