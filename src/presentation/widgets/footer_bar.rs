use crate::presentation::events::KeyHint;
use crate::presentation::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};
use unicode_width::UnicodeWidthStr;

/// Styles used by [`FooterBar`].
/// Key hints and the copyright line.
pub struct FooterBarStyle {
    /// Bar background.
    pub background: Style,
    /// Hint labels.
    pub label_style: Style,
    /// Key names.
    pub key_style: Style,
    /// Copyright line.
    pub info: Style,
}

impl FooterBarStyle {
    /// Derives the footer styles from a theme.
    #[must_use]
    pub fn from_theme(theme: &Theme) -> Self {
        use crate::presentation::theme::adapter::ColorConverter;

        let key_bg = ColorConverter::with_tone(theme.accent, 0.5, 0.12);

        Self {
            background: Style::default().bg(theme.surface),
            label_style: Style::default()
                .bg(theme.accent)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
            key_style: Style::default().bg(key_bg).fg(Color::White),
            info: theme.muted_style(),
        }
    }
}

pub struct FooterBar<'a> {
    hints: &'a [KeyHint],
    year: i32,
    style: FooterBarStyle,
}

impl<'a> FooterBar<'a> {
    /// Footer for `hints`, with the copyright for `year`.
    #[must_use]
    pub fn new(hints: &'a [KeyHint], year: i32, theme: &Theme) -> Self {
        Self {
            hints,
            year,
            style: FooterBarStyle::from_theme(theme),
        }
    }

    /// Copyright line for the configured year.
    #[must_use]
    pub fn copyright(&self) -> String {
        format!(
            "© {} CRED Garage Inspired Dashboard. All rights reserved.",
            self.year
        )
    }

    fn hint_spans(&self) -> Vec<Span<'_>> {
        let mut spans = Vec::new();
        for (i, hint) in self.hints.iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw(" "));
            }
            spans.push(Span::styled(format!(" {} ", hint.label), self.style.label_style));
            spans.push(Span::styled(format!(" {} ", hint.key), self.style.key_style));
        }
        spans
    }

    fn hints_width(&self) -> usize {
        self.hints
            .iter()
            .map(|hint| hint.label.width() + hint.key.width() + 4)
            .sum::<usize>()
            + self.hints.len().saturating_sub(1)
    }
}

impl Widget for FooterBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.is_empty() {
            return;
        }

        buf.set_style(area, self.style.background);

        let copyright = self.copyright();
        let copyright_area = Rect::new(area.x, area.bottom() - 1, area.width, 1);

        if area.height >= 2 {
            let hints_area = Rect::new(area.x, area.y, area.width, 1);
            Paragraph::new(Line::from(self.hint_spans()))
                .alignment(Alignment::Center)
                .render(hints_area, buf);
        } else if self.hints_width() + copyright.width() + 2 <= usize::from(area.width) {
            Paragraph::new(Line::from(self.hint_spans())).render(area, buf);
        }

        Paragraph::new(Line::from(Span::styled(copyright, self.style.info)))
            .alignment(if area.height >= 2 {
                Alignment::Center
            } else {
                Alignment::Right
            })
            .render(copyright_area, buf);
    }
}
