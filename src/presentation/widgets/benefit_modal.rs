use crate::domain::entities::Benefit;
use crate::presentation::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Flex, Layout, Margin, Rect},
    text::{Line, Span},
    widgets::{Block, BorderType, Clear, Paragraph, Widget, Wrap},
};

const MAX_WIDTH: u16 = 56;
const HEIGHT: u16 = 11;

/// Popup with the details of one benefit.
pub struct BenefitModal<'a> {
    benefit: &'a Benefit,
    theme: &'a Theme,
}

impl<'a> BenefitModal<'a> {
    /// Popup for `benefit`.
    #[must_use]
    pub const fn new(benefit: &'a Benefit, theme: &'a Theme) -> Self {
        Self { benefit, theme }
    }

    /// Centered rectangle the popup occupies inside `area`.
    #[must_use]
    pub fn popup_area(area: Rect) -> Rect {
        let width = MAX_WIDTH.min(area.width.saturating_sub(4)).max(area.width.min(20));
        let [row] = Layout::vertical([Constraint::Length(HEIGHT.min(area.height))])
            .flex(Flex::Center)
            .areas(area);
        let [popup] = Layout::horizontal([Constraint::Length(width)])
            .flex(Flex::Center)
            .areas(row);
        popup
    }
}

impl Widget for BenefitModal<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let popup = Self::popup_area(area);
        if popup.is_empty() {
            return;
        }

        Clear.render(popup, buf);

        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(self.theme.accent_style())
            .title(Line::from(vec![
                Span::raw(" "),
                Span::styled(self.benefit.icon.glyph(), self.theme.accent_style()),
                Span::raw(" "),
                Span::styled(self.benefit.title.as_str(), self.theme.title_style()),
                Span::raw(" "),
            ]))
            .title_bottom(Line::from(" Esc close ").right_aligned())
            .style(self.theme.card_style());
        let inner = block.inner(popup);
        block.render(popup, buf);

        if inner.is_empty() {
            return;
        }

        let [description, cta] = Layout::vertical([Constraint::Min(1), Constraint::Length(1)])
            .areas(inner.inner(Margin::new(1, 1)));

        Paragraph::new(Span::styled(
            self.benefit.description.as_str(),
            self.theme.muted_style(),
        ))
        .wrap(Wrap { trim: true })
        .render(description, buf);

        Paragraph::new(Span::styled(
            format!("[ {} ]", self.benefit.cta),
            self.theme.button_style(),
        ))
        .alignment(Alignment::Center)
        .render(cta, buf);
    }
}
