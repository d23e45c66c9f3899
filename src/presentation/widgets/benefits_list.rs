use crate::application::StoreState;
use crate::domain::entities::Benefit;
use crate::presentation::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, BorderType, Paragraph, Widget, Wrap},
};

use super::skeleton::SkeletonBar;

/// Rows used by one benefit, separator included.
const CARD_HEIGHT: u16 = 4;
const SKELETON_CARDS: usize = 3;

/// Benefits card.
///
/// Shows skeleton rows while loading, the error or an empty message, or one
/// entry per benefit with the selected entry highlighted.
pub struct BenefitsList<'a> {
    state: &'a StoreState<Vec<Benefit>>,
    selected: Option<usize>,
    theme: &'a Theme,
    pulse: bool,
}

impl<'a> BenefitsList<'a> {
    /// List over the benefits store state.
    #[must_use]
    pub fn new(state: &'a StoreState<Vec<Benefit>>, theme: &'a Theme) -> Self {
        Self {
            state,
            selected: None,
            theme,
            pulse: false,
        }
    }

    /// Highlights the benefit at `selected`.
    #[must_use]
    pub const fn selected(mut self, selected: Option<usize>) -> Self {
        self.selected = selected;
        self
    }

    /// Sets the skeleton pulse phase.
    #[must_use]
    pub const fn pulse(mut self, pulse: bool) -> Self {
        self.pulse = pulse;
        self
    }

    /// First visible index that keeps the selection on screen.
    fn scroll_offset(&self, visible: usize) -> usize {
        match self.selected {
            Some(index) if visible > 0 && index >= visible => index + 1 - visible,
            _ => 0,
        }
    }

    fn card_areas(area: Rect, count: usize) -> impl Iterator<Item = Rect> {
        (0..count).map_while(move |i| {
            let offset = u16::try_from(i).ok()?.checked_mul(CARD_HEIGHT)?;
            let y = area.y.checked_add(offset)?;
            if y >= area.bottom() {
                return None;
            }
            let height = (CARD_HEIGHT - 1).min(area.bottom() - y);
            Some(Rect::new(area.x, y, area.width, height))
        })
    }

    fn render_skeleton(&self, area: Rect, buf: &mut Buffer) {
        let style = Style::default().fg(self.theme.skeleton_color(self.pulse));
        for card in Self::card_areas(area, SKELETON_CARDS) {
            let shares = [45, 80, 20];
            for (row, share) in (card.y..card.bottom()).zip(shares) {
                SkeletonBar::new(share, style)
                    .left_aligned()
                    .render(Rect::new(card.x, row, card.width, 1), buf);
            }
        }
    }

    fn render_benefit(&self, benefit: &Benefit, selected: bool, area: Rect, buf: &mut Buffer) {
        if selected {
            buf.set_style(area, self.theme.selection_style());
        }

        let marker = if selected { "▌" } else { " " };
        let lines = vec![
            Line::from(vec![
                Span::styled(marker, self.theme.accent_style()),
                Span::styled(benefit.icon.glyph(), self.theme.accent_style()),
                Span::raw(" "),
                Span::styled(benefit.title.as_str(), self.theme.title_style()),
            ]),
            Line::from(vec![
                Span::raw("  "),
                Span::styled(benefit.description.as_str(), self.theme.muted_style()),
            ]),
            Line::from(vec![
                Span::raw("  "),
                Span::styled(format!("[ {} ]", benefit.cta), self.theme.button_style()),
            ]),
        ];

        Paragraph::new(lines).render(area, buf);
    }
}

impl Widget for BenefitsList<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(self.theme.border_style())
            .title(Line::from(" Benefits ").centered())
            .style(self.theme.card_style());
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.is_empty() {
            return;
        }

        if self.state.loading {
            self.render_skeleton(inner, buf);
            return;
        }

        if let Some(error) = &self.state.error {
            Paragraph::new(Span::styled(error.as_str(), self.theme.error_style()))
                .alignment(Alignment::Center)
                .wrap(Wrap { trim: true })
                .render(inner, buf);
            return;
        }

        let benefits = &self.state.data;
        let visible = usize::from(inner.height.div_ceil(CARD_HEIGHT));
        let offset = self.scroll_offset(visible);

        let rows = benefits.iter().enumerate().skip(offset);
        for ((index, benefit), card) in rows.zip(Self::card_areas(inner, visible)) {
            self.render_benefit(benefit, self.selected == Some(index), card, buf);
        }
    }
}
