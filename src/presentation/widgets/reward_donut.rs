//! Reward points donut view.

use std::f64::consts::TAU;

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Style},
    text::Span,
    widgets::{Block, BorderType, Paragraph, Widget, Wrap},
};

use super::skeleton::SkeletonBar;
use crate::application::StoreState;
use crate::domain::entities::RewardPoints;
use crate::presentation::theme::Theme;

/// Inner radius as a share of the outer radius.
const CUTOUT: f64 = 0.75;
/// Terminal cells are roughly twice as tall as they are wide.
const CELL_ASPECT: f64 = 0.5;
const RING_CHAR: char = '█';

/// Ring geometry for one area.
#[derive(Debug, Clone, Copy)]
struct Ring {
    center_x: f64,
    center_y: f64,
    radius: f64,
}

impl Ring {
    fn fit(area: Rect) -> Self {
        let width = f64::from(area.width);
        let height = f64::from(area.height);
        Self {
            center_x: width / 2.0,
            center_y: height / 2.0,
            radius: (height / 2.0).min(width * CELL_ASPECT / 2.0),
        }
    }

    /// Clockwise angle from twelve o'clock in `0.0..TAU`, or `None` off the ring.
    fn angle_at(&self, col: u16, row: u16) -> Option<f64> {
        let dx = (f64::from(col) + 0.5 - self.center_x) * CELL_ASPECT;
        let dy = f64::from(row) + 0.5 - self.center_y;
        let distance = dx.hypot(dy);

        if distance > self.radius || distance < self.radius * CUTOUT {
            return None;
        }

        Some(dx.atan2(-dy).rem_euclid(TAU))
    }
}

/// Renders the rewards store as a donut chart.
pub struct RewardDonut<'a> {
    state: &'a StoreState<RewardPoints>,
    theme: &'a Theme,
    pulse: bool,
}

impl<'a> RewardDonut<'a> {
    /// Donut over the rewards store state.
    #[must_use]
    pub fn new(state: &'a StoreState<RewardPoints>, theme: &'a Theme) -> Self {
        Self {
            state,
            theme,
            pulse: false,
        }
    }

    /// Sets the skeleton pulse phase.
    #[must_use]
    pub const fn pulse(mut self, pulse: bool) -> Self {
        self.pulse = pulse;
        self
    }

    fn draw_ring(area: Rect, buf: &mut Buffer, fraction: f64, filled: Color, track: Color) {
        let ring = Ring::fit(area);
        let sweep = fraction.clamp(0.0, 1.0) * TAU;

        for row in 0..area.height {
            for col in 0..area.width {
                let Some(angle) = ring.angle_at(col, row) else {
                    continue;
                };
                let color = if angle < sweep { filled } else { track };
                buf[(area.x + col, area.y + row)]
                    .set_char(RING_CHAR)
                    .set_fg(color);
            }
        }
    }

    fn render_centered_lines(lines: Vec<Span<'_>>, area: Rect, buf: &mut Buffer) {
        let count = u16::try_from(lines.len()).unwrap_or(u16::MAX);
        let top = area.y + area.height.saturating_sub(count) / 2;
        for (offset, span) in (0..count).zip(lines) {
            let y = top + offset;
            if y >= area.bottom() {
                break;
            }
            Paragraph::new(span)
                .alignment(Alignment::Center)
                .render(Rect::new(area.x, y, area.width, 1), buf);
        }
    }

    fn render_skeleton(&self, chart: Rect, caption: Rect, buf: &mut Buffer) {
        let shade = self.theme.skeleton_color(self.pulse);
        Self::draw_ring(chart, buf, 0.0, shade, shade);

        let style = Style::default().fg(shade);
        let middle = chart.y + chart.height / 2;
        if middle > chart.y {
            SkeletonBar::new(12, style).render(Rect::new(chart.x, middle - 1, chart.width, 1), buf);
        }
        SkeletonBar::new(8, style).render(Rect::new(chart.x, middle, chart.width, 1), buf);
        SkeletonBar::new(30, style).render(caption, buf);
    }

    fn render_points(&self, points: &RewardPoints, chart: Rect, caption: Rect, buf: &mut Buffer) {
        Self::draw_ring(
            chart,
            buf,
            points.fraction(),
            self.theme.accent,
            self.theme.track_color(),
        );

        Self::render_centered_lines(
            vec![
                Span::styled(points.points.to_string(), self.theme.title_style()),
                Span::styled(format!("/ {}", points.max_points), self.theme.muted_style()),
            ],
            chart,
            buf,
        );

        Paragraph::new(Span::styled("Reward Points", self.theme.muted_style()))
            .alignment(Alignment::Center)
            .render(caption, buf);
    }
}

impl Widget for RewardDonut<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(self.theme.border_style())
            .style(self.theme.card_style());
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.is_empty() {
            return;
        }

        let [chart, caption] =
            Layout::vertical([Constraint::Min(1), Constraint::Length(1)]).areas(inner);

        if self.state.loading {
            self.render_skeleton(chart, caption, buf);
            return;
        }

        if let Some(error) = &self.state.error {
            let y = inner.y + inner.height.saturating_sub(1) / 2;
            Paragraph::new(Span::styled(error.as_str(), self.theme.error_style()))
                .alignment(Alignment::Center)
                .wrap(Wrap { trim: true })
                .render(Rect::new(inner.x, y, inner.width, inner.bottom() - y), buf);
            return;
        }

        self.render_points(&self.state.data, chart, caption, buf);
    }
}
