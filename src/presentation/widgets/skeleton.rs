use ratatui::{buffer::Buffer, layout::Rect, style::Style, widgets::Widget};

/// Loading placeholder bar.
///
/// Widths are a share of the available width so the placeholder keeps the
/// rough shape of the content it stands in for.
pub struct SkeletonBar {
    percent: u16,
    centered: bool,
    style: Style,
}

impl SkeletonBar {
    /// Bar covering `percent` of the width, centered.
    #[must_use]
    pub fn new(percent: u16, style: Style) -> Self {
        Self {
            percent: percent.min(100),
            centered: true,
            style,
        }
    }

    /// Anchors the bar to the left edge.
    #[must_use]
    pub const fn left_aligned(mut self) -> Self {
        self.centered = false;
        self
    }

    fn width_in(&self, area: Rect) -> u16 {
        let width = u32::from(area.width) * u32::from(self.percent) / 100;
        u16::try_from(width).unwrap_or(area.width).max(1).min(area.width)
    }
}

impl Widget for SkeletonBar {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.is_empty() {
            return;
        }

        let width = self.width_in(area);
        let x = if self.centered {
            area.x + (area.width - width) / 2
        } else {
            area.x
        };

        for cx in x..x + width {
            buf[(cx, area.y)].set_char('█').set_style(self.style);
        }
    }
}
