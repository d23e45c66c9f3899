use super::adapter::ColorConverter;
use crate::domain::entities::ThemeMode;
use ratatui::style::{Color, Modifier, Style};
use std::str::FromStr;

const DARK_BACKGROUND: Color = Color::Rgb(0x15, 0x17, 0x1c);
const DARK_SURFACE: Color = Color::Rgb(0x18, 0x1a, 0x20);
const DARK_BORDER: Color = Color::Rgb(0x23, 0x24, 0x2a);
const DARK_MUTED: Color = Color::Rgb(0xb0, 0xb3, 0xc6);

const LIGHT_BACKGROUND: Color = Color::Rgb(0xf7, 0xf8, 0xfa);
const LIGHT_SURFACE: Color = Color::Rgb(0xff, 0xff, 0xff);
const LIGHT_BORDER: Color = Color::Rgb(0xe5, 0xe7, 0xeb);
const LIGHT_TEXT: Color = Color::Rgb(0x18, 0x1a, 0x20);
const LIGHT_MUTED: Color = Color::Rgb(0x88, 0x88, 0x88);

const ACCENT_ALT: Color = Color::Rgb(0x00, 0xb2, 0xff);
const ERROR: Color = Color::Rgb(0xef, 0x44, 0x44);
const DEFAULT_ACCENT: Color = Color::Rgb(0x00, 0xe6, 0xa8);

/// Resolved palette for one mode and accent colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    /// Mode the palette was built for.
    pub mode: ThemeMode,
    /// Accent colour.
    pub accent: Color,
    /// Lighter accent, used for the pulse.
    pub accent_alt: Color,
    /// Screen background.
    pub background: Color,
    /// Card background.
    pub surface: Color,
    /// Card borders.
    pub border: Color,
    /// Body text.
    pub text: Color,
    /// Secondary text.
    pub muted: Color,
    /// Error messages.
    pub error: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::from_color(ThemeMode::default(), DEFAULT_ACCENT)
    }
}

impl Theme {
    /// Parses `accent_color_str`, falling back to the default accent.
    #[must_use]
    pub fn new(mode: ThemeMode, accent_color_str: &str) -> Self {
        Self::from_color(mode, parse_color(accent_color_str))
    }

    /// Builds the palette for `mode` around `accent`.
    #[must_use]
    pub const fn from_color(mode: ThemeMode, accent: Color) -> Self {
        match mode {
            ThemeMode::Dark => Self {
                mode,
                accent,
                accent_alt: ACCENT_ALT,
                background: DARK_BACKGROUND,
                surface: DARK_SURFACE,
                border: DARK_BORDER,
                text: Color::White,
                muted: DARK_MUTED,
                error: ERROR,
            },
            ThemeMode::Light => Self {
                mode,
                accent,
                accent_alt: ACCENT_ALT,
                background: LIGHT_BACKGROUND,
                surface: LIGHT_SURFACE,
                border: LIGHT_BORDER,
                text: LIGHT_TEXT,
                muted: LIGHT_MUTED,
                error: ERROR,
            },
        }
    }

    /// Same accent, other mode.
    #[must_use]
    pub const fn with_mode(self, mode: ThemeMode) -> Self {
        Self::from_color(mode, self.accent)
    }

    /// Text on the screen background.
    #[must_use]
    pub fn base_style(&self) -> Style {
        Style::default().fg(self.text).bg(self.background)
    }

    /// Text on a card.
    #[must_use]
    pub fn card_style(&self) -> Style {
        Style::default().fg(self.text).bg(self.surface)
    }

    /// Card border.
    #[must_use]
    pub fn border_style(&self) -> Style {
        Style::default().fg(self.border)
    }

    /// Bold accent, for card titles.
    #[must_use]
    pub fn title_style(&self) -> Style {
        Style::default().fg(self.text).add_modifier(Modifier::BOLD)
    }

    /// Secondary text.
    #[must_use]
    pub fn muted_style(&self) -> Style {
        Style::default().fg(self.muted)
    }

    /// Error text.
    #[must_use]
    pub fn error_style(&self) -> Style {
        Style::default().fg(self.error).add_modifier(Modifier::BOLD)
    }

    /// Accent foreground.
    #[must_use]
    pub fn accent_style(&self) -> Style {
        Style::default().fg(self.accent).add_modifier(Modifier::BOLD)
    }

    /// Call-to-action button.
    #[must_use]
    pub fn button_style(&self) -> Style {
        Style::default()
            .fg(Color::White)
            .bg(ColorConverter::with_tone(self.accent_alt, 0.8, 0.4))
            .add_modifier(Modifier::BOLD)
    }

    /// Highlighted benefit row.
    #[must_use]
    pub fn selection_style(&self) -> Style {
        let lightness = match self.mode {
            ThemeMode::Dark => 0.18,
            ThemeMode::Light => 0.9,
        };
        Style::default().bg(ColorConverter::with_tone(self.accent, 0.4, lightness))
    }

    /// Unfilled part of gauges and the donut.
    #[must_use]
    pub fn track_color(&self) -> Color {
        self.border
    }

    /// Placeholder block colour; `pulse` alternates it to animate loading.
    #[must_use]
    pub fn skeleton_color(&self, pulse: bool) -> Color {
        if !pulse {
            return self.border;
        }
        let delta = match self.mode {
            ThemeMode::Dark => 0.06,
            ThemeMode::Light => -0.06,
        };
        ColorConverter::shift_lightness(self.border, delta)
    }
}

fn parse_color(s: &str) -> Color {
    if s.starts_with('#')
        && let Ok((r, g, b)) = parse_hex_color(s)
    {
        return Color::Rgb(r, g, b);
    }

    Color::from_str(s).unwrap_or(DEFAULT_ACCENT)
}

fn parse_hex_color(s: &str) -> Result<(u8, u8, u8), ()> {
    let s = s.trim_start_matches('#');

    if !s.is_ascii() {
        return Err(());
    }

    let expand = |c: &str| u8::from_str_radix(&c.repeat(2), 16).map_err(|_| ());
    let pair = |c: &str| u8::from_str_radix(c, 16).map_err(|_| ());

    match s.len() {
        6 => Ok((pair(&s[0..2])?, pair(&s[2..4])?, pair(&s[4..6])?)),
        3 => Ok((expand(&s[0..1])?, expand(&s[1..2])?, expand(&s[2..3])?)),
        _ => Err(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_color() {
        assert_eq!(parse_color("Red"), Color::Red);
        assert_eq!(parse_color("#00e6a8"), Color::Rgb(0, 230, 168));
        assert_eq!(parse_color("#0f0"), Color::Rgb(0, 255, 0));
        assert_eq!(parse_color("not-a-colour"), DEFAULT_ACCENT);
    }

    #[test]
    fn test_modes_differ() {
        let dark = Theme::new(ThemeMode::Dark, "#00e6a8");
        let light = dark.with_mode(ThemeMode::Light);

        assert_eq!(dark.accent, light.accent);
        assert_eq!(dark.background, DARK_BACKGROUND);
        assert_eq!(light.background, LIGHT_BACKGROUND);
        assert_ne!(dark.text, light.text);
    }

    #[test]
    fn test_skeleton_pulse_changes_colour() {
        let theme = Theme::default();
        assert_ne!(theme.skeleton_color(true), theme.skeleton_color(false));
    }
}
