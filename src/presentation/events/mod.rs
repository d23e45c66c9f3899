//! Event handling.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Result of event handling.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventResult {
    /// Continue processing.
    Continue,
    /// Fetch every store again.
    Refresh,
    /// Exit application.
    Exit,
}

/// Dashboard command bound to a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyCommand {
    /// Leave the dashboard.
    Quit,
    /// Flip dark/light mode.
    ToggleTheme,
    /// Fetch all stores again.
    Refresh,
    /// Move the benefit cursor up.
    Up,
    /// Move the benefit cursor down.
    Down,
    /// Open or close the benefit modal.
    Select,
    /// Close the modal, or quit when none is open.
    Dismiss,
}

/// Footer hint for a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyHint {
    /// Action label.
    pub label: &'static str,
    /// Key as displayed.
    pub key: &'static str,
}

/// Hints shown in the footer.
pub const KEY_HINTS: &[KeyHint] = &[
    KeyHint {
        label: "Theme",
        key: "t",
    },
    KeyHint {
        label: "Refresh",
        key: "r",
    },
    KeyHint {
        label: "Move",
        key: "↑↓",
    },
    KeyHint {
        label: "Open",
        key: "Enter",
    },
    KeyHint {
        label: "Quit",
        key: "q",
    },
];

/// Terminal key mapping.
pub struct EventHandler;

impl EventHandler {
    /// Maps a key event to a dashboard command.
    #[must_use]
    pub fn command_for(key: &KeyEvent) -> Option<KeyCommand> {
        if key.kind == KeyEventKind::Release {
            return None;
        }

        if Self::is_quit_event(key) {
            return Some(KeyCommand::Quit);
        }

        if key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) {
            return None;
        }

        match key.code {
            KeyCode::Char('t') => Some(KeyCommand::ToggleTheme),
            KeyCode::Char('r') => Some(KeyCommand::Refresh),
            KeyCode::Up | KeyCode::Char('k') => Some(KeyCommand::Up),
            KeyCode::Down | KeyCode::Char('j') => Some(KeyCommand::Down),
            KeyCode::Enter => Some(KeyCommand::Select),
            KeyCode::Esc => Some(KeyCommand::Dismiss),
            _ => None,
        }
    }

    /// Checks if key is a quit event.
    #[must_use]
    pub fn is_quit_event(key: &KeyEvent) -> bool {
        matches!(
            key,
            KeyEvent {
                code: KeyCode::Char('q'),
                modifiers: KeyModifiers::NONE,
                ..
            } | KeyEvent {
                code: KeyCode::Char('c'),
                modifiers: KeyModifiers::CONTROL,
                ..
            }
        )
    }
}
