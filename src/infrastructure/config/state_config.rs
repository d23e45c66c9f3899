use serde::{Deserialize, Serialize};

use crate::domain::entities::ThemeMode;

/// Persisted user state.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateConfig {
    /// Theme picked with the toggle. Absent until the first toggle.
    #[serde(default)]
    pub theme_mode: Option<ThemeMode>,
}

impl StateConfig {
    /// Theme to start with.
    #[must_use]
    pub fn effective_theme_mode(&self) -> ThemeMode {
        self.theme_mode.unwrap_or_default()
    }
}
