//! User profile entity.

use serde::{Deserialize, Serialize};

/// Profile shown in the dashboard header card.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    /// Avatar image URL.
    pub avatar_url: String,
    /// Display name.
    pub name: String,
    /// Current level.
    pub level: u32,
    /// Experience collected in the current level.
    pub xp: f64,
    /// Experience needed to finish the current level.
    pub xp_max: f64,
}

impl UserProfile {
    /// Creates a new profile.
    #[must_use]
    pub fn new(
        avatar_url: impl Into<String>,
        name: impl Into<String>,
        level: u32,
        xp: f64,
        xp_max: f64,
    ) -> Self {
        Self {
            avatar_url: avatar_url.into(),
            name: name.into(),
            level,
            xp,
            xp_max,
        }
    }

    /// Level progress in percent, clamped to `0..=100`.
    ///
    /// `xp <= xp_max` is not enforced on the data itself; the clamp keeps
    /// the progress bar inside its track either way.
    #[must_use]
    pub fn progress_percent(&self) -> f64 {
        if self.xp_max <= 0.0 || !self.xp_max.is_finite() || !self.xp.is_finite() {
            return 0.0;
        }
        (self.xp / self.xp_max * 100.0).clamp(0.0, 100.0)
    }

    /// Level badge text.
    #[must_use]
    pub fn level_label(&self) -> String {
        format!("Lvl {}", self.level)
    }

    /// Experience line shown below the progress bar.
    #[must_use]
    pub fn xp_label(&self) -> String {
        format!("{} / {} XP", self.xp, self.xp_max)
    }
}
