//! Reward points entity.

use serde::{Deserialize, Serialize};

/// Points collected towards the reward cap.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RewardPoints {
    /// Points collected.
    pub points: f64,
    /// Points cap.
    pub max_points: f64,
}

impl RewardPoints {
    /// Creates reward points.
    #[must_use]
    pub const fn new(points: f64, max_points: f64) -> Self {
        Self { points, max_points }
    }

    /// Points still missing, never negative.
    #[must_use]
    pub fn remaining(&self) -> f64 {
        (self.max_points - self.points).max(0.0)
    }

    /// Filled share of the donut in `0.0..=1.0`.
    #[must_use]
    pub fn fraction(&self) -> f64 {
        if self.max_points <= 0.0 || !self.max_points.is_finite() || !self.points.is_finite() {
            return 0.0;
        }
        (self.points / self.max_points).clamp(0.0, 1.0)
    }
}
