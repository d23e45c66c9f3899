//! Benefit entity and its icon vocabulary.

use serde::{Deserialize, Serialize};

/// Icon attached to a benefit.
///
/// The wire format carries a free-form key. Known keys map to a glyph;
/// anything else is kept as `Unknown` and shown as the raw key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum BenefitIcon {
    /// Discount tag (`FaTag`).
    Tag,
    /// Voucher ticket (`FaTicketAlt`).
    Ticket,
    /// Gift box (`FaGift`).
    Gift,
    /// Key with no glyph mapping.
    Unknown(String),
}

impl BenefitIcon {
    /// Resolves a wire key.
    #[must_use]
    pub fn from_key(key: &str) -> Self {
        match key {
            "FaTag" => Self::Tag,
            "FaTicketAlt" => Self::Ticket,
            "FaGift" => Self::Gift,
            other => Self::Unknown(other.to_string()),
        }
    }

    /// Returns the wire key.
    #[must_use]
    pub fn key(&self) -> &str {
        match self {
            Self::Tag => "FaTag",
            Self::Ticket => "FaTicketAlt",
            Self::Gift => "FaGift",
            Self::Unknown(key) => key,
        }
    }

    /// Text rendered in place of the icon.
    #[must_use]
    pub fn glyph(&self) -> &str {
        match self {
            Self::Tag => "◈",
            Self::Ticket => "▤",
            Self::Gift => "✦",
            Self::Unknown(key) => key,
        }
    }
}

impl From<String> for BenefitIcon {
    fn from(key: String) -> Self {
        match Self::from_key(&key) {
            Self::Unknown(_) => Self::Unknown(key),
            known => known,
        }
    }
}

impl From<BenefitIcon> for String {
    fn from(icon: BenefitIcon) -> Self {
        match icon {
            BenefitIcon::Unknown(key) => key,
            known => known.key().to_string(),
        }
    }
}

/// A perk offered to the user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Benefit {
    /// Headline.
    pub title: String,
    /// Icon key.
    pub icon: BenefitIcon,
    /// Longer description shown in the list and the modal.
    pub description: String,
    /// Call-to-action label.
    pub cta: String,
}

impl Benefit {
    /// Creates a benefit.
    #[must_use]
    pub fn new(
        title: impl Into<String>,
        icon: BenefitIcon,
        description: impl Into<String>,
        cta: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            icon,
            description: description.into(),
            cta: cta.into(),
        }
    }
}
