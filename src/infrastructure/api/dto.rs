use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::warn;

use crate::domain::entities::{Benefit, RewardPoints, UserProfile};
use crate::domain::errors::FetchError;

/// Consolidated mock document, shared by `/api/mock-data` and the local fixture.
///
/// Sections stay raw until a store asks for one, so a malformed section
/// only fails its own resource.
#[derive(Debug, Default, Deserialize)]
pub struct MockDataResponse {
    /// Raw `user` section.
    #[serde(default)]
    pub user: Option<Value>,
    /// Raw `xpPoints` section.
    #[serde(default, rename = "xpPoints")]
    pub xp_points: Option<Value>,
    /// Raw `benefits` section.
    #[serde(default)]
    pub benefits: Option<Value>,
}

impl MockDataResponse {
    /// Decodes the user section.
    pub fn into_user(self) -> Result<UserProfile, FetchError> {
        Resource::User.decode_section(self.user)
    }

    /// Decodes the points section.
    pub fn into_reward_points(self) -> Result<RewardPoints, FetchError> {
        Resource::XpPoints.decode_section(self.xp_points)
    }

    /// Decodes the benefits section.
    pub fn into_benefits(self) -> Result<Vec<Benefit>, FetchError> {
        Resource::Benefits.decode_section(self.benefits)
    }
}

/// `/benefits` body: either a bare list or wrapped in an object.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum BenefitsResponse {
    /// Bare array.
    List(Vec<Benefit>),
    /// `{ "benefits": [...] }`.
    Wrapped {
        /// Wrapped list.
        benefits: Option<Vec<Benefit>>,
    },
}

impl BenefitsResponse {
    /// Benefits list; a `null` list inside the wrapper is missing data.
    pub fn into_benefits(self) -> Result<Vec<Benefit>, FetchError> {
        match self {
            Self::List(benefits) | Self::Wrapped {
                benefits: Some(benefits),
            } => Ok(benefits),
            Self::Wrapped { benefits: None } => Err(Resource::Benefits.missing()),
        }
    }
}

/// One of the three dashboard resources.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resource {
    /// User profile.
    User,
    /// Reward points.
    XpPoints,
    /// Benefits list.
    Benefits,
}

impl Resource {
    /// Discrete endpoint path.
    pub const fn path(self) -> &'static str {
        match self {
            Self::User => "/user",
            Self::XpPoints => "/xpPoints",
            Self::Benefits => "/benefits",
        }
    }

    /// Network error shown when the request fails.
    pub fn fetch_failed(self) -> FetchError {
        FetchError::network(match self {
            Self::User => "Failed to fetch user data",
            Self::XpPoints => "Failed to fetch Xp Points data",
            Self::Benefits => "Failed to fetch benefits",
        })
    }

    /// Error for an absent or `null` resource.
    pub fn missing(self) -> FetchError {
        FetchError::missing(match self {
            Self::User => "User not found in response",
            Self::XpPoints => "XP Points not found in response",
            Self::Benefits => "Benefits not found in response",
        })
    }

    /// Decodes one section of the consolidated document.
    ///
    /// An absent or `null` section is missing data; a section of the wrong
    /// shape is a decode error.
    pub fn decode_section<T: DeserializeOwned>(
        self,
        section: Option<Value>,
    ) -> Result<T, FetchError> {
        match section {
            None | Some(Value::Null) => Err(self.missing()),
            Some(value) => serde_json::from_value(value).map_err(|e| {
                warn!(error = %e, resource = %self, "Failed to parse section");
                FetchError::decode(e.to_string())
            }),
        }
    }
}

impl std::fmt::Display for Resource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.path().trim_start_matches('/'))
    }
}
