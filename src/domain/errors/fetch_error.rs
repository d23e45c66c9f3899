//! Fetch error types.

use thiserror::Error;

/// Failure of a dashboard data read.
///
/// The `Display` output is what the dashboard shows inline; the variants
/// exist for logging only.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[allow(missing_docs)]
pub enum FetchError {
    #[error("{message}")]
    Network { message: String },

    #[error("{message}")]
    MissingData { message: String },

    #[error("failed to parse response: {message}")]
    Decode { message: String },
}

impl FetchError {
    /// Creates network error.
    #[must_use]
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network {
            message: message.into(),
        }
    }

    /// Creates missing data error.
    #[must_use]
    pub fn missing(message: impl Into<String>) -> Self {
        Self::MissingData {
            message: message.into(),
        }
    }

    /// Creates decode error.
    #[must_use]
    pub fn decode(message: impl Into<String>) -> Self {
        Self::Decode {
            message: message.into(),
        }
    }
}
