//! Colour theme.

/// Colour conversion helpers.
pub mod adapter;
mod service;

pub use service::Theme;
