//! Error types for Shopfront

use thiserror::Error;

/// Main error type for Shopfront operations.
///
/// Event dispatch never produces these; they only surface from setup paths
/// (config loading, selector parsing, logging initialization).
#[derive(Error, Debug)]
pub enum ShopfrontError {
    /// A CSS-like selector could not be parsed
    #[error("Invalid selector `{selector}`: {reason}")]
    InvalidSelector {
        /// The selector text as written
        selector: String,
        /// What was wrong with it
        reason: String,
    },

    /// Page config could not be deserialized
    #[error("Config error: {0}")]
    Config(#[from] serde_json::Error),

    /// General I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The global tracing subscriber could not be installed
    #[error("Logging setup failed: {0}")]
    Logging(String),
}

impl ShopfrontError {
    pub(crate) fn invalid_selector(selector: &str, reason: impl Into<String>) -> Self {
        Self::InvalidSelector {
            selector: selector.to_string(),
            reason: reason.into(),
        }
    }
}

/// Result type alias using ShopfrontError
pub type ShopfrontResult<T> = Result<T, ShopfrontError>;
