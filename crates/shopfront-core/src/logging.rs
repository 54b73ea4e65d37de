//! Tracing subscriber setup.
//!
//! ```ignore
//! use shopfront_core::logging::LoggingBuilder;
//!
//! LoggingBuilder::new()
//!     .with_filter("shopfront_core=debug")
//!     .init()?;
//! ```

use tracing_subscriber::prelude::*;
use tracing_subscriber::EnvFilter;

use crate::error::{ShopfrontError, ShopfrontResult};

/// Filter used when neither the builder nor `RUST_LOG` supplies one
pub const DEFAULT_FILTER: &str = "shopfront=info,shopfront_core=info,shopfront_ui=info";

/// Builder for the global tracing subscriber.
pub struct LoggingBuilder {
    env_filter: Option<String>,
}

impl Default for LoggingBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl LoggingBuilder {
    pub fn new() -> Self {
        Self { env_filter: None }
    }

    /// Set the filter directives (e.g. "shopfront=info,shopfront_core=debug").
    pub fn with_filter(mut self, filter: impl Into<String>) -> Self {
        self.env_filter = Some(filter.into());
        self
    }

    /// Resolve the filter: explicit directives, then `RUST_LOG`, then [`DEFAULT_FILTER`].
    pub fn build_filter(&self) -> ShopfrontResult<EnvFilter> {
        match &self.env_filter {
            Some(directives) => EnvFilter::try_new(directives)
                .map_err(|e| ShopfrontError::Logging(format!("bad filter `{}`: {}", directives, e))),
            None => Ok(EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))),
        }
    }

    /// Install as the global default subscriber.
    pub fn init(self) -> ShopfrontResult<()> {
        let filter = self.build_filter()?;
        let fmt_layer = tracing_subscriber::fmt::layer();

        tracing_subscriber::registry()
            .with(filter)
            .with(fmt_layer)
            .try_init()
            .map_err(|e| ShopfrontError::Logging(e.to_string()))
    }
}

/// Install console logging with `filter`, or `RUST_LOG`, or the default filter.
pub fn init_logging(filter: Option<&str>) -> ShopfrontResult<()> {
    let builder = LoggingBuilder::new();
    match filter {
        Some(directives) => builder.with_filter(directives).init(),
        None => builder.init(),
    }
}
