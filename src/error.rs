// ABOUTME: Error types for the log browser library
// Connection failures are not errors here; they surface as a Closed stream event

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading configuration or validating the endpoint.
#[derive(Debug, Error)]
pub enum LogBrowserError {
    /// The config file could not be read
    #[error("Failed to read config file {path}: {source}")]
    ConfigRead {
        /// File that was requested
        path: PathBuf,
        /// Underlying read failure
        #[source]
        source: std::io::Error,
    },

    /// The config file is not valid TOML for [`crate::config::Config`]
    #[error("Invalid config file: {0}")]
    ConfigParse(#[from] toml::de::Error),

    /// The endpoint parsed but is not a `ws`/`wss` URL with a host
    #[error("Invalid WebSocket URL '{0}': expected ws:// or wss:// with a host")]
    InvalidUrl(String),

    /// The endpoint is not a URL at all
    #[error("Malformed WebSocket URL '{url}': {source}")]
    UrlParse {
        /// Endpoint as given
        url: String,
        /// Parser failure
        #[source]
        source: url::ParseError,
    },

    /// Any other IO failure
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result alias for [`LogBrowserError`]
pub type Result<T> = std::result::Result<T, LogBrowserError>;
