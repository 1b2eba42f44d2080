// ABOUTME: Configuration loading for the log browser
// Reads an optional TOML file and lets command line flags override it

use crate::error::{LogBrowserError, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::debug;
use url::Url;

/// Endpoint the log relay listens on when nothing else is configured.
pub const DEFAULT_URL: &str = "ws://localhost:3000/ws";

/// First line shown in a fresh scrollback.
pub const WELCOME_MESSAGE: &str = "Welcome to the Log Browser!";

const DEFAULT_TICK_RATE_MS: u64 = 250;

/// Settings read from `config.toml`; every field is optional in the file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// WebSocket endpoint pushing newline-delimited text frames
    pub url: String,
    /// Line the scrollback is seeded with
    pub welcome: String,
    /// How long the UI loop waits for keyboard input before draining the stream
    pub tick_rate_ms: u64,
    /// Directory for the application's own log files
    pub log_dir: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            url: DEFAULT_URL.to_string(),
            welcome: WELCOME_MESSAGE.to_string(),
            tick_rate_ms: DEFAULT_TICK_RATE_MS,
            log_dir: None,
        }
    }
}

impl Config {
    fn project_dirs() -> Option<ProjectDirs> {
        ProjectDirs::from("", "", "log-browser")
    }

    /// Location of the config file when `--config` is not given
    pub fn default_path() -> Option<PathBuf> {
        Self::project_dirs().map(|dirs| dirs.config_dir().join("config.toml"))
    }

    /// Load configuration from an explicit path, or from the default location.
    ///
    /// An explicit path must exist. A missing file at the default location
    /// yields the defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load_from(path),
            None => match Self::default_path() {
                Some(path) if path.exists() => Self::load_from(&path),
                _ => {
                    debug!("No config file found, using defaults");
                    Ok(Self::default())
                }
            },
        }
    }

    /// Load configuration from `path`, which must exist
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(|source| LogBrowserError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Self = toml::from_str(&contents)?;
        debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Replace the endpoint when one was given on the command line
    #[must_use]
    pub fn with_url(mut self, url: Option<String>) -> Self {
        if let Some(url) = url {
            self.url = url;
        }
        self
    }

    /// Check that the configured endpoint is usable
    pub fn validate(&self) -> Result<()> {
        validate_url(&self.url)
    }

    /// Input poll interval, never zero
    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_rate_ms.max(1))
    }

    /// Directory for the application's log files
    pub fn log_dir(&self) -> PathBuf {
        self.log_dir
            .clone()
            .or_else(|| Self::project_dirs().map(|dirs| dirs.data_dir().join("logs")))
            .unwrap_or_else(|| PathBuf::from(".log-browser/logs"))
    }
}

/// Accept only well-formed `ws://` and `wss://` URLs that name a host.
pub fn validate_url(url: &str) -> Result<()> {
    let parsed = Url::parse(url).map_err(|source| LogBrowserError::UrlParse {
        url: url.to_string(),
        source,
    })?;

    let has_host = parsed.host_str().is_some_and(|host| !host.is_empty());
    if !matches!(parsed.scheme(), "ws" | "wss") || !has_host {
        return Err(LogBrowserError::InvalidUrl(url.to_string()));
    }
    Ok(())
}
