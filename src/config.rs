//! Configuration
//!
//! Two sources, kept apart:
//!
//! - [`Credentials`]: the three secrets, read from the environment (after an
//!   optional `.env` file). Missing any of them is fatal.
//! - [`Settings`]: non-secret knobs from an optional TOML file at
//!   `~/.config/homework-relay/config.toml`.

use std::fs;
use std::path::Path;
use std::time::Duration;

use anyhow::Context;
use reqwest::Url;
use serde::{Deserialize, Serialize};

use crate::error::RelayError;
use crate::paths;

/// Environment variable holding the review API token
pub const PRACTICUM_TOKEN: &str = "PRACTICUM_TOKEN";

/// Environment variable holding the Telegram bot token
pub const TELEGRAM_TOKEN: &str = "TELEGRAM_TOKEN";

/// Environment variable holding the destination chat id
pub const TELEGRAM_CHAT_ID: &str = "TELEGRAM_CHAT_ID";

/// The three secrets required before polling starts
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    /// Review API token, sent as `Authorization: OAuth <token>`
    pub practicum_token: String,
    /// Telegram bot token
    pub telegram_token: String,
    /// Destination chat id
    pub telegram_chat_id: String,
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("practicum_token", &"<redacted>")
            .field("telegram_token", &"<redacted>")
            .field("telegram_chat_id", &self.telegram_chat_id)
            .finish()
    }
}

impl Credentials {
    /// Read the credentials through `lookup`, failing on the first missing one
    ///
    /// Whitespace-only values count as missing.
    pub fn from_source<F>(lookup: F) -> Result<Self, RelayError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let require = |name: &str| -> Result<String, RelayError> {
            lookup(name).filter(|value| !value.trim().is_empty()).map_or_else(
                || {
                    log::error!("Can not get {name}");
                    Err(RelayError::MissingConfig(name.to_string()))
                },
                |value| {
                    log::info!("Got token - {name}");
                    Ok(value)
                },
            )
        };

        Ok(Self {
            practicum_token: require(PRACTICUM_TOKEN)?,
            telegram_token: require(TELEGRAM_TOKEN)?,
            telegram_chat_id: require(TELEGRAM_CHAT_ID)?,
        })
    }

    /// Read the credentials from the process environment
    pub fn from_env() -> Result<Self, RelayError> {
        log::debug!("Checking tokens availability");
        Self::from_source(|name| std::env::var(name).ok())
    }
}

/// Load `.env` from the working directory or a parent, if present
///
/// Variables already set in the environment are not overridden.
pub fn load_dotenv() {
    match dotenvy::dotenv() {
        Ok(path) => log::debug!("Loaded environment from {}", path.display()),
        Err(e) if e.not_found() => log::debug!("No {} file found", paths::ENV_FILE),
        Err(e) => log::warn!("Ignoring unreadable {}: {e}", paths::ENV_FILE),
    }
}

/// Non-secret settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Settings {
    /// Homework status endpoint
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    /// Telegram Bot API base URL
    #[serde(default = "default_telegram_api_url")]
    pub telegram_api_url: String,
    /// Pause between two polls, in seconds
    #[serde(default = "default_retry_period_secs")]
    pub retry_period_secs: u64,
    /// Ask only for changes since the previous clean poll instead of since startup
    #[serde(default)]
    pub advance_timestamp: bool,
}

fn default_endpoint() -> String {
    "https://practicum.yandex.ru/api/user_api/homework_statuses/".to_string()
}

fn default_telegram_api_url() -> String {
    "https://api.telegram.org".to_string()
}

const fn default_retry_period_secs() -> u64 {
    600
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            telegram_api_url: default_telegram_api_url(),
            retry_period_secs: default_retry_period_secs(),
            advance_timestamp: false,
        }
    }
}

impl Settings {
    /// Pause between two polls
    #[must_use]
    pub const fn retry_period(&self) -> Duration {
        Duration::from_secs(self.retry_period_secs)
    }

    /// Load settings from an explicit path, or from the default location
    ///
    /// An explicit path must exist. A missing default file yields defaults.
    pub fn load(explicit: Option<&Path>) -> anyhow::Result<Self> {
        explicit.map_or_else(
            || {
                let path = paths::settings_file();
                if path.exists() {
                    Self::load_from(&path)
                } else {
                    log::debug!("No settings file at {}, using defaults", path.display());
                    Ok(Self::default())
                }
            },
            Self::load_from,
        )
    }

    /// Parse a settings file
    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("reading settings from {}", path.display()))?;
        let settings: Self = toml::from_str(&content)
            .with_context(|| format!("parsing settings in {}", path.display()))?;
        settings
            .check_urls()
            .with_context(|| format!("invalid settings in {}", path.display()))?;
        log::debug!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Both service URLs must parse as absolute URLs
    fn check_urls(&self) -> anyhow::Result<()> {
        for (key, value) in [
            ("endpoint", &self.endpoint),
            ("telegram_api_url", &self.telegram_api_url),
        ] {
            Url::parse(value).with_context(|| format!("`{key}` is not a valid URL: {value}"))?;
        }
        Ok(())
    }
}
