//! Centralized path definitions for homework-relay
//!
//! ```text
//! ~/.config/homework-relay/
//! └── config.toml               # Non-secret settings (endpoint, retry period)
//!
//! ./.env                        # Optional secrets file, loaded at startup
//! ```

use std::path::PathBuf;

/// Application directory name under the user config directory
const APP_DIR: &str = "homework-relay";

/// Settings filename
const SETTINGS_FILE: &str = "config.toml";

/// Secrets file looked up from the working directory upward
pub const ENV_FILE: &str = ".env";

/// Get the user-level config directory.
///
/// Returns `$XDG_CONFIG_HOME/homework-relay/`, falling back to
/// `~/.config/homework-relay/`.
#[must_use]
pub fn config_dir() -> PathBuf {
    dirs::config_dir()
        .or_else(|| dirs::home_dir().map(|home| home.join(".config")))
        .unwrap_or_else(|| PathBuf::from("~/.config"))
        .join(APP_DIR)
}

/// Get the default settings file path.
#[must_use]
pub fn settings_file() -> PathBuf {
    config_dir().join(SETTINGS_FILE)
}
