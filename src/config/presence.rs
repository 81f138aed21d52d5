//! Presence activity loading from config.toml
//!
//! The file is optional. When present it replaces the built-in activity cycle:
//!
//! ```toml
//! [[presence]]
//! kind = "watching"
//! name = "Pterodactyl users"
//! ```

use crate::core::presence::{PresenceActivity, default_activities};
use crate::errors::{Error, Result};
use serde::Deserialize;
use std::path::Path;

/// Config file looked up when `BOT_CONFIG_PATH` is unset.
pub const DEFAULT_CONFIG_PATH: &str = "config.toml";

/// Shape of the optional config file.
#[derive(Debug, Deserialize)]
pub struct FileConfig {
    /// Activities to cycle through, in display order
    #[serde(default)]
    pub presence: Vec<PresenceActivity>,
}

/// Parses the presence section of a config file.
///
/// # Errors
/// Returns `Error::Config` when the TOML is malformed or an activity kind is unknown.
pub fn parse_presence(contents: &str) -> Result<Vec<PresenceActivity>> {
    let file: FileConfig = toml::from_str(contents).map_err(|e| Error::Config {
        message: format!("Failed to parse config file: {e}"),
    })?;
    Ok(file.presence)
}

/// Loads the activity cycle, falling back to the built-in list when the file is
/// missing or declares no activities.
pub fn load_presence<P: AsRef<Path>>(path: P) -> Result<Vec<PresenceActivity>> {
    let path = path.as_ref();
    if !path.exists() {
        tracing::debug!("No config file at {:?}, using default presence", path);
        return Ok(default_activities());
    }

    let contents = std::fs::read_to_string(path).map_err(|e| Error::Config {
        message: format!("Failed to read config file {}: {e}", path.display()),
    })?;
    let activities = parse_presence(&contents)?;

    if activities.is_empty() {
        Ok(default_activities())
    } else {
        Ok(activities)
    }
}
