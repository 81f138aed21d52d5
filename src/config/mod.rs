//! Process configuration for the bot and the command registrar.
//!
//! Everything is read once at startup from the environment (after `.env` has been
//! loaded) and then shared read-only for the lifetime of the process. Loading goes
//! through a lookup function rather than `std::env` directly so tests can feed
//! their own variables.

/// Guild and channel allow-list parsing
pub mod access;

/// Optional presence activity list from config.toml
pub mod presence;

/// Registrar entry point configuration
pub mod registrar;

use crate::core::access::AccessPolicy;
use crate::core::presence::PresenceActivity;
use crate::errors::{Error, Result};
use std::fmt;
use tracing::{debug, info};

/// First name used when the invoker leaves `first` empty.
pub const DEFAULT_FIRST_NAME: &str = "Discord";
/// Last name used when the invoker leaves `last` empty.
pub const DEFAULT_LAST_NAME: &str = "User";

/// Connection settings for the Pterodactyl application API.
#[derive(Clone)]
pub struct PanelConfig {
    /// Panel root URL without a trailing slash, e.g. `https://panel.example.com`
    pub base_url: String,
    /// Application API key sent as a bearer token
    pub api_key: String,
}

impl fmt::Debug for PanelConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PanelConfig")
            .field("base_url", &self.base_url)
            .field("api_key", &"<redacted>")
            .finish()
    }
}

/// Fallback names substituted when building the outbound panel request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameDefaults {
    /// Fallback for `first_name`
    pub first_name: String,
    /// Fallback for `last_name`
    pub last_name: String,
}

impl Default for NameDefaults {
    fn default() -> Self {
        Self {
            first_name: DEFAULT_FIRST_NAME.to_string(),
            last_name: DEFAULT_LAST_NAME.to_string(),
        }
    }
}

/// Complete bot configuration.
#[derive(Clone)]
pub struct AppConfig {
    /// Discord bot token
    pub discord_token: String,
    /// Remote panel connection
    pub panel: PanelConfig,
    /// Where the command may be used
    pub access: AccessPolicy,
    /// Name fallbacks for the outbound request
    pub defaults: NameDefaults,
    /// Activities cycled by the presence rotator
    pub presence: Vec<PresenceActivity>,
}

impl fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppConfig")
            .field("discord_token", &"<redacted>")
            .field("panel", &self.panel)
            .field("access", &self.access)
            .field("defaults", &self.defaults)
            .field("presence", &self.presence)
            .finish()
    }
}

impl AppConfig {
    /// Loads the configuration from the process environment.
    ///
    /// # Errors
    /// Fails when `DISCORD_TOKEN`, `PTERO_BASE_URL` or `PTERO_API_KEY` is missing, when
    /// an allow-list entry is not a numeric id, or when the presence file is malformed.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Loads the configuration through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let discord_token = required(&lookup, "DISCORD_TOKEN")?;
        let base_url = required(&lookup, "PTERO_BASE_URL")?;
        let api_key = required(&lookup, "PTERO_API_KEY")?;

        let panel = PanelConfig {
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key,
        };

        let guilds = access::parse_id_list(
            "ALLOWED_GUILDS",
            &lookup("ALLOWED_GUILDS").unwrap_or_default(),
        )?;
        let channels = access::parse_id_list(
            "ALLOWED_CHANNELS",
            &lookup("ALLOWED_CHANNELS").unwrap_or_default(),
        )?;
        let access = AccessPolicy::new(guilds, channels);

        let defaults = NameDefaults {
            first_name: lookup("DEFAULT_FIRST_NAME")
                .unwrap_or_else(|| DEFAULT_FIRST_NAME.to_string()),
            last_name: lookup("DEFAULT_LAST_NAME")
                .unwrap_or_else(|| DEFAULT_LAST_NAME.to_string()),
        };

        let presence_path =
            lookup("BOT_CONFIG_PATH").unwrap_or_else(|| presence::DEFAULT_CONFIG_PATH.to_string());
        let presence = presence::load_presence(&presence_path)?;

        debug!(?access, "Loaded access policy");
        info!(
            panel = %panel.base_url,
            presence_activities = presence.len(),
            "Loaded bot configuration"
        );

        Ok(Self {
            discord_token,
            panel,
            access,
            defaults,
            presence,
        })
    }
}

/// Reads a mandatory variable, treating blank values as missing.
pub(crate) fn required<F>(lookup: &F, name: &'static str) -> Result<String>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(name)
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
        .ok_or(Error::MissingEnv { name })
}
