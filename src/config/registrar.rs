//! Configuration for the `register-commands` binary.

use super::required;
use crate::errors::{Error, Result};
use std::fmt;

/// What the registrar needs to publish the slash command.
#[derive(Clone)]
pub struct RegistrarConfig {
    /// Discord bot token
    pub discord_token: String,
    /// Application (client) id the commands belong to
    pub application_id: u64,
    /// Guild to register in; global registration when absent
    pub guild_id: Option<u64>,
}

impl fmt::Debug for RegistrarConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegistrarConfig")
            .field("discord_token", &"<redacted>")
            .field("application_id", &self.application_id)
            .field("guild_id", &self.guild_id)
            .finish()
    }
}

impl RegistrarConfig {
    /// Loads the registrar configuration from the process environment.
    ///
    /// # Errors
    /// Fails when `DISCORD_TOKEN` or `DISCORD_CLIENT_ID` is missing, or an id is not numeric.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Loads the registrar configuration through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let discord_token = required(&lookup, "DISCORD_TOKEN")?;
        let application_id =
            parse_snowflake("DISCORD_CLIENT_ID", &required(&lookup, "DISCORD_CLIENT_ID")?)?;
        let guild_id = lookup("DISCORD_GUILD_ID")
            .map(|raw| raw.trim().to_string())
            .filter(|raw| !raw.is_empty())
            .map(|raw| parse_snowflake("DISCORD_GUILD_ID", &raw))
            .transpose()?;

        Ok(Self {
            discord_token,
            application_id,
            guild_id,
        })
    }
}

fn parse_snowflake(variable: &str, raw: &str) -> Result<u64> {
    raw.parse().map_err(|e| Error::Config {
        message: format!("{variable} is not a valid id '{raw}': {e}"),
    })
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;

    #[test]
    fn test_global_registration_without_guild() {
        let config = RegistrarConfig::from_lookup(|key| match key {
            "DISCORD_TOKEN" => Some("token".to_string()),
            "DISCORD_CLIENT_ID" => Some("1234".to_string()),
            _ => None,
        })
        .unwrap();
        assert_eq!(config.application_id, 1234);
        assert_eq!(config.guild_id, None);
    }

    #[test]
    fn test_guild_registration() {
        let config = RegistrarConfig::from_lookup(|key| match key {
            "DISCORD_TOKEN" => Some("token".to_string()),
            "DISCORD_CLIENT_ID" => Some("1234".to_string()),
            "DISCORD_GUILD_ID" => Some(" 5678 ".to_string()),
            _ => None,
        })
        .unwrap();
        assert_eq!(config.guild_id, Some(5678));
    }

    #[test]
    fn test_missing_client_id_is_fatal() {
        let result = RegistrarConfig::from_lookup(|key| {
            (key == "DISCORD_TOKEN").then(|| "token".to_string())
        });
        assert!(matches!(
            result,
            Err(Error::MissingEnv {
                name: "DISCORD_CLIENT_ID"
            })
        ));
    }

    #[test]
    fn test_non_numeric_guild_is_rejected() {
        let result = RegistrarConfig::from_lookup(|key| match key {
            "DISCORD_TOKEN" => Some("token".to_string()),
            "DISCORD_CLIENT_ID" => Some("1234".to_string()),
            "DISCORD_GUILD_ID" => Some("my-guild".to_string()),
            _ => None,
        });
        assert!(matches!(result, Err(Error::Config { .. })));
    }
}
