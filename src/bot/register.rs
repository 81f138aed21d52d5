//! Publishes the bot's slash commands to Discord.
//!
//! Uses the same command definitions the bot serves, so the registered options
//! always match what the handler expects.

use super::commands;
use crate::config::registrar::RegistrarConfig;
use crate::errors::Result;
use poise::serenity_prelude as serenity;
use std::fmt;
use tracing::{info, instrument};

/// Where the commands were registered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegistrationScope {
    /// Only in one guild; updates show up instantly
    Guild(u64),
    /// For every guild the application is in
    Global,
}

impl RegistrationScope {
    /// Global unless a guild is configured.
    #[must_use]
    pub const fn for_config(config: &RegistrarConfig) -> Self {
        match config.guild_id {
            Some(guild_id) => Self::Guild(guild_id),
            None => Self::Global,
        }
    }
}

impl fmt::Display for RegistrationScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Guild(id) => write!(f, "guild {id}"),
            Self::Global => f.write_str("global"),
        }
    }
}

/// Overwrites the application's commands in the configured scope.
///
/// # Errors
/// Returns `Error::Framework` when Discord rejects the request.
#[instrument(skip_all, fields(application_id = config.application_id))]
pub async fn register_commands(config: &RegistrarConfig) -> Result<RegistrationScope> {
    let definitions = poise::builtins::create_application_commands(&commands::all());
    let count = definitions.len();

    let http = serenity::Http::new(&config.discord_token);
    http.set_application_id(serenity::ApplicationId::new(config.application_id));

    let scope = RegistrationScope::for_config(config);
    match scope {
        RegistrationScope::Guild(guild_id) => {
            serenity::GuildId::new(guild_id)
                .set_commands(&http, definitions)
                .await?;
        }
        RegistrationScope::Global => {
            serenity::Command::set_global_commands(&http, definitions).await?;
        }
    }

    info!("Registered {} {} command(s)", count, scope);
    Ok(scope)
}
