//! Bot layer - Discord-specific interface and command handlers
//!
//! This module wires the core pipeline into poise: the shared [`BotData`], the
//! `/usercreate` command, the presence rotator and command registration.

/// Discord command implementations
pub mod commands;
/// Gateway-side background handlers (presence rotation)
pub mod handlers;
/// Slash command registration for the registrar binary
pub mod register;

use crate::config::AppConfig;
use crate::core::failure;
use crate::core::panel::PanelClient;
use crate::core::reply::{self, ReplyMessage};
use crate::errors::{Error, Result};
use poise::serenity_prelude as serenity;
use std::sync::Arc;
use tracing::{error, info, instrument};

/// Shared data available to all bot commands.
pub struct BotData {
    /// Read-only configuration loaded at startup
    pub config: Arc<AppConfig>,
    /// Panel API client, shared across invocations
    pub panel: PanelClient,
}

impl BotData {
    /// Creates a new `BotData` from the loaded configuration and panel client.
    #[must_use]
    pub const fn new(config: Arc<AppConfig>, panel: PanelClient) -> Self {
        Self { config, panel }
    }
}

/// Poise context used by every command.
pub type Context<'a> = poise::Context<'a, BotData, Error>;

impl From<ReplyMessage> for poise::CreateReply {
    fn from(message: ReplyMessage) -> Self {
        let mut reply = Self::default().ephemeral(message.ephemeral);

        if let Some(content) = message.content {
            reply = reply.content(content);
        }

        if let Some(embed) = message.embed {
            let mut built = serenity::CreateEmbed::new()
                .title(embed.title)
                .colour(embed.colour)
                .fields(
                    embed
                        .fields
                        .into_iter()
                        .map(|field| (field.name, field.value, field.inline)),
                );
            if let Some(description) = embed.description {
                built = built.description(description);
            }
            if let Some(footer) = embed.footer {
                built = built.footer(serenity::CreateEmbedFooter::new(footer));
            }
            if embed.timestamped {
                built = built.timestamp(serenity::Timestamp::now());
            }
            reply = reply.embed(built);
        }

        reply
    }
}

#[allow(clippy::panic)]
async fn on_error(error: poise::FrameworkError<'_, BotData, Error>) {
    match error {
        poise::FrameworkError::Setup { error, .. } => {
            panic!("Failed to start bot: {error:?}");
        }
        poise::FrameworkError::Command { error, ctx, .. } => {
            error!("Error in command `{}`: {:?}", ctx.command().name, error);
            let (title, detail) = failure::describe(&error);
            let message = reply::format_error(title, &detail);
            if let Err(e) = ctx.send(message.into()).await {
                error!("Failed to send error message: {}", e);
            }
        }
        error => {
            if let Err(e) = poise::builtins::on_error(error).await {
                error!("Error while handling error: {}", e);
            }
        }
    }
}

/// Connects to the gateway and serves `/usercreate` until the client stops.
///
/// # Errors
/// Returns `Error::Framework` when the client cannot be built or the gateway connection fails.
#[instrument(skip_all)]
pub async fn run_bot(config: Arc<AppConfig>, panel: PanelClient) -> Result<()> {
    let token = config.discord_token.clone();
    let activities: Arc<[_]> = config.presence.clone().into();
    let data = BotData::new(config, panel);

    let framework = poise::Framework::builder()
        .options(poise::FrameworkOptions {
            commands: commands::all(),
            on_error: |error| Box::pin(on_error(error)),
            ..Default::default()
        })
        .setup(move |ctx, ready, _framework| {
            Box::pin(async move {
                info!("Logged in as {}", ready.user.name);
                handlers::presence::spawn_presence_rotator(ctx.clone(), activities);
                Ok(data)
            })
        })
        .build();

    // Slash commands only need guild events
    let intents = serenity::GatewayIntents::GUILDS;

    info!("Setting up Serenity client for Poise framework...");
    let mut client = serenity::ClientBuilder::new(&token, intents)
        .framework(framework)
        .await
        .inspect_err(|e| error!("Error creating client: {:?}", e))?;

    info!("Starting bot client...");
    client
        .start()
        .await
        .inspect_err(|e| error!("Client error: {:?}", e))?;

    Ok(())
}
