//! `/usercreate` - provisions an account on the Pterodactyl panel.
//!
//! The flow itself lives in [`crate::core::provision::handle`]; this module only
//! adapts the poise context to it.

// Inner module to suppress missing_docs warnings for poise macro-generated code
mod inner {
    #![allow(missing_docs)]

    use crate::{
        bot::Context,
        core::{provision, validation::RawAccountInput},
        errors::Result,
    };
    use tracing::info;

    /// Create a user on your Pterodactyl panel
    #[allow(clippy::too_many_arguments)]
    #[poise::command(slash_command)]
    pub async fn usercreate(
        ctx: Context<'_>,
        #[description = "Username (Pterodactyl)"] username: String,
        #[description = "Email"] email: String,
        #[description = "Password (min 8 chars)"]
        #[min_length = 8]
        password: String,
        #[description = "Confirm password"]
        #[min_length = 8]
        confirm_password: String,
        #[description = "First name (optional)"] first: Option<String>,
        #[description = "Last name (optional)"] last: Option<String>,
    ) -> Result<()> {
        let data = ctx.data();
        let guild_id = ctx.guild_id().map(|id| id.get());
        let channel_id = ctx.channel_id().get();
        info!(
            invoker = %ctx.author().id,
            ?guild_id,
            channel_id,
            "Handling /usercreate"
        );

        let input = RawAccountInput {
            username,
            email,
            password,
            confirm_password,
            first,
            last,
        };
        provision::handle(&data.config, &data.panel, guild_id, channel_id, input, &ctx).await
    }
}

// Re-export all commands
pub use inner::*;

use crate::bot::Context;
use crate::core::provision::ReplySink;
use crate::core::reply::ReplyMessage;
use crate::errors::Result;

impl ReplySink for Context<'_> {
    async fn defer_ephemeral(&self) -> Result<()> {
        poise::Context::defer_ephemeral(*self).await?;
        Ok(())
    }

    async fn send(&self, reply: ReplyMessage) -> Result<()> {
        poise::Context::send(*self, reply.into()).await?;
        Ok(())
    }
}
