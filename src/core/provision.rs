//! The `/usercreate` flow: guard, validate, create, reply.
//!
//! [`handle`] runs the whole interaction against a [`ReplySink`]: a denied invocation
//! gets one public reply and nothing else; an admitted one is deferred ephemerally
//! and then gets exactly one ephemeral reply.

use crate::config::AppConfig;
use crate::core::access::AccessPolicy;
use crate::core::failure;
use crate::core::panel::{NewPanelUser, PanelAccount, PanelClient};
use crate::core::reply::{self, ReplyMessage};
use crate::core::validation::{self, RawAccountInput, ValidatedAccount};
use crate::errors::{Error, Result};
use std::future::Future;
use tracing::{error, info, instrument, warn};

/// Where an interaction's acknowledgement and reply go.
pub trait ReplySink: Sync {
    /// Acknowledges the interaction privately, so later replies are ephemeral.
    fn defer_ephemeral(&self) -> impl Future<Output = Result<()>> + Send;

    /// Sends `reply` to the invoker.
    fn send(&self, reply: ReplyMessage) -> impl Future<Output = Result<()>> + Send;
}

/// Checks the allow-lists.
///
/// # Errors
/// Returns the public denial reply when the invocation's origin is not allowed.
pub fn admit(
    policy: &AccessPolicy,
    guild_id: Option<u64>,
    channel_id: u64,
) -> std::result::Result<(), ReplyMessage> {
    let decision = policy.authorize(guild_id, channel_id);
    match decision.denial_message() {
        None => Ok(()),
        Some(message) => {
            info!(?guild_id, channel_id, ?decision, "Denied /usercreate");
            Err(ReplyMessage::public_text(message))
        }
    }
}

/// Validates the input and creates the panel user.
///
/// # Errors
/// `Error::Validation` with every violation, or the panel client's error.
pub async fn provision(
    config: &AppConfig,
    panel: &PanelClient,
    input: RawAccountInput,
) -> Result<(ValidatedAccount, PanelAccount)> {
    let account = validation::validate(input).map_err(Error::Validation)?;
    let request = NewPanelUser::new(&account, &config.defaults);
    let created = panel.create_user(&request).await?;
    Ok((account, created))
}

/// Runs [`provision`] and renders its outcome as an ephemeral reply.
#[instrument(skip_all, fields(username = %input.username, email = %input.email))]
pub async fn execute(
    config: &AppConfig,
    panel: &PanelClient,
    input: RawAccountInput,
) -> ReplyMessage {
    match provision(config, panel, input).await {
        Ok((account, created)) => {
            info!(account_id = %created.id(), "Provisioned panel user");
            reply::format_success(&config.panel.base_url, &account, &created)
        }
        Err(e) => {
            match &e {
                Error::Validation(violations) => {
                    let fields: Vec<&str> = violations.iter().map(|v| v.field).collect();
                    warn!(?fields, "Rejected /usercreate input");
                }
                other => error!(error = %other, "Failed to provision panel user"),
            }
            let (title, detail) = failure::describe(&e);
            reply::format_error(title, &detail)
        }
    }
}

/// Answers one `/usercreate` invocation from `guild_id`/`channel_id`.
///
/// # Errors
/// Only errors from `sink`; provisioning failures become error replies.
pub async fn handle<S: ReplySink>(
    config: &AppConfig,
    panel: &PanelClient,
    guild_id: Option<u64>,
    channel_id: u64,
    input: RawAccountInput,
    sink: &S,
) -> Result<()> {
    if let Err(denial) = admit(&config.access, guild_id, channel_id) {
        return sink.send(denial).await;
    }

    sink.defer_ephemeral().await?;
    let reply = execute(config, panel, input).await;
    sink.send(reply).await
}
