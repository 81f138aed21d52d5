//! Reply rendering for `/usercreate`.
//!
//! Replies are built as plain data here and converted to poise replies in the bot
//! layer. Anything produced by [`format_success`] or [`format_error`] is ephemeral;
//! only access denials go out publicly.

use crate::core::failure::truncate_detail;
use crate::core::panel::PanelAccount;
use crate::core::validation::ValidatedAccount;

/// Discord's green (`Colors.Green`)
pub const SUCCESS_COLOUR: u32 = 0x0057_F287;
/// Discord's red (`Colors.Red`)
pub const ERROR_COLOUR: u32 = 0x00ED_4245;
/// Footer on success embeds
pub const FOOTER_TEXT: &str = "Pterodactyl User Bot";

/// One embed field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmbedField {
    /// Field heading
    pub name: String,
    /// Field body
    pub value: String,
    /// Shown side by side with neighbouring inline fields
    pub inline: bool,
}

impl EmbedField {
    fn new(name: &str, value: impl Into<String>, inline: bool) -> Self {
        Self {
            name: name.to_string(),
            value: value.into(),
            inline,
        }
    }
}

/// Embed content independent of the Discord builder types.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmbedMessage {
    /// Embed title
    pub title: String,
    /// Text under the title
    pub description: Option<String>,
    /// Fields in display order
    pub fields: Vec<EmbedField>,
    /// Sidebar colour as `0xRRGGBB`
    pub colour: u32,
    /// Footer text
    pub footer: Option<String>,
    /// Stamp the embed with the send time
    pub timestamped: bool,
}

/// A reply ready to be sent back to the invoker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplyMessage {
    /// Plain message text
    pub content: Option<String>,
    /// Single embed, if any
    pub embed: Option<EmbedMessage>,
    /// Visible only to the invoking user
    pub ephemeral: bool,
}

impl ReplyMessage {
    /// Public plain-text reply, used for access denials.
    #[must_use]
    pub fn public_text(text: &str) -> Self {
        Self {
            content: Some(text.to_string()),
            embed: None,
            ephemeral: false,
        }
    }

    fn ephemeral_embed(embed: EmbedMessage) -> Self {
        Self {
            content: None,
            embed: Some(embed),
            ephemeral: true,
        }
    }

    /// The embed field called `name`, if any.
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&str> {
        self.embed
            .as_ref()?
            .fields
            .iter()
            .find(|field| field.name == name)
            .map(|field| field.value.as_str())
    }
}

/// Deep link to the panel's admin page for an account.
#[must_use]
pub fn admin_view_url(base_url: &str, account_id: &str) -> String {
    format!(
        "{}/admin/users/view/{account_id}",
        base_url.trim_end_matches('/')
    )
}

/// Success summary. The password is never included.
#[must_use]
pub fn format_success(
    base_url: &str,
    account: &ValidatedAccount,
    created: &PanelAccount,
) -> ReplyMessage {
    let admin_url = admin_view_url(base_url, &created.id());

    ReplyMessage::ephemeral_embed(EmbedMessage {
        title: "✅ Panel user created".to_string(),
        description: None,
        fields: vec![
            EmbedField::new("Username", format!("`{}`", account.username()), true),
            EmbedField::new("Email", format!("`{}`", account.email()), true),
            EmbedField::new("Panel Login", base_url, false),
            EmbedField::new("Admin View", admin_url, false),
        ],
        colour: SUCCESS_COLOUR,
        footer: Some(FOOTER_TEXT.to_string()),
        timestamped: true,
    })
}

/// Error summary; `detail` is cut to the platform-safe length.
#[must_use]
pub fn format_error(title: &str, detail: &str) -> ReplyMessage {
    ReplyMessage::ephemeral_embed(EmbedMessage {
        title: format!("❌ {title}"),
        description: Some(truncate_detail(detail)),
        fields: Vec::new(),
        colour: ERROR_COLOUR,
        footer: None,
        timestamped: false,
    })
}
