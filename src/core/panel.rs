//! Pterodactyl application API client.
//!
//! Only user creation is needed. Requests are sent exactly once; user creation on the
//! panel is not idempotent.

use crate::config::{NameDefaults, PanelConfig};
use crate::core::validation::ValidatedAccount;
use crate::errors::{Error, Result};
use reqwest::Client;
use reqwest::header::{ACCEPT, HeaderMap, HeaderValue};
use serde::Serialize;
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, error, info, instrument};

/// Path of the user creation endpoint, relative to the panel root.
pub const USERS_ENDPOINT: &str = "/api/application/users";
/// Upper bound for a single panel call.
pub const PANEL_TIMEOUT: Duration = Duration::from_secs(15);
/// Rendered in place of an account id the panel did not return.
pub const UNKNOWN_ACCOUNT_ID: &str = "unknown";

/// JSON body of `POST /api/application/users`.
#[derive(Serialize, PartialEq, Eq)]
pub struct NewPanelUser<'a> {
    /// Login email
    pub email: &'a str,
    /// Panel username
    pub username: &'a str,
    /// Given name, or the configured default
    pub first_name: &'a str,
    /// Family name, or the configured default
    pub last_name: &'a str,
    /// Initial password
    pub password: &'a str,
}

impl<'a> NewPanelUser<'a> {
    /// Maps a validated account onto the panel schema, filling in missing names.
    #[must_use]
    pub fn new(account: &'a ValidatedAccount, defaults: &'a NameDefaults) -> Self {
        Self {
            email: account.email(),
            username: account.username(),
            first_name: account.first().unwrap_or(defaults.first_name.as_str()),
            last_name: account.last().unwrap_or(defaults.last_name.as_str()),
            password: account.password(),
        }
    }
}

/// The panel's response body for a created user, kept as loosely-typed JSON.
#[derive(Debug, Clone, PartialEq)]
pub struct PanelAccount(pub Value);

type IdStrategy = fn(&Value) -> Option<&Value>;

fn attributes_id(body: &Value) -> Option<&Value> {
    body.get("attributes")?.get("id")
}

fn top_level_id(body: &Value) -> Option<&Value> {
    body.get("id")
}

// Tried in order; the first non-null hit wins
const ID_STRATEGIES: [IdStrategy; 2] = [attributes_id, top_level_id];

impl PanelAccount {
    /// Account id used for the admin link, or [`UNKNOWN_ACCOUNT_ID`].
    #[must_use]
    pub fn id(&self) -> String {
        ID_STRATEGIES
            .iter()
            .find_map(|strategy| strategy(&self.0).filter(|id| !id.is_null()))
            .map_or_else(
                || UNKNOWN_ACCOUNT_ID.to_string(),
                |id| match id {
                    Value::String(s) => s.clone(),
                    other => other.to_string(),
                },
            )
    }
}

/// Client for the panel's application API.
#[derive(Debug, Clone)]
pub struct PanelClient {
    client: Client,
    users_url: String,
    api_key: String,
}

impl PanelClient {
    /// Builds a client with the fixed timeout and JSON headers.
    ///
    /// # Errors
    /// Returns `Error::Transport` if the underlying HTTP client cannot be constructed.
    pub fn new(config: &PanelConfig) -> Result<Self> {
        Self::with_timeout(config, PANEL_TIMEOUT)
    }

    fn with_timeout(config: &PanelConfig, timeout: Duration) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let client = Client::builder()
            .timeout(timeout)
            .default_headers(headers)
            .build()?;

        debug!("Creating panel client for {}", config.base_url);
        Ok(Self {
            client,
            users_url: format!("{}{USERS_ENDPOINT}", config.base_url.trim_end_matches('/')),
            api_key: config.api_key.clone(),
        })
    }

    /// Creates a panel user.
    ///
    /// # Errors
    /// `Error::Transport` when the request could not be completed (including timeouts),
    /// `Error::RemoteApi` when the panel answered with a non-success status.
    #[instrument(skip(self, user), fields(username = %user.username, email = %user.email))]
    pub async fn create_user(&self, user: &NewPanelUser<'_>) -> Result<PanelAccount> {
        debug!("Sending user creation request to panel");

        let response = self
            .client
            .post(&self.users_url)
            .bearer_auth(&self.api_key)
            .json(user)
            .send()
            .await
            .inspect_err(|e| error!(error = %e, "Panel request failed"))?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            error!(status = status.as_u16(), "Panel rejected user creation");
            return Err(Error::RemoteApi {
                status: status.as_u16(),
                body,
            });
        }

        // Non-JSON success bodies still count as success; the id just becomes unknown
        let account = PanelAccount(serde_json::from_str(&body).unwrap_or(Value::String(body)));
        info!(account_id = %account.id(), "Panel user created");
        Ok(account)
    }
}
