//! Shared test utilities for `ptero-userbot`.
//!
//! Provides sample inputs/configuration and helpers for standing up a `wiremock`
//! server in place of the Pterodactyl panel.

use crate::config::{AppConfig, NameDefaults, PanelConfig};
use crate::core::access::AccessPolicy;
use crate::core::panel::USERS_ENDPOINT;
use crate::core::presence::default_activities;
use crate::core::validation::RawAccountInput;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Input that passes validation.
pub fn sample_input() -> RawAccountInput {
    RawAccountInput {
        username: "steve".to_string(),
        email: "steve@example.com".to_string(),
        password: "hunter22".to_string(),
        confirm_password: "hunter22".to_string(),
        first: None,
        last: None,
    }
}

/// Panel settings pointing at `server`.
pub fn panel_config(server: &MockServer, api_key: &str) -> PanelConfig {
    PanelConfig {
        base_url: server.uri(),
        api_key: api_key.to_string(),
    }
}

/// Unrestricted configuration pointing at `server`.
pub fn sample_config(server: &MockServer) -> AppConfig {
    AppConfig {
        discord_token: "test-token".to_string(),
        panel: panel_config(server, "test-api-key"),
        access: AccessPolicy::default(),
        defaults: NameDefaults::default(),
        presence: default_activities(),
    }
}

/// A JSON response with `status` and a verbatim `body`.
pub fn json_response(status: u16, body: &str) -> ResponseTemplate {
    ResponseTemplate::new(status).set_body_raw(body.as_bytes().to_vec(), "application/json")
}

/// Mounts a user-creation endpoint answering with `response`, expected to be hit
/// exactly `times` times before `server` is dropped.
pub async fn mount_users_endpoint(server: &MockServer, response: ResponseTemplate, times: u64) {
    Mock::given(method("POST"))
        .and(path(USERS_ENDPOINT))
        .respond_with(response)
        .expect(times)
        .mount(server)
        .await;
}

/// A base URL nothing is listening on.
///
/// Pooled `MockServer`s keep listening after being dropped, so the port is reserved
/// with a plain listener instead.
#[allow(clippy::unwrap_used)]
pub fn unreachable_base_url() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}")
}
