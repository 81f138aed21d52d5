//! Core business logic - framework-agnostic provisioning pipeline.
//!
//! Nothing in here talks to the Discord gateway. The bot layer feeds an invocation in
//! and sends whatever [`reply::ReplyMessage`] comes out.

/// Guild/channel access guard
pub mod access;
/// Failure normalization into user-facing messages
pub mod failure;
/// Pterodactyl application API client
pub mod panel;
/// Presence rotation schedule
pub mod presence;
/// Guard → validation → panel → reply flow
pub mod provision;
/// Reply rendering
pub mod reply;
/// `usercreate` input validation
pub mod validation;
