//! Background handlers that run alongside the command framework.

/// Periodic presence rotation
pub mod presence;
