//! Registers `/usercreate` with Discord, in one guild or globally.

use dotenvy::dotenv;
use ptero_userbot::{bot::register, config::registrar::RegistrarConfig, errors::Result};
use tracing::error;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();
    dotenv().ok();

    // An Err return makes the process exit non-zero
    let config = RegistrarConfig::from_env()
        .inspect_err(|e| error!("Failed to register commands: {}", e))?;
    register::register_commands(&config)
        .await
        .inspect_err(|e| error!("Failed to register commands: {}", e))?;

    Ok(())
}
