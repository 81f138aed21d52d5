#![allow(clippy::result_large_err)]

use dotenvy::dotenv;
use ptero_userbot::{bot, config::AppConfig, core::panel::PanelClient, errors::Result};
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // 1. Initialize tracing (as early as possible)
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // 2. Load .env file; variables may also come from the real environment
    dotenv().ok();
    info!("Attempted to load .env file.");

    // 3. Load configuration; missing secrets stop us before the gateway is touched
    let app_config = AppConfig::from_env()
        .inspect_err(|e| error!("Critical error loading application configuration: {}", e))?;
    let app_config = Arc::new(app_config);

    // 4. Build the panel client
    let panel = PanelClient::new(&app_config.panel)
        .inspect_err(|e| error!("Failed to build panel client: {}", e))?;

    // 5. Run the bot
    bot::run_bot(app_config, panel).await?;

    Ok(())
}
