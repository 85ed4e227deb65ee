use anyhow::{Context, Result};
use fuel_core::init_tracing;
use fuel_telegram::{run_webhook, TelegramConfig};
use std::path::Path;
use tracing::{info, instrument};

use crate::chain::build_handler_chain;

/// Main entry: init logging, build the handler chain, then run the webhook service.
#[instrument(skip(config))]
pub async fn run_bot(config: TelegramConfig) -> Result<()> {
    if let Some(parent) = config
        .log_file
        .as_deref()
        .and_then(|f| Path::new(f).parent())
        .filter(|p| !p.as_os_str().is_empty())
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create log directory {}", parent.display()))?;
    }
    init_tracing(config.log_file.as_deref())?;

    info!(
        app_url = %config.app_url,
        port = config.port,
        custom_api_url = config.telegram_api_url.is_some(),
        "Starting fuel bot"
    );

    run_webhook(config, build_handler_chain()).await
}
