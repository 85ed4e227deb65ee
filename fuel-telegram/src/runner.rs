//! Webhook runner: resolves the bot identity, registers the webhook, then serves the router
//! until Ctrl+C or SIGTERM.

use std::sync::Arc;

use anyhow::Result;
use handler_chain::HandlerChain;
use tokio::net::TcpListener;
use tokio::signal;
use tracing::{error, info, instrument, warn};

use crate::bot_adapter::TelegramBotAdapter;
use crate::config::TelegramConfig;
use crate::server::{router, AppState};

/// Starts the webhook service with the given handler chain.
///
/// Only config problems (bad APP_URL, bind address, API URL) and a failed bind are fatal.
/// getMe and setWebhook failures are logged and the server starts anyway.
#[instrument(skip_all, fields(port = config.port))]
pub async fn run_webhook(config: TelegramConfig, handler_chain: HandlerChain) -> Result<()> {
    let webhook_url = config.webhook_url()?;
    let addr = config.socket_addr()?;
    let adapter = TelegramBotAdapter::from_config(&config)?;

    match adapter.username().await {
        Ok(Some(username)) => info!(username = %username, "Bot identity resolved"),
        Ok(None) => info!("Bot identity resolved (no username)"),
        Err(e) => warn!(error = %e, "getMe failed"),
    }

    match adapter.set_webhook(webhook_url).await {
        Ok(()) => info!(app_url = %config.app_url, "Webhook registered"),
        Err(e) => error!(error = %e, app_url = %config.app_url, "Webhook registration failed"),
    }

    let state = Arc::new(AppState::new(
        config.bot_token.clone(),
        Arc::new(adapter),
        handler_chain,
    ));
    let app = router(state);

    let listener = TcpListener::bind(addr).await?;
    info!(addr = %listener.local_addr()?, "Webhook server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Webhook server stopped");
    Ok(())
}

/// Resolves on Ctrl+C or (unix) SIGTERM.
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!(error = %e, "Error handling Ctrl+C signal");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => info!("Received Ctrl+C signal"),
        _ = terminate => info!("Received SIGTERM signal"),
    }
}
