//! # fuel-telegram
//!
//! Telegram webhook layer: env config, update decoding into [`InboundUpdate`], the
//! [`fuel_core::Bot`] implementation, the axum router (`GET /`, `POST /webhook/{token}`)
//! and [`run_webhook`], which registers the webhook and serves until shutdown.
//! No calculation logic lives here; replies come from the injected handler chain.

mod adapters;
mod bot_adapter;
mod config;
mod runner;
mod server;
mod update;

pub use adapters::{TelegramMessageWrapper, TelegramUserWrapper};
pub use bot_adapter::TelegramBotAdapter;
pub use config::TelegramConfig;
pub use runner::{run_webhook, shutdown_signal};
pub use server::{dispatch, router, AppState, WebhookError};
pub use update::InboundUpdate;
