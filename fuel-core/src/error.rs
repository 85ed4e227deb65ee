//! Error types for the bot core.

use thiserror::Error;

/// Top-level error for bot operations (outbound transport, handler failures).
#[derive(Error, Debug)]
pub enum BotError {
    /// Messaging platform call failed (network, API error).
    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Handler error: {0}")]
    Handler(String),
}

/// Result type for core operations; uses [`BotError`].
pub type Result<T> = std::result::Result<T, BotError>;
