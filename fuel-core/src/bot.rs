//! Bot abstraction for sending messages.
//!
//! [`Bot`] is transport-agnostic; fuel-telegram implements it via teloxide and tests substitute a mock.

use crate::error::Result;
use crate::types::{Chat, Message};
use async_trait::async_trait;

/// Outbound side of the messaging platform.
#[async_trait]
pub trait Bot: Send + Sync {
    /// Sends a text message to the given chat.
    async fn send_message(&self, chat: &Chat, text: &str) -> Result<()>;

    /// Replies in the chat the message came from.
    async fn reply_to(&self, message: &Message, text: &str) -> Result<()> {
        self.send_message(&message.chat, text).await
    }
}
