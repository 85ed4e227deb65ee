//! Core types: user, chat, message, handler response, and Handler trait.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

/// User identity (id, username, names).
#[derive(Debug, Clone)]
pub struct User {
    pub id: i64,
    pub username: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

/// Chat (private, group, channel) identity. Replies go back to `id`.
#[derive(Debug, Clone)]
pub struct Chat {
    pub id: i64,
    pub chat_type: String,
}

/// One inbound text message.
#[derive(Debug, Clone)]
pub struct Message {
    pub id: String,
    pub user: User,
    pub chat: Chat,
    /// Raw message text as sent by the user (not trimmed).
    pub content: String,
    pub created_at: DateTime<Utc>,
}

impl Message {
    /// True when the text is a bot command (`/start`, `/help`, ...): `/` at offset 0, as Telegram
    /// marks commands.
    pub fn is_command(&self) -> bool {
        self.content.starts_with('/')
    }
}

/// Handler result for the chain. `Reply(text)` carries the text to send back to the chat.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HandlerResponse {
    /// Pass to next handler.
    Continue,
    /// Stop the chain; nothing to send.
    Stop,
    /// Skip this handler, try next.
    Ignore,
    /// Stop the chain and send this text back.
    Reply(String),
}

/// Converts a transport-specific user type to core [`User`].
pub trait ToCoreUser: Send + Sync {
    fn to_core(&self) -> User;
}

/// Converts a transport-specific message type to core [`Message`].
pub trait ToCoreMessage: Send + Sync {
    fn to_core(&self) -> Message;
}

/// Single handler concept: optional before / handle / after. Chain runs all before → handle until Stop/Reply → all after (reverse).
#[async_trait]
pub trait Handler: Send + Sync {
    /// Runs before the handle phase. Return false to stop the chain.
    async fn before(&self, _message: &Message) -> crate::error::Result<bool> {
        Ok(true)
    }
    /// Processes the message. Return Stop or Reply to end the handle phase. Default: Continue.
    async fn handle(&self, _message: &Message) -> crate::error::Result<HandlerResponse> {
        Ok(HandlerResponse::Continue)
    }
    /// Runs after the handle phase (reverse order), with the final response.
    async fn after(
        &self,
        _message: &Message,
        _response: &HandlerResponse,
    ) -> crate::error::Result<()> {
        Ok(())
    }
}
