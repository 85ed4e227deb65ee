//! Inbound update decoding: a Telegram update is either a new text message or something we ignore.

use fuel_core::{Message, ToCoreMessage};
use teloxide::types::{Update, UpdateKind};

use crate::adapters::TelegramMessageWrapper;

/// One decoded webhook payload.
#[derive(Debug, Clone)]
pub enum InboundUpdate {
    /// New message with text (plain text or a command).
    Text(Message),
    /// Any other update (edits, media without text, callback queries, unknown kinds).
    Other { update_id: u32 },
}

impl InboundUpdate {
    /// Classifies a typed update.
    pub fn from_update(update: &Update) -> Self {
        match &update.kind {
            UpdateKind::Message(msg) if msg.text().is_some() => {
                InboundUpdate::Text(TelegramMessageWrapper(msg).to_core())
            }
            _ => InboundUpdate::Other {
                update_id: update.id.0,
            },
        }
    }

    /// Deserializes a webhook body against the Bot API update schema.
    pub fn from_slice(body: &[u8]) -> serde_json::Result<Self> {
        let update: Update = serde_json::from_slice(body)?;
        Ok(Self::from_update(&update))
    }
}
