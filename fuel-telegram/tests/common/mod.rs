//! Shared test helpers: a recording [`fuel_core::Bot`] and Telegram update payloads.

#![allow(dead_code)]

use async_trait::async_trait;
use fuel_core::{Bot, BotError, Chat, Result};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;

/// One recorded `send_message(chat, text)` call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentRecord {
    pub chat_id: i64,
    pub text: String,
}

/// Mock Bot that forwards every sent message to a channel held by the test.
pub struct MockBot {
    sent_tx: mpsc::UnboundedSender<SentRecord>,
    fail: bool,
}

impl MockBot {
    pub fn with_receiver() -> (Arc<Self>, mpsc::UnboundedReceiver<SentRecord>) {
        let (sent_tx, sent_rx) = mpsc::unbounded_channel();
        (Arc::new(Self { sent_tx, fail: false }), sent_rx)
    }

    /// Records the call, then fails it like an unreachable platform would.
    pub fn failing() -> (Arc<Self>, mpsc::UnboundedReceiver<SentRecord>) {
        let (sent_tx, sent_rx) = mpsc::unbounded_channel();
        (Arc::new(Self { sent_tx, fail: true }), sent_rx)
    }
}

#[async_trait]
impl Bot for MockBot {
    async fn send_message(&self, chat: &Chat, text: &str) -> Result<()> {
        let _ = self.sent_tx.send(SentRecord {
            chat_id: chat.id,
            text: text.to_string(),
        });
        if self.fail {
            return Err(BotError::Transport("platform unreachable".to_string()));
        }
        Ok(())
    }
}

/// Waits for the next sent message, failing the test after one second.
pub async fn next_sent(rx: &mut mpsc::UnboundedReceiver<SentRecord>) -> SentRecord {
    tokio::time::timeout(Duration::from_secs(1), rx.recv())
        .await
        .expect("timed out waiting for reply")
        .expect("mock bot dropped")
}

/// Asserts nothing is sent within a short window.
///
/// The router owns the only sender, so a closed channel (`Ok(None)`) after `oneshot`
/// means nothing was sent, same as a timeout.
pub async fn assert_nothing_sent(rx: &mut mpsc::UnboundedReceiver<SentRecord>) {
    let res = tokio::time::timeout(Duration::from_millis(200), rx.recv()).await;
    assert!(!matches!(res, Ok(Some(_))), "unexpected reply: {:?}", res);
}

/// A `message` update with the given text in private chat `chat_id`.
pub fn text_update(update_id: u32, chat_id: i64, text: &str) -> String {
    serde_json::json!({
        "update_id": update_id,
        "message": {
            "message_id": 1,
            "date": 1706529600,
            "chat": {"id": chat_id, "type": "private", "first_name": "Test"},
            "from": {"id": chat_id, "is_bot": false, "first_name": "Test"},
            "text": text
        }
    })
    .to_string()
}
