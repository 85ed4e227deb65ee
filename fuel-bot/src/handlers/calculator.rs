//! Replies to plain text with the fuel calculation (or the input error message).

use async_trait::async_trait;
use fuel_calc::calc_text;
use fuel_core::{Handler, HandlerResponse, Message, Result};
use tracing::debug;

/// Terminal handler: every text that does not look like a command gets a reply.
/// Text whose trimmed form starts with `/` (e.g. ` /start`) is left unanswered.
#[derive(Clone, Default)]
pub struct CalculatorHandler;

impl CalculatorHandler {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Handler for CalculatorHandler {
    async fn handle(&self, message: &Message) -> Result<HandlerResponse> {
        let text = message.content.trim();
        if text.starts_with('/') {
            return Ok(HandlerResponse::Ignore);
        }
        let reply = calc_text(text);
        debug!(chat_id = message.chat.id, reply = %reply, "Calculated");
        Ok(HandlerResponse::Reply(reply))
    }
}
