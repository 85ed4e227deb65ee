//! # Handler chain
//!
//! Runs a sequence of handlers for each message. Each handler has optional before/handle/after:
//! all before run in order (any false stops the chain); then handle runs until Stop or Reply;
//! then all after run in reverse order with the final response.

use fuel_core::{Handler, HandlerResponse, Message, Result};
use std::sync::Arc;
use tracing::{debug, info, instrument};

/// Chain of handlers: before (all) → handle (until Stop/Reply) → after (reverse).
#[derive(Clone, Default)]
pub struct HandlerChain {
    handlers: Vec<Arc<dyn Handler>>,
}

impl HandlerChain {
    /// Creates an empty chain.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a handler.
    pub fn add_handler(mut self, handler: Arc<dyn Handler>) -> Self {
        self.handlers.push(handler);
        self
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }

    /// Runs all before → handle until Stop/Reply → all after in reverse. Returns the first Stop or Reply, or Continue.
    #[instrument(skip(self, message), fields(chat_id = message.chat.id, message_id = %message.id))]
    pub async fn handle(&self, message: &Message) -> Result<HandlerResponse> {
        let mut final_response = HandlerResponse::Continue;

        debug!(user_id = message.user.id, "step: handler_chain started");

        for h in &self.handlers {
            let name = std::any::type_name_of_val(h.as_ref());
            if !h.before(message).await? {
                info!(user_id = message.user.id, handler = %name, "step: before returned false, chain stopped");
                return Ok(HandlerResponse::Stop);
            }
        }

        for h in &self.handlers {
            let name = std::any::type_name_of_val(h.as_ref());
            let response = h.handle(message).await?;
            let (response_type, reply_len) = match &response {
                HandlerResponse::Continue => ("Continue", None),
                HandlerResponse::Stop => ("Stop", None),
                HandlerResponse::Ignore => ("Ignore", None),
                HandlerResponse::Reply(s) => ("Reply", Some(s.len())),
            };
            debug!(
                handler = %name,
                response_type = %response_type,
                reply_len = ?reply_len,
                "step: handler handle done"
            );

            match response {
                HandlerResponse::Stop | HandlerResponse::Reply(_) => {
                    final_response = response;
                    break;
                }
                HandlerResponse::Continue | HandlerResponse::Ignore => {}
            }
        }

        for h in self.handlers.iter().rev() {
            h.after(message, &final_response).await?;
        }

        debug!(user_id = message.user.id, "step: handler_chain finished");

        Ok(final_response)
    }
}

// Tests live in tests/handler_chain_test.rs
