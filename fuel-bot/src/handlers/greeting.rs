//! Answers any command (`/start`, `/help`, ...; `/` at offset 0) with the usage message.

use async_trait::async_trait;
use fuel_core::{Handler, HandlerResponse, Message, Result};

pub const GREETING: &str = "Hi! Let's calculate fuel consumption.\n\
Send me, separated by spaces:\n\
distance(km) fuel(l) price(optional)\n\
Example: 500 40 220";

#[derive(Clone, Default)]
pub struct GreetingHandler;

impl GreetingHandler {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Handler for GreetingHandler {
    async fn handle(&self, message: &Message) -> Result<HandlerResponse> {
        if message.is_command() {
            return Ok(HandlerResponse::Reply(GREETING.to_string()));
        }
        Ok(HandlerResponse::Continue)
    }
}
