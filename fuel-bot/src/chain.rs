//! Handler chain for the bot: logging → greeting (commands) → calculator (everything else).

use std::sync::Arc;

use handler_chain::HandlerChain;

use crate::handlers::{CalculatorHandler, GreetingHandler, LoggingHandler};

pub fn build_handler_chain() -> HandlerChain {
    HandlerChain::new()
        .add_handler(Arc::new(LoggingHandler))
        .add_handler(Arc::new(GreetingHandler::new()))
        .add_handler(Arc::new(CalculatorHandler::new()))
}
