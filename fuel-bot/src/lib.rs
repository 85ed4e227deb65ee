//! # fuel-bot
//!
//! Telegram fuel-consumption bot. Wires the calculator into the handler chain and runs the
//! webhook service from fuel-telegram.

pub mod chain;
pub mod cli;
pub mod handlers;
pub mod runner;

pub use chain::build_handler_chain;
pub use cli::{Cli, Commands};
pub use handlers::{CalculatorHandler, GreetingHandler, LoggingHandler, GREETING};
pub use runner::run_bot;
