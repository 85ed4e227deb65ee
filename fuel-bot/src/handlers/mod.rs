//! Bot handlers: logging, greeting for commands, and the fuel calculator.

mod calculator;
mod greeting;
mod logging;

pub use calculator::CalculatorHandler;
pub use greeting::{GreetingHandler, GREETING};
pub use logging::LoggingHandler;
