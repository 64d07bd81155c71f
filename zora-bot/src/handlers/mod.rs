//! Handlers for the chain: request logging and command dispatch.

mod command_handler;
mod logging;

pub use command_handler::CommandHandler;
pub use logging::LoggingHandler;
