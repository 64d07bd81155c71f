//! Error types for the bot core.
//!
//! [`BotError`] is the top-level error; [`HandlerError`] covers handler and
//! user-input failures raised at the command boundary.

use thiserror::Error;

/// Top-level error for the bot (transport, gateway, handler, config, IO).
#[derive(Error, Debug)]
pub enum BotError {
    /// Message delivery failed (Telegram transport).
    #[error("Transport error: {0}")]
    Transport(String),

    /// Market data lookup failed (gateway unavailable or bad data).
    #[error("Gateway error: {0}")]
    Gateway(String),

    #[error("Handler error: {0}")]
    Handler(#[from] HandlerError),

    #[error("Config error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors produced at the command boundary, before anything reaches the
/// stores or the gateway.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum HandlerError {
    #[error("No text in message")]
    NoText,

    #[error("Unknown command: {0}")]
    UnknownCommand(String),

    #[error("Missing argument: {0}")]
    MissingArgument(&'static str),

    #[error("Invalid contract address: {0}")]
    InvalidAddress(String),

    #[error("Invalid price: {0}")]
    InvalidPrice(String),
}

/// Result type for core operations; uses [`BotError`].
pub type Result<T> = std::result::Result<T, BotError>;
