//! # bot-core
//!
//! Transport-agnostic core for the Zora market bot: message/chat types, the
//! [`Bot`] sending trait, the [`Handler`] trait used by the handler chain,
//! error types, and tracing initialization. The teloxide implementation of
//! [`Bot`] lives in the application crate.

pub mod bot;
pub mod error;
pub mod logger;
pub mod types;

pub use bot::Bot;
pub use error::{BotError, HandlerError, Result};
pub use logger::init_tracing;
pub use types::{Chat, Handler, HandlerResponse, Message, ToCoreMessage, ToCoreUser, User};
