//! Bot abstraction for sending messages.
//!
//! [`Bot`] is transport-agnostic; the application crate implements it via
//! teloxide, and tests substitute recording stubs. The alert scanner uses it
//! as its notifier boundary.

use crate::error::Result;
use crate::types::{Chat, Message};
use async_trait::async_trait;

/// Abstraction for sending messages to a chat.
#[async_trait]
pub trait Bot: Send + Sync {
    /// Sends a text message to the given chat. Fails with
    /// [`crate::BotError::Transport`] on delivery failure.
    async fn send_message(&self, chat: &Chat, text: &str) -> Result<()>;

    /// Sends a reply to the given message (same chat).
    async fn reply_to(&self, message: &Message, text: &str) -> Result<()> {
        self.send_message(&message.chat, text).await
    }
}
