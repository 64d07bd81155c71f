//! Logs every incoming message before the handle phase runs.

use async_trait::async_trait;
use bot_core::{Handler, Message, Result};
use tracing::info;

#[derive(Clone, Default)]
pub struct LoggingHandler;

impl LoggingHandler {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Handler for LoggingHandler {
    async fn before(&self, message: &Message) -> Result<bool> {
        info!(
            user_id = message.user.id,
            chat_id = message.chat.id,
            text = %message.text,
            "Received message"
        );
        Ok(true)
    }
}
