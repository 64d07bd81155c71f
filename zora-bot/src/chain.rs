//! # Handler chain
//!
//! Runs a sequence of handlers. All before hooks run in order (any false
//! stops the chain); then handle runs until a handler returns Stop or Reply;
//! then all after hooks run in reverse order.

use bot_core::{Handler, HandlerResponse, Message, Result};
use std::sync::Arc;
use tracing::{debug, info};

/// Chain of handlers: before (all) → handle (until Stop/Reply) → after
/// (reverse).
#[derive(Clone, Default)]
pub struct HandlerChain {
    handlers: Vec<Arc<dyn Handler>>,
}

impl HandlerChain {
    /// Creates an empty chain.
    pub fn new() -> Self {
        Self {
            handlers: Vec::new(),
        }
    }

    /// Appends a handler.
    pub fn add_handler(mut self, handler: Arc<dyn Handler>) -> Self {
        self.handlers.push(handler);
        self
    }

    /// Runs the three phases over the message.
    pub async fn handle(&self, message: &Message) -> Result<HandlerResponse> {
        let mut final_response = HandlerResponse::Continue;

        for h in &self.handlers {
            if !h.before(message).await? {
                info!(
                    chat_id = message.chat.id,
                    handler = std::any::type_name_of_val(h.as_ref()),
                    "chain stopped in before phase"
                );
                return Ok(HandlerResponse::Stop);
            }
        }

        for h in &self.handlers {
            let response = h.handle(message).await?;
            debug!(
                handler = std::any::type_name_of_val(h.as_ref()),
                response = ?response,
                "handler processed"
            );
            match response {
                HandlerResponse::Stop | HandlerResponse::Reply(_) => {
                    final_response = response;
                    break;
                }
                HandlerResponse::Continue => {}
            }
        }

        for h in self.handlers.iter().rev() {
            h.after(message, &final_response).await?;
        }

        Ok(final_response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use chrono::Utc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn message(text: &str) -> Message {
        Message {
            id: "1".to_string(),
            user: bot_core::User {
                id: 7,
                username: None,
                first_name: None,
            },
            chat: bot_core::Chat::new(42),
            text: text.to_string(),
            sent_at: Utc::now(),
        }
    }

    struct CountingHandler {
        calls: Arc<AtomicUsize>,
        response: HandlerResponse,
    }

    #[async_trait]
    impl Handler for CountingHandler {
        async fn handle(&self, _message: &Message) -> Result<HandlerResponse> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(self.response.clone())
        }
    }

    struct RejectingHandler;

    #[async_trait]
    impl Handler for RejectingHandler {
        async fn before(&self, _message: &Message) -> Result<bool> {
            Ok(false)
        }
    }

    #[tokio::test]
    async fn reply_stops_the_chain() {
        let first = Arc::new(AtomicUsize::new(0));
        let second = Arc::new(AtomicUsize::new(0));
        let chain = HandlerChain::new()
            .add_handler(Arc::new(CountingHandler {
                calls: first.clone(),
                response: HandlerResponse::Reply("done".to_string()),
            }))
            .add_handler(Arc::new(CountingHandler {
                calls: second.clone(),
                response: HandlerResponse::Continue,
            }));

        let response = chain.handle(&message("/start")).await.unwrap();
        assert_eq!(response, HandlerResponse::Reply("done".to_string()));
        assert_eq!(first.load(Ordering::SeqCst), 1);
        assert_eq!(second.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn before_false_short_circuits() {
        let calls = Arc::new(AtomicUsize::new(0));
        let chain = HandlerChain::new()
            .add_handler(Arc::new(RejectingHandler))
            .add_handler(Arc::new(CountingHandler {
                calls: calls.clone(),
                response: HandlerResponse::Continue,
            }));

        let response = chain.handle(&message("hello")).await.unwrap();
        assert_eq!(response, HandlerResponse::Stop);
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }
}
