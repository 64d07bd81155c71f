//! REPL runner: converts teloxide messages to core messages, runs the
//! handler chain, and sends any Reply body back to the chat.

use anyhow::Result;
use bot_core::{Bot as CoreBot, HandlerResponse, ToCoreMessage};
use teloxide::prelude::*;
use tracing::{error, info};

use super::adapters::TelegramMessageWrapper;
use super::bot_adapter::TelegramBotAdapter;
use crate::chain::HandlerChain;

/// Starts the long-polling REPL with the given teloxide Bot and chain.
/// Each message is handled in a spawned task so the REPL returns to polling
/// immediately.
pub async fn run_repl(bot: teloxide::Bot, handler_chain: HandlerChain) -> Result<()> {
    if let Ok(me) = bot.get_me().await {
        if let Some(username) = &me.user.username {
            info!(username = %username, "Bot identity confirmed");
        }
    }

    let chain = handler_chain;
    teloxide::repl(bot, move |bot: Bot, msg: teloxide::types::Message| {
        let chain = chain.clone();

        async move {
            let core_msg = TelegramMessageWrapper(&msg).to_core();

            tokio::spawn(async move {
                let adapter = TelegramBotAdapter::new(bot);
                match chain.handle(&core_msg).await {
                    Ok(HandlerResponse::Reply(text)) => {
                        if let Err(e) = adapter.reply_to(&core_msg, &text).await {
                            error!(
                                chat_id = core_msg.chat.id,
                                error = %e,
                                "failed to deliver reply"
                            );
                        }
                    }
                    Ok(_) => {}
                    Err(e) => {
                        error!(
                            chat_id = core_msg.chat.id,
                            user_id = core_msg.user.id,
                            error = %e,
                            "handler chain failed"
                        );
                    }
                }
            });

            Ok(())
        }
    })
    .await;

    Ok(())
}
