//! Long-polling runner: converts teloxide messages to core::Message and hands each one to the
//! HandlerChain in its own task.

use anyhow::Result;
use std::sync::Arc;
use teloxide::prelude::*;
use tracing::{error, info, instrument, warn};

use super::adapters::TelegramMessageWrapper;
use crate::chain::HandlerChain;
use crate::core::ToCoreMessage;

/// Runs the teloxide REPL until Ctrl-C. Handler failures are logged and never stop polling.
/// Calls getMe first and writes the bot's username into `bot_username`.
#[instrument(skip(bot, handler_chain, bot_username))]
pub async fn run_repl(
    bot: teloxide::Bot,
    handler_chain: HandlerChain,
    bot_username: Arc<tokio::sync::RwLock<Option<String>>>,
) -> Result<()> {
    match bot.get_me().await {
        Ok(me) => match &me.user.username {
            Some(username) => {
                *bot_username.write().await = Some(username.clone());
                info!(username = %username, "Bot username set before repl");
            }
            None => warn!("getMe returned no username; /start@mentions will not match"),
        },
        Err(e) => warn!(error = %e, "getMe failed; polling anyway"),
    }

    teloxide::repl(bot, move |msg: teloxide::types::Message| {
        let chain = handler_chain.clone();

        async move {
            let core_msg = TelegramMessageWrapper(&msg).to_core();

            if msg.text().is_none() {
                info!(
                    user_id = core_msg.user.id,
                    chat_id = core_msg.chat.id,
                    "Received non-text message"
                );
            }

            tokio::spawn(async move {
                if let Err(e) = chain.handle(&core_msg).await {
                    error!(
                        error = %e,
                        user_id = core_msg.user.id,
                        chat_id = core_msg.chat.id,
                        "Handler chain failed"
                    );
                }
            });

            respond(())
        }
    })
    .await;

    Ok(())
}
