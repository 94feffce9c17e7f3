//! `/start`: greeting plus the main reply keyboard.

use async_trait::async_trait;
use std::sync::Arc;
use tracing::{debug, instrument};

use crate::core::{Bot, Handler, HandlerResponse, Message, Result};
use crate::replies::{main_keyboard, GREETING};

/// True for `/start` and `/start <payload>` (deep links), and for `/start@<bot_username>`
/// when the mention names this bot (case-insensitive). A mention of another bot, or any
/// mention while our username is unknown, does not match.
pub fn is_start_command(text: &str, bot_username: Option<&str>) -> bool {
    let command = text.split_whitespace().next().unwrap_or("");
    match command.split_once('@') {
        None => command == "/start",
        Some((command, mention)) => {
            command == "/start"
                && bot_username.is_some_and(|own| own.eq_ignore_ascii_case(mention))
        }
    }
}

pub struct StartHandler {
    bot: Arc<dyn Bot>,
    /// Filled by the runner from getMe before polling starts.
    bot_username: Arc<tokio::sync::RwLock<Option<String>>>,
}

impl StartHandler {
    pub fn new(bot: Arc<dyn Bot>, bot_username: Arc<tokio::sync::RwLock<Option<String>>>) -> Self {
        Self { bot, bot_username }
    }
}

#[async_trait]
impl Handler for StartHandler {
    #[instrument(skip(self, message))]
    async fn handle(&self, message: &Message) -> Result<HandlerResponse> {
        let bot_username = self.bot_username.read().await.clone();
        if !is_start_command(&message.content, bot_username.as_deref()) {
            if message.content.starts_with("/start@") {
                debug!(content = %message.content, "start command addressed to another bot");
            }
            return Ok(HandlerResponse::Ignore);
        }
        self.bot
            .send_with_keyboard(&message.chat, GREETING, &main_keyboard())
            .await?;
        Ok(HandlerResponse::Reply(GREETING.to_string()))
    }
}
