//! Wraps teloxide::Bot and implements [`crate::core::Bot`]. Tests substitute a recording Bot.

use async_trait::async_trait;
use teloxide::{
    prelude::*,
    types::{ChatId, ParseMode},
};

use super::adapters::to_keyboard_markup;
use crate::core::{Bot as CoreBot, Chat, BotError, ReplyKeyboard, Result};

/// Thin wrapper around teloxide::Bot; every message is sent with HTML parse mode.
#[derive(Clone)]
pub struct TelegramBotAdapter {
    bot: teloxide::Bot,
}

impl TelegramBotAdapter {
    pub fn new(bot: teloxide::Bot) -> Self {
        Self { bot }
    }
}

#[async_trait]
impl CoreBot for TelegramBotAdapter {
    async fn send_message(&self, chat: &Chat, text: &str) -> Result<()> {
        self.bot
            .send_message(ChatId(chat.id), text.to_string())
            .parse_mode(ParseMode::Html)
            .await
            .map_err(|e| BotError::Bot(e.to_string()))?;
        Ok(())
    }

    async fn send_with_keyboard(
        &self,
        chat: &Chat,
        text: &str,
        keyboard: &ReplyKeyboard,
    ) -> Result<()> {
        self.bot
            .send_message(ChatId(chat.id), text.to_string())
            .parse_mode(ParseMode::Html)
            .reply_markup(to_keyboard_markup(keyboard))
            .await
            .map_err(|e| BotError::Bot(e.to_string()))?;
        Ok(())
    }
}
