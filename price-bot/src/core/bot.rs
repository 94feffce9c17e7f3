//! Bot abstraction for sending messages.
//!
//! [`Bot`] is transport-agnostic; [`crate::telegram::TelegramBotAdapter`] implements it via teloxide.

use async_trait::async_trait;

use super::error::Result;
use super::types::{Chat, Message, ReplyKeyboard};

/// Abstraction for sending messages. Text is HTML-formatted; implementations map to a transport.
#[async_trait]
pub trait Bot: Send + Sync {
    /// Sends a text message to the given chat.
    async fn send_message(&self, chat: &Chat, text: &str) -> Result<()>;

    /// Sends a text message and replaces the chat's reply keyboard.
    async fn send_with_keyboard(&self, chat: &Chat, text: &str, keyboard: &ReplyKeyboard)
        -> Result<()>;

    /// Sends a reply to the given message (same chat).
    async fn reply_to(&self, message: &Message, text: &str) -> Result<()> {
        self.send_message(&message.chat, text).await
    }
}
