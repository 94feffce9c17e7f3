//! Conversions between teloxide types and core types.

use teloxide::types::{KeyboardButton, KeyboardMarkup};

use crate::core::{Chat, Message, ReplyKeyboard, ToCoreMessage, ToCoreUser, User};

/// Telegram user → core [`User`].
pub struct TelegramUserWrapper<'a>(pub &'a teloxide::types::User);

impl<'a> ToCoreUser for TelegramUserWrapper<'a> {
    fn to_core(&self) -> User {
        User {
            id: self.0.id.0 as i64,
            username: self.0.username.clone(),
            first_name: Some(self.0.first_name.clone()),
            last_name: self.0.last_name.clone(),
        }
    }
}

/// Telegram message → core [`Message`]. Non-text messages get empty content.
pub struct TelegramMessageWrapper<'a>(pub &'a teloxide::types::Message);

impl<'a> ToCoreMessage for TelegramMessageWrapper<'a> {
    fn to_core(&self) -> Message {
        let chat_type = if self.0.chat.is_private() {
            "private"
        } else if self.0.chat.is_group() || self.0.chat.is_supergroup() {
            "group"
        } else {
            "channel"
        };

        Message {
            id: self.0.id.to_string(),
            user: self
                .0
                .from
                .as_ref()
                .map(|u| TelegramUserWrapper(u).to_core())
                .unwrap_or_else(User::unknown),
            chat: Chat {
                id: self.0.chat.id.0,
                chat_type: chat_type.to_string(),
            },
            content: self.0.text().unwrap_or("").to_string(),
            created_at: self.0.date,
        }
    }
}

/// Core [`ReplyKeyboard`] → teloxide reply keyboard markup.
pub fn to_keyboard_markup(keyboard: &ReplyKeyboard) -> KeyboardMarkup {
    let rows: Vec<Vec<KeyboardButton>> = keyboard
        .rows
        .iter()
        .map(|row| row.iter().map(|label| KeyboardButton::new(label.clone())).collect())
        .collect();

    let mut markup = KeyboardMarkup::new(rows);
    if keyboard.resize {
        markup = markup.resize_keyboard();
    }
    if let Some(placeholder) = &keyboard.placeholder {
        markup = markup.input_field_placeholder(placeholder.clone());
    }
    markup
}
