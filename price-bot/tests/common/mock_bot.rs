//! Mock implementation of [`price_bot::Bot`] for integration tests.
//!
//! Records every outgoing message so tests can assert on texts and keyboards without
//! hitting Telegram.

use async_trait::async_trait;
use price_bot::{Bot, Chat, ReplyKeyboard, Result};
use std::sync::{Arc, Mutex};

/// One recorded outgoing message.
#[derive(Debug, Clone, PartialEq)]
pub struct SentMessage {
    pub chat_id: i64,
    pub text: String,
    pub keyboard: Option<ReplyKeyboard>,
}

#[derive(Default)]
pub struct RecordingBot {
    sent: Mutex<Vec<SentMessage>>,
}

impl RecordingBot {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn sent(&self) -> Vec<SentMessage> {
        self.sent.lock().unwrap().clone()
    }

    /// Texts sent to one chat, in order.
    pub fn texts_for(&self, chat_id: i64) -> Vec<String> {
        self.sent()
            .into_iter()
            .filter(|m| m.chat_id == chat_id)
            .map(|m| m.text)
            .collect()
    }

    fn record(&self, chat: &Chat, text: &str, keyboard: Option<&ReplyKeyboard>) {
        self.sent.lock().unwrap().push(SentMessage {
            chat_id: chat.id,
            text: text.to_string(),
            keyboard: keyboard.cloned(),
        });
    }
}

#[async_trait]
impl Bot for RecordingBot {
    async fn send_message(&self, chat: &Chat, text: &str) -> Result<()> {
        self.record(chat, text, None);
        Ok(())
    }

    async fn send_with_keyboard(
        &self,
        chat: &Chat,
        text: &str,
        keyboard: &ReplyKeyboard,
    ) -> Result<()> {
        self.record(chat, text, Some(keyboard));
        Ok(())
    }
}
