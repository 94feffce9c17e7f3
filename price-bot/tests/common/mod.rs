//! Shared test helpers: message builder, recording [`price_bot::Bot`], fixed price sources.

#![allow(dead_code, unused_imports)]

pub mod mock_bot;

use async_trait::async_trait;
use binance_client::{PriceLookup, PriceSource};
use chrono::Utc;
use price_bot::{Chat, Message, User};
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;

pub use mock_bot::RecordingBot;

/// Username the fake getMe reports for the bot under test.
pub const BOT_USERNAME: &str = "crypto_price_bot";

/// Username cache as the runner leaves it after getMe.
pub fn own_username() -> Arc<RwLock<Option<String>>> {
    Arc::new(RwLock::new(Some(BOT_USERNAME.to_string())))
}

pub fn make_message(chat_id: i64, content: &str) -> Message {
    Message {
        id: format!("msg_{}", chat_id),
        user: User {
            id: chat_id,
            username: Some("test_user".to_string()),
            first_name: Some("Test".to_string()),
            last_name: None,
        },
        chat: Chat {
            id: chat_id,
            chat_type: "private".to_string(),
        },
        content: content.to_string(),
        created_at: Utc::now(),
    }
}

/// Answers from a fixed symbol → price table after an optional per-symbol delay.
/// Unknown symbols fail.
#[derive(Default)]
pub struct TablePriceSource {
    prices: HashMap<String, f64>,
    delays: HashMap<String, Duration>,
}

impl TablePriceSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_price(mut self, symbol: &str, price: f64) -> Self {
        self.prices.insert(symbol.to_string(), price);
        self
    }

    pub fn with_delay(mut self, symbol: &str, delay: Duration) -> Self {
        self.delays.insert(symbol.to_string(), delay);
        self
    }
}

#[async_trait]
impl PriceSource for TablePriceSource {
    async fn price(&self, symbol: &str) -> PriceLookup {
        if let Some(delay) = self.delays.get(symbol) {
            tokio::time::sleep(*delay).await;
        }
        match self.prices.get(symbol) {
            Some(price) => PriceLookup::Found(*price),
            None => PriceLookup::Failed,
        }
    }
}
