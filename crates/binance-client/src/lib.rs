//! # Binance spot ticker client
//!
//! This crate defines the [`PriceSource`] interface used by the bot handlers and a
//! [`BinanceClient`] implementation backed by the public Binance REST API.
//!
//! ## Example
//!
//! ```rust,no_run
//! use binance_client::{BinanceClient, PriceLookup, PriceSource};
//!
//! async fn example() {
//!     let client = BinanceClient::new();
//!     match client.price("BTCUSDT").await {
//!         PriceLookup::Found(price) => println!("BTC: {price}"),
//!         PriceLookup::Failed => println!("exchange unavailable"),
//!     }
//! }
//! ```
//!
//! ## Failure model
//!
//! [`PriceSource::price`] never returns an error: network failures, HTTP error statuses,
//! malformed bodies and non-numeric prices all collapse to [`PriceLookup::Failed`] after
//! being logged. Callers that need the cause use [`BinanceClient::fetch_price`].

use async_trait::async_trait;

mod client;
mod error;

pub use client::{BinanceClient, DEFAULT_BASE_URL, TICKER_PRICE_PATH};
pub use error::TickerError;

/// Outcome of a single price lookup. The failure reason is intentionally opaque.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PriceLookup {
    /// Quote-currency units per base unit at request time.
    Found(f64),
    Failed,
}

/// Source of spot prices keyed by ticker symbol (e.g. `BTCUSDT`).
#[async_trait]
pub trait PriceSource: Send + Sync {
    /// Fetches the current price for `symbol`. One upstream request per call, no retries.
    async fn price(&self, symbol: &str) -> PriceLookup;
}

