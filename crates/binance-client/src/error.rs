//! Error type for ticker requests.

use thiserror::Error;

/// Why a ticker request failed. Only surfaced by [`crate::BinanceClient::fetch_price`].
#[derive(Error, Debug)]
pub enum TickerError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Binance API error ({status}): code={code} msg={msg}")]
    Api { status: u16, code: i64, msg: String },

    #[error("Unexpected HTTP status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Malformed ticker response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Invalid price value: {0}")]
    InvalidPrice(String),
}
