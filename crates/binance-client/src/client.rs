//! reqwest-based client for `GET /api/v3/ticker/price`.

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::{error, info, instrument};

use crate::error::TickerError;
use crate::{PriceLookup, PriceSource};

/// Public Binance REST endpoint.
pub const DEFAULT_BASE_URL: &str = "https://api.binance.com";

/// Path of the symbol price ticker, relative to the base URL.
pub const TICKER_PRICE_PATH: &str = "/api/v3/ticker/price";

/// Binance spot price client. Cheap to clone; the underlying connection pool is shared.
#[derive(Debug, Clone)]
pub struct BinanceClient {
    client: Client,
    base_url: String,
}

impl BinanceClient {
    /// Creates a client against [`DEFAULT_BASE_URL`].
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    /// Creates a client against a different host (mock server, proxy).
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            client: Client::new(),
            base_url,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetches the price for `symbol`, keeping the failure cause.
    ///
    /// The symbol is passed through unvalidated; Binance answers unknown symbols with
    /// HTTP 400 and `{"code":-1121,"msg":"Invalid symbol."}`, reported as [`TickerError::Api`].
    pub async fn fetch_price(&self, symbol: &str) -> Result<f64, TickerError> {
        let url = format!("{}{}", self.base_url, TICKER_PRICE_PATH);
        let response = self
            .client
            .get(&url)
            .query(&[("symbol", symbol)])
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(match serde_json::from_str::<ApiErrorBody>(&body) {
                Ok(api) => TickerError::Api {
                    status: status.as_u16(),
                    code: api.code,
                    msg: api.msg,
                },
                Err(_) => TickerError::Status {
                    status: status.as_u16(),
                    body,
                },
            });
        }

        let ticker: TickerPrice = serde_json::from_str(&body)?;
        parse_price(&ticker.price)
    }
}

impl Default for BinanceClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PriceSource for BinanceClient {
    #[instrument(skip(self))]
    async fn price(&self, symbol: &str) -> PriceLookup {
        info!(symbol = %symbol, base_url = %self.base_url, "step: ticker price request");
        match self.fetch_price(symbol).await {
            Ok(price) => {
                info!(symbol = %symbol, price = price, "step: ticker price received");
                PriceLookup::Found(price)
            }
            Err(e) => {
                error!(symbol = %symbol, error = %e, "Ticker price request failed");
                PriceLookup::Failed
            }
        }
    }
}

#[derive(Debug, Deserialize)]
struct TickerPrice {
    price: RawPrice,
}

/// Binance sends prices as decimal strings; plain JSON numbers are accepted as well.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawPrice {
    Text(String),
    Number(f64),
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    code: i64,
    msg: String,
}

fn parse_price(raw: &RawPrice) -> Result<f64, TickerError> {
    let value = match raw {
        RawPrice::Text(text) => text
            .trim()
            .parse::<f64>()
            .map_err(|_| TickerError::InvalidPrice(text.clone()))?,
        RawPrice::Number(n) => *n,
    };
    // A zero quote means the ticker is not trading; treat it like a failed lookup.
    if !value.is_finite() || value <= 0.0 {
        return Err(TickerError::InvalidPrice(value.to_string()));
    }
    Ok(value)
}
