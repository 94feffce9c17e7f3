//! Price button: acknowledge, query the exchange, reply with the price or a failure notice.

use async_trait::async_trait;
use binance_client::{PriceLookup, PriceSource};
use std::sync::Arc;
use tracing::{info, instrument, warn};

use crate::core::{Bot, Handler, HandlerResponse, Message, Result};
use crate::replies::{format_price_failure, format_price_success, Asset, LOOKUP_PENDING};

/// Answers exactly one asset's button. Register one per entry of [`crate::replies::ASSETS`].
pub struct PriceHandler {
    asset: Asset,
    source: Arc<dyn PriceSource>,
    bot: Arc<dyn Bot>,
}

impl PriceHandler {
    pub fn new(asset: Asset, source: Arc<dyn PriceSource>, bot: Arc<dyn Bot>) -> Self {
        Self { asset, source, bot }
    }
}

#[async_trait]
impl Handler for PriceHandler {
    fn name(&self) -> &'static str {
        self.asset.symbol
    }

    #[instrument(skip(self, message))]
    async fn handle(&self, message: &Message) -> Result<HandlerResponse> {
        if message.content != self.asset.button {
            return Ok(HandlerResponse::Ignore);
        }

        self.bot.reply_to(message, LOOKUP_PENDING).await?;

        let reply = match self.source.price(self.asset.symbol).await {
            PriceLookup::Found(price) => {
                info!(
                    user_id = message.user.id,
                    symbol = %self.asset.symbol,
                    price = price,
                    "step: price lookup done"
                );
                format_price_success(self.asset.label, price)
            }
            PriceLookup::Failed => {
                warn!(
                    user_id = message.user.id,
                    symbol = %self.asset.symbol,
                    "step: price lookup failed"
                );
                format_price_failure()
            }
        };

        self.bot.reply_to(message, &reply).await?;
        Ok(HandlerResponse::Reply(reply))
    }
}
