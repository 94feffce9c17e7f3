//! Help button: static text with a link to the exchange.

use async_trait::async_trait;
use std::sync::Arc;
use tracing::instrument;

use crate::core::{Bot, Handler, HandlerResponse, Message, Result};
use crate::replies::{HELP, HELP_BUTTON};

pub struct HelpHandler {
    bot: Arc<dyn Bot>,
}

impl HelpHandler {
    pub fn new(bot: Arc<dyn Bot>) -> Self {
        Self { bot }
    }
}

#[async_trait]
impl Handler for HelpHandler {
    #[instrument(skip(self, message))]
    async fn handle(&self, message: &Message) -> Result<HandlerResponse> {
        if message.content != HELP_BUTTON {
            return Ok(HandlerResponse::Ignore);
        }
        self.bot.reply_to(message, HELP).await?;
        Ok(HandlerResponse::Reply(HELP.to_string()))
    }
}
