use anyhow::Result;
use binance_client::{BinanceClient, PriceSource};
use std::sync::Arc;
use tracing::{error, info, instrument};

use crate::chain::HandlerChain;
use crate::config::BotConfig;
use crate::core::{init_tracing, Bot};
use crate::handlers::{HelpHandler, LoggingHandler, PriceHandler, StartHandler};
use crate::health::serve_health;
use crate::replies::ASSETS;
use crate::telegram::{run_repl, TelegramBotAdapter};

/// Dispatch table in match order: logging, `/start`, one handler per price button, help.
/// `bot_username` is shared with [`run_repl`], which fills it from getMe.
pub fn build_handler_chain(
    bot: Arc<dyn Bot>,
    source: Arc<dyn PriceSource>,
    bot_username: Arc<tokio::sync::RwLock<Option<String>>>,
) -> HandlerChain {
    let chain = HandlerChain::new()
        .add_handler(Arc::new(LoggingHandler))
        .add_handler(Arc::new(StartHandler::new(bot.clone(), bot_username)));

    let chain = ASSETS.iter().fold(chain, |chain, asset| {
        chain.add_handler(Arc::new(PriceHandler::new(
            *asset,
            source.clone(),
            bot.clone(),
        )))
    });

    chain.add_handler(Arc::new(HelpHandler::new(bot)))
}

/// teloxide Bot for the configured token, pointed at TELEGRAM_API_URL when set.
pub fn build_teloxide_bot(config: &BotConfig) -> teloxide::Bot {
    let bot = teloxide::Bot::new(config.bot_token());
    match config.telegram_api_url() {
        Some(url_str) => match reqwest::Url::parse(url_str) {
            Ok(url) => bot.set_api_url(url),
            Err(e) => {
                error!(error = %e, url = %url_str, "Invalid TELEGRAM_API_URL, using default");
                bot
            }
        },
        None => bot,
    }
}

/// Main entry: validate config, init logging, wire handlers, then poll until interrupted.
///
/// With the liveness server enabled, both tasks run together and the process ends when
/// either one ends: Ctrl-C stops polling, a bind or serve failure surfaces as the error.
#[instrument(skip(config))]
pub async fn run_bot(config: BotConfig) -> Result<()> {
    config.validate()?;
    init_tracing(config.log_file())?;

    info!(
        binance_api_url = %config.binance_api_url,
        health_enabled = config.health_enabled,
        port = config.port,
        "Initializing bot"
    );

    let teloxide_bot = build_teloxide_bot(&config);
    let bot: Arc<dyn Bot> = Arc::new(TelegramBotAdapter::new(teloxide_bot.clone()));
    let source: Arc<dyn PriceSource> =
        Arc::new(BinanceClient::with_base_url(config.binance_api_url.clone()));
    let bot_username = Arc::new(tokio::sync::RwLock::new(None));
    let handler_chain = build_handler_chain(bot, source, bot_username.clone());

    info!(handlers = handler_chain.len(), "Bot started successfully");

    let result = if config.health_enabled {
        tokio::select! {
            res = run_repl(teloxide_bot, handler_chain, bot_username) => res,
            res = serve_health(config.port) => res,
        }
    } else {
        run_repl(teloxide_bot, handler_chain, bot_username).await
    };

    match &result {
        Ok(()) => info!("Bot stopped"),
        Err(e) => error!(error = %e, "Bot stopped with error"),
    }
    result
}
