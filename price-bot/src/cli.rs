//! CLI parser and config loading. Running without arguments starts the bot.

use anyhow::Result;
use clap::Parser;

use crate::config::BotConfig;

/// Printed to stderr when no bot token is configured.
pub const MISSING_TOKEN_MESSAGE: &str = "❌ Помилка: Токен не знайдено!";

#[derive(Parser, Debug)]
#[command(name = "price-bot")]
#[command(about = "Telegram bot relaying Binance spot prices", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Bot token; overrides BOT_TOKEN.
    #[arg(short, long)]
    pub token: Option<String>,

    /// Do not start the liveness HTTP server.
    #[arg(long)]
    pub no_health: bool,
}

/// Load BotConfig from environment, applying CLI overrides.
pub fn load_config(cli: &Cli) -> Result<BotConfig> {
    let config = BotConfig::load(cli.token.clone())?;
    Ok(if cli.no_health {
        config.without_health()
    } else {
        config
    })
}
