//! Bot configuration: BaseConfig (Telegram + log) + ticker and liveness settings. Loaded from env.

mod base;
mod bot_config;


pub use base::BaseConfig;
pub use bot_config::{BotConfig, DEFAULT_PORT};
