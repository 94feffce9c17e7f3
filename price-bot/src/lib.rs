//! # Crypto price bot
//!
//! Telegram bot that answers reply-keyboard buttons with Binance spot prices, plus a liveness
//! HTTP endpoint for hosting platforms. Core (Handler, Bot, Message), chain (HandlerChain),
//! handlers, reply templates and the Telegram layer are wired together by [`runner::run_bot`].

pub mod chain;
pub mod cli;
pub mod config;
pub mod core;
pub mod handlers;
pub mod health;
pub mod replies;
pub mod runner;
pub mod telegram;

pub use cli::{load_config, Cli, MISSING_TOKEN_MESSAGE};

pub use crate::core::{
    init_tracing, Bot, Chat, BotError, Handler, HandlerResponse, Message, ReplyKeyboard, Result,
    ToCoreMessage, ToCoreUser, User,
};

pub use chain::HandlerChain;

pub use telegram::{run_repl, TelegramBotAdapter, TelegramMessageWrapper, TelegramUserWrapper};

pub use config::{BaseConfig, BotConfig};
pub use health::{health_router, serve_health, ALIVE_BODY};
pub use runner::{build_handler_chain, build_teloxide_bot, run_bot};

pub use handlers::{HelpHandler, LoggingHandler, PriceHandler, StartHandler};
