//! Telegram framework layer: adapters, Bot implementation, polling runner.

mod adapters;
mod bot_adapter;
mod runner;

pub use adapters::{to_keyboard_markup, TelegramMessageWrapper, TelegramUserWrapper};
pub use bot_adapter::TelegramBotAdapter;
pub use runner::run_repl;
