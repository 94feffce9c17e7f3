//! Handler implementations: request logging, `/start`, price buttons, help button.

mod help;
mod logging;
mod price;
mod start;

pub use help::HelpHandler;
pub use logging::LoggingHandler;
pub use price::PriceHandler;
pub use start::{is_start_command, StartHandler};
