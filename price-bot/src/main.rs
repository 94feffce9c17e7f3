//! Binary for the price bot. Config from env (`.env` supported); see `--help` for overrides.

use anyhow::Result;
use clap::Parser;
use price_bot::{load_config, run_bot, Cli, MISSING_TOKEN_MESSAGE};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = match load_config(&cli) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{} ({})", MISSING_TOKEN_MESSAGE, e);
            std::process::exit(1);
        }
    };

    run_bot(config).await
}
