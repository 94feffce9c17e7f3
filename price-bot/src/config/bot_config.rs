//! BotConfig: BaseConfig + exchange endpoint + liveness server. Use load() for env-based loading.

use anyhow::Result;
use binance_client::DEFAULT_BASE_URL;
use std::env;

use super::BaseConfig;

/// Liveness port when PORT is unset or not a number.
pub const DEFAULT_PORT: u16 = 8080;

#[derive(Debug, Clone)]
pub struct BotConfig {
    pub base: BaseConfig,
    /// BINANCE_API_URL
    pub binance_api_url: String,
    /// PORT
    pub port: u16,
    /// Whether the liveness HTTP server runs next to the polling loop.
    pub health_enabled: bool,
}

impl BotConfig {
    /// Load from environment variables. If `token` is provided it overrides BOT_TOKEN.
    /// Call validate() after load to check config before init.
    pub fn load(token: Option<String>) -> Result<Self> {
        let base = BaseConfig::load(token)?;
        let binance_api_url =
            env::var("BINANCE_API_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        let port = env::var("PORT")
            .ok()
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or(DEFAULT_PORT);

        Ok(Self {
            base,
            binance_api_url,
            port,
            health_enabled: true,
        })
    }

    /// Runs the bot without the liveness server.
    pub fn without_health(mut self) -> Self {
        self.health_enabled = false;
        self
    }

    /// Validate config. Call after load() to fail fast before init.
    pub fn validate(&self) -> Result<()> {
        self.base.validate()?;
        if reqwest::Url::parse(&self.binance_api_url).is_err() {
            anyhow::bail!(
                "BINANCE_API_URL is set but not a valid URL: {}",
                self.binance_api_url
            );
        }
        Ok(())
    }

    pub fn bot_token(&self) -> &str {
        &self.base.bot_token
    }
    pub fn log_file(&self) -> &str {
        &self.base.log_file
    }
    pub fn telegram_api_url(&self) -> Option<&str> {
        self.base.telegram_api_url.as_deref()
    }
}
