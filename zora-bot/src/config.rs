//! Bot configuration loaded from environment variables (via `.env`).

use anyhow::{Context, Result};
use std::env;

/// Runtime configuration: Telegram token, OpenAI settings, gateway URL, and
/// alert scanner timing.
#[derive(Debug, Clone)]
pub struct BotConfig {
    /// BOT_TOKEN
    pub bot_token: String,
    /// OPENAI_API_KEY
    pub openai_api_key: String,
    /// OPENAI_MODEL (default gpt-3.5-turbo)
    pub openai_model: String,
    /// ZORA_API_URL (default the public SDK endpoint)
    pub zora_api_url: String,
    /// ALERT_INTERVAL_SECS: seconds between alert scanner ticks (default 60)
    pub alert_interval_secs: u64,
    /// GATEWAY_TIMEOUT_SECS: per-request timeout for price lookups (default 5)
    pub gateway_timeout_secs: u64,
    /// LOG_FILE path
    pub log_file: String,
}

impl BotConfig {
    /// Load from environment variables. `token` overrides BOT_TOKEN.
    pub fn load(token: Option<String>) -> Result<Self> {
        let bot_token = match token {
            Some(t) => t,
            None => env::var("BOT_TOKEN").context("BOT_TOKEN not set")?,
        };
        let openai_api_key = env::var("OPENAI_API_KEY").context("OPENAI_API_KEY not set")?;
        let openai_model =
            env::var("OPENAI_MODEL").unwrap_or_else(|_| "gpt-3.5-turbo".to_string());
        let zora_api_url =
            env::var("ZORA_API_URL").unwrap_or_else(|_| zora_client::DEFAULT_API_URL.to_string());
        let alert_interval_secs = env::var("ALERT_INTERVAL_SECS")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(60);
        let gateway_timeout_secs = env::var("GATEWAY_TIMEOUT_SECS")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(5);
        let log_file = env::var("LOG_FILE").unwrap_or_else(|_| "logs/zora-bot.log".to_string());

        Ok(Self {
            bot_token,
            openai_api_key,
            openai_model,
            zora_api_url,
            alert_interval_secs,
            gateway_timeout_secs,
            log_file,
        })
    }

    /// Validate config (URL shape, non-zero intervals).
    pub fn validate(&self) -> Result<()> {
        if reqwest::Url::parse(&self.zora_api_url).is_err() {
            anyhow::bail!("ZORA_API_URL is not a valid URL: {}", self.zora_api_url);
        }
        if self.alert_interval_secs == 0 {
            anyhow::bail!("ALERT_INTERVAL_SECS must be at least 1");
        }
        if self.gateway_timeout_secs == 0 {
            anyhow::bail!("GATEWAY_TIMEOUT_SECS must be at least 1");
        }
        Ok(())
    }
}
