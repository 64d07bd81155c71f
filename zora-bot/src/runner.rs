//! Bot assembly and entry point: builds services from config, spawns the
//! alert scanner, and runs the Telegram REPL.

use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use ai_client::AiClient;
use anyhow::Result;
use bot_core::init_tracing;
use tracing::info;
use zora_client::ZoraClient;

use crate::alerts::{AlertScanner, AlertStore};
use crate::chain::HandlerChain;
use crate::config::BotConfig;
use crate::handlers::{CommandHandler, LoggingHandler};
use crate::portfolio::PortfolioStore;
use crate::telegram::{run_repl, TelegramBotAdapter};

/// Shared services: gateway and AI clients plus the in-memory stores. Built
/// once and handed by handle to the handlers and the scanner.
#[derive(Clone)]
pub struct BotServices {
    pub zora: ZoraClient,
    pub ai: AiClient,
    pub portfolio: Arc<PortfolioStore>,
    pub alerts: Arc<AlertStore>,
}

impl BotServices {
    pub fn from_config(config: &BotConfig) -> Self {
        Self {
            zora: ZoraClient::with_base_url(config.zora_api_url.clone()),
            ai: AiClient::new(config.openai_api_key.clone(), config.openai_model.clone()),
            portfolio: Arc::new(PortfolioStore::new()),
            alerts: Arc::new(AlertStore::new()),
        }
    }

    /// Logging first, then command dispatch.
    pub fn handler_chain(&self) -> HandlerChain {
        HandlerChain::new()
            .add_handler(Arc::new(LoggingHandler::new()))
            .add_handler(Arc::new(CommandHandler::new(
                self.zora.clone(),
                self.ai.clone(),
                self.portfolio.clone(),
                self.alerts.clone(),
            )))
    }
}

/// Main entry: init logging, build services, start the alert scanner, run
/// the REPL, and stop the scanner cleanly when polling ends.
pub async fn run_bot(config: BotConfig) -> Result<()> {
    config.validate()?;

    if let Some(dir) = Path::new(&config.log_file).parent() {
        std::fs::create_dir_all(dir)?;
    }
    init_tracing(&config.log_file)?;

    info!(
        zora_api_url = %config.zora_api_url,
        alert_interval_secs = config.alert_interval_secs,
        "Initializing bot"
    );

    let services = BotServices::from_config(&config);
    let teloxide_bot = teloxide::Bot::new(config.bot_token.clone());

    let scanner = Arc::new(AlertScanner::new(
        services.alerts.clone(),
        Arc::new(services.zora.clone()),
        Arc::new(TelegramBotAdapter::new(teloxide_bot.clone())),
        Duration::from_secs(config.gateway_timeout_secs),
    ));
    let scanner_handle = scanner.spawn(Duration::from_secs(config.alert_interval_secs));

    let chain = services.handler_chain();
    info!("Bot started successfully");

    run_repl(teloxide_bot, chain).await?;

    scanner_handle.stop().await;
    Ok(())
}
