//! # Zora market Telegram bot
//!
//! Relays chat commands to the Zora market data API and an LLM for market
//! commentary, keeps per-chat portfolio and price-alert state in memory, and
//! runs a periodic alert scanner that notifies chats when a tracked contract
//! reaches its target price.

pub mod alerts;
pub mod chain;
pub mod cli;
pub mod commands;
pub mod config;
pub mod format;
pub mod handlers;
pub mod portfolio;
pub mod runner;
pub mod telegram;

pub use alerts::{AlertEntry, AlertScanner, AlertStore, MarketDataGateway, ScannerHandle};
pub use chain::HandlerChain;
pub use cli::{load_config, Cli, Commands};
pub use commands::Command;
pub use config::BotConfig;
pub use handlers::{CommandHandler, LoggingHandler};
pub use portfolio::{PortfolioItem, PortfolioStore};
pub use runner::{run_bot, BotServices};
pub use telegram::{run_repl, TelegramBotAdapter, TelegramMessageWrapper};
