//! Plain-text reply templates.
//!
//! Pure functions from service data to the strings sent back to chats.

use zora_client::{Coin, Signal, Token, TradingAnalysis};

use crate::alerts::AlertEntry;
use crate::portfolio::PortfolioItem;

pub fn welcome() -> String {
    "Welcome to Zora AI Trading Assistant! 🚀\n\n\
     Available commands:\n\
     /price <contract> <tokenId> - Get real-time price for NFTs\n\
     /coinprice <contract> - Get real-time price for Coins\n\
     /track <contract> <tokenId> - Track an NFT in your portfolio\n\
     /trackcoin <contract> - Track a Coin in your portfolio\n\
     /portfolio - View your portfolio\n\
     /analyzeportfolio - Get AI review of your portfolio\n\
     /analyze <contract> <tokenId> - Get AI analysis for NFTs\n\
     /analyzecoin <contract> - Get analysis for Coins\n\
     /trade <contract> <tokenId> - Get trading analysis for NFTs\n\
     /tradecoin <contract> - Get trade recommendations for Coins\n\
     /tradinganalysiscoin <contract> - Get trading analysis for Coins\n\
     /signals - Trading signals for today's top gainers\n\
     /alert <contract> <price> - Set a price alert\n\
     /alerts - List your price alerts\n\
     /removealert <contract> - Remove alerts for a contract"
        .to_string()
}

pub fn token_price(token_id: &str, price: f64) -> String {
    format!("Current price for token {}: {}", token_id, price)
}

pub fn coin_card(contract: &str, coin: &Coin) -> String {
    format!(
        "📊 Coin Details for {}:\n\n\
         - Name: {}\n\
         - Symbol: {}\n\
         - Description: {}\n\
         - Total Supply: {}\n\
         - Market Cap: {}\n\
         - 24h Volume: {}\n\
         - Creator: {}\n\
         - Created At: {}\n\
         - Unique Holders: {}\n\
         - Current Price: {}",
        contract,
        field(&coin.name),
        field(&coin.symbol),
        field(&coin.description),
        field(&coin.total_supply),
        field(&coin.market_cap),
        field(&coin.volume24h),
        field(&coin.creator_address),
        field(&coin.created_at),
        coin.holders(),
        coin.price()
    )
}

pub fn tracking_token(token_id: &str, contract: &str, price: f64) -> String {
    format!(
        "Now tracking token {} from contract {} at price {}",
        token_id, contract, price
    )
}

pub fn tracking_coin(contract: &str, price: f64) -> String {
    format!("Now tracking coin at contract {} at price {}", contract, price)
}

pub fn portfolio_empty() -> String {
    "No portfolio found. Use /track <contract> <tokenId> to start tracking tokens.".to_string()
}

pub fn portfolio_view(items: &[(String, PortfolioItem)]) -> String {
    let mut message = String::from("Your Portfolio:\n\n");
    for (contract, item) in items {
        message.push_str(&format!(
            "Contract: {}\nToken ID: {}\nAmount: {}\nValue: ${}\n\n",
            contract, item.token_id, item.amount, item.value
        ));
    }
    message.trim_end().to_string()
}

pub fn ai_analysis(subject: &str, analysis: &str) -> String {
    format!("Analysis for {}:\n\n{}", subject, analysis)
}

/// Rule-based coin analysis: market status, price analysis, risk.
pub fn coin_analysis_report(contract: &str, coin: &Coin, analysis: &TradingAnalysis) -> String {
    format!(
        "📊 Analysis for Coin at {}:\n\n\
         Market Status:\n\
         • Total Supply: {}\n\
         • 24h Volume: {}\n\
         • Total Volume: {}\n\n\
         {}\n\n\
         {}",
        contract,
        field(&coin.total_supply),
        field(&coin.volume24h),
        field(&coin.total_volume),
        price_analysis_section(analysis),
        risk_section(analysis)
    )
}

/// Full trading analysis for a coin, with signals and recommendations.
pub fn coin_trading_report(contract: &str, coin: &Coin, analysis: &TradingAnalysis) -> String {
    format!(
        "📊 Trading Analysis for Coin at {}:\n\n\
         Market Status:\n\
         • Total Supply: {}\n\
         • 24h Volume: {}\n\
         • Total Volume: {}\n\n\
         {}\n\n\
         {}\n\n\
         {}\n\n\
         Recommendations:\n{}",
        contract,
        field(&coin.total_supply),
        field(&coin.volume24h),
        field(&coin.total_volume),
        price_analysis_section(analysis),
        signals_section(analysis),
        risk_section(analysis),
        bullets(&analysis.recommendations)
    )
}

/// Full trading analysis for an NFT token, with mint/market status.
pub fn token_trading_report(token_id: &str, token: &Token, analysis: &TradingAnalysis) -> String {
    format!(
        "📊 Trading Analysis for Token {}\n\n\
         Market Status:\n\
         • Primary Mint: {}\n\
         • Secondary Market: {}\n\n\
         {}\n\n\
         {}\n\n\
         {}\n\n\
         Recommendations:\n{}",
        token_id,
        active_label(token.primary_mint_active()),
        active_label(token.secondary_market_active()),
        price_analysis_section(analysis),
        signals_section(analysis),
        risk_section(analysis),
        bullets(&analysis.recommendations)
    )
}

/// Entry/exit levels only, for `/tradecoin`.
pub fn trade_recommendations(contract: &str, analysis: &TradingAnalysis) -> String {
    format!(
        "📊 Trade Recommendations for Coin at {}:\n\n\
         Entry Points:\n{}\n\
         Exit Points:\n{}\n\
         Stop Loss: {}\n\
         Take Profit: {}",
        contract,
        indented(&analysis.entry_points),
        indented(&analysis.exit_points),
        analysis.stop_loss,
        analysis.take_profit
    )
}

pub fn signals_list(signals: &[(Coin, Signal)]) -> String {
    if signals.is_empty() {
        return "No signals right now. Try again later.".to_string();
    }
    let mut message = String::from("📈 Trading Signals (top gainers):\n\n");
    for (coin, signal) in signals {
        message.push_str(&format!(
            "• {} ({}): {}\n",
            field(&coin.name),
            field(&coin.symbol),
            signal
        ));
    }
    message.trim_end().to_string()
}

pub fn alert_set(contract: &str, target_price: f64) -> String {
    format!("🔔 Alert set for {} at {}", contract, target_price)
}

pub fn alert_removed(contract: &str) -> String {
    format!("Removed alerts for {}", contract)
}

pub fn alerts_empty() -> String {
    "No alerts set. Use /alert <contract> <price> to create one.".to_string()
}

pub fn alerts_list(alerts: &[AlertEntry]) -> String {
    let mut message = String::from("Your alerts:\n\n");
    for alert in alerts {
        message.push_str(&format!("• {} at {}\n", alert.contract, alert.target_price));
    }
    message.trim_end().to_string()
}

pub fn alert_triggered(contract: &str, price: f64) -> String {
    format!("🚨 Alert: {} has reached {}!", contract, price)
}

fn field(value: &Option<String>) -> &str {
    value.as_deref().unwrap_or("N/A")
}

fn active_label(active: bool) -> &'static str {
    if active {
        "Active"
    } else {
        "Inactive"
    }
}

fn price_analysis_section(analysis: &TradingAnalysis) -> String {
    format!(
        "Price Analysis:\n\
         • Current Price: {}\n\
         • Trend: {}\n\
         • Volatility: {}",
        analysis.current_price, analysis.price_trend, analysis.price_volatility
    )
}

fn signals_section(analysis: &TradingAnalysis) -> String {
    format!(
        "Trading Signals:\n\
         • Entry Points:\n{}\n\
         • Exit Points:\n{}\n\
         • Stop Loss: {}\n\
         • Take Profit: {}",
        indented(&analysis.entry_points),
        indented(&analysis.exit_points),
        analysis.stop_loss,
        analysis.take_profit
    )
}

fn risk_section(analysis: &TradingAnalysis) -> String {
    format!(
        "Risk Assessment:\n\
         • Risk Level: {}\n\
         • {}\n\
         • {}",
        analysis.risk_level, analysis.liquidity, analysis.volatility
    )
}

fn bullets(lines: &[String]) -> String {
    lines
        .iter()
        .map(|l| format!("• {}", l))
        .collect::<Vec<_>>()
        .join("\n")
}

fn indented(lines: &[String]) -> String {
    lines
        .iter()
        .map(|l| format!("  - {}", l))
        .collect::<Vec<_>>()
        .join("\n")
}
