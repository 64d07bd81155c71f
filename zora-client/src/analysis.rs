//! Rule-based trading analysis and signal tagging.
//!
//! Pure functions over [`Coin`] / [`Token`] data; the bot formats the
//! result into chat replies and the AI client uses it as prompt context.

use std::fmt;

use crate::types::{Coin, Token};

/// Buy/Sell/Hold tag for explore-list coins.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Signal {
    Buy,
    Sell,
    Hold,
}

impl fmt::Display for Signal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Signal::Buy => write!(f, "Buy"),
            Signal::Sell => write!(f, "Sell"),
            Signal::Hold => write!(f, "Hold"),
        }
    }
}

/// Tags a coin with a trading signal from its 24h momentum, volume and
/// holder count.
pub fn tag_signal(coin: &Coin) -> Signal {
    let delta = coin.market_cap_delta_24h();
    let volume = coin.volume_24h();
    if delta > 1000.0 && volume > 500.0 && coin.holders() > 100 {
        Signal::Buy
    } else if delta < 0.0 && volume < 100.0 {
        Signal::Sell
    } else {
        Signal::Hold
    }
}

/// Trading analysis computed from current market data. All text fields are
/// ready for display.
#[derive(Debug, Clone)]
pub struct TradingAnalysis {
    pub current_price: f64,
    pub price_trend: &'static str,
    pub price_volatility: &'static str,
    pub entry_points: Vec<String>,
    pub exit_points: Vec<String>,
    pub stop_loss: String,
    pub take_profit: String,
    pub risk_level: &'static str,
    pub liquidity: String,
    pub volatility: String,
    pub recommendations: Vec<String>,
}

/// Builds the analysis for a coin.
pub fn analyze_coin(coin: &Coin) -> TradingAnalysis {
    let price = coin.price();
    TradingAnalysis {
        current_price: price,
        price_trend: "neutral",
        price_volatility: "medium",
        entry_points: entry_points(price),
        exit_points: exit_points(price),
        stop_loss: stop_loss(price),
        take_profit: take_profit(price),
        risk_level: "Medium Risk",
        liquidity: "Market liquidity is medium".to_string(),
        volatility: "Price volatility is medium".to_string(),
        recommendations: base_recommendations(),
    }
}

/// Builds the analysis for a 1155 token, with mint/market status
/// recommendations on top of the price-derived levels.
pub fn analyze_token(token: &Token) -> TradingAnalysis {
    let price = token.price();
    let mut recommendations = Vec::new();
    if token.primary_mint_active() {
        recommendations
            .push("Primary mint is active - Consider participating in the initial sale".to_string());
    }
    if token.secondary_market_active() {
        recommendations
            .push("Secondary market is active - Monitor for trading opportunities".to_string());
    }
    recommendations.extend(base_recommendations());

    TradingAnalysis {
        current_price: price,
        price_trend: "neutral",
        price_volatility: "medium",
        entry_points: entry_points(price),
        exit_points: exit_points(price),
        stop_loss: stop_loss(price),
        take_profit: take_profit(price),
        risk_level: "Medium Risk",
        liquidity: "Market liquidity is medium".to_string(),
        volatility: "Price volatility is medium".to_string(),
        recommendations,
    }
}

fn entry_points(price: f64) -> Vec<String> {
    if price <= 0.0 {
        return Vec::new();
    }
    vec![
        format!("Strong entry point at {}", price),
        format!("Conservative entry at {}", price * 0.95),
        format!("Aggressive entry at {}", price * 1.05),
    ]
}

fn exit_points(price: f64) -> Vec<String> {
    if price <= 0.0 {
        return Vec::new();
    }
    vec![
        format!("Take profit at {}", price * 1.1),
        format!("Partial exit at {}", price * 1.05),
        format!("Trailing stop at {}", price * 0.95),
    ]
}

fn stop_loss(price: f64) -> String {
    if price > 0.0 {
        format!("Stop loss at {}", price * 0.9)
    } else {
        "Not available".to_string()
    }
}

fn take_profit(price: f64) -> String {
    if price > 0.0 {
        format!("Take profit at {}", price * 1.2)
    } else {
        "Not available".to_string()
    }
}

fn base_recommendations() -> Vec<String> {
    vec![
        "Always use stop-loss orders to manage risk".to_string(),
        "Consider position sizing based on your risk tolerance".to_string(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn coin(delta: &str, volume: &str, holders: u64) -> Coin {
        Coin {
            market_cap_delta24h: Some(delta.to_string()),
            volume24h: Some(volume.to_string()),
            unique_holders: Some(holders),
            ..Coin::default()
        }
    }

    #[test]
    fn momentum_coin_tags_buy() {
        assert_eq!(tag_signal(&coin("1500", "600", 200)), Signal::Buy);
    }

    #[test]
    fn fading_coin_tags_sell() {
        assert_eq!(tag_signal(&coin("-10", "50", 200)), Signal::Sell);
    }

    #[test]
    fn middling_coin_tags_hold() {
        assert_eq!(tag_signal(&coin("500", "600", 200)), Signal::Hold);
        // High momentum but too few holders is still a hold.
        assert_eq!(tag_signal(&coin("1500", "600", 10)), Signal::Hold);
    }

    #[test]
    fn missing_fields_tag_hold() {
        assert_eq!(tag_signal(&Coin::default()), Signal::Hold);
    }

    #[test]
    fn priced_coin_gets_levels() {
        let c = Coin {
            total_volume: Some("100".to_string()),
            ..Coin::default()
        };
        let a = analyze_coin(&c);
        assert_eq!(a.current_price, 100.0);
        assert_eq!(a.entry_points.len(), 3);
        assert_eq!(a.stop_loss, "Stop loss at 90");
        assert_eq!(a.take_profit, "Take profit at 120");
    }

    #[test]
    fn unpriced_coin_has_no_levels() {
        let a = analyze_coin(&Coin::default());
        assert!(a.entry_points.is_empty());
        assert!(a.exit_points.is_empty());
        assert_eq!(a.stop_loss, "Not available");
    }

    #[test]
    fn active_mint_adds_recommendation() {
        let t = Token {
            price: Some(1.0),
            primary_mint_active: Some(true),
            ..Token::default()
        };
        let a = analyze_token(&t);
        assert!(a.recommendations[0].contains("Primary mint is active"));
    }
}
