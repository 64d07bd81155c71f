//! Wire types for the Zora SDK REST API.
//!
//! Numeric-looking fields (totalSupply, marketCap, volumes) arrive as
//! strings; they are kept as strings for display and parsed only where a
//! number is needed.

use serde::{Deserialize, Serialize};

/// A Zora ERC-20 coin as returned by `/coin` and inside `/explore` edges.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Coin {
    pub name: Option<String>,
    pub symbol: Option<String>,
    pub description: Option<String>,
    pub address: Option<String>,
    pub total_supply: Option<String>,
    pub market_cap: Option<String>,
    pub market_cap_delta24h: Option<String>,
    pub volume24h: Option<String>,
    pub total_volume: Option<String>,
    pub creator_address: Option<String>,
    pub created_at: Option<String>,
    pub unique_holders: Option<u64>,
}

impl Coin {
    /// The coin's total volume as a number, 0 when absent or unparseable.
    /// Display-only; alerting goes through [`Coin::checked_price`].
    pub fn price(&self) -> f64 {
        parse_num(self.total_volume.as_deref())
    }

    /// The value the alert scanner compares against. `None` when the
    /// response carries no parseable total volume.
    pub fn checked_price(&self) -> Option<f64> {
        self.total_volume.as_deref().and_then(|v| v.parse().ok())
    }

    pub fn volume_24h(&self) -> f64 {
        parse_num(self.volume24h.as_deref())
    }

    pub fn market_cap_delta_24h(&self) -> f64 {
        parse_num(self.market_cap_delta24h.as_deref())
    }

    pub fn holders(&self) -> u64 {
        self.unique_holders.unwrap_or(0)
    }
}

fn parse_num(s: Option<&str>) -> f64 {
    s.and_then(|v| v.parse::<f64>().ok()).unwrap_or(0.0)
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CoinResponse {
    pub zora20_token: Option<Coin>,
}

/// A Zora 1155 token as returned by `/token`.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Token {
    pub name: Option<String>,
    pub token_id: Option<String>,
    pub price: Option<f64>,
    pub total_minted: Option<String>,
    pub max_supply: Option<String>,
    pub primary_mint_active: Option<bool>,
    pub secondary_market_active: Option<bool>,
}

impl Token {
    /// Current price, 0 when the token has no configured price.
    pub fn price(&self) -> f64 {
        self.price.unwrap_or(0.0)
    }

    pub fn primary_mint_active(&self) -> bool {
        self.primary_mint_active.unwrap_or(false)
    }

    pub fn secondary_market_active(&self) -> bool {
        self.secondary_market_active.unwrap_or(false)
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct TokenResponse {
    pub token: Option<Token>,
}

/// Explore list kinds supported by `/explore?listType=`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListKind {
    TopGainers,
    TopVolume24h,
    MostValuable,
    New,
    LastTraded,
    LastTradedUnique,
}

impl ListKind {
    pub fn query_value(self) -> &'static str {
        match self {
            ListKind::TopGainers => "TOP_GAINERS",
            ListKind::TopVolume24h => "TOP_VOLUME_24H",
            ListKind::MostValuable => "MOST_VALUABLE",
            ListKind::New => "NEW",
            ListKind::LastTraded => "LAST_TRADED",
            ListKind::LastTradedUnique => "LAST_TRADED_UNIQUE",
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ExploreResponse {
    pub explore_list: Option<ExploreList>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ExploreList {
    #[serde(default)]
    pub edges: Vec<ExploreEdge>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ExploreEdge {
    pub node: Coin,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn list_kinds_map_to_api_query_values() {
        // These strings are the API's wire values; renaming a variant must
        // not change them.
        assert_eq!(ListKind::TopGainers.query_value(), "TOP_GAINERS");
        assert_eq!(ListKind::TopVolume24h.query_value(), "TOP_VOLUME_24H");
        assert_eq!(ListKind::MostValuable.query_value(), "MOST_VALUABLE");
        assert_eq!(ListKind::New.query_value(), "NEW");
        assert_eq!(ListKind::LastTraded.query_value(), "LAST_TRADED");
        assert_eq!(ListKind::LastTradedUnique.query_value(), "LAST_TRADED_UNIQUE");
    }

    #[test]
    fn checked_price_requires_a_numeric_total_volume() {
        let coin = Coin {
            total_volume: Some("12.5".to_string()),
            ..Coin::default()
        };
        assert_eq!(coin.checked_price(), Some(12.5));
        assert_eq!(coin.price(), 12.5);

        let bad = Coin {
            total_volume: Some("n/a".to_string()),
            ..Coin::default()
        };
        assert_eq!(bad.checked_price(), None);
        assert_eq!(bad.price(), 0.0);
        assert_eq!(Coin::default().checked_price(), None);
    }
}
