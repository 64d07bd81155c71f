//! # zora-client
//!
//! HTTP client for the Zora SDK REST API (`api-sdk.zora.engineering`):
//! coin details, 1155 token details, and explore lists. This is the market
//! data gateway the bot's commands and alert scanner sit on top of.

pub mod analysis;
pub mod error;
pub mod types;

pub use analysis::{analyze_coin, analyze_token, tag_signal, Signal, TradingAnalysis};
pub use error::{Result, ZoraError};
pub use types::{Coin, ListKind, Token};

use tracing::debug;

use crate::types::{CoinResponse, ExploreResponse, TokenResponse};

pub const DEFAULT_API_URL: &str = "https://api-sdk.zora.engineering";

/// Chain id coins are looked up on (Base).
pub const COIN_CHAIN_ID: u64 = 8453;
/// Chain id 1155 tokens are looked up on (Ethereum mainnet).
pub const TOKEN_CHAIN_ID: u64 = 1;

/// Zora SDK API client. Cheap to clone; holds a shared reqwest client.
#[derive(Clone)]
pub struct ZoraClient {
    http: reqwest::Client,
    base_url: String,
}

impl ZoraClient {
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_API_URL.to_string())
    }

    /// Points the client at a different API base (tests use a mock server).
    pub fn with_base_url(base_url: String) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Fetches coin details by contract address.
    pub async fn get_coin(&self, address: &str) -> Result<Coin> {
        let url = format!("{}/coin", self.base_url);
        let chain = COIN_CHAIN_ID.to_string();
        let res = self
            .http
            .get(&url)
            .query(&[("address", address), ("chain", chain.as_str())])
            .send()
            .await?;
        let res = check_status(res).await?;

        let body: CoinResponse = res.json().await?;
        debug!(contract = %address, "fetched coin details");
        body.zora20_token
            .ok_or_else(|| ZoraError::CoinNotFound(address.to_string()))
    }

    /// Current numeric value for a coin contract; the alert scanner compares
    /// this against registered targets. A response without a parseable
    /// total volume is a lookup failure, not a zero price.
    pub async fn current_price(&self, address: &str) -> Result<f64> {
        let coin = self.get_coin(address).await?;
        coin.checked_price().ok_or_else(|| {
            ZoraError::BadResponse(format!("totalVolume is not numeric for {address}"))
        })
    }

    /// Fetches 1155 token details by contract address and token id.
    pub async fn get_token(&self, address: &str, token_id: &str) -> Result<Token> {
        let url = format!("{}/token", self.base_url);
        let chain = TOKEN_CHAIN_ID.to_string();
        let res = self
            .http
            .get(&url)
            .query(&[
                ("address", address),
                ("tokenId", token_id),
                ("chain", chain.as_str()),
            ])
            .send()
            .await?;
        let res = check_status(res).await?;

        let body: TokenResponse = res.json().await?;
        debug!(contract = %address, token_id = %token_id, "fetched token details");
        body.token.ok_or_else(|| ZoraError::TokenNotFound {
            contract: address.to_string(),
            token_id: token_id.to_string(),
        })
    }

    /// Fetches an explore list (top gainers, top volume, ...).
    pub async fn explore(&self, kind: ListKind, count: usize) -> Result<Vec<Coin>> {
        let url = format!("{}/explore", self.base_url);
        let count = count.to_string();
        let res = self
            .http
            .get(&url)
            .query(&[("listType", kind.query_value()), ("count", count.as_str())])
            .send()
            .await?;
        let res = check_status(res).await?;

        let body: ExploreResponse = res.json().await?;
        let coins: Vec<Coin> = body
            .explore_list
            .map(|l| l.edges.into_iter().map(|e| e.node).collect())
            .unwrap_or_default();
        debug!(list = kind.query_value(), coins = coins.len(), "fetched explore list");
        Ok(coins)
    }

    /// Top gainers, tagged with Buy/Sell/Hold signals.
    pub async fn trading_signals(&self, count: usize) -> Result<Vec<(Coin, Signal)>> {
        let coins = self.explore(ListKind::TopGainers, count).await?;
        Ok(coins
            .into_iter()
            .map(|c| {
                let signal = tag_signal(&c);
                (c, signal)
            })
            .collect())
    }
}

impl Default for ZoraClient {
    fn default() -> Self {
        Self::new()
    }
}

async fn check_status(res: reqwest::Response) -> Result<reqwest::Response> {
    if !res.status().is_success() {
        let status = res.status();
        let body = res.text().await.unwrap_or_default();
        return Err(ZoraError::BadResponse(format!("{status} {body}")));
    }
    Ok(res)
}
