//! Per-chat portfolio bookkeeping.
//!
//! Volatile, process-lifetime state: one tracked entry per (chat, contract),
//! overwritten on re-track. Owned by the runner and passed by handle to the
//! command handler.

use std::collections::{BTreeMap, HashMap};
use std::sync::Mutex;

use serde::Serialize;

/// One tracked position. `token_id` is `"coin"` for ERC-20 coins.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PortfolioItem {
    pub amount: f64,
    pub value: f64,
    pub token_id: String,
    pub name: String,
    pub symbol: String,
}

impl PortfolioItem {
    /// A single tracked NFT token at the given price.
    pub fn token(token_id: &str, value: f64) -> Self {
        Self {
            amount: 1.0,
            value,
            token_id: token_id.to_string(),
            name: "N/A".to_string(),
            symbol: "N/A".to_string(),
        }
    }

    /// A single tracked coin at the given price.
    pub fn coin(name: Option<&str>, symbol: Option<&str>, value: f64) -> Self {
        Self {
            amount: 1.0,
            value,
            token_id: "coin".to_string(),
            name: name.unwrap_or("N/A").to_string(),
            symbol: symbol.unwrap_or("N/A").to_string(),
        }
    }
}

/// In-memory portfolio store, keyed by chat id then contract address.
#[derive(Debug, Default)]
pub struct PortfolioStore {
    inner: Mutex<HashMap<i64, BTreeMap<String, PortfolioItem>>>,
}

impl PortfolioStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or replaces the chat's entry for this contract.
    pub fn track(&self, chat_id: i64, contract: &str, item: PortfolioItem) {
        let mut inner = self.inner.lock().unwrap_or_else(|e| e.into_inner());
        inner
            .entry(chat_id)
            .or_default()
            .insert(contract.to_string(), item);
    }

    /// Snapshot of the chat's portfolio, ordered by contract address.
    pub fn items_for(&self, chat_id: i64) -> Vec<(String, PortfolioItem)> {
        let inner = self.inner.lock().unwrap_or_else(|e| e.into_inner());
        inner
            .get(&chat_id)
            .map(|m| m.iter().map(|(k, v)| (k.clone(), v.clone())).collect())
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_chat_has_empty_portfolio() {
        let store = PortfolioStore::new();
        assert!(store.items_for(1).is_empty());
    }

    #[test]
    fn retracking_replaces_the_entry() {
        let store = PortfolioStore::new();
        store.track(1, "0xa", PortfolioItem::token("5", 10.0));
        store.track(1, "0xa", PortfolioItem::token("5", 20.0));

        let items = store.items_for(1);
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].1.value, 20.0);
    }

    #[test]
    fn chats_are_isolated() {
        let store = PortfolioStore::new();
        store.track(1, "0xa", PortfolioItem::coin(Some("A"), Some("AAA"), 1.0));
        store.track(2, "0xb", PortfolioItem::coin(Some("B"), Some("BBB"), 2.0));

        assert_eq!(store.items_for(1).len(), 1);
        assert_eq!(store.items_for(2)[0].0, "0xb");
    }
}
