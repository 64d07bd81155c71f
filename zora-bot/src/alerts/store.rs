//! In-memory price-alert registrations, keyed by chat id.
//!
//! Owned component shared by handle between the command handler (adds and
//! removes) and the scanner (reads and removes). Duplicate contracts within
//! one chat are allowed and evaluated independently; removal by contract
//! drops every duplicate at once. A chat's list is created lazily and kept
//! (possibly empty) once created.

use std::collections::HashMap;
use std::sync::Mutex;

/// One registered alert: notify once the contract's current value reaches
/// `target_price`.
#[derive(Debug, Clone, PartialEq)]
pub struct AlertEntry {
    pub contract: String,
    pub target_price: f64,
}

/// Tracking store for alert registrations. Interior mutability behind a
/// single mutex; contention is low-volume and latency-insensitive.
#[derive(Debug, Default)]
pub struct AlertStore {
    inner: Mutex<HashMap<i64, Vec<AlertEntry>>>,
}

impl AlertStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an alert to the chat's list, creating the list if absent.
    /// The contract is expected to be normalized (lowercase) upstream.
    pub fn add_alert(&self, chat_id: i64, contract: &str, target_price: f64) {
        let mut inner = self.inner.lock().unwrap_or_else(|e| e.into_inner());
        inner.entry(chat_id).or_default().push(AlertEntry {
            contract: contract.to_string(),
            target_price,
        });
    }

    /// Cloned snapshot of the chat's alerts, in registration order. Empty
    /// for unknown chats.
    pub fn alerts_for(&self, chat_id: i64) -> Vec<AlertEntry> {
        let inner = self.inner.lock().unwrap_or_else(|e| e.into_inner());
        inner.get(&chat_id).cloned().unwrap_or_default()
    }

    /// Removes every entry for this chat whose contract matches exactly.
    /// No-op for unknown chats; an emptied list stays in the map.
    pub fn remove_alert(&self, chat_id: i64, contract: &str) {
        let mut inner = self.inner.lock().unwrap_or_else(|e| e.into_inner());
        if let Some(alerts) = inner.get_mut(&chat_id) {
            alerts.retain(|a| a.contract != contract);
        }
    }

    /// Chat ids with a registered list (possibly empty), for scanner
    /// iteration.
    pub fn chat_ids(&self) -> Vec<i64> {
        let inner = self.inner.lock().unwrap_or_else(|e| e.into_inner());
        inner.keys().copied().collect()
    }
}
