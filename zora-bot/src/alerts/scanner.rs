//! Periodic alert scanner.
//!
//! Each tick walks a snapshot of the tracking store, looks up the current
//! value per entry through the gateway, and on `price >= target` notifies
//! the chat and removes the contract's entries. Lookup and delivery failures
//! are per-entry and non-fatal; the entry stays registered and is retried on
//! the next tick.
//!
//! The loop awaits each tick to completion before taking the next one, so
//! at most one scan is ever active, and shutdown lets an in-flight tick
//! finish before stopping.

use std::sync::Arc;
use std::time::Duration;

use bot_core::{Bot, Chat};
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::{interval, timeout, MissedTickBehavior};
use tracing::{info, warn};

use super::store::AlertStore;
use super::MarketDataGateway;
use crate::format;

/// One scanning pass over the tracking store per tick.
pub struct AlertScanner {
    store: Arc<AlertStore>,
    gateway: Arc<dyn MarketDataGateway>,
    notifier: Arc<dyn Bot>,
    request_timeout: Duration,
}

impl AlertScanner {
    pub fn new(
        store: Arc<AlertStore>,
        gateway: Arc<dyn MarketDataGateway>,
        notifier: Arc<dyn Bot>,
        request_timeout: Duration,
    ) -> Self {
        Self {
            store,
            gateway,
            notifier,
            request_timeout,
        }
    }

    /// Evaluates every registered alert once. Entries added while the tick
    /// runs are picked up on the next tick; each chat is scanned over the
    /// snapshot taken when its processing starts, so match-driven removals
    /// never skip or double-visit entries.
    pub async fn run_tick(&self) {
        for chat_id in self.store.chat_ids() {
            for entry in self.store.alerts_for(chat_id) {
                let lookup = timeout(
                    self.request_timeout,
                    self.gateway.current_price(&entry.contract),
                )
                .await;

                let price = match lookup {
                    Ok(Ok(price)) => price,
                    Ok(Err(e)) => {
                        warn!(
                            chat_id,
                            contract = %entry.contract,
                            error = %e,
                            "price lookup failed; alert kept for next tick"
                        );
                        continue;
                    }
                    Err(_) => {
                        warn!(
                            chat_id,
                            contract = %entry.contract,
                            timeout_ms = self.request_timeout.as_millis() as u64,
                            "price lookup timed out; alert kept for next tick"
                        );
                        continue;
                    }
                };

                if price < entry.target_price {
                    continue;
                }

                let chat = Chat::new(chat_id);
                let text = format::alert_triggered(&entry.contract, price);
                match self.notifier.send_message(&chat, &text).await {
                    Ok(()) => {
                        // Removes every pending alert for this contract in
                        // this chat, duplicates included.
                        self.store.remove_alert(chat_id, &entry.contract);
                        info!(
                            chat_id,
                            contract = %entry.contract,
                            price,
                            target = entry.target_price,
                            "alert fired"
                        );
                    }
                    Err(e) => {
                        warn!(
                            chat_id,
                            contract = %entry.contract,
                            error = %e,
                            "alert delivery failed; alert kept for next tick"
                        );
                    }
                }
            }
        }
    }

    /// Starts the periodic loop. Ticks run strictly sequentially; a tick
    /// that outlasts the interval delays the next one instead of racing it.
    pub fn spawn(self: Arc<Self>, every: Duration) -> ScannerHandle {
        let (shutdown_tx, mut shutdown_rx) = watch::channel(false);

        let task: JoinHandle<()> = tokio::spawn(async move {
            let mut ticker = interval(every);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            info!(interval_secs = every.as_secs(), "alert scanner started");

            loop {
                tokio::select! {
                    _ = ticker.tick() => {
                        self.run_tick().await;
                    }
                    changed = shutdown_rx.changed() => {
                        if changed.is_err() || *shutdown_rx.borrow() {
                            break;
                        }
                    }
                }
            }
            info!("alert scanner stopped");
        });

        ScannerHandle {
            shutdown: shutdown_tx,
            task,
        }
    }
}

/// Handle to a running scanner loop. Dropping it ends the loop after the
/// current tick; `stop` additionally waits for that tick to finish.
pub struct ScannerHandle {
    shutdown: watch::Sender<bool>,
    task: JoinHandle<()>,
}

impl ScannerHandle {
    /// Stops taking new ticks and waits for an in-flight tick to finish.
    pub async fn stop(self) {
        let _ = self.shutdown.send(true);
        let _ = self.task.await;
    }
}
