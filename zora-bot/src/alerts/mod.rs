//! Price alerts: tracking store, market data gateway boundary, and the
//! periodic scanner.

mod scanner;
mod store;

pub use scanner::{AlertScanner, ScannerHandle};
pub use store::{AlertEntry, AlertStore};

use async_trait::async_trait;
use zora_client::ZoraClient;

/// Current-value lookup by contract address. The scanner depends on this
/// boundary; production wires in [`ZoraClient`], tests stub it.
#[async_trait]
pub trait MarketDataGateway: Send + Sync {
    async fn current_price(&self, contract: &str) -> zora_client::Result<f64>;
}

#[async_trait]
impl MarketDataGateway for ZoraClient {
    async fn current_price(&self, contract: &str) -> zora_client::Result<f64> {
        ZoraClient::current_price(self, contract).await
    }
}
