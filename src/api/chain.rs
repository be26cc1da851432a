//! Option chain endpoint — full chain fetch and expiration snapshot.

use crate::client::BrokerClient;
use crate::error::Result;
use crate::providers::ChainProvider;
use crate::ticker::{self, Platform};
use crate::types::chain::{OptionChainSnapshot, RawOptionChain};

impl BrokerClient {
    /// Retrieve the full option chain for a platform symbol, all
    /// expirations included.
    ///
    /// **Endpoint:** `GET /v1/marketdata/chains`
    pub async fn get_option_chain(&self, symbol: &str) -> Result<RawOptionChain> {
        self.get(&format!("/v1/marketdata/chains?symbol={symbol}"))
            .await
    }
}

impl ChainProvider for BrokerClient {
    /// Fetch the chain and resolve the put/call sides for one expiration.
    async fn option_chain(&self, ticker: &str, expiration: &str) -> Result<OptionChainSnapshot> {
        let symbol = ticker::translate(ticker, Platform::Broker);
        let raw = self.get_option_chain(symbol).await?;
        OptionChainSnapshot::from_raw(&raw, expiration)
    }
}
