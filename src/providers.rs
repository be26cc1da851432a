//! Collaborator contracts the strategy engine depends on.
//!
//! The orchestrator is generic over these traits, so production code can
//! plug in [`BrokerClient`](crate::client::BrokerClient) while tests use
//! in-memory fixtures. All calls are made sequentially — the engine never
//! fans out across providers.
//!
//! The traits use native `async fn`; the engine takes providers as generic
//! parameters, not trait objects, so the future types need no boxing.

use crate::error::Result;
use crate::types::candle::CandleSeries;
use crate::types::chain::OptionChainSnapshot;
use crate::types::order::OrderAck;
use crate::types::spread::VerticalSpread;

/// Source of daily OHLC history.
#[allow(async_fn_in_trait)]
pub trait MarketDataProvider {
    /// Fetch the most recent `days` daily candles for `ticker`,
    /// most-recent-first.
    ///
    /// # Errors
    ///
    /// [`TriggerError::DataUnavailable`](crate::error::TriggerError::DataUnavailable)
    /// if the ticker is unresolvable or the history is empty or shorter than
    /// `days`.
    async fn daily_candles(&self, ticker: &str, days: usize) -> Result<CandleSeries>;
}

/// Source of option chain snapshots.
#[allow(async_fn_in_trait)]
pub trait ChainProvider {
    /// Fetch the chain for `ticker` and resolve the sides matching
    /// `expiration` (`YYYY-MM-DD`, matched as a literal key prefix).
    async fn option_chain(&self, ticker: &str, expiration: &str) -> Result<OptionChainSnapshot>;
}

/// Order submission endpoint.
///
/// Submission is side-effecting and **not** idempotent: calling it twice
/// places two orders. The engine calls it at most once per spread.
#[allow(async_fn_in_trait)]
pub trait OrderGateway {
    /// Submit a priced vertical spread.
    async fn submit_vertical_spread(&self, spread: &VerticalSpread) -> Result<OrderAck>;
}
