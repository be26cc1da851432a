//! Iron-condor wrapper — both sides of the chain in one invocation.
//!
//! Composition, not inheritance: the wrapper evaluates the inner [`Dte1`]
//! strategy's signal side, flips the option type, and runs the opposite
//! side against the same market context. The two spreads are independent
//! submissions; one side failing never rolls back or masks the other.

use crate::error::Result;
use crate::providers::{ChainProvider, MarketDataProvider, OrderGateway};
use crate::strategy::dte1::Dte1;
use crate::strategy::{SpreadOutcome, Strategy};
use crate::types::enums::OptionType;

/// Result of one side of the condor.
///
/// `result` keeps submission errors per side instead of failing the whole
/// report — a condor may partially fill its pair.
#[derive(Debug)]
pub struct SideReport {
    /// Which chain side was evaluated.
    pub side: OptionType,
    /// The side's outcome, or the error that aborted it.
    pub result: Result<SpreadOutcome>,
}

/// Two-entry report for an iron-condor evaluation.
#[derive(Debug)]
pub struct CondorReport {
    /// The signal side, submitted first.
    pub first: SideReport,
    /// The flipped side, submitted second.
    pub second: SideReport,
}

/// Iron-condor strategy: a [`Dte1`] spread on the signal side plus its
/// mirror on the opposite side.
#[derive(Debug, Clone)]
pub struct IronCondor<M, C, G> {
    inner: Dte1<M, C, G>,
}

impl<M, C, G> IronCondor<M, C, G>
where
    M: MarketDataProvider,
    C: ChainProvider,
    G: OrderGateway,
{
    /// Wrap a single-sided strategy.
    pub fn new(inner: Dte1<M, C, G>) -> Self {
        Self { inner }
    }
}

impl<M, C, G> Strategy for IronCondor<M, C, G>
where
    M: MarketDataProvider,
    C: ChainProvider,
    G: OrderGateway,
{
    type Report = CondorReport;

    /// Evaluate both sides against one market context.
    ///
    /// Candles and chain are fetched once; a fetch failure is fatal to the
    /// whole cycle. After that, each side runs to completion independently
    /// and the report captures both results. A `NO_OP` signal yields a
    /// no-trade report for both sides.
    async fn execute(&self) -> Result<CondorReport> {
        let ctx = self.inner.market_context().await?;
        let signal = ctx.series.signal();
        if signal == OptionType::NO_OP {
            tracing::debug!("signal resolved to NO_OP, skipping both condor sides");
            return Ok(CondorReport {
                first: SideReport {
                    side: OptionType::NO_OP,
                    result: Ok(SpreadOutcome::NoTrade),
                },
                second: SideReport {
                    side: OptionType::NO_OP,
                    result: Ok(SpreadOutcome::NoTrade),
                },
            });
        }

        let first = SideReport {
            side: signal,
            result: self.inner.run_side(&ctx, signal).await,
        };
        let flipped = signal.flipped();
        let second = SideReport {
            side: flipped,
            result: self.inner.run_side(&ctx, flipped).await,
        };
        Ok(CondorReport { first, second })
    }
}
