//! The 1-DTE credit-spread strategy.
//!
//! One evaluation: fetch the candle window and chain snapshot, resolve the
//! daily signal from the green/red streak, derive the volatility-adjusted
//! rough strike, select and price the spread, validate it, and submit.
//!
//! Collaborators are injected at construction — the strategy owns no broker
//! state and builds everything fresh per evaluation.

use chrono::{Datelike, Utc};

use crate::constants::ATR_WINDOW_DAYS;
use crate::error::{Result, TriggerError};
use crate::providers::{ChainProvider, MarketDataProvider, OrderGateway};
use crate::strategy::price::spread_price;
use crate::strategy::select::select_strikes;
use crate::strategy::{Dte1Config, RejectReason, SpreadOutcome, Strategy};
use crate::types::candle::CandleSeries;
use crate::types::chain::OptionChainSnapshot;
use crate::types::enums::{Instruction, OptionType};
use crate::types::spread::{OptionLeg, VerticalSpread};

/// Everything one evaluation cycle needs, fetched up front.
///
/// The iron-condor wrapper reuses a single context for both sides, so the
/// chain is fetched exactly once per invocation.
#[derive(Debug, Clone)]
pub(crate) struct MarketContext {
    pub(crate) series: CandleSeries,
    pub(crate) chain: OptionChainSnapshot,
    pub(crate) expiration: String,
    pub(crate) quantity: u32,
}

/// Single-sided 1-DTE vertical spread strategy.
#[derive(Debug, Clone)]
pub struct Dte1<M, C, G> {
    config: Dte1Config,
    market_data: M,
    chains: C,
    gateway: G,
}

impl<M, C, G> Dte1<M, C, G>
where
    M: MarketDataProvider,
    C: ChainProvider,
    G: OrderGateway,
{
    /// Build a strategy instance from its configuration and collaborators.
    pub fn new(config: Dte1Config, market_data: M, chains: C, gateway: G) -> Self {
        Self {
            config,
            market_data,
            chains,
            gateway,
        }
    }

    /// The strategy configuration.
    pub fn config(&self) -> &Dte1Config {
        &self.config
    }

    /// Fetch candles and chain for this evaluation.
    pub(crate) async fn market_context(&self) -> Result<MarketContext> {
        let today = self.config.as_of.unwrap_or_else(|| Utc::now().date_naive());
        let expiration = self
            .config
            .expiration_for(today)
            .format("%Y-%m-%d")
            .to_string();

        let series = self
            .market_data
            .daily_candles(&self.config.ticker, ATR_WINDOW_DAYS)
            .await?;
        let chain = self
            .chains
            .option_chain(&self.config.ticker, &expiration)
            .await?;

        Ok(MarketContext {
            series,
            chain,
            expiration,
            quantity: self.config.quantities.quantity_for(today.weekday()),
        })
    }

    /// Plan, validate, and submit one side of the chain.
    pub(crate) async fn run_side(
        &self,
        ctx: &MarketContext,
        option_type: OptionType,
    ) -> Result<SpreadOutcome> {
        let spread = match self.plan_spread(ctx, option_type)? {
            Ok(spread) => spread,
            Err(reason) => {
                tracing::error!(%reason, side = ?option_type, "spread rejected");
                return Ok(SpreadOutcome::Rejected { reason });
            }
        };

        let ack = self.gateway.submit_vertical_spread(&spread).await?;
        Ok(SpreadOutcome::Submitted { spread, ack })
    }

    /// Pure planning step: rough strike → legs → price → validation.
    ///
    /// The outer `Result` carries fatal errors; the inner one distinguishes
    /// a plannable spread from a validation rejection.
    fn plan_spread(
        &self,
        ctx: &MarketContext,
        option_type: OptionType,
    ) -> Result<std::result::Result<VerticalSpread, RejectReason>> {
        let series = &ctx.series;
        let streak = match option_type {
            OptionType::CALL => series.green_streak(),
            OptionType::PUT => series.red_streak(),
            OptionType::NO_OP => {
                return Err(TriggerError::InvalidArgument(
                    "plan_spread called with NO_OP".into(),
                ));
            }
        };

        let multiplier = self.config.multipliers(option_type).multiplier_for(streak);
        let delta = series.atr() * multiplier;
        let close = series.latest().close;
        let rough_strike = match option_type {
            OptionType::CALL => close + delta,
            _ => close - delta,
        };
        tracing::debug!(
            side = ?option_type,
            streak,
            multiplier,
            rough_strike,
            "planning spread"
        );

        let side = ctx.chain.side(option_type).ok_or_else(|| {
            TriggerError::InvalidArgument("no chain side for NO_OP".into())
        })?;
        let pair = match select_strikes(
            &side.strikes(),
            rough_strike,
            self.config.width(),
            option_type,
        ) {
            Ok(pair) => pair,
            Err(TriggerError::DegenerateSpread(detail)) => {
                return Ok(Err(RejectReason::UnreachableWidth(detail)));
            }
            Err(e) => return Err(e),
        };

        if pair.short == pair.long {
            return Ok(Err(RejectReason::SameStrike { strike: pair.short }));
        }

        let short_quote = side.quote_at(pair.short).ok_or_else(|| {
            TriggerError::DataUnavailable(format!("no quote at short strike {}", pair.short))
        })?;
        let long_quote = side.quote_at(pair.long).ok_or_else(|| {
            TriggerError::DataUnavailable(format!("no quote at long strike {}", pair.long))
        })?;

        let price = spread_price(option_type, short_quote, long_quote, self.config.tick);
        if price <= 0.0 {
            return Ok(Err(RejectReason::NonPositivePrice { price }));
        }

        Ok(Ok(VerticalSpread {
            order_type: self.config.order_type,
            quantity: ctx.quantity,
            expiration_date: ctx.expiration.clone(),
            short_leg: OptionLeg::new(short_quote, Instruction::SELL_TO_OPEN, ctx.quantity),
            long_leg: OptionLeg::new(long_quote, Instruction::BUY_TO_OPEN, ctx.quantity),
            price,
        }))
    }
}

impl<M, C, G> Strategy for Dte1<M, C, G>
where
    M: MarketDataProvider,
    C: ChainProvider,
    G: OrderGateway,
{
    type Report = SpreadOutcome;

    /// One full single-sided evaluation.
    ///
    /// A `NO_OP` signal terminates early with [`SpreadOutcome::NoTrade`]
    /// before the chain side is ever consulted.
    async fn execute(&self) -> Result<SpreadOutcome> {
        let ctx = self.market_context().await?;
        let signal = ctx.series.signal();
        if signal == OptionType::NO_OP {
            tracing::debug!("signal resolved to NO_OP, no trade today");
            return Ok(SpreadOutcome::NoTrade);
        }
        self.run_side(&ctx, signal).await
    }
}
