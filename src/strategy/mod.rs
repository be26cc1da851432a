//! Strategy engine — signal resolution, strike selection, pricing, and
//! order orchestration.
//!
//! ## Organization
//!
//! - [`select`] — nearest-strike and width-walk strike selection
//! - [`price`] — mid-price spread pricing with conservative tick rounding
//! - [`dte1`] — the single-sided 1-DTE credit-spread strategy
//! - [`condor`] — iron-condor wrapper running both sides of the chain
//!
//! Strategies are generic over the collaborator traits in
//! [`crate::providers`], so the same orchestration runs against the live
//! [`BrokerClient`](crate::client::BrokerClient) or in-memory test fixtures.

use std::collections::HashMap;

use chrono::{Datelike, Duration, NaiveDate, Weekday};

use crate::constants::{DEFAULT_BUYING_POWER, DEFAULT_DTE, PRICE_TICK};
use crate::error::Result;
use crate::types::enums::{OptionType, OrderType};
use crate::types::order::OrderAck;
use crate::types::spread::VerticalSpread;

pub mod condor;
pub mod dte1;
pub mod price;
pub mod select;

pub use condor::{CondorReport, IronCondor, SideReport};
pub use dte1::Dte1;

// ---------------------------------------------------------------------------
// Strategy trait
// ---------------------------------------------------------------------------

/// A tradeable strategy that can be evaluated once per invocation.
///
/// Evaluation runs the full cycle: fetch market data, resolve the signal,
/// build and price spreads, and submit orders. Nothing persists between
/// evaluations.
#[allow(async_fn_in_trait)]
pub trait Strategy {
    /// What one evaluation produces.
    type Report;

    /// Run one full evaluation cycle.
    async fn execute(&self) -> Result<Self::Report>;
}

// ---------------------------------------------------------------------------
// Outcomes
// ---------------------------------------------------------------------------

/// Why a planned spread was not submitted.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RejectReason {
    /// Short and long legs resolved to the same strike.
    #[error("short and long legs resolved to the same strike: {strike}")]
    SameStrike {
        /// The shared strike.
        strike: f64,
    },

    /// The long-leg walk could not reach the target width.
    #[error("no strike at target width: {0}")]
    UnreachableWidth(String),

    /// The priced spread was not a positive credit.
    #[error("spread priced at a non-positive {price}")]
    NonPositivePrice {
        /// The computed price.
        price: f64,
    },
}

/// Terminal result of evaluating one side of the chain.
#[derive(Debug, Clone, PartialEq)]
pub enum SpreadOutcome {
    /// The spread was priced, validated, and accepted by the gateway.
    Submitted {
        /// The spread that was submitted.
        spread: VerticalSpread,
        /// The gateway's acknowledgement.
        ack: OrderAck,
    },
    /// The spread failed validation and was never submitted.
    Rejected {
        /// The validation failure.
        reason: RejectReason,
    },
    /// The signal resolved to `NO_OP` — a valid "no trade today", not an
    /// error.
    NoTrade,
}

// ---------------------------------------------------------------------------
// Tunables
// ---------------------------------------------------------------------------

/// Streak-length → ATR-multiplier lookup with a fallback for streaks longer
/// than the table covers.
///
/// Longer streaks map to smaller multipliers: the longer a run, the nearer
/// the short strike sits to the close (mean-reversion confidence decay).
/// The exact values are tunable, not a structural contract.
#[derive(Debug, Clone, PartialEq)]
pub struct MultiplierTable {
    by_streak: HashMap<usize, f64>,
    fallback: f64,
}

impl MultiplierTable {
    /// Build a table from explicit entries plus a fallback multiplier.
    pub fn new(entries: impl IntoIterator<Item = (usize, f64)>, fallback: f64) -> Self {
        Self {
            by_streak: entries.into_iter().collect(),
            fallback,
        }
    }

    /// Default table for the call side.
    pub fn default_call() -> Self {
        Self::new([(0, 1.8), (1, 1.6), (2, 1.2), (3, 1.1), (4, 1.1)], 1.0)
    }

    /// Default table for the put side.
    pub fn default_put() -> Self {
        Self::new([(0, 2.0), (1, 1.8), (2, 1.4), (3, 1.3), (4, 1.0)], 1.0)
    }

    /// Multiplier for a streak length, falling back past the table's end.
    pub fn multiplier_for(&self, streak: usize) -> f64 {
        self.by_streak.get(&streak).copied().unwrap_or(self.fallback)
    }
}

/// Contracts per order, keyed by the expiration the evaluation day trades
/// into.
///
/// Orders placed on Friday expire Monday, Tuesday's expire Wednesday, and
/// Thursday's expire Friday; any other weekday trades a single contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuantitySchedule {
    /// Contracts for spreads expiring Monday (placed Friday).
    pub monday: u32,
    /// Contracts for spreads expiring Wednesday (placed Tuesday).
    pub wednesday: u32,
    /// Contracts for spreads expiring Friday (placed Thursday).
    pub friday: u32,
}

impl Default for QuantitySchedule {
    fn default() -> Self {
        Self {
            monday: 1,
            wednesday: 1,
            friday: 1,
        }
    }
}

impl QuantitySchedule {
    /// Quantity for an evaluation run on `weekday`.
    pub fn quantity_for(&self, weekday: Weekday) -> u32 {
        match weekday {
            Weekday::Fri => self.monday,
            Weekday::Tue => self.wednesday,
            Weekday::Thu => self.friday,
            _ => 1,
        }
    }
}

/// Configuration for the [`Dte1`] strategy family.
#[derive(Debug, Clone, PartialEq)]
pub struct Dte1Config {
    /// Canonical underlying symbol (e.g. `"SPX"`).
    pub ticker: String,
    /// Net pricing convention for submitted orders.
    pub order_type: OrderType,
    /// Buying power per spread in cents of underlying move; divided by 100
    /// to obtain the target strike width in dollars.
    pub buying_power: i64,
    /// Days to expiration. Friday evaluations add two days to skip the
    /// weekend.
    pub dte: i64,
    /// Price tick for spread rounding.
    pub tick: f64,
    /// ATR multiplier table for call spreads.
    pub call_multipliers: MultiplierTable,
    /// ATR multiplier table for put spreads.
    pub put_multipliers: MultiplierTable,
    /// Per-weekday contract quantities.
    pub quantities: QuantitySchedule,
    /// Evaluation date override. `None` means "today" (UTC); tests and
    /// replays pin this to a fixed date.
    pub as_of: Option<NaiveDate>,
}

impl Default for Dte1Config {
    fn default() -> Self {
        Self {
            ticker: "SPX".to_owned(),
            order_type: OrderType::NET_CREDIT,
            buying_power: DEFAULT_BUYING_POWER,
            dte: DEFAULT_DTE,
            tick: PRICE_TICK,
            call_multipliers: MultiplierTable::default_call(),
            put_multipliers: MultiplierTable::default_put(),
            quantities: QuantitySchedule::default(),
            as_of: None,
        }
    }
}

impl Dte1Config {
    /// Target strike width in dollars of underlying move.
    pub fn width(&self) -> f64 {
        self.buying_power as f64 / 100.0
    }

    /// Expiration date for an evaluation run on `today`.
    pub fn expiration_for(&self, today: NaiveDate) -> NaiveDate {
        let dte = if today.weekday() == Weekday::Fri {
            self.dte + 2
        } else {
            self.dte
        };
        today + Duration::days(dte)
    }

    /// Multiplier table for the given chain side.
    pub(crate) fn multipliers(&self, option_type: OptionType) -> &MultiplierTable {
        match option_type {
            OptionType::PUT => &self.put_multipliers,
            _ => &self.call_multipliers,
        }
    }
}
