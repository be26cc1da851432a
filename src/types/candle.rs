#![allow(missing_docs)]
//! Daily OHLC candles and the ATR lookback series.

use serde::{Deserialize, Serialize};

use crate::error::{Result, TriggerError};
use crate::types::enums::OptionType;

// ---------------------------------------------------------------------------
// Price History wire format
// ---------------------------------------------------------------------------

/// One candle as returned by `GET /v1/marketdata/{symbol}/pricehistory`.
#[derive(Debug, Clone, Deserialize)]
pub struct RawCandle {
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    #[serde(default)]
    pub volume: Option<i64>,
    /// Epoch milliseconds of the candle open.
    #[serde(default)]
    pub datetime: Option<i64>,
}

/// Response from `GET /v1/marketdata/{symbol}/pricehistory`.
///
/// Candles are ordered oldest-first on the wire.
#[derive(Debug, Clone, Deserialize)]
pub struct PriceHistoryResponse {
    #[serde(default)]
    pub candles: Vec<RawCandle>,
    #[serde(default)]
    pub symbol: Option<String>,
    #[serde(default)]
    pub empty: bool,
}

/// Round to two decimal places (cents).
pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

// ---------------------------------------------------------------------------
// Candle
// ---------------------------------------------------------------------------

/// One trading day of OHLC prices. Immutable once constructed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Candle {
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
}

impl Candle {
    /// High-to-low range of the day, rounded to cents.
    pub fn daily_range(&self) -> f64 {
        round2(self.high - self.low)
    }

    /// `close > open`.
    pub fn is_green(&self) -> bool {
        self.close > self.open
    }

    /// `close < open`. A flat candle (`open == close`) is neither green nor
    /// red.
    pub fn is_red(&self) -> bool {
        self.close < self.open
    }
}

// ---------------------------------------------------------------------------
// Candle Series
// ---------------------------------------------------------------------------

/// An ordered run of daily candles, index 0 = most recent trading day.
///
/// Produced by a [`MarketDataProvider`](crate::providers::MarketDataProvider)
/// with a fixed length (the ATR window, 14 days by default) and consumed
/// read-only by the strategy layer.
#[derive(Debug, Clone, PartialEq)]
pub struct CandleSeries {
    candles: Vec<Candle>,
}

impl CandleSeries {
    /// Wrap a most-recent-first candle vector.
    ///
    /// # Errors
    ///
    /// Returns [`TriggerError::DataUnavailable`] on an empty history.
    pub fn new(candles: Vec<Candle>) -> Result<Self> {
        if candles.is_empty() {
            return Err(TriggerError::DataUnavailable(
                "candle history is empty".into(),
            ));
        }
        Ok(Self { candles })
    }

    /// Number of candles in the series.
    pub fn len(&self) -> usize {
        self.candles.len()
    }

    /// Always false: construction rejects empty histories.
    pub fn is_empty(&self) -> bool {
        self.candles.is_empty()
    }

    /// The most recent candle.
    pub fn latest(&self) -> &Candle {
        &self.candles[0]
    }

    /// Candles in most-recent-first order.
    pub fn candles(&self) -> &[Candle] {
        &self.candles
    }

    /// Average true range over the series: the mean daily high-to-low range.
    ///
    /// This is the simple range-based proxy, not Wilder's smoothed ATR.
    pub fn atr(&self) -> f64 {
        let sum: f64 = self.candles.iter().map(Candle::daily_range).sum();
        sum / self.candles.len() as f64
    }

    /// Consecutive green days ending at the most recent candle.
    ///
    /// Scans forward from index 0 and stops at the first candle that is not
    /// green, or at the end of the series — an unbroken run never reads past
    /// the last candle.
    pub fn green_streak(&self) -> usize {
        self.candles.iter().take_while(|c| c.is_green()).count()
    }

    /// Consecutive red days ending at the most recent candle, bounded the
    /// same way as [`green_streak`](Self::green_streak).
    pub fn red_streak(&self) -> usize {
        self.candles.iter().take_while(|c| c.is_red()).count()
    }

    /// Resolve the daily signal from the streaks.
    ///
    /// CALL on a green streak, PUT on a red streak, `NO_OP` when the most
    /// recent candle breaks both patterns (including a flat `open == close`
    /// day). The streaks are mutually exclusive, so the order of the checks
    /// only matters for documentation.
    pub fn signal(&self) -> OptionType {
        if self.green_streak() > 0 {
            OptionType::CALL
        } else if self.red_streak() > 0 {
            OptionType::PUT
        } else {
            OptionType::NO_OP
        }
    }
}
