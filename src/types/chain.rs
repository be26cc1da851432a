#![allow(missing_docs)]
//! Option chain types — raw wire format and the per-expiration snapshot.
//!
//! The brokerage keys its chain response by expiration (`"YYYY-MM-DD:dte"`)
//! and then by strike, where strikes are decimal-formatted strings (e.g.
//! `"4100.0"`). [`OptionChainSnapshot::from_raw`] resolves one expiration by
//! date-prefix match and converts the strike keys to numeric values so the
//! strategy layer can sort and compare them.

use std::collections::HashMap;

use serde::Deserialize;

use crate::error::{Result, TriggerError};

// ---------------------------------------------------------------------------
// Raw response
// ---------------------------------------------------------------------------

/// Per-strike quote metadata as returned by the chain endpoint.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawOptionQuote {
    pub symbol: String,
    pub bid: f64,
    pub ask: f64,
    #[serde(default)]
    pub last: Option<f64>,
    #[serde(default)]
    pub description: Option<String>,
}

/// Expiration → strike → quotes, as returned by `GET /v1/marketdata/chains`.
///
/// The outer keys look like `"2022-04-25:1"` (expiration date plus DTE); each
/// strike maps to a list of quotes of which only the first is used.
pub type RawExpDateMap = HashMap<String, HashMap<String, Vec<RawOptionQuote>>>;

/// Response from `GET /v1/marketdata/chains`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawOptionChain {
    #[serde(default)]
    pub symbol: Option<String>,
    /// `"SUCCESS"` or `"FAILED"`.
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub put_exp_date_map: RawExpDateMap,
    #[serde(default)]
    pub call_exp_date_map: RawExpDateMap,
}

// ---------------------------------------------------------------------------
// Snapshot
// ---------------------------------------------------------------------------

/// A tradable quote at one strike.
#[derive(Debug, Clone, PartialEq)]
pub struct OptionQuote {
    /// Numeric strike, parsed from the raw decimal-string key.
    pub strike: f64,
    /// Full option symbol (e.g. `"SPXW_042522C4100"`).
    pub symbol: String,
    pub bid: f64,
    pub ask: f64,
}

impl OptionQuote {
    /// Midpoint of the bid/ask spread.
    pub fn mid(&self) -> f64 {
        (self.bid + self.ask) / 2.0
    }
}

/// One side (puts or calls) of a chain snapshot, sorted ascending by strike.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChainSide {
    quotes: Vec<OptionQuote>,
}

impl ChainSide {
    fn from_strike_map(strike_map: &HashMap<String, Vec<RawOptionQuote>>) -> Result<Self> {
        let mut quotes = Vec::with_capacity(strike_map.len());
        for (key, metas) in strike_map {
            let strike: f64 = key.parse().map_err(|_| {
                TriggerError::InvalidArgument(format!("unparseable strike key: {key:?}"))
            })?;
            let meta = metas.first().ok_or_else(|| {
                TriggerError::DataUnavailable(format!("no quote metadata at strike {key}"))
            })?;
            quotes.push(OptionQuote {
                strike,
                symbol: meta.symbol.clone(),
                bid: meta.bid,
                ask: meta.ask,
            });
        }
        quotes.sort_by(|a, b| a.strike.total_cmp(&b.strike));
        Ok(Self { quotes })
    }

    /// Number of strikes on this side.
    pub fn len(&self) -> usize {
        self.quotes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.quotes.is_empty()
    }

    /// Available strikes in ascending order.
    pub fn strikes(&self) -> Vec<f64> {
        self.quotes.iter().map(|q| q.strike).collect()
    }

    /// Quote at an exact strike, if listed.
    pub fn quote_at(&self, strike: f64) -> Option<&OptionQuote> {
        self.quotes
            .binary_search_by(|q| q.strike.total_cmp(&strike))
            .ok()
            .map(|i| &self.quotes[i])
    }
}

/// Both sides of the chain for one underlying and one expiration date.
///
/// Construction is a pure function of the raw response: building two
/// snapshots from the same response yields identical put/call sides.
#[derive(Debug, Clone, PartialEq)]
pub struct OptionChainSnapshot {
    pub puts: ChainSide,
    pub calls: ChainSide,
    /// Expiration date the sides were matched on (`YYYY-MM-DD`).
    pub expiration: String,
}

impl OptionChainSnapshot {
    /// Resolve one expiration out of a raw chain response.
    ///
    /// The match is a literal string-prefix match of `expiration`
    /// (`YYYY-MM-DD`) against the raw map keys, which carry a `:dte` suffix.
    ///
    /// # Errors
    ///
    /// - [`TriggerError::ChainRequestFailed`] if the response status is
    ///   `"FAILED"`.
    /// - [`TriggerError::DataUnavailable`] if either side has no expiration
    ///   key matching the prefix.
    pub fn from_raw(raw: &RawOptionChain, expiration: &str) -> Result<Self> {
        if raw.status.as_deref() == Some("FAILED") {
            let ticker = raw.symbol.clone().unwrap_or_else(|| "<unknown>".into());
            tracing::error!(%ticker, "option chain request reported FAILED status");
            return Err(TriggerError::ChainRequestFailed { ticker });
        }

        let puts = Self::side_for_expiration(&raw.put_exp_date_map, expiration)?;
        let calls = Self::side_for_expiration(&raw.call_exp_date_map, expiration)?;
        Ok(Self {
            puts,
            calls,
            expiration: expiration.to_owned(),
        })
    }

    /// The requested chain side. `NO_OP` has no side.
    pub fn side(&self, option_type: crate::types::enums::OptionType) -> Option<&ChainSide> {
        match option_type {
            crate::types::enums::OptionType::CALL => Some(&self.calls),
            crate::types::enums::OptionType::PUT => Some(&self.puts),
            crate::types::enums::OptionType::NO_OP => None,
        }
    }

    fn side_for_expiration(map: &RawExpDateMap, expiration: &str) -> Result<ChainSide> {
        let strike_map = map
            .iter()
            .find(|(key, _)| key.starts_with(expiration))
            .map(|(_, v)| v)
            .ok_or_else(|| {
                tracing::error!(%expiration, "no options available for expiration");
                TriggerError::DataUnavailable(format!(
                    "no options available with an expiration date of {expiration}"
                ))
            })?;
        ChainSide::from_strike_map(strike_map)
    }
}
