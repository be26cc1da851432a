#![allow(dead_code)]
//! Shared fixtures for the integration tests.
//!
//! Chain fixtures are built through the raw wire types and
//! [`OptionChainSnapshot::from_raw`], so every test also exercises the
//! decimal-string strike parsing and expiration prefix matching.

use std::collections::HashMap;

use vertical_trigger::types::candle::Candle;
use vertical_trigger::types::chain::{
    OptionChainSnapshot, RawExpDateMap, RawOptionChain, RawOptionQuote,
};

/// `(strike, symbol, bid, ask)` shorthand for one quoted strike.
pub type QuoteFixture = (f64, &'static str, f64, f64);

/// Build one expiration's strike map, keyed the way the wire keys it
/// (`"4000.0"` style decimal strings under a `"YYYY-MM-DD:dte"` key).
fn exp_date_map(exp_key: &str, quotes: &[QuoteFixture]) -> RawExpDateMap {
    let strike_map: HashMap<String, Vec<RawOptionQuote>> = quotes
        .iter()
        .map(|&(strike, symbol, bid, ask)| {
            (
                format!("{strike:.1}"),
                vec![RawOptionQuote {
                    symbol: symbol.to_owned(),
                    bid,
                    ask,
                    last: None,
                    description: None,
                }],
            )
        })
        .collect();
    HashMap::from([(exp_key.to_owned(), strike_map)])
}

/// Raw chain response with one expiration on each side.
pub fn raw_chain(
    exp_key: &str,
    calls: &[QuoteFixture],
    puts: &[QuoteFixture],
) -> RawOptionChain {
    RawOptionChain {
        symbol: Some("$SPX.X".to_owned()),
        status: Some("SUCCESS".to_owned()),
        put_exp_date_map: exp_date_map(exp_key, puts),
        call_exp_date_map: exp_date_map(exp_key, calls),
    }
}

/// Snapshot resolved from [`raw_chain`] for the given expiration date.
pub fn snapshot(
    expiration: &str,
    exp_key: &str,
    calls: &[QuoteFixture],
    puts: &[QuoteFixture],
) -> OptionChainSnapshot {
    OptionChainSnapshot::from_raw(&raw_chain(exp_key, calls, puts), expiration)
        .expect("fixture chain must resolve")
}

/// A candle with a given open/close and a high-low range centred on the
/// body.
pub fn candle(open: f64, close: f64, range: f64) -> Candle {
    let top = open.max(close);
    let bottom = open.min(close);
    let slack = (range - (top - bottom)) / 2.0;
    Candle {
        open,
        close,
        high: top + slack,
        low: bottom - slack,
    }
}

/// The call-side pricing fixture from the 4000/4010 spread: mids 34.90 and
/// 25.30. Bid/ask pairs are chosen so each halved mid is the f64 nearest
/// its decimal value, keeping the priced result on the expected tick.
pub const CALL_QUOTES: &[QuoteFixture] = &[
    (3980.0, "SPXW_042122C3980", 44.8, 45.0),
    (4000.0, "SPXW_042122C4000", 34.8, 35.0),
    (4010.0, "SPXW_042122C4010", 25.25, 25.35),
    (4020.0, "SPXW_042122C4020", 20.1, 20.3),
];

/// The put-side pricing fixture from the 4200/4195 spread: mids 34.90 and
/// 33.80.
pub const PUT_QUOTES: &[QuoteFixture] = &[
    (4190.0, "SPXW_042122P4190", 32.7, 32.9),
    (4195.0, "SPXW_042122P4195", 33.7, 33.9),
    (4200.0, "SPXW_042122P4200", 34.8, 35.0),
    (4210.0, "SPXW_042122P4210", 36.9, 37.1),
];
