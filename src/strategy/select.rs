//! Strike selection — nearest short strike plus a width-walk long strike.
//!
//! Both selections are pure functions over the ascending strike list of one
//! chain side. The short leg is the strike nearest the volatility-adjusted
//! rough strike; the long leg is found by walking outward (up for calls,
//! down for puts) until the distance from the short strike reaches the
//! target width.

use crate::constants::NO_TRADE_SENTINEL;
use crate::error::{Result, TriggerError};
use crate::types::enums::OptionType;

/// The two strikes of a selected spread.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StrikePair {
    /// Strike of the sold leg.
    pub short: f64,
    /// Strike of the bought leg.
    pub long: f64,
}

impl StrikePair {
    /// Sentinel pair returned for a `NO_OP` signal.
    pub const NO_TRADE: Self = Self {
        short: NO_TRADE_SENTINEL,
        long: NO_TRADE_SENTINEL,
    };

    /// Whether this is the `NO_OP` sentinel.
    pub fn is_no_trade(&self) -> bool {
        *self == Self::NO_TRADE
    }
}

/// Select short and long strikes for a spread.
///
/// - `strikes` must be sorted ascending.
/// - `width` is the target strike distance in dollars.
/// - A `NO_OP` signal short-circuits to [`StrikePair::NO_TRADE`] without
///   reading the strike list.
///
/// # Errors
///
/// - [`TriggerError::DataUnavailable`] if the strike list is empty.
/// - [`TriggerError::DegenerateSpread`] if the walk runs off the end of the
///   list before reaching `width`.
pub fn select_strikes(
    strikes: &[f64],
    rough_strike: f64,
    width: f64,
    option_type: OptionType,
) -> Result<StrikePair> {
    if option_type == OptionType::NO_OP {
        return Ok(StrikePair::NO_TRADE);
    }

    let (short_index, short) = nearest_strike(strikes, rough_strike)?;
    let long = long_strike(strikes, short_index, width, option_type)?;
    Ok(StrikePair { short, long })
}

/// The strike with minimum distance from `rough_strike`, and its index.
///
/// Ties keep the first strike seen in the left-to-right scan, so the lower
/// strike wins (the comparison is a strict `<` against the running minimum).
fn nearest_strike(strikes: &[f64], rough_strike: f64) -> Result<(usize, f64)> {
    let mut best: Option<(usize, f64)> = None;
    let mut min_diff = f64::INFINITY;
    for (i, &strike) in strikes.iter().enumerate() {
        let diff = (strike - rough_strike).abs();
        if diff < min_diff {
            min_diff = diff;
            best = Some((i, strike));
        }
    }
    best.ok_or_else(|| TriggerError::DataUnavailable("strike list is empty".into()))
}

/// Walk outward from the short strike to the first strike at or past the
/// target width.
///
/// Calls walk up the list, puts walk down. When the first strike at `>=
/// width` overshoots (`> width`), the walk backs off one step and returns
/// the previous strike — the widest strike that does not exceed the target.
/// The back-off can land on the short strike itself; callers must reject
/// that pair.
fn long_strike(
    strikes: &[f64],
    short_index: usize,
    width: f64,
    option_type: OptionType,
) -> Result<f64> {
    let short = strikes[short_index];
    let walk: Box<dyn Iterator<Item = usize>> = match option_type {
        OptionType::CALL => Box::new(short_index + 1..strikes.len()),
        OptionType::PUT => Box::new((0..short_index).rev()),
        OptionType::NO_OP => {
            return Err(TriggerError::InvalidArgument(
                "long_strike called with NO_OP".into(),
            ));
        }
    };

    let mut prev = short;
    for j in walk {
        let strike = strikes[j];
        if (strike - short).abs() >= width {
            if (strike - short).abs() > width {
                return Ok(prev);
            }
            return Ok(strike);
        }
        prev = strike;
    }

    Err(TriggerError::DegenerateSpread(format!(
        "no strike at width {width} from short strike {short}"
    )))
}
