//! Spread pricing — bid/ask midpoints with conservative tick rounding.

use crate::constants::NO_TRADE_SENTINEL;
use crate::types::candle::round2;
use crate::types::chain::OptionQuote;
use crate::types::enums::OptionType;

/// Net price of a spread from its two leg quotes.
///
/// The raw price is the short leg's midpoint minus the long leg's midpoint
/// (credit convention: the short leg is sold, the long leg bought). It is
/// then floored to the tick grid and bumped one tick up:
///
/// ```text
/// price = floor(raw / tick) * tick + tick
/// ```
///
/// The bump is an intentional conservative-credit bias — the quoted credit
/// is always one tick above the floored raw price, never rounded toward
/// zero. This is the strategy's quoting policy, not a general rounding rule.
///
/// A `NO_OP` signal prices to the `-1.0` no-trade sentinel without reading
/// the quotes.
pub fn spread_price(
    option_type: OptionType,
    short: &OptionQuote,
    long: &OptionQuote,
    tick: f64,
) -> f64 {
    if option_type == OptionType::NO_OP {
        return NO_TRADE_SENTINEL;
    }
    let raw = short.mid() - long.mid();
    round2((raw / tick).floor() * tick + tick)
}
