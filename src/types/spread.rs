//! Vertical spread domain types — legs and the priced spread.

use crate::types::chain::OptionQuote;
use crate::types::enums::{Instruction, OrderType};

// ---------------------------------------------------------------------------
// Option Leg
// ---------------------------------------------------------------------------

/// One leg of a vertical spread.
///
/// Produced by the strike selector, consumed by the pricer and by order
/// submission.
#[derive(Debug, Clone, PartialEq)]
pub struct OptionLeg {
    /// Full option symbol from the chain quote.
    pub symbol: String,
    pub instruction: Instruction,
    /// Contracts per order.
    pub quantity: u32,
    /// The chain quote the leg was built from (carries strike and bid/ask).
    pub quote: OptionQuote,
}

impl OptionLeg {
    /// Build a leg from a chain quote.
    pub fn new(quote: &OptionQuote, instruction: Instruction, quantity: u32) -> Self {
        Self {
            symbol: quote.symbol.clone(),
            instruction,
            quantity,
            quote: quote.clone(),
        }
    }

    /// The leg's strike.
    pub fn strike(&self) -> f64 {
        self.quote.strike
    }
}

// ---------------------------------------------------------------------------
// Vertical Spread
// ---------------------------------------------------------------------------

/// A priced two-leg vertical spread, ready for submission.
///
/// `price` follows the conservative-credit rounding policy in
/// [`strategy::price`](crate::strategy::price); `-1.0` is the sentinel for
/// "no trade".
#[derive(Debug, Clone, PartialEq)]
pub struct VerticalSpread {
    pub order_type: OrderType,
    /// Contracts per leg.
    pub quantity: u32,
    /// Expiration date, `YYYY-MM-DD`.
    pub expiration_date: String,
    /// The sold leg.
    pub short_leg: OptionLeg,
    /// The bought leg.
    pub long_leg: OptionLeg,
    /// Net price per the rounding policy, in dollars.
    pub price: f64,
}

impl VerticalSpread {
    /// Dollar width between the two strikes.
    pub fn width(&self) -> f64 {
        (self.short_leg.strike() - self.long_leg.strike()).abs()
    }
}
