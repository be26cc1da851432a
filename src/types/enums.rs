//! Shared enum types that map directly to the brokerage API string values.
//!
//! Variant names use `SCREAMING_SNAKE_CASE` to match the JSON wire format
//! expected by the order endpoints, so we suppress the Rust naming convention
//! lint.
#![allow(non_camel_case_types)]

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Option Type
// ---------------------------------------------------------------------------

/// Which side of the chain a spread is built on.
///
/// `NO_OP` is a first-class value, not an error: it means the daily signal
/// was ambiguous (no streak, or a flat candle on the most recent day) and no
/// order should be placed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OptionType {
    CALL,
    PUT,
    NO_OP,
}

impl OptionType {
    /// The opposite chain side. `NO_OP` flips to itself.
    ///
    /// Used by the iron-condor wrapper to derive the second spread.
    pub fn flipped(self) -> Self {
        match self {
            Self::CALL => Self::PUT,
            Self::PUT => Self::CALL,
            Self::NO_OP => Self::NO_OP,
        }
    }
}

// ---------------------------------------------------------------------------
// Order Type
// ---------------------------------------------------------------------------

/// Net pricing convention for a multi-leg order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OrderType {
    /// Net credit — premium is collected (short leg richer than long leg).
    NET_CREDIT,
    /// Net debit — premium is paid.
    NET_DEBIT,
}

// ---------------------------------------------------------------------------
// Instruction
// ---------------------------------------------------------------------------

/// Per-leg order instruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Instruction {
    BUY_TO_OPEN,
    SELL_TO_OPEN,
    BUY_TO_CLOSE,
    SELL_TO_CLOSE,
}

// ---------------------------------------------------------------------------
// Asset Type
// ---------------------------------------------------------------------------

/// Instrument asset class for order legs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AssetType {
    OPTION,
}
