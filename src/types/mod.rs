//! Domain and wire types for the strategy engine and broker client.
//!
//! ## Organization
//!
//! - [`enums`] — Shared enumerations (option type, order type, instructions)
//! - [`candle`] — Daily OHLC candles and the ATR lookback series
//! - [`chain`] — Raw option chain wire format and the per-expiration snapshot
//! - [`spread`] — Option legs and the priced vertical spread
//! - [`order`] — Spread order request body and submission acknowledgement
//!
//! All enums are re-exported at the module root via `pub use enums::*`.

pub mod candle;
pub mod chain;
pub mod enums;
pub mod order;
pub mod spread;

pub use enums::*;
