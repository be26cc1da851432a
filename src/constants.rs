//! Constants shared across the strategy engine and broker client.
//!
//! Base URLs and API paths are used internally by
//! [`BrokerClient`](crate::client::BrokerClient); the strategy constants are
//! the defaults baked into [`Dte1Config`](crate::strategy::Dte1Config) and may
//! be overridden per strategy instance.

// ---------------------------------------------------------------------------
// Base URLs
// ---------------------------------------------------------------------------

/// Base URL for the brokerage REST API.
pub const API_BASE_URL: &str = "https://api.tdameritrade.com";

// ---------------------------------------------------------------------------
// Strategy defaults
// ---------------------------------------------------------------------------

/// Number of daily candles in the ATR lookback window.
pub const ATR_WINDOW_DAYS: usize = 14;

/// Quote tick used when rounding spread prices, in dollars.
pub const PRICE_TICK: f64 = 0.05;

/// Default buying power per spread, in cents of underlying move. The strike
/// selector divides by 100 before comparing against strike distances.
pub const DEFAULT_BUYING_POWER: i64 = 500;

/// Default days-to-expiration for the 1-DTE strategy family.
pub const DEFAULT_DTE: i64 = 1;

/// Sentinel strike/price value meaning "no trade".
pub const NO_TRADE_SENTINEL: f64 = -1.0;
