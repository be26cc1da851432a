//! Ticker translation between the canonical symbol and platform-specific
//! symbols.
//!
//! The strategy layer works with canonical index symbols (`"SPX"`, `"NDX"`);
//! each data platform spells them differently. Translation is pure — no I/O,
//! no state.

/// Platforms with their own symbol conventions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Platform {
    /// Yahoo Finance style (`^GSPC`). The bundled
    /// [`BrokerClient`](crate::client::BrokerClient) sources history from
    /// the brokerage; this variant is for callers wiring a Yahoo-backed
    /// [`MarketDataProvider`](crate::providers::MarketDataProvider).
    Yahoo,
    /// Brokerage style (`$SPX.X`).
    Broker,
}

/// Map a canonical symbol to the platform-specific one.
///
/// Unknown tickers pass through unchanged.
pub fn translate(ticker: &str, platform: Platform) -> &str {
    match (ticker, platform) {
        ("SPX", Platform::Broker) => "$SPX.X",
        ("NDX", Platform::Broker) => "$NDX.X",
        ("SPX", Platform::Yahoo) => "^GSPC",
        ("NDX", Platform::Yahoo) => "^NDX",
        _ => ticker,
    }
}
