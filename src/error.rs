//! Error types for the `vertical-trigger` crate.
//!
//! All fallible operations in this crate return [`Result<T>`], which is an
//! alias for `std::result::Result<T, TriggerError>`.
//!
//! [`TriggerError`] covers:
//! - **Data availability** — empty candle history, missing expirations
//! - **Degenerate spreads** — long-leg walks that exhaust the strike list
//! - **HTTP status errors** — unexpected status codes with response body
//! - **HTTP transport errors** — network, TLS, timeout failures
//! - **JSON errors** — deserialization failures
//! - **Invalid arguments** — client-side validation errors
//!
//! A resolved `NO_OP` signal is *not* an error: it surfaces as
//! [`SpreadOutcome::NoTrade`](crate::strategy::SpreadOutcome::NoTrade).

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, TriggerError>;

/// All possible errors produced by the strategy engine and broker client.
#[derive(Debug, thiserror::Error)]
pub enum TriggerError {
    /// Required market data is missing: empty candle history, or no chain
    /// entry matching the requested expiration date.
    #[error("market data unavailable: {0}")]
    DataUnavailable(String),

    /// The upstream option-chain API reported a failure status.
    #[error("option chain request failed for {ticker}")]
    ChainRequestFailed {
        /// Platform symbol the chain was requested for.
        ticker: String,
    },

    /// The long-leg walk ran off the end of the strike list without reaching
    /// the target width.
    #[error("degenerate spread: {0}")]
    DegenerateSpread(String),

    /// The server returned an unexpected HTTP status code.
    #[error("HTTP {status}: {body}")]
    HttpStatus {
        /// The HTTP status code.
        status: reqwest::StatusCode,
        /// The response body text.
        body: String,
    },

    /// A network or transport-level error from `reqwest`.
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Failed to deserialize a JSON response body.
    #[error("JSON deserialization error: {0}")]
    Json(#[from] serde_json::Error),

    /// The caller provided an invalid argument.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}
