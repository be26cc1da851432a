//! # vertical-trigger
//!
//! ATR-driven vertical-spread selection, pricing, and submission for a
//! single index underlying ("SPX"-style).
//!
//! The engine turns a 14-day candle window into a daily signal (consecutive
//! green days sell a call spread, consecutive red days sell a put spread,
//! anything else is a no-op), derives a volatility-adjusted rough strike,
//! picks the nearest tradable short strike with a buying-power-wide long
//! strike, prices the spread off bid/ask midpoints, and submits the order.
//!
//! ## Quick Start
//!
//! ```no_run
//! use vertical_trigger::client::BrokerClient;
//! use vertical_trigger::strategy::{Dte1, Dte1Config, Strategy};
//!
//! #[tokio::main]
//! async fn main() -> vertical_trigger::Result<()> {
//!     let client = BrokerClient::new("account-id", "access-token");
//!     let strategy = Dte1::new(
//!         Dte1Config::default(),
//!         client.clone(),
//!         client.clone(),
//!         client,
//!     );
//!     let outcome = strategy.execute().await?;
//!     println!("{outcome:?}");
//!     Ok(())
//! }
//! ```
//!
//! Collaborators (market data, chain, order gateway) are trait-abstracted in
//! [`providers`]; [`client::BrokerClient`] implements all three against the
//! brokerage REST API.

pub mod api;
pub mod client;
pub mod constants;
pub mod error;
pub mod providers;
pub mod strategy;
pub mod ticker;
pub mod types;

/// Re-export the broker client at crate root for convenience.
pub use client::BrokerClient;
/// Re-export the error type and Result alias.
pub use error::{Result, TriggerError};
