//! REST API endpoint implementations.
//!
//! Each sub-module adds high-level `async` methods to
//! [`BrokerClient`](crate::client::BrokerClient) via `impl` blocks and
//! implements the matching collaborator trait from [`crate::providers`]:
//!
//! | Module | Endpoint | Trait |
//! |---|---|---|
//! | [`history`] | `GET /v1/marketdata/{symbol}/pricehistory` | [`MarketDataProvider`](crate::providers::MarketDataProvider) |
//! | [`chain`] | `GET /v1/marketdata/chains` | [`ChainProvider`](crate::providers::ChainProvider) |
//! | [`orders`] | `POST /v1/accounts/{account_id}/orders` | [`OrderGateway`](crate::providers::OrderGateway) |

pub mod chain;
pub mod history;
pub mod orders;
