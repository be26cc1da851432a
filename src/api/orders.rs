//! Order placement endpoint.

use crate::client::BrokerClient;
use crate::error::Result;
use crate::providers::OrderGateway;
use crate::types::order::{OrderAck, SpreadOrderRequest};
use crate::types::spread::VerticalSpread;

impl BrokerClient {
    /// Place a multi-leg option spread order against the client's account.
    ///
    /// The API acknowledges with an empty 201 body; order identity must be
    /// recovered from the order book if needed.
    ///
    /// **Endpoint:** `POST /v1/accounts/{account_id}/orders`
    pub async fn place_spread_order(&self, req: &SpreadOrderRequest) -> Result<()> {
        self.post_no_content(&format!("/v1/accounts/{}/orders", self.account_id()), req)
            .await
    }
}

impl OrderGateway for BrokerClient {
    /// Build the wire order body from a priced spread and submit it.
    ///
    /// Not idempotent: every call places a new order.
    async fn submit_vertical_spread(&self, spread: &VerticalSpread) -> Result<OrderAck> {
        let req = SpreadOrderRequest::from_spread(spread);
        let order_body = serde_json::to_string(&req)?;
        self.place_spread_order(&req).await?;
        tracing::info!(
            price = spread.price,
            short = spread.short_leg.symbol,
            long = spread.long_leg.symbol,
            "spread order placed"
        );
        Ok(OrderAck {
            status: "ok".to_owned(),
            order_body,
        })
    }
}
