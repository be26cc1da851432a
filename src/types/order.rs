#![allow(missing_docs)]
//! Order types — spread order request body and submission acknowledgement.

use serde::{Deserialize, Serialize};

use crate::types::enums::{AssetType, Instruction, OrderType};
use crate::types::spread::{OptionLeg, VerticalSpread};

// ---------------------------------------------------------------------------
// Spread Order Request
// ---------------------------------------------------------------------------

/// Instrument reference inside an order leg.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderInstrument {
    pub symbol: String,
    pub asset_type: AssetType,
}

/// One entry of the order's leg collection.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderLeg {
    pub instruction: Instruction,
    pub quantity: u32,
    pub instrument: OrderInstrument,
}

/// Request body for placing a two-leg option spread order.
///
/// Used by `POST /v1/accounts/{account_id}/orders`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpreadOrderRequest {
    pub order_type: OrderType,
    pub session: String,
    /// Net price as a 2-decimal string (the API takes prices as strings).
    pub price: String,
    pub duration: String,
    pub order_strategy_type: String,
    pub order_leg_collection: Vec<OrderLeg>,
}

impl SpreadOrderRequest {
    /// Build the wire body for a priced vertical spread.
    pub fn from_spread(spread: &VerticalSpread) -> Self {
        Self {
            order_type: spread.order_type,
            session: "NORMAL".to_owned(),
            price: format!("{:.2}", spread.price),
            duration: "DAY".to_owned(),
            order_strategy_type: "SINGLE".to_owned(),
            order_leg_collection: vec![
                Self::leg(&spread.long_leg),
                Self::leg(&spread.short_leg),
            ],
        }
    }

    fn leg(leg: &OptionLeg) -> OrderLeg {
        OrderLeg {
            instruction: leg.instruction,
            quantity: leg.quantity,
            instrument: OrderInstrument {
                symbol: leg.symbol.clone(),
                asset_type: AssetType::OPTION,
            },
        }
    }
}

// ---------------------------------------------------------------------------
// Order Acknowledgement
// ---------------------------------------------------------------------------

/// Result of an order submission, as reported by the gateway.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderAck {
    /// Gateway status, `"ok"` on acceptance.
    pub status: String,
    /// The raw order body that was submitted, for audit logging.
    pub order_body: String,
}
