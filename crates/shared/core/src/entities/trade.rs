use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{OrderType, Side};
use crate::instruments::Instrument;
use crate::values::{Price, Quantity};

/// Strategy tag attached to every order sent by this client
pub const EXECUTING_UNIT: &str = "risk-adding-strategy";

/// Trade order executed against a previously received quote
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TradeOrder {
    pub instrument: Instrument,
    pub side: Side,
    pub quantity: Quantity,
    pub client_order_id: Uuid,
    pub price: Price,
    pub order_type: OrderType,
    pub valid_until: String,
    pub executing_unit: String,
}

impl TradeOrder {
    /// Build a fill-or-kill order with a new v4 client order id
    pub fn fill_or_kill(
        instrument: Instrument,
        side: Side,
        quantity: Quantity,
        price: Price,
        valid_until: impl Into<String>,
    ) -> Self {
        Self {
            instrument,
            side,
            quantity,
            client_order_id: Uuid::new_v4(),
            price,
            order_type: OrderType::FillOrKill,
            valid_until: valid_until.into(),
            executing_unit: EXECUTING_UNIT.to_string(),
        }
    }
}

/// Response of the trade endpoint
///
/// A missing or null `executed_price` means the order was rejected.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TradeResponse {
    #[serde(default)]
    pub executed_price: Option<Price>,
    #[serde(default)]
    pub order_id: Option<String>,
    #[serde(default)]
    pub client_order_id: Option<String>,
    #[serde(default)]
    pub instrument: Option<Instrument>,
    #[serde(default)]
    pub side: Option<Side>,
    #[serde(default)]
    pub quantity: Option<Quantity>,
    #[serde(default)]
    pub price: Option<Price>,
    #[serde(default)]
    pub created: Option<String>,
}

impl TradeResponse {
    pub fn is_rejected(&self) -> bool {
        self.executed_price.is_none()
    }
}

impl fmt::Display for TradeResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fn line<T: fmt::Display>(
            f: &mut fmt::Formatter<'_>,
            key: &str,
            value: &Option<T>,
        ) -> fmt::Result {
            match value {
                Some(v) => writeln!(f, "{}: {}", key, v),
                None => writeln!(f, "{}: -", key),
            }
        }

        line(f, "order_id", &self.order_id)?;
        line(f, "client_order_id", &self.client_order_id)?;
        line(f, "instrument", &self.instrument)?;
        line(f, "side", &self.side)?;
        line(f, "quantity", &self.quantity)?;
        line(f, "price", &self.price)?;
        line(f, "created", &self.created)?;
        match &self.executed_price {
            Some(price) => write!(f, "executed_price: {}", price),
            None => write!(f, "executed_price: -"),
        }
    }
}
