use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::Side;
use crate::instruments::Instrument;
use crate::values::{Price, Quantity};

/// Body of a request-for-quote call
///
/// Every request carries a freshly generated `client_rfq_id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuoteRequest {
    pub instrument: Instrument,
    pub side: Side,
    pub quantity: Quantity,
    pub client_rfq_id: Uuid,
}

impl QuoteRequest {
    /// Create a request with a new v4 client RFQ id
    pub fn new(instrument: Instrument, side: Side, quantity: Quantity) -> Self {
        Self {
            instrument,
            side,
            quantity,
            client_rfq_id: Uuid::new_v4(),
        }
    }
}

/// A priced, time-limited offer returned by the RFQ endpoint
///
/// `valid_until` is kept exactly as the server sent it so it can be echoed
/// back on the trade order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Quote {
    pub instrument: Instrument,
    pub side: Side,
    pub quantity: Quantity,
    pub price: Price,
    pub valid_until: String,
    pub client_rfq_id: Uuid,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rfq_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created: Option<String>,
}

impl fmt::Display for Quote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "instrument: {}", self.instrument)?;
        writeln!(f, "side: {}", self.side)?;
        writeln!(f, "quantity: {}", self.quantity)?;
        writeln!(f, "price: {}", self.price)?;
        writeln!(f, "valid_until: {}", self.valid_until)?;
        if let Some(rfq_id) = &self.rfq_id {
            writeln!(f, "rfq_id: {}", rfq_id)?;
        }
        if let Some(created) = &self.created {
            writeln!(f, "created: {}", created)?;
        }
        write!(f, "client_rfq_id: {}", self.client_rfq_id)
    }
}
