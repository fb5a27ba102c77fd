//! OTC Ports
//!
//! Port definitions (traits) for the OTC RFQ trading client.
//! These define the boundaries between the trading facade and the
//! infrastructure it talks to: the HTTP transport, the clock, and whatever
//! observer presents results to the user.

mod api;
mod clock;
mod error;
mod reporter;

pub use api::TradingApi;
pub use clock::Clock;
pub use error::{
    ApiError, ApiErrorDetail, ApiResult, TransportError, ValidationError, ValidationResult,
};
pub use reporter::{NullReporter, TradeReporter};
