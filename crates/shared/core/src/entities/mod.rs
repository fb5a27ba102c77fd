mod balance;
mod order_type;
mod quote;
mod side;
mod trade;

pub use balance::Balance;
pub use order_type::OrderType;
pub use quote::{Quote, QuoteRequest};
pub use side::Side;
pub use trade::{EXECUTING_UNIT, TradeOrder, TradeResponse};
