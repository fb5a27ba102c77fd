//! OTC Core Domain
//!
//! Pure domain types for the OTC RFQ trading client: instruments, currency
//! metadata, quotes, trade orders and balances as they travel over the wire.
//! This crate contains no async, no I/O, and is 100% unit testable.

pub mod entities;
pub mod instruments;
pub mod values;

// Re-export commonly used types at crate root
pub use entities::{
    Balance, EXECUTING_UNIT, OrderType, Quote, QuoteRequest, Side, TradeOrder, TradeResponse,
};
pub use instruments::{CurrencyInfo, CurrencyType, Instrument, InstrumentInfo, SupportedCurrencies};
pub use values::{Price, Quantity, Timestamp};
