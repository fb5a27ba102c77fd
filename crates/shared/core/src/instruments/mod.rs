//! Instruments and currency metadata published by the trading API
//!
//! Instrument symbols look like `BTCUSD.SPOT`: a base/counter currency pair
//! followed by the product type.

mod currency;
mod instrument;

pub use currency::{CurrencyInfo, CurrencyType, SupportedCurrencies};
pub use instrument::{Instrument, InstrumentInfo};
