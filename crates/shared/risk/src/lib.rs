//! OTC Pre-trade Validation
//!
//! Pure, stateless checks run before any quote or trade request leaves the
//! process:
//! - quantity and price precision
//! - minimum trade size of the counter currency
//! - quote expiry window
//!
//! Every failure is logged at error level and returned as a
//! [`ValidationError`](otc_ports::ValidationError).

mod expiry;
mod precision;
mod trade_size;

pub use expiry::{QUOTE_VALIDITY_SECONDS, is_quote_still_valid, parse_valid_until};
pub use precision::{
    CRYPTO_QUANTITY_DIGITS, FIAT_QUANTITY_DIGITS, PRICE_DIGITS, allowed_quantity_digits,
    decimal_places, validate_price_precision, validate_quantity_precision,
};
pub use trade_size::{validate_minimum_trade_size, validate_size_and_precision};
