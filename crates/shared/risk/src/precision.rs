use log::error;
use otc_core::{CurrencyInfo, Instrument, Price, Quantity};
use otc_ports::{ValidationError, ValidationResult};
use rust_decimal::Decimal;

/// Quantity digits allowed when the counter currency is crypto
pub const CRYPTO_QUANTITY_DIGITS: u32 = 2;

/// Quantity digits allowed against fiat and stable coins
pub const FIAT_QUANTITY_DIGITS: u32 = 4;

/// Maximum decimal digits in a price
pub const PRICE_DIGITS: u32 = 5;

/// Number of digits after the decimal point in the value's canonical form
///
/// Trailing zeros are not precision: `4.10` has one digit.
pub fn decimal_places(value: Decimal) -> u32 {
    value.normalize().scale()
}

pub fn allowed_quantity_digits(counter_currency: &CurrencyInfo) -> u32 {
    if counter_currency.is_crypto {
        CRYPTO_QUANTITY_DIGITS
    } else {
        FIAT_QUANTITY_DIGITS
    }
}

/// Check quantity precision against the counter currency of `instrument`
pub fn validate_quantity_precision(
    counter_currency: &CurrencyInfo,
    instrument: &Instrument,
    quantity: Quantity,
) -> ValidationResult<()> {
    let allowed = allowed_quantity_digits(counter_currency);
    let actual = decimal_places(quantity);

    if actual > allowed {
        let err = ValidationError::QuantityPrecision {
            instrument: instrument.to_string(),
            allowed,
            actual,
        };
        error!("{}", err);
        return Err(err);
    }
    Ok(())
}

pub fn validate_price_precision(price: Price) -> ValidationResult<()> {
    let actual = decimal_places(price);

    if actual > PRICE_DIGITS {
        let err = ValidationError::PricePrecision {
            allowed: PRICE_DIGITS,
            actual,
        };
        error!("{}", err);
        return Err(err);
    }
    Ok(())
}
