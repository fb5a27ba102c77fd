use log::error;
use otc_core::{CurrencyInfo, Instrument, Price, Quantity};
use otc_ports::{ValidationError, ValidationResult};

use crate::precision::{validate_price_precision, validate_quantity_precision};

pub fn validate_minimum_trade_size(
    currency: &CurrencyInfo,
    quantity: Quantity,
) -> ValidationResult<()> {
    if quantity < currency.minimum_trade_size {
        let err = ValidationError::MinimumSize {
            currency: currency.readable_name.clone(),
            minimum: currency.minimum_trade_size,
            quantity,
        };
        error!("{}", err);
        return Err(err);
    }
    Ok(())
}

/// Full pre-trade check for a quote request (`price == None`) or a trade
/// order (`price == Some(..)`)
pub fn validate_size_and_precision(
    counter_currency: &CurrencyInfo,
    instrument: &Instrument,
    quantity: Quantity,
    price: Option<Price>,
) -> ValidationResult<()> {
    validate_quantity_precision(counter_currency, instrument, quantity)?;
    validate_minimum_trade_size(counter_currency, quantity)?;
    if let Some(price) = price {
        validate_price_precision(price)?;
    }
    Ok(())
}
