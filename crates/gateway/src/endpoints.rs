//! Relative endpoint paths of the trading API

use serde::{Deserialize, Serialize};

/// Endpoint table, joined onto the configured base URL
///
/// Paths are relative (no leading `/`) so a base URL with a path prefix
/// such as `https://host/api/` keeps its prefix.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Endpoints {
    pub instruments: String,
    pub currency: String,
    pub balance: String,
    pub request_for_quote: String,
    pub trade: String,
}

impl Endpoints {
    pub const INSTRUMENTS: &'static str = "instruments/";
    pub const CURRENCY: &'static str = "currency/";
    pub const BALANCE: &'static str = "balance/";
    pub const REQUEST_FOR_QUOTE: &'static str = "request_for_quote/";
    pub const TRADE: &'static str = "order/";
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            instruments: Self::INSTRUMENTS.to_string(),
            currency: Self::CURRENCY.to_string(),
            balance: Self::BALANCE.to_string(),
            request_for_quote: Self::REQUEST_FOR_QUOTE.to_string(),
            trade: Self::TRADE.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_override_keeps_defaults() {
        let endpoints: Endpoints = serde_json::from_str(r#"{"trade": "trade/"}"#).unwrap();
        assert_eq!(endpoints.trade, "trade/");
        assert_eq!(endpoints.balance, Endpoints::BALANCE);
        assert_eq!(endpoints.request_for_quote, "request_for_quote/");
    }
}
