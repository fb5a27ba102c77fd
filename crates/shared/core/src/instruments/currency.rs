use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::values::Quantity;

/// Currency metadata keyed by 3-letter code
pub type SupportedCurrencies = BTreeMap<String, CurrencyInfo>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CurrencyType {
    Fiat,
    Crypto,
}

/// Metadata for one currency supported by the trading API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrencyInfo {
    pub is_crypto: bool,
    pub currency_type: CurrencyType,
    pub readable_name: String,
    pub minimum_trade_size: Quantity,
    pub stable_coin: bool,
    pub long_only: bool,
}

impl fmt::Display for CurrencyInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = if self.readable_name.is_empty() {
            "-"
        } else {
            self.readable_name.as_str()
        };
        write!(
            f,
            "{} ({:?}) min size {}{}{}",
            name,
            self.currency_type,
            self.minimum_trade_size,
            if self.stable_coin { ", stable coin" } else { "" },
            if self.long_only { ", long only" } else { "" },
        )
    }
}
