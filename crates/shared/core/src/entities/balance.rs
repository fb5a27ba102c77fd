use std::collections::BTreeMap;
use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Account balance per currency, as returned by the server
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Balance(pub BTreeMap<String, Decimal>);

impl Balance {
    /// Amount held in `currency`, if the server reported one
    pub fn get(&self, currency: &str) -> Option<Decimal> {
        self.0.get(currency).copied()
    }
}

impl fmt::Display for Balance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let entries: Vec<String> = self
            .0
            .iter()
            .map(|(currency, amount)| format!("{}: {}", currency, amount))
            .collect();
        write!(f, "{{{}}}", entries.join(", "))
    }
}
