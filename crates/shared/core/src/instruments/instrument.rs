use serde::{Deserialize, Serialize};

/// Tradable symbol of the form `BASECOUNTER.TYPE`, e.g. `BTCUSD.SPOT`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Instrument(pub String);

impl Instrument {
    /// Length of the base currency code at the front of the pair
    const BASE_LEN: usize = 3;

    pub fn new(symbol: impl Into<String>) -> Self {
        Self(symbol.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Currency pair part of the symbol (everything before the first `.`)
    pub fn pair(&self) -> &str {
        self.0.split('.').next().unwrap_or_default()
    }

    /// Product type suffix (`SPOT`, `CFD`, ...), if present
    pub fn product_type(&self) -> Option<&str> {
        self.0.split_once('.').map(|(_, kind)| kind)
    }

    /// First three characters of the pair
    pub fn base_currency(&self) -> &str {
        self.pair().get(..Self::BASE_LEN).unwrap_or_default()
    }

    /// Everything in the pair after the base currency
    ///
    /// Symbols shorter than the base code yield an empty string; no further
    /// validation of the layout is attempted.
    pub fn counter_currency(&self) -> &str {
        self.pair().get(Self::BASE_LEN..).unwrap_or_default()
    }
}

impl std::fmt::Display for Instrument {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for Instrument {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for Instrument {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// Entry of the instruments listing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstrumentInfo {
    pub name: Instrument,
}
