use rust_decimal::Decimal;
use serde_json::Value;
use thiserror::Error;

/// Transport-level failures: the request could not complete or the server
/// answered with an HTTP error status
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TransportError {
    #[error("HTTP {status}: {}", .description.unwrap_or("Unexpected HTTP status from server"))]
    Status {
        status: u16,
        description: Option<&'static str>,
    },

    #[error("Too many redirects. Try a new URL")]
    TooManyRedirects,

    /// Connection could not be established (includes connect timeouts)
    #[error("Connection failed: {0}")]
    Connect(String),

    /// Connection was established but the response did not arrive in time
    #[error("Request timed out: {0}")]
    Timeout(String),

    #[error("Request failed: {0}")]
    Request(String),

    #[error("Failed to decode response: {0}")]
    Decode(String),
}

impl TransportError {
    /// Failures that are retried when the request is safe to repeat
    pub fn is_retryable(&self) -> bool {
        matches!(self, TransportError::Connect(_) | TransportError::Timeout(_))
    }

    /// Failures where the request never reached the server
    pub fn is_connect(&self) -> bool {
        matches!(self, TransportError::Connect(_))
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            TransportError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// One entry of an application error payload (`{"errors": [...]}`)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiErrorDetail {
    pub code: Option<i64>,
    pub message: String,
    pub field: Option<String>,
}

impl ApiErrorDetail {
    /// Build from a raw `errors` list entry; non-object entries keep their
    /// JSON text as the message
    pub fn from_value(value: &Value) -> Self {
        match value {
            Value::Object(map) => ApiErrorDetail {
                code: map.get("code").and_then(Value::as_i64),
                message: map
                    .get("message")
                    .and_then(Value::as_str)
                    .unwrap_or_default()
                    .to_string(),
                field: map.get("field").and_then(Value::as_str).map(str::to_string),
            },
            Value::String(s) => ApiErrorDetail {
                code: None,
                message: s.clone(),
                field: None,
            },
            other => ApiErrorDetail {
                code: None,
                message: other.to_string(),
                field: None,
            },
        }
    }
}

impl std::fmt::Display for ApiErrorDetail {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if let Some(code) = self.code {
            write!(f, "[{}] ", code)?;
        }
        write!(f, "{}", self.message)?;
        if let Some(field) = &self.field {
            write!(f, " (field: {})", field)?;
        }
        Ok(())
    }
}

fn join_details(details: &[ApiErrorDetail]) -> String {
    details
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// Errors surfaced by a `TradingApi` call
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    #[error("Transport error: {0}")]
    Transport(#[from] TransportError),

    /// Well-formed response carrying a populated `errors` field
    #[error("Application error: {}", join_details(.0))]
    Application(Vec<ApiErrorDetail>),
}

pub type ApiResult<T> = std::result::Result<T, ApiError>;

/// Pre-trade validation failures
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error(
        "The instrument {instrument} supports maximum of {allowed} digits quantity precision."
    )]
    QuantityPrecision {
        instrument: String,
        allowed: u32,
        actual: u32,
    },

    #[error("The price precision is more than {allowed} significant figures.")]
    PricePrecision { allowed: u32, actual: u32 },

    #[error("Minimum trading size for {currency} not valid: {quantity} < {minimum}")]
    MinimumSize {
        currency: String,
        minimum: Decimal,
        quantity: Decimal,
    },

    #[error("Quote no longer valid (valid until {valid_until})")]
    ExpiredQuote { valid_until: String },

    #[error("Invalid quote timestamp '{value}': {reason}")]
    InvalidTimestamp { value: String, reason: String },

    #[error("The currency code provided is not valid: '{0}'")]
    UnknownCurrency(String),
}

impl ValidationError {
    /// Quantity or price carries more decimal digits than allowed
    pub fn is_precision(&self) -> bool {
        matches!(
            self,
            ValidationError::QuantityPrecision { .. } | ValidationError::PricePrecision { .. }
        )
    }
}

pub type ValidationResult<T> = std::result::Result<T, ValidationError>;
