//! Transport abstraction layer
//!
//! `HttpSender` performs exactly one HTTP exchange. Retry and response
//! classification live above it in [`HttpTransport`](crate::HttpTransport),
//! so any sender (reqwest, or a scripted fake in tests) gets the same
//! policy.

pub mod config;
pub mod reqwest_sender;

use async_trait::async_trait;
use otc_ports::TransportError;
use serde_json::Value;
use url::Url;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    Get,
    Post,
}

impl std::fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HttpMethod::Get => f.write_str("GET"),
            HttpMethod::Post => f.write_str("POST"),
        }
    }
}

/// A fully resolved request
#[derive(Debug, Clone, PartialEq)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub url: Url,
    /// JSON body; GET requests carry none
    pub body: Option<Value>,
}

/// Status and raw body of a completed exchange
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

impl RawResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }
}

/// Which send failures may be retried for a request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RetryPolicy {
    /// Connection failures and timeouts; for reads and quote requests
    Transient,
    /// Only failures where the request never reached the server; for
    /// state-mutating submissions
    ConnectOnly,
}

impl RetryPolicy {
    pub fn should_retry(&self, err: &TransportError) -> bool {
        match self {
            RetryPolicy::Transient => err.is_retryable(),
            RetryPolicy::ConnectOnly => err.is_connect(),
        }
    }
}

/// One attempt on the wire
#[async_trait]
pub trait HttpSender: Send + Sync {
    async fn send(&self, request: &HttpRequest) -> Result<RawResponse, TransportError>;
}
