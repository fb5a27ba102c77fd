//! Transport configuration

use std::time::Duration;

use url::Url;

use crate::error::GatewayError;

/// Connection settings for [`HttpTransport`](crate::HttpTransport)
#[derive(Debug, Clone)]
pub struct TransportConfig {
    pub base_url: Url,
    /// Sent verbatim as the `Authorization` header
    pub auth_token: String,
    /// Per-request timeout, also used as the connect timeout
    pub timeout: Duration,
    /// Total attempts per request, including the first
    pub max_attempts: u32,
    /// Linear backoff step: attempt `n` waits `n * retry_backoff`
    pub retry_backoff: Duration,
}

impl TransportConfig {
    pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);
    pub const DEFAULT_MAX_ATTEMPTS: u32 = 3;
    pub const DEFAULT_RETRY_BACKOFF: Duration = Duration::from_millis(200);

    pub fn new(base_url: &str, auth_token: impl Into<String>) -> Result<Self, GatewayError> {
        let base_url = Url::parse(base_url).map_err(|e| GatewayError::InvalidBaseUrl {
            url: base_url.to_string(),
            reason: e.to_string(),
        })?;

        Ok(TransportConfig {
            base_url,
            auth_token: auth_token.into(),
            timeout: Self::DEFAULT_TIMEOUT,
            max_attempts: Self::DEFAULT_MAX_ATTEMPTS,
            retry_backoff: Self::DEFAULT_RETRY_BACKOFF,
        })
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_max_attempts(mut self, max_attempts: u32) -> Self {
        self.max_attempts = max_attempts.max(1);
        self
    }

    pub fn with_retry_backoff(mut self, backoff: Duration) -> Self {
        self.retry_backoff = backoff;
        self
    }

    /// Resolve a relative endpoint against the base URL (RFC 3986 join)
    pub fn endpoint_url(&self, endpoint: &str) -> Result<Url, url::ParseError> {
        self.base_url.join(endpoint)
    }
}
