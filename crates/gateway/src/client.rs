//! Authenticated HTTP transport with bounded retry

use async_trait::async_trait;
use log::{debug, error, info, warn};
use otc_ports::{ApiError, ApiErrorDetail, ApiResult, TradingApi, TransportError};
use serde_json::Value;

use crate::error::GatewayError;
use crate::status::{http_status_description, is_error_status};
use crate::transport::{
    HttpMethod, HttpRequest, HttpSender, RawResponse, RetryPolicy, config::TransportConfig,
    reqwest_sender::ReqwestSender,
};

/// HTTP transport for the trading API
///
/// Retry wraps only the low-level send; classification runs once on the
/// final response.
pub struct HttpTransport<S = ReqwestSender> {
    sender: S,
    config: TransportConfig,
}

impl HttpTransport<ReqwestSender> {
    pub fn new(config: TransportConfig) -> Result<Self, GatewayError> {
        let sender = ReqwestSender::new(&config)?;
        Ok(Self { sender, config })
    }
}

impl<S: HttpSender> HttpTransport<S> {
    pub fn with_sender(config: TransportConfig, sender: S) -> Self {
        Self { sender, config }
    }

    pub fn sender(&self) -> &S {
        &self.sender
    }

    async fn request(
        &self,
        method: HttpMethod,
        endpoint: &str,
        body: Option<&Value>,
        policy: RetryPolicy,
    ) -> ApiResult<Value> {
        let url = self.config.endpoint_url(endpoint).map_err(|e| {
            TransportError::Request(format!("invalid endpoint '{}': {}", endpoint, e))
        })?;
        info!("Requesting url: {}", url);

        let request = HttpRequest {
            method,
            url,
            body: body.cloned(),
        };
        let response = self.send_with_retry(&request, policy).await?;
        debug!("Response: {}", response.body);

        classify_response(response)
    }

    async fn send_with_retry(
        &self,
        request: &HttpRequest,
        policy: RetryPolicy,
    ) -> Result<RawResponse, TransportError> {
        let max_attempts = self.config.max_attempts.max(1);
        let mut attempt = 1;

        loop {
            match self.sender.send(request).await {
                Ok(response) => return Ok(response),
                Err(err) if attempt < max_attempts && policy.should_retry(&err) => {
                    warn!(
                        "{} {} failed (attempt {}/{}): {}",
                        request.method, request.url, attempt, max_attempts, err
                    );
                    let backoff = self.config.retry_backoff * attempt;
                    if !backoff.is_zero() {
                        tokio::time::sleep(backoff).await;
                    }
                    attempt += 1;
                }
                Err(err) => {
                    error!(
                        "{} {} failed after {} attempt(s): {}",
                        request.method, request.url, attempt, err
                    );
                    return Err(err);
                }
            }
        }
    }
}

/// Turn a completed exchange into the decoded body or a typed error
///
/// A non-empty `errors` list wins over the HTTP status; an error status wins
/// over an undecodable body.
pub fn classify_response(response: RawResponse) -> ApiResult<Value> {
    let decoded = serde_json::from_str::<Value>(&response.body);

    if let Ok(Value::Object(map)) = &decoded {
        if let Some(Value::Array(errors)) = map.get("errors") {
            if !errors.is_empty() {
                let details: Vec<ApiErrorDetail> =
                    errors.iter().map(ApiErrorDetail::from_value).collect();
                for detail in &details {
                    error!("{}", detail.message);
                }
                return Err(ApiError::Application(details));
            }
        }
    }

    if is_error_status(response.status) {
        let description = http_status_description(response.status);
        match description {
            Some(text) => info!("{}", text),
            None => warn!("Unexpected HTTP status {}", response.status),
        }
        return Err(TransportError::Status {
            status: response.status,
            description,
        }
        .into());
    }

    decoded.map_err(|e| TransportError::Decode(e.to_string()).into())
}

#[async_trait]
impl<S: HttpSender> TradingApi for HttpTransport<S> {
    async fn get(&self, endpoint: &str) -> ApiResult<Value> {
        info!("Making GET request to {} endpoint", endpoint);
        self.request(HttpMethod::Get, endpoint, None, RetryPolicy::Transient)
            .await
    }

    async fn post(&self, endpoint: &str, body: &Value) -> ApiResult<Value> {
        info!("Making POST request to {} endpoint", endpoint);
        self.request(HttpMethod::Post, endpoint, Some(body), RetryPolicy::Transient)
            .await
    }

    async fn post_order(&self, endpoint: &str, body: &Value) -> ApiResult<Value> {
        info!("Making POST request to {} endpoint", endpoint);
        self.request(
            HttpMethod::Post,
            endpoint,
            Some(body),
            RetryPolicy::ConnectOnly,
        )
        .await
    }
}
