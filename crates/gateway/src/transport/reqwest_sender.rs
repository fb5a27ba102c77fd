//! `reqwest`-backed sender
//!
//! Builds one client (and its connection pool) up front and reuses it for
//! every request.

use async_trait::async_trait;
use log::debug;
use otc_ports::TransportError;
use reqwest::{
    Client,
    header::{AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue},
};

use super::config::TransportConfig;
use super::{HttpMethod, HttpRequest, HttpSender, RawResponse};
use crate::error::GatewayError;

pub struct ReqwestSender {
    client: Client,
}

impl ReqwestSender {
    pub fn new(config: &TransportConfig) -> Result<Self, GatewayError> {
        debug!("Updating headers");
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let mut auth = HeaderValue::from_str(&config.auth_token)
            .map_err(|e| GatewayError::InvalidHeader(e.to_string()))?;
        auth.set_sensitive(true);
        headers.insert(AUTHORIZATION, auth);

        let client = Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.timeout)
            .default_headers(headers)
            .build()
            .map_err(|e| GatewayError::ClientBuild(e.to_string()))?;

        Ok(Self { client })
    }
}

/// Map a reqwest failure onto the transport taxonomy
///
/// Connect errors are checked before timeouts so a connect timeout counts as
/// "never reached the server".
fn classify_error(err: reqwest::Error) -> TransportError {
    if err.is_redirect() {
        TransportError::TooManyRedirects
    } else if err.is_connect() {
        TransportError::Connect(err.to_string())
    } else if err.is_timeout() {
        TransportError::Timeout(err.to_string())
    } else {
        TransportError::Request(err.to_string())
    }
}

#[async_trait]
impl HttpSender for ReqwestSender {
    async fn send(&self, request: &HttpRequest) -> Result<RawResponse, TransportError> {
        let builder = match request.method {
            HttpMethod::Get => self.client.get(request.url.clone()),
            HttpMethod::Post => self.client.post(request.url.clone()),
        };
        let builder = match &request.body {
            Some(body) => builder.json(body),
            None => builder,
        };

        let response = builder.send().await.map_err(classify_error)?;
        let status = response.status().as_u16();
        let body = response.text().await.map_err(classify_error)?;

        Ok(RawResponse { status, body })
    }
}
