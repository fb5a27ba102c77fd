//! Error types for building the gateway

use thiserror::Error;

/// Setup errors raised while constructing a transport
#[derive(Error, Debug)]
pub enum GatewayError {
    #[error("Invalid base URL '{url}': {reason}")]
    InvalidBaseUrl { url: String, reason: String },

    #[error("Invalid header value: {0}")]
    InvalidHeader(String),

    #[error("Failed to create HTTP client: {0}")]
    ClientBuild(String),
}
