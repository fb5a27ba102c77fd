//! OTC Gateway
//!
//! HTTP transport for the OTC trading API. Provides:
//! - Authenticated JSON GET/POST over a single reused `reqwest` client
//! - Bounded retry of connection failures and timeouts
//! - Classification of responses into application errors, HTTP status
//!   errors and decoded JSON bodies
//!
//! ## Architecture
//!
//! ```text
//!   TradingClient (facade)
//!         │  TradingApi
//!    ┌────▼──────────┐
//!    │ HttpTransport │  retry policy, response classification
//!    └────┬──────────┘
//!         │  HttpSender
//!    ┌────▼──────────┐
//!    │ ReqwestSender │  one attempt on the wire
//!    └────┬──────────┘
//!         ▼
//!    Trading API (JSON over HTTPS)
//! ```
//!
//! The `HttpSender` seam lets tests script network failures without a
//! server.

pub mod client;
pub mod endpoints;
pub mod error;
pub mod status;
pub mod transport;

// Re-export commonly used types
pub use client::{HttpTransport, classify_response};
pub use endpoints::Endpoints;
pub use error::GatewayError;
pub use status::{http_status_description, is_error_status};
pub use transport::{
    HttpMethod, HttpRequest, HttpSender, RawResponse, RetryPolicy, config::TransportConfig,
    reqwest_sender::ReqwestSender,
};
