//! OTC Runner - RFQ trading facade and CLI
//!
//! Sequences validation and network calls into the user-facing operations:
//!
//! - **Reference data**: instruments, currency metadata, balance
//! - **Quote**: validate size and precision, then request a quote
//! - **Trade**: check quote expiry, re-validate, submit a fill-or-kill
//!   order, then fetch the balance when it executed
//!
//! ## Architecture
//!
//! ```text
//!        otc-client (CLI)
//!               │ request_quote / make_trade
//!      ┌────────▼────────┐
//!      │  TradingClient  │──────► TradeReporter (console)
//!      └──┬───────────┬──┘
//!         │ pre-flight│ network
//!  ┌──────▼─────┐ ┌───▼───────────┐
//!  │  otc-risk  │ │ HttpTransport │
//!  │ validators │ │ (otc-gateway) │
//!  └────────────┘ └───┬───────────┘
//!                     ▼
//!               Trading API
//! ```

pub mod config;
pub mod error;
pub mod prompt;
pub mod reporter;
pub mod trading;

// Re-export main types
pub use config::{ClientConfig, ConfigError, load_config, load_config_from_str};
pub use error::{Error, Result};
pub use prompt::confirm;
pub use reporter::ConsoleReporter;
pub use trading::{TradeOutcome, TradingClient};
