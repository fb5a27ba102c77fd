//! Trading facade over the API port and the pre-trade validators

use std::sync::Arc;

use log::{error, info, warn};
use otc_clock::SystemClock;
use otc_core::{
    Balance, CurrencyInfo, Instrument, InstrumentInfo, Price, Quantity, Quote, QuoteRequest, Side,
    SupportedCurrencies, TradeOrder, TradeResponse,
};
use otc_gateway::{Endpoints, HttpTransport};
use otc_ports::{
    ApiError, Clock, NullReporter, TradeReporter, TradingApi, TransportError, ValidationError,
};
use otc_risk::{is_quote_still_valid, validate_size_and_precision};
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::config::ClientConfig;
use crate::error::Result;

/// Result of a submitted fill-or-kill order
#[derive(Debug, Clone, PartialEq)]
pub enum TradeOutcome {
    /// The server did not fill the order (`executed_price` was null)
    Rejected(TradeResponse),
    /// The order filled; `balance` is `None` when the follow-up fetch failed
    Executed {
        order: TradeResponse,
        balance: Option<Balance>,
    },
}

impl TradeOutcome {
    pub fn is_executed(&self) -> bool {
        matches!(self, TradeOutcome::Executed { .. })
    }

    pub fn order(&self) -> &TradeResponse {
        match self {
            TradeOutcome::Rejected(order) => order,
            TradeOutcome::Executed { order, .. } => order,
        }
    }
}

/// RFQ trading client
///
/// Every quote and trade is validated locally before anything is sent, and
/// a trade is only submitted while its quote passes the expiry check.
pub struct TradingClient<A: TradingApi> {
    api: A,
    endpoints: Endpoints,
    clock: Arc<dyn Clock>,
    reporter: Arc<dyn TradeReporter>,
}

impl TradingClient<HttpTransport> {
    /// Build a client backed by the HTTP transport
    pub fn from_config(config: &ClientConfig) -> Result<Self> {
        let transport = HttpTransport::new(config.transport_config()?)
            .map_err(crate::config::ConfigError::from)?;
        Ok(Self::new(transport, config.endpoints.clone()))
    }
}

impl<A: TradingApi> TradingClient<A> {
    pub fn new(api: A, endpoints: Endpoints) -> Self {
        Self {
            api,
            endpoints,
            clock: Arc::new(SystemClock::new()),
            reporter: Arc::new(NullReporter),
        }
    }

    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    pub fn with_reporter(mut self, reporter: Arc<dyn TradeReporter>) -> Self {
        self.reporter = reporter;
        self
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    pub async fn get_instruments(&self) -> Result<Vec<InstrumentInfo>> {
        let body = self.api.get(&self.endpoints.instruments).await?;
        decode(body)
    }

    pub async fn get_supported_currencies(&self) -> Result<SupportedCurrencies> {
        let body = self.api.get(&self.endpoints.currency).await?;
        decode(body)
    }

    /// Metadata for one currency code; `None` when the server does not list it
    pub async fn get_currency_info(&self, code: &str) -> Result<Option<CurrencyInfo>> {
        let mut currencies = self.get_supported_currencies().await?;
        let info = currencies.remove(code);
        if info.is_none() {
            error!("{}", ValidationError::UnknownCurrency(code.to_string()));
        }
        Ok(info)
    }

    pub async fn get_balance(&self) -> Result<Balance> {
        let body = self.api.get(&self.endpoints.balance).await?;
        decode(body)
    }

    async fn validate_order(
        &self,
        instrument: &Instrument,
        quantity: Quantity,
        price: Option<Price>,
    ) -> Result<()> {
        let code = instrument.counter_currency();
        let counter = self
            .get_currency_info(code)
            .await?
            .ok_or_else(|| ValidationError::UnknownCurrency(code.to_string()))?;

        validate_size_and_precision(&counter, instrument, quantity, price)?;
        Ok(())
    }

    /// Validate and request a quote
    pub async fn request_quote(
        &self,
        instrument: &Instrument,
        side: Side,
        quantity: Quantity,
    ) -> Result<Quote> {
        self.validate_order(instrument, quantity, None).await?;

        let request = QuoteRequest::new(instrument.clone(), side, quantity);
        info!(
            "Requesting quote {} for {} {} {}",
            request.client_rfq_id, side, quantity, instrument
        );
        let body = serde_json::to_value(&request)?;
        let quote: Quote = decode(
            self.api
                .post(&self.endpoints.request_for_quote, &body)
                .await?,
        )?;

        self.reporter.quote_received(&quote);
        Ok(quote)
    }

    /// Submit a fill-or-kill order at a quoted price
    ///
    /// The balance is fetched only when the order executed.
    pub async fn make_trade(
        &self,
        instrument: &Instrument,
        side: Side,
        quantity: Quantity,
        price: Price,
        valid_until: &str,
    ) -> Result<TradeOutcome> {
        if !is_quote_still_valid(valid_until, self.clock.now())? {
            error!("RFQ was valid till {}", valid_until);
            return Err(ValidationError::ExpiredQuote {
                valid_until: valid_until.to_string(),
            }
            .into());
        }

        self.validate_order(instrument, quantity, Some(price)).await?;

        let order = TradeOrder::fill_or_kill(instrument.clone(), side, quantity, price, valid_until);
        info!(
            "Submitting {:?} order {} for {} {} {} @ {}",
            order.order_type, order.client_order_id, side, quantity, instrument, price
        );
        let body = serde_json::to_value(&order)?;
        let response: TradeResponse =
            decode(self.api.post_order(&self.endpoints.trade, &body).await?)?;

        if response.is_rejected() {
            warn!("Order {} rejected", order.client_order_id);
            self.reporter.trade_rejected(&response);
            return Ok(TradeOutcome::Rejected(response));
        }

        self.reporter.trade_executed(&response);
        // the fill already happened, so a failed balance fetch must not hide it
        let balance = match self.get_balance().await {
            Ok(balance) => {
                self.reporter.balance_updated(&balance);
                Some(balance)
            }
            Err(e) => {
                error!(
                    "Order {} executed but the balance could not be fetched: {}",
                    order.client_order_id, e
                );
                None
            }
        };

        Ok(TradeOutcome::Executed {
            order: response,
            balance,
        })
    }

    /// Trade a received quote as-is
    pub async fn execute_quote(&self, quote: &Quote) -> Result<TradeOutcome> {
        self.make_trade(
            &quote.instrument,
            quote.side,
            quote.quantity,
            quote.price,
            &quote.valid_until,
        )
        .await
    }
}

fn decode<T: DeserializeOwned>(body: Value) -> Result<T> {
    serde_json::from_value(body)
        .map_err(|e| ApiError::from(TransportError::Decode(e.to_string())).into())
}
