use otc_core::{Balance, Quote, TradeResponse};

/// Observer for the user-visible results of trading operations
///
/// The entry point constructs one and injects it into the facade.
pub trait TradeReporter: Send + Sync {
    fn quote_received(&self, quote: &Quote);

    fn trade_rejected(&self, response: &TradeResponse);

    fn trade_executed(&self, response: &TradeResponse);

    fn balance_updated(&self, balance: &Balance);
}

/// Reporter that discards everything
#[derive(Debug, Default, Clone, Copy)]
pub struct NullReporter;

impl TradeReporter for NullReporter {
    fn quote_received(&self, _quote: &Quote) {}

    fn trade_rejected(&self, _response: &TradeResponse) {}

    fn trade_executed(&self, _response: &TradeResponse) {}

    fn balance_updated(&self, _balance: &Balance) {}
}
