//! Console output for trading results

use std::io::{self, Stdout, Write};
use std::sync::Mutex;

use log::warn;
use otc_core::{Balance, Quote, TradeResponse};
use otc_ports::TradeReporter;

/// Writes quotes, orders and balances as plain text
pub struct ConsoleReporter<W: Write + Send = Stdout> {
    out: Mutex<W>,
}

impl ConsoleReporter<Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write + Send> ConsoleReporter<W> {
    pub fn new(out: W) -> Self {
        Self {
            out: Mutex::new(out),
        }
    }

    pub fn into_inner(self) -> W {
        self.out.into_inner().unwrap_or_else(|e| e.into_inner())
    }

    fn emit(&self, text: std::fmt::Arguments<'_>) {
        let mut out = self.out.lock().unwrap_or_else(|e| e.into_inner());
        if let Err(e) = out.write_fmt(text).and_then(|_| out.flush()) {
            warn!("Failed to write report: {}", e);
        }
    }
}

impl<W: Write + Send> TradeReporter for ConsoleReporter<W> {
    fn quote_received(&self, quote: &Quote) {
        self.emit(format_args!("Quote:\n{}\n", quote));
    }

    fn trade_rejected(&self, _response: &TradeResponse) {
        self.emit(format_args!("Order rejected.\n"));
    }

    fn trade_executed(&self, response: &TradeResponse) {
        self.emit(format_args!("Order info:\n{}\n", response));
    }

    fn balance_updated(&self, balance: &Balance) {
        self.emit(format_args!("Account Balance: {}\n", balance));
    }
}
