//! The bounded action surface handed to participants.

use collective_core::error::{LedgerError, QuoteError};
use collective_core::traits::QuoteProvider;
use collective_core::types::{
    AccountSummary, Feasibility, Position, Quote, Side, Trade, TradeOrder, TradeResult,
};
use collective_ledger::Ledger;
use rust_decimal::Decimal;
use std::collections::HashMap;
use std::sync::Arc;

/// Capabilities a participant may invoke during its turn.
///
/// Participants never see the ledger or provider directly; this is the
/// whole surface, so adding a capability here is an explicit decision.
#[derive(Clone)]
pub struct DeskActions {
    ledger: Arc<Ledger>,
    quotes: Arc<dyn QuoteProvider>,
}

impl DeskActions {
    /// Bundle a ledger and quote provider into an action surface.
    pub fn new(ledger: Arc<Ledger>, quotes: Arc<dyn QuoteProvider>) -> Self {
        Self { ledger, quotes }
    }

    /// Account valuation at live prices.
    pub async fn summary(&self) -> AccountSummary {
        self.ledger.summary().await
    }

    /// Snapshot of open positions.
    pub fn positions(&self) -> HashMap<String, Position> {
        self.ledger.positions()
    }

    /// Recent trades, most recent first.
    pub fn history(&self, window_days: u32) -> Vec<Trade> {
        self.ledger.history(window_days)
    }

    /// Execute a market-priced trade against the shared ledger.
    pub async fn execute_trade(&self, order: TradeOrder) -> Result<TradeResult, LedgerError> {
        self.ledger.execute_trade(order).await
    }

    /// Dry-run an order without mutating anything.
    pub async fn check_feasibility(
        &self,
        symbol: &str,
        side: Side,
        quantity: Decimal,
    ) -> Result<Feasibility, LedgerError> {
        self.ledger.check_feasibility(symbol, side, quantity).await
    }

    /// Fresh quote for one symbol.
    pub async fn get_quote(&self, symbol: &str) -> Result<Quote, QuoteError> {
        self.quotes.get_quote(symbol).await
    }

    /// Best-effort quotes for several symbols.
    pub async fn get_quotes(&self, symbols: &[String]) -> Vec<Quote> {
        self.quotes.get_quotes(symbols).await
    }

    /// Symbol search.
    pub async fn search_symbols(&self, query: &str) -> Result<Vec<String>, QuoteError> {
        self.quotes.search_symbols(query).await
    }

    /// Currently trending symbols.
    pub async fn trending(&self) -> Result<Vec<String>, QuoteError> {
        self.quotes.trending().await
    }
}
