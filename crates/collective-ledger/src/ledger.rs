//! Ledger facade: quote-priced execution, valuation, and history queries.

use chrono::{Duration, Utc};
use collective_core::error::LedgerError;
use collective_core::traits::QuoteProvider;
use collective_core::types::{
    normalize_symbol, AccountSummary, Feasibility, PerformanceMetrics, Position, Side, Trade,
    TradeOrder, TradeRejection, TradeResult,
};
use rust_decimal::Decimal;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use tracing::{info, warn};

use crate::account::Account;

/// Shared, serialized access to the single desk account.
///
/// The account lives behind a mutex and every trade's check-and-mutate runs
/// under one lock acquisition, so two racing buys can never both pass the
/// funds check against a stale balance. Quotes are fetched before the lock
/// is taken; the guard is never held across an await.
pub struct Ledger {
    account: Arc<Mutex<Account>>,
    quotes: Arc<dyn QuoteProvider>,
}

impl Ledger {
    /// Create a ledger with initial cash and a quote provider.
    pub fn new(initial_cash: Decimal, quotes: Arc<dyn QuoteProvider>) -> Self {
        info!(%initial_cash, "Initialized desk account");
        Self {
            account: Arc::new(Mutex::new(Account::new(initial_cash))),
            quotes,
        }
    }

    /// Build a ledger around a prepared account, for seeding history.
    #[cfg(test)]
    fn with_account(account: Account, quotes: Arc<dyn QuoteProvider>) -> Self {
        Self {
            account: Arc::new(Mutex::new(account)),
            quotes,
        }
    }

    /// Current cash balance.
    pub fn cash_balance(&self) -> Decimal {
        self.account.lock().unwrap().cash
    }

    /// Snapshot of all open positions.
    ///
    /// Returns a clone; later mutation is not observable through it.
    pub fn positions(&self) -> HashMap<String, Position> {
        self.account.lock().unwrap().positions.clone()
    }

    /// Trades executed within the last `window_days`, most recent first.
    pub fn history(&self, window_days: u32) -> Vec<Trade> {
        let cutoff = Utc::now() - Duration::days(i64::from(window_days));
        let account = self.account.lock().unwrap();
        let mut trades: Vec<Trade> = account
            .history
            .iter()
            .filter(|t| t.executed_at >= cutoff)
            .cloned()
            .collect();
        trades.sort_by(|a, b| b.executed_at.cmp(&a.executed_at));
        trades
    }

    /// Value the account at live prices.
    ///
    /// A failed quote degrades that symbol to its average cost; valuation
    /// never hard-fails because one quote is unavailable.
    pub async fn summary(&self) -> AccountSummary {
        let (cash, initial_cash, positions) = {
            let account = self.account.lock().unwrap();
            (
                account.cash,
                account.initial_cash,
                account.positions.clone(),
            )
        };

        let mut total_value = cash;
        let mut position_values = HashMap::new();

        for position in positions.values() {
            let value = match self.quotes.get_quote(&position.symbol).await {
                Ok(quote) => position.quantity * quote.price,
                Err(error) => {
                    warn!(symbol = %position.symbol, %error, "Quote failed, valuing at average cost");
                    position.quantity * position.average_price
                }
            };
            total_value += value;
            position_values.insert(position.symbol.clone(), value);
        }

        let total_return = total_value - initial_cash;
        let total_return_percent = if initial_cash.is_zero() {
            Decimal::ZERO
        } else {
            total_return / initial_cash * Decimal::from(100)
        };

        AccountSummary {
            total_value,
            cash_balance: cash,
            initial_value: initial_cash,
            total_return,
            total_return_percent,
            position_count: positions.len(),
            position_values,
            as_of: Utc::now(),
        }
    }

    /// Execute a trade at the current market price.
    ///
    /// Quote unavailability is the one condition that surfaces as an error,
    /// because the price is unknowable without it. Business-rule rejections
    /// come back as `TradeResult::Rejected` with no mutation.
    pub async fn execute_trade(&self, order: TradeOrder) -> Result<TradeResult, LedgerError> {
        let symbol = normalize_symbol(&order.symbol);
        let quote = self.quotes.get_quote(&symbol).await.map_err(|source| {
            LedgerError::QuoteUnavailable {
                symbol: symbol.clone(),
                source,
            }
        })?;

        let result = {
            let mut account = self.account.lock().unwrap();
            account.apply_order(&order, quote.price)
        };

        match &result {
            TradeResult::Executed { trade, .. } => {
                info!(
                    symbol = %trade.symbol,
                    side = %trade.side,
                    quantity = %trade.quantity,
                    price = %trade.execution_price,
                    "Trade executed"
                );
            }
            TradeResult::Rejected(reason) => {
                info!(%symbol, side = %order.side, %reason, "Trade rejected");
            }
        }

        Ok(result)
    }

    /// Dry-run an order against current cash, holdings, and quote.
    pub async fn check_feasibility(
        &self,
        symbol: &str,
        side: Side,
        quantity: Decimal,
    ) -> Result<Feasibility, LedgerError> {
        let symbol = normalize_symbol(symbol);
        let quote = self.quotes.get_quote(&symbol).await.map_err(|source| {
            LedgerError::QuoteUnavailable {
                symbol: symbol.clone(),
                source,
            }
        })?;

        let estimated_value = quantity * quote.price;
        let account = self.account.lock().unwrap();

        let rejection = if quantity <= Decimal::ZERO {
            Some(TradeRejection::InvalidQuantity { quantity })
        } else {
            match side {
                Side::Buy if estimated_value > account.cash => {
                    Some(TradeRejection::InsufficientFunds {
                        required: estimated_value,
                        available: account.cash,
                    })
                }
                Side::Sell => {
                    let held = account
                        .positions
                        .get(&symbol)
                        .map(|p| p.quantity)
                        .unwrap_or(Decimal::ZERO);
                    if held < quantity {
                        Some(TradeRejection::InsufficientShares {
                            requested: quantity,
                            available: held,
                        })
                    } else {
                        None
                    }
                }
                _ => None,
            }
        };

        Ok(Feasibility {
            feasible: rejection.is_none(),
            estimated_value,
            quote_price: quote.price,
            reason: rejection.map(|r| r.to_string()),
        })
    }

    /// Trading activity metrics over the given window.
    pub async fn performance(&self, window_days: u32) -> PerformanceMetrics {
        let trades = self.history(window_days);
        let summary = self.summary().await;

        PerformanceMetrics {
            period_days: window_days,
            total_return: summary.total_return,
            total_return_percent: summary.total_return_percent,
            total_trades: trades.len(),
            total_volume: trades.iter().map(|t| t.total_value).sum(),
        }
    }
}
