//! Account state and the trade application rules.

use chrono::{DateTime, Utc};
use collective_core::types::{
    normalize_symbol, Position, Side, Trade, TradeOrder, TradeRejection, TradeResult, TradeStatus,
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use uuid::Uuid;

/// The financial state of the desk: cash, positions, and trade history.
///
/// Invariants: `cash >= 0`, every position quantity > 0, history is
/// append-only in execution order. `apply_order` is the only mutation path
/// and either commits fully or leaves the account untouched.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Account {
    /// Cash the account started with
    pub initial_cash: Decimal,
    /// Available cash
    pub cash: Decimal,
    /// Open positions keyed by upper-cased symbol
    pub positions: HashMap<String, Position>,
    /// Executed trades in chronological order
    pub history: Vec<Trade>,
    /// When the account was opened
    pub created_at: DateTime<Utc>,
}

impl Account {
    /// Create a new account with initial cash.
    pub fn new(initial_cash: Decimal) -> Self {
        Self {
            initial_cash,
            cash: initial_cash,
            positions: HashMap::new(),
            history: Vec::new(),
            created_at: Utc::now(),
        }
    }

    /// Get a position by symbol (case-insensitive).
    pub fn position(&self, symbol: &str) -> Option<&Position> {
        self.positions.get(&normalize_symbol(symbol))
    }

    /// Total cost basis across all positions.
    pub fn total_cost_basis(&self) -> Decimal {
        self.positions.values().map(|p| p.cost_basis()).sum()
    }

    /// Apply an order at the given execution price.
    ///
    /// Validates business rules first; a rejection leaves the account
    /// untouched. On success the cash and position changes commit together
    /// with the appended trade record.
    pub fn apply_order(&mut self, order: &TradeOrder, execution_price: Decimal) -> TradeResult {
        if order.quantity <= Decimal::ZERO {
            return TradeResult::Rejected(TradeRejection::InvalidQuantity {
                quantity: order.quantity,
            });
        }

        let symbol = normalize_symbol(&order.symbol);
        let total_value = order.quantity * execution_price;

        match order.side {
            Side::Buy => {
                if total_value > self.cash {
                    return TradeResult::Rejected(TradeRejection::InsufficientFunds {
                        required: total_value,
                        available: self.cash,
                    });
                }

                self.cash -= total_value;
                match self.positions.get_mut(&symbol) {
                    Some(position) => position.add_shares(order.quantity, execution_price),
                    None => {
                        self.positions.insert(
                            symbol.clone(),
                            Position::new(symbol.clone(), order.quantity, execution_price),
                        );
                    }
                }
            }
            Side::Sell => {
                let held = self
                    .positions
                    .get(&symbol)
                    .map(|p| p.quantity)
                    .unwrap_or(Decimal::ZERO);
                if held < order.quantity {
                    return TradeResult::Rejected(TradeRejection::InsufficientShares {
                        requested: order.quantity,
                        available: held,
                    });
                }

                self.cash += total_value;
                let position = self
                    .positions
                    .get_mut(&symbol)
                    .expect("sell validated against held quantity");
                position.remove_shares(order.quantity);
                if position.is_flat() {
                    self.positions.remove(&symbol);
                }
            }
        }

        let trade = Trade {
            id: Uuid::new_v4(),
            symbol,
            side: order.side,
            quantity: order.quantity,
            execution_price,
            total_value,
            executed_at: Utc::now(),
            status: TradeStatus::Executed,
        };
        self.history.push(trade.clone());

        TradeResult::Executed {
            trade,
            executed_quantity: order.quantity,
            execution_price,
            total_value,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_buy_creates_position() {
        let mut account = Account::new(dec!(10000));
        let result = account.apply_order(&TradeOrder::buy("aapl", dec!(10)), dec!(100));

        assert!(result.is_executed());
        assert_eq!(account.cash, dec!(9000));
        let position = account.position("AAPL").unwrap();
        assert_eq!(position.quantity, dec!(10));
        assert_eq!(position.average_price, dec!(100));
        assert_eq!(account.history.len(), 1);
    }

    #[test]
    fn test_buy_recomputes_average_price() {
        let mut account = Account::new(dec!(10000));
        account.apply_order(&TradeOrder::buy("X", dec!(10)), dec!(10));
        account.apply_order(&TradeOrder::buy("X", dec!(10)), dec!(20));

        let position = account.position("X").unwrap();
        assert_eq!(position.quantity, dec!(20));
        assert_eq!(position.average_price, dec!(15));
    }

    #[test]
    fn test_buy_insufficient_funds_leaves_account_unchanged() {
        let mut account = Account::new(dec!(100));
        let result = account.apply_order(&TradeOrder::buy("AAPL", dec!(10)), dec!(100));

        assert!(matches!(
            result.rejection(),
            Some(TradeRejection::InsufficientFunds { .. })
        ));
        assert_eq!(account.cash, dec!(100));
        assert!(account.positions.is_empty());
        assert!(account.history.is_empty());
    }

    #[test]
    fn test_sell_without_position_rejected() {
        let mut account = Account::new(dec!(10000));
        let result = account.apply_order(&TradeOrder::sell("AAPL", dec!(1)), dec!(100));

        assert!(matches!(
            result.rejection(),
            Some(TradeRejection::InsufficientShares { .. })
        ));
        assert_eq!(account.cash, dec!(10000));
        assert!(account.history.is_empty());
    }

    #[test]
    fn test_oversell_rejected() {
        let mut account = Account::new(dec!(10000));
        account.apply_order(&TradeOrder::buy("AAPL", dec!(5)), dec!(100));
        let result = account.apply_order(&TradeOrder::sell("AAPL", dec!(6)), dec!(100));

        assert!(!result.is_executed());
        assert_eq!(account.position("AAPL").unwrap().quantity, dec!(5));
        assert_eq!(account.history.len(), 1);
    }

    #[test]
    fn test_sell_releases_cash_at_execution_price() {
        let mut account = Account::new(dec!(10000));
        account.apply_order(&TradeOrder::buy("X", dec!(50)), dec!(100));
        assert_eq!(account.cash, dec!(5000));

        // Sell 20 at 120: cash delta is quantity * execution price,
        // independent of the average cost.
        let result = account.apply_order(&TradeOrder::sell("X", dec!(20)), dec!(120));
        assert_eq!(account.cash, dec!(7400));

        let position = account.position("X").unwrap();
        assert_eq!(position.quantity, dec!(30));
        assert_eq!(position.average_price, dec!(100));

        let trade = result.trade().unwrap();
        assert_eq!(trade.total_value, dec!(2400));
        assert_eq!(account.history.len(), 2);
    }

    #[test]
    fn test_full_sell_removes_position() {
        let mut account = Account::new(dec!(10000));
        account.apply_order(&TradeOrder::buy("AAPL", dec!(10)), dec!(100));
        account.apply_order(&TradeOrder::sell("AAPL", dec!(10)), dec!(110));

        assert!(account.position("AAPL").is_none());
        assert_eq!(account.cash, dec!(10100));
    }

    #[test]
    fn test_zero_and_negative_quantity_rejected() {
        let mut account = Account::new(dec!(10000));

        let result = account.apply_order(&TradeOrder::buy("AAPL", Decimal::ZERO), dec!(100));
        assert!(matches!(
            result.rejection(),
            Some(TradeRejection::InvalidQuantity { .. })
        ));

        let result = account.apply_order(&TradeOrder::sell("AAPL", dec!(-5)), dec!(100));
        assert!(!result.is_executed());
        assert!(account.history.is_empty());
    }

    #[test]
    fn test_symbol_case_normalized() {
        let mut account = Account::new(dec!(10000));
        account.apply_order(&TradeOrder::buy("aapl", dec!(10)), dec!(100));
        account.apply_order(&TradeOrder::buy("AAPL", dec!(10)), dec!(100));

        assert_eq!(account.positions.len(), 1);
        assert_eq!(account.position("Aapl").unwrap().quantity, dec!(20));
    }

    #[test]
    fn test_buy_conservation() {
        // Cost basis in equals cash out on every buy.
        let mut account = Account::new(dec!(10000));
        let before = account.cash + account.total_cost_basis();

        account.apply_order(&TradeOrder::buy("A", dec!(7)), dec!(13.5));

        let after = account.cash + account.total_cost_basis();
        assert_eq!(before, after);
    }
}
