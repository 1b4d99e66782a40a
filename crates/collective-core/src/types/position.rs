//! Position and account valuation types.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// An aggregated holding of one symbol.
///
/// `average_price` is the volume-weighted average cost of the shares
/// currently held. Selling drops realized lots from the average; only the
/// cost basis of the remaining shares is preserved. Flat positions are
/// removed from the account, never retained at zero quantity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Position {
    /// Upper-cased ticker symbol
    pub symbol: String,
    /// Shares held; always > 0
    pub quantity: Decimal,
    /// Volume-weighted average cost of the held shares
    pub average_price: Decimal,
    /// Last mutation timestamp
    pub updated_at: DateTime<Utc>,
}

impl Position {
    /// Create a new position.
    pub fn new(symbol: impl Into<String>, quantity: Decimal, average_price: Decimal) -> Self {
        Self {
            symbol: symbol.into(),
            quantity,
            average_price,
            updated_at: Utc::now(),
        }
    }

    /// Cost basis of the held shares (quantity * average_price).
    pub fn cost_basis(&self) -> Decimal {
        self.quantity * self.average_price
    }

    /// Fold a buy into the position, recomputing the weighted average cost.
    pub fn add_shares(&mut self, quantity: Decimal, price: Decimal) {
        let new_quantity = self.quantity + quantity;
        let new_cost = self.cost_basis() + quantity * price;
        self.average_price = new_cost / new_quantity;
        self.quantity = new_quantity;
        self.updated_at = Utc::now();
    }

    /// Remove sold shares. The average cost of the remainder is unchanged.
    pub fn remove_shares(&mut self, quantity: Decimal) {
        self.quantity -= quantity;
        self.updated_at = Utc::now();
    }

    /// Check whether the position has been fully sold.
    pub fn is_flat(&self) -> bool {
        self.quantity.is_zero()
    }
}

/// Valuation snapshot of the account.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccountSummary {
    /// Cash plus market value of all positions
    pub total_value: Decimal,
    /// Available cash
    pub cash_balance: Decimal,
    /// Cash the account started with
    pub initial_value: Decimal,
    /// total_value - initial_value
    pub total_return: Decimal,
    /// Return as a percentage of initial value
    pub total_return_percent: Decimal,
    /// Number of open positions
    pub position_count: usize,
    /// Market value per held symbol
    pub position_values: HashMap<String, Decimal>,
    /// When the snapshot was taken
    pub as_of: DateTime<Utc>,
}

/// Trading activity metrics over a history window.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PerformanceMetrics {
    /// Window length in days
    pub period_days: u32,
    /// Account return over its lifetime
    pub total_return: Decimal,
    /// Return as a percentage of initial value
    pub total_return_percent: Decimal,
    /// Trades executed in the window
    pub total_trades: usize,
    /// Sum of trade values in the window
    pub total_volume: Decimal,
}

/// Result of a dry-run order check.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Feasibility {
    /// Whether the order would execute right now
    pub feasible: bool,
    /// Estimated value at the current quote
    pub estimated_value: Decimal,
    /// Current quote price used for the estimate
    pub quote_price: Decimal,
    /// Why the order would be rejected, when infeasible
    pub reason: Option<String>,
}
