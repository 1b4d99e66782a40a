//! Trade order and execution types.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Order side (buy or sell).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Buy,
    Sell,
}

impl Side {
    /// Get the opposite side.
    pub fn opposite(&self) -> Self {
        match self {
            Side::Buy => Side::Sell,
            Side::Sell => Side::Buy,
        }
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Side::Buy => write!(f, "BUY"),
            Side::Sell => write!(f, "SELL"),
        }
    }
}

/// Trade lifecycle status.
///
/// Trades only enter the history once executed, so recorded trades always
/// carry `Executed`. The other states exist for serialized interchange with
/// callers that track in-flight orders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TradeStatus {
    Pending,
    Executed,
    Cancelled,
    Failed,
}

/// A request to trade a quantity of one symbol at the current market price.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TradeOrder {
    /// Symbol to trade (normalized before any lookup)
    pub symbol: String,
    /// Buy or sell
    pub side: Side,
    /// Quantity of shares; must be > 0
    pub quantity: Decimal,
}

impl TradeOrder {
    /// Create a buy order.
    pub fn buy(symbol: impl Into<String>, quantity: Decimal) -> Self {
        Self {
            symbol: symbol.into(),
            side: Side::Buy,
            quantity,
        }
    }

    /// Create a sell order.
    pub fn sell(symbol: impl Into<String>, quantity: Decimal) -> Self {
        Self {
            symbol: symbol.into(),
            side: Side::Sell,
            quantity,
        }
    }
}

/// An immutable record of an executed trade.
///
/// Created only by successful executions; never mutated or deleted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Trade {
    /// Unique trade ID
    pub id: Uuid,
    /// Symbol traded
    pub symbol: String,
    /// Buy or sell
    pub side: Side,
    /// Quantity executed
    pub quantity: Decimal,
    /// Price at execution
    pub execution_price: Decimal,
    /// quantity * execution_price
    pub total_value: Decimal,
    /// When the trade executed
    pub executed_at: DateTime<Utc>,
    /// Always `Executed` for recorded trades
    pub status: TradeStatus,
}

/// Reason a trade order was rejected by business rules.
///
/// Rejections are reported as values, never as errors, and leave the
/// account unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TradeRejection {
    InsufficientFunds {
        required: Decimal,
        available: Decimal,
    },
    InsufficientShares {
        requested: Decimal,
        available: Decimal,
    },
    InvalidQuantity {
        quantity: Decimal,
    },
}

impl std::fmt::Display for TradeRejection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TradeRejection::InsufficientFunds {
                required,
                available,
            } => write!(
                f,
                "Insufficient funds. Required: ${required}, Available: ${available}"
            ),
            TradeRejection::InsufficientShares {
                requested,
                available,
            } => write!(
                f,
                "Insufficient shares. Requested: {requested}, Available: {available}"
            ),
            TradeRejection::InvalidQuantity { quantity } => {
                write!(f, "Invalid quantity: {quantity} (must be > 0)")
            }
        }
    }
}

/// Outcome of a trade execution attempt.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum TradeResult {
    Executed {
        trade: Trade,
        executed_quantity: Decimal,
        execution_price: Decimal,
        total_value: Decimal,
    },
    Rejected(TradeRejection),
}

impl TradeResult {
    /// Check whether the order executed.
    pub fn is_executed(&self) -> bool {
        matches!(self, TradeResult::Executed { .. })
    }

    /// Get the executed trade record, if any.
    pub fn trade(&self) -> Option<&Trade> {
        match self {
            TradeResult::Executed { trade, .. } => Some(trade),
            TradeResult::Rejected(_) => None,
        }
    }

    /// Get the rejection reason, if any.
    pub fn rejection(&self) -> Option<&TradeRejection> {
        match self {
            TradeResult::Executed { .. } => None,
            TradeResult::Rejected(reason) => Some(reason),
        }
    }
}
