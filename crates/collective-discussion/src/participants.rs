//! Built-in deterministic participants.
//!
//! Each exercises a slice of the action surface: the analyst reads market
//! data, the risk officer reads valuation and runs dry-run checks, and the
//! trader actually moves the ledger. None of them require an external
//! reasoning service, which keeps full discussion runs reproducible.

use async_trait::async_trait;
use collective_core::error::CollectiveError;
use collective_core::types::{Side, TradeOrder, TradeResult, Transcript};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::actions::DeskActions;
use crate::participant::Participant;

/// Reports live quotes for a watchlist and what is trending.
pub struct MarketAnalyst {
    watchlist: Vec<String>,
}

impl MarketAnalyst {
    pub fn new(watchlist: Vec<String>) -> Self {
        Self { watchlist }
    }
}

#[async_trait]
impl Participant for MarketAnalyst {
    fn name(&self) -> &str {
        "MarketAnalyst"
    }

    fn description(&self) -> &str {
        "Surveys watchlist quotes and trending symbols"
    }

    async fn take_turn(
        &self,
        _topic: &str,
        _transcript: &Transcript,
        actions: &DeskActions,
    ) -> Result<String, CollectiveError> {
        let quotes = actions.get_quotes(&self.watchlist).await;

        let mut lines = Vec::new();
        if quotes.is_empty() {
            lines.push("No watchlist quotes available right now.".to_string());
        }
        for quote in &quotes {
            lines.push(format!(
                "{} trading at ${} ({}{}%)",
                quote.symbol,
                quote.price.round_dp(2),
                if quote.change_percent >= Decimal::ZERO {
                    "+"
                } else {
                    ""
                },
                quote.change_percent.round_dp(2),
            ));
        }

        let trending = actions.trending().await?;
        if !trending.is_empty() {
            let top: Vec<&str> = trending.iter().take(5).map(String::as_str).collect();
            lines.push(format!("Trending: {}", top.join(", ")));
        }

        Ok(lines.join(" | "))
    }
}

/// Reviews valuation and flags thin cash reserves.
pub struct RiskOfficer {
    /// Cash floor as a percentage of total value before a warning fires
    min_cash_percent: Decimal,
}

impl RiskOfficer {
    pub fn new() -> Self {
        Self {
            min_cash_percent: dec!(20),
        }
    }
}

impl Default for RiskOfficer {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Participant for RiskOfficer {
    fn name(&self) -> &str {
        "RiskOfficer"
    }

    fn description(&self) -> &str {
        "Reviews portfolio valuation, exposure, and cash reserves"
    }

    async fn take_turn(
        &self,
        _topic: &str,
        _transcript: &Transcript,
        actions: &DeskActions,
    ) -> Result<String, CollectiveError> {
        let summary = actions.summary().await;

        let cash_percent = if summary.total_value.is_zero() {
            Decimal::from(100)
        } else {
            summary.cash_balance / summary.total_value * Decimal::from(100)
        };

        let mut report = format!(
            "Portfolio at ${} ({}{}% total return), {} position(s), cash ${} ({}% of book).",
            summary.total_value.round_dp(2),
            if summary.total_return >= Decimal::ZERO {
                "+"
            } else {
                ""
            },
            summary.total_return_percent.round_dp(2),
            summary.position_count,
            summary.cash_balance.round_dp(2),
            cash_percent.round_dp(1),
        );

        if cash_percent < self.min_cash_percent {
            report.push_str(&format!(
                " Cash reserve below the {}% floor; recommend no new buys this round.",
                self.min_cash_percent
            ));
        } else {
            report.push_str(" Risk posture acceptable.");
        }

        Ok(report)
    }
}

/// Executes a sized order in the target symbol when cash allows.
pub struct ExecutionTrader {
    target_symbol: String,
    /// Fraction of cash committed per buy, as a percentage
    allocation_percent: Decimal,
}

impl ExecutionTrader {
    pub fn new(target_symbol: impl Into<String>) -> Self {
        Self {
            target_symbol: target_symbol.into(),
            allocation_percent: dec!(10),
        }
    }
}

#[async_trait]
impl Participant for ExecutionTrader {
    fn name(&self) -> &str {
        "ExecutionTrader"
    }

    fn description(&self) -> &str {
        "Sizes and executes orders against the desk ledger"
    }

    async fn take_turn(
        &self,
        _topic: &str,
        _transcript: &Transcript,
        actions: &DeskActions,
    ) -> Result<String, CollectiveError> {
        let quote = actions.get_quote(&self.target_symbol).await?;

        // Halted or defunct tickers can quote at zero; there is no price to
        // size against, so stand down instead of dividing by it.
        if quote.price <= Decimal::ZERO {
            return Ok(format!(
                "Holding: {} has no tradable price (quoted ${}).",
                quote.symbol,
                quote.price.round_dp(2),
            ));
        }

        let summary = actions.summary().await;

        let budget = summary.cash_balance * self.allocation_percent / Decimal::from(100);
        let quantity = (budget / quote.price).floor();

        if quantity < Decimal::ONE {
            return Ok(format!(
                "Holding: {} at ${} exceeds the per-round allocation (${} available).",
                quote.symbol,
                quote.price.round_dp(2),
                budget.round_dp(2),
            ));
        }

        let feasibility = actions
            .check_feasibility(&quote.symbol, Side::Buy, quantity)
            .await?;
        if !feasibility.feasible {
            return Ok(format!(
                "Skipping {}: {}",
                quote.symbol,
                feasibility.reason.unwrap_or_else(|| "not feasible".to_string())
            ));
        }

        let result = actions
            .execute_trade(TradeOrder::buy(&quote.symbol, quantity))
            .await?;

        Ok(match result {
            TradeResult::Executed {
                trade,
                total_value,
                ..
            } => format!(
                "Bought {} {} at ${} (${} total).",
                trade.quantity,
                trade.symbol,
                trade.execution_price.round_dp(2),
                total_value.round_dp(2),
            ),
            TradeResult::Rejected(reason) => {
                format!("Order rejected: {reason}")
            }
        })
    }
}
