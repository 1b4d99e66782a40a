//! Core data types.

mod position;
mod quote;
mod trade;
mod transcript;

pub use position::{AccountSummary, Feasibility, PerformanceMetrics, Position};
pub use quote::Quote;
pub use trade::{Side, Trade, TradeOrder, TradeRejection, TradeResult, TradeStatus};
pub use transcript::{DiscussionOutcome, DiscussionRequest, Transcript, Turn};

/// Normalize a ticker symbol for lookups.
///
/// All position and quote lookups go through this so `"aapl"` and `"AAPL"`
/// address the same holding.
pub fn normalize_symbol(symbol: &str) -> String {
    symbol.trim().to_uppercase()
}
