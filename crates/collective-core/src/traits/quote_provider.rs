//! Quote provider trait definition.

use crate::error::QuoteError;
use crate::types::Quote;
use async_trait::async_trait;

/// Trait for market data providers.
///
/// Latency and availability are outside the core's control; callers are
/// expected to degrade gracefully when a quote is unavailable.
#[async_trait]
pub trait QuoteProvider: Send + Sync {
    /// Fetch a fresh quote for one symbol.
    ///
    /// # Arguments
    /// * `symbol` - The symbol to quote; providers normalize the case
    async fn get_quote(&self, symbol: &str) -> Result<Quote, QuoteError>;

    /// Fetch quotes for several symbols, best-effort.
    ///
    /// Fetches fan out independently; one symbol failing never fails the
    /// batch. Failed symbols are simply absent from the result.
    async fn get_quotes(&self, symbols: &[String]) -> Vec<Quote>;

    /// Search for symbols matching a query.
    async fn search_symbols(&self, query: &str) -> Result<Vec<String>, QuoteError>;

    /// Get currently trending symbols.
    async fn trending(&self) -> Result<Vec<String>, QuoteError>;

    /// Get the provider name.
    fn name(&self) -> &str;
}
