//! Fixed-price quote provider for tests and offline runs.

use async_trait::async_trait;
use collective_core::error::QuoteError;
use collective_core::traits::QuoteProvider;
use collective_core::types::{normalize_symbol, Quote};
use futures::future::join_all;
use rust_decimal::Decimal;
use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

/// Deterministic quote provider backed by an in-memory price table.
///
/// Prices can be repriced mid-test and individual symbols can be forced to
/// fail, to exercise the degraded-valuation paths.
#[derive(Default)]
pub struct FixedProvider {
    prices: Mutex<HashMap<String, Decimal>>,
    failing: Mutex<HashSet<String>>,
    calls: AtomicUsize,
}

impl FixedProvider {
    /// Create a provider from symbol/price pairs.
    pub fn new(prices: impl IntoIterator<Item = (String, Decimal)>) -> Self {
        Self {
            prices: Mutex::new(
                prices
                    .into_iter()
                    .map(|(symbol, price)| (normalize_symbol(&symbol), price))
                    .collect(),
            ),
            failing: Mutex::new(HashSet::new()),
            calls: AtomicUsize::new(0),
        }
    }

    /// Set or update a symbol's price.
    pub fn set_price(&self, symbol: &str, price: Decimal) {
        self.prices
            .lock()
            .unwrap()
            .insert(normalize_symbol(symbol), price);
    }

    /// Force all subsequent quotes for a symbol to fail.
    pub fn fail_symbol(&self, symbol: &str) {
        self.failing.lock().unwrap().insert(normalize_symbol(symbol));
    }

    /// Number of `get_quote` calls made so far.
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl QuoteProvider for FixedProvider {
    async fn get_quote(&self, symbol: &str) -> Result<Quote, QuoteError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let symbol = normalize_symbol(symbol);

        if self.failing.lock().unwrap().contains(&symbol) {
            return Err(QuoteError::Provider(format!("forced failure for {symbol}")));
        }

        let price = self
            .prices
            .lock()
            .unwrap()
            .get(&symbol)
            .copied()
            .ok_or_else(|| QuoteError::SymbolNotFound(symbol.clone()))?;

        Ok(Quote::from_prices(symbol, price, price, 0))
    }

    async fn get_quotes(&self, symbols: &[String]) -> Vec<Quote> {
        let fetches = symbols.iter().map(|symbol| self.get_quote(symbol));
        join_all(fetches)
            .await
            .into_iter()
            .filter_map(Result::ok)
            .collect()
    }

    async fn search_symbols(&self, query: &str) -> Result<Vec<String>, QuoteError> {
        let query = normalize_symbol(query);
        Ok(self
            .prices
            .lock()
            .unwrap()
            .keys()
            .filter(|symbol| symbol.contains(&query))
            .cloned()
            .collect())
    }

    async fn trending(&self) -> Result<Vec<String>, QuoteError> {
        let mut symbols: Vec<String> = self.prices.lock().unwrap().keys().cloned().collect();
        symbols.sort();
        Ok(symbols)
    }

    fn name(&self) -> &str {
        "Fixed"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[tokio::test]
    async fn test_get_quote() {
        let provider = FixedProvider::new([("aapl".to_string(), dec!(150))]);

        let quote = provider.get_quote("AAPL").await.unwrap();
        assert_eq!(quote.symbol, "AAPL");
        assert_eq!(quote.price, dec!(150));
        assert_eq!(provider.call_count(), 1);
    }

    #[tokio::test]
    async fn test_unknown_symbol() {
        let provider = FixedProvider::default();
        let result = provider.get_quote("GHOST").await;
        assert!(matches!(result, Err(QuoteError::SymbolNotFound(_))));
    }

    #[tokio::test]
    async fn test_batch_partial_results() {
        let provider = FixedProvider::new([
            ("AAPL".to_string(), dec!(150)),
            ("MSFT".to_string(), dec!(300)),
        ]);
        provider.fail_symbol("MSFT");

        let symbols = vec![
            "AAPL".to_string(),
            "MSFT".to_string(),
            "GHOST".to_string(),
        ];
        let quotes = provider.get_quotes(&symbols).await;

        assert_eq!(quotes.len(), 1);
        assert_eq!(quotes[0].symbol, "AAPL");
    }

    #[tokio::test]
    async fn test_repricing() {
        let provider = FixedProvider::new([("X".to_string(), dec!(100))]);
        provider.set_price("x", dec!(120));

        let quote = provider.get_quote("X").await.unwrap();
        assert_eq!(quote.price, dec!(120));
    }
}
