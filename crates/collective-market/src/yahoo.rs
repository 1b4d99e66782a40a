//! Yahoo Finance quote provider.

use async_trait::async_trait;
use collective_core::error::QuoteError;
use collective_core::traits::QuoteProvider;
use collective_core::types::{normalize_symbol, Quote};
use futures::future::join_all;
use rust_decimal::Decimal;
use serde_json::Value;
use tracing::warn;

const DEFAULT_BASE_URL: &str = "https://query1.finance.yahoo.com";

/// Quote provider backed by the public Yahoo Finance endpoints.
pub struct YahooProvider {
    client: reqwest::Client,
    base_url: String,
}

impl YahooProvider {
    /// Create a provider against the default Yahoo endpoints.
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    /// Create a provider against a custom base URL (for proxies and tests).
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    async fn fetch_json(&self, url: &str, query: &[(&str, &str)]) -> Result<Value, QuoteError> {
        let response = self
            .client
            .get(url)
            .query(query)
            .header("User-Agent", "collective/0.1")
            .send()
            .await
            .map_err(|e| QuoteError::Network(e.to_string()))?;

        if !response.status().is_success() {
            return Err(QuoteError::Provider(format!(
                "HTTP {} from {url}",
                response.status()
            )));
        }

        response
            .json::<Value>()
            .await
            .map_err(|e| QuoteError::Parse(e.to_string()))
    }

    fn decimal_field(meta: &Value, field: &str) -> Result<Decimal, QuoteError> {
        let value = meta
            .get(field)
            .and_then(Value::as_f64)
            .ok_or_else(|| QuoteError::Parse(format!("missing field '{field}'")))?;
        Decimal::try_from(value).map_err(|e| QuoteError::Parse(e.to_string()))
    }
}

impl Default for YahooProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl QuoteProvider for YahooProvider {
    async fn get_quote(&self, symbol: &str) -> Result<Quote, QuoteError> {
        let symbol = normalize_symbol(symbol);
        let url = format!("{}/v8/finance/chart/{symbol}", self.base_url);
        let data = self.fetch_json(&url, &[]).await?;

        let meta = data
            .pointer("/chart/result/0/meta")
            .ok_or_else(|| QuoteError::SymbolNotFound(symbol.clone()))?;

        let price = Self::decimal_field(meta, "regularMarketPrice")?;
        let previous_close = Self::decimal_field(meta, "previousClose")?;
        let volume = meta
            .get("regularMarketVolume")
            .and_then(Value::as_i64)
            .unwrap_or(0);

        Ok(Quote::from_prices(symbol, price, previous_close, volume))
    }

    async fn get_quotes(&self, symbols: &[String]) -> Vec<Quote> {
        let fetches = symbols.iter().map(|symbol| self.get_quote(symbol));
        join_all(fetches)
            .await
            .into_iter()
            .zip(symbols)
            .filter_map(|(result, symbol)| match result {
                Ok(quote) => Some(quote),
                Err(error) => {
                    warn!(%symbol, %error, "Dropping failed quote from batch");
                    None
                }
            })
            .collect()
    }

    async fn search_symbols(&self, query: &str) -> Result<Vec<String>, QuoteError> {
        let url = format!("{}/v1/finance/search", self.base_url);

        // Search degrades to an empty list rather than failing callers.
        let data = match self.fetch_json(&url, &[("q", query)]).await {
            Ok(data) => data,
            Err(error) => {
                warn!(%query, %error, "Symbol search failed");
                return Ok(Vec::new());
            }
        };

        Ok(extract_symbols(data.get("quotes"), 10))
    }

    async fn trending(&self) -> Result<Vec<String>, QuoteError> {
        let url = format!("{}/v1/finance/trending/US", self.base_url);

        let data = match self.fetch_json(&url, &[]).await {
            Ok(data) => data,
            Err(error) => {
                warn!(%error, "Trending lookup failed");
                return Ok(Vec::new());
            }
        };

        Ok(extract_symbols(
            data.pointer("/finance/result/0/quotes"),
            20,
        ))
    }

    fn name(&self) -> &str {
        "Yahoo Finance"
    }
}

fn extract_symbols(quotes: Option<&Value>, limit: usize) -> Vec<String> {
    quotes
        .and_then(Value::as_array)
        .map(|entries| {
            entries
                .iter()
                .filter_map(|entry| entry.get("symbol").and_then(Value::as_str))
                .map(normalize_symbol)
                .take(limit)
                .collect()
        })
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_extract_symbols() {
        let data = json!([
            {"symbol": "aapl"},
            {"noSymbol": true},
            {"symbol": "MSFT"},
            {"symbol": "GOOG"},
        ]);

        let symbols = extract_symbols(Some(&data), 2);
        assert_eq!(symbols, vec!["AAPL", "MSFT"]);
    }

    #[test]
    fn test_extract_symbols_missing() {
        assert!(extract_symbols(None, 10).is_empty());
    }
}
