//! Market quote types.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A point-in-time price snapshot for a symbol.
///
/// Quotes are ephemeral: every use fetches a fresh one, nothing is persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Quote {
    /// Upper-cased ticker symbol
    pub symbol: String,
    /// Current market price
    pub price: Decimal,
    /// Change from previous close
    pub change: Decimal,
    /// Change from previous close as a percentage
    pub change_percent: Decimal,
    /// Traded volume
    pub volume: i64,
    /// When the quote was taken
    pub as_of: DateTime<Utc>,
}

impl Quote {
    /// Create a quote from a price and previous close, deriving the change fields.
    pub fn from_prices(
        symbol: impl Into<String>,
        price: Decimal,
        previous_close: Decimal,
        volume: i64,
    ) -> Self {
        let change = price - previous_close;
        let change_percent = if previous_close.is_zero() {
            Decimal::ZERO
        } else {
            change / previous_close * Decimal::from(100)
        };

        Self {
            symbol: symbol.into(),
            price,
            change,
            change_percent,
            volume,
            as_of: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_quote_from_prices() {
        let quote = Quote::from_prices("AAPL", dec!(110), dec!(100), 1_000_000);
        assert_eq!(quote.change, dec!(10));
        assert_eq!(quote.change_percent, dec!(10));
    }

    #[test]
    fn test_quote_zero_previous_close() {
        let quote = Quote::from_prices("NEW", dec!(5), Decimal::ZERO, 0);
        assert_eq!(quote.change_percent, Decimal::ZERO);
    }
}
