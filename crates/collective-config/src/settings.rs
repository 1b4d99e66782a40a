//! Configuration structures.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Main application configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub app: AppSettings,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub market: MarketSettings,
    #[serde(default)]
    pub ledger: LedgerSettings,
    #[serde(default)]
    pub discussion: DiscussionSettings,
}

/// General app settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppSettings {
    pub name: String,
    pub environment: String,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            name: "collective".to_string(),
            environment: "development".to_string(),
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
        }
    }
}

/// Market data settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarketSettings {
    /// Base URL for the quote provider
    pub base_url: String,
    /// Use the fixed offline provider instead of live quotes
    pub offline: bool,
}

impl Default for MarketSettings {
    fn default() -> Self {
        Self {
            base_url: "https://query1.finance.yahoo.com".to_string(),
            offline: false,
        }
    }
}

/// Desk ledger settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LedgerSettings {
    /// Cash the account opens with
    pub initial_cash: Decimal,
    /// Default trade-history window in days
    pub history_window_days: u32,
}

impl Default for LedgerSettings {
    fn default() -> Self {
        use rust_decimal_macros::dec;
        Self {
            initial_cash: dec!(10000),
            history_window_days: 30,
        }
    }
}

/// Discussion run settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiscussionSettings {
    /// Default round budget when the caller does not supply one
    pub default_round_budget: u32,
    /// Bound on the final summarization step, in seconds
    pub summary_timeout_secs: u64,
    /// Watchlist handed to the built-in participants
    pub watchlist: Vec<String>,
}

impl Default for DiscussionSettings {
    fn default() -> Self {
        Self {
            default_round_budget: 5,
            summary_timeout_secs: 60,
            watchlist: vec!["AAPL".to_string(), "MSFT".to_string(), "NVDA".to_string()],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.ledger.initial_cash, dec!(10000));
        assert_eq!(config.discussion.default_round_budget, 5);
        assert!(!config.market.offline);
    }

    #[test]
    fn test_toml_roundtrip() {
        let config = AppConfig::default();
        let rendered = toml::to_string(&config).unwrap();
        let parsed: AppConfig = toml::from_str(&rendered).unwrap();
        assert_eq!(parsed.ledger.history_window_days, 30);
    }
}
