//! Configuration management.

mod settings;

pub use settings::{
    AppConfig, AppSettings, DiscussionSettings, LedgerSettings, LoggingConfig, MarketSettings,
};

use config::{Config, ConfigError, Environment, File};
use std::path::Path;

/// Load configuration from file and environment.
///
/// Environment variables prefixed with `COLLECTIVE__` override file values,
/// e.g. `COLLECTIVE__LEDGER__INITIAL_CASH=25000`.
pub fn load_config(path: &Path) -> Result<AppConfig, ConfigError> {
    let config = Config::builder()
        .add_source(File::from(path).required(true))
        .add_source(
            Environment::with_prefix("COLLECTIVE")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    config.try_deserialize()
}

/// Configuration defaults without reading any file.
pub fn default_config() -> AppConfig {
    AppConfig::default()
}
