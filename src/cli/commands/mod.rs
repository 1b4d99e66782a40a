//! Command implementations.

pub mod discuss;
pub mod history;
pub mod portfolio;
pub mod quote;
pub mod validate;

use anyhow::Result;
use collective_config::AppConfig;
use collective_core::traits::QuoteProvider;
use collective_discussion::DeskActions;
use collective_ledger::Ledger;
use collective_market::{FixedProvider, YahooProvider};
use rust_decimal_macros::dec;
use std::path::Path;
use std::sync::Arc;
use tracing::debug;

/// Load configuration, falling back to defaults when no file exists.
pub fn load_config(path: &Path) -> Result<AppConfig> {
    if path.exists() {
        Ok(collective_config::load_config(path)?)
    } else {
        debug!(path = %path.display(), "Config file not found, using defaults");
        Ok(collective_config::default_config())
    }
}

/// Wire up the quote provider, ledger, and action surface from config.
pub fn build_desk(config: &AppConfig) -> (Arc<Ledger>, Arc<dyn QuoteProvider>, DeskActions) {
    let provider: Arc<dyn QuoteProvider> = if config.market.offline {
        Arc::new(FixedProvider::new(
            config
                .discussion
                .watchlist
                .iter()
                .map(|symbol| (symbol.clone(), dec!(100))),
        ))
    } else {
        Arc::new(YahooProvider::with_base_url(&config.market.base_url))
    };

    let ledger = Arc::new(Ledger::new(
        config.ledger.initial_cash,
        Arc::clone(&provider),
    ));
    let actions = DeskActions::new(Arc::clone(&ledger), Arc::clone(&provider));

    (ledger, provider, actions)
}
