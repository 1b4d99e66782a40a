//! Configuration validation command.

use anyhow::{Context, Result};
use std::path::Path;

pub async fn run(config_path: &Path) -> Result<()> {
    let config = super::load_config(config_path).context("Failed to load configuration")?;

    println!("Configuration OK");
    println!("  App:             {} ({})", config.app.name, config.app.environment);
    println!("  Market:          {} (offline: {})", config.market.base_url, config.market.offline);
    println!("  Initial cash:    ${}", config.ledger.initial_cash);
    println!("  Round budget:    {}", config.discussion.default_round_budget);
    println!("  Summary timeout: {}s", config.discussion.summary_timeout_secs);
    println!("  Watchlist:       {}", config.discussion.watchlist.join(", "));

    Ok(())
}
