//! Quote command implementation.

use anyhow::Result;
use std::path::Path;

use crate::cli::QuoteArgs;
use super::{build_desk, load_config};

pub async fn run(args: QuoteArgs, config_path: &Path) -> Result<()> {
    let config = load_config(config_path)?;
    let (_, provider, _) = build_desk(&config);

    if args.symbols.is_empty() {
        anyhow::bail!("Provide at least one symbol, e.g. `collective quote AAPL,MSFT`");
    }

    let quotes = provider.get_quotes(&args.symbols).await;
    if quotes.is_empty() {
        anyhow::bail!("No quotes available for the requested symbols");
    }

    for quote in &quotes {
        println!(
            "{:6} ${:>10} {:>8}% vol {}",
            quote.symbol,
            quote.price.round_dp(2),
            quote.change_percent.round_dp(2),
            quote.volume
        );
    }

    if quotes.len() < args.symbols.len() {
        eprintln!(
            "Note: {} symbol(s) had no quote available.",
            args.symbols.len() - quotes.len()
        );
    }

    Ok(())
}
