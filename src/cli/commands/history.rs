//! Trade history command implementation.

use anyhow::Result;
use std::path::Path;

use crate::cli::HistoryArgs;
use super::{build_desk, load_config};

pub async fn run(args: HistoryArgs, config_path: &Path) -> Result<()> {
    let config = load_config(config_path)?;
    let (ledger, _, _) = build_desk(&config);

    let window_days = args.days.unwrap_or(config.ledger.history_window_days);
    let trades = ledger.history(window_days);

    if trades.is_empty() {
        println!("No trades in the last {window_days} day(s).");
        return Ok(());
    }

    println!("Trades in the last {window_days} day(s):");
    for trade in trades {
        println!(
            "  {} {:4} {:>10} {:6} @ ${} (${})",
            trade.executed_at.format("%Y-%m-%d %H:%M:%S"),
            trade.side,
            trade.quantity,
            trade.symbol,
            trade.execution_price.round_dp(2),
            trade.total_value.round_dp(2)
        );
    }

    Ok(())
}
