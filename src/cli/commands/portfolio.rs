//! Portfolio command implementation.

use anyhow::Result;
use std::path::Path;

use super::{build_desk, load_config};

pub async fn run(config_path: &Path) -> Result<()> {
    let config = load_config(config_path)?;
    let (ledger, _, _) = build_desk(&config);

    let summary = ledger.summary().await;

    println!("Account Summary");
    println!("  Total value:   ${}", summary.total_value.round_dp(2));
    println!("  Cash balance:  ${}", summary.cash_balance.round_dp(2));
    println!(
        "  Total return:  ${} ({}%)",
        summary.total_return.round_dp(2),
        summary.total_return_percent.round_dp(2)
    );
    println!("  Positions:     {}", summary.position_count);

    let positions = ledger.positions();
    if !positions.is_empty() {
        println!("\nOpen Positions");
        let mut symbols: Vec<&String> = positions.keys().collect();
        symbols.sort();
        for symbol in symbols {
            let position = &positions[symbol];
            println!(
                "  {:6} {:>10} @ ${}",
                position.symbol,
                position.quantity,
                position.average_price.round_dp(2)
            );
        }
    }

    Ok(())
}
