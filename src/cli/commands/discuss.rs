//! Discussion command implementation.

use anyhow::{Context, Result};
use collective_discussion::{
    DiscussionScheduler, ExecutionTrader, MarketAnalyst, ParticipantRegistry, RiskOfficer,
    RoundRobinOracle,
};
use collective_core::types::DiscussionRequest;
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use tracing::info;

use crate::cli::DiscussArgs;
use super::{build_desk, load_config};

pub async fn run(args: DiscussArgs, config_path: &Path) -> Result<()> {
    let config = load_config(config_path)?;
    let (_, _, actions) = build_desk(&config);

    let mut registry = ParticipantRegistry::new();
    registry.register(Arc::new(MarketAnalyst::new(
        config.discussion.watchlist.clone(),
    )));
    registry.register(Arc::new(RiskOfficer::new()));
    if let Some(symbol) = config.discussion.watchlist.first() {
        registry.register(Arc::new(ExecutionTrader::new(symbol.clone())));
    }

    if args.output != "json" {
        println!("Desk roster:");
        for (name, description) in registry.descriptions() {
            println!("  {name}: {description}");
        }
        println!();
    }

    let round_budget = args
        .rounds
        .unwrap_or(config.discussion.default_round_budget);

    let scheduler = DiscussionScheduler::new(
        Arc::new(RoundRobinOracle::terminating_after(registry.len() * 2)),
        registry,
        actions,
        Duration::from_secs(config.discussion.summary_timeout_secs),
    );

    let cancel = CancellationToken::new();
    if let Some(secs) = args.cancel_after {
        let cancel = cancel.clone();
        tokio::spawn(async move {
            tokio::time::sleep(Duration::from_secs(secs)).await;
            info!("Cancelling discussion run");
            cancel.cancel();
        });
    }

    let request = DiscussionRequest {
        topic: args.topic,
        round_budget,
    };

    let outcome = scheduler
        .run(request, cancel)
        .await
        .context("Discussion run failed")?;

    match args.output.as_str() {
        "json" => println!("{}", serde_json::to_string_pretty(&outcome)?),
        _ => {
            println!("{}", outcome.result);
            println!(
                "\nRounds used: {} ({})",
                outcome.rounds_used,
                if outcome.terminated_by_oracle {
                    "concluded by oracle"
                } else {
                    "round budget exhausted"
                }
            );
        }
    }

    Ok(())
}
