//! Collective CLI application.

mod cli;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Commands};
use collective_monitor::setup_logging;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Setup logging
    let log_level = match cli.log_level {
        cli::LogLevel::Trace => "trace",
        cli::LogLevel::Debug => "debug",
        cli::LogLevel::Info => "info",
        cli::LogLevel::Warn => "warn",
        cli::LogLevel::Error => "error",
    };
    let format = if cli.json_logs { "json" } else { "pretty" };
    setup_logging(log_level, format);

    // Execute command
    match cli.command {
        Commands::Discuss(args) => cli::commands::discuss::run(args, &cli.config).await,
        Commands::Portfolio => cli::commands::portfolio::run(&cli.config).await,
        Commands::History(args) => cli::commands::history::run(args, &cli.config).await,
        Commands::Quote(args) => cli::commands::quote::run(args, &cli.config).await,
        Commands::ValidateConfig => cli::commands::validate::run(&cli.config).await,
    }
}
