//! CLI definitions.

pub mod commands;

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "collective")]
#[command(author, version, about = "Multi-agent discussion engine over a simulated trading desk")]
pub struct Cli {
    /// Configuration file path
    #[arg(short, long, default_value = "config/default.toml")]
    pub config: PathBuf,

    /// Log level
    #[arg(short, long, default_value = "info")]
    pub log_level: LogLevel,

    /// Enable JSON log format
    #[arg(long)]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Clone, ValueEnum)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run a desk discussion on a topic
    Discuss(DiscussArgs),
    /// Show the account summary and open positions
    Portfolio,
    /// Show recent trade history
    History(HistoryArgs),
    /// Fetch quotes for symbols
    Quote(QuoteArgs),
    /// Validate configuration
    ValidateConfig,
}

#[derive(clap::Args)]
pub struct DiscussArgs {
    /// Topic for the desk to discuss
    pub topic: String,

    /// Maximum rounds before forced termination
    #[arg(short, long)]
    pub rounds: Option<u32>,

    /// Cancel the run after this many seconds (for abort testing)
    #[arg(long)]
    pub cancel_after: Option<u64>,

    /// Output format (text, json)
    #[arg(long, default_value = "text")]
    pub output: String,
}

#[derive(clap::Args)]
pub struct HistoryArgs {
    /// History window in days
    #[arg(short, long)]
    pub days: Option<u32>,
}

#[derive(clap::Args)]
pub struct QuoteArgs {
    /// Symbols to quote (comma-separated)
    #[arg(value_delimiter = ',')]
    pub symbols: Vec<String>,
}
