//! Error types for the discussion engine and ledger.

use std::time::Duration;
use thiserror::Error;

/// Top-level error for the collective system.
#[derive(Error, Debug)]
pub enum CollectiveError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Ledger error: {0}")]
    Ledger(#[from] LedgerError),

    #[error("Quote error: {0}")]
    Quote(#[from] QuoteError),

    #[error("Discussion error: {0}")]
    Discussion(#[from] DiscussionError),

    #[error("Oracle error: {0}")]
    Oracle(#[from] OracleError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Ledger-specific errors.
///
/// Business-rule rejections (insufficient funds or shares, invalid quantity)
/// are not errors; they are reported as `TradeResult::Rejected` values and
/// leave the account untouched. Only infrastructure failures surface here.
#[derive(Error, Debug)]
pub enum LedgerError {
    #[error("Quote unavailable for {symbol}: {source}")]
    QuoteUnavailable {
        symbol: String,
        #[source]
        source: QuoteError,
    },
}

/// Quote provider errors.
#[derive(Error, Debug)]
pub enum QuoteError {
    #[error("Symbol not found: {0}")]
    SymbolNotFound(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Provider error: {0}")]
    Provider(String),
}

/// Decision oracle errors.
#[derive(Error, Debug)]
pub enum OracleError {
    #[error("Oracle unavailable: {0}")]
    Unavailable(String),

    #[error("Malformed oracle decision: {0}")]
    MalformedDecision(String),
}

/// Discussion run errors.
#[derive(Error, Debug)]
pub enum DiscussionError {
    #[error("Invalid round budget: {0} (must be > 0)")]
    InvalidRoundBudget(u32),

    #[error("Roster is empty")]
    EmptyRoster,

    #[error("Oracle contract violation: selected '{selected}' which is not in the roster [{roster}]")]
    OracleContract { selected: String, roster: String },

    #[error("Oracle error: {0}")]
    Oracle(#[from] OracleError),

    #[error("Participant '{name}' failed: {reason}")]
    ParticipantFailed { name: String, reason: String },

    #[error("Discussion cancelled")]
    Cancelled,

    #[error("Discussion timed out after {0:?}")]
    Timeout(Duration),
}

/// Result type alias for collective operations.
pub type CollectiveResult<T> = Result<T, CollectiveError>;
