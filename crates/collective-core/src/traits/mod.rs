//! Core trait definitions.

mod oracle;
mod quote_provider;

pub use oracle::DecisionOracle;
pub use quote_provider::QuoteProvider;
