//! Market data providers.
//!
//! Implementations of the `QuoteProvider` trait: a Yahoo Finance HTTP
//! provider for live quotes and a fixed in-memory provider for tests and
//! offline runs.

mod fixed;
mod yahoo;

pub use fixed::FixedProvider;
pub use yahoo::YahooProvider;
