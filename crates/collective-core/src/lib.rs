//! Core types and traits for the collective discussion engine.
//!
//! This crate provides the foundational building blocks including:
//! - Market data types (Quote)
//! - Trade and position types for the simulated ledger
//! - Transcript types for discussion runs
//! - Core traits for quote providers and decision oracles

pub mod error;
pub mod traits;
pub mod types;

pub use error::{CollectiveError, CollectiveResult};
pub use traits::*;
pub use types::*;
