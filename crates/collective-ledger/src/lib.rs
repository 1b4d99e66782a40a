//! Transactional simulated ledger.
//!
//! A single shared account (cash, positions, trade history) mutated by
//! atomic trade executions. All read-modify-write of account state happens
//! under one lock acquisition, so concurrent trades serialize and the
//! cash-never-negative and no-oversell invariants hold under contention.

mod account;
mod ledger;

pub use account::Account;
pub use ledger::Ledger;
