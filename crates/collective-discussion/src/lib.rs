//! Round-bounded discussion scheduler and participants.
//!
//! A discussion run repeatedly asks a pluggable decision oracle to pick the
//! next speaker, lets that participant act against the shared ledger through
//! a bounded action surface, and stops on oracle-declared completion, round
//! budget exhaustion, or cancellation. The oracle then synthesizes the final
//! result from the full transcript.

mod actions;
mod oracle;
mod participant;
mod participants;
mod registry;
mod scheduler;

pub use actions::DeskActions;
pub use oracle::RoundRobinOracle;
pub use participant::Participant;
pub use participants::{ExecutionTrader, MarketAnalyst, RiskOfficer};
pub use registry::ParticipantRegistry;
pub use scheduler::DiscussionScheduler;
