//! Decision oracle trait definition.

use crate::error::OracleError;
use crate::types::Transcript;
use async_trait::async_trait;

/// Pluggable decision-maker driving a discussion run.
///
/// The scheduler consumes three capabilities: speaker selection, termination
/// checking, and final summarization. Each is a pure function of the topic
/// and transcript as far as the scheduler is concerned; any memory between
/// calls is the implementation's own business. A deterministic round-robin
/// implementation is the reference test double; a reasoning-backed
/// implementation is a drop-in replacement satisfying the same contract.
#[async_trait]
pub trait DecisionOracle: Send + Sync {
    /// Pick the next speaker from the roster.
    ///
    /// The returned name must exactly match one roster entry. Anything else
    /// is a contract violation and fails the run.
    async fn select_next(
        &self,
        topic: &str,
        transcript: &Transcript,
        roster: &[String],
    ) -> Result<String, OracleError>;

    /// Decide whether the discussion has reached a conclusion.
    async fn should_terminate(
        &self,
        topic: &str,
        transcript: &Transcript,
    ) -> Result<bool, OracleError>;

    /// Synthesize the final result from the full transcript.
    async fn summarize(&self, topic: &str, transcript: &Transcript) -> Result<String, OracleError>;
}
