//! Reference decision oracle.

use async_trait::async_trait;
use collective_core::error::OracleError;
use collective_core::traits::DecisionOracle;
use collective_core::types::Transcript;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Deterministic oracle: cycles through the roster in order, optionally
/// declares completion after a fixed number of turns, and summarizes by
/// concatenating the transcript.
///
/// This is the reference test double; a reasoning-backed oracle is a
/// drop-in replacement behind the same trait.
pub struct RoundRobinOracle {
    cursor: AtomicUsize,
    terminate_after: Option<usize>,
}

impl RoundRobinOracle {
    /// Oracle that never declares completion (runs exhaust their budget).
    pub fn new() -> Self {
        Self {
            cursor: AtomicUsize::new(0),
            terminate_after: None,
        }
    }

    /// Oracle that declares completion once the transcript reaches `turns`.
    pub fn terminating_after(turns: usize) -> Self {
        Self {
            cursor: AtomicUsize::new(0),
            terminate_after: Some(turns),
        }
    }
}

impl Default for RoundRobinOracle {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl DecisionOracle for RoundRobinOracle {
    async fn select_next(
        &self,
        _topic: &str,
        _transcript: &Transcript,
        roster: &[String],
    ) -> Result<String, OracleError> {
        if roster.is_empty() {
            return Err(OracleError::MalformedDecision(
                "cannot select from an empty roster".to_string(),
            ));
        }
        let index = self.cursor.fetch_add(1, Ordering::SeqCst) % roster.len();
        Ok(roster[index].clone())
    }

    async fn should_terminate(
        &self,
        _topic: &str,
        transcript: &Transcript,
    ) -> Result<bool, OracleError> {
        Ok(self
            .terminate_after
            .map(|turns| transcript.len() >= turns)
            .unwrap_or(false))
    }

    async fn summarize(&self, topic: &str, transcript: &Transcript) -> Result<String, OracleError> {
        Ok(format!(
            "Discussion on '{topic}' concluded after {} turn(s).\n{}",
            transcript.len(),
            transcript.render()
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use collective_core::types::Turn;

    fn roster() -> Vec<String> {
        vec!["A".to_string(), "B".to_string(), "C".to_string()]
    }

    #[tokio::test]
    async fn test_selection_cycles() {
        let oracle = RoundRobinOracle::new();
        let transcript = Transcript::new();
        let roster = roster();

        let mut picks = Vec::new();
        for _ in 0..4 {
            picks.push(oracle.select_next("t", &transcript, &roster).await.unwrap());
        }
        assert_eq!(picks, vec!["A", "B", "C", "A"]);
    }

    #[tokio::test]
    async fn test_terminates_after_fixed_turns() {
        let oracle = RoundRobinOracle::terminating_after(2);
        let mut transcript = Transcript::new();

        assert!(!oracle.should_terminate("t", &transcript).await.unwrap());
        transcript.push(Turn::new("A", "one"));
        assert!(!oracle.should_terminate("t", &transcript).await.unwrap());
        transcript.push(Turn::new("B", "two"));
        assert!(oracle.should_terminate("t", &transcript).await.unwrap());
    }

    #[tokio::test]
    async fn test_summary_contains_transcript() {
        let oracle = RoundRobinOracle::new();
        let mut transcript = Transcript::new();
        transcript.push(Turn::new("A", "buy AAPL"));

        let summary = oracle.summarize("daily check", &transcript).await.unwrap();
        assert!(summary.contains("daily check"));
        assert!(summary.contains("A: buy AAPL"));
    }

    #[tokio::test]
    async fn test_empty_roster_is_error() {
        let oracle = RoundRobinOracle::new();
        let result = oracle.select_next("t", &Transcript::new(), &[]).await;
        assert!(result.is_err());
    }
}
