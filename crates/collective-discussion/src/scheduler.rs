//! Round-bounded discussion scheduler.

use collective_core::error::DiscussionError;
use collective_core::traits::DecisionOracle;
use collective_core::types::{DiscussionOutcome, DiscussionRequest, Transcript, Turn};
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

use crate::actions::DeskActions;
use crate::registry::ParticipantRegistry;

/// Lifecycle of a discussion run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RunState {
    Idle,
    Running,
    Terminated,
    Exhausted,
    Summarized,
}

/// Drives the round loop: select a speaker, invoke it, append the turn,
/// check termination, and finally summarize. All decisions are delegated
/// to the oracle; the scheduler only enforces the contract and the bounds.
pub struct DiscussionScheduler {
    oracle: Arc<dyn DecisionOracle>,
    registry: ParticipantRegistry,
    actions: DeskActions,
    summary_timeout: Duration,
}

impl DiscussionScheduler {
    /// Create a scheduler over a roster and action surface.
    pub fn new(
        oracle: Arc<dyn DecisionOracle>,
        registry: ParticipantRegistry,
        actions: DeskActions,
        summary_timeout: Duration,
    ) -> Self {
        Self {
            oracle,
            registry,
            actions,
            summary_timeout,
        }
    }

    /// Run a discussion to completion.
    ///
    /// Ends when the oracle declares completion, the round budget is
    /// exhausted (a valid bounded outcome, not an error), or the run is
    /// cancelled. An oracle selection outside the roster is a hard contract
    /// violation; the run fails rather than coercing the name.
    pub async fn run(
        &self,
        request: DiscussionRequest,
        cancel: CancellationToken,
    ) -> Result<DiscussionOutcome, DiscussionError> {
        if request.round_budget == 0 {
            return Err(DiscussionError::InvalidRoundBudget(request.round_budget));
        }
        if self.registry.is_empty() {
            return Err(DiscussionError::EmptyRoster);
        }

        let topic = request.topic.as_str();
        let roster = self.registry.roster();
        let mut transcript = Transcript::new();
        let mut rounds_used: u32 = 0;
        let mut state = RunState::Idle;
        debug!(?state, "Run created");

        info!(
            %topic,
            round_budget = request.round_budget,
            roster = ?roster,
            "Starting discussion"
        );
        state = RunState::Running;

        while rounds_used < request.round_budget {
            if cancel.is_cancelled() {
                return Err(DiscussionError::Cancelled);
            }

            let speaker = guarded(&cancel, async {
                self.oracle
                    .select_next(topic, &transcript, &roster)
                    .await
                    .map_err(DiscussionError::from)
            })
            .await?;

            let participant = self.registry.get(&speaker).ok_or_else(|| {
                DiscussionError::OracleContract {
                    selected: speaker.clone(),
                    roster: roster.join(", "),
                }
            })?;

            debug!(%speaker, round = rounds_used + 1, "Speaker selected");

            let content = guarded(&cancel, async {
                participant
                    .take_turn(topic, &transcript, &self.actions)
                    .await
                    .map_err(|e| DiscussionError::ParticipantFailed {
                        name: speaker.clone(),
                        reason: e.to_string(),
                    })
            })
            .await?;

            transcript.push(Turn::new(speaker.clone(), content));
            rounds_used += 1;

            let done = guarded(&cancel, async {
                self.oracle
                    .should_terminate(topic, &transcript)
                    .await
                    .map_err(DiscussionError::from)
            })
            .await?;

            if done {
                state = RunState::Terminated;
                debug!(rounds_used, "Oracle declared completion");
                break;
            }
        }

        if state == RunState::Running {
            state = RunState::Exhausted;
            debug!(rounds_used, "Round budget exhausted");
        }
        let terminated_by_oracle = state == RunState::Terminated;

        if cancel.is_cancelled() {
            return Err(DiscussionError::Cancelled);
        }

        let result = tokio::time::timeout(
            self.summary_timeout,
            guarded(&cancel, async {
                self.oracle
                    .summarize(topic, &transcript)
                    .await
                    .map_err(DiscussionError::from)
            }),
        )
        .await
        .map_err(|_| DiscussionError::Timeout(self.summary_timeout))??;

        state = RunState::Summarized;
        info!(rounds_used, terminated_by_oracle, ?state, "Discussion complete");

        Ok(DiscussionOutcome {
            result,
            rounds_used,
            terminated_by_oracle,
        })
    }
}

/// Race a step against cancellation; cancellation wins immediately.
async fn guarded<T, F>(cancel: &CancellationToken, step: F) -> Result<T, DiscussionError>
where
    F: Future<Output = Result<T, DiscussionError>>,
{
    tokio::select! {
        biased;
        _ = cancel.cancelled() => Err(DiscussionError::Cancelled),
        result = step => result,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use collective_core::error::{CollectiveError, OracleError};
    use collective_core::traits::QuoteProvider;
    use collective_core::types::Transcript;
    use collective_ledger::Ledger;
    use collective_market::FixedProvider;
    use rust_decimal_macros::dec;

    use crate::oracle::RoundRobinOracle;
    use crate::participant::Participant;

    struct Echo(&'static str);

    #[async_trait]
    impl Participant for Echo {
        fn name(&self) -> &str {
            self.0
        }

        fn description(&self) -> &str {
            "echoes its own name"
        }

        async fn take_turn(
            &self,
            _topic: &str,
            _transcript: &Transcript,
            _actions: &DeskActions,
        ) -> Result<String, CollectiveError> {
            Ok(format!("{} speaking", self.0))
        }
    }

    /// Oracle that selects a name outside the roster.
    struct RogueOracle;

    #[async_trait]
    impl collective_core::traits::DecisionOracle for RogueOracle {
        async fn select_next(
            &self,
            _topic: &str,
            _transcript: &Transcript,
            _roster: &[String],
        ) -> Result<String, OracleError> {
            Ok("Nobody".to_string())
        }

        async fn should_terminate(
            &self,
            _topic: &str,
            _transcript: &Transcript,
        ) -> Result<bool, OracleError> {
            Ok(false)
        }

        async fn summarize(
            &self,
            _topic: &str,
            _transcript: &Transcript,
        ) -> Result<String, OracleError> {
            Ok(String::new())
        }
    }

    /// Oracle whose summarize never returns.
    struct StallingOracle;

    #[async_trait]
    impl collective_core::traits::DecisionOracle for StallingOracle {
        async fn select_next(
            &self,
            _topic: &str,
            _transcript: &Transcript,
            roster: &[String],
        ) -> Result<String, OracleError> {
            Ok(roster[0].clone())
        }

        async fn should_terminate(
            &self,
            _topic: &str,
            _transcript: &Transcript,
        ) -> Result<bool, OracleError> {
            Ok(true)
        }

        async fn summarize(
            &self,
            _topic: &str,
            _transcript: &Transcript,
        ) -> Result<String, OracleError> {
            futures_never().await
        }
    }

    async fn futures_never() -> Result<String, OracleError> {
        loop {
            tokio::time::sleep(Duration::from_secs(3600)).await;
        }
    }

    fn desk_actions() -> DeskActions {
        let provider: Arc<dyn QuoteProvider> =
            Arc::new(FixedProvider::new([("AAPL".to_string(), dec!(100))]));
        let ledger = Arc::new(Ledger::new(dec!(10000), Arc::clone(&provider)));
        DeskActions::new(ledger, provider)
    }

    fn registry(names: &[&'static str]) -> ParticipantRegistry {
        let mut registry = ParticipantRegistry::new();
        for name in names {
            registry.register(Arc::new(Echo(name)));
        }
        registry
    }

    fn scheduler(
        oracle: Arc<dyn collective_core::traits::DecisionOracle>,
        names: &[&'static str],
    ) -> DiscussionScheduler {
        DiscussionScheduler::new(
            oracle,
            registry(names),
            desk_actions(),
            Duration::from_secs(5),
        )
    }

    fn request(rounds: u32) -> DiscussionRequest {
        DiscussionRequest {
            topic: "daily positioning".to_string(),
            round_budget: rounds,
        }
    }

    #[tokio::test]
    async fn test_round_budget_exhaustion() {
        // Oracle never terminates: exactly N turns, outcome is exhaustion.
        let scheduler = scheduler(Arc::new(RoundRobinOracle::new()), &["A", "B"]);

        let outcome = scheduler
            .run(request(5), CancellationToken::new())
            .await
            .unwrap();

        assert_eq!(outcome.rounds_used, 5);
        assert!(!outcome.terminated_by_oracle);
        assert!(outcome.result.contains("5 turn(s)"));
    }

    #[tokio::test]
    async fn test_early_termination() {
        let scheduler = scheduler(Arc::new(RoundRobinOracle::terminating_after(3)), &["A", "B"]);

        let outcome = scheduler
            .run(request(10), CancellationToken::new())
            .await
            .unwrap();

        assert_eq!(outcome.rounds_used, 3);
        assert!(outcome.terminated_by_oracle);
    }

    #[tokio::test]
    async fn test_oracle_contract_violation_fails_run() {
        let scheduler = scheduler(Arc::new(RogueOracle), &["A", "B"]);

        let result = scheduler.run(request(3), CancellationToken::new()).await;
        assert!(matches!(
            result,
            Err(DiscussionError::OracleContract { .. })
        ));
    }

    #[tokio::test]
    async fn test_zero_round_budget_rejected() {
        let scheduler = scheduler(Arc::new(RoundRobinOracle::new()), &["A"]);

        let result = scheduler.run(request(0), CancellationToken::new()).await;
        assert!(matches!(
            result,
            Err(DiscussionError::InvalidRoundBudget(0))
        ));
    }

    #[tokio::test]
    async fn test_empty_roster_rejected() {
        let scheduler = DiscussionScheduler::new(
            Arc::new(RoundRobinOracle::new()),
            ParticipantRegistry::new(),
            desk_actions(),
            Duration::from_secs(5),
        );

        let result = scheduler.run(request(3), CancellationToken::new()).await;
        assert!(matches!(result, Err(DiscussionError::EmptyRoster)));
    }

    #[tokio::test]
    async fn test_pre_cancelled_run_stops_immediately() {
        let scheduler = scheduler(Arc::new(RoundRobinOracle::new()), &["A"]);

        let cancel = CancellationToken::new();
        cancel.cancel();

        let result = scheduler.run(request(3), cancel).await;
        assert!(matches!(result, Err(DiscussionError::Cancelled)));
    }

    #[tokio::test]
    async fn test_summary_timeout_is_distinct_failure() {
        let scheduler = DiscussionScheduler::new(
            Arc::new(StallingOracle),
            registry(&["A"]),
            desk_actions(),
            Duration::from_millis(50),
        );

        let result = scheduler.run(request(1), CancellationToken::new()).await;
        assert!(matches!(result, Err(DiscussionError::Timeout(_))));
    }

    #[tokio::test]
    async fn test_round_robin_speakers_alternate() {
        let scheduler = scheduler(Arc::new(RoundRobinOracle::new()), &["A", "B"]);

        let outcome = scheduler
            .run(request(4), CancellationToken::new())
            .await
            .unwrap();

        // Concatenated summary reflects alternating speakers.
        let positions: Vec<usize> = ["A speaking", "B speaking"]
            .iter()
            .map(|needle| outcome.result.find(needle).unwrap())
            .collect();
        assert!(positions[0] < positions[1]);
    }
}
