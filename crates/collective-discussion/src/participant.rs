//! Participant trait definition.

use async_trait::async_trait;
use collective_core::error::CollectiveError;
use collective_core::types::Transcript;

use crate::actions::DeskActions;

/// A named discussion participant with a bounded capability set.
///
/// Each turn receives the topic, the transcript so far, and the action
/// surface; it produces the participant's contribution and may mutate the
/// ledger through the actions along the way.
#[async_trait]
pub trait Participant: Send + Sync {
    /// Roster name; oracle selections must match this exactly.
    fn name(&self) -> &str;

    /// One-line description of the participant's role.
    fn description(&self) -> &str;

    /// Produce this participant's contribution for the current round.
    async fn take_turn(
        &self,
        topic: &str,
        transcript: &Transcript,
        actions: &DeskActions,
    ) -> Result<String, CollectiveError>;
}
