//! Discussion transcript types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One participant turn in a discussion.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Turn {
    /// Name of the participant who spoke
    pub speaker: String,
    /// What was said
    pub content: String,
    /// When the turn was produced
    pub timestamp: DateTime<Utc>,
}

impl Turn {
    /// Create a turn timestamped now.
    pub fn new(speaker: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            speaker: speaker.into(),
            content: content.into(),
            timestamp: Utc::now(),
        }
    }
}

/// Append-only ordered record of a discussion.
///
/// The full transcript is the sole input to speaker selection, termination,
/// and summarization decisions. Turns are never edited or removed.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Transcript {
    turns: Vec<Turn>,
}

impl Transcript {
    /// Create an empty transcript.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a turn.
    pub fn push(&mut self, turn: Turn) {
        self.turns.push(turn);
    }

    /// All turns in chronological order.
    pub fn turns(&self) -> &[Turn] {
        &self.turns
    }

    /// Number of turns so far.
    pub fn len(&self) -> usize {
        self.turns.len()
    }

    /// Check whether anyone has spoken yet.
    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }

    /// The most recent turn, if any.
    pub fn last(&self) -> Option<&Turn> {
        self.turns.last()
    }

    /// Render the transcript as `speaker: content` lines.
    pub fn render(&self) -> String {
        self.turns
            .iter()
            .map(|turn| format!("{}: {}", turn.speaker, turn.content))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// A client request to run a discussion.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiscussionRequest {
    /// What the participants should discuss
    pub topic: String,
    /// Maximum number of rounds before forced termination; must be > 0
    pub round_budget: u32,
}

/// Final result of a discussion run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiscussionOutcome {
    /// Oracle-synthesized summary of the discussion
    pub result: String,
    /// Rounds actually used
    pub rounds_used: u32,
    /// True if the oracle declared completion, false if the budget ran out
    pub terminated_by_oracle: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transcript_append_order() {
        let mut transcript = Transcript::new();
        assert!(transcript.is_empty());

        transcript.push(Turn::new("Analyst", "AAPL looks strong"));
        transcript.push(Turn::new("Trader", "Buying 10 shares"));

        assert_eq!(transcript.len(), 2);
        assert_eq!(transcript.turns()[0].speaker, "Analyst");
        assert_eq!(transcript.last().unwrap().speaker, "Trader");
    }

    #[test]
    fn test_transcript_render() {
        let mut transcript = Transcript::new();
        transcript.push(Turn::new("A", "one"));
        transcript.push(Turn::new("B", "two"));

        assert_eq!(transcript.render(), "A: one\nB: two");
    }
}
