//! Explicit participant registry.

use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, warn};

use crate::participant::Participant;

/// Static mapping from participant name to participant, populated at
/// startup. Lookups are exact-match; there is no runtime discovery.
#[derive(Default)]
pub struct ParticipantRegistry {
    order: Vec<String>,
    participants: HashMap<String, Arc<dyn Participant>>,
}

impl ParticipantRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a participant under its own name.
    ///
    /// Re-registering a name replaces the previous participant.
    pub fn register(&mut self, participant: Arc<dyn Participant>) {
        let name = participant.name().to_string();
        if self.participants.insert(name.clone(), participant).is_some() {
            warn!(%name, "Replacing previously registered participant");
        } else {
            debug!(%name, "Registered participant");
            self.order.push(name);
        }
    }

    /// Look up a participant by exact name.
    pub fn get(&self, name: &str) -> Option<&Arc<dyn Participant>> {
        self.participants.get(name)
    }

    /// Check whether a name is registered.
    pub fn contains(&self, name: &str) -> bool {
        self.participants.contains_key(name)
    }

    /// Participant names in registration order.
    pub fn roster(&self) -> Vec<String> {
        self.order.clone()
    }

    /// Number of registered participants.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Check whether the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Name/description pairs for roster prompts and listings.
    pub fn descriptions(&self) -> Vec<(String, String)> {
        self.order
            .iter()
            .filter_map(|name| self.participants.get(name))
            .map(|p| (p.name().to_string(), p.description().to_string()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use collective_core::error::CollectiveError;
    use collective_core::types::Transcript;

    use crate::actions::DeskActions;

    struct Named(&'static str);

    #[async_trait]
    impl Participant for Named {
        fn name(&self) -> &str {
            self.0
        }

        fn description(&self) -> &str {
            "test participant"
        }

        async fn take_turn(
            &self,
            _topic: &str,
            _transcript: &Transcript,
            _actions: &DeskActions,
        ) -> Result<String, CollectiveError> {
            Ok(String::new())
        }
    }

    #[test]
    fn test_roster_preserves_registration_order() {
        let mut registry = ParticipantRegistry::new();
        registry.register(Arc::new(Named("Analyst")));
        registry.register(Arc::new(Named("Trader")));
        registry.register(Arc::new(Named("Risk")));

        assert_eq!(registry.roster(), vec!["Analyst", "Trader", "Risk"]);
        assert_eq!(registry.len(), 3);
    }

    #[test]
    fn test_lookup_is_exact_match() {
        let mut registry = ParticipantRegistry::new();
        registry.register(Arc::new(Named("Analyst")));

        assert!(registry.contains("Analyst"));
        assert!(!registry.contains("analyst"));
        assert!(registry.get("Analyst ").is_none());
    }

    #[test]
    fn test_descriptions_follow_roster_order() {
        let mut registry = ParticipantRegistry::new();
        registry.register(Arc::new(Named("Analyst")));
        registry.register(Arc::new(Named("Trader")));

        let descriptions = registry.descriptions();
        assert_eq!(descriptions.len(), 2);
        assert_eq!(descriptions[0].0, "Analyst");
        assert_eq!(
            descriptions[1],
            ("Trader".to_string(), "test participant".to_string())
        );
    }

    #[test]
    fn test_reregistration_replaces() {
        let mut registry = ParticipantRegistry::new();
        registry.register(Arc::new(Named("Analyst")));
        registry.register(Arc::new(Named("Analyst")));

        assert_eq!(registry.len(), 1);
    }
}
