//! Errors raised while building a pattern registry.
//!
//! Routing itself never fails; every problem with the intent tables surfaces
//! here, once, at startup.

use thiserror::Error;

use super::values::{IntentId, SmallTalkKind};

#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("Invalid pattern for {owner}: {pattern}")]
    InvalidPattern {
        owner: String,
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("Intent {0} registered twice")]
    DuplicateIntent(IntentId),

    #[error("Intent {0} has required slots but no clarification template")]
    MissingClarification(IntentId),

    #[error("{context} references unregistered intent {intent}")]
    UnknownIntent {
        context: &'static str,
        intent: IntentId,
    },

    #[error("Slot {slot} required by {intent} has no extractor")]
    UnknownSlot { intent: IntentId, slot: String },

    #[error("Confusable pair pairs {0} with itself")]
    SelfConfusable(IntentId),

    #[error("Small-talk category {0:?} has no responses")]
    EmptyResponses(SmallTalkKind),

    #[error("Disambiguation threshold must be within (0, 1), got {0}")]
    InvalidThreshold(f64),
}

impl RegistryError {
    pub fn invalid_pattern(owner: impl Into<String>, pattern: &str, source: regex::Error) -> Self {
        RegistryError::InvalidPattern {
            owner: owner.into(),
            pattern: pattern.to_string(),
            source,
        }
    }
}
