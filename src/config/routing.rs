//! Routing configuration

use serde::Deserialize;

use super::error::ValidationError;
use crate::domain::foundation::Confidence;
use crate::domain::intent::{PatternRegistry, RegistryError};

/// How small-talk responses are chosen.
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum SmallTalkSelection {
    #[default]
    Random,
    RoundRobin,
    Seeded,
}

/// Router tuning knobs
#[derive(Debug, Clone, Deserialize)]
pub struct RoutingConfig {
    /// Two confusable intents closer than this are offered as a choice
    #[serde(default = "default_disambiguation_threshold")]
    pub disambiguation_threshold: f64,

    /// Confidence reported for small-talk results
    #[serde(default = "default_small_talk_confidence")]
    pub small_talk_confidence: f64,

    #[serde(default)]
    pub small_talk_selection: SmallTalkSelection,

    /// Seed for `seeded` selection
    #[serde(default)]
    pub seed: u64,
}

impl RoutingConfig {
    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_fraction("routing.disambiguation_threshold", self.disambiguation_threshold)?;
        validate_fraction("routing.small_talk_confidence", self.small_talk_confidence)?;
        Ok(())
    }

    /// The built-in registry tuned with these settings.
    pub fn build_registry(&self) -> Result<PatternRegistry, RegistryError> {
        Ok(PatternRegistry::builtin()?
            .with_disambiguation_threshold(self.disambiguation_threshold)?
            .with_small_talk_confidence(Confidence::new(self.small_talk_confidence)))
    }
}

fn validate_fraction(field: &'static str, value: f64) -> Result<(), ValidationError> {
    if value > 0.0 && value < 1.0 {
        Ok(())
    } else {
        Err(ValidationError::InvalidFraction { field, value })
    }
}

impl Default for RoutingConfig {
    fn default() -> Self {
        Self {
            disambiguation_threshold: default_disambiguation_threshold(),
            small_talk_confidence: default_small_talk_confidence(),
            small_talk_selection: SmallTalkSelection::default(),
            seed: 0,
        }
    }
}

fn default_disambiguation_threshold() -> f64 {
    0.15
}

fn default_small_talk_confidence() -> f64 {
    0.95
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let config = RoutingConfig::default();
        assert_eq!(config.disambiguation_threshold, 0.15);
        assert_eq!(config.small_talk_selection, SmallTalkSelection::Random);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn rejects_out_of_range_threshold() {
        let config = RoutingConfig {
            disambiguation_threshold: 1.5,
            ..Default::default()
        };
        assert_eq!(
            config.validate(),
            Err(ValidationError::InvalidFraction {
                field: "routing.disambiguation_threshold",
                value: 1.5
            })
        );
    }

    #[test]
    fn registry_picks_up_tuning() {
        let config = RoutingConfig {
            disambiguation_threshold: 0.25,
            small_talk_confidence: 0.9,
            ..Default::default()
        };
        let registry = config.build_registry().unwrap();
        assert_eq!(registry.disambiguation_threshold(), 0.25);
        assert_eq!(registry.small_talk_confidence().value(), 0.9);
    }

    #[test]
    fn selection_deserializes_snake_case() {
        let config: RoutingConfig =
            serde_json::from_str(r#"{"small_talk_selection": "round_robin"}"#).unwrap();
        assert_eq!(config.small_talk_selection, SmallTalkSelection::RoundRobin);
        assert_eq!(config.small_talk_confidence, 0.95);
    }
}
