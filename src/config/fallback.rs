//! Generative fallback configuration

use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;

const MAX_TIMEOUT_MS: u64 = 60_000;

#[derive(Debug, Clone, Deserialize)]
pub struct FallbackConfig {
    /// Forward unresolved messages to the generative service
    #[serde(default = "default_enabled")]
    pub enabled: bool,

    /// Upper bound on a single generative call
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
}

impl FallbackConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.timeout_ms == 0 || self.timeout_ms > MAX_TIMEOUT_MS {
            return Err(ValidationError::InvalidTimeout);
        }
        Ok(())
    }
}

impl Default for FallbackConfig {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
            timeout_ms: default_timeout_ms(),
        }
    }
}

fn default_enabled() -> bool {
    true
}

fn default_timeout_ms() -> u64 {
    5000
}
