//! Logging configuration

use serde::Deserialize;

use super::error::ValidationError;

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// `EnvFilter` directive; `RUST_LOG` wins when set
    #[serde(default = "default_level")]
    pub level: String,

    /// Emit JSON lines instead of human-readable output
    #[serde(default)]
    pub json: bool,
}

impl LoggingConfig {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.level.trim().is_empty() {
            return Err(ValidationError::EmptyLogLevel);
        }
        Ok(())
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            json: false,
        }
    }
}

fn default_level() -> String {
    "info,fitchat=debug".to_string()
}
