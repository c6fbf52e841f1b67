//! Application configuration module
//!
//! Type-safe configuration loading using the `config` and `dotenvy` crates.
//! Sources, lowest precedence first:
//!
//! 1. built-in defaults
//! 2. an optional TOML file (`FITCHAT_CONFIG_FILE`, else `fitchat.toml`)
//! 3. environment variables with the `FITCHAT` prefix, `__` between levels
//!
//! # Example
//!
//! ```no_run
//! use fitchat::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Fallback timeout: {:?}", config.fallback.timeout());
//! ```

mod error;
mod fallback;
mod features;
mod logging;
mod routing;

pub use error::{ConfigError, ValidationError};
pub use fallback::FallbackConfig;
pub use features::FeatureFlags;
pub use logging::LoggingConfig;
pub use routing::{RoutingConfig, SmallTalkSelection};

use serde::Deserialize;
use std::path::{Path, PathBuf};

const ENV_PREFIX: &str = "FITCHAT";
const CONFIG_FILE_VAR: &str = "FITCHAT_CONFIG_FILE";
const DEFAULT_CONFIG_FILE: &str = "fitchat.toml";

/// Root application configuration
///
/// Every section has defaults, so an empty environment is a valid setup.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct AppConfig {
    /// Router thresholds and small-talk selection
    #[serde(default)]
    pub routing: RoutingConfig,

    /// Generative fallback behaviour
    #[serde(default)]
    pub fallback: FallbackConfig,

    /// Tracing subscriber setup
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Feature flags
    #[serde(default)]
    pub features: FeatureFlags,
}

impl AppConfig {
    /// Load configuration from the environment and an optional TOML file
    ///
    /// # Environment Variable Format
    ///
    /// - `FITCHAT__ROUTING__DISAMBIGUATION_THRESHOLD=0.2` -> `routing.disambiguation_threshold = 0.2`
    /// - `FITCHAT__FALLBACK__TIMEOUT_MS=2000` -> `fallback.timeout_ms = 2000`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the file is malformed or values cannot be
    /// parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let (path, required) = match std::env::var_os(CONFIG_FILE_VAR) {
            Some(path) => (PathBuf::from(path), true),
            None => (PathBuf::from(DEFAULT_CONFIG_FILE), false),
        };
        Self::load_with_file(&path, required)
    }

    /// Load with an explicit TOML file underneath the environment.
    pub fn load_with_file(path: &Path, required: bool) -> Result<Self, ConfigError> {
        let file = config::File::new(&path.to_string_lossy(), config::FileFormat::Toml)
            .required(required);

        let config = config::Config::builder()
            .add_source(file)
            .add_source(
                config::Environment::default()
                    .prefix(ENV_PREFIX)
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.routing.validate()?;
        self.fallback.validate()?;
        self.logging.validate()?;
        Ok(())
    }

    /// Load and validate in one step.
    pub fn load_validated() -> Result<Self, ConfigError> {
        let config = Self::load()?;
        config.validate()?;
        Ok(config)
    }
}
