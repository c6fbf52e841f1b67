//! Feature flags configuration

use serde::Deserialize;

/// Feature flags for enabling/disabling resolution stages
#[derive(Debug, Clone, Deserialize)]
pub struct FeatureFlags {
    /// Match exact UI button labels before anything else
    #[serde(default = "default_true")]
    pub enable_button_fast_path: bool,

    /// Run the active screen's detector before the router
    #[serde(default = "default_true")]
    pub enable_screen_detectors: bool,
}

impl Default for FeatureFlags {
    fn default() -> Self {
        Self {
            enable_button_fast_path: true,
            enable_screen_detectors: true,
        }
    }
}

fn default_true() -> bool {
    true
}
