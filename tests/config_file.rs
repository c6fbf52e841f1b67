//! Integration tests for TOML configuration files.

use std::io::Write;

use fitchat::config::{AppConfig, SmallTalkSelection, ValidationError};
use tempfile::NamedTempFile;

fn toml_file(contents: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[test]
fn test_file_values_override_defaults() {
    let file = toml_file(
        r#"
[routing]
disambiguation_threshold = 0.2
small_talk_selection = "round_robin"

[fallback]
timeout_ms = 1500

[features]
enable_screen_detectors = false
"#,
    );

    let config = AppConfig::load_with_file(file.path(), true).unwrap();

    assert_eq!(config.routing.disambiguation_threshold, 0.2);
    assert_eq!(config.routing.small_talk_selection, SmallTalkSelection::RoundRobin);
    assert_eq!(config.routing.small_talk_confidence, 0.95);
    assert_eq!(config.fallback.timeout_ms, 1500);
    assert!(config.fallback.enabled);
    assert!(!config.features.enable_screen_detectors);
    assert!(config.features.enable_button_fast_path);
    assert!(config.validate().is_ok());
}

#[test]
fn test_invalid_values_load_but_fail_validation() {
    let file = toml_file(
        r#"
[routing]
disambiguation_threshold = 1.5
"#,
    );

    let config = AppConfig::load_with_file(file.path(), true).unwrap();

    assert_eq!(
        config.validate(),
        Err(ValidationError::InvalidFraction {
            field: "routing.disambiguation_threshold",
            value: 1.5
        })
    );
}

#[test]
fn test_malformed_file_is_a_load_error() {
    let file = toml_file("[routing\ndisambiguation_threshold = ");
    assert!(AppConfig::load_with_file(file.path(), true).is_err());
}

#[test]
fn test_registry_built_from_file() {
    let file = toml_file(
        r#"
[routing]
disambiguation_threshold = 0.3
"#,
    );

    let config = AppConfig::load_with_file(file.path(), true).unwrap();
    let registry = config.routing.build_registry().unwrap();

    assert_eq!(registry.disambiguation_threshold(), 0.3);
}
