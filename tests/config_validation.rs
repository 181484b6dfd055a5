//! Integration tests for configuration loading and validation

#![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

use push_frame::config::{LoggingConfig, PayloadConfig, PushConfig};
use push_frame::error::ConfigError;
use push_frame::{NotificationEncoder, NotificationRequest, MAX_PAYLOAD_SIZE};
use tracing::Level;

#[test]
fn test_default_config_validates() {
    let config = PushConfig::default();
    let errors = config.validate();
    assert!(
        errors.is_empty(),
        "Default config should be valid, but got errors: {:?}",
        errors
    );
    assert_eq!(config.payload.max_payload_size, MAX_PAYLOAD_SIZE);
}

#[test]
fn test_zero_payload_size() {
    let config = PushConfig::default_with_overrides(|c| c.payload.max_payload_size = 0);
    let errors = config.validate();
    assert!(errors.iter().any(|e| e.contains("cannot be 0")));
}

#[test]
fn test_payload_size_beyond_wire_field() {
    let config = PushConfig::default_with_overrides(|c| c.payload.max_payload_size = 70_000);
    let errors = config.validate();
    assert!(errors.iter().any(|e| e.contains("wire limit")));
}

#[test]
fn test_payload_size_at_wire_field_is_valid() {
    let config = PushConfig::default_with_overrides(|c| c.payload.max_payload_size = 65_535);
    assert!(config.validate().is_empty());
}

#[test]
fn test_empty_app_name() {
    let mut config = PushConfig::default();
    config.logging.app_name = String::new();
    let errors = config.validate();
    assert!(errors.iter().any(|e| e.contains("cannot be empty")));
}

#[test]
fn test_long_app_name() {
    let mut config = PushConfig::default();
    config.logging.app_name = "a".repeat(65);
    let errors = config.validate();
    assert!(errors.iter().any(|e| e.contains("too long")));
}

#[test]
fn test_validate_strict_collects_all_errors() {
    let config = PushConfig {
        payload: PayloadConfig { max_payload_size: 0 },
        logging: LoggingConfig {
            app_name: String::new(),
            ..LoggingConfig::default()
        },
    };

    match config.validate_strict() {
        Err(ConfigError::Invalid(errors)) => assert_eq!(errors.len(), 2),
        other => panic!("Expected Invalid, got {other:?}"),
    }
}

#[test]
fn test_from_toml_partial_tables() {
    let config = PushConfig::from_toml(
        r#"
        [payload]
        max_payload_size = 2048

        [logging]
        log_level = "debug"
        "#,
    )
    .expect("Failed to parse TOML");

    assert_eq!(config.payload.max_payload_size, 2048);
    assert_eq!(config.logging.log_level, Level::DEBUG);
    assert_eq!(config.logging.app_name, "push-frame");
    assert!(!config.logging.json_format);
}

#[test]
fn test_from_toml_empty_is_default() {
    let config = PushConfig::from_toml("").expect("Empty TOML should parse");
    assert_eq!(config.payload, PayloadConfig::default());
}

#[test]
fn test_from_toml_rejects_bad_level() {
    let result = PushConfig::from_toml("[logging]\nlog_level = \"loud\"\n");
    assert!(matches!(result, Err(ConfigError::Parse(_))));
}

#[test]
fn test_example_config_roundtrip() {
    let example = PushConfig::example_config();
    assert!(example.contains("max_payload_size = 256"));
    assert!(example.contains("log_level = \"info\""));

    let parsed = PushConfig::from_toml(&example).expect("Example config should parse");
    assert!(parsed.validate().is_empty());
}

#[test]
fn test_save_and_load_file() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("push.toml");

    let config = PushConfig::default_with_overrides(|c| {
        c.payload.max_payload_size = 512;
        c.logging.json_format = true;
    });
    config.save_to_file(&path).expect("Failed to save config");

    let loaded = PushConfig::from_file(&path).expect("Failed to load config");
    assert_eq!(loaded.payload.max_payload_size, 512);
    assert!(loaded.logging.json_format);
}

#[test]
fn test_missing_file() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let result = PushConfig::from_file(dir.path().join("absent.toml"));
    assert!(matches!(result, Err(ConfigError::Io(_))));
}

#[test]
fn test_configured_limit_drives_encoder() {
    let config = PushConfig::from_toml("[payload]\nmax_payload_size = 32\n").unwrap();
    let encoder = NotificationEncoder::new(config.payload);
    let request = NotificationRequest::new("00".repeat(32)).with_alert("x".repeat(20));

    let err = encoder.encode(&request).unwrap_err();
    assert_eq!(
        err,
        push_frame::EncodeError::PayloadTooLarge { size: 40, max: 32 }
    );
}

#[test]
fn test_from_env_overrides() {
    std::env::set_var(push_frame::config::ENV_MAX_PAYLOAD_SIZE, "1024");
    std::env::set_var(push_frame::config::ENV_LOG_LEVEL, "warn");
    std::env::set_var(push_frame::config::ENV_LOG_JSON, "not-a-bool");

    let config = PushConfig::from_env().expect("from_env should not fail");

    std::env::remove_var(push_frame::config::ENV_MAX_PAYLOAD_SIZE);
    std::env::remove_var(push_frame::config::ENV_LOG_LEVEL);
    std::env::remove_var(push_frame::config::ENV_LOG_JSON);

    assert_eq!(config.payload.max_payload_size, 1024);
    assert_eq!(config.logging.log_level, Level::WARN);
    // Unparseable values leave the default in place
    assert!(!config.logging.json_format);
}
