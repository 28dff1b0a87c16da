// SPDX-FileCopyrightText: 2026 testlink-rs Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Integration tests for configuration loading and diagnostics.

use std::io::Write;

use serial_test::serial;

use testlink_config::diagnostic::{ConfigError, suggest_key};
use testlink_config::model::TestLinkConfig;
use testlink_config::{load_and_validate_path, load_and_validate_str, load_config_from_str};

#[test]
fn full_toml_deserializes() {
    let toml = r#"
[server]
url = "https://testlink.example.com/lib/api/xmlrpc/v1/xmlrpc.php"
dev_key = "0123456789abcdef"
timeout_secs = 10
accept_invalid_certs = true
capture_traffic = true

[logging]
level = "debug"
"#;

    let config = load_config_from_str(toml).expect("valid TOML should deserialize");
    assert_eq!(
        config.server.url,
        "https://testlink.example.com/lib/api/xmlrpc/v1/xmlrpc.php"
    );
    assert_eq!(config.server.dev_key.as_deref(), Some("0123456789abcdef"));
    assert_eq!(config.server.timeout_secs, 10);
    assert!(config.server.accept_invalid_certs);
    assert!(config.server.capture_traffic);
    assert_eq!(config.logging.level, "debug");
}

#[test]
fn empty_toml_uses_defaults() {
    let config = load_config_from_str("").expect("empty TOML should use defaults");
    assert!(config.server.dev_key.is_none());
    assert_eq!(config.server.timeout_secs, 30);
    assert!(!config.server.capture_traffic);
    assert_eq!(config.logging.level, "info");
}

#[test]
fn unknown_top_level_section_is_rejected() {
    let err = load_config_from_str("[storage]\npath = \"x\"\n")
        .expect_err("unknown section should be rejected");
    let text = err.to_string();
    assert!(
        text.contains("unknown field") || text.contains("storage"),
        "got: {text}"
    );
}

/// `TESTLINK_SERVER_DEV_KEY` lands on `server.dev_key` through the dotted key.
#[test]
fn dotted_override_sets_dev_key() {
    use figment::{
        Figment,
        providers::{Format, Serialized, Toml},
    };

    let config: TestLinkConfig = Figment::new()
        .merge(Serialized::defaults(TestLinkConfig::default()))
        .merge(Toml::string("[server]\ndev_key = \"from-file\"\n"))
        .merge(("server.dev_key", "from-env"))
        .extract()
        .expect("override should merge");

    assert_eq!(config.server.dev_key.as_deref(), Some("from-env"));
}

#[test]
fn misspelled_key_gets_suggestion() {
    let errors = load_and_validate_str("[server]\ndevkey = \"abc\"\n")
        .expect_err("should produce errors");

    let found = errors.iter().any(|e| {
        matches!(e, ConfigError::UnknownKey { key, suggestion, valid_keys, .. } if {
            key == "devkey"
                && suggestion.as_deref() == Some("dev_key")
                && valid_keys.contains("timeout_secs")
        })
    });
    assert!(found, "expected an UnknownKey for `devkey`, got: {errors:?}");
}

#[test]
fn wrong_type_is_reported() {
    let errors = load_and_validate_str("[server]\ntimeout_secs = \"soon\"\n")
        .expect_err("should reject a string timeout");
    assert!(
        errors
            .iter()
            .any(|e| matches!(e, ConfigError::InvalidType { key, .. } if key.contains("timeout_secs"))),
        "got: {errors:?}"
    );
}

#[test]
fn validation_runs_after_loading() {
    let errors = load_and_validate_str("[server]\nurl = \"localhost\"\ntimeout_secs = 0\n")
        .expect_err("invalid values should fail");
    assert_eq!(errors.len(), 2, "got: {errors:?}");
}

#[test]
#[serial]
fn explicit_file_is_loaded() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "[server]\ndev_key = \"file-key\"").unwrap();

    let config = load_and_validate_path(file.path()).expect("file should load");
    assert!(config.server.dev_key.is_some());
}

#[test]
#[serial]
fn explicit_file_typo_is_diagnosed() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "[server]\ntimout_secs = 5").unwrap();

    let errors = load_and_validate_path(file.path()).expect_err("typo should fail");
    let suggested = errors.iter().any(|e| {
        matches!(e, ConfigError::UnknownKey { suggestion, .. }
            if suggestion.as_deref() == Some("timeout_secs"))
    });
    assert!(suggested, "got: {errors:?}");
}

#[test]
#[serial]
fn environment_overrides_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "[server]\ndev_key = \"file-key\"\ntimeout_secs = 5").unwrap();

    // SAFETY: test-only env mutation, serialized with the other env readers.
    unsafe { std::env::set_var("TESTLINK_SERVER_DEV_KEY", "env-key") };
    let result = load_and_validate_path(file.path());
    unsafe { std::env::remove_var("TESTLINK_SERVER_DEV_KEY") };

    let config = result.expect("file and env should merge");
    assert_eq!(config.server.dev_key.as_deref(), Some("env-key"));
    assert_eq!(config.server.timeout_secs, 5);
}

#[test]
fn suggestions_ignore_distant_keys() {
    assert_eq!(suggest_key("qqqq", &["url", "dev_key"]), None);
}

#[test]
fn config_error_renders_with_miette() {
    use miette::{Diagnostic, GraphicalReportHandler};

    let error = ConfigError::UnknownKey {
        key: "devkey".to_string(),
        suggestion: Some("dev_key".to_string()),
        valid_keys: "url, dev_key, timeout_secs".to_string(),
        span: None,
        src: None,
    };

    assert!(error.code().is_some());
    let help = error.help().map(|h| h.to_string()).unwrap_or_default();
    assert!(help.contains("did you mean `dev_key`"), "got: {help}");

    let mut rendered = String::new();
    GraphicalReportHandler::new()
        .render_report(&mut rendered, &error)
        .expect("should render");
    assert!(rendered.contains("devkey"));
}
