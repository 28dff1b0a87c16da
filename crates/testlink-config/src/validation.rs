// SPDX-FileCopyrightText: 2026 testlink-rs Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Post-deserialization validation for configuration values.
//!
//! Checks constraints serde attributes cannot express: the endpoint must be
//! an http(s) URL, the timeout positive and the log level a known one.

use crate::diagnostic::ConfigError;
use crate::model::TestLinkConfig;

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Validate a deserialized configuration.
///
/// Collects every failure instead of stopping at the first one.
pub fn validate_config(config: &TestLinkConfig) -> Result<(), Vec<ConfigError>> {
    let mut errors = Vec::new();

    let url = config.server.url.trim();
    if url.is_empty() {
        errors.push(ConfigError::Validation {
            message: "server.url must not be empty".to_string(),
        });
    } else if !(url.starts_with("http://") || url.starts_with("https://")) {
        errors.push(ConfigError::Validation {
            message: format!("server.url `{url}` must start with http:// or https://"),
        });
    }

    if config.server.timeout_secs == 0 {
        errors.push(ConfigError::Validation {
            message: "server.timeout_secs must be greater than 0".to_string(),
        });
    }

    let level = config.logging.level.to_ascii_lowercase();
    if !LOG_LEVELS.contains(&level.as_str()) {
        errors.push(ConfigError::Validation {
            message: format!(
                "logging.level `{}` is not one of {}",
                config.logging.level,
                LOG_LEVELS.join(", ")
            ),
        });
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn has_error(errors: &[ConfigError], needle: &str) -> bool {
        errors
            .iter()
            .any(|e| matches!(e, ConfigError::Validation { message } if message.contains(needle)))
    }

    #[test]
    fn default_config_validates() {
        assert!(validate_config(&TestLinkConfig::default()).is_ok());
    }

    #[test]
    fn empty_url_fails_validation() {
        let mut config = TestLinkConfig::default();
        config.server.url = "  ".to_string();
        let errors = validate_config(&config).unwrap_err();
        assert!(has_error(&errors, "must not be empty"));
    }

    #[test]
    fn non_http_url_fails_validation() {
        let mut config = TestLinkConfig::default();
        config.server.url = "ftp://example.com/xmlrpc.php".to_string();
        let errors = validate_config(&config).unwrap_err();
        assert!(has_error(&errors, "http://"));
    }

    #[test]
    fn errors_are_collected() {
        let mut config = TestLinkConfig::default();
        config.server.timeout_secs = 0;
        config.logging.level = "loud".to_string();
        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 2);
        assert!(has_error(&errors, "timeout_secs"));
        assert!(has_error(&errors, "logging.level"));
    }

    #[test]
    fn level_is_case_insensitive() {
        let mut config = TestLinkConfig::default();
        config.logging.level = "DEBUG".to_string();
        assert!(validate_config(&config).is_ok());
    }
}
