// SPDX-FileCopyrightText: 2026 testlink-rs Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration for the TestLink client.
//!
//! TOML files are layered with Figment, overridden by `TESTLINK_*`
//! environment variables, strictly deserialized (`deny_unknown_fields`) and
//! validated. Failures come back as miette diagnostics with typo suggestions.
//!
//! ```no_run
//! use testlink_config::load_and_validate;
//!
//! let config = load_and_validate().expect("config errors");
//! println!("endpoint: {}", config.server.url);
//! ```

pub mod diagnostic;
pub mod loader;
pub mod model;
pub mod validation;

use std::path::Path;

pub use diagnostic::{ConfigError, render_errors};
pub use loader::{load_config, load_config_from_path, load_config_from_str};
pub use model::{LoggingConfig, ServerConfig, TestLinkConfig};

/// Load configuration from the standard hierarchy and validate it.
pub fn load_and_validate() -> Result<TestLinkConfig, Vec<ConfigError>> {
    finish(loader::load_config(), collect_toml_sources)
}

/// Load configuration from one file (plus environment) and validate it.
pub fn load_and_validate_path(path: &Path) -> Result<TestLinkConfig, Vec<ConfigError>> {
    finish(loader::load_config_from_path(path), || {
        read_source(path).into_iter().collect()
    })
}

/// Load configuration from a TOML string and validate it.
pub fn load_and_validate_str(toml_content: &str) -> Result<TestLinkConfig, Vec<ConfigError>> {
    finish(loader::load_config_from_str(toml_content), || {
        vec![("<inline>".to_string(), toml_content.to_string())]
    })
}

fn finish(
    loaded: Result<TestLinkConfig, figment::Error>,
    sources: impl FnOnce() -> Vec<(String, String)>,
) -> Result<TestLinkConfig, Vec<ConfigError>> {
    match loaded {
        Ok(config) => {
            validation::validate_config(&config)?;
            Ok(config)
        }
        Err(err) => Err(diagnostic::figment_to_config_errors(err, &sources())),
    }
}

fn read_source(path: &Path) -> Option<(String, String)> {
    let content = std::fs::read_to_string(path).ok()?;
    let shown = std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf());
    Some((shown.display().to_string(), content))
}

/// Contents of every config file that exists, for span lookup.
fn collect_toml_sources() -> Vec<(String, String)> {
    [
        Path::new(loader::LOCAL_CONFIG).to_path_buf(),
        loader::user_config(),
        Path::new(loader::SYSTEM_CONFIG).to_path_buf(),
    ]
    .iter()
    .filter_map(|path| read_source(path))
    .collect()
}
