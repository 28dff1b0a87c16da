// SPDX-FileCopyrightText: 2026 testlink-rs Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration loader using Figment for layered config merging.
//!
//! Lookup order: `./testlink.toml` > `~/.config/testlink/testlink.toml` >
//! `/etc/testlink/testlink.toml`, with `TESTLINK_` environment overrides on top.

#![allow(clippy::result_large_err)] // figment::Error is external

use std::path::{Path, PathBuf};

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};

use crate::model::TestLinkConfig;

pub(crate) const SYSTEM_CONFIG: &str = "/etc/testlink/testlink.toml";
pub(crate) const LOCAL_CONFIG: &str = "testlink.toml";

pub(crate) fn user_config() -> PathBuf {
    dirs::config_dir()
        .map(|d| d.join("testlink/testlink.toml"))
        .unwrap_or_default()
}

/// Load configuration from the standard hierarchy with env var overrides.
///
/// Merge order (later overrides earlier):
/// 1. Compiled defaults
/// 2. `/etc/testlink/testlink.toml`
/// 3. `~/.config/testlink/testlink.toml`
/// 4. `./testlink.toml`
/// 5. `TESTLINK_*` environment variables
pub fn load_config() -> Result<TestLinkConfig, figment::Error> {
    build_figment().extract()
}

/// Load configuration from a TOML string only. No files, no environment.
pub fn load_config_from_str(toml_content: &str) -> Result<TestLinkConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(TestLinkConfig::default()))
        .merge(Toml::string(toml_content))
        .extract()
}

/// Load configuration from one file with env var overrides.
pub fn load_config_from_path(path: &Path) -> Result<TestLinkConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(TestLinkConfig::default()))
        .merge(Toml::file(path))
        .merge(env_provider())
        .extract()
}

/// The full layered Figment, before extraction.
pub fn build_figment() -> Figment {
    Figment::new()
        .merge(Serialized::defaults(TestLinkConfig::default()))
        .merge(Toml::file(SYSTEM_CONFIG))
        .merge(Toml::file(user_config()))
        .merge(Toml::file(LOCAL_CONFIG))
        .merge(env_provider())
}

/// Maps `TESTLINK_<SECTION>_<KEY>` onto `section.key`.
///
/// Only the first underscore splits, so `TESTLINK_SERVER_DEV_KEY` becomes
/// `server.dev_key` and not `server.dev.key`.
fn env_provider() -> Env {
    Env::prefixed("TESTLINK_").map(|key| map_env_key(key.as_str()).into())
}

pub(crate) fn map_env_key(key: &str) -> String {
    key.replacen("server_", "server.", 1)
        .replacen("logging_", "logging.", 1)
}
