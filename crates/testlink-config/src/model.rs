// SPDX-FileCopyrightText: 2026 testlink-rs Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration model structs.
//!
//! All structs use `#[serde(deny_unknown_fields)]` so a misspelled key is
//! reported instead of silently ignored.

use serde::{Deserialize, Serialize};

/// Top-level client configuration.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct TestLinkConfig {
    /// Server endpoint and credentials.
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Where the TestLink server lives and how to talk to it.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ServerConfig {
    /// Full URL of the XML-RPC endpoint.
    #[serde(default = "default_url")]
    pub url: String,

    /// Personal API key. `None` leaves only `sayHello` and `about` usable.
    #[serde(default)]
    pub dev_key: Option<String>,

    /// Per-request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Accept self-signed or otherwise invalid TLS certificates.
    #[serde(default)]
    pub accept_invalid_certs: bool,

    /// Keep the last raw request and response bodies for inspection.
    #[serde(default)]
    pub capture_traffic: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            url: default_url(),
            dev_key: None,
            timeout_secs: default_timeout_secs(),
            accept_invalid_certs: false,
            capture_traffic: false,
        }
    }
}

fn default_url() -> String {
    "http://localhost/testlink/lib/api/xmlrpc/v1/xmlrpc.php".to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct LoggingConfig {
    /// Logging level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}
