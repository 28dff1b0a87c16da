// SPDX-FileCopyrightText: 2026 testlink-rs Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for the TestLink client.

use thiserror::Error;

use crate::types::TestLinkErrorMessage;

/// The error type returned by every client operation.
#[derive(Debug, Error)]
pub enum TestLinkError {
    /// Client configuration errors (missing or empty developer key, bad endpoint).
    #[error("configuration error: {0}")]
    Config(String),

    /// The caller supplied an argument combination the server cannot accept.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The server answered with an error list that the call does not accept.
    ///
    /// `message` is `"<code>:<message>"` of the first reported error; `errors`
    /// holds every reported error in server order.
    #[error("testlink returned an error: {message}")]
    Remote {
        message: String,
        errors: Vec<TestLinkErrorMessage>,
    },

    /// XML-RPC protocol fault raised by the server.
    #[error("xml-rpc fault {code}: {message}")]
    Fault { code: i64, message: String },

    /// Transport failures (connectivity, HTTP status, malformed envelope).
    #[error("transport error: {message}")]
    Transport {
        message: String,
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl TestLinkError {
    /// Builds a remote error from a non-empty list of server errors.
    pub fn remote(errors: Vec<TestLinkErrorMessage>) -> Self {
        let message = errors
            .first()
            .map(|e| format!("{}:{}", e.code, e.message))
            .unwrap_or_default();
        Self::Remote { message, errors }
    }

    /// Shorthand for a transport error without an underlying cause.
    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport {
            message: message.into(),
            source: None,
        }
    }

    /// Error codes carried by a remote error, in server order.
    ///
    /// Empty for every other variant.
    pub fn codes(&self) -> Vec<i64> {
        match self {
            Self::Remote { errors, .. } => errors.iter().map(|e| e.code).collect(),
            _ => Vec::new(),
        }
    }

    /// Code of the first reported remote error, if any.
    pub fn first_code(&self) -> Option<i64> {
        match self {
            Self::Remote { errors, .. } => errors.first().map(|e| e.code),
            _ => None,
        }
    }
}
