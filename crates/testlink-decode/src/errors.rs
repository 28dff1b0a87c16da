// SPDX-FileCopyrightText: 2026 testlink-rs Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error normalization.
//!
//! TestLink reports failures in-band: the reply is an array whose elements
//! carry a numeric `code` and a `message`. Some codes only mean "nothing
//! found" for a particular call, so each call passes the codes it accepts.

use testlink_core::{RpcValue, TestLinkError, TestLinkErrorMessage};
use tracing::debug;

use crate::coerce::to_text;

/// Result of scanning a reply for in-band errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ErrorCheck {
    /// The reply carries no error indicators.
    Clean,
    /// Every reported error was in the call's accepted set.
    Accepted(Vec<TestLinkErrorMessage>),
}

impl ErrorCheck {
    pub fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted(_))
    }
}

/// Collects the error indicators of a reply, in order.
///
/// Only array replies are scanned. An element qualifies if it is a structure
/// with a numeric `code` (native or textual) and a `message` field.
pub fn decode_errors(reply: &RpcValue) -> Vec<TestLinkErrorMessage> {
    let Some(items) = reply.as_array() else {
        return Vec::new();
    };

    items
        .iter()
        .filter_map(RpcValue::as_struct)
        .filter(|s| s.contains_key("message"))
        .filter_map(|s| {
            let code = match s.get("code")? {
                RpcValue::Int(n) => *n,
                RpcValue::String(text) => text.trim().parse().ok()?,
                _ => return None,
            };
            Some(TestLinkErrorMessage {
                code,
                message: to_text(s, "message").unwrap_or_default(),
            })
        })
        .collect()
}

/// Checks a reply against the codes a call accepts.
///
/// Returns [`ErrorCheck::Accepted`] when errors were reported and all of them
/// are accepted. Any other code raises [`TestLinkError::Remote`] carrying the
/// full list.
pub fn check_reply(reply: &RpcValue, accepted: &[i64]) -> Result<ErrorCheck, TestLinkError> {
    let errors = decode_errors(reply);
    if errors.is_empty() {
        return Ok(ErrorCheck::Clean);
    }

    if errors.iter().all(|e| accepted.contains(&e.code)) {
        let codes: Vec<i64> = errors.iter().map(|e| e.code).collect();
        debug!(?codes, "accepted remote error codes");
        return Ok(ErrorCheck::Accepted(errors));
    }

    Err(TestLinkError::remote(errors))
}
