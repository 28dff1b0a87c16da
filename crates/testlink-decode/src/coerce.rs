// SPDX-FileCopyrightText: 2026 testlink-rs Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Total coercion primitives for loosely-typed reply fields.
//!
//! The server sends numbers as strings, booleans as `"0"`/`"1"`, timestamps
//! as free text and sometimes omits fields altogether. Every function here
//! returns a default instead of failing so that record decoding never raises
//! because of a missing or malformed field.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use testlink_core::{RpcStruct, RpcValue};
use tracing::warn;

/// Textual timestamp layouts accepted by [`to_timestamp`], tried in order.
const TIMESTAMP_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S",
    "%Y%m%dT%H:%M:%S",
];

/// Reads `key` as an integer.
///
/// Absent, nil and unparseable values yield 0. Strings are parsed base-10
/// after trimming, booleans map to 0/1 and doubles are truncated.
pub fn to_int(data: &RpcStruct, key: &str) -> i64 {
    match data.get(key) {
        Some(RpcValue::Int(n)) => *n,
        Some(RpcValue::String(s)) => s.trim().parse().unwrap_or(0),
        Some(RpcValue::Bool(b)) => i64::from(*b),
        Some(RpcValue::Double(d)) => *d as i64,
        _ => 0,
    }
}

/// Reads `key` as a tri-state boolean.
///
/// Absent (or nil) yields `None`. Strings are compared case-insensitively
/// with `true`; anything else in a string is `Some(false)`. Native booleans
/// pass through and every other kind yields `None`.
pub fn to_bool(data: &RpcStruct, key: &str) -> Option<bool> {
    match data.get(key)? {
        RpcValue::String(s) => Some(s.trim().eq_ignore_ascii_case("true")),
        RpcValue::Bool(b) => Some(*b),
        _ => None,
    }
}

/// Reads a `0`/`1` flag. Only the integer 1 counts as set.
pub fn to_flag(data: &RpcStruct, key: &str) -> bool {
    to_int(data, key) == 1
}

/// Reads `key` as a timestamp, falling back to [`NaiveDateTime::MIN`].
pub fn to_timestamp(data: &RpcStruct, key: &str) -> NaiveDateTime {
    match data.get(key) {
        Some(RpcValue::DateTime(dt)) => *dt,
        Some(RpcValue::String(s)) => parse_timestamp(s).unwrap_or(NaiveDateTime::MIN),
        _ => NaiveDateTime::MIN,
    }
}

/// Parses the textual timestamp forms the server is known to emit.
pub fn parse_timestamp(text: &str) -> Option<NaiveDateTime> {
    let text = text.trim();
    TIMESTAMP_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(text, fmt).ok())
        .or_else(|| {
            NaiveDate::parse_from_str(text, "%Y-%m-%d")
                .ok()
                .map(|d| d.and_time(NaiveTime::MIN))
        })
}

/// Reads `key` as text.
///
/// Strings are returned as-is and other scalars are rendered. Nil, binary
/// and container values yield `None`.
pub fn to_text(data: &RpcStruct, key: &str) -> Option<String> {
    match data.get(key)? {
        RpcValue::String(s) => Some(s.clone()),
        RpcValue::Int(n) => Some(n.to_string()),
        RpcValue::Double(d) => Some(d.to_string()),
        RpcValue::Bool(b) => Some(b.to_string()),
        RpcValue::DateTime(dt) => Some(dt.format("%Y-%m-%d %H:%M:%S").to_string()),
        RpcValue::Nil | RpcValue::Base64(_) | RpcValue::Array(_) | RpcValue::Struct(_) => None,
    }
}

/// Reads `key` as binary content.
///
/// Native base64 values are already decoded by the transport. Text is
/// decoded as standard base64; invalid text yields no bytes and a warning.
pub fn to_bytes(data: &RpcStruct, key: &str) -> Vec<u8> {
    match data.get(key) {
        Some(RpcValue::Base64(bytes)) => bytes.clone(),
        Some(RpcValue::String(s)) => decode_base64(s).unwrap_or_else(|| {
            warn!(field = key, len = s.len(), "invalid base64 content, dropping it");
            Vec::new()
        }),
        _ => Vec::new(),
    }
}

/// Encodes bytes as standard base64 for upload payloads.
pub fn encode_base64(bytes: &[u8]) -> String {
    STANDARD.encode(bytes)
}

/// Decodes standard base64, ignoring embedded whitespace such as line breaks.
pub fn decode_base64(text: &str) -> Option<Vec<u8>> {
    let compact: String = text.split_whitespace().collect();
    STANDARD.decode(compact).ok()
}
