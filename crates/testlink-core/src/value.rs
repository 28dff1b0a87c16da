// SPDX-FileCopyrightText: 2026 testlink-rs Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Dynamically-typed RPC values as they travel on the wire.
//!
//! [`RpcValue`] mirrors the XML-RPC value model. Structures keep their member
//! order, which matters for replies keyed by id where callers expect records
//! in the order the server listed them.

use chrono::NaiveDateTime;
use indexmap::IndexMap;

/// A single wire value.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum RpcValue {
    /// `<nil/>` or a missing value.
    #[default]
    Nil,
    Bool(bool),
    Int(i64),
    Double(f64),
    String(String),
    DateTime(NaiveDateTime),
    /// Binary payload, already decoded from base64.
    Base64(Vec<u8>),
    Array(Vec<RpcValue>),
    Struct(RpcStruct),
}

impl RpcValue {
    /// True for the markers the server uses to say "no data": nil and `""`.
    pub fn is_empty_marker(&self) -> bool {
        match self {
            Self::Nil => true,
            Self::String(s) => s.is_empty(),
            _ => false,
        }
    }

    pub fn as_struct(&self) -> Option<&RpcStruct> {
        match self {
            Self::Struct(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&[RpcValue]> {
        match self {
            Self::Array(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Int(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// True for arrays and structures.
    pub fn is_container(&self) -> bool {
        matches!(self, Self::Array(_) | Self::Struct(_))
    }

    /// Short name of the value kind, used in log fields.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Nil => "nil",
            Self::Bool(_) => "boolean",
            Self::Int(_) => "int",
            Self::Double(_) => "double",
            Self::String(_) => "string",
            Self::DateTime(_) => "dateTime",
            Self::Base64(_) => "base64",
            Self::Array(_) => "array",
            Self::Struct(_) => "struct",
        }
    }
}

/// An ordered name/value structure.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RpcStruct(IndexMap<String, RpcValue>);

impl RpcStruct {
    pub fn new() -> Self {
        Self(IndexMap::new())
    }

    /// Builder-style insert.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<RpcValue>) -> Self {
        self.0.insert(key.into(), value.into());
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<RpcValue>) {
        self.0.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&RpcValue> {
        self.0.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &RpcValue)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn values(&self) -> impl Iterator<Item = &RpcValue> {
        self.0.values()
    }
}

impl FromIterator<(String, RpcValue)> for RpcStruct {
    fn from_iter<I: IntoIterator<Item = (String, RpcValue)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl IntoIterator for RpcStruct {
    type Item = (String, RpcValue);
    type IntoIter = indexmap::map::IntoIter<String, RpcValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl From<bool> for RpcValue {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<i32> for RpcValue {
    fn from(v: i32) -> Self {
        Self::Int(v.into())
    }
}

impl From<i64> for RpcValue {
    fn from(v: i64) -> Self {
        Self::Int(v)
    }
}

impl From<f64> for RpcValue {
    fn from(v: f64) -> Self {
        Self::Double(v)
    }
}

impl From<&str> for RpcValue {
    fn from(v: &str) -> Self {
        Self::String(v.to_string())
    }
}

impl From<String> for RpcValue {
    fn from(v: String) -> Self {
        Self::String(v)
    }
}

impl From<NaiveDateTime> for RpcValue {
    fn from(v: NaiveDateTime) -> Self {
        Self::DateTime(v)
    }
}

impl From<RpcStruct> for RpcValue {
    fn from(v: RpcStruct) -> Self {
        Self::Struct(v)
    }
}

impl From<Vec<RpcValue>> for RpcValue {
    fn from(v: Vec<RpcValue>) -> Self {
        Self::Array(v)
    }
}

/// JSON is a convenient way to spell replies in tests and fixtures.
///
/// Objects keep their key order (`serde_json` is built with `preserve_order`).
/// Integral numbers become `Int`, every other number `Double`.
impl From<serde_json::Value> for RpcValue {
    fn from(v: serde_json::Value) -> Self {
        use serde_json::Value;

        match v {
            Value::Null => Self::Nil,
            Value::Bool(b) => Self::Bool(b),
            Value::Number(n) => match n.as_i64() {
                Some(i) => Self::Int(i),
                None => Self::Double(n.as_f64().unwrap_or_default()),
            },
            Value::String(s) => Self::String(s),
            Value::Array(items) => Self::Array(items.into_iter().map(Self::from).collect()),
            Value::Object(map) => Self::Struct(
                map.into_iter()
                    .map(|(k, v)| (k, Self::from(v)))
                    .collect(),
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn empty_markers() {
        assert!(RpcValue::Nil.is_empty_marker());
        assert!(RpcValue::from("").is_empty_marker());
        assert!(!RpcValue::from(" ").is_empty_marker());
        assert!(!RpcValue::Array(vec![]).is_empty_marker());
        assert!(!RpcValue::Int(0).is_empty_marker());
    }

    #[test]
    fn json_objects_keep_member_order() {
        let value = RpcValue::from(json!({"zeta": 1, "alpha": 2, "mid": 3}));
        let keys: Vec<&str> = value.as_struct().unwrap().keys().collect();
        assert_eq!(keys, vec!["zeta", "alpha", "mid"]);
    }

    #[test]
    fn json_numbers_map_to_int_or_double() {
        assert_eq!(RpcValue::from(json!(42)), RpcValue::Int(42));
        assert_eq!(RpcValue::from(json!(1.5)), RpcValue::Double(1.5));
        assert_eq!(RpcValue::from(json!(null)), RpcValue::Nil);
    }

    #[test]
    fn builder_inserts_in_order() {
        let s = RpcStruct::new().with("b", 1).with("a", "x").with("c", true);
        let pairs: Vec<(&str, &RpcValue)> = s.iter().collect();
        assert_eq!(pairs[0], ("b", &RpcValue::Int(1)));
        assert_eq!(pairs[1], ("a", &RpcValue::String("x".into())));
        assert_eq!(pairs[2], ("c", &RpcValue::Bool(true)));
    }

    #[test]
    fn kinds_are_named() {
        assert_eq!(RpcValue::Base64(vec![1]).kind(), "base64");
        assert_eq!(RpcValue::from(json!([])).kind(), "array");
        assert!(RpcValue::from(json!({})).is_container());
    }
}
