// SPDX-FileCopyrightText: 2026 testlink-rs Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Shape classification of raw replies.
//!
//! The same logical operation can answer with an empty marker, a single
//! record, an array of records or a map of records keyed by id, depending on
//! how many results there are and which server version is running. Decoders
//! classify the reply first and then match on [`Shape`].

use testlink_core::{RpcStruct, RpcValue};

/// The structural shape of a reply.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shape<'a> {
    /// Nil, the empty string, or an empty structure.
    Absent,
    /// Any other scalar, or an array that is not made of structures only.
    Scalar(&'a RpcValue),
    /// A single record: a structure with at least one non-container field.
    Struct(&'a RpcStruct),
    /// An array of structures. May be empty.
    StructArray(&'a [RpcValue]),
    /// A structure of records keyed by id or index. Either every value is a
    /// container, or every key is numeric and some value is a container.
    StructMap(&'a RpcStruct),
}

impl Shape<'_> {
    pub fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }
}

/// Classifies a reply value.
pub fn classify(value: &RpcValue) -> Shape<'_> {
    match value {
        v if v.is_empty_marker() => Shape::Absent,
        RpcValue::Struct(s) => classify_struct(s),
        RpcValue::Array(items) if items.iter().all(|i| i.as_struct().is_some()) => {
            Shape::StructArray(items)
        }
        other => Shape::Scalar(other),
    }
}

/// Classifies a structure as a record or a keyed map of records.
pub fn classify_struct(s: &RpcStruct) -> Shape<'_> {
    if s.is_empty() {
        Shape::Absent
    } else if s.values().all(RpcValue::is_container) || is_id_keyed(s) {
        Shape::StructMap(s)
    } else {
        Shape::Struct(s)
    }
}

/// Every key is an integer id and at least one value is a container.
///
/// Servers pad such maps with empty strings for ids that have no record.
fn is_id_keyed(s: &RpcStruct) -> bool {
    s.keys().all(|k| k.parse::<i64>().is_ok()) && s.values().any(RpcValue::is_container)
}

/// The records of a reply, in source order.
///
/// A keyed map contributes each structure value and the structure elements
/// of each array value. Anything else inside it is skipped.
pub fn records(value: &RpcValue) -> Vec<&RpcStruct> {
    match classify(value) {
        Shape::Absent | Shape::Scalar(_) => Vec::new(),
        Shape::Struct(s) => vec![s],
        Shape::StructArray(items) => items.iter().filter_map(RpcValue::as_struct).collect(),
        Shape::StructMap(map) => map_records(map),
    }
}

fn map_records(map: &RpcStruct) -> Vec<&RpcStruct> {
    map.values()
        .flat_map(|v| match v {
            RpcValue::Struct(s) => vec![s],
            RpcValue::Array(items) => items.iter().filter_map(RpcValue::as_struct).collect(),
            _ => Vec::new(),
        })
        .collect()
}

/// Decodes every record of a reply with `f`.
///
/// Absent and scalar replies decode to an empty list.
pub fn decode_list<T>(value: &RpcValue, f: impl Fn(&RpcStruct) -> T) -> Vec<T> {
    records(value).into_iter().map(f).collect()
}

/// Decodes the first record of a reply with `f`.
pub fn decode_first<T>(value: &RpcValue, f: impl Fn(&RpcStruct) -> T) -> Option<T> {
    records(value).into_iter().next().map(f)
}

/// Flattens a two-level keyed map into its leaf records, in source order.
///
/// Each top-level value may itself be a keyed map of records, an array of
/// records, or a record. Duplicate records are preserved.
pub fn nested_records(value: &RpcValue) -> Vec<&RpcStruct> {
    match classify(value) {
        Shape::StructMap(map) => map
            .values()
            .flat_map(|inner| match inner {
                RpcValue::Struct(s) => match classify_struct(s) {
                    Shape::StructMap(m) => map_records(m),
                    Shape::Struct(record) => vec![record],
                    _ => Vec::new(),
                },
                RpcValue::Array(items) => items.iter().filter_map(RpcValue::as_struct).collect(),
                _ => Vec::new(),
            })
            .collect(),
        _ => records(value),
    }
}
