// SPDX-FileCopyrightText: 2026 testlink-rs Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Canned server replies.
//!
//! The builders produce replies in the shapes a TestLink 1.9 server sends,
//! strings for numbers included, so tests exercise the same coercions real
//! traffic does.

use serde_json::json;
use testlink_core::RpcValue;

/// An in-band error list with a single entry.
pub fn error(code: i64, message: &str) -> RpcValue {
    RpcValue::from(json!([{"code": code, "message": message}]))
}

/// An in-band error list with several entries, in order.
pub fn errors(entries: &[(i64, &str)]) -> RpcValue {
    RpcValue::Array(
        entries
            .iter()
            .map(|(code, message)| RpcValue::from(json!({"code": code, "message": message})))
            .collect(),
    )
}

/// A successful mutating-call reply for `operation` that touched `id`.
pub fn general_result(operation: &str, id: i64) -> RpcValue {
    RpcValue::from(json!([{
        "operation": operation,
        "status": true,
        "id": id.to_string(),
        "message": "Success!"
    }]))
}

pub fn project(id: i64, name: &str, prefix: &str) -> RpcValue {
    RpcValue::from(json!({
        "id": id.to_string(),
        "name": name,
        "prefix": prefix,
        "notes": "",
        "color": "",
        "active": "1",
        "tc_counter": "0",
        "opt": {
            "requirementsEnabled": 1,
            "testPriorityEnabled": 1,
            "automationEnabled": 1,
            "inventoryEnabled": 0
        }
    }))
}

pub fn suite(id: i64, name: &str, parent_id: i64) -> RpcValue {
    RpcValue::from(json!({
        "id": id.to_string(),
        "name": name,
        "parent_id": parent_id.to_string(),
        "node_type_id": "2",
        "node_order": "0"
    }))
}

pub fn build(id: i64, plan_id: i64, name: &str) -> RpcValue {
    RpcValue::from(json!({
        "id": id.to_string(),
        "testplan_id": plan_id.to_string(),
        "name": name,
        "notes": "",
        "active": "1",
        "is_open": "1"
    }))
}

pub fn plan(id: i64, project_id: i64, name: &str) -> RpcValue {
    RpcValue::from(json!({
        "id": id.to_string(),
        "testproject_id": project_id.to_string(),
        "name": name,
        "notes": "",
        "active": "1",
        "is_open": "1",
        "is_public": "1"
    }))
}

pub fn platform(id: i64, name: &str) -> RpcValue {
    RpcValue::from(json!({"id": id.to_string(), "name": name, "notes": ""}))
}

/// A `getTestCaseIDByName` entry.
pub fn test_case_id(id: i64, name: &str, parent_id: i64) -> RpcValue {
    RpcValue::from(json!({
        "id": id.to_string(),
        "name": name,
        "parent_id": parent_id.to_string(),
        "tc_external_id": id.to_string(),
        "tsuite_name": format!("suite {parent_id}")
    }))
}

/// Wraps records in an array reply.
pub fn array(items: Vec<RpcValue>) -> RpcValue {
    RpcValue::Array(items)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_fixture_has_code_and_message() {
        let reply = error(3031, "no build");
        let first = reply.as_array().unwrap()[0].as_struct().unwrap();
        assert_eq!(first.get("code"), Some(&RpcValue::Int(3031)));
        assert_eq!(first.get("message"), Some(&RpcValue::from("no build")));
    }

    #[test]
    fn records_use_textual_numbers() {
        let reply = suite(10, "Smoke", 1);
        let s = reply.as_struct().unwrap();
        assert_eq!(s.get("id"), Some(&RpcValue::from("10")));
    }
}
