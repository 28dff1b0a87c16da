// SPDX-FileCopyrightText: 2026 testlink-rs Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Record decoders: one function per domain record.
//!
//! Each function reads a single wire structure. Unknown keys are ignored and
//! missing keys fall back to the defaults of the [`coerce`](crate::coerce)
//! primitives.

use indexmap::IndexMap;
use testlink_core::{
    AdditionalInfo, Attachment, AttachmentRequestResponse, Build, ExecutionResult, GeneralResult,
    RpcStruct, RpcValue, TestCase, TestCaseFromTestPlan, TestCaseFromTestSuite, TestCaseId,
    TestPlan, TestPlanTotal, TestPlatform, TestProject, TestStep, TestSuite,
};

use crate::coerce::{to_bool, to_bytes, to_flag, to_int, to_text, to_timestamp};
use crate::shape::{decode_list, nested_records};

pub fn test_project(data: &RpcStruct) -> TestProject {
    let opt = data.get("opt").and_then(RpcValue::as_struct);
    let option = |key: &str| opt.is_some_and(|o| to_flag(o, key));

    TestProject {
        id: to_int(data, "id"),
        name: to_text(data, "name"),
        prefix: to_text(data, "prefix"),
        notes: to_text(data, "notes"),
        color: to_text(data, "color"),
        active: to_flag(data, "active"),
        option_reqs: option("requirementsEnabled"),
        option_priority: option("testPriorityEnabled"),
        option_automation: option("automationEnabled"),
        option_inventory: option("inventoryEnabled"),
        tc_counter: to_int(data, "tc_counter"),
    }
}

pub fn test_suite(data: &RpcStruct) -> TestSuite {
    TestSuite {
        id: to_int(data, "id"),
        name: to_text(data, "name"),
        parent_id: to_int(data, "parent_id"),
        node_order: to_int(data, "node_order"),
        node_type_id: to_int(data, "node_type_id"),
    }
}

pub fn test_step(data: &RpcStruct) -> TestStep {
    TestStep {
        id: to_int(data, "id"),
        step_number: to_int(data, "step_number"),
        actions: to_text(data, "actions"),
        expected_results: to_text(data, "expected_results"),
        active: to_flag(data, "active"),
        execution_type: to_int(data, "execution_type"),
    }
}

/// Decodes a full test case, with its steps sorted by step number.
pub fn test_case(data: &RpcStruct) -> TestCase {
    let mut steps = data
        .get("steps")
        .map(|v| decode_list(v, test_step))
        .unwrap_or_default();
    steps.sort_by_key(|s| s.step_number);

    TestCase {
        id: to_int(data, "id"),
        testcase_id: to_int(data, "testcase_id"),
        externalid: to_text(data, "tc_external_id"),
        name: to_text(data, "name"),
        version: to_int(data, "version"),
        summary: to_text(data, "summary"),
        preconditions: to_text(data, "preconditions"),
        importance: to_int(data, "importance"),
        execution_type: to_int(data, "execution_type"),
        status: to_int(data, "status"),
        active: to_flag(data, "active"),
        is_open: to_flag(data, "is_open"),
        layout: to_text(data, "layout"),
        node_order: to_int(data, "node_order"),
        testsuite_id: to_int(data, "testsuite_id"),
        author_id: to_int(data, "author_id"),
        author_login: to_text(data, "author_login"),
        author_first_name: to_text(data, "author_first_name"),
        author_last_name: to_text(data, "author_last_name"),
        updater_id: to_int(data, "updater_id"),
        updater_login: to_text(data, "updater_login"),
        updater_first_name: to_text(data, "updater_first_name"),
        updater_last_name: to_text(data, "updater_last_name"),
        creation_ts: to_timestamp(data, "creation_ts"),
        modification_ts: to_timestamp(data, "modification_ts"),
        steps,
    }
}

pub fn test_case_from_test_suite(data: &RpcStruct) -> TestCaseFromTestSuite {
    TestCaseFromTestSuite {
        id: to_int(data, "id"),
        name: to_text(data, "name"),
        version: to_int(data, "version"),
        tcversion_id: to_int(data, "tcversion_id"),
        external_id: to_text(data, "tc_external_id"),
        testsuite_id: to_int(data, "parent_id"),
        parent_id: to_int(data, "parent_id"),
        active: to_flag(data, "active"),
        is_open: to_flag(data, "is_open"),
        creation_ts: to_timestamp(data, "creation_ts"),
        modification_ts: to_timestamp(data, "modification_ts"),
        author_id: to_int(data, "author_id"),
        updater_id: to_int(data, "updater_id"),
        execution_type: to_int(data, "execution_type"),
        summary: to_text(data, "summary"),
        details: to_text(data, "details").unwrap_or_default(),
        importance: to_int(data, "importance"),
        node_type_id: to_int(data, "node_type_id"),
        node_order: to_int(data, "node_order"),
        node_table: to_text(data, "node_table"),
        layout: to_text(data, "layout"),
        status: to_int(data, "status"),
        preconditions: to_text(data, "preconditions"),
    }
}

pub fn test_case_from_test_plan(data: &RpcStruct) -> TestCaseFromTestPlan {
    TestCaseFromTestPlan {
        tc_id: to_int(data, "tc_id"),
        external_id: to_text(data, "external_id"),
        name: to_text(data, "name"),
        tsuite_name: to_text(data, "tsuite_name"),
        testsuite_id: to_int(data, "testsuite_id"),
        platform_id: to_int(data, "platform_id"),
        platform_name: to_text(data, "platform_name"),
        exec_status: to_text(data, "exec_status"),
        exec_id: to_int(data, "exec_id"),
        exec_on_build: to_int(data, "exec_on_build"),
        exec_on_tplan: to_int(data, "exec_on_tplan"),
        executed: to_int(data, "executed"),
        tester_id: to_int(data, "tester_id"),
        assigned_build_id: to_int(data, "assigned_build_id"),
        assigner_id: to_int(data, "assigner_id"),
        user_id: to_int(data, "user_id"),
        feature_id: to_int(data, "feature_id"),
        priority: to_int(data, "priority"),
        urgency: to_int(data, "urgency"),
        importance: to_int(data, "importance"),
        linked_ts: to_timestamp(data, "linked_ts"),
        linked_by: to_int(data, "linked_by"),
        version: to_int(data, "version"),
        tcversion_id: to_int(data, "tcversion_id"),
        tcversion_number: to_int(data, "tcversion_number"),
        execution_order: to_int(data, "execution_order"),
        execution_type: to_int(data, "execution_type"),
        execution_run_type: to_text(data, "execution_run_type"),
        execution_ts: to_text(data, "execution_ts"),
        execution_notes: to_text(data, "execution_notes"),
        active: to_flag(data, "active"),
        status: to_text(data, "status"),
        summary: to_text(data, "summary"),
        type_: to_text(data, "type"),
        z: to_int(data, "z"),
    }
}

/// Flattens the reply of `getTestCasesForTestPlan`.
///
/// The server keys the reply by test case id; each value is a map of one
/// record per platform, or an array of records on older servers.
pub fn test_cases_for_plan(reply: &RpcValue) -> Vec<TestCaseFromTestPlan> {
    nested_records(reply)
        .into_iter()
        .map(test_case_from_test_plan)
        .collect()
}

pub fn test_case_id(data: &RpcStruct) -> TestCaseId {
    TestCaseId {
        id: to_int(data, "id"),
        name: to_text(data, "name"),
        parent_id: to_int(data, "parent_id"),
        tc_external_id: to_int(data, "tc_external_id"),
        tsuite_name: to_text(data, "tsuite_name"),
    }
}

pub fn test_plan(data: &RpcStruct) -> TestPlan {
    TestPlan {
        id: to_int(data, "id"),
        name: to_text(data, "name"),
        notes: to_text(data, "notes"),
        testproject_id: to_int(data, "testproject_id"),
        active: to_flag(data, "active"),
        is_open: to_flag(data, "is_open"),
        is_public: to_flag(data, "is_public"),
    }
}

pub fn build(data: &RpcStruct) -> Build {
    Build {
        id: to_int(data, "id"),
        testplan_id: to_int(data, "testplan_id"),
        name: to_text(data, "name"),
        notes: to_text(data, "notes"),
        active: to_flag(data, "active"),
        is_open: to_flag(data, "is_open"),
    }
}

pub fn test_platform(data: &RpcStruct) -> TestPlatform {
    TestPlatform {
        id: to_int(data, "id"),
        name: to_text(data, "name"),
        notes: to_text(data, "notes"),
    }
}

pub fn execution_result(data: &RpcStruct) -> ExecutionResult {
    ExecutionResult {
        id: to_int(data, "id"),
        status: to_text(data, "status").and_then(|s| s.trim().parse().ok()),
        notes: to_text(data, "notes"),
        tester_id: to_int(data, "tester_id"),
        testplan_id: to_int(data, "testplan_id"),
        build_id: to_int(data, "build_id"),
        tcversion_id: to_int(data, "tcversion_id"),
        tcversion_number: to_int(data, "tcversion_number"),
        execution_ts: to_timestamp(data, "execution_ts"),
        execution_type: to_int(data, "execution_type"),
    }
}

/// Decodes plan totals. `details` maps a status label to `{qty}`.
pub fn test_plan_total(data: &RpcStruct) -> TestPlanTotal {
    let details = data
        .get("details")
        .and_then(RpcValue::as_struct)
        .map(|d| {
            d.iter()
                .map(|(label, value)| {
                    let qty = match value {
                        RpcValue::Struct(entry) => to_int(entry, "qty"),
                        _ => to_int(d, label),
                    };
                    (label.to_string(), qty)
                })
                .collect::<IndexMap<_, _>>()
        })
        .unwrap_or_default();

    TestPlanTotal {
        total_tc: to_int(data, "total_tc"),
        type_: to_text(data, "type").unwrap_or_default(),
        name: to_text(data, "name").unwrap_or_default(),
        details,
    }
}

pub fn additional_info(data: &RpcStruct) -> AdditionalInfo {
    AdditionalInfo {
        new_name: to_text(data, "new_name"),
        status_ok: to_flag(data, "status_ok"),
        msg: to_text(data, "msg"),
        id: to_int(data, "id"),
        external_id: to_int(data, "external_id"),
        version_number: to_int(data, "version_number"),
        has_duplicate: to_bool(data, "has_duplicate"),
    }
}

/// Decodes the result of a mutating call.
///
/// `status` is normally a native boolean; a textual `true` or the flag `1`
/// is accepted from servers that send it as text.
pub fn general_result(data: &RpcStruct) -> GeneralResult {
    let status = to_bool(data, "status").unwrap_or(false) || to_flag(data, "status");

    GeneralResult {
        status,
        message: to_text(data, "message"),
        operation: to_text(data, "operation"),
        id: to_int(data, "id"),
        additional_info: data
            .get("additionalInfo")
            .and_then(RpcValue::as_struct)
            .map(additional_info),
    }
}

pub fn attachment(data: &RpcStruct) -> Attachment {
    Attachment {
        id: to_int(data, "id"),
        name: to_text(data, "name"),
        title: to_text(data, "title"),
        file_type: to_text(data, "file_type"),
        date_added: to_timestamp(data, "date_added"),
        content: to_bytes(data, "content"),
    }
}

pub fn attachment_request_response(data: &RpcStruct) -> AttachmentRequestResponse {
    AttachmentRequestResponse {
        foreign_key_id: to_int(data, "fk_id"),
        linked_table_name: to_text(data, "fk_table"),
        title: to_text(data, "title"),
        description: to_text(data, "description"),
        file_name: to_text(data, "file_name"),
        file_type: to_text(data, "file_type"),
        size: to_int(data, "file_size"),
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDateTime;
    use serde_json::json;
    use testlink_core::ExecutionStatus;

    use super::*;

    fn record(value: serde_json::Value) -> RpcStruct {
        match RpcValue::from(value) {
            RpcValue::Struct(s) => s,
            other => panic!("expected a struct, got {}", other.kind()),
        }
    }

    #[test]
    fn project_options_come_from_opt() {
        let project = test_project(&record(json!({
            "id": "3",
            "name": "Apollo",
            "prefix": "AP",
            "active": "1",
            "tc_counter": "57",
            "opt": {
                "requirementsEnabled": 1,
                "testPriorityEnabled": 0,
                "automationEnabled": "1",
                "inventoryEnabled": 0
            }
        })));
        assert_eq!(project.id, 3);
        assert_eq!(project.prefix.as_deref(), Some("AP"));
        assert!(project.active);
        assert!(project.option_reqs);
        assert!(!project.option_priority);
        assert!(project.option_automation);
        assert!(!project.option_inventory);
        assert_eq!(project.tc_counter, 57);
    }

    #[test]
    fn project_without_opt_has_no_options() {
        let project = test_project(&record(json!({"id": "1", "name": "bare"})));
        assert!(!project.option_reqs && !project.option_automation);
        assert_eq!(project.color, None);
    }

    #[test]
    fn test_case_steps_sorted_by_number() {
        let case = test_case(&record(json!({
            "id": "11",
            "testcase_id": "10",
            "tc_external_id": "4",
            "name": "Login",
            "active": "1",
            "is_open": "1",
            "creation_ts": "2024-01-01 08:00:00",
            "steps": [
                {"id": "3", "step_number": "2", "actions": "submit", "expected_results": "welcome", "active": "1", "execution_type": "1"},
                {"id": "2", "step_number": "1", "actions": "type password", "expected_results": "", "active": "1", "execution_type": "1"}
            ]
        })));
        assert_eq!(case.externalid.as_deref(), Some("4"));
        assert!(case.active && case.is_open);
        let numbers: Vec<i64> = case.steps.iter().map(|s| s.step_number).collect();
        assert_eq!(numbers, vec![1, 2]);
        assert_eq!(case.steps[1].actions.as_deref(), Some("submit"));
        assert_eq!(case.modification_ts, NaiveDateTime::MIN);
    }

    #[test]
    fn test_case_tolerates_missing_everything() {
        let case = test_case(&record(json!({"name": "x"})));
        assert_eq!(case.id, 0);
        assert!(!case.active);
        assert!(case.steps.is_empty());
        assert_eq!(case.creation_ts, NaiveDateTime::MIN);
    }

    #[test]
    fn suite_case_maps_parent_to_suite() {
        let case = test_case_from_test_suite(&record(json!({
            "id": "40", "parent_id": "9", "tc_external_id": "12", "active": "1", "is_open": "0"
        })));
        assert_eq!(case.testsuite_id, 9);
        assert_eq!(case.parent_id, 9);
        assert_eq!(case.external_id.as_deref(), Some("12"));
        assert_eq!(case.details, "");
        assert!(case.active);
        assert!(!case.is_open);
    }

    #[test]
    fn execution_status_letters() {
        let passed = execution_result(&record(json!({"id": "5", "status": "p"})));
        assert_eq!(passed.status, Some(ExecutionStatus::Passed));
        let unknown = execution_result(&record(json!({"id": "6", "status": "n"})));
        assert_eq!(unknown.status, None);
    }

    #[test]
    fn plan_totals_read_quantities() {
        let total = test_plan_total(&record(json!({
            "total_tc": "10",
            "type": "platform",
            "name": "Linux",
            "details": {"p": {"qty": "6"}, "f": {"qty": 3}, "n": {"qty": "1"}}
        })));
        assert_eq!(total.total_tc, 10);
        let labels: Vec<&str> = total.details.keys().map(String::as_str).collect();
        assert_eq!(labels, vec!["p", "f", "n"]);
        assert_eq!(total.details["f"], 3);
    }

    #[test]
    fn general_result_with_additional_info() {
        let result = general_result(&record(json!({
            "operation": "createTestCase",
            "status": true,
            "id": "77",
            "message": "Success!",
            "additionalInfo": {
                "id": "77", "external_id": "8", "status_ok": 1, "msg": "ok",
                "new_name": "", "version_number": "1", "has_duplicate": false
            }
        })));
        assert!(result.status);
        assert_eq!(result.id, 77);
        let info = result.additional_info.unwrap();
        assert_eq!(info.external_id, 8);
        assert!(info.status_ok);
        assert_eq!(info.has_duplicate, Some(false));
    }

    #[test]
    fn general_result_status_as_text() {
        assert!(general_result(&record(json!({"status": "1"}))).status);
        assert!(general_result(&record(json!({"status": "true"}))).status);
        assert!(!general_result(&record(json!({"status": "0"}))).status);
        assert!(!general_result(&record(json!({}))).status);
    }

    #[test]
    fn attachment_content_decoded() {
        let a = attachment(&record(json!({
            "id": "2", "name": "log.txt", "file_type": "text/plain",
            "title": "log", "date_added": "2024-02-02 12:00:00", "content": "bG9n"
        })));
        assert_eq!(a.content, b"log".to_vec());
        assert_eq!(a.name.as_deref(), Some("log.txt"));
    }

    #[test]
    fn upload_acknowledgement_fields() {
        let ack = attachment_request_response(&record(json!({
            "fk_id": "31", "fk_table": "executions", "title": "t", "description": "d",
            "file_name": "a.png", "file_type": "image/png", "file_size": 2048
        })));
        assert_eq!(ack.foreign_key_id, 31);
        assert_eq!(ack.linked_table_name.as_deref(), Some("executions"));
        assert_eq!(ack.size, 2048);
    }
}
