// SPDX-FileCopyrightText: 2026 testlink-rs Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Decoder behavior over realistic reply shapes.

use chrono::NaiveDateTime;
use proptest::prelude::*;
use serde_json::json;
use testlink_core::{RpcStruct, RpcValue};
use testlink_decode::coerce::{to_bool, to_int, to_timestamp};
use testlink_decode::records::{self, test_cases_for_plan};
use testlink_decode::{ErrorCheck, check_reply, decode_base64, decode_first, decode_list, encode_base64};

fn rpc(value: serde_json::Value) -> RpcValue {
    RpcValue::from(value)
}

#[test]
fn empty_string_decodes_to_empty_lists() {
    let empty = rpc(json!(""));
    assert!(decode_list(&empty, records::test_project).is_empty());
    assert!(decode_list(&empty, records::test_suite).is_empty());
    assert!(decode_list(&empty, records::test_plan).is_empty());
    assert!(decode_list(&empty, records::build).is_empty());
    assert!(decode_list(&empty, records::test_platform).is_empty());
    assert!(decode_list(&empty, records::test_case_from_test_suite).is_empty());
    assert!(decode_list(&empty, records::test_case_id).is_empty());
    assert!(decode_list(&empty, records::attachment).is_empty());
    assert!(test_cases_for_plan(&empty).is_empty());
    assert!(decode_first(&empty, records::test_case).is_none());
}

#[test]
fn missing_fields_take_defaults() {
    let build = decode_first(&rpc(json!([{"name": "nightly"}])), records::build).unwrap();
    assert_eq!(build.id, 0);
    assert!(!build.active);
    assert!(!build.is_open);
    assert_eq!(build.notes, None);

    let exec = decode_first(&rpc(json!({"id": "3"})), records::execution_result).unwrap();
    assert_eq!(exec.execution_ts, NaiveDateTime::MIN);
    assert_eq!(exec.status, None);

    let info = records::additional_info(&RpcStruct::new());
    assert_eq!(info.has_duplicate, None);
}

#[test]
fn plan_cases_flatten_platform_maps_and_arrays() {
    let reply = rpc(json!({
        "501": {
            "0": {"tc_id": "501", "platform_id": "1", "platform_name": "linux", "active": "1"},
            "3": {"tc_id": "501", "platform_id": "3", "platform_name": "windows", "active": "1"}
        },
        "502": [{"tc_id": "502", "platform_id": "0", "exec_status": "p"}]
    }));
    let cases = test_cases_for_plan(&reply);
    assert_eq!(cases.len(), 3);
    let pairs: Vec<(i64, i64)> = cases.iter().map(|c| (c.tc_id, c.platform_id)).collect();
    assert_eq!(pairs, vec![(501, 1), (501, 3), (502, 0)]);
    assert_eq!(cases[1].platform_name.as_deref(), Some("windows"));
    assert_eq!(cases[2].exec_status.as_deref(), Some("p"));
}

#[test]
fn plan_cases_keep_duplicates() {
    let reply = rpc(json!({
        "7": [{"tc_id": "7", "platform_id": "1"}, {"tc_id": "7", "platform_id": "1"}]
    }));
    assert_eq!(test_cases_for_plan(&reply).len(), 2);
}

#[test]
fn plan_cases_tolerate_array_replies() {
    let reply = rpc(json!([{"tc_id": "1"}, {"tc_id": "2"}]));
    assert_eq!(test_cases_for_plan(&reply).len(), 2);
}

#[test]
fn suites_keyed_by_id_decode_in_order() {
    let reply = rpc(json!({
        "14": {"id": "14", "name": "Checkout", "parent_id": "2", "node_order": "1", "node_type_id": "2"},
        "12": {"id": "12", "name": "Cart", "parent_id": "2", "node_order": "0", "node_type_id": "2"}
    }));
    let names: Vec<String> = decode_list(&reply, records::test_suite)
        .into_iter()
        .filter_map(|s| s.name)
        .collect();
    assert_eq!(names, vec!["Checkout", "Cart"]);
}

#[test]
fn single_record_reply_decodes_to_one_element() {
    let reply = rpc(json!({"id": "9", "name": "Only suite", "parent_id": "1"}));
    let suites = decode_list(&reply, records::test_suite);
    assert_eq!(suites.len(), 1);
    assert_eq!(suites[0].id, 9);
}

#[test]
fn normalizer_whitelist_examples() {
    let reply = rpc(json!([{"code": 7008, "message": "no suites"}]));
    assert!(matches!(check_reply(&reply, &[7008]), Ok(ErrorCheck::Accepted(_))));
    let err = check_reply(&reply, &[]).unwrap_err();
    assert_eq!(err.first_code(), Some(7008));

    let bare = rpc(json!({"code": 7008, "message": "no suites"}));
    assert_eq!(check_reply(&bare, &[]).unwrap(), ErrorCheck::Clean);
}

#[test]
fn step_text_survives_byte_identical() {
    let actions = "Klick auf \u{201e}Speichern\u{201c} <b>jetzt</b> & pr\u{fc}fe";
    let reply = rpc(json!({
        "id": "1",
        "steps": [{"step_number": "1", "actions": actions, "expected_results": "\u{2713}"}]
    }));
    let case = decode_first(&reply, records::test_case).unwrap();
    assert_eq!(case.steps[0].actions.as_deref(), Some(actions));
    assert_eq!(case.steps[0].expected_results.as_deref(), Some("\u{2713}"));
}

#[test]
fn base64_examples_round_trip() {
    let samples: [&[u8]; 3] = [b"", b"plain ascii", &[0xff, 0xfe, 0x00, 0x80]];
    for sample in samples {
        assert_eq!(decode_base64(&encode_base64(sample)).unwrap(), sample.to_vec());
    }
}

proptest! {
    #[test]
    fn base64_round_trips(bytes in proptest::collection::vec(any::<u8>(), 0..512)) {
        prop_assert_eq!(decode_base64(&encode_base64(&bytes)), Some(bytes));
    }

    #[test]
    fn coercions_never_panic_on_text(text in ".*") {
        let data = RpcStruct::new().with("field", text.as_str());
        let _ = to_int(&data, "field");
        let _ = to_timestamp(&data, "field");
        prop_assert!(to_bool(&data, "field").is_some());
    }

    #[test]
    fn integers_survive_textual_encoding(n in any::<i64>()) {
        let data = RpcStruct::new().with("field", n.to_string());
        prop_assert_eq!(to_int(&data, "field"), n);
    }
}
