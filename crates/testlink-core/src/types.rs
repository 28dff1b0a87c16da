// SPDX-FileCopyrightText: 2026 testlink-rs Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Domain records returned by the TestLink API.
//!
//! Records are plain values built by the decoder. Field names follow the
//! server's vocabulary so a reader can line them up with API documentation.
//! Optional text is `None` when the server left the field out.

use chrono::NaiveDateTime;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Message of the sentinel [`GeneralResult`] used when the server sent nothing usable.
pub const NO_RESPONSE_MESSAGE: &str = "no response from server";

/// Outcome of a test case execution. The server encodes it as a single letter.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize,
)]
#[strum(ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum ExecutionStatus {
    #[strum(to_string = "p", serialize = "passed")]
    Passed,
    #[strum(to_string = "f", serialize = "failed")]
    Failed,
    #[strum(to_string = "b", serialize = "blocked")]
    Blocked,
}

/// What the server should do when a created test case's name already exists.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum ActionOnDuplicatedName {
    #[default]
    #[strum(to_string = "block")]
    Block,
    #[strum(to_string = "generate_new")]
    GenerateNew,
    #[strum(to_string = "create_new_version")]
    CreateNewVersion,
}

/// One error reported by the server inside an otherwise normal reply.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestLinkErrorMessage {
    pub code: i64,
    pub message: String,
}

/// A top-level test project.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TestProject {
    pub id: i64,
    pub name: Option<String>,
    pub prefix: Option<String>,
    pub notes: Option<String>,
    pub color: Option<String>,
    pub active: bool,
    /// Requirements feature enabled.
    pub option_reqs: bool,
    /// Test priority feature enabled.
    pub option_priority: bool,
    /// Test automation feature enabled.
    pub option_automation: bool,
    /// Inventory feature enabled.
    pub option_inventory: bool,
    /// Counter used to allocate external test case ids.
    pub tc_counter: i64,
}

/// A folder node in the test specification tree.
///
/// `parent_id` refers to the parent suite (or the project for first-level suites).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TestSuite {
    pub id: i64,
    pub name: Option<String>,
    pub parent_id: i64,
    pub node_order: i64,
    pub node_type_id: i64,
}

/// One ordered instruction of a test case.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TestStep {
    pub id: i64,
    /// 1-based position of the step.
    pub step_number: i64,
    pub actions: Option<String>,
    pub expected_results: Option<String>,
    pub active: bool,
    /// 1 = manual, 2 = automated.
    pub execution_type: i64,
}

impl TestStep {
    /// Creates a step for an outgoing `createTestCase` call.
    pub fn new(
        step_number: i64,
        actions: impl Into<String>,
        expected_results: impl Into<String>,
        active: bool,
        execution_type: i64,
    ) -> Self {
        Self {
            id: 0,
            step_number,
            actions: Some(actions.into()),
            expected_results: Some(expected_results.into()),
            active,
            execution_type,
        }
    }
}

/// Full detail of one test case version, as returned by `getTestCase`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TestCase {
    pub id: i64,
    pub testcase_id: i64,
    pub externalid: Option<String>,
    pub name: Option<String>,
    pub version: i64,
    pub summary: Option<String>,
    pub preconditions: Option<String>,
    pub importance: i64,
    pub execution_type: i64,
    pub status: i64,
    pub active: bool,
    pub is_open: bool,
    pub layout: Option<String>,
    pub node_order: i64,
    pub testsuite_id: i64,
    pub author_id: i64,
    pub author_login: Option<String>,
    pub author_first_name: Option<String>,
    pub author_last_name: Option<String>,
    pub updater_id: i64,
    pub updater_login: Option<String>,
    pub updater_first_name: Option<String>,
    pub updater_last_name: Option<String>,
    pub creation_ts: NaiveDateTime,
    pub modification_ts: NaiveDateTime,
    /// Ordered by `step_number`.
    pub steps: Vec<TestStep>,
}

/// A test case as enumerated from a test suite.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TestCaseFromTestSuite {
    pub id: i64,
    pub name: Option<String>,
    pub version: i64,
    pub tcversion_id: i64,
    pub external_id: Option<String>,
    /// Suite the case lives in (the wire `parent_id`).
    pub testsuite_id: i64,
    pub parent_id: i64,
    pub active: bool,
    pub is_open: bool,
    pub creation_ts: NaiveDateTime,
    pub modification_ts: NaiveDateTime,
    pub author_id: i64,
    pub updater_id: i64,
    pub execution_type: i64,
    pub summary: Option<String>,
    /// Empty when the server omitted it.
    pub details: String,
    pub importance: i64,
    pub node_type_id: i64,
    pub node_order: i64,
    pub node_table: Option<String>,
    pub layout: Option<String>,
    pub status: i64,
    pub preconditions: Option<String>,
}

/// A test case linked to a test plan, with its execution context.
///
/// The same case shows up once per platform it is linked on.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TestCaseFromTestPlan {
    pub tc_id: i64,
    pub external_id: Option<String>,
    pub name: Option<String>,
    pub tsuite_name: Option<String>,
    pub testsuite_id: i64,
    pub platform_id: i64,
    pub platform_name: Option<String>,
    pub exec_status: Option<String>,
    pub exec_id: i64,
    pub exec_on_build: i64,
    pub exec_on_tplan: i64,
    pub executed: i64,
    pub tester_id: i64,
    pub assigned_build_id: i64,
    pub assigner_id: i64,
    pub user_id: i64,
    pub feature_id: i64,
    pub priority: i64,
    pub urgency: i64,
    pub importance: i64,
    pub linked_ts: NaiveDateTime,
    pub linked_by: i64,
    pub version: i64,
    pub tcversion_id: i64,
    pub tcversion_number: i64,
    pub execution_order: i64,
    pub execution_type: i64,
    pub execution_run_type: Option<String>,
    /// Kept as sent; the server uses an empty string for "never executed".
    pub execution_ts: Option<String>,
    pub execution_notes: Option<String>,
    pub active: bool,
    pub status: Option<String>,
    pub summary: Option<String>,
    #[serde(rename = "type")]
    pub type_: Option<String>,
    pub z: i64,
}

/// Lightweight id record returned by `getTestCaseIDByName`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TestCaseId {
    pub id: i64,
    pub name: Option<String>,
    /// Id of the suite containing the case.
    pub parent_id: i64,
    pub tc_external_id: i64,
    pub tsuite_name: Option<String>,
}

/// A named execution campaign within a project.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TestPlan {
    pub id: i64,
    pub name: Option<String>,
    pub notes: Option<String>,
    pub testproject_id: i64,
    pub active: bool,
    pub is_open: bool,
    pub is_public: bool,
}

/// A build (milestone) of a test plan.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Build {
    pub id: i64,
    pub testplan_id: i64,
    pub name: Option<String>,
    pub notes: Option<String>,
    pub active: bool,
    pub is_open: bool,
}

/// An execution target of a test plan.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TestPlatform {
    pub id: i64,
    pub name: Option<String>,
    pub notes: Option<String>,
}

/// The recorded outcome of one test case run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExecutionResult {
    pub id: i64,
    /// `None` when the server sent a status outside pass/fail/blocked.
    pub status: Option<ExecutionStatus>,
    pub notes: Option<String>,
    pub tester_id: i64,
    pub testplan_id: i64,
    pub build_id: i64,
    pub tcversion_id: i64,
    pub tcversion_number: i64,
    pub execution_ts: NaiveDateTime,
    pub execution_type: i64,
}

/// Aggregate execution counts of a test plan.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TestPlanTotal {
    pub total_tc: i64,
    #[serde(rename = "type")]
    pub type_: String,
    pub name: String,
    /// Status label to count, in server order.
    pub details: IndexMap<String, i64>,
}

/// Extra data attached to some create results.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AdditionalInfo {
    pub new_name: Option<String>,
    pub status_ok: bool,
    pub msg: Option<String>,
    pub id: i64,
    pub external_id: i64,
    pub version_number: i64,
    /// `None` when the server did not say.
    pub has_duplicate: Option<bool>,
}

/// Outcome of a mutating operation (create, report, delete).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GeneralResult {
    pub status: bool,
    pub message: Option<String>,
    pub operation: Option<String>,
    /// Id of the object the operation touched.
    pub id: i64,
    pub additional_info: Option<AdditionalInfo>,
}

impl GeneralResult {
    /// The sentinel returned when the server's reply carried no result structure.
    pub fn no_response() -> Self {
        Self {
            status: false,
            message: Some(NO_RESPONSE_MESSAGE.to_string()),
            operation: None,
            id: 0,
            additional_info: None,
        }
    }

    /// True if this is the [`no_response`](Self::no_response) sentinel.
    pub fn is_no_response(&self) -> bool {
        *self == Self::no_response()
    }
}

/// A file attached to a test case or test suite.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Attachment {
    pub id: i64,
    pub name: Option<String>,
    pub title: Option<String>,
    pub file_type: Option<String>,
    pub date_added: NaiveDateTime,
    /// Raw bytes, already decoded from base64.
    #[serde(skip)]
    pub content: Vec<u8>,
}

/// Server acknowledgement of an uploaded attachment.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AttachmentRequestResponse {
    pub foreign_key_id: i64,
    pub linked_table_name: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub file_name: Option<String>,
    pub file_type: Option<String>,
    pub size: i64,
}
