// SPDX-FileCopyrightText: 2026 testlink-rs Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Request payloads for operations with many optional parts.

use testlink_core::{ActionOnDuplicatedName, ExecutionStatus, RpcStruct, RpcValue, TestStep};

/// A test case to create with [`TestLink::create_test_case`](crate::TestLink::create_test_case).
#[derive(Debug, Clone, PartialEq)]
pub struct NewTestCase {
    pub name: String,
    pub suite_id: i64,
    pub project_id: i64,
    pub author_login: String,
    pub summary: String,
    pub steps: Vec<TestStep>,
    pub keywords: String,
    pub order: i64,
    pub check_duplicated_name: bool,
    pub action_on_duplicated_name: ActionOnDuplicatedName,
    /// 1 = manual, 2 = automated.
    pub execution_type: i64,
    /// 1 = low, 2 = medium, 3 = high.
    pub importance: i64,
}

impl NewTestCase {
    /// A manual, medium-importance case with no steps that is blocked on duplicate names.
    pub fn new(
        name: impl Into<String>,
        suite_id: i64,
        project_id: i64,
        author_login: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            suite_id,
            project_id,
            author_login: author_login.into(),
            summary: String::new(),
            steps: Vec::new(),
            keywords: String::new(),
            order: 0,
            check_duplicated_name: true,
            action_on_duplicated_name: ActionOnDuplicatedName::Block,
            execution_type: 1,
            importance: 2,
        }
    }

    pub fn summary(mut self, summary: impl Into<String>) -> Self {
        self.summary = summary.into();
        self
    }

    pub fn steps(mut self, steps: Vec<TestStep>) -> Self {
        self.steps = steps;
        self
    }

    pub fn keywords(mut self, keywords: impl Into<String>) -> Self {
        self.keywords = keywords.into();
        self
    }

    pub fn order(mut self, order: i64) -> Self {
        self.order = order;
        self
    }

    pub fn on_duplicate(mut self, check: bool, action: ActionOnDuplicatedName) -> Self {
        self.check_duplicated_name = check;
        self.action_on_duplicated_name = action;
        self
    }

    pub fn execution_type(mut self, execution_type: i64) -> Self {
        self.execution_type = execution_type;
        self
    }

    pub fn importance(mut self, importance: i64) -> Self {
        self.importance = importance;
        self
    }
}

/// Encodes steps the way `createTestCase` expects them.
pub(crate) fn encode_steps(steps: &[TestStep]) -> RpcValue {
    RpcValue::Array(
        steps
            .iter()
            .map(|step| {
                RpcValue::Struct(
                    RpcStruct::new()
                        .with("step_number", step.step_number)
                        .with("actions", step.actions.clone().unwrap_or_default())
                        .with(
                            "expected_results",
                            step.expected_results.clone().unwrap_or_default(),
                        )
                        .with("active", step.active)
                        .with("execution_type", step.execution_type),
                )
            })
            .collect(),
    )
}

/// An execution outcome to record with [`TestLink::report_tc_result`](crate::TestLink::report_tc_result).
///
/// A platform must be given, by name or by id. The name wins when both are set.
#[derive(Debug, Clone, PartialEq)]
pub struct ExecutionReport {
    pub test_case_id: i64,
    pub test_plan_id: i64,
    pub status: ExecutionStatus,
    pub platform_id: Option<i64>,
    pub platform_name: Option<String>,
    pub overwrite: bool,
    pub notes: String,
    /// Let the server pick the latest build when none is given.
    pub guess: bool,
    pub bug_id: Option<i64>,
    pub build_id: Option<i64>,
}

impl ExecutionReport {
    pub fn new(test_case_id: i64, test_plan_id: i64, status: ExecutionStatus) -> Self {
        Self {
            test_case_id,
            test_plan_id,
            status,
            platform_id: None,
            platform_name: None,
            overwrite: false,
            notes: String::new(),
            guess: true,
            bug_id: None,
            build_id: None,
        }
    }

    pub fn platform_id(mut self, id: i64) -> Self {
        self.platform_id = Some(id);
        self
    }

    pub fn platform_name(mut self, name: impl Into<String>) -> Self {
        self.platform_name = Some(name.into());
        self
    }

    pub fn overwrite(mut self, overwrite: bool) -> Self {
        self.overwrite = overwrite;
        self
    }

    pub fn notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = notes.into();
        self
    }

    pub fn guess(mut self, guess: bool) -> Self {
        self.guess = guess;
        self
    }

    pub fn bug_id(mut self, bug_id: i64) -> Self {
        self.bug_id = Some(bug_id);
        self
    }

    pub fn build_id(mut self, build_id: i64) -> Self {
        self.build_id = Some(build_id);
        self
    }
}

/// Filters for [`TestLink::get_test_cases_for_test_plan`](crate::TestLink::get_test_cases_for_test_plan).
///
/// The server reads filters positionally. Setting a later filter sends every
/// earlier one too, with 0 or false standing in for the unset ones.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TestPlanCaseFilter {
    pub test_case_id: Option<i64>,
    pub build_id: Option<i64>,
    pub keyword_id: Option<i64>,
    pub executed: Option<bool>,
    pub assigned_to: Option<i64>,
    pub execute_status: Option<ExecutionStatus>,
}

impl TestPlanCaseFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn test_case_id(mut self, id: i64) -> Self {
        self.test_case_id = Some(id);
        self
    }

    pub fn build_id(mut self, id: i64) -> Self {
        self.build_id = Some(id);
        self
    }

    pub fn keyword_id(mut self, id: i64) -> Self {
        self.keyword_id = Some(id);
        self
    }

    pub fn executed(mut self, executed: bool) -> Self {
        self.executed = Some(executed);
        self
    }

    pub fn assigned_to(mut self, user_id: i64) -> Self {
        self.assigned_to = Some(user_id);
        self
    }

    pub fn execute_status(mut self, status: ExecutionStatus) -> Self {
        self.execute_status = Some(status);
        self
    }

    /// The positional filter arguments, up to the last one that is set.
    pub(crate) fn slots(&self) -> Vec<(&'static str, RpcValue)> {
        let slots = [
            ("testcaseid", self.test_case_id.map(RpcValue::from), RpcValue::Int(0)),
            ("buildid", self.build_id.map(RpcValue::from), RpcValue::Int(0)),
            ("keywordid", self.keyword_id.map(RpcValue::from), RpcValue::Int(0)),
            ("executed", self.executed.map(RpcValue::from), RpcValue::Bool(false)),
            ("assignedto", self.assigned_to.map(RpcValue::from), RpcValue::Int(0)),
            (
                "executestatus",
                self.execute_status.map(|s| RpcValue::from(s.to_string())),
                RpcValue::from(""),
            ),
        ];

        let Some(last) = slots.iter().rposition(|(_, value, _)| value.is_some()) else {
            return Vec::new();
        };

        slots
            .into_iter()
            .take(last + 1)
            .map(|(name, value, placeholder)| (name, value.unwrap_or(placeholder)))
            .collect()
    }
}

/// A file to attach to an execution, test case, suite or project.
#[derive(Debug, Clone, PartialEq)]
pub struct AttachmentUpload {
    pub file_name: String,
    pub file_type: String,
    pub content: Vec<u8>,
    pub title: String,
    pub description: String,
}

impl AttachmentUpload {
    pub fn new(file_name: impl Into<String>, file_type: impl Into<String>, content: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            file_type: file_type.into(),
            content,
            title: String::new(),
            description: String::new(),
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(slots: &[(&'static str, RpcValue)]) -> Vec<&'static str> {
        slots.iter().map(|(n, _)| *n).collect()
    }

    #[test]
    fn empty_filter_sends_nothing() {
        assert!(TestPlanCaseFilter::new().slots().is_empty());
    }

    #[test]
    fn later_filter_fills_earlier_slots() {
        let slots = TestPlanCaseFilter::new().executed(true).slots();
        assert_eq!(names(&slots), vec!["testcaseid", "buildid", "keywordid", "executed"]);
        assert_eq!(slots[0].1, RpcValue::Int(0));
        assert_eq!(slots[3].1, RpcValue::Bool(true));
    }

    #[test]
    fn status_filter_sends_all_slots() {
        let slots = TestPlanCaseFilter::new()
            .build_id(4)
            .execute_status(ExecutionStatus::Failed)
            .slots();
        assert_eq!(slots.len(), 6);
        assert_eq!(slots[1].1, RpcValue::Int(4));
        assert_eq!(slots[3].1, RpcValue::Bool(false));
        assert_eq!(slots[5].1, RpcValue::from("f"));
    }

    #[test]
    fn steps_encode_in_order() {
        let encoded = encode_steps(&[
            TestStep::new(1, "open", "opened", true, 1),
            TestStep::new(2, "close", "closed", true, 2),
        ]);
        let items = encoded.as_array().unwrap();
        assert_eq!(items.len(), 2);
        let second = items[1].as_struct().unwrap();
        assert_eq!(second.get("step_number"), Some(&RpcValue::Int(2)));
        assert_eq!(second.get("actions"), Some(&RpcValue::from("close")));
        assert_eq!(second.get("execution_type"), Some(&RpcValue::Int(2)));
    }

    #[test]
    fn new_test_case_defaults() {
        let case = NewTestCase::new("Login", 10, 1, "admin");
        assert!(case.check_duplicated_name);
        assert_eq!(case.action_on_duplicated_name, ActionOnDuplicatedName::Block);
        assert_eq!(case.execution_type, 1);
        assert!(case.steps.is_empty());
    }
}
