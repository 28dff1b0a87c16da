// SPDX-FileCopyrightText: 2026 testlink-rs Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Test case operations.

use testlink_core::{
    GeneralResult, RpcTransport, TestCase, TestCaseFromTestSuite, TestCaseId, TestLinkError,
};
use testlink_decode::coerce::{to_int, to_text};
use testlink_decode::shape::{Shape, classify};
use testlink_decode::{decode_first, decode_list, records};

use crate::client::{TestLink, general_result, scalar_int, scalar_text};
use crate::codes;
use crate::requests::{NewTestCase, encode_steps};

impl<T: RpcTransport> TestLink<T> {
    /// A test case with its steps. `version` of `None` or 0 fetches the latest.
    pub async fn get_test_case(
        &self,
        test_case_id: i64,
        version: Option<i64>,
    ) -> Result<Option<TestCase>, TestLinkError> {
        let args = self
            .keyed()?
            .arg("testcaseid", test_case_id)
            .opt("version", version.filter(|v| *v != 0));
        let reply = self.invoke("getTestCase", args).await?;
        Ok(decode_first(&reply, records::test_case))
    }

    /// Internal id of the test case with the given external id.
    pub async fn get_test_case_by_external_id(
        &self,
        external_id: i64,
        project_id: i64,
    ) -> Result<Option<i64>, TestLinkError> {
        let args = self
            .keyed()?
            .arg("testcaseexternalid", external_id)
            .arg("testprojectid", project_id);
        let Some(reply) = self
            .invoke_accepting("getTestCaseByExternalId", args, &[codes::NO_TEST_CASE_ID])
            .await?
        else {
            return Ok(None);
        };
        Ok(scalar_int(&reply).or_else(|| decode_first(&reply, |s| to_int(s, "id"))))
    }

    /// Test cases of a suite, with full details.
    pub async fn get_test_cases_for_test_suite(
        &self,
        suite_id: i64,
        deep: bool,
    ) -> Result<Vec<TestCaseFromTestSuite>, TestLinkError> {
        let args = self
            .keyed()?
            .arg("testsuiteid", suite_id)
            .arg("deep", deep)
            .arg("details", "full");
        let reply = self.invoke("getTestCasesForTestSuite", args).await?;
        Ok(decode_list(&reply, records::test_case_from_test_suite))
    }

    /// Ids of the test cases of a suite.
    pub async fn get_test_case_ids_for_test_suite(
        &self,
        suite_id: i64,
        deep: bool,
    ) -> Result<Vec<i64>, TestLinkError> {
        let args = self
            .keyed()?
            .arg("testsuiteid", suite_id)
            .arg("deep", deep)
            .arg("details", "simple");
        let reply = self.invoke("getTestCasesForTestSuite", args).await?;
        Ok(decode_list(&reply, |s| to_int(s, "id")))
    }

    /// Test cases named `name`, optionally narrowed by suite name on the server.
    pub async fn get_test_case_id_by_name(
        &self,
        name: &str,
        suite_name: Option<&str>,
    ) -> Result<Vec<TestCaseId>, TestLinkError> {
        let args = self
            .keyed()?
            .arg("testcasename", name)
            .opt("testsuitename", suite_name);
        let reply = self
            .invoke_accepting("getTestCaseIDByName", args, &[codes::NO_TEST_CASE_ID])
            .await?;
        Ok(reply
            .map(|r| decode_list(&r, records::test_case_id))
            .unwrap_or_default())
    }

    /// Test cases named `name` that live directly in suite `suite_id`.
    ///
    /// Looks up by name on the server, then keeps the matches whose parent
    /// is the suite, in server order.
    pub async fn get_test_case_id_by_name_in_suite(
        &self,
        name: &str,
        suite_id: i64,
    ) -> Result<Vec<TestCaseId>, TestLinkError> {
        let mut ids = self.get_test_case_id_by_name(name, None).await?;
        ids.retain(|id| id.parent_id == suite_id);
        Ok(ids)
    }

    pub async fn create_test_case(
        &self,
        case: &NewTestCase,
    ) -> Result<GeneralResult, TestLinkError> {
        let args = self
            .keyed()?
            .arg("testcasename", case.name.as_str())
            .arg("testsuiteid", case.suite_id)
            .arg("testprojectid", case.project_id)
            .arg("authorlogin", case.author_login.as_str())
            .arg("summary", case.summary.as_str())
            .arg("steps", encode_steps(&case.steps))
            .arg("keywords", case.keywords.as_str())
            .arg("order", case.order)
            .arg("checkduplicatedname", i64::from(case.check_duplicated_name))
            .arg(
                "actiononduplicatedname",
                case.action_on_duplicated_name.to_string(),
            )
            .arg("executiontype", case.execution_type)
            .arg("importance", case.importance);
        let reply = self.invoke("createTestCase", args).await?;
        Ok(general_result(&reply))
    }

    /// Design-time value of a custom field. `details` defaults to `FULL`.
    pub async fn get_test_case_custom_field_design_value(
        &self,
        test_case_id: i64,
        external_id: &str,
        version: i64,
        project_id: i64,
        field_name: &str,
        details: Option<&str>,
    ) -> Result<Option<String>, TestLinkError> {
        let args = self
            .keyed()?
            .arg("testcaseid", test_case_id)
            .arg("testcaseexternalid", external_id)
            .arg("version", version)
            .arg("testprojectid", project_id)
            .arg("customfieldname", field_name)
            .arg("details", details.unwrap_or("FULL"));
        let reply = self.invoke("getTestCaseCustomFieldDesignValue", args).await?;
        Ok(match classify(&reply) {
            Shape::Absent => None,
            Shape::Scalar(value) if !value.is_container() => Some(scalar_text(value)),
            _ => decode_first(&reply, |s| to_text(s, "value")).flatten(),
        })
    }

    /// Login of the tester assigned to a case in a plan, platform and build.
    pub async fn get_test_case_assigned_tester(
        &self,
        plan_id: i64,
        test_case_id: i64,
        platform_id: i64,
        build_id: i64,
    ) -> Result<Option<String>, TestLinkError> {
        let args = self
            .keyed()?
            .arg("testplanid", plan_id)
            .arg("testcaseid", test_case_id)
            .arg("platformid", platform_id)
            .arg("buildid", build_id);
        let reply = self.invoke("getTestCaseAssignedTester", args).await?;
        Ok(decode_first(&reply, |s| to_text(s, "login")).flatten())
    }
}
