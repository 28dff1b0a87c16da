// SPDX-FileCopyrightText: 2026 testlink-rs Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Test suite operations.

use testlink_core::{GeneralResult, RpcTransport, TestLinkError, TestSuite};
use testlink_decode::{decode_first, decode_list, records};

use crate::client::{TestLink, general_result};
use crate::codes;

impl<T: RpcTransport> TestLink<T> {
    /// Top-level suites of a project. Empty when the project has none.
    pub async fn get_first_level_test_suites_for_test_project(
        &self,
        project_id: i64,
    ) -> Result<Vec<TestSuite>, TestLinkError> {
        let args = self.keyed()?.arg("testprojectid", project_id);
        let reply = self
            .invoke_accepting(
                "getFirstLevelTestSuitesForTestProject",
                args,
                &[codes::NO_CHILD_SUITES],
            )
            .await?;
        Ok(reply
            .map(|r| decode_list(&r, records::test_suite))
            .unwrap_or_default())
    }

    /// Direct child suites of a suite.
    pub async fn get_test_suites_for_test_suite(
        &self,
        suite_id: i64,
    ) -> Result<Vec<TestSuite>, TestLinkError> {
        let args = self.keyed()?.arg("testsuiteid", suite_id);
        let reply = self
            .invoke_accepting("getTestSuitesForTestSuite", args, &[codes::NO_CHILD_SUITES])
            .await?;
        Ok(reply
            .map(|r| decode_list(&r, records::test_suite))
            .unwrap_or_default())
    }

    /// Suites holding test cases linked to a plan.
    pub async fn get_test_suites_for_test_plan(
        &self,
        plan_id: i64,
    ) -> Result<Vec<TestSuite>, TestLinkError> {
        let args = self.keyed()?.arg("testplanid", plan_id);
        let reply = self.invoke("getTestSuitesForTestPlan", args).await?;
        Ok(decode_list(&reply, records::test_suite))
    }

    pub async fn get_test_suite_by_id(
        &self,
        suite_id: i64,
    ) -> Result<Option<TestSuite>, TestLinkError> {
        let args = self.keyed()?.arg("testsuiteid", suite_id);
        let reply = self
            .invoke_accepting("getTestSuiteByID", args, &[codes::NO_SUCH_SUITE])
            .await?;
        Ok(reply.and_then(|r| decode_first(&r, records::test_suite)))
    }

    /// Creates a suite under `parent_id`, or at the top of the project.
    pub async fn create_test_suite(
        &self,
        project_id: i64,
        suite_name: &str,
        details: &str,
        parent_id: Option<i64>,
        order: i64,
        check_duplicated_name: bool,
    ) -> Result<GeneralResult, TestLinkError> {
        let args = self
            .keyed()?
            .arg("testprojectid", project_id)
            .arg("testsuitename", suite_name)
            .arg("details", details)
            .opt("parentid", parent_id.filter(|id| *id != 0))
            .arg("order", order)
            .arg("checkduplicatedname", check_duplicated_name);
        let reply = self.invoke("createTestSuite", args).await?;
        Ok(general_result(&reply))
    }
}
