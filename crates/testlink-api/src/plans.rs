// SPDX-FileCopyrightText: 2026 testlink-rs Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Test plan operations: plans, their platforms, totals and linked cases.

use testlink_core::{
    GeneralResult, RpcTransport, TestCaseFromTestPlan, TestLinkError, TestPlan, TestPlanTotal,
    TestPlatform,
};
use testlink_decode::coerce::to_int;
use testlink_decode::{decode_first, decode_list, records};

use crate::client::{TestLink, general_result};
use crate::codes;
use crate::requests::TestPlanCaseFilter;

impl<T: RpcTransport> TestLink<T> {
    pub async fn get_project_test_plans(
        &self,
        project_id: i64,
    ) -> Result<Vec<TestPlan>, TestLinkError> {
        let args = self.keyed()?.arg("testprojectid", project_id);
        let reply = self.invoke("getProjectTestPlans", args).await?;
        Ok(decode_list(&reply, records::test_plan))
    }

    pub async fn get_test_plan_by_name(
        &self,
        project_name: &str,
        plan_name: &str,
    ) -> Result<Option<TestPlan>, TestLinkError> {
        let args = self
            .keyed()?
            .arg("testprojectname", project_name)
            .arg("testplanname", plan_name);
        let reply = self.invoke("getTestPlanByName", args).await?;
        Ok(decode_first(&reply, records::test_plan))
    }

    /// Creates a plan in the project called `project_name`.
    pub async fn create_test_plan(
        &self,
        plan_name: &str,
        project_name: &str,
        notes: &str,
        active: bool,
    ) -> Result<GeneralResult, TestLinkError> {
        let args = self
            .keyed()?
            .arg("testplanname", plan_name)
            .arg("testprojectname", project_name)
            .arg("notes", notes)
            .arg("active", if active { "1" } else { "0" });
        let reply = self.invoke("createTestPlan", args).await?;
        Ok(general_result(&reply))
    }

    /// Platforms assigned to a plan. Empty when none are assigned.
    pub async fn get_test_plan_platforms(
        &self,
        plan_id: i64,
    ) -> Result<Vec<TestPlatform>, TestLinkError> {
        let args = self.keyed()?.arg("testplanid", plan_id);
        let reply = self
            .invoke_accepting("getTestPlanPlatforms", args, &[codes::NO_PLATFORMS_FOR_PLAN])
            .await?;
        Ok(reply
            .map(|r| decode_list(&r, records::test_platform))
            .unwrap_or_default())
    }

    /// Execution counts of a plan, one entry per grouping the server reports.
    pub async fn get_totals_for_test_plan(
        &self,
        plan_id: i64,
    ) -> Result<Vec<TestPlanTotal>, TestLinkError> {
        let args = self.keyed()?.arg("testplanid", plan_id);
        let reply = self.invoke("getTotalsForTestPlan", args).await?;
        Ok(decode_list(&reply, records::test_plan_total))
    }

    /// Test cases linked to a plan, one record per case and platform.
    pub async fn get_test_cases_for_test_plan(
        &self,
        plan_id: i64,
        filter: &TestPlanCaseFilter,
    ) -> Result<Vec<TestCaseFromTestPlan>, TestLinkError> {
        let args = filter
            .slots()
            .into_iter()
            .fold(self.keyed()?.arg("testplanid", plan_id), |args, (name, value)| {
                args.arg(name, value)
            });
        let reply = self.invoke("getTestCasesForTestPlan", args).await?;
        Ok(records::test_cases_for_plan(&reply))
    }

    /// Links a test case version to a plan and returns the feature id (0 if none).
    pub async fn add_test_case_to_test_plan(
        &self,
        project_id: i64,
        plan_id: i64,
        external_id: &str,
        version: i64,
        platform_id: Option<i64>,
    ) -> Result<i64, TestLinkError> {
        let args = self
            .keyed()?
            .arg("testprojectid", project_id)
            .arg("testplanid", plan_id)
            .arg("testcaseexternalid", external_id)
            .arg("version", version)
            .opt("platformid", platform_id.filter(|id| *id != 0));
        let reply = self.invoke("addTestCaseToTestPlan", args).await?;
        Ok(decode_first(&reply, |s| to_int(s, "feature_id")).unwrap_or(0))
    }
}
