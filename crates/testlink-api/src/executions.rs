// SPDX-FileCopyrightText: 2026 testlink-rs Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Builds and execution results.

use testlink_core::{Build, ExecutionResult, GeneralResult, RpcTransport, RpcValue, TestLinkError};
use testlink_decode::coerce::to_int;
use testlink_decode::{check_reply, decode_first, decode_list, records};
use tracing::debug;

use crate::client::{TestLink, general_result};
use crate::codes;
use crate::requests::ExecutionReport;

impl<T: RpcTransport> TestLink<T> {
    pub async fn get_builds_for_test_plan(
        &self,
        plan_id: i64,
    ) -> Result<Vec<Build>, TestLinkError> {
        let args = self.keyed()?.arg("testplanid", plan_id);
        let reply = self.invoke("getBuildsForTestPlan", args).await?;
        Ok(decode_list(&reply, records::build))
    }

    /// The newest build of a plan, or `None` if the plan has no build yet.
    pub async fn get_latest_build_for_test_plan(
        &self,
        plan_id: i64,
    ) -> Result<Option<Build>, TestLinkError> {
        let args = self.keyed()?.arg("testplanid", plan_id);
        let reply = self
            .invoke_accepting("getLatestBuildForTestPlan", args, &[codes::NO_BUILD_FOR_PLAN])
            .await?;
        Ok(reply.and_then(|r| decode_first(&r, records::build)))
    }

    pub async fn create_build(
        &self,
        plan_id: i64,
        build_name: &str,
        build_notes: &str,
    ) -> Result<GeneralResult, TestLinkError> {
        let args = self
            .keyed()?
            .arg("testplanid", plan_id)
            .arg("buildname", build_name)
            .arg("buildnotes", build_notes);
        let reply = self.invoke("createBuild", args).await?;
        Ok(general_result(&reply))
    }

    /// Records an execution result.
    ///
    /// Fails with [`TestLinkError::InvalidArgument`] before calling the server
    /// if the report names no platform.
    pub async fn report_tc_result(
        &self,
        report: &ExecutionReport,
    ) -> Result<GeneralResult, TestLinkError> {
        let mut args = self
            .keyed()?
            .arg("testcaseid", report.test_case_id)
            .arg("testplanid", report.test_plan_id)
            .arg("status", report.status.to_string());

        args = match (&report.platform_name, report.platform_id.filter(|id| *id != 0)) {
            (Some(name), _) => args.arg("platformname", name.as_str()),
            (None, Some(id)) => args.arg("platformid", id),
            (None, None) => {
                return Err(TestLinkError::InvalidArgument(
                    "must supply either a platform id or a platform name".into(),
                ));
            }
        };

        // Zero ids are unset. bugid holds its slot whenever buildid is sent.
        let build_id = report.build_id.filter(|id| *id != 0);
        let bug_id = report
            .bug_id
            .filter(|id| *id != 0)
            .or(build_id.map(|_| 0));
        let args = args
            .arg("overwrite", report.overwrite)
            .arg("notes", report.notes.as_str())
            .arg("guess", report.guess)
            .opt("bugid", bug_id)
            .opt("buildid", build_id);

        let reply = self.invoke("reportTCResult", args).await?;
        Ok(general_result(&reply))
    }

    /// The latest execution of a case in a plan, or `None` if it never ran.
    pub async fn get_last_execution_result(
        &self,
        plan_id: i64,
        test_case_id: i64,
    ) -> Result<Option<ExecutionResult>, TestLinkError> {
        let args = self
            .keyed()?
            .arg("testplanid", plan_id)
            .arg("testcaseid", test_case_id);
        let reply = self.send("getLastExecutionResult", &args).await?;

        // An empty list or a leading scalar means "never executed".
        match &reply {
            RpcValue::Array(items) if matches!(items.first(), None | Some(RpcValue::Int(_))) => {
                debug!(plan_id, test_case_id, "no execution recorded");
                return Ok(None);
            }
            _ => {}
        }
        check_reply(&reply, &[])?;

        Ok(decode_first(&reply, |s| {
            (to_int(s, "id") != -1).then(|| records::execution_result(s))
        })
        .flatten())
    }

    pub async fn delete_execution(
        &self,
        execution_id: i64,
    ) -> Result<GeneralResult, TestLinkError> {
        let args = self.keyed()?.arg("executionid", execution_id);
        let reply = self.invoke("deleteExecution", args).await?;
        Ok(general_result(&reply))
    }
}
