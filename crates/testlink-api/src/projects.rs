// SPDX-FileCopyrightText: 2026 testlink-rs Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Test project operations.

use testlink_core::{GeneralResult, RpcTransport, TestLinkError, TestProject};
use testlink_decode::{decode_first, decode_list, records};

use crate::client::{TestLink, general_result};

impl<T: RpcTransport> TestLink<T> {
    /// All projects visible to the developer key.
    pub async fn get_projects(&self) -> Result<Vec<TestProject>, TestLinkError> {
        let reply = self.invoke("getProjects", self.keyed()?).await?;
        Ok(decode_list(&reply, records::test_project))
    }

    pub async fn get_test_project_by_name(
        &self,
        project_name: &str,
    ) -> Result<Option<TestProject>, TestLinkError> {
        let args = self.keyed()?.arg("testprojectname", project_name);
        let reply = self.invoke("getTestProjectByName", args).await?;
        Ok(decode_first(&reply, records::test_project))
    }

    /// Creates a project. `prefix` is used for external test case ids.
    pub async fn create_test_project(
        &self,
        project_name: &str,
        prefix: &str,
        notes: &str,
    ) -> Result<GeneralResult, TestLinkError> {
        let args = self
            .keyed()?
            .arg("testprojectname", project_name)
            .arg("testcaseprefix", prefix)
            .arg("notes", notes);
        let reply = self.invoke("createTestProject", args).await?;
        Ok(general_result(&reply))
    }
}
