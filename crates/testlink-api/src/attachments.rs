// SPDX-FileCopyrightText: 2026 testlink-rs Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Attachment upload and download.
//!
//! Content travels base64-encoded as text. Uploads encode here; downloads are
//! decoded by the record decoder.

use testlink_core::{Attachment, AttachmentRequestResponse, RpcTransport, TestLinkError};
use testlink_decode::{decode_first, decode_list, encode_base64, records};

use crate::client::TestLink;
use crate::requests::AttachmentUpload;

impl<T: RpcTransport> TestLink<T> {
    pub async fn upload_execution_attachment(
        &self,
        execution_id: i64,
        upload: &AttachmentUpload,
    ) -> Result<Option<AttachmentRequestResponse>, TestLinkError> {
        self.upload("uploadExecutionAttachment", "executionid", execution_id, upload)
            .await
    }

    pub async fn upload_test_case_attachment(
        &self,
        test_case_id: i64,
        upload: &AttachmentUpload,
    ) -> Result<Option<AttachmentRequestResponse>, TestLinkError> {
        self.upload("uploadTestCaseAttachment", "testcaseid", test_case_id, upload)
            .await
    }

    pub async fn upload_test_suite_attachment(
        &self,
        suite_id: i64,
        upload: &AttachmentUpload,
    ) -> Result<Option<AttachmentRequestResponse>, TestLinkError> {
        self.upload("uploadTestSuiteAttachment", "testsuiteid", suite_id, upload)
            .await
    }

    pub async fn upload_test_project_attachment(
        &self,
        project_id: i64,
        upload: &AttachmentUpload,
    ) -> Result<Option<AttachmentRequestResponse>, TestLinkError> {
        self.upload("uploadTestProjectAttachment", "testprojectid", project_id, upload)
            .await
    }

    async fn upload(
        &self,
        method: &'static str,
        owner_arg: &'static str,
        owner_id: i64,
        upload: &AttachmentUpload,
    ) -> Result<Option<AttachmentRequestResponse>, TestLinkError> {
        let args = self
            .keyed()?
            .arg(owner_arg, owner_id)
            .arg("filename", upload.file_name.as_str())
            .arg("filetype", upload.file_type.as_str())
            .arg("content", encode_base64(&upload.content))
            .arg("title", upload.title.as_str())
            .arg("description", upload.description.as_str());
        let reply = self.invoke(method, args).await?;
        Ok(decode_first(&reply, records::attachment_request_response))
    }

    pub async fn get_test_case_attachments(
        &self,
        test_case_id: i64,
    ) -> Result<Vec<Attachment>, TestLinkError> {
        let args = self.keyed()?.arg("testcaseid", test_case_id);
        let reply = self.invoke("getTestCaseAttachments", args).await?;
        Ok(decode_list(&reply, records::attachment))
    }

    pub async fn get_test_suite_attachments(
        &self,
        suite_id: i64,
    ) -> Result<Vec<Attachment>, TestLinkError> {
        let args = self.keyed()?.arg("testsuiteid", suite_id);
        let reply = self.invoke("getTestSuiteAttachments", args).await?;
        Ok(decode_list(&reply, records::attachment))
    }
}
