// SPDX-FileCopyrightText: 2026 testlink-rs Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Core library for the TestLink client.
//!
//! This crate provides the error type, the dynamically-typed RPC value model,
//! the transport trait and the domain records shared by the rest of the
//! workspace. It performs no I/O.

pub mod error;
pub mod traits;
pub mod types;
pub mod value;

// Re-export key items at crate root for ergonomic imports.
pub use error::TestLinkError;
pub use traits::RpcTransport;
pub use types::{
    ActionOnDuplicatedName, AdditionalInfo, Attachment, AttachmentRequestResponse, Build,
    ExecutionResult, ExecutionStatus, GeneralResult, NO_RESPONSE_MESSAGE, TestCase,
    TestCaseFromTestPlan, TestCaseFromTestSuite, TestCaseId, TestLinkErrorMessage, TestPlan,
    TestPlanTotal, TestPlatform, TestProject, TestStep, TestSuite,
};
pub use value::{RpcStruct, RpcValue};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn testlink_error_has_all_variants() {
        let _config = TestLinkError::Config("test".into());
        let _arg = TestLinkError::InvalidArgument("test".into());
        let _remote = TestLinkError::remote(vec![TestLinkErrorMessage {
            code: 7000,
            message: "bad plan".into(),
        }]);
        let _fault = TestLinkError::Fault {
            code: -32601,
            message: "no such method".into(),
        };
        let _transport = TestLinkError::Transport {
            message: "test".into(),
            source: Some(Box::new(std::io::Error::other("test"))),
        };
    }

    #[test]
    fn remote_error_message_uses_first_error() {
        let err = TestLinkError::remote(vec![
            TestLinkErrorMessage {
                code: 2000,
                message: "Can not authenticate client: invalid developer key".into(),
            },
            TestLinkErrorMessage {
                code: 7000,
                message: "second".into(),
            },
        ]);
        assert_eq!(
            err.to_string(),
            "testlink returned an error: 2000:Can not authenticate client: invalid developer key"
        );
        assert_eq!(err.codes(), vec![2000, 7000]);
        assert_eq!(err.first_code(), Some(2000));
    }

    #[test]
    fn non_remote_errors_carry_no_codes() {
        let err = TestLinkError::transport("connection refused");
        assert!(err.codes().is_empty());
        assert_eq!(err.first_code(), None);
        assert_eq!(err.to_string(), "transport error: connection refused");
    }

    #[test]
    fn transport_error_exposes_source() {
        use std::error::Error;

        let err = TestLinkError::Transport {
            message: "io".into(),
            source: Some(Box::new(std::io::Error::other("reset"))),
        };
        assert!(err.source().is_some());
    }
}
