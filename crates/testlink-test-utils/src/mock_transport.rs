// SPDX-FileCopyrightText: 2026 testlink-rs Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Mock RPC transport for deterministic testing.
//!
//! `MockTransport` implements `RpcTransport` with pre-configured replies and
//! records every call, so tests can assert on the exact argument list an
//! operation sent without a server.

use std::collections::VecDeque;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;
use tracing::debug;

use testlink_core::{RpcTransport, RpcValue, TestLinkError};

/// One call observed by [`MockTransport`].
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedCall {
    pub method: String,
    pub args: Vec<(String, RpcValue)>,
}

impl RecordedCall {
    /// Argument names in the order they were sent.
    pub fn arg_names(&self) -> Vec<&str> {
        self.args.iter().map(|(name, _)| name.as_str()).collect()
    }

    /// Value of the named argument, if it was sent.
    pub fn arg(&self, name: &str) -> Option<&RpcValue> {
        self.args
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, value)| value)
    }
}

/// A mock transport that returns pre-configured replies.
///
/// Replies are popped from a FIFO queue. When the queue is empty the empty
/// string is returned, which is how the server says "no data".
#[derive(Clone)]
pub struct MockTransport {
    replies: Arc<Mutex<VecDeque<Result<RpcValue, TestLinkError>>>>,
    calls: Arc<Mutex<Vec<RecordedCall>>>,
}

impl MockTransport {
    /// Create a new mock transport with an empty reply queue.
    pub fn new() -> Self {
        Self {
            replies: Arc::new(Mutex::new(VecDeque::new())),
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Create a mock transport pre-loaded with the given replies.
    pub fn with_replies(replies: Vec<RpcValue>) -> Self {
        Self {
            replies: Arc::new(Mutex::new(replies.into_iter().map(Ok).collect())),
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Queue a reply.
    pub async fn push_reply(&self, reply: impl Into<RpcValue>) {
        self.replies.lock().await.push_back(Ok(reply.into()));
    }

    /// Queue a transport-level failure.
    pub async fn push_error(&self, error: TestLinkError) {
        self.replies.lock().await.push_back(Err(error));
    }

    /// Every call seen so far, oldest first.
    pub async fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().await.clone()
    }

    /// The most recent call.
    pub async fn last_call(&self) -> Option<RecordedCall> {
        self.calls.lock().await.last().cloned()
    }
}

impl Default for MockTransport {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RpcTransport for MockTransport {
    async fn call(
        &self,
        method: &str,
        args: &[(&str, RpcValue)],
    ) -> Result<RpcValue, TestLinkError> {
        debug!(method, args = args.len(), "mock transport call");
        self.calls.lock().await.push(RecordedCall {
            method: method.to_string(),
            args: args
                .iter()
                .map(|(name, value)| (name.to_string(), value.clone()))
                .collect(),
        });

        self.replies
            .lock()
            .await
            .pop_front()
            .unwrap_or_else(|| Ok(RpcValue::from("")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn replies_are_fifo_then_empty() {
        let transport = MockTransport::with_replies(vec![RpcValue::from(1), RpcValue::from(2)]);
        assert_eq!(transport.call("a", &[]).await.unwrap(), RpcValue::Int(1));
        assert_eq!(transport.call("b", &[]).await.unwrap(), RpcValue::Int(2));
        assert_eq!(transport.call("c", &[]).await.unwrap(), RpcValue::from(""));
    }

    #[tokio::test]
    async fn records_method_and_ordered_args() {
        let transport = MockTransport::new();
        transport
            .call(
                "getTestCase",
                &[("devKey", RpcValue::from("k")), ("testcaseid", RpcValue::from(5))],
            )
            .await
            .unwrap();

        let call = transport.last_call().await.unwrap();
        assert_eq!(call.method, "getTestCase");
        assert_eq!(call.arg_names(), vec!["devKey", "testcaseid"]);
        assert_eq!(call.arg("testcaseid"), Some(&RpcValue::Int(5)));
        assert_eq!(call.arg("version"), None);
    }

    #[tokio::test]
    async fn queued_errors_are_returned() {
        let transport = MockTransport::new();
        transport.push_error(TestLinkError::transport("boom")).await;
        assert!(transport.call("sayHello", &[]).await.is_err());
        assert_eq!(transport.calls().await.len(), 1);
    }
}
