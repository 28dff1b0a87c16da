// SPDX-FileCopyrightText: 2026 testlink-rs Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Transport trait for issuing remote procedure calls.

use std::sync::Arc;

use async_trait::async_trait;

use crate::error::TestLinkError;
use crate::value::RpcValue;

/// Issues one remote procedure call and returns the raw reply.
///
/// `method` is the bare TestLink procedure name (e.g. `getProjects`); the
/// transport adds whatever namespace its wire protocol needs. `args` are the
/// named arguments in the order the caller built them. Implementations must
/// not reorder, drop or pad them: the server resolves overloads by which
/// arguments are present.
#[async_trait]
pub trait RpcTransport: Send + Sync {
    async fn call(
        &self,
        method: &str,
        args: &[(&str, RpcValue)],
    ) -> Result<RpcValue, TestLinkError>;
}

#[async_trait]
impl<T: RpcTransport + ?Sized> RpcTransport for Arc<T> {
    async fn call(
        &self,
        method: &str,
        args: &[(&str, RpcValue)],
    ) -> Result<RpcValue, TestLinkError> {
        (**self).call(method, args).await
    }
}

#[async_trait]
impl<T: RpcTransport + ?Sized> RpcTransport for Box<T> {
    async fn call(
        &self,
        method: &str,
        args: &[(&str, RpcValue)],
    ) -> Result<RpcValue, TestLinkError> {
        (**self).call(method, args).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Echo;

    #[async_trait]
    impl RpcTransport for Echo {
        async fn call(
            &self,
            method: &str,
            args: &[(&str, RpcValue)],
        ) -> Result<RpcValue, TestLinkError> {
            Ok(RpcValue::from(format!("{method}:{}", args.len())))
        }
    }

    #[tokio::test]
    async fn shared_and_boxed_transports_delegate() {
        let shared: Arc<dyn RpcTransport> = Arc::new(Echo);
        let reply = shared.call("sayHello", &[]).await.unwrap();
        assert_eq!(reply, RpcValue::from("sayHello:0"));

        let boxed: Box<dyn RpcTransport> = Box::new(Echo);
        let reply = boxed
            .call("getProjects", &[("devKey", RpcValue::from("k"))])
            .await
            .unwrap();
        assert_eq!(reply, RpcValue::from("getProjects:1"));
    }
}
