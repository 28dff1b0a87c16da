// SPDX-FileCopyrightText: 2026 testlink-rs Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The [`TestLink`] client and the call pipeline shared by every operation.
//!
//! An operation validates the developer key, builds its argument list, calls
//! the transport once, normalizes in-band errors against its accepted codes
//! and finally decodes the reply. The operations themselves live in the
//! sibling modules, grouped by the kind of object they touch.

use secrecy::{ExposeSecret, SecretString};
use testlink_core::{GeneralResult, RpcTransport, RpcValue, TestLinkError};
use testlink_decode::{ErrorCheck, check_reply, decode_first, records};
use tracing::debug;

use crate::args::{Args, DEV_KEY};
use crate::codes;

/// Typed client for the TestLink XML-RPC API.
///
/// Holds no state besides the developer key and the transport, so one
/// instance can be shared across tasks behind an `Arc`.
#[derive(Debug)]
pub struct TestLink<T> {
    transport: T,
    dev_key: Option<SecretString>,
}

impl<T: RpcTransport> TestLink<T> {
    /// Creates a client that authenticates with `dev_key`.
    pub fn new(transport: T, dev_key: impl Into<String>) -> Self {
        Self {
            transport,
            dev_key: Some(SecretString::from(dev_key.into())),
        }
    }

    /// Creates a client with an optional developer key.
    ///
    /// Without a key only [`say_hello`](Self::say_hello) and
    /// [`about`](Self::about) succeed; every other operation fails with
    /// [`TestLinkError::Config`].
    pub fn with_dev_key(transport: T, dev_key: Option<SecretString>) -> Self {
        Self { transport, dev_key }
    }

    /// The underlying transport.
    pub fn transport(&self) -> &T {
        &self.transport
    }

    fn dev_key(&self) -> Result<&str, TestLinkError> {
        match &self.dev_key {
            None => Err(TestLinkError::Config(
                "developer key is missing, a developer key is required".into(),
            )),
            Some(key) if key.expose_secret().is_empty() => Err(TestLinkError::Config(
                "developer key is empty, a developer key is required".into(),
            )),
            Some(key) => Ok(key.expose_secret()),
        }
    }

    /// Starts an argument list with the developer key.
    pub(crate) fn keyed(&self) -> Result<Args, TestLinkError> {
        Ok(Args::new().arg(DEV_KEY, self.dev_key()?))
    }

    /// Calls the transport and rejects replies carrying any error indicator.
    pub(crate) async fn invoke(
        &self,
        method: &'static str,
        args: Args,
    ) -> Result<RpcValue, TestLinkError> {
        Ok(self
            .invoke_accepting(method, args, &[])
            .await?
            .unwrap_or_default())
    }

    /// Calls the transport and normalizes in-band errors.
    ///
    /// Returns `None` when the reply only carried codes from `accepted`.
    pub(crate) async fn invoke_accepting(
        &self,
        method: &'static str,
        args: Args,
        accepted: &[i64],
    ) -> Result<Option<RpcValue>, TestLinkError> {
        let reply = self.send(method, &args).await?;
        match check_reply(&reply, accepted)? {
            ErrorCheck::Clean => Ok(Some(reply)),
            ErrorCheck::Accepted(_) => Ok(None),
        }
    }

    /// Calls the transport without looking at the reply.
    pub(crate) async fn send(
        &self,
        method: &'static str,
        args: &Args,
    ) -> Result<RpcValue, TestLinkError> {
        debug!(method, args = args.len(), "calling testlink");
        let reply = self.transport.call(method, args.as_slice()).await?;
        debug!(method, kind = reply.kind(), "testlink replied");
        Ok(reply)
    }

    /// Checks that the server is reachable. Needs no developer key.
    pub async fn say_hello(&self) -> Result<String, TestLinkError> {
        let reply = self.invoke("sayHello", Args::new()).await?;
        Ok(scalar_text(&reply))
    }

    /// Server version and copyright banner. Needs no developer key.
    pub async fn about(&self) -> Result<String, TestLinkError> {
        let reply = self.invoke("about", Args::new()).await?;
        Ok(scalar_text(&reply))
    }

    /// Asks the server whether `dev_key` is a valid developer key.
    ///
    /// The key under test is sent in place of the client's own key.
    pub async fn check_dev_key(&self, dev_key: &str) -> Result<bool, TestLinkError> {
        self.dev_key()?;
        let reply = self
            .invoke("checkDevKey", Args::new().arg(DEV_KEY, dev_key))
            .await?;
        Ok(scalar_bool(&reply))
    }

    /// True if a user with `login` exists.
    pub async fn does_user_exist(&self, login: &str) -> Result<bool, TestLinkError> {
        let args = self.keyed()?.arg("user", login);
        let reply = self
            .invoke_accepting("doesUserExist", args, &[codes::NO_SUCH_USER])
            .await?;
        Ok(reply.as_ref().is_some_and(scalar_bool))
    }
}

/// The first result structure of a mutating call, or the no-response sentinel.
pub(crate) fn general_result(reply: &RpcValue) -> GeneralResult {
    decode_first(reply, records::general_result).unwrap_or_else(GeneralResult::no_response)
}

/// Renders a scalar reply as text. Non-scalar replies yield an empty string.
pub(crate) fn scalar_text(reply: &RpcValue) -> String {
    match reply {
        RpcValue::String(s) => s.clone(),
        RpcValue::Int(n) => n.to_string(),
        RpcValue::Double(d) => d.to_string(),
        RpcValue::Bool(b) => b.to_string(),
        _ => String::new(),
    }
}

/// Reads a scalar reply as a boolean: native `true`, `1`, `"1"` or `"true"`.
pub(crate) fn scalar_bool(reply: &RpcValue) -> bool {
    match reply {
        RpcValue::Bool(b) => *b,
        RpcValue::Int(n) => *n == 1,
        RpcValue::String(s) => s.trim() == "1" || s.trim().eq_ignore_ascii_case("true"),
        _ => false,
    }
}

/// Reads a scalar reply as an integer.
pub(crate) fn scalar_int(reply: &RpcValue) -> Option<i64> {
    match reply {
        RpcValue::Int(n) => Some(*n),
        RpcValue::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}
