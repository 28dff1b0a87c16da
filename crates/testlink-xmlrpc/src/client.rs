// SPDX-FileCopyrightText: 2026 testlink-rs Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! HTTP client for the TestLink XML-RPC endpoint.
//!
//! Provides [`XmlRpcTransport`], which posts one XML document per call and
//! decodes the reply. There are no retries: a failed call is reported as is.

use std::sync::{Mutex, PoisonError};
use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderValue};
use testlink_config::ServerConfig;
use testlink_core::{RpcTransport, RpcValue, TestLinkError};
use tracing::{debug, trace};

use crate::codec;

/// Prefix TestLink puts in front of every API method name.
const METHOD_PREFIX: &str = "tl.";

/// Longest slice of an error body quoted in a transport error.
const BODY_EXCERPT: usize = 200;

#[derive(Debug, Default)]
struct Traffic {
    request: Option<String>,
    response: Option<String>,
}

/// XML-RPC transport over HTTP(S).
#[derive(Debug)]
pub struct XmlRpcTransport {
    client: reqwest::Client,
    url: String,
    /// Present only when traffic capture is enabled.
    traffic: Option<Mutex<Traffic>>,
}

impl XmlRpcTransport {
    /// Builds a transport for the endpoint described by `config`.
    pub fn new(config: &ServerConfig) -> Result<Self, TestLinkError> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("text/xml"));

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(Duration::from_secs(config.timeout_secs))
            .danger_accept_invalid_certs(config.accept_invalid_certs)
            .build()
            .map_err(|e| TestLinkError::Transport {
                message: format!("failed to build HTTP client: {e}"),
                source: Some(Box::new(e)),
            })?;

        Ok(Self {
            client,
            url: config.url.clone(),
            traffic: config.capture_traffic.then(Mutex::default),
        })
    }

    /// The endpoint calls are posted to.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Body of the last request sent, if capture is enabled.
    pub fn last_request(&self) -> Option<String> {
        self.captured(|t| t.request.clone())
    }

    /// Body of the last response received, if capture is enabled.
    pub fn last_response(&self) -> Option<String> {
        self.captured(|t| t.response.clone())
    }

    fn captured(&self, read: impl FnOnce(&Traffic) -> Option<String>) -> Option<String> {
        let traffic = self.traffic.as_ref()?;
        read(&traffic.lock().unwrap_or_else(PoisonError::into_inner))
    }

    fn capture(&self, write: impl FnOnce(&mut Traffic)) {
        if let Some(traffic) = &self.traffic {
            write(&mut traffic.lock().unwrap_or_else(PoisonError::into_inner));
        }
    }
}

#[async_trait]
impl RpcTransport for XmlRpcTransport {
    async fn call(
        &self,
        method: &str,
        args: &[(&str, RpcValue)],
    ) -> Result<RpcValue, TestLinkError> {
        let body = codec::encode_call(&format!("{METHOD_PREFIX}{method}"), args);
        trace!(method, body = %body, "xml-rpc request");
        self.capture(|t| {
            t.request = Some(body.clone());
            t.response = None;
        });

        let response = self
            .client
            .post(&self.url)
            .body(body)
            .send()
            .await
            .map_err(|e| TestLinkError::Transport {
                message: format!("HTTP request failed: {e}"),
                source: Some(Box::new(e)),
            })?;

        let status = response.status();
        debug!(status = %status, method, "xml-rpc response received");

        let text = response.text().await.map_err(|e| TestLinkError::Transport {
            message: format!("failed to read response body: {e}"),
            source: Some(Box::new(e)),
        })?;
        trace!(method, body = %text, "xml-rpc response");
        self.capture(|t| t.response = Some(text.clone()));

        if !status.is_success() {
            let excerpt: String = text.chars().take(BODY_EXCERPT).collect();
            return Err(TestLinkError::transport(format!(
                "server returned {status}: {excerpt}"
            )));
        }

        codec::decode_response(&text)
    }
}
