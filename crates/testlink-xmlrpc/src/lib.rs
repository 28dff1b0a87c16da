// SPDX-FileCopyrightText: 2026 testlink-rs Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! XML-RPC over HTTP transport for TestLink.
//!
//! [`XmlRpcTransport`] implements [`RpcTransport`](testlink_core::RpcTransport)
//! by posting `tl.<method>` calls to the server's `xmlrpc.php` endpoint.

pub mod client;
pub mod codec;

pub use client::XmlRpcTransport;
