// SPDX-FileCopyrightText: 2026 testlink-rs Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Trait seams of the TestLink client.
//!
//! The client core never talks to the network itself; it is handed an
//! [`RpcTransport`] and uses `#[async_trait]` for dynamic dispatch compatibility.

pub mod transport;

pub use transport::RpcTransport;
