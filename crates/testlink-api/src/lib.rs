// SPDX-FileCopyrightText: 2026 testlink-rs Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Typed operation facade over the TestLink XML-RPC API.
//!
//! [`TestLink`] exposes one async method per remote procedure. It is generic
//! over the [`RpcTransport`](testlink_core::RpcTransport) it calls through,
//! so the same client runs against the HTTP transport or a scripted mock.
//!
//! ```ignore
//! let client = TestLink::new(XmlRpcTransport::new(&config)?, "my-dev-key");
//! for project in client.get_projects().await? {
//!     println!("{:?}", project.name);
//! }
//! ```

pub mod args;
mod attachments;
mod cases;
pub mod client;
pub mod codes;
mod executions;
mod plans;
mod projects;
pub mod requests;
mod suites;

pub use client::TestLink;
pub use requests::{AttachmentUpload, ExecutionReport, NewTestCase, TestPlanCaseFilter};
