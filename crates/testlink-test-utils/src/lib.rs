// SPDX-FileCopyrightText: 2026 testlink-rs Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Test utilities for TestLink client tests.
//!
//! Provides a scripted transport and canned replies for fast, deterministic
//! tests that need no TestLink server.
//!
//! # Components
//!
//! - [`MockTransport`] - Mock transport with queued replies and call capture
//! - [`fixtures`] - Builders for replies in the server's wire shapes

pub mod fixtures;
pub mod mock_transport;

pub use mock_transport::{MockTransport, RecordedCall};
