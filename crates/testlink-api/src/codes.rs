// SPDX-FileCopyrightText: 2026 testlink-rs Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Server error codes that some calls treat as "nothing found".

/// The test plan has no build yet.
pub const NO_BUILD_FOR_PLAN: i64 = 3031;
/// The test plan has no platforms assigned.
pub const NO_PLATFORMS_FOR_PLAN: i64 = 3041;
/// No test case id matched.
pub const NO_TEST_CASE_ID: i64 = 5030;
/// The project or suite has no child suites.
pub const NO_CHILD_SUITES: i64 = 7008;
/// No test suite with that id.
pub const NO_SUCH_SUITE: i64 = 8000;
/// No user with that login.
pub const NO_SUCH_USER: i64 = 10000;
