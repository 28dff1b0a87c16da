// SPDX-FileCopyrightText: 2026 testlink-rs Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Subcommand definitions and their execution against a [`TestLink`] client.

use clap::Subcommand;
use serde::Serialize;
use serde_json::Value;
use testlink_api::{TestLink, TestPlanCaseFilter};
use testlink_core::{RpcTransport, TestLinkError};
use thiserror::Error;

/// Available subcommands.
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Check that the server answers.
    Ping,
    /// Show the server's version banner.
    About,
    /// Check a developer key (the configured one by default).
    CheckKey {
        /// Key to check instead of the configured one.
        key: Option<String>,
    },
    /// List test projects.
    Projects,
    /// List the test plans of a project.
    Plans { project_id: i64 },
    /// List the top-level test suites of a project.
    Suites { project_id: i64 },
    /// List the builds of a test plan.
    Builds { plan_id: i64 },
    /// List the test cases linked to a test plan.
    Cases {
        plan_id: i64,
        /// Only cases assigned in this build.
        #[arg(long)]
        build_id: Option<i64>,
    },
    /// List the platforms of a test plan.
    Platforms { plan_id: i64 },
    /// Show execution totals of a test plan.
    Totals { plan_id: i64 },
}

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Api(#[from] TestLinkError),

    #[error("failed to render output: {0}")]
    Output(#[from] serde_json::Error),
}

/// Runs one command and returns its result as JSON.
pub async fn run<T: RpcTransport>(
    client: &TestLink<T>,
    command: &Commands,
) -> Result<Value, CliError> {
    match command {
        Commands::Ping => json(&client.say_hello().await?),
        Commands::About => json(&client.about().await?),
        Commands::CheckKey { key } => {
            let key = key.as_deref().ok_or_else(|| {
                TestLinkError::Config("no developer key to check".into())
            })?;
            json(&client.check_dev_key(key).await?)
        }
        Commands::Projects => json(&client.get_projects().await?),
        Commands::Plans { project_id } => json(&client.get_project_test_plans(*project_id).await?),
        Commands::Suites { project_id } => json(
            &client
                .get_first_level_test_suites_for_test_project(*project_id)
                .await?,
        ),
        Commands::Builds { plan_id } => json(&client.get_builds_for_test_plan(*plan_id).await?),
        Commands::Cases { plan_id, build_id } => {
            let filter = build_id
                .map(|id| TestPlanCaseFilter::new().build_id(id))
                .unwrap_or_default();
            json(&client.get_test_cases_for_test_plan(*plan_id, &filter).await?)
        }
        Commands::Platforms { plan_id } => {
            json(&client.get_test_plan_platforms(*plan_id).await?)
        }
        Commands::Totals { plan_id } => json(&client.get_totals_for_test_plan(*plan_id).await?),
    }
}

fn json<S: Serialize>(value: &S) -> Result<Value, CliError> {
    Ok(serde_json::to_value(value)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use testlink_core::RpcValue;
    use testlink_test_utils::{MockTransport, fixtures};

    fn client(replies: Vec<RpcValue>) -> TestLink<MockTransport> {
        TestLink::new(MockTransport::with_replies(replies), "k")
    }

    #[tokio::test]
    async fn ping_prints_greeting() {
        let client = client(vec![RpcValue::from("Hello!")]);
        assert_eq!(run(&client, &Commands::Ping).await.unwrap(), json!("Hello!"));
    }

    #[tokio::test]
    async fn projects_render_as_objects() {
        let client = client(vec![fixtures::array(vec![fixtures::project(3, "Apollo", "AP")])]);
        let out = run(&client, &Commands::Projects).await.unwrap();
        assert_eq!(out[0]["id"], json!(3));
        assert_eq!(out[0]["prefix"], json!("AP"));
    }

    #[tokio::test]
    async fn platforms_without_any_render_empty() {
        let client = client(vec![fixtures::error(3041, "no platforms")]);
        let out = run(&client, &Commands::Platforms { plan_id: 2 }).await.unwrap();
        assert_eq!(out, json!([]));
    }

    #[tokio::test]
    async fn cases_pass_build_filter() {
        let client = client(vec![RpcValue::from("")]);
        run(&client, &Commands::Cases { plan_id: 9, build_id: Some(4) })
            .await
            .unwrap();
        let call = client.transport().last_call().await.unwrap();
        assert_eq!(call.arg("buildid"), Some(&RpcValue::Int(4)));
        assert_eq!(call.arg("testcaseid"), Some(&RpcValue::Int(0)));
    }

    #[tokio::test]
    async fn check_key_needs_a_key() {
        let client = client(vec![]);
        let err = run(&client, &Commands::CheckKey { key: None }).await.unwrap_err();
        assert!(matches!(err, CliError::Api(TestLinkError::Config(_))));
    }

    #[tokio::test]
    async fn remote_errors_pass_through() {
        let client = client(vec![fixtures::error(2000, "invalid key")]);
        let err = run(&client, &Commands::Builds { plan_id: 1 }).await.unwrap_err();
        assert_eq!(err.to_string(), "testlink returned an error: 2000:invalid key");
    }
}
