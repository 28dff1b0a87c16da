// SPDX-FileCopyrightText: 2026 testlink-rs Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `testlink` - query a TestLink server from the command line.
//!
//! Results are printed to stdout as pretty JSON; diagnostics go to stderr.

mod commands;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use secrecy::SecretString;
use testlink_api::TestLink;
use testlink_config::TestLinkConfig;
use testlink_xmlrpc::XmlRpcTransport;
use tracing::debug;

use crate::commands::{CliError, Commands};

/// Command-line client for the TestLink XML-RPC API.
#[derive(Parser, Debug)]
#[command(name = "testlink", version, about, long_about = None)]
struct Cli {
    /// Read configuration from this file instead of the standard locations.
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let loaded = match &cli.config {
        Some(path) => testlink_config::load_and_validate_path(path),
        None => testlink_config::load_and_validate(),
    };
    let config = match loaded {
        Ok(config) => config,
        Err(errors) => {
            testlink_config::render_errors(&errors);
            return ExitCode::FAILURE;
        }
    };

    init_tracing(&config.logging.level);
    debug!(url = %config.server.url, "configuration loaded");

    match execute(&config, cli.command).await {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("testlink: {err}");
            ExitCode::FAILURE
        }
    }
}

async fn execute(config: &TestLinkConfig, command: Commands) -> Result<String, CliError> {
    let transport = XmlRpcTransport::new(&config.server)?;
    let client = TestLink::with_dev_key(
        transport,
        config.server.dev_key.clone().map(SecretString::from),
    );

    let command = match command {
        Commands::CheckKey { key: None } => Commands::CheckKey {
            key: config.server.dev_key.clone(),
        },
        other => other,
    };

    let output = commands::run(&client, &command).await?;
    Ok(serde_json::to_string_pretty(&output)?)
}

/// Initialize the tracing subscriber with an env filter.
///
/// `RUST_LOG` wins over the configured level.
fn init_tracing(log_level: &str) {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("testlink={log_level},warn")));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .init();
}
