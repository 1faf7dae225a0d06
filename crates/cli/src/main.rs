//! Zabbix CLI - query Zabbix templates from the command line.
//!
//! Responsibilities:
//! - Parse command-line arguments and environment variables.
//! - Build a validated configuration and a client from it.
//! - Format and display results (table, JSON, YAML).
//!
//! Does NOT handle:
//! - JSON-RPC encoding or authentication (see `crates/client`).
//!
//! Invariants:
//! - `load_dotenv()` is called BEFORE CLI parsing so `.env` can provide clap defaults.
//! - Logs go to stderr; stdout carries only command output.

mod args;
mod cancellation;
mod commands;
mod error;
mod formatters;

use args::Cli;
use cancellation::{CancellationToken, is_cancelled_error, print_cancelled_message};
use clap::Parser;
use error::{ExitCode, ExitCodeExt};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};
use zabbix_config::{Config, ConfigLoader};

fn build_config(cli: &Cli) -> anyhow::Result<Config> {
    let mut loader = ConfigLoader::new().from_env()?;

    if let Some(ref url) = cli.url {
        loader = loader.with_base_url(url.clone());
    }
    if let Some(ref username) = cli.username {
        loader = loader.with_username(username.clone());
    }
    if let Some(ref password) = cli.password {
        loader = loader.with_password(password.clone());
    }
    if let Some(ref token) = cli.api_token {
        loader = loader.with_api_token(token.clone());
    }
    if let Some(timeout_secs) = cli.timeout {
        loader = loader.with_timeout(std::time::Duration::from_secs(timeout_secs));
    }
    if let Some(retries) = cli.max_retries {
        loader = loader.with_max_retries(retries);
    }
    if cli.skip_verify {
        loader = loader.with_skip_verify(true);
    }

    Ok(loader.build()?)
}

#[tokio::main]
async fn main() {
    // Load .env file BEFORE CLI parsing so clap env defaults can read .env values
    if let Err(e) = ConfigLoader::new().load_dotenv() {
        eprintln!("Failed to load environment: {}", e);
        std::process::exit(ExitCode::GeneralError.as_i32());
    }

    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = match build_config(&cli) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to build configuration: {:#}", e);
            std::process::exit(ExitCode::GeneralError.as_i32());
        }
    };

    if config.is_using_default_credentials() {
        tracing::warn!(
            "Using default Zabbix credentials (Admin/zabbix). \
             These are for local development only - change before production use."
        );
    }

    let cancel = CancellationToken::new();
    let cancel_clone = cancel.clone();

    tokio::spawn(async move {
        if let Err(e) = tokio::signal::ctrl_c().await {
            eprintln!("Failed to listen for Ctrl+C: {}", e);
            return;
        }
        cancel_clone.cancel();
    });

    let exit_code = match commands::run(cli, config, &cancel).await {
        Ok(()) => ExitCode::Success,
        Err(e) if is_cancelled_error(&e) => {
            print_cancelled_message();
            ExitCode::Interrupted
        }
        Err(e) => {
            eprintln!("{:#}", e);
            e.exit_code()
        }
    };

    std::process::exit(exit_code.as_i32());
}
