//! Command implementations.

pub mod templates;
pub mod version;

use anyhow::{Context, Result};
use zabbix_client::ZabbixClient;
use zabbix_config::Config;

use crate::args::{Cli, Commands};
use crate::cancellation::CancellationToken;

/// Build a client from loaded configuration.
pub fn build_client_from_config(config: &Config) -> Result<ZabbixClient> {
    ZabbixClient::builder()
        .from_config(config)
        .build()
        .context("Failed to build Zabbix client")
}

/// Dispatch the parsed command.
pub async fn run(cli: Cli, config: Config, cancel: &CancellationToken) -> Result<()> {
    match cli.command {
        Commands::Templates(args) => templates::run(config, args, cli.output, cancel).await,
        Commands::Version => version::run(config, cli.output, cancel).await,
    }
}
