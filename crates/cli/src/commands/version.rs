//! Version command implementation.

use anyhow::{Context, Result};
use tracing::info;

use crate::cancellation::{CancellationToken, Cancelled};
use crate::formatters::{OutputFormat, get_formatter};

pub async fn run(
    config: zabbix_config::Config,
    output_format: OutputFormat,
    cancel: &CancellationToken,
) -> Result<()> {
    let mut client = crate::commands::build_client_from_config(&config)?;

    info!("Querying API version at {}", client.endpoint_url());

    let version = tokio::select! {
        res = client.api_version() => res.context("Failed to get API version")?,
        _ = cancel.cancelled() => return Err(Cancelled.into()),
    };

    let formatter = get_formatter(output_format);
    print!("{}", formatter.format_version(&version)?);

    Ok(())
}
