//! Shared test utilities for zabbix-cli integration tests.
//!
//! Invariants / Assumptions:
//! - Every command is hermetic: `.env` loading is disabled and credentials
//!   from the host environment are cleared.
//! - `ZABBIX_API_TOKEN` is set to "test-token" unless overridden.

use assert_cmd::Command;

/// Returns a hermetic `zabbix-cli` command for integration testing.
pub fn zabbix_cmd() -> Command {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("zabbix-cli");

    cmd.env("DOTENV_DISABLED", "1");
    cmd.env("ZABBIX_API_TOKEN", "test-token");

    cmd.env_remove("ZABBIX_URL")
        .env_remove("ZABBIX_USERNAME")
        .env_remove("ZABBIX_PASSWORD")
        .env_remove("ZABBIX_TIMEOUT")
        .env_remove("ZABBIX_MAX_RETRIES")
        .env_remove("ZABBIX_SKIP_VERIFY")
        .env_remove("RUST_LOG");

    cmd
}

/// Returns a hermetic `zabbix-cli` command pointed at `url`.
#[allow(dead_code)]
pub fn zabbix_cmd_with_url(url: &str) -> Command {
    let mut cmd = zabbix_cmd();
    cmd.env("ZABBIX_URL", url);
    cmd
}
