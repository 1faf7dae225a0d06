//! CLI argument definitions and parsing.
//!
//! Non-responsibilities:
//! - Does not execute commands (see `commands` module).
//! - Does not validate connection settings (see `zabbix_config::ConfigLoader`).

use clap::{Parser, Subcommand};

use crate::commands::templates::TemplatesArgs;
use crate::formatters::OutputFormat;

#[derive(Parser, Debug)]
#[command(name = "zabbix-cli")]
#[command(about = "Zabbix CLI - Query Zabbix templates from the command line", long_about = None)]
#[command(version)]
#[command(
    after_help = "Examples:\n  zabbix-cli version\n  zabbix-cli templates --name 'Template OS Linux' --select-groups\n  zabbix-cli -o json templates --host-id 10084 --select-macros\n  zabbix-cli templates --tag class=os --tag target --tags-any\n"
)]
pub struct Cli {
    /// Zabbix frontend URL (e.g., https://zabbix.example.com)
    #[arg(short = 'u', long, global = true, env = "ZABBIX_URL")]
    pub url: Option<String>,

    /// Username for password authentication
    #[arg(long, global = true, env = "ZABBIX_USERNAME")]
    pub username: Option<String>,

    /// Password for password authentication
    #[arg(long, global = true, env = "ZABBIX_PASSWORD", hide_env_values = true)]
    pub password: Option<String>,

    /// API token (preferred over username/password)
    #[arg(short, long, global = true, env = "ZABBIX_API_TOKEN", hide_env_values = true)]
    pub api_token: Option<String>,

    /// Request timeout in seconds
    #[arg(long, global = true)]
    pub timeout: Option<u64>,

    /// Maximum number of retries for 429/502/503/504 responses
    #[arg(long, global = true)]
    pub max_retries: Option<usize>,

    /// Skip TLS certificate verification (for self-signed certificates)
    #[arg(long, global = true)]
    pub skip_verify: bool,

    /// Output format
    #[arg(short, long, global = true, value_enum, default_value_t = OutputFormat::Table)]
    pub output: OutputFormat,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List templates matching the given filters
    Templates(TemplatesArgs),

    /// Show the API version reported by the server
    Version,
}
