//! Output formatters for CLI commands.
//!
//! Responsibilities:
//! - Provide the JSON, YAML and table output formats.
//! - Implement the `Formatter` trait for each resource the CLI prints.
//!
//! Does NOT handle:
//! - Printing to stdout (formatters return strings).
//!
//! Invariants:
//! - Tables are tab-separated for consistent alignment in standard terminals.
//! - Missing values render as `N/A` in tables; JSON and YAML omit them.

use anyhow::Result;
use clap::ValueEnum;
use zabbix_client::Template;

mod json;
mod table;
mod yaml;

pub use json::JsonFormatter;
pub use table::TableFormatter;
pub use yaml::YamlFormatter;

/// Supported output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Json,
    Yaml,
    Table,
}

/// Formatter trait for different output types.
pub trait Formatter {
    /// Format a list of templates.
    fn format_templates(&self, templates: &[Template]) -> Result<String>;

    /// Format the server's API version.
    fn format_version(&self, version: &str) -> Result<String>;
}

/// Get a formatter for the specified output format.
pub fn get_formatter(format: OutputFormat) -> Box<dyn Formatter> {
    match format {
        OutputFormat::Json => Box::new(JsonFormatter),
        OutputFormat::Yaml => Box::new(YamlFormatter),
        OutputFormat::Table => Box::new(TableFormatter),
    }
}
