//! JSON formatter implementation.

use anyhow::Result;
use serde_json::json;
use zabbix_client::Template;

use crate::formatters::Formatter;

/// Pretty-printed JSON formatter.
pub struct JsonFormatter;

impl Formatter for JsonFormatter {
    fn format_templates(&self, templates: &[Template]) -> Result<String> {
        Ok(format!("{}\n", serde_json::to_string_pretty(templates)?))
    }

    fn format_version(&self, version: &str) -> Result<String> {
        let value = json!({ "version": version });
        Ok(format!("{}\n", serde_json::to_string_pretty(&value)?))
    }
}
