//! YAML formatter implementation.

use anyhow::Result;
use std::collections::BTreeMap;
use zabbix_client::Template;

use crate::formatters::Formatter;

/// YAML formatter.
pub struct YamlFormatter;

impl Formatter for YamlFormatter {
    fn format_templates(&self, templates: &[Template]) -> Result<String> {
        Ok(serde_yaml::to_string(templates)?)
    }

    fn format_version(&self, version: &str) -> Result<String> {
        let value = BTreeMap::from([("version", version)]);
        Ok(serde_yaml::to_string(&value)?)
    }
}
