//! Templates command implementation.
//!
//! Translates command-line filters into `template.get` parameters. Only the
//! filters the user passed end up in the request.

use anyhow::{Context, Result};
use clap::Args;
use serde_json::json;
use tracing::info;
use zabbix_client::{
    GetParameters, SelectQuery, SortOrder, TemplateEvaltype, TemplateGetParams, TemplateTag,
    TemplateTagOperator,
};

use crate::cancellation::{CancellationToken, Cancelled};
use crate::formatters::{OutputFormat, get_formatter};

/// Filters and selectors for `zabbix-cli templates`.
#[derive(Args, Debug, Default)]
pub struct TemplatesArgs {
    /// Only templates with this ID (repeatable)
    #[arg(long = "template-id", value_name = "ID")]
    pub template_ids: Vec<String>,

    /// Only templates in this host group (repeatable)
    #[arg(long = "group-id", value_name = "ID")]
    pub group_ids: Vec<String>,

    /// Only templates linked to this host (repeatable)
    #[arg(long = "host-id", value_name = "ID")]
    pub host_ids: Vec<String>,

    /// Only templates that are children of this template (repeatable)
    #[arg(long = "parent-template-id", value_name = "ID")]
    pub parent_template_ids: Vec<String>,

    /// Exact visible name
    #[arg(long)]
    pub name: Option<String>,

    /// Substring match on the visible name; `*` enables wildcards
    #[arg(long, value_name = "TEXT")]
    pub search_name: Option<String>,

    /// Only templates that have items
    #[arg(long)]
    pub with_items: bool,

    /// Only templates that have triggers
    #[arg(long)]
    pub with_triggers: bool,

    /// Only templates that have graphs
    #[arg(long)]
    pub with_graphs: bool,

    /// Only templates that have web scenarios
    #[arg(long)]
    pub with_httptests: bool,

    /// Include host groups
    #[arg(long)]
    pub select_groups: bool,

    /// Include template tags
    #[arg(long)]
    pub select_tags: bool,

    /// Include linked hosts
    #[arg(long)]
    pub select_hosts: bool,

    /// Include child templates
    #[arg(long)]
    pub select_templates: bool,

    /// Include parent templates
    #[arg(long)]
    pub select_parent_templates: bool,

    /// Include user macros
    #[arg(long)]
    pub select_macros: bool,

    /// Tag filter: `TAG` (tag exists) or `TAG=VALUE` (exact value); repeatable
    #[arg(long = "tag", value_name = "TAG[=VALUE]", value_parser = parse_tag)]
    pub tags: Vec<TemplateTag>,

    /// Match any tag filter instead of all of them
    #[arg(long)]
    pub tags_any: bool,

    /// Maximum number of templates to return
    #[arg(long)]
    pub limit: Option<u32>,
}

/// Parse `TAG` or `TAG=VALUE` into a tag filter.
fn parse_tag(raw: &str) -> std::result::Result<TemplateTag, String> {
    let (tag, value, operator) = match raw.split_once('=') {
        Some((tag, value)) => (tag, value, TemplateTagOperator::Equals),
        None => (raw, "", TemplateTagOperator::Contains),
    };

    let tag = tag.trim();
    if tag.is_empty() {
        return Err(format!("invalid tag filter '{raw}': tag name is empty"));
    }

    Ok(TemplateTag::new(tag, value).with_operator(operator))
}

impl TemplatesArgs {
    /// Build the `template.get` parameters for these arguments.
    pub fn to_params(&self) -> TemplateGetParams {
        let select = |enabled: bool| enabled.then(SelectQuery::extend);

        let mut get = GetParameters {
            output: Some(SelectQuery::extend()),
            limit: self.limit,
            sort_field: vec!["name".to_string()],
            sort_order: Some(SortOrder::Ascending),
            ..Default::default()
        };

        if let Some(ref name) = self.name {
            get.filter.insert("name".to_string(), json!([name]));
        }
        if let Some(ref text) = self.search_name {
            get.search.insert("name".to_string(), text.clone());
            get.search_wildcards_enabled = text.contains('*');
        }

        TemplateGetParams {
            get,
            template_ids: self.template_ids.clone(),
            group_ids: self.group_ids.clone(),
            parent_template_ids: self.parent_template_ids.clone(),
            host_ids: self.host_ids.clone(),
            with_items: self.with_items,
            with_triggers: self.with_triggers,
            with_graphs: self.with_graphs,
            with_httptests: self.with_httptests,
            evaltype: self.tags_any.then_some(TemplateEvaltype::Or),
            tags: self.tags.clone(),
            select_groups: select(self.select_groups),
            select_tags: select(self.select_tags),
            select_hosts: select(self.select_hosts),
            select_templates: select(self.select_templates),
            select_parent_templates: select(self.select_parent_templates),
            select_macros: select(self.select_macros),
            ..Default::default()
        }
    }
}

pub async fn run(
    config: zabbix_config::Config,
    args: TemplatesArgs,
    output_format: OutputFormat,
    cancel: &CancellationToken,
) -> Result<()> {
    info!("Listing templates");

    let mut client = crate::commands::build_client_from_config(&config)?;
    let params = args.to_params();

    let templates = tokio::select! {
        res = client.get_templates(&params) => res.context("Failed to list templates")?,
        _ = cancel.cancelled() => return Err(Cancelled.into()),
    };

    info!(count = templates.len(), "Templates retrieved");

    let formatter = get_formatter(output_format);
    print!("{}", formatter.format_templates(&templates)?);

    Ok(())
}
