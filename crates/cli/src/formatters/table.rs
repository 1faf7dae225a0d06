//! Table formatter implementation.
//!
//! One row per template. Related collections are summarized by name, so
//! columns stay readable whatever `select*` flags were used.

use anyhow::Result;
use zabbix_client::{Relation, Template, TemplateTag};

use crate::formatters::Formatter;

/// Placeholder for missing or empty values.
const MISSING: &str = "N/A";

/// Tab-separated table formatter.
pub struct TableFormatter;

fn or_missing(value: &str) -> &str {
    if value.is_empty() { MISSING } else { value }
}

fn join_or_missing<I>(items: I) -> String
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let joined = items
        .into_iter()
        .map(|s| s.as_ref().to_string())
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join(", ");
    if joined.is_empty() {
        MISSING.to_string()
    } else {
        joined
    }
}

/// Names of related objects, or the number alone for a counted relation.
fn summarize<T>(relation: &Relation<T>, label: impl Fn(&T) -> String) -> String {
    match relation {
        Relation::Count(n) => n.to_string(),
        Relation::List(items) => join_or_missing(items.iter().map(label)),
    }
}

fn tag_label(tag: &TemplateTag) -> String {
    if tag.value.is_empty() {
        tag.tag.clone()
    } else {
        format!("{}={}", tag.tag, tag.value)
    }
}

impl Formatter for TableFormatter {
    fn format_templates(&self, templates: &[Template]) -> Result<String> {
        if templates.is_empty() {
            return Ok("No templates found.\n".to_string());
        }

        let mut output = String::new();
        output.push_str("ID\tHost\tName\tGroups\tTags\tLinked\n");

        for t in templates {
            output.push_str(&format!(
                "{}\t{}\t{}\t{}\t{}\t{}\n",
                or_missing(&t.template_id),
                or_missing(&t.host),
                or_missing(&t.name),
                summarize(&t.groups, |g| g.name.clone()),
                summarize(&t.tags, tag_label),
                summarize(&t.parent_templates, |p| {
                    if p.name.is_empty() { p.host.clone() } else { p.name.clone() }
                }),
            ));
        }

        Ok(output)
    }

    fn format_version(&self, version: &str) -> Result<String> {
        Ok(format!("Zabbix API version: {}\n", version))
    }
}
