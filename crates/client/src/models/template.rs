//! Template object and `template.get` parameters.
//!
//! Responsibilities:
//! - Mirror the Zabbix 5.4 template object and its tag sub-object.
//! - Define the `template.get` parameter bag with exact wire names.
//!
//! Non-responsibilities:
//! - Does not issue requests (see `client::templates`).
//! - Does not validate parameter combinations; the server does.
//!
//! See: https://www.zabbix.com/documentation/5.4/manual/api/reference/template/object

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::common::{GetParameters, Relation, SelectQuery, is_false};
use super::host::Host;
use super::hostgroup::Hostgroup;
use super::usermacro::UserMacro;
use crate::serde_helpers::{string_from_number_or_string, u8_from_string_or_number};

/// Match operator of a tag filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum TemplateTagOperator {
    /// Tag value contains the given text (wire value 0).
    Contains = 0,
    /// Tag value equals the given text (wire value 1).
    Equals = 1,
}

impl TryFrom<u8> for TemplateTagOperator {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Contains),
            1 => Ok(Self::Equals),
            other => Err(format!("unknown tag operator: {other}")),
        }
    }
}

impl Serialize for TemplateTagOperator {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(*self as u8)
    }
}

impl<'de> Deserialize<'de> for TemplateTagOperator {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = u8_from_string_or_number(deserializer)?;
        Self::try_from(raw).map_err(D::Error::custom)
    }
}

/// How tag filters are combined in `template.get`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(u8)]
pub enum TemplateEvaltype {
    /// And/Or (wire value 0, server default).
    #[default]
    AndOr = 0,
    /// Or (wire value 2).
    Or = 2,
}

impl TryFrom<u8> for TemplateEvaltype {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::AndOr),
            2 => Ok(Self::Or),
            other => Err(format!("unknown evaltype: {other}")),
        }
    }
}

impl Serialize for TemplateEvaltype {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(*self as u8)
    }
}

impl<'de> Deserialize<'de> for TemplateEvaltype {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = u8_from_string_or_number(deserializer)?;
        Self::try_from(raw).map_err(D::Error::custom)
    }
}

/// A template tag.
///
/// See: https://www.zabbix.com/documentation/5.4/manual/api/reference/template/object#template_tag
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateTag {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub tag: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub value: String,

    /// Only meaningful in `get` filters.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub operator: Option<TemplateTagOperator>,
}

impl TemplateTag {
    /// A tag filter with no operator (server default: contains).
    pub fn new(tag: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            value: value.into(),
            operator: None,
        }
    }

    /// Set the match operator.
    pub fn with_operator(mut self, operator: TemplateTagOperator) -> Self {
        self.operator = Some(operator);
        self
    }
}

/// A Zabbix template as returned by `template.get`.
///
/// Related collections are only present when the matching `select*`
/// parameter was set on the request, and hold a count for `"count"`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Template {
    #[serde(
        rename = "templateid",
        default,
        skip_serializing_if = "String::is_empty",
        deserialize_with = "string_from_number_or_string"
    )]
    pub template_id: String,

    /// Technical name.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub host: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,

    /// Visible name.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub name: String,

    #[serde(default, skip_serializing_if = "Relation::is_empty")]
    pub groups: Relation<Hostgroup>,

    #[serde(default, skip_serializing_if = "Relation::is_empty")]
    pub tags: Relation<TemplateTag>,

    /// Templates linked to this template.
    #[serde(default, skip_serializing_if = "Relation::is_empty")]
    pub templates: Relation<Template>,

    /// Templates this template is linked to.
    #[serde(
        rename = "parentTemplates",
        default,
        skip_serializing_if = "Relation::is_empty"
    )]
    pub parent_templates: Relation<Template>,

    #[serde(default, skip_serializing_if = "Relation::is_empty")]
    pub hosts: Relation<Host>,

    #[serde(default, skip_serializing_if = "Relation::is_empty")]
    pub macros: Relation<UserMacro>,
}

/// Parameters of `template.get`.
///
/// See: https://www.zabbix.com/documentation/5.4/manual/api/reference/template/get#parameters
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TemplateGetParams {
    #[serde(flatten)]
    pub get: GetParameters,

    #[serde(rename = "templateids", default, skip_serializing_if = "Vec::is_empty")]
    pub template_ids: Vec<String>,

    #[serde(rename = "groupids", default, skip_serializing_if = "Vec::is_empty")]
    pub group_ids: Vec<String>,

    #[serde(
        rename = "parentTemplateids",
        default,
        skip_serializing_if = "Vec::is_empty"
    )]
    pub parent_template_ids: Vec<String>,

    #[serde(rename = "hostids", default, skip_serializing_if = "Vec::is_empty")]
    pub host_ids: Vec<String>,

    #[serde(rename = "graphids", default, skip_serializing_if = "Vec::is_empty")]
    pub graph_ids: Vec<String>,

    #[serde(rename = "itemids", default, skip_serializing_if = "Vec::is_empty")]
    pub item_ids: Vec<String>,

    #[serde(rename = "triggerids", default, skip_serializing_if = "Vec::is_empty")]
    pub trigger_ids: Vec<String>,

    #[serde(default, skip_serializing_if = "is_false")]
    pub with_items: bool,

    #[serde(default, skip_serializing_if = "is_false")]
    pub with_triggers: bool,

    #[serde(default, skip_serializing_if = "is_false")]
    pub with_graphs: bool,

    #[serde(default, skip_serializing_if = "is_false")]
    pub with_httptests: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub evaltype: Option<TemplateEvaltype>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<TemplateTag>,

    #[serde(rename = "selectGroups", default, skip_serializing_if = "Option::is_none")]
    pub select_groups: Option<SelectQuery>,

    #[serde(rename = "selectTags", default, skip_serializing_if = "Option::is_none")]
    pub select_tags: Option<SelectQuery>,

    #[serde(rename = "selectHosts", default, skip_serializing_if = "Option::is_none")]
    pub select_hosts: Option<SelectQuery>,

    #[serde(
        rename = "selectTemplates",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub select_templates: Option<SelectQuery>,

    #[serde(
        rename = "selectParentTemplates",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub select_parent_templates: Option<SelectQuery>,

    #[serde(rename = "selectMacros", default, skip_serializing_if = "Option::is_none")]
    pub select_macros: Option<SelectQuery>,
}
