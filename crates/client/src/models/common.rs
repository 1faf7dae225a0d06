//! Parameters shared by every Zabbix `*.get` method.
//!
//! This module contains the generic query options and selector values. It
//! does NOT contain object-specific parameters (see `template`).
//!
//! Invariants:
//! - Zero-valued fields (unset options, `false` flags, empty maps) are never
//!   serialized. Zabbix treats the presence of a flag as "enabled" whatever
//!   its value, so `false` must be omitted rather than sent.
//! - A `select*` set to `"count"` turns the related property into a number,
//!   so related collections decode through [`Relation`].

use serde::{Deserialize, Serialize};

use crate::serde_helpers::u64_from_string_or_number;
use std::collections::BTreeMap;
use std::fmt;

pub(crate) fn is_false(value: &bool) -> bool {
    !*value
}

/// Value of an `output` or `select*` parameter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SelectQuery {
    /// A preset, `"extend"` or `"count"`.
    Preset(SelectPreset),
    /// An explicit list of properties to return.
    Fields(Vec<String>),
}

/// Preset values accepted by `output` and `select*` parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SelectPreset {
    /// Return all object properties.
    Extend,
    /// Return the number of related objects instead of the objects.
    Count,
}

impl SelectQuery {
    /// Request every property (`"extend"`).
    pub fn extend() -> Self {
        Self::Preset(SelectPreset::Extend)
    }

    /// Request only the number of related objects (`"count"`).
    pub fn count() -> Self {
        Self::Preset(SelectPreset::Count)
    }

    /// Request the given properties.
    pub fn fields<I, S>(fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::Fields(fields.into_iter().map(Into::into).collect())
    }
}

/// A related collection on a returned object.
///
/// Holds the objects for `"extend"` or a field list, and the number of
/// related objects for `"count"`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Relation<T> {
    List(Vec<T>),
    Count(#[serde(deserialize_with = "u64_from_string_or_number")] u64),
}

impl<T> Default for Relation<T> {
    fn default() -> Self {
        Self::List(Vec::new())
    }
}

impl<T> From<Vec<T>> for Relation<T> {
    fn from(items: Vec<T>) -> Self {
        Self::List(items)
    }
}

impl<T> Relation<T> {
    /// The related objects; empty when only a count was requested.
    pub fn items(&self) -> &[T] {
        match self {
            Self::List(items) => items,
            Self::Count(_) => &[],
        }
    }

    /// Number of related objects, whichever form the server returned.
    pub fn count(&self) -> u64 {
        match self {
            Self::List(items) => items.len() as u64,
            Self::Count(n) => *n,
        }
    }

    /// True for an empty list. A count, even zero, is kept on the wire.
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::List(items) if items.is_empty())
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items().iter()
    }
}

impl<'a, T> IntoIterator for &'a Relation<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Sort direction for `sortorder`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum SortOrder {
    #[serde(rename = "ASC")]
    #[default]
    Ascending,
    #[serde(rename = "DESC")]
    Descending,
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ascending => write!(f, "ASC"),
            Self::Descending => write!(f, "DESC"),
        }
    }
}

/// Common parameters of every `*.get` request.
///
/// See: https://www.zabbix.com/documentation/5.4/manual/api/reference_commentary#common-get-method-parameters
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GetParameters {
    #[serde(rename = "countOutput", default, skip_serializing_if = "is_false")]
    pub count_output: bool,

    #[serde(default, skip_serializing_if = "is_false")]
    pub editable: bool,

    #[serde(rename = "excludeSearch", default, skip_serializing_if = "is_false")]
    pub exclude_search: bool,

    /// Exact-match filter: property name to a value or array of values.
    #[serde(default, skip_serializing_if = "serde_json::Map::is_empty")]
    pub filter: serde_json::Map<String, serde_json::Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output: Option<SelectQuery>,

    #[serde(rename = "preservekeys", default, skip_serializing_if = "is_false")]
    pub preserve_keys: bool,

    /// Substring (or wildcard) search: property name to pattern.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub search: BTreeMap<String, String>,

    #[serde(rename = "searchByAny", default, skip_serializing_if = "is_false")]
    pub search_by_any: bool,

    #[serde(
        rename = "searchWildcardsEnabled",
        default,
        skip_serializing_if = "is_false"
    )]
    pub search_wildcards_enabled: bool,

    #[serde(rename = "sortfield", default, skip_serializing_if = "Vec::is_empty")]
    pub sort_field: Vec<String>,

    #[serde(rename = "sortorder", default, skip_serializing_if = "Option::is_none")]
    pub sort_order: Option<SortOrder>,

    #[serde(rename = "startSearch", default, skip_serializing_if = "is_false")]
    pub start_search: bool,
}
