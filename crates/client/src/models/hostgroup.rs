//! Host group object, as nested in template results.
//!
//! See: https://www.zabbix.com/documentation/5.4/manual/api/reference/hostgroup/object

use serde::{Deserialize, Serialize};

use crate::serde_helpers::string_from_number_or_string;

/// A host group.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hostgroup {
    #[serde(
        rename = "groupid",
        default,
        skip_serializing_if = "String::is_empty",
        deserialize_with = "string_from_number_or_string"
    )]
    pub group_id: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub name: String,

    /// "0" for plain groups, "4" for discovered ones.
    #[serde(
        default,
        skip_serializing_if = "String::is_empty",
        deserialize_with = "string_from_number_or_string"
    )]
    pub flags: String,

    /// "1" for internal groups that cannot be deleted.
    #[serde(
        default,
        skip_serializing_if = "String::is_empty",
        deserialize_with = "string_from_number_or_string"
    )]
    pub internal: String,
}
