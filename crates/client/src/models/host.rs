//! Host object, as nested in template results.
//!
//! Only the properties a template listing needs are mapped; anything else the
//! server returns is ignored.
//!
//! See: https://www.zabbix.com/documentation/5.4/manual/api/reference/host/object

use serde::{Deserialize, Serialize};

use crate::serde_helpers::string_from_number_or_string;

/// A monitored host.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Host {
    #[serde(
        rename = "hostid",
        default,
        skip_serializing_if = "String::is_empty",
        deserialize_with = "string_from_number_or_string"
    )]
    pub host_id: String,

    /// Technical name.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub host: String,

    /// Visible name.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub name: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,

    /// "0" monitored, "1" unmonitored.
    #[serde(
        default,
        skip_serializing_if = "String::is_empty",
        deserialize_with = "string_from_number_or_string"
    )]
    pub status: String,
}

impl Host {
    /// True when the host is monitored.
    pub fn is_monitored(&self) -> bool {
        self.status == "0"
    }
}
