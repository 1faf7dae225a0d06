//! Template-level user macro, returned by `selectMacros`.
//!
//! See: https://www.zabbix.com/documentation/5.4/manual/api/reference/usermacro/object

use serde::{Deserialize, Serialize};

use crate::serde_helpers::string_from_number_or_string;

/// A host or template user macro.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserMacro {
    #[serde(
        rename = "hostmacroid",
        default,
        skip_serializing_if = "String::is_empty",
        deserialize_with = "string_from_number_or_string"
    )]
    pub host_macro_id: String,

    #[serde(
        rename = "hostid",
        default,
        skip_serializing_if = "String::is_empty",
        deserialize_with = "string_from_number_or_string"
    )]
    pub host_id: String,

    /// Macro name, e.g. `{$AGENT.TIMEOUT}`.
    #[serde(rename = "macro", default, skip_serializing_if = "String::is_empty")]
    pub macro_name: String,

    /// Empty for secret macros, which the server never returns.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub value: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,

    /// "0" text, "1" secret text, "2" vault secret.
    #[serde(
        rename = "type",
        default,
        skip_serializing_if = "String::is_empty",
        deserialize_with = "string_from_number_or_string"
    )]
    pub macro_type: String,
}

impl UserMacro {
    /// True for secret and vault macros.
    pub fn is_secret(&self) -> bool {
        matches!(self.macro_type.as_str(), "1" | "2")
    }
}
