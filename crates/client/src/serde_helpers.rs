//! Serde helpers for Zabbix's loose JSON typing.
//!
//! Responsibilities:
//! - Accept either JSON numbers or strings for identifier and enum fields.
//! - Keep parsing behavior centralized so model definitions stay readable.
//!
//! Invariants / assumptions:
//! - Zabbix returns numeric values as strings (`"10001"`, `"0"`) in `get`
//!   results, while requests and fixtures often carry plain numbers.
//! - Errors are generic parse errors and never echo the input document.

use serde::Deserialize;
use serde::de::Error as _;

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum StringOrNumber {
    String(String),
    U64(u64),
    I64(i64),
    F64(f64),
}

pub fn string_from_number_or_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value = StringOrNumber::deserialize(deserializer)?;
    match value {
        StringOrNumber::String(s) => Ok(s),
        StringOrNumber::U64(v) => Ok(v.to_string()),
        StringOrNumber::I64(v) => Ok(v.to_string()),
        StringOrNumber::F64(v) => Ok(v.to_string()),
    }
}

pub fn u64_from_string_or_number<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value = StringOrNumber::deserialize(deserializer)?;
    match value {
        StringOrNumber::String(s) => s.trim().parse::<u64>().map_err(D::Error::custom),
        StringOrNumber::U64(v) => Ok(v),
        StringOrNumber::I64(v) => u64::try_from(v).map_err(D::Error::custom),
        StringOrNumber::F64(_) => Err(D::Error::custom("expected an integer")),
    }
}

pub fn u8_from_string_or_number<'de, D>(deserializer: D) -> Result<u8, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value = StringOrNumber::deserialize(deserializer)?;
    match value {
        StringOrNumber::String(s) => s.trim().parse::<u8>().map_err(D::Error::custom),
        StringOrNumber::U64(v) => u8::try_from(v).map_err(D::Error::custom),
        StringOrNumber::I64(v) => u8::try_from(v).map_err(D::Error::custom),
        StringOrNumber::F64(_) => Err(D::Error::custom("expected an integer")),
    }
}
