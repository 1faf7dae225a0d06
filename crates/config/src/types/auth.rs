//! Authentication types for Zabbix configuration.
//!
//! Responsibilities:
//! - Define authentication strategies (username/password, API token).
//! - Read secret values from structured config into `SecretString`.
//!
//! Does NOT handle:
//! - The `user.login` exchange itself (see client crate).
//!
//! Invariants:
//! - All secret values use `secrecy::SecretString` to prevent accidental logging.
//! - `Debug` output never contains secret material.
//! - Auth types are deserialize-only; nothing writes secrets back out.

use secrecy::SecretString;
use serde::Deserialize;

mod secret_string {
    use secrecy::SecretString;
    use serde::{Deserialize, Deserializer};

    pub fn deserialize<'de, D>(deserializer: D) -> Result<SecretString, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(SecretString::new(s.into()))
    }
}

/// Strategy for authenticating with the Zabbix API.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type")]
pub enum AuthStrategy {
    /// Username and password; the client logs in with `user.login` and keeps
    /// the returned session id.
    #[serde(rename = "password")]
    Password {
        username: String,
        #[serde(deserialize_with = "secret_string::deserialize")]
        password: SecretString,
    },
    /// Pre-issued API token, sent as-is with every authenticated call.
    #[serde(rename = "token")]
    ApiToken {
        #[serde(deserialize_with = "secret_string::deserialize")]
        token: SecretString,
    },
}

/// Authentication configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct AuthConfig {
    /// The authentication strategy to use.
    #[serde(flatten)]
    pub strategy: AuthStrategy,
}
