//! Environment variable parsing for configuration.
//!
//! Responsibilities:
//! - Read and parse `ZABBIX_*` environment variables.
//! - Apply the parsed values to a `ConfigLoader`.
//!
//! Invariants:
//! - Empty or whitespace-only environment variables are treated as unset.
//! - Returned values are trimmed.
//! - Invalid numeric or boolean values return `ConfigError::InvalidValue`.

use secrecy::SecretString;
use std::time::Duration;

use super::builder::ConfigLoader;
use super::error::ConfigError;
use crate::constants::MAX_MAX_RETRIES;

pub(crate) const ENV_URL: &str = "ZABBIX_URL";
pub(crate) const ENV_USERNAME: &str = "ZABBIX_USERNAME";
pub(crate) const ENV_PASSWORD: &str = "ZABBIX_PASSWORD";
pub(crate) const ENV_API_TOKEN: &str = "ZABBIX_API_TOKEN";
pub(crate) const ENV_SKIP_VERIFY: &str = "ZABBIX_SKIP_VERIFY";
pub(crate) const ENV_TIMEOUT: &str = "ZABBIX_TIMEOUT";
pub(crate) const ENV_MAX_RETRIES: &str = "ZABBIX_MAX_RETRIES";

/// Read an environment variable, returning None if unset, empty, or whitespace-only.
pub fn env_var_or_none(key: &str) -> Option<String> {
    std::env::var(key).ok().and_then(|s| {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            None
        } else if trimmed.len() == s.len() {
            Some(s)
        } else {
            Some(trimmed.to_string())
        }
    })
}

fn invalid(var: &str, message: &str) -> ConfigError {
    ConfigError::InvalidValue {
        var: var.to_string(),
        message: message.to_string(),
    }
}

/// Apply environment variable configuration to the loader.
pub(crate) fn apply_env(loader: &mut ConfigLoader) -> Result<(), ConfigError> {
    if let Some(url) = env_var_or_none(ENV_URL) {
        loader.base_url = Some(url);
    }
    if let Some(username) = env_var_or_none(ENV_USERNAME) {
        loader.username = Some(username);
    }
    if let Some(password) = env_var_or_none(ENV_PASSWORD) {
        loader.password = Some(SecretString::new(password.into()));
    }
    if let Some(token) = env_var_or_none(ENV_API_TOKEN) {
        loader.api_token = Some(SecretString::new(token.into()));
    }
    if let Some(skip) = env_var_or_none(ENV_SKIP_VERIFY) {
        let skip = skip
            .parse()
            .map_err(|_| invalid(ENV_SKIP_VERIFY, "must be true or false"))?;
        loader.skip_verify = Some(skip);
    }
    if let Some(timeout) = env_var_or_none(ENV_TIMEOUT) {
        let secs: u64 = timeout
            .parse()
            .map_err(|_| invalid(ENV_TIMEOUT, "must be a number"))?;
        loader.timeout = Some(Duration::from_secs(secs));
    }
    if let Some(retries) = env_var_or_none(ENV_MAX_RETRIES) {
        let value: usize = retries
            .parse()
            .map_err(|_| invalid(ENV_MAX_RETRIES, "must be a non-negative integer"))?;
        if value > MAX_MAX_RETRIES {
            return Err(ConfigError::InvalidMaxRetries {
                message: format!("must be between 0 and {} (got {})", MAX_MAX_RETRIES, value),
            });
        }
        loader.max_retries = Some(value);
    }

    Ok(())
}
