//! `ConfigLoader`: layered settings for a Zabbix connection.
//!
//! Layers, lowest first: `.env` (via `load_dotenv`), `ZABBIX_*` variables
//! (via `from_env`), then `with_*` calls. Each layer only overwrites the
//! fields it actually sets. `build` validates the merged result.
//!
//! An API token wins over a username/password pair when both are present.

use secrecy::SecretString;
use std::io::ErrorKind;
use std::time::Duration;
use tracing::debug;

use super::env::apply_env;
use super::error::ConfigError;
use crate::constants::{DEFAULT_MAX_RETRIES, DEFAULT_TIMEOUT_SECS, MAX_MAX_RETRIES, MAX_TIMEOUT_SECS};
use crate::types::{AuthConfig, AuthStrategy, Config, ConnectionConfig};

/// Variable that turns `load_dotenv` into a no-op when set to `1` or `true`.
const DOTENV_DISABLED: &str = "DOTENV_DISABLED";

#[derive(Default)]
pub struct ConfigLoader {
    pub(super) base_url: Option<String>,
    pub(super) username: Option<String>,
    pub(super) password: Option<SecretString>,
    pub(super) api_token: Option<SecretString>,
    pub(super) skip_verify: Option<bool>,
    pub(super) timeout: Option<Duration>,
    pub(super) max_retries: Option<usize>,
}

fn map_dotenv_error(err: dotenvy::Error) -> Option<ConfigError> {
    match err {
        dotenvy::Error::Io(io) if io.kind() == ErrorKind::NotFound => None,
        dotenvy::Error::Io(io) => Some(ConfigError::DotenvIo { kind: io.kind() }),
        dotenvy::Error::LineParse(_, error_index) => Some(ConfigError::DotenvParse { error_index }),
        _ => Some(ConfigError::DotenvUnknown),
    }
}

impl ConfigLoader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Export a `.env` file from the working directory (or a parent) into
    /// the process environment. A missing file is not an error.
    pub fn load_dotenv(self) -> Result<Self, ConfigError> {
        let disabled = std::env::var(DOTENV_DISABLED)
            .is_ok_and(|v| v == "1" || v.eq_ignore_ascii_case("true"));
        if disabled {
            return Ok(self);
        }

        match dotenvy::dotenv() {
            Ok(path) => {
                debug!(path = %path.display(), "loaded .env");
                Ok(self)
            }
            Err(err) => map_dotenv_error(err).map_or(Ok(self), Err),
        }
    }

    /// Read configuration from `ZABBIX_*` environment variables.
    pub fn from_env(mut self) -> Result<Self, ConfigError> {
        apply_env(&mut self)?;
        Ok(self)
    }

    pub fn with_base_url(mut self, url: String) -> Self {
        self.base_url = Some(url);
        self
    }

    pub fn with_username(mut self, username: String) -> Self {
        self.username = Some(username);
        self
    }

    pub fn with_password(mut self, password: String) -> Self {
        self.password = Some(SecretString::new(password.into()));
        self
    }

    pub fn with_api_token(mut self, token: String) -> Self {
        self.api_token = Some(SecretString::new(token.into()));
        self
    }

    pub fn with_skip_verify(mut self, skip: bool) -> Self {
        self.skip_verify = Some(skip);
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn with_max_retries(mut self, retries: usize) -> Self {
        self.max_retries = Some(retries);
        self
    }

    /// Merge the layers into a [`Config`].
    ///
    /// # Errors
    ///
    /// `MissingBaseUrl` / `MissingAuth` when a required value never got set,
    /// `InvalidValue` for a malformed URL, and `InvalidTimeout` /
    /// `InvalidMaxRetries` for out-of-range limits.
    pub fn build(self) -> Result<Config, ConfigError> {
        let base_url = match self.base_url.as_deref() {
            Some(raw) => validate_and_normalize_base_url(raw)?,
            None => return Err(ConfigError::MissingBaseUrl),
        };

        let strategy = match (self.api_token, self.username, self.password) {
            (Some(token), _, _) => AuthStrategy::ApiToken { token },
            (None, Some(username), Some(password)) => AuthStrategy::Password { username, password },
            _ => return Err(ConfigError::MissingAuth),
        };

        let timeout = self
            .timeout
            .unwrap_or(Duration::from_secs(DEFAULT_TIMEOUT_SECS));
        check_timeout(timeout)?;

        let max_retries = self.max_retries.unwrap_or(DEFAULT_MAX_RETRIES);
        if max_retries > MAX_MAX_RETRIES {
            return Err(ConfigError::InvalidMaxRetries {
                message: format!("{max_retries} is above the limit of {MAX_MAX_RETRIES}"),
            });
        }

        Ok(Config {
            connection: ConnectionConfig {
                base_url,
                skip_verify: self.skip_verify.unwrap_or(false),
                timeout,
                max_retries,
            },
            auth: AuthConfig { strategy },
        })
    }
}

fn check_timeout(timeout: Duration) -> Result<(), ConfigError> {
    let secs = timeout.as_secs();
    let message = if secs == 0 {
        "must be greater than 0 seconds".to_string()
    } else if secs > MAX_TIMEOUT_SECS {
        format!("{secs}s is above the limit of {MAX_TIMEOUT_SECS}s")
    } else {
        return Ok(());
    };
    Err(ConfigError::InvalidTimeout { message })
}

/// Trim `raw`, require an absolute http(s) URL with a host, and drop
/// trailing slashes. Blank input counts as missing.
pub(crate) fn validate_and_normalize_base_url(raw: &str) -> Result<String, ConfigError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ConfigError::MissingBaseUrl);
    }

    let invalid = |message: String| ConfigError::InvalidValue {
        var: "base_url".into(),
        message,
    };

    let parsed = url::Url::parse(trimmed)
        .map_err(|e| invalid(format!("{e}; expected e.g. https://zabbix.example.com")))?;

    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(invalid(format!(
            "unsupported scheme {:?}, use http or https",
            parsed.scheme()
        )));
    }
    if parsed.host_str().is_none() {
        return Err(invalid("URL has no host".into()));
    }

    Ok(parsed.as_str().trim_end_matches('/').to_string())
}
