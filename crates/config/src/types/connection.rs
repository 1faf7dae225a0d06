//! Connection configuration types.
//!
//! Responsibilities:
//! - Define connection settings (URL, TLS verification, timeout, retries).
//! - Define the main `Config` structure combining connection and auth.
//!
//! Invariants:
//! - Duration fields are serialized as whole seconds.
//! - Default values come from `crate::constants`, not magic numbers.

use crate::constants::{DEFAULT_BASE_URL, DEFAULT_MAX_RETRIES, DEFAULT_TIMEOUT_SECS};
use crate::types::auth::{AuthConfig, AuthStrategy};
use secrecy::SecretString;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Module for serializing Duration as seconds (integer).
mod duration_seconds {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use std::time::Duration;

    pub fn serialize<S>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        duration.as_secs().serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Duration, D::Error>
    where
        D: Deserializer<'de>,
    {
        let secs = u64::deserialize(deserializer)?;
        Ok(Duration::from_secs(secs))
    }
}

/// Connection configuration for a Zabbix server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConnectionConfig {
    /// Frontend URL of the Zabbix server (e.g. https://zabbix.example.com).
    /// The client appends `api_jsonrpc.php` when it is not already present.
    pub base_url: String,
    /// Whether to skip TLS verification (for self-signed certificates)
    pub skip_verify: bool,
    /// Request timeout (serialized as seconds)
    #[serde(with = "duration_seconds")]
    pub timeout: Duration,
    /// Maximum number of retries for rate-limited or unavailable responses
    pub max_retries: usize,
}

/// Main configuration structure.
///
/// Deserialize-only, like [`AuthConfig`], so secrets are never written out.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Connection settings
    pub connection: ConnectionConfig,
    /// Authentication settings
    pub auth: AuthConfig,
}

impl Default for Config {
    /// Development defaults: a local frontend and the stock `Admin`/`zabbix`
    /// account. Never appropriate outside a local test install.
    fn default() -> Self {
        Self::with_password(
            DEFAULT_BASE_URL.to_string(),
            "Admin".to_string(),
            SecretString::new("zabbix".to_string().into()),
        )
    }
}

impl Config {
    /// Create a new config with the specified base URL and API token.
    pub fn with_api_token(base_url: String, token: SecretString) -> Self {
        Self {
            connection: ConnectionConfig::new(base_url),
            auth: AuthConfig {
                strategy: AuthStrategy::ApiToken { token },
            },
        }
    }

    /// Create a new config with the specified base URL and username/password.
    pub fn with_password(base_url: String, username: String, password: SecretString) -> Self {
        Self {
            connection: ConnectionConfig::new(base_url),
            auth: AuthConfig {
                strategy: AuthStrategy::Password { username, password },
            },
        }
    }

    /// Returns `true` for the stock `Admin`/`zabbix` credentials.
    pub fn is_using_default_credentials(&self) -> bool {
        use secrecy::ExposeSecret;

        matches!(
            &self.auth.strategy,
            AuthStrategy::Password { username, password }
                if username == "Admin" && password.expose_secret() == "zabbix"
        )
    }
}

impl ConnectionConfig {
    fn new(base_url: String) -> Self {
        Self {
            base_url,
            skip_verify: false,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            max_retries: DEFAULT_MAX_RETRIES,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.connection.base_url, "http://localhost/zabbix");
        assert!(!config.connection.skip_verify);
        assert!(config.is_using_default_credentials());
    }

    #[test]
    fn test_config_with_api_token() {
        let token = SecretString::new("test-token".to_string().into());
        let config = Config::with_api_token("https://zabbix.example.com".to_string(), token);
        assert!(matches!(
            config.auth.strategy,
            AuthStrategy::ApiToken { .. }
        ));
        assert!(!config.is_using_default_credentials());
    }

    #[test]
    fn test_config_deserializes_without_leaking_token() {
        let config: Config = serde_json::from_value(serde_json::json!({
            "connection": {
                "base_url": "https://zabbix.example.com",
                "skip_verify": false,
                "timeout": 15,
                "max_retries": 2
            },
            "auth": {"type": "token", "token": "s3cr3t-token"}
        }))
        .unwrap();

        assert_eq!(config.connection.timeout, Duration::from_secs(15));
        assert!(matches!(config.auth.strategy, AuthStrategy::ApiToken { .. }));
        assert!(!format!("{config:?}").contains("s3cr3t-token"));
    }

    #[test]
    fn test_connection_config_serde_seconds() {
        let config = ConnectionConfig {
            base_url: "https://zabbix.example.com".to_string(),
            skip_verify: true,
            timeout: Duration::from_secs(60),
            max_retries: 5,
        };

        let json = serde_json::to_string(&config).unwrap();
        assert!(json.contains("\"timeout\":60"));

        let parsed: ConnectionConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.timeout, Duration::from_secs(60));
        assert_eq!(parsed.max_retries, 5);
        assert!(parsed.skip_verify);
    }
}
