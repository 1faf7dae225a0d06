//! Client builder for constructing [`ZabbixClient`] instances.
//!
//! This module is responsible for:
//! - Providing a fluent builder API for client configuration
//! - Validating required configuration (base_url, auth_strategy)
//! - Resolving the base URL to the `api_jsonrpc.php` endpoint
//! - Configuring the underlying HTTP client (timeouts, TLS verification)
//!
//! # Invariants
//! - `base_url` and `auth_strategy` must be provided before calling `build()`
//! - `skip_verify` only affects HTTPS connections; HTTP connections log a warning

use std::time::Duration;

use zabbix_config::{
    AuthStrategy as ConfigAuthStrategy, Config,
    constants::{
        API_ENDPOINT_PATH, DEFAULT_MAX_REDIRECTS, DEFAULT_MAX_RETRIES, DEFAULT_TIMEOUT_SECS,
        MAX_MAX_RETRIES,
    },
};

use crate::auth::{AuthStrategy, SessionManager};
use crate::client::ZabbixClient;
use crate::error::{ClientError, Result};
use crate::metrics::MetricsCollector;

/// Builder for creating a new [`ZabbixClient`].
///
/// All options have defaults except `base_url` and `auth_strategy`.
pub struct ZabbixClientBuilder {
    base_url: Option<String>,
    auth_strategy: Option<AuthStrategy>,
    skip_verify: bool,
    timeout: Duration,
    max_retries: usize,
    metrics: Option<MetricsCollector>,
}

impl Default for ZabbixClientBuilder {
    fn default() -> Self {
        Self {
            base_url: None,
            auth_strategy: None,
            skip_verify: false,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            max_retries: DEFAULT_MAX_RETRIES,
            metrics: None,
        }
    }
}

impl ZabbixClientBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the frontend URL, e.g. `https://zabbix.example.com` or
    /// `http://localhost/zabbix`.
    ///
    /// `api_jsonrpc.php` is appended unless the URL already ends with it.
    pub fn base_url(mut self, url: String) -> Self {
        self.base_url = Some(url);
        self
    }

    /// Set the authentication strategy.
    pub fn auth_strategy(mut self, strategy: AuthStrategy) -> Self {
        self.auth_strategy = Some(strategy);
        self
    }

    /// Set whether to skip TLS certificate verification.
    ///
    /// # Security Warning
    /// Only use this in development or testing environments.
    pub fn skip_verify(mut self, skip: bool) -> Self {
        self.skip_verify = skip;
        self
    }

    /// Set the request timeout. Default is 30 seconds.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the maximum number of retries for 429/502/503/504 responses.
    ///
    /// Default is 3 retries with exponential backoff (1s, 2s, 4s delays).
    /// Values above `MAX_MAX_RETRIES` are clamped to it.
    pub fn max_retries(mut self, retries: usize) -> Self {
        self.max_retries = retries.min(MAX_MAX_RETRIES);
        self
    }

    /// Record request metrics through the `metrics` facade.
    pub fn metrics(mut self, metrics: MetricsCollector) -> Self {
        self.metrics = Some(metrics);
        self
    }

    /// Pre-configure the builder from loaded configuration.
    pub fn from_config(mut self, config: &Config) -> Self {
        let auth_strategy = match &config.auth.strategy {
            ConfigAuthStrategy::Password { username, password } => AuthStrategy::Password {
                username: username.clone(),
                password: password.clone(),
            },
            ConfigAuthStrategy::ApiToken { token } => AuthStrategy::ApiToken {
                token: token.clone(),
            },
        };

        self.base_url = Some(config.connection.base_url.clone());
        self.auth_strategy = Some(auth_strategy);
        self.skip_verify = config.connection.skip_verify;
        self.timeout = config.connection.timeout;
        self.max_retries = config.connection.max_retries;
        self
    }

    /// Resolve a frontend URL to its JSON-RPC endpoint.
    ///
    /// - `"http://localhost/zabbix/"` -> `"http://localhost/zabbix/api_jsonrpc.php"`
    /// - `"https://zbx.example.com/api_jsonrpc.php"` is kept as is
    fn endpoint_url(url: &str) -> Result<String> {
        let trimmed = url.trim().trim_end_matches('/');
        let endpoint = if trimmed.ends_with(API_ENDPOINT_PATH) {
            trimmed.to_string()
        } else {
            format!("{trimmed}/{API_ENDPOINT_PATH}")
        };

        let parsed = reqwest::Url::parse(&endpoint)
            .map_err(|e| ClientError::InvalidUrl(format!("{url}: {e}")))?;
        if !matches!(parsed.scheme(), "http" | "https") || parsed.host_str().is_none() {
            return Err(ClientError::InvalidUrl(format!(
                "{url}: expected an http(s) URL with a host"
            )));
        }

        Ok(endpoint)
    }

    /// Build the [`ZabbixClient`].
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::InvalidUrl`] if `base_url` is missing or malformed.
    /// Returns [`ClientError::AuthFailed`] if `auth_strategy` was not provided.
    /// Returns `ClientError::HttpError` if the HTTP client fails to build.
    pub fn build(self) -> Result<ZabbixClient> {
        let base_url = self
            .base_url
            .ok_or_else(|| ClientError::InvalidUrl("base_url is required".to_string()))?;
        let endpoint_url = Self::endpoint_url(&base_url)?;

        let auth_strategy = self
            .auth_strategy
            .ok_or_else(|| ClientError::AuthFailed("auth_strategy is required".to_string()))?;

        let mut http_builder = reqwest::Client::builder()
            .timeout(self.timeout)
            .redirect(reqwest::redirect::Policy::limited(DEFAULT_MAX_REDIRECTS));

        if self.skip_verify {
            if endpoint_url.starts_with("https://") {
                http_builder = http_builder.danger_accept_invalid_certs(true);
            } else {
                tracing::warn!(
                    "skip_verify is set but the URL uses HTTP; TLS verification does not apply"
                );
            }
        }

        Ok(ZabbixClient {
            http: http_builder.build()?,
            endpoint_url,
            session_manager: SessionManager::new(auth_strategy),
            max_retries: self.max_retries,
            metrics: self.metrics,
            next_id: 0,
        })
    }
}
