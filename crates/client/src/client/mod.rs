//! Main Zabbix JSON-RPC client.
//!
//! This module provides the primary [`ZabbixClient`]. It owns the HTTP
//! connection pool, the endpoint URL and the authentication state.
//!
//! # Submodules
//! - [`builder`]: Client construction and configuration
//! - `session`: Login and [`crate::Session`] implementation
//! - [`templates`]: `template.get`
//! - `apiinfo`: `apiinfo.version`
//!
//! # What this module does NOT handle:
//! - Wire encoding and HTTP retries (delegated to [`crate::endpoints`])
//! - Credential storage (delegated to [`crate::auth::SessionManager`])
//!
//! # Invariants
//! - An authenticated call that fails because the server terminated the
//!   session is retried once after a fresh `user.login` (password auth only;
//!   API tokens are never re-negotiated).
//! - Request ids increase monotonically for the lifetime of the client.

/// Wrap an authenticated endpoint call with automatic re-login.
///
/// `$token` and `$id` are bound to the current auth token and a fresh
/// request id before `$call` is evaluated. When the call fails because the
/// session was terminated and the client uses password auth, the session is
/// cleared, a new login is performed and the call is evaluated once more.
macro_rules! retry_call {
    ($self:expr, $token:ident, $id:ident, $call:expr) => {{
        let $token = $self.get_auth_token().await?;
        let $id = $self.next_request_id();
        let result = $call;

        match result {
            Ok(data) => Ok(data),
            Err(e) if e.is_session_terminated() && !$self.is_api_token_auth() => {
                ::tracing::debug!("Session terminated by server, re-authenticating...");
                $self.session_manager.clear_session();
                let $token = $self.get_auth_token().await?;
                let $id = $self.next_request_id();
                $call
            }
            Err(e) => Err(e),
        }
    }};
}

mod apiinfo;
pub mod builder;
mod session;
pub mod templates;

use crate::auth::SessionManager;
use crate::metrics::MetricsCollector;

/// Zabbix JSON-RPC API client.
///
/// # Creating a Client
///
/// ```rust,ignore
/// use zabbix_client::{ZabbixClient, AuthStrategy};
/// use secrecy::SecretString;
///
/// let client = ZabbixClient::builder()
///     .base_url("https://zabbix.example.com".to_string())
///     .auth_strategy(AuthStrategy::ApiToken {
///         token: SecretString::new("my-token".to_string().into()),
///     })
///     .build()?;
/// ```
#[derive(Debug)]
pub struct ZabbixClient {
    pub(crate) http: reqwest::Client,
    pub(crate) endpoint_url: String,
    pub(crate) session_manager: SessionManager,
    pub(crate) max_retries: usize,
    pub(crate) metrics: Option<MetricsCollector>,
    pub(crate) next_id: u64,
}

impl ZabbixClient {
    /// Create a new client builder.
    pub fn builder() -> builder::ZabbixClientBuilder {
        builder::ZabbixClientBuilder::new()
    }

    /// The full JSON-RPC endpoint URL, ending in `api_jsonrpc.php`.
    pub fn endpoint_url(&self) -> &str {
        &self.endpoint_url
    }

    pub(crate) fn next_request_id(&mut self) -> u64 {
        self.next_id += 1;
        self.next_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::AuthStrategy;
    use crate::error::ClientError;
    use secrecy::SecretString;

    fn token() -> AuthStrategy {
        AuthStrategy::ApiToken {
            token: SecretString::new("test-token".to_string().into()),
        }
    }

    #[test]
    fn test_client_builder_with_api_token() {
        let client = ZabbixClient::builder()
            .base_url("https://zabbix.example.com".to_string())
            .auth_strategy(token())
            .build()
            .unwrap();

        assert_eq!(
            client.endpoint_url(),
            "https://zabbix.example.com/api_jsonrpc.php"
        );
        assert!(client.is_api_token_auth());
    }

    #[test]
    fn test_client_builder_missing_base_url() {
        let client = ZabbixClient::builder().auth_strategy(token()).build();
        assert!(matches!(client.unwrap_err(), ClientError::InvalidUrl(_)));
    }

    #[test]
    fn test_client_builder_missing_auth() {
        let client = ZabbixClient::builder()
            .base_url("http://localhost/zabbix".to_string())
            .build();
        assert!(matches!(client.unwrap_err(), ClientError::AuthFailed(_)));
    }

    #[test]
    fn test_request_ids_increase() {
        let mut client = ZabbixClient::builder()
            .base_url("http://localhost/zabbix".to_string())
            .auth_strategy(token())
            .build()
            .unwrap();

        let first = client.next_request_id();
        let second = client.next_request_id();
        assert!(second > first);
    }
}
