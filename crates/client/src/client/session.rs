//! Client-level session management helpers.
//!
//! # Invariants
//! - [`ZabbixClient::get_auth_token`] requires `&mut self` because it may
//!   trigger a login call
//! - API token authentication never triggers login; the token is returned directly

use secrecy::ExposeSecret;
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::auth::AuthStrategy;
use crate::client::ZabbixClient;
use crate::endpoints;
use crate::error::{ClientError, Result};
use crate::session::Session;

impl ZabbixClient {
    /// Get the value for the `auth` member, logging in if necessary.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::AuthFailed`] if login fails.
    /// Returns [`ClientError::SessionExpired`] if no valid token is available.
    pub(crate) async fn get_auth_token(&mut self) -> Result<String> {
        if self.session_manager.needs_login() {
            self.login().await?;
        }

        self.session_manager
            .auth_token()
            .map(|s| s.to_string())
            .ok_or_else(|| {
                let username = match self.session_manager.strategy() {
                    AuthStrategy::Password { username, .. } => username.clone(),
                    AuthStrategy::ApiToken { .. } => "api-token".to_string(),
                };
                ClientError::SessionExpired { username }
            })
    }

    /// Check if the client is using API token authentication.
    pub fn is_api_token_auth(&self) -> bool {
        self.session_manager.is_api_token()
    }

    /// Log in with username/password and store the session id.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::AuthFailed`] for API token auth or rejected
    /// credentials.
    pub async fn login(&mut self) -> Result<()> {
        let id = self.next_request_id();
        let AuthStrategy::Password { username, password } = self.session_manager.strategy() else {
            return Err(ClientError::AuthFailed(
                "Cannot login with API token auth strategy".to_string(),
            ));
        };

        let session_id = endpoints::login(
            &self.http,
            &self.endpoint_url,
            username,
            password.expose_secret(),
            id,
            self.max_retries,
            self.metrics.as_ref(),
        )
        .await?;

        self.session_manager.set_session_id(session_id);
        Ok(())
    }
}

impl Session for ZabbixClient {
    async fn get<P, R>(&mut self, method: &str, params: &P) -> Result<R>
    where
        P: Serialize + Sync,
        R: DeserializeOwned + Send,
    {
        retry_call!(
            self,
            __token,
            __id,
            endpoints::call(
                &self.http,
                &self.endpoint_url,
                method,
                params,
                __id,
                Some(__token.as_str()),
                self.max_retries,
                self.metrics.as_ref(),
            )
            .await
        )
    }
}
