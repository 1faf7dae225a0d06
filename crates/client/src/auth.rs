//! Authentication strategies and session management.

use secrecy::{ExposeSecret, SecretString};

/// Strategy for authenticating with the Zabbix API.
#[derive(Debug, Clone)]
pub enum AuthStrategy {
    /// Username and password authentication.
    /// The client calls `user.login` on demand and keeps the session id.
    Password {
        username: String,
        password: SecretString,
    },
    /// API token. Sent with every authenticated call; never re-negotiated.
    ApiToken { token: SecretString },
}

/// Holds the credential sent in the `auth` member of authenticated calls.
#[derive(Debug)]
pub struct SessionManager {
    auth_strategy: AuthStrategy,
    session_id: Option<SecretString>,
}

impl SessionManager {
    /// Create a new session manager with the given auth strategy.
    pub fn new(strategy: AuthStrategy) -> Self {
        Self {
            auth_strategy: strategy,
            session_id: None,
        }
    }

    /// Get the current auth strategy.
    pub fn strategy(&self) -> &AuthStrategy {
        &self.auth_strategy
    }

    /// Check if we're using API token auth (no session management needed).
    pub fn is_api_token(&self) -> bool {
        matches!(self.auth_strategy, AuthStrategy::ApiToken { .. })
    }

    /// Get the value for the `auth` member.
    /// For API token auth, returns the token directly.
    /// For password auth, returns the session id if logged in.
    pub fn auth_token(&self) -> Option<&str> {
        match &self.auth_strategy {
            AuthStrategy::ApiToken { token } => Some(token.expose_secret()),
            AuthStrategy::Password { .. } => self.session_id.as_ref().map(|t| t.expose_secret()),
        }
    }

    /// Store the session id returned by `user.login`.
    pub fn set_session_id(&mut self, session_id: String) {
        self.session_id = Some(SecretString::new(session_id.into()));
    }

    /// True when password auth has no session yet (a login is needed).
    pub fn needs_login(&self) -> bool {
        !self.is_api_token() && self.session_id.is_none()
    }

    /// Clear the current session id (force re-authentication).
    pub fn clear_session(&mut self) {
        self.session_id = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn password_strategy() -> AuthStrategy {
        AuthStrategy::Password {
            username: "Admin".to_string(),
            password: SecretString::new("zabbix".to_string().into()),
        }
    }

    #[test]
    fn test_api_token_bypasses_session() {
        let strategy = AuthStrategy::ApiToken {
            token: SecretString::new("test-token".to_string().into()),
        };
        let mut manager = SessionManager::new(strategy);
        assert!(manager.is_api_token());
        assert!(!manager.needs_login());
        assert_eq!(manager.auth_token(), Some("test-token"));

        manager.clear_session();
        assert_eq!(manager.auth_token(), Some("test-token"));
    }

    #[test]
    fn test_password_session_lifecycle() {
        let mut manager = SessionManager::new(password_strategy());
        assert!(!manager.is_api_token());
        assert!(manager.needs_login());
        assert!(manager.auth_token().is_none());

        manager.set_session_id("0424bd59b807674191e7d77572075f33".to_string());
        assert!(!manager.needs_login());
        assert_eq!(
            manager.auth_token(),
            Some("0424bd59b807674191e7d77572075f33")
        );

        manager.clear_session();
        assert!(manager.needs_login());
        assert!(manager.auth_token().is_none());
    }

    #[test]
    fn test_debug_hides_session_id() {
        let mut manager = SessionManager::new(password_strategy());
        manager.set_session_id("very-secret-session".to_string());
        let debug = format!("{manager:?}");
        assert!(!debug.contains("very-secret-session"));
        assert!(!debug.contains("zabbix\""));
    }
}
