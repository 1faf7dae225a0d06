//! Error types for the Zabbix client.

use thiserror::Error;

/// Result type alias for client operations.
pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors that can occur during Zabbix client operations.
#[derive(Error, Debug)]
pub enum ClientError {
    /// Authentication failed.
    #[error("Authentication failed: {0}")]
    AuthFailed(String),

    /// HTTP transport error.
    #[error("HTTP error: {0}")]
    HttpError(#[from] reqwest::Error),

    /// Non-success HTTP status from the Zabbix frontend.
    #[error("API error ({status}) at {url}: {message}")]
    ApiError {
        status: u16,
        url: String,
        message: String,
    },

    /// JSON-RPC error object returned by the Zabbix API.
    #[error("Zabbix API error {code}: {message} {data}")]
    Rpc {
        code: i64,
        message: String,
        data: String,
    },

    /// Session expired and could not be renewed.
    #[error("Session expired for user '{username}', please re-authenticate")]
    SessionExpired { username: String },

    /// Response could not be decoded.
    #[error("Invalid response format: {0}")]
    InvalidResponse(String),

    /// Maximum retries exceeded.
    #[error("Maximum retries exceeded ({0} attempts)")]
    MaxRetriesExceeded(usize),

    /// Invalid URL.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// A `get` call matched nothing.
    #[error("No results were found matching the given search parameters")]
    NotFound,
}

impl ClientError {
    /// Check if this error is the empty-result sentinel.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound)
    }

    /// Check if an HTTP status code is retryable.
    ///
    /// Retryable status codes:
    /// - 429: Too Many Requests (rate limiting)
    /// - 502: Bad Gateway
    /// - 503: Service Unavailable
    /// - 504: Gateway Timeout
    pub fn is_retryable_status(status: u16) -> bool {
        matches!(status, 429 | 502 | 503 | 504)
    }

    /// Check if this error indicates authentication failure.
    pub fn is_auth_error(&self) -> bool {
        matches!(
            self,
            Self::AuthFailed(_) | Self::SessionExpired { .. }
        ) || self.is_session_terminated()
    }

    /// Check if the server rejected the call because the session id is no
    /// longer valid. Zabbix reports this as an "Invalid params." error whose
    /// data asks the caller to re-login.
    pub fn is_session_terminated(&self) -> bool {
        match self {
            Self::Rpc { message, data, .. } => {
                let text = format!("{message} {data}").to_lowercase();
                text.contains("re-login")
                    || text.contains("session terminated")
                    || text.contains("not authorised")
                    || text.contains("not authorized")
            }
            _ => false,
        }
    }
}
