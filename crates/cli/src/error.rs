//! CLI exit codes for scripting and automation.
//!
//! Responsibilities:
//! - Define structured exit codes that scripts can use to distinguish error types.
//! - Map `ClientError` variants to exit codes.
//!
//! Invariants:
//! - Exit code 130 is reserved for SIGINT (Unix standard: 128 + SIGINT).

use zabbix_client::ClientError;

/// Structured exit codes for zabbix-cli.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// Command completed successfully.
    Success = 0,

    /// Unhandled or generic failure, including configuration errors.
    GeneralError = 1,

    /// Invalid credentials or a session that could not be renewed.
    AuthenticationFailed = 2,

    /// Network, timeout, DNS failure or exhausted transport retries.
    ConnectionError = 3,

    /// The query matched nothing.
    NotFound = 4,

    /// The server rejected the request or returned something unreadable.
    ValidationError = 5,

    /// SIGINT/Ctrl+C (Unix standard: 128 + 2).
    Interrupted = 130,
}

impl ExitCode {
    /// Convert the exit code to an i32 for use with std::process::exit().
    pub const fn as_i32(self) -> i32 {
        self as u8 as i32
    }
}

impl From<&ClientError> for ExitCode {
    fn from(err: &ClientError) -> Self {
        match err {
            e if e.is_auth_error() => ExitCode::AuthenticationFailed,

            ClientError::InvalidUrl(_) => ExitCode::ConnectionError,
            ClientError::MaxRetriesExceeded(_) => ExitCode::ConnectionError,
            ClientError::HttpError(e) if e.is_connect() || e.is_timeout() => {
                ExitCode::ConnectionError
            }
            ClientError::ApiError {
                status: 502..=504, ..
            } => ExitCode::ConnectionError,

            ClientError::NotFound => ExitCode::NotFound,
            ClientError::ApiError { status: 404, .. } => ExitCode::NotFound,

            ClientError::ApiError {
                status: 401 | 403, ..
            } => ExitCode::AuthenticationFailed,

            ClientError::Rpc { .. } => ExitCode::ValidationError,
            ClientError::InvalidResponse(_) => ExitCode::ValidationError,
            ClientError::ApiError { status: 400, .. } => ExitCode::ValidationError,

            _ => ExitCode::GeneralError,
        }
    }
}

/// Extension trait for anyhow::Error to extract exit codes.
pub trait ExitCodeExt {
    /// Returns `GeneralError` if no `ClientError` is found in the chain.
    fn exit_code(&self) -> ExitCode;
}

impl ExitCodeExt for anyhow::Error {
    fn exit_code(&self) -> ExitCode {
        self.chain()
            .find_map(|cause| cause.downcast_ref::<ClientError>())
            .map_or(ExitCode::GeneralError, ExitCode::from)
    }
}
