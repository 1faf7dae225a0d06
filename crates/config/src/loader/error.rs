//! Configuration loading errors.
//!
//! Every variant names the offending variable or limit. Messages for `.env`
//! failures carry a position or I/O kind only, never file contents, since
//! the file usually holds the Zabbix password or token.

use std::io::ErrorKind;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    /// An environment variable or override could not be parsed.
    #[error("{var} has an unusable value: {message}")]
    InvalidValue { var: String, message: String },

    #[error("Zabbix URL is required. Set ZABBIX_URL or pass --url.")]
    MissingBaseUrl,

    #[error("No Zabbix credentials: set ZABBIX_API_TOKEN or ZABBIX_USERNAME and ZABBIX_PASSWORD")]
    MissingAuth,

    #[error("timeout out of range: {message}")]
    InvalidTimeout { message: String },

    #[error("max retries out of range: {message}")]
    InvalidMaxRetries { message: String },

    /// `.env` syntax error at the given byte offset.
    #[error(".env syntax error at byte {error_index} (DOTENV_DISABLED=1 skips the file)")]
    DotenvParse { error_index: usize },

    #[error(".env could not be read: {kind}")]
    DotenvIo { kind: ErrorKind },

    #[error(".env loading failed (DOTENV_DISABLED=1 skips the file)")]
    DotenvUnknown,
}
