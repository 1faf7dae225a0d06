//! Configuration type definitions.
//!
//! Responsibilities:
//! - Define configuration types for authentication and connections.
//! - Provide serialization helpers for sensitive types (secrets, durations).
//!
//! Does NOT handle:
//! - Configuration loading from environment variables (see `loader` module).
//! - Actual network connections or the login flow (see client crate).
//!
//! Invariants:
//! - All secret types use `secrecy::SecretString` to prevent accidental logging.

mod auth;
mod connection;

pub use auth::{AuthConfig, AuthStrategy};
pub use connection::{Config, ConnectionConfig};
