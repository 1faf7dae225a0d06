//! Configuration loader for environment variables and `.env` files.
//!
//! Responsibilities:
//! - Load configuration from `.env` files, environment variables and builder overrides.
//! - Provide a builder-pattern `ConfigLoader` for layered configuration merging.
//! - Enforce the `DOTENV_DISABLED` gate to prevent accidental dotenv loading in tests.
//!
//! Invariants / Assumptions:
//! - Builder methods applied after `from_env()` take precedence over environment variables.
//! - `load_dotenv()` must be called explicitly to enable `.env` file loading.

mod builder;
mod env;
mod error;

pub use builder::ConfigLoader;
pub use env::env_var_or_none;
pub use error::ConfigError;

#[cfg(test)]
mod tests;
