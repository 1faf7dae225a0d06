//! Zabbix JSON-RPC API client.
//!
//! This crate provides typed request/response models for the Zabbix
//! `template` resource and a thin JSON-RPC session that issues `template.get`
//! calls. It supports both API token and username/password authentication
//! with automatic re-login when the server terminates a session.

mod auth;
pub mod client;
pub mod endpoints;
pub mod error;
pub mod metrics;
pub mod models;
mod serde_helpers;
pub mod session;

#[cfg(any(test, feature = "test-utils"))]
pub mod testing;

pub use auth::{AuthStrategy, SessionManager};
pub use client::ZabbixClient;
pub use client::builder::ZabbixClientBuilder;
pub use client::templates::get_templates;
pub use error::{ClientError, Result};
pub use metrics::{ErrorCategory, MetricsCollector};
pub use models::{
    GetParameters, Host, Hostgroup, Relation, SelectQuery, SortOrder, Template, TemplateEvaltype,
    TemplateGetParams, TemplateTag, TemplateTagOperator, UserMacro,
};
pub use session::Session;
