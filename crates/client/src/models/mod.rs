//! Data models for the Zabbix JSON-RPC API.
//!
//! Types are organized by API object in submodules and re-exported here
//! for convenient access.

pub mod auth;
pub mod common;
pub mod host;
pub mod hostgroup;
pub mod rpc;
pub mod template;
pub mod usermacro;

pub use auth::LoginParams;
pub use common::{GetParameters, Relation, SelectPreset, SelectQuery, SortOrder};
pub use host::Host;
pub use hostgroup::Hostgroup;
pub use rpc::{RpcErrorObject, RpcRequest, RpcResponse};
pub use template::{
    Template, TemplateEvaltype, TemplateGetParams, TemplateTag, TemplateTagOperator,
};
pub use usermacro::UserMacro;
