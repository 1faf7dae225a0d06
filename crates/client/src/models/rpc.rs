//! JSON-RPC 2.0 envelope used by every Zabbix API call.
//!
//! Invariants:
//! - `jsonrpc` is always `"2.0"`.
//! - `auth` is omitted entirely for unauthenticated methods (`user.login`,
//!   `apiinfo.version`); Zabbix rejects those calls if the member is present.
//! - A response carries exactly one of `result` or `error`.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::error::{ClientError, Result};

/// Protocol version sent in every request.
pub const JSON_RPC_VERSION: &str = "2.0";

/// An outgoing JSON-RPC request.
#[derive(Debug, Serialize)]
pub struct RpcRequest<'a, P: Serialize> {
    pub jsonrpc: &'static str,
    pub method: &'a str,
    pub params: &'a P,
    pub id: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auth: Option<&'a str>,
}

impl<'a, P: Serialize> RpcRequest<'a, P> {
    pub fn new(method: &'a str, params: &'a P, id: u64, auth: Option<&'a str>) -> Self {
        Self {
            jsonrpc: JSON_RPC_VERSION,
            method,
            params,
            id,
            auth,
        }
    }
}

/// The `error` member of a failed response.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RpcErrorObject {
    pub code: i64,
    pub message: String,
    #[serde(default)]
    pub data: String,
}

impl From<RpcErrorObject> for ClientError {
    fn from(err: RpcErrorObject) -> Self {
        ClientError::Rpc {
            code: err.code,
            message: err.message,
            data: err.data,
        }
    }
}

/// An incoming JSON-RPC response, before the result is decoded.
#[derive(Debug, Deserialize)]
pub struct RpcResponse {
    #[serde(default)]
    pub jsonrpc: String,
    #[serde(default)]
    pub result: Option<serde_json::Value>,
    #[serde(default)]
    pub error: Option<RpcErrorObject>,
    #[serde(default)]
    pub id: Option<serde_json::Value>,
}

impl RpcResponse {
    /// Decode `result` into `R`, or surface the `error` object.
    pub fn into_result<R: DeserializeOwned>(self) -> Result<R> {
        if let Some(err) = self.error {
            return Err(err.into());
        }

        let result = self.result.ok_or_else(|| {
            ClientError::InvalidResponse("response has neither result nor error".to_string())
        })?;

        serde_json::from_value(result)
            .map_err(|e| ClientError::InvalidResponse(format!("failed to decode result: {e}")))
    }
}
