//! A single JSON-RPC exchange with the Zabbix frontend.

use reqwest::Client;
use reqwest::header::CONTENT_TYPE;
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::debug;
use zabbix_config::constants::JSON_RPC_CONTENT_TYPE;

use crate::endpoints::send_request_with_retry;
use crate::error::{ClientError, Result};
use crate::metrics::MetricsCollector;
use crate::models::{RpcRequest, RpcResponse};

/// POST one JSON-RPC request and decode its `result` into `R`.
///
/// `auth` is `None` for methods that must be called anonymously.
#[allow(clippy::too_many_arguments)]
pub async fn call<P, R>(
    client: &Client,
    endpoint_url: &str,
    method: &str,
    params: &P,
    id: u64,
    auth: Option<&str>,
    max_retries: usize,
    metrics: Option<&MetricsCollector>,
) -> Result<R>
where
    P: Serialize,
    R: DeserializeOwned,
{
    debug!(method, request_id = id, "Calling Zabbix API");

    let request = RpcRequest::new(method, params, id, auth);
    let body = serde_json::to_vec(&request)
        .map_err(|e| ClientError::InvalidResponse(format!("failed to encode request: {e}")))?;

    let builder = client
        .post(endpoint_url)
        .header(CONTENT_TYPE, JSON_RPC_CONTENT_TYPE)
        .body(body);

    let result = exchange(builder, method, max_retries, metrics).await;

    if let (Err(e), Some(m)) = (&result, metrics) {
        m.record_client_error(method, e);
    }

    result
}

async fn exchange<R: DeserializeOwned>(
    builder: reqwest::RequestBuilder,
    method: &str,
    max_retries: usize,
    metrics: Option<&MetricsCollector>,
) -> Result<R> {
    let response = send_request_with_retry(builder, max_retries, method, metrics).await?;
    let envelope: RpcResponse = response
        .json()
        .await
        .map_err(|e| ClientError::InvalidResponse(format!("malformed JSON-RPC body: {e}")))?;
    envelope.into_result()
}
