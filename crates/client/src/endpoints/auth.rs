//! Authentication endpoint.

use reqwest::Client;
use tracing::debug;

use crate::endpoints::call;
use crate::error::{ClientError, Result};
use crate::metrics::MetricsCollector;
use crate::models::LoginParams;

/// Call `user.login` and return the session id.
///
/// A JSON-RPC error from the server is reported as `AuthFailed`.
pub async fn login(
    client: &Client,
    endpoint_url: &str,
    username: &str,
    password: &str,
    id: u64,
    max_retries: usize,
    metrics: Option<&MetricsCollector>,
) -> Result<String> {
    debug!("Logging in to Zabbix as {}", username);

    let params = LoginParams {
        user: username,
        password,
    };

    call(
        client,
        endpoint_url,
        "user.login",
        &params,
        id,
        None,
        max_retries,
        metrics,
    )
    .await
    .map_err(|e| match e {
        ClientError::Rpc { message, data, .. } => {
            ClientError::AuthFailed(format!("{message} {data}").trim().to_string())
        }
        other => other,
    })
}
