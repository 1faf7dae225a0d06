//! `apiinfo.version` endpoint.

use reqwest::Client;

use crate::endpoints::call;
use crate::error::Result;
use crate::metrics::MetricsCollector;

/// Return the API version reported by the server, e.g. `"5.4.12"`.
///
/// This method must be called without credentials.
pub async fn api_version(
    client: &Client,
    endpoint_url: &str,
    id: u64,
    max_retries: usize,
    metrics: Option<&MetricsCollector>,
) -> Result<String> {
    let params = serde_json::Map::new();
    call(
        client,
        endpoint_url,
        "apiinfo.version",
        &params,
        id,
        None,
        max_retries,
        metrics,
    )
    .await
}
