//! Server version lookup.

use crate::client::ZabbixClient;
use crate::endpoints;
use crate::error::Result;

impl ZabbixClient {
    /// Return the Zabbix API version, e.g. `"5.4.12"`.
    ///
    /// `apiinfo.version` is unauthenticated, so this never triggers a login
    /// and works as a connectivity check.
    pub async fn api_version(&mut self) -> Result<String> {
        let id = self.next_request_id();
        endpoints::api_version(
            &self.http,
            &self.endpoint_url,
            id,
            self.max_retries,
            self.metrics.as_ref(),
        )
        .await
    }
}
