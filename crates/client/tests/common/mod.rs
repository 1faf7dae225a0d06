//! Common test utilities for integration tests.
//!
//! # Invariants
//! - Fixtures are loaded from the `fixtures/` directory relative to the crate root
//! - Mock servers answer on `/api_jsonrpc.php`, the path every client call uses

use secrecy::SecretString;

#[allow(unused_imports)]
pub use reqwest::Client;
#[allow(unused_imports)]
pub use zabbix_client::endpoints;
#[allow(unused_imports)]
pub use zabbix_client::testing::load_fixture;
#[allow(unused_imports)]
pub use wiremock::{Mock, MockServer, ResponseTemplate};

use zabbix_client::{AuthStrategy, ZabbixClient};

/// Path of the JSON-RPC endpoint on the mock server.
#[allow(dead_code)]
pub const RPC_PATH: &str = "/api_jsonrpc.php";

/// Full endpoint URL on a mock server.
#[allow(dead_code)]
pub fn endpoint_url(server: &MockServer) -> String {
    format!("{}{}", server.uri(), RPC_PATH)
}

/// Client using API token auth against the mock server.
#[allow(dead_code)]
pub fn token_client(server: &MockServer) -> ZabbixClient {
    ZabbixClient::builder()
        .base_url(server.uri())
        .auth_strategy(AuthStrategy::ApiToken {
            token: SecretString::new("test-api-token".to_string().into()),
        })
        .max_retries(0)
        .build()
        .expect("client should build")
}

/// Client using username/password auth against the mock server.
#[allow(dead_code)]
pub fn password_client(server: &MockServer) -> ZabbixClient {
    ZabbixClient::builder()
        .base_url(server.uri())
        .auth_strategy(AuthStrategy::Password {
            username: "Admin".to_string(),
            password: SecretString::new("zabbix".to_string().into()),
        })
        .max_retries(0)
        .build()
        .expect("client should build")
}
