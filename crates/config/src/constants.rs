//! Centralized constants for the Zabbix client workspace.
//!
//! Default values shared by the config, client and CLI crates.

// =============================================================================
// Connection & Timeout Defaults
// =============================================================================

/// Default HTTP request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Maximum allowed request timeout in seconds (1 hour).
pub const MAX_TIMEOUT_SECS: u64 = 3600;

/// Default maximum number of retries for rate-limited or unavailable responses.
pub const DEFAULT_MAX_RETRIES: usize = 3;

/// Upper bound accepted for `ZABBIX_MAX_RETRIES`.
pub const MAX_MAX_RETRIES: usize = 10;

/// Default maximum number of HTTP redirects to follow.
pub const DEFAULT_MAX_REDIRECTS: usize = 5;

// =============================================================================
// JSON-RPC
// =============================================================================

/// Path of the JSON-RPC endpoint relative to the Zabbix frontend root.
pub const API_ENDPOINT_PATH: &str = "api_jsonrpc.php";

/// Content type Zabbix expects for JSON-RPC requests.
pub const JSON_RPC_CONTENT_TYPE: &str = "application/json-rpc";

/// Base URL used by `Config::default()`.
pub const DEFAULT_BASE_URL: &str = "http://localhost/zabbix";
