//! Metrics collection for API call performance.
//!
//! This module records Zabbix API calls through the `metrics` facade:
//! - Request latency histograms
//! - Request counters (total, retries, errors)
//! - Error categorization
//!
//! # What this module does NOT handle:
//! - Metrics exposition/export (install a recorder such as `metrics-exporter-prometheus`)
//!
//! # Invariants
//! - All metrics use consistent label names: `method`, `status`, `error_category`
//! - `method` is the JSON-RPC method (e.g. `template.get`), never request parameters
//! - Zero-cost when no metrics recorder is installed

use crate::error::ClientError;
use std::time::Duration;

/// Metric name for request duration histogram.
pub const METRIC_REQUEST_DURATION: &str = "zabbix_api_request_duration_seconds";

/// Metric name for total request counter.
pub const METRIC_REQUESTS_TOTAL: &str = "zabbix_api_requests_total";

/// Metric name for retry counter.
pub const METRIC_RETRIES_TOTAL: &str = "zabbix_api_retries_total";

/// Metric name for error counter.
pub const METRIC_ERRORS_TOTAL: &str = "zabbix_api_errors_total";

/// Error categories for metrics labeling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Transport-level errors (connection refused, DNS, timeouts)
    Transport,
    /// HTTP 4xx client errors
    Http4xx,
    /// HTTP 5xx server errors
    Http5xx,
    /// JSON-RPC error objects
    Rpc,
    /// Authentication and session errors
    Auth,
    /// Undecodable responses
    Decode,
    /// Empty result sets
    NotFound,
    /// Unknown/unclassified errors
    Unknown,
}

impl ErrorCategory {
    /// Returns the string label for this error category.
    pub const fn as_str(&self) -> &'static str {
        match self {
            ErrorCategory::Transport => "transport",
            ErrorCategory::Http4xx => "http_4xx",
            ErrorCategory::Http5xx => "http_5xx",
            ErrorCategory::Rpc => "rpc",
            ErrorCategory::Auth => "auth",
            ErrorCategory::Decode => "decode",
            ErrorCategory::NotFound => "not_found",
            ErrorCategory::Unknown => "unknown",
        }
    }
}

impl From<&ClientError> for ErrorCategory {
    fn from(error: &ClientError) -> Self {
        match error {
            ClientError::HttpError(e) if e.is_decode() => ErrorCategory::Decode,
            ClientError::HttpError(_) => ErrorCategory::Transport,
            ClientError::ApiError { status, .. } => {
                if (400..500).contains(status) {
                    ErrorCategory::Http4xx
                } else if (500..600).contains(status) {
                    ErrorCategory::Http5xx
                } else {
                    ErrorCategory::Unknown
                }
            }
            e if e.is_auth_error() => ErrorCategory::Auth,
            ClientError::Rpc { .. } => ErrorCategory::Rpc,
            ClientError::InvalidResponse(_) => ErrorCategory::Decode,
            ClientError::NotFound => ErrorCategory::NotFound,
            _ => ErrorCategory::Unknown,
        }
    }
}

/// Metrics collector for Zabbix API calls.
///
/// Thin wrapper around the `metrics` macros so every call site uses the same
/// names and labels.
#[derive(Debug, Clone, Default)]
pub struct MetricsCollector {
    enabled: bool,
}

impl MetricsCollector {
    /// Create an enabled metrics collector.
    pub fn new() -> Self {
        Self { enabled: true }
    }

    /// Create a collector that records nothing.
    pub fn disabled() -> Self {
        Self { enabled: false }
    }

    /// Check if metrics collection is enabled.
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Record the duration of one HTTP exchange.
    ///
    /// `status` is None if the request failed before a response arrived.
    pub fn record_request_duration(&self, method: &str, duration: Duration, status: Option<u16>) {
        if !self.enabled {
            return;
        }

        let status_label = status.map_or("error".to_string(), |s| s.to_string());

        metrics::histogram!(METRIC_REQUEST_DURATION,
            "method" => method.to_string(),
            "status" => status_label,
        )
        .record(duration.as_secs_f64());
    }

    /// Record a request attempt, including retries.
    pub fn record_request(&self, method: &str) {
        if !self.enabled {
            return;
        }

        metrics::counter!(METRIC_REQUESTS_TOTAL, "method" => method.to_string()).increment(1);
    }

    /// Record a retry attempt (1-based).
    pub fn record_retry(&self, method: &str, attempt: usize) {
        if !self.enabled {
            return;
        }

        metrics::counter!(METRIC_RETRIES_TOTAL,
            "method" => method.to_string(),
            "attempt" => attempt.to_string(),
        )
        .increment(1);
    }

    /// Record an error, categorized from the `ClientError`.
    pub fn record_client_error(&self, method: &str, error: &ClientError) {
        if !self.enabled {
            return;
        }

        metrics::counter!(METRIC_ERRORS_TOTAL,
            "method" => method.to_string(),
            "error_category" => ErrorCategory::from(error).as_str(),
        )
        .increment(1);
    }
}
