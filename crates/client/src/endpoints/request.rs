//! Retry helper for HTTP requests with exponential backoff.
//!
//! Requests that fail with a retryable status (429, 502, 503, 504) are sent
//! again after 1s, 2s, 4s... (capped at one minute) until `max_retries` is
//! exhausted.

use std::time::{Duration, Instant};

use reqwest::{RequestBuilder, Response};
use tracing::debug;

use crate::error::{ClientError, Result};
use crate::metrics::MetricsCollector;

/// Longest error body copied into an `ApiError` message.
const MAX_ERROR_BODY_CHARS: usize = 512;

/// Upper bound for a single backoff delay.
const MAX_BACKOFF_SECS: u64 = 60;

/// Delay before retry number `attempt + 1`: `2^attempt` seconds, capped.
fn backoff_delay(attempt: usize) -> Duration {
    let secs = u32::try_from(attempt)
        .ok()
        .and_then(|exp| 2u64.checked_pow(exp))
        .map_or(MAX_BACKOFF_SECS, |secs| secs.min(MAX_BACKOFF_SECS));
    Duration::from_secs(secs)
}

/// Sends an HTTP request, retrying retryable statuses with exponential backoff.
///
/// `max_retries` counts retries after the first attempt, so `0` sends the
/// request exactly once.
///
/// # Errors
///
/// Returns `ClientError::MaxRetriesExceeded` when every attempt got a
/// retryable status, `ClientError::ApiError` for any other non-success
/// status, and `ClientError::HttpError` for transport failures.
pub async fn send_request_with_retry(
    builder: RequestBuilder,
    max_retries: usize,
    method: &str,
    metrics: Option<&MetricsCollector>,
) -> Result<Response> {
    for attempt in 0..=max_retries {
        let Some(attempt_builder) = builder.try_clone() else {
            debug!("Cannot clone request builder for retry");
            return Err(ClientError::MaxRetriesExceeded(attempt));
        };

        if let Some(m) = metrics {
            m.record_request(method);
            if attempt > 0 {
                m.record_retry(method, attempt);
            }
        }

        let started = Instant::now();
        let response = match attempt_builder.send().await {
            Ok(response) => response,
            Err(e) => {
                if let Some(m) = metrics {
                    m.record_request_duration(method, started.elapsed(), None);
                }
                return Err(ClientError::from(e));
            }
        };

        let status = response.status().as_u16();
        if let Some(m) = metrics {
            m.record_request_duration(method, started.elapsed(), Some(status));
        }

        if response.status().is_success() {
            if attempt > 0 {
                debug!(attempt = attempt + 1, "Request succeeded after retry");
            }
            return Ok(response);
        }

        if ClientError::is_retryable_status(status) {
            if attempt < max_retries {
                let backoff = backoff_delay(attempt);
                debug!(
                    status,
                    attempt = attempt + 1,
                    max_attempts = max_retries.saturating_add(1),
                    backoff_secs = backoff.as_secs(),
                    "Retryable status, backing off"
                );
                tokio::time::sleep(backoff).await;
                continue;
            }

            debug!(attempts = attempt + 1, "Max retries exhausted");
            return Err(ClientError::MaxRetriesExceeded(max_retries.saturating_add(1)));
        }

        let url = response.url().to_string();
        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "Could not read error response body".to_string());
        let message: String = body.trim().chars().take(MAX_ERROR_BODY_CHARS).collect();

        return Err(ClientError::ApiError {
            status,
            url,
            message,
        });
    }

    Err(ClientError::MaxRetriesExceeded(max_retries.saturating_add(1)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backoff_doubles_from_one_second() {
        assert_eq!(backoff_delay(0), Duration::from_secs(1));
        assert_eq!(backoff_delay(1), Duration::from_secs(2));
        assert_eq!(backoff_delay(2), Duration::from_secs(4));
    }

    #[test]
    fn test_backoff_is_capped_for_large_attempts() {
        assert_eq!(backoff_delay(6), Duration::from_secs(MAX_BACKOFF_SECS));
        assert_eq!(backoff_delay(64), Duration::from_secs(MAX_BACKOFF_SECS));
        assert_eq!(backoff_delay(usize::MAX), Duration::from_secs(MAX_BACKOFF_SECS));
    }
}
