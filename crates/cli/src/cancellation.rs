//! CLI cancellation utilities.
//!
//! Responsibilities:
//! - Provide a cloneable cancellation token passed to command handlers.
//! - Define the `Cancelled` error used to signal Ctrl+C through `anyhow::Result`.
//!
//! Does NOT handle:
//! - Installing signal handlers (see `main`).
//!
//! Invariants:
//! - Once cancelled, token remains cancelled forever.

use std::fmt;
use std::sync::{
    Arc,
    atomic::{AtomicBool, Ordering},
};

use tokio::sync::Notify;

/// Cancellation token usable across async tasks.
#[derive(Clone, Debug)]
pub struct CancellationToken {
    cancelled: Arc<AtomicBool>,
    notify: Arc<Notify>,
}

impl CancellationToken {
    /// Create a new, non-cancelled token.
    pub fn new() -> Self {
        Self {
            cancelled: Arc::new(AtomicBool::new(false)),
            notify: Arc::new(Notify::new()),
        }
    }

    /// Cancel token (idempotent).
    pub fn cancel(&self) {
        let was_cancelled = self.cancelled.swap(true, Ordering::SeqCst);
        if !was_cancelled {
            self.notify.notify_waiters();
        }
    }

    /// True if cancellation has been requested.
    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }

    /// Await cancellation.
    ///
    /// The `notified()` future is created before the flag is checked so a
    /// concurrent `cancel()` is never missed.
    pub async fn cancelled(&self) {
        let notified = self.notify.notified();
        if self.is_cancelled() {
            return;
        }
        notified.await;
    }
}

/// Marker error used to indicate user-driven cancellation.
#[derive(Debug, Clone, Copy)]
pub struct Cancelled;

impl fmt::Display for Cancelled {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "cancelled")
    }
}

impl std::error::Error for Cancelled {}

/// Returns true if this anyhow error represents a cancellation.
pub fn is_cancelled_error(err: &anyhow::Error) -> bool {
    err.is::<Cancelled>()
}

/// Print standard cancellation message to stderr.
pub fn print_cancelled_message() {
    eprintln!("^C\nOperation cancelled by user");
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[tokio::test]
    async fn test_cancel_wakes_waiter() {
        let token = CancellationToken::new();
        let waiter = token.clone();
        let handle = tokio::spawn(async move { waiter.cancelled().await });

        token.cancel();
        tokio::time::timeout(Duration::from_secs(1), handle)
            .await
            .expect("waiter should wake")
            .unwrap();
        assert!(token.is_cancelled());
    }

    #[tokio::test]
    async fn test_cancelled_returns_immediately_after_cancel() {
        let token = CancellationToken::new();
        token.cancel();
        token.cancel();
        tokio::time::timeout(Duration::from_millis(100), token.cancelled())
            .await
            .expect("already cancelled");
    }

    #[test]
    fn test_is_cancelled_error() {
        let err: anyhow::Error = Cancelled.into();
        assert!(is_cancelled_error(&err));
        assert!(!is_cancelled_error(&anyhow::anyhow!("boom")));
    }
}
