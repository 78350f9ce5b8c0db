//! Retry policy for idempotent requests with error classification.

use std::time::Duration;

use log::{debug, warn};

use super::error::status_of;

/// Default number of attempts for GET requests on the standard client.
pub const DEFAULT_MAX_ATTEMPTS: usize = 3;

/// Delay between retry attempts in milliseconds.
pub const RETRY_DELAY_MS: u64 = 1000;

/// How many times a GET may be attempted and how long to wait in between.
///
/// POST requests are never retried regardless of the policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    pub max_attempts: usize,
    pub delay: Duration,
}

impl RetryPolicy {
    /// A policy that performs exactly one attempt.
    pub fn none() -> Self {
        Self {
            max_attempts: 1,
            delay: Duration::ZERO,
        }
    }

    pub fn new(max_attempts: usize, delay: Duration) -> Self {
        Self {
            max_attempts: max_attempts.max(1),
            delay,
        }
    }

    /// Executes an async operation, retrying transient failures.
    pub async fn run<F, Fut, T>(&self, operation_name: &str, operation: F) -> anyhow::Result<T>
    where
        F: Fn() -> Fut,
        Fut: std::future::Future<Output = anyhow::Result<T>>,
    {
        let mut attempt = 1;
        loop {
            match operation().await {
                Ok(result) => return Ok(result),
                Err(e) => {
                    if !is_retryable_error(&e) {
                        debug!("{}: non-retryable error: {}", operation_name, e);
                        return Err(e);
                    }
                    if attempt >= self.max_attempts {
                        return Err(e);
                    }
                    warn!(
                        "{}: attempt {}/{} failed ({}), retrying in {}ms...",
                        operation_name,
                        attempt,
                        self.max_attempts,
                        e,
                        self.delay.as_millis()
                    );
                    tokio::time::sleep(self.delay).await;
                    attempt += 1;
                }
            }
        }
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_ATTEMPTS, Duration::from_millis(RETRY_DELAY_MS))
    }
}

/// Client errors and malformed bodies won't succeed on retry; server errors
/// and transport failures might.
fn is_retryable_error(e: &anyhow::Error) -> bool {
    if let Some(status) = status_of(e) {
        return status.is_server_error();
    }
    if e.downcast_ref::<serde_json::Error>().is_some() {
        return false;
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::StatusError;
    use reqwest::StatusCode;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn fast(max_attempts: usize) -> RetryPolicy {
        RetryPolicy::new(max_attempts, Duration::from_millis(1))
    }

    #[test]
    fn test_is_retryable_error() {
        let err = anyhow::Error::from(StatusError::new(StatusCode::NOT_FOUND, "u", ""));
        assert!(!is_retryable_error(&err));

        let err = anyhow::Error::from(StatusError::new(StatusCode::UNPROCESSABLE_ENTITY, "u", ""));
        assert!(!is_retryable_error(&err));

        let err = anyhow::Error::from(StatusError::new(StatusCode::SERVICE_UNAVAILABLE, "u", ""));
        assert!(is_retryable_error(&err));

        let err = anyhow::anyhow!("connection reset by peer");
        assert!(is_retryable_error(&err));

        let parse_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        assert!(!is_retryable_error(&anyhow::Error::from(parse_err)));
    }

    #[test]
    fn test_new_clamps_attempts() {
        assert_eq!(RetryPolicy::new(0, Duration::ZERO).max_attempts, 1);
        assert_eq!(RetryPolicy::none().max_attempts, 1);
        assert_eq!(RetryPolicy::default().max_attempts, DEFAULT_MAX_ATTEMPTS);
    }

    #[tokio::test]
    async fn test_run_success() {
        let result = fast(3)
            .run("test", || async { Ok::<_, anyhow::Error>("success") })
            .await;
        assert_eq!(result.unwrap(), "success");
    }

    #[tokio::test]
    async fn test_run_immediate_failure_on_client_error() {
        let call_count = Arc::new(AtomicUsize::new(0));
        let call_count_clone = call_count.clone();

        let result = fast(3)
            .run("test", || {
                let count = call_count_clone.clone();
                async move {
                    count.fetch_add(1, Ordering::SeqCst);
                    Err::<(), _>(anyhow::Error::from(StatusError::new(
                        StatusCode::NOT_FOUND,
                        "u",
                        "",
                    )))
                }
            })
            .await;

        assert!(result.is_err());
        assert_eq!(call_count.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_run_retries_on_transient_error() {
        let call_count = Arc::new(AtomicUsize::new(0));
        let call_count_clone = call_count.clone();

        let result = fast(3)
            .run("test", || {
                let count = call_count_clone.clone();
                async move {
                    let current = count.fetch_add(1, Ordering::SeqCst);
                    if current < 2 {
                        Err::<&str, _>(anyhow::anyhow!("connection reset"))
                    } else {
                        Ok("success after retries")
                    }
                }
            })
            .await;

        assert_eq!(result.unwrap(), "success after retries");
        assert_eq!(call_count.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn test_run_exhausts_attempts() {
        let call_count = Arc::new(AtomicUsize::new(0));
        let call_count_clone = call_count.clone();

        let result = fast(2)
            .run("test", || {
                let count = call_count_clone.clone();
                async move {
                    count.fetch_add(1, Ordering::SeqCst);
                    Err::<(), _>(anyhow::anyhow!("connection timeout"))
                }
            })
            .await;

        assert!(result.is_err());
        assert_eq!(call_count.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_none_never_retries() {
        let call_count = Arc::new(AtomicUsize::new(0));
        let call_count_clone = call_count.clone();

        let result = RetryPolicy::none()
            .run("test", || {
                let count = call_count_clone.clone();
                async move {
                    count.fetch_add(1, Ordering::SeqCst);
                    Err::<(), _>(anyhow::Error::from(StatusError::new(
                        StatusCode::INTERNAL_SERVER_ERROR,
                        "u",
                        "",
                    )))
                }
            })
            .await;

        assert!(result.is_err());
        assert_eq!(call_count.load(Ordering::SeqCst), 1);
    }
}
