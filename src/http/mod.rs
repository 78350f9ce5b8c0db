//! HTTP client module: the `ApiClient` seam, its reqwest implementation,
//! status errors and GET retry.

mod client;
mod error;
mod retry;

use anyhow::Result;
use async_trait::async_trait;
use serde_json::Value;

pub use client::HttpClient;
pub use error::{StatusError, is_not_found, status_of};
pub use retry::{DEFAULT_MAX_ATTEMPTS, RETRY_DELAY_MS, RetryPolicy};

/// JSON request/response transport used by the style transfer client.
///
/// `path` is the request path (e.g. `/api/transfer`); implementations resolve
/// it against their own base URL. Non-2xx responses must fail with an error
/// from which [`status_of`] can recover the status code.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ApiClient: Send + Sync {
    async fn get(&self, path: &str) -> Result<Value>;
    async fn post(&self, path: &str, body: &Value) -> Result<Value>;
}
