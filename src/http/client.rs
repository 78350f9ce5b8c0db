//! reqwest-backed JSON client bound to a base URL.

use anyhow::{Context, Result};
use async_trait::async_trait;
use log::debug;
use reqwest::{Client, RequestBuilder};
use serde_json::Value;

use super::ApiClient;
use super::error::StatusError;
use super::retry::RetryPolicy;

/// HTTP client that resolves request paths against a base URL and exchanges
/// JSON bodies. GET requests follow the configured [`RetryPolicy`].
#[derive(Clone)]
pub struct HttpClient {
    client: Client,
    base_url: String,
    retry: RetryPolicy,
}

impl HttpClient {
    /// Creates a client that performs every request exactly once.
    pub fn new(client: Client, base_url: &str) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            retry: RetryPolicy::none(),
        }
    }

    pub fn with_retry_policy(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn retry_policy(&self) -> RetryPolicy {
        self.retry
    }

    /// Joins the base URL and a request path.
    pub fn url(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{}", self.base_url, path)
        } else {
            format!("{}/{}", self.base_url, path)
        }
    }

    /// Sends a request once and decodes the JSON body.
    /// An empty success body decodes to `Value::Null`.
    async fn send_json(&self, request: RequestBuilder, url: &str) -> Result<Value> {
        let response = request
            .send()
            .await
            .with_context(|| format!("Failed to send request to {}", url))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .with_context(|| format!("Failed to read response body from {}", url))?;

        if !status.is_success() {
            return Err(StatusError::new(status, url, body).into());
        }

        if body.trim().is_empty() {
            return Ok(Value::Null);
        }

        let value = serde_json::from_str(&body)
            .with_context(|| format!("Failed to parse JSON response from {}", url))?;
        Ok(value)
    }
}

#[async_trait]
impl ApiClient for HttpClient {
    #[tracing::instrument(skip(self))]
    async fn get(&self, path: &str) -> Result<Value> {
        let url = self.url(path);
        debug!("GET {}...", url);

        self.retry
            .run("GET", || self.send_json(self.client.get(&url), &url))
            .await
    }

    #[tracing::instrument(skip(self, body))]
    async fn post(&self, path: &str, body: &Value) -> Result<Value> {
        let url = self.url(path);
        debug!("POST {}...", url);

        self.send_json(self.client.post(&url).json(body), &url).await
    }
}
