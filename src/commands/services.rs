//! Service factory for building the style transfer client.
//!
//! Keeps the construction of transports separate from the configuration:
//! two `HttpClient`s with different timeouts share one base URL and token.

use std::time::Duration;

use anyhow::Result;
use log::debug;
use reqwest::{
    Client,
    header::{AUTHORIZATION, HeaderMap, HeaderValue},
};

use crate::{
    http::{HttpClient, RetryPolicy},
    path::ApiPathNormalizer,
    style::StyleTransferClient,
};

use super::config::Config;

/// The concrete client the CLI talks to.
pub type Services = StyleTransferClient<HttpClient, HttpClient, ApiPathNormalizer>;

/// Build a reqwest client with optional authentication token and a request timeout
pub fn build_reqwest_client(token: Option<&str>, timeout: Duration) -> Result<Client> {
    let mut headers = HeaderMap::new();

    if let Some(token) = token {
        let mut auth_value = HeaderValue::from_str(&format!("Bearer {}", token))?;
        auth_value.set_sensitive(true);
        headers.insert(AUTHORIZATION, auth_value);
        debug!("HTTP client configured with authentication");
    }

    let client = Client::builder()
        .user_agent("styler-cli")
        .default_headers(headers)
        .timeout(timeout)
        .build()?;

    Ok(client)
}

/// Client for transfer submissions: long timeout, single attempt.
pub fn build_long_running_client(config: &Config) -> Result<HttpClient> {
    let client = build_reqwest_client(config.token.as_deref(), config.long_running_timeout)?;
    Ok(HttpClient::new(client, &config.api_url))
}

/// Client for results: standard timeout, GETs retried on transient errors.
pub fn build_standard_client(config: &Config) -> Result<HttpClient> {
    let client = build_reqwest_client(config.token.as_deref(), config.timeout)?;
    Ok(HttpClient::new(client, &config.api_url).with_retry_policy(RetryPolicy::default()))
}

/// Build the style transfer client from configuration
pub fn build_services(config: &Config) -> Result<Services> {
    Ok(StyleTransferClient::new(
        build_long_running_client(config)?,
        build_standard_client(config)?,
        ApiPathNormalizer::new(&config.api_prefix),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::config::ConfigOverrides;
    use crate::http::ApiClient;
    use crate::runtime::MockRuntime;
    use crate::style::StyleTransferApi;
    use mockall::predicate::eq;
    use mockito::{Matcher, Server};
    use serde_json::json;

    /// Helper function to verify Authorization header behavior
    /// - `token`: Some(token) to test with STYLER_API_TOKEN set, None to test without
    async fn verify_authorization_header(token: Option<&str>) {
        let mut runtime = MockRuntime::new();
        let token_clone = token.map(|t| t.to_string());
        runtime
            .expect_env_var()
            .with(eq("STYLER_API_TOKEN"))
            .returning(move |_| token_clone.clone().ok_or(std::env::VarError::NotPresent));

        let mut server = Server::new_async().await;

        let expected_header = match token {
            Some(t) => Matcher::Exact(format!("Bearer {}", t)),
            None => Matcher::Missing,
        };

        let mock = server
            .mock("GET", "/api/results/list-style")
            .match_header("Authorization", expected_header)
            .with_body("[]")
            .create_async()
            .await;

        let config = Config::load(
            &runtime,
            ConfigOverrides {
                api_url: Some(server.url()),
                ..Default::default()
            },
        )
        .unwrap();
        let services = build_services(&config).unwrap();
        services.get_style_transfer_results().await.unwrap();

        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_services_with_token() {
        verify_authorization_header(Some("test_token")).await;
    }

    #[tokio::test]
    async fn test_services_without_token() {
        verify_authorization_header(None).await;
    }

    #[tokio::test]
    async fn test_user_agent() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", "/api/transfer")
            .match_header("user-agent", "styler-cli")
            .with_body("{}")
            .create_async()
            .await;

        let client = build_reqwest_client(None, Duration::from_secs(5)).unwrap();
        HttpClient::new(client, &server.url())
            .post("/api/transfer", &json!({}))
            .await
            .unwrap();

        mock.assert_async().await;
    }

    #[test]
    fn test_retry_policies() {
        let config = Config {
            api_url: crate::test_utils::TEST_API_URL.to_string(),
            api_prefix: "/api".to_string(),
            token: None,
            timeout: Duration::from_secs(30),
            long_running_timeout: Duration::from_secs(600),
        };

        let services = build_services(&config).unwrap();
        assert_eq!(services.long_running().retry_policy(), RetryPolicy::none());
        assert_eq!(services.standard().retry_policy(), RetryPolicy::default());
        assert_eq!(services.standard().base_url(), "http://styler.test");
    }

    #[test]
    fn test_invalid_token_header() {
        let result = build_reqwest_client(Some("bad\ntoken"), Duration::from_secs(5));
        assert!(result.is_err());
    }
}
