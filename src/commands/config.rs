use anyhow::{Context, Result, bail};
use log::debug;
use reqwest::Url;
use std::time::Duration;

use crate::{path::DEFAULT_API_PREFIX, runtime::Runtime};

/// Backend URL used when neither `--api-url` nor STYLER_API_URL is given.
pub const DEFAULT_API_URL: &str = "http://localhost:8000";

/// Timeout for listing, fetching and saving results.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Timeout for transfer submissions, which wait on model generation.
pub const DEFAULT_LONG_TIMEOUT_SECS: u64 = 600;

/// Environment variable holding the bearer token.
pub const TOKEN_ENV: &str = "STYLER_API_TOKEN";

/// Values supplied on the command line (or via clap's env fallback).
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub api_url: Option<String>,
    pub api_prefix: Option<String>,
    pub timeout_secs: Option<u64>,
    pub long_timeout_secs: Option<u64>,
}

/// Resolved client configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub api_url: String,
    pub api_prefix: String,
    pub token: Option<String>,
    pub timeout: Duration,
    pub long_running_timeout: Duration,
}

impl Config {
    /// Apply overrides on top of defaults and read the token from the runtime.
    pub fn load<R: Runtime>(runtime: &R, overrides: ConfigOverrides) -> Result<Self> {
        let api_url = overrides
            .api_url
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());
        let parsed = Url::parse(&api_url).with_context(|| format!("Invalid API URL '{}'", api_url))?;
        if parsed.scheme() != "http" && parsed.scheme() != "https" {
            bail!("API URL must use http or https, got '{}'", parsed.scheme());
        }

        let timeout_secs = overrides.timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS);
        let long_timeout_secs = overrides
            .long_timeout_secs
            .unwrap_or(DEFAULT_LONG_TIMEOUT_SECS);
        if timeout_secs == 0 || long_timeout_secs == 0 {
            bail!("Timeouts must be at least one second");
        }

        let token = runtime.env_var(TOKEN_ENV).ok().filter(|t| !t.is_empty());
        if let Some(token) = &token {
            debug!("Using {} for authentication: {}", TOKEN_ENV, mask_token(token));
        }

        Ok(Self {
            api_url,
            api_prefix: overrides
                .api_prefix
                .unwrap_or_else(|| DEFAULT_API_PREFIX.to_string()),
            token,
            timeout: Duration::from_secs(timeout_secs),
            long_running_timeout: Duration::from_secs(long_timeout_secs),
        })
    }
}

/// Keeps the first four and last four characters of longer tokens.
fn mask_token(token: &str) -> String {
    let chars: Vec<char> = token.chars().collect();
    if chars.len() <= 12 {
        return "*********".to_string();
    }
    let head: String = chars[..4].iter().collect();
    let tail: String = chars[chars.len() - 4..].iter().collect();
    format!("{}*********{}", head, tail)
}
