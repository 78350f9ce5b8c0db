//! Request path normalization for API fragments.

/// Maps a relative API fragment such as `transfer/` or `results/style/42`
/// to the request path the HTTP client sends.
#[cfg_attr(test, mockall::automock)]
pub trait NormalizePath: Send + Sync {
    fn normalize(&self, fragment: &str) -> String;
}

/// Default API prefix under which the backend mounts its routers.
pub const DEFAULT_API_PREFIX: &str = "/api";

/// Prefixes fragments with the API mount point.
///
/// Leading slashes of the fragment are dropped so `"transfer/"` and
/// `"/transfer/"` both become `/api/transfer/`. Trailing slashes and every
/// other character are kept as-is; nothing is percent-escaped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiPathNormalizer {
    prefix: String,
}

impl ApiPathNormalizer {
    pub fn new(prefix: &str) -> Self {
        let trimmed = prefix.trim_matches('/');
        let prefix = if trimmed.is_empty() {
            String::new()
        } else {
            format!("/{}", trimmed)
        };
        Self { prefix }
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }
}

impl Default for ApiPathNormalizer {
    fn default() -> Self {
        Self::new(DEFAULT_API_PREFIX)
    }
}

impl NormalizePath for ApiPathNormalizer {
    fn normalize(&self, fragment: &str) -> String {
        format!("{}/{}", self.prefix, fragment.trim_start_matches('/'))
    }
}
