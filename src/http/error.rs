//! Status errors raised for non-2xx responses.

use reqwest::StatusCode;

/// The server answered with a non-success status.
#[derive(Debug)]
pub struct StatusError {
    pub status: StatusCode,
    pub url: String,
    pub body: String,
}

impl StatusError {
    pub fn new(status: StatusCode, url: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            status,
            url: url.into(),
            body: body.into(),
        }
    }
}

impl std::fmt::Display for StatusError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "HTTP {} from {}", self.status.as_u16(), self.url)?;
        if !self.body.is_empty() {
            write!(f, ": {}", self.body)?;
        }
        Ok(())
    }
}

impl std::error::Error for StatusError {}

/// Recovers the response status attached to an error, if any.
///
/// Looks for a [`StatusError`] first and falls back to a raw `reqwest::Error`
/// (as produced by `error_for_status()`).
pub fn status_of(error: &anyhow::Error) -> Option<StatusCode> {
    if let Some(status_error) = error.downcast_ref::<StatusError>() {
        return Some(status_error.status);
    }
    error
        .downcast_ref::<reqwest::Error>()
        .and_then(|e| e.status())
}

/// True when the error carries exactly HTTP 404.
pub fn is_not_found(error: &anyhow::Error) -> bool {
    status_of(error) == Some(StatusCode::NOT_FOUND)
}
