//! Remote API Client
//!
//! gloo-net wrappers around the todo backend, organized by domain. Every
//! call is a single attempt; the caller decides what to tell the user.

mod auth;
mod todos;
mod version;

use thiserror::Error;

// Re-export all public items
pub use auth::*;
pub use todos::*;
pub use version::*;

/// Typed outcome of an API call. Views branch on this instead of
/// inspecting transport-level status codes.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The request never produced a response
    #[error("request failed: {0}")]
    Network(String),
    /// The backend answered with an unexpected status
    #[error("unexpected status {0}")]
    Status(u16),
    /// The response body did not match the wire contract
    #[error("malformed response: {0}")]
    Decode(String),
    /// The backend refused the request and said why
    #[error("{0}")]
    Rejected(String),
}

impl From<gloo_net::Error> for ApiError {
    fn from(err: gloo_net::Error) -> Self {
        ApiError::Network(err.to_string())
    }
}

/// Compile-time override for the backend base URL
const BASE_URL_OVERRIDE: Option<&str> = option_env!("TODO_API_BASE_URL");

/// Base URL for all requests: build-time override, else the page's own origin
pub(crate) fn api_url(path: &str) -> String {
    match BASE_URL_OVERRIDE {
        Some(base) => join_url(base, path),
        None => join_url(&origin(), path),
    }
}

fn origin() -> String {
    web_sys::window()
        .and_then(|window| window.location().origin().ok())
        .unwrap_or_default()
}

pub(crate) fn join_url(base: &str, path: &str) -> String {
    format!("{}/{}", base.trim_end_matches('/'), path.trim_start_matches('/'))
}

pub(crate) fn bearer(token: &str) -> String {
    format!("Bearer {token}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_url() {
        assert_eq!(join_url("http://api.test", "/todos"), "http://api.test/todos");
        assert_eq!(join_url("http://api.test/", "/todos"), "http://api.test/todos");
        assert_eq!(join_url("http://api.test/", "todos"), "http://api.test/todos");
    }

    #[test]
    fn test_api_error_display() {
        assert_eq!(ApiError::Status(500).to_string(), "unexpected status 500");
        assert_eq!(
            ApiError::Rejected("Invalid credentials".to_string()).to_string(),
            "Invalid credentials"
        );
    }
}
