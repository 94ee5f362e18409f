//! Error types for Herald webhooks SDK operations.
//!
//! This module defines all error types used throughout the SDK, with proper
//! classification for retry logic. HTTP error statuses (4xx/5xx) are not
//! errors here: the API answered, and the caller inspects the returned
//! status. Only local validation and transport-level failures surface as
//! errors.

use thiserror::Error;

/// Errors raised while constructing a client.
///
/// These cover missing or malformed configuration values and failures to
/// build the underlying HTTP transport. All of them are programming or
/// deployment mistakes and none are retryable.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// No bearer token was supplied.
    #[error("An API token is required")]
    MissingToken,

    /// The application id was not a UUID or a URI ending in one.
    #[error("Invalid application id: {value}")]
    InvalidAppId { value: String },

    /// The HTTP client could not be created.
    #[error("Failed to create HTTP client: {0}")]
    HttpClient(#[from] reqwest::Error),
}

/// Errors during webhook API operations.
///
/// These represent failures to produce a usable response: rejected input,
/// timeouts, transport problems, and unparseable response bodies. A completed
/// HTTP exchange always yields an [`ApiResponse`](crate::ApiResponse),
/// whatever its status code.
#[derive(Debug, Error)]
pub enum ApiError {
    /// `register` was called without a target URL (non-retryable).
    #[error("A target URL to deliver webhook events to is required")]
    MissingTargetUrl,

    /// `register` was called without any event types (non-retryable).
    #[error("At least one event type to subscribe to is required")]
    MissingEvents,

    /// `register` was called without a secret (non-retryable).
    #[error("A webhook secret is required")]
    MissingSecret,

    /// Request to the Herald API timed out (retryable).
    #[error("Request timeout")]
    Timeout,

    /// Network or transport error (DNS, connection, TLS).
    #[error("Network error: {0}")]
    Network(#[source] reqwest::Error),

    /// Failed to parse the JSON response body.
    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),
}

impl ApiError {
    /// Check if this error represents a transient condition that may succeed
    /// if retried.
    ///
    /// Timeouts and network failures are transient. Validation failures and
    /// malformed response bodies are not.
    pub fn is_transient(&self) -> bool {
        match self {
            Self::MissingTargetUrl => false,
            Self::MissingEvents => false,
            Self::MissingSecret => false,
            Self::Timeout => true,
            Self::Network(_) => true, // Network issues are transient
            Self::Json(_) => false,
        }
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
