//! Error types for the Snyk client.

use thiserror::Error;

/// Result type for Snyk client operations.
pub type Result<T> = std::result::Result<T, SnykError>;

/// Snyk client errors.
#[derive(Debug, Error)]
pub enum SnykError {
    /// Transport error (connection failed, timeout, unreadable body)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Non-2xx response from the API
    #[error("API error {status} for {url}: {message}")]
    Api {
        status: u16,
        url: String,
        message: String,
    },

    /// Response body did not match the expected JSON:API shape
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// Base URL or pagination link could not be parsed
    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),
}
