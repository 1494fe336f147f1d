//! Error types for the search client.

use thiserror::Error;

/// Result type alias for client operations.
pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors that can occur while issuing a search or decoding its response.
///
/// None of these are fatal: every variant is recovered at the renderer
/// boundary and turned into a visible notice card.
#[derive(Error, Debug)]
pub enum ClientError {
    /// HTTP transport failed.
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Failed to decode the response body.
    #[error("Failed to parse response: {0}")]
    Parse(String),

    /// Query rejected before any request was sent.
    #[error("Invalid query: {0}")]
    InvalidQuery(String),

    /// The backend answered with an explicit non-success status.
    #[error("Server reported failure: {}", .0.as_deref().unwrap_or("no message"))]
    ServerReported(Option<String>),

    /// Request exceeded the configured timeout.
    #[error("Search request timed out")]
    Timeout,

    /// URL parsing error.
    #[error("URL parsing error: {0}")]
    UrlParse(#[from] url::ParseError),
}

impl ClientError {
    /// Whether this error came from the transport layer rather than the
    /// backend or local validation.
    pub fn is_network(&self) -> bool {
        matches!(self, Self::Http(_) | Self::Timeout | Self::Parse(_))
    }
}
