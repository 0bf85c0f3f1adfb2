//! Error types for the habitica-api crate.

use thiserror::Error;

/// Top-level error returned by [`HabiticaClient::get_progress`](crate::HabiticaClient::get_progress).
#[derive(Debug, Error)]
pub enum Error {
    /// Credentials could not be read.
    #[error(transparent)]
    Credential(#[from] CredentialError),

    /// The HTTP exchange failed or returned a non-success status.
    #[error(transparent)]
    Api(#[from] ApiError),

    /// The response body was not the expected user document.
    #[error("Failed to parse Habitica response: {0}")]
    Parse(String),

    /// The HTTP client could not be constructed.
    #[error("Failed to build HTTP client: {0}")]
    Client(String),
}

/// Errors that can occur when reading API credentials.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CredentialError {
    /// A required environment variable is unset or empty.
    #[error("Missing {0}. Set it to your Habitica credentials.")]
    Missing(&'static str),
}

/// Errors from the HTTP exchange with the Habitica API.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Request could not be sent or the body could not be read.
    #[error("Network error: {0}")]
    Network(String),

    /// Server rejected the user id / API key pair (401).
    #[error("Unauthorized: Habitica rejected the API credentials")]
    Unauthorized,

    /// Too many requests (429).
    #[error("Rate limited{}", retry_after.as_ref().map(|r| format!(", retry after {r}")).unwrap_or_default())]
    RateLimited {
        /// Value of the `retry-after` header, if sent.
        retry_after: Option<String>,
    },

    /// Server-side failure (5xx).
    #[error("Server error: HTTP {0}")]
    Server(u16),

    /// Any other non-success status.
    #[error("Unexpected response: HTTP {0}")]
    Unexpected(u16),
}

impl ApiError {
    /// HTTP status code behind this error, if the server answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Unauthorized => Some(401),
            ApiError::RateLimited { .. } => Some(429),
            ApiError::Server(code) | ApiError::Unexpected(code) => Some(*code),
            ApiError::Network(_) => None,
        }
    }
}
