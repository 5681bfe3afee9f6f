//! Unified error type for every Monasca API operation.

use serde::Serialize;
use thiserror::Error;

/// Error returned by all client operations.
///
/// Variants fall into four groups:
///
/// - **configuration**: [`InvalidUrl`](Self::InvalidUrl),
///   [`InvalidHeader`](Self::InvalidHeader), [`ClientBuild`](Self::ClientBuild)
/// - **transport**: [`Network`](Self::Network), [`Timeout`](Self::Timeout)
/// - **API**: [`Api`](Self::Api), a non-success HTTP status together with the raw body
/// - **decode**: [`Decode`](Self::Decode), plus [`Serialization`](Self::Serialization)
///   for request bodies that could not be encoded
///
/// Nothing is retried automatically.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "code", content = "details")]
pub enum MonascaError {
    /// The base URL is malformed or cannot carry a path.
    #[error("Invalid URL '{url}': {detail}")]
    InvalidUrl { url: String, detail: String },

    /// A configured header name or value is not valid HTTP.
    #[error("Invalid header '{name}': {detail}")]
    InvalidHeader { name: String, detail: String },

    /// The underlying HTTP client could not be constructed.
    #[error("Failed to build HTTP client: {0}")]
    ClientBuild(String),

    /// Connection, TLS or body-read failure.
    #[error("Network error: {0}")]
    Network(String),

    /// The request exceeded the configured timeout.
    #[error("Request timed out: {0}")]
    Timeout(String),

    /// The API answered with a status other than 200, 201 or 204.
    #[error("API error (HTTP {status}): {body}")]
    Api { status: u16, body: String },

    /// The response body is not valid JSON or has an unexpected shape.
    #[error("Failed to decode response: {0}")]
    Decode(String),

    /// The request body could not be serialized.
    #[error("Failed to serialize request body: {0}")]
    Serialization(String),
}

impl MonascaError {
    /// HTTP status carried by an [`Api`](Self::Api) error.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Whether the failure happened before any response was received.
    #[must_use]
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Network(_) | Self::Timeout(_))
    }

    /// Whether the failure comes from client configuration rather than the call itself.
    #[must_use]
    pub fn is_config(&self) -> bool {
        matches!(
            self,
            Self::InvalidUrl { .. } | Self::InvalidHeader { .. } | Self::ClientBuild(_)
        )
    }
}

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, MonascaError>;
