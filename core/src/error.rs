//! Error types for the PocketSmith API client.
//!
//! # Design
//! The service reports logical failures as `{"error": "<message>"}` bodies,
//! sometimes under a 2xx status, so `Api` is keyed on the body and never on
//! the status code. `NotFound` is reserved for client-side lookups that scan
//! a list and find nothing; it is never produced from an HTTP response.

use serde::Deserialize;
use thiserror::Error;

/// A service-reported failure carried in a JSON body.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Error)]
#[error("PocketSmith API error: {error}")]
pub struct ApiError {
    pub error: String,
}

/// Errors returned by `PocketSmithClient` operations.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The request never produced a response: connection refused, DNS,
    /// TLS or I/O failure while reading the body.
    #[error("transport failed: {0}")]
    Transport(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// The service answered with a non-empty `error` message.
    #[error(transparent)]
    Api(#[from] ApiError),

    /// The response body could not be decoded into the expected type.
    #[error("unexpected response format: {0}")]
    Decode(#[source] serde_json::Error),

    /// The request payload could not be serialized to JSON.
    #[error("serialization failed: {0}")]
    Serialization(#[source] serde_json::Error),

    /// The request could not be constructed.
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// A client-side lookup found no matching resource.
    #[error("resource not found")]
    NotFound,
}

impl From<ureq::Error> for ClientError {
    fn from(err: ureq::Error) -> Self {
        ClientError::Transport(Box::new(err))
    }
}

pub type Result<T> = std::result::Result<T, ClientError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_error_display_carries_message() {
        let err = ClientError::from(ApiError {
            error: "Invalid developer key".to_string(),
        });
        assert_eq!(err.to_string(), "PocketSmith API error: Invalid developer key");
    }
}
