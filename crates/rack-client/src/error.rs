//! Error types for keypair API operations.

use std::collections::BTreeMap;

use reqwest::StatusCode;
use thiserror::Error;

use crate::models::ApiFault;

/// Result alias for client operations.
pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors raised by [`crate::KeypairsClient`].
#[derive(Debug, Error)]
pub enum ClientError {
    /// Requested API version has no client implementation.
    #[error("invalid client version '{requested}'; must be one of: 1")]
    UnsupportedVersion {
        /// Version string supplied by the caller.
        requested: String,
    },
    /// Base URL cannot be extended with resource path segments.
    #[error("base URL '{url}' cannot carry a resource path")]
    InvalidBaseUrl {
        /// Offending base URL.
        url: String,
    },
    /// A resource identifier would not survive as a single path segment.
    #[error("invalid path segment '{segment}'")]
    InvalidPathSegment {
        /// Rejected identifier.
        segment: String,
    },
    /// A default header value contained characters HTTP does not allow.
    #[error("invalid value for header '{name}'")]
    InvalidHeader {
        /// Header name.
        name: &'static str,
    },
    /// Building the underlying HTTP client failed.
    #[error("failed to build HTTP client")]
    Build {
        /// Underlying reqwest error.
        #[source]
        source: reqwest::Error,
    },
    /// Request could not be sent or the response body could not be read.
    #[error("failed to {operation}")]
    Transport {
        /// Operation being performed, e.g. `list keypairs`.
        operation: &'static str,
        /// Underlying reqwest error.
        #[source]
        source: reqwest::Error,
    },
    /// API answered with a non-success status.
    #[error("{message} (HTTP {status})")]
    Api {
        /// Response status.
        status: StatusCode,
        /// Message decoded from the fault document or body.
        message: String,
    },
    /// Success response body did not match the expected envelope.
    #[error("unexpected response to {operation}")]
    Decode {
        /// Operation being performed.
        operation: &'static str,
        /// Underlying serde error.
        #[source]
        source: serde_json::Error,
    },
}

impl ClientError {
    /// Build an [`ClientError::Api`] from a failed response.
    ///
    /// The message comes from the first fault entry carrying one, then the
    /// trimmed body text, then a generic status line.
    #[must_use]
    pub fn from_response(status: StatusCode, body: &[u8]) -> Self {
        let message = serde_json::from_slice::<BTreeMap<String, ApiFault>>(body)
            .ok()
            .and_then(|faults| faults.into_values().find_map(|fault| fault.message))
            .or_else(|| {
                let text = String::from_utf8_lossy(body).trim().to_string();
                (!text.is_empty()).then_some(text)
            })
            .unwrap_or_else(|| format!("request failed with status {status}"));
        Self::Api { status, message }
    }

    /// HTTP status of an API error, if this is one.
    #[must_use]
    pub const fn status(&self) -> Option<StatusCode> {
        match self {
            Self::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Whether the API reported the resource as missing.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        self.status() == Some(StatusCode::NOT_FOUND)
    }
}
