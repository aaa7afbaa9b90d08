//! Error types for the Redfish client core.

use reqwest::StatusCode;
use thiserror::Error;

/// Errors surfaced by resource fetches and decodes.
///
/// Transport and HTTP-status failures propagate unmodified from the
/// request that produced them; the core never retries or rewraps them.
#[derive(Debug, Error)]
pub enum Error {
    /// The request could not be sent or its body could not be read.
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The service answered with a non-success HTTP status.
    #[error("request failed with status {status}")]
    Http {
        status: StatusCode,
        /// Raw response body, kept for callers that want the service's
        /// extended error payload.
        body: String,
    },

    /// Neither the strict nor the widened decode pass produced a usable
    /// resource. Always carries the strict pass's error; constructed
    /// explicitly so no `?` conversion can smuggle in another pass's
    /// failure.
    #[error("failed to decode resource body: {0}")]
    Decode(serde_json::Error),

    /// The target URI would not join against the client's base URL.
    #[error("invalid resource URI {uri}: {source}")]
    InvalidUri {
        uri: String,
        source: url::ParseError,
    },

    /// A reference resolution was attempted on a resource that was never
    /// bound to a client.
    #[error("resource is not bound to a client")]
    NoClient,
}

impl Error {
    /// The HTTP status of the failed request, if this error carries one.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Error::Http { status, .. } => Some(*status),
            Error::Transport(err) => err.status(),
            _ => None,
        }
    }
}
