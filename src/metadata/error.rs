//! Provider-specific error types.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type for metadata operations.
pub type MetadataResult<T> = Result<T, ProviderError>;

/// Errors returned by a metadata provider.
#[derive(Error, Debug)]
pub enum ProviderError {
    /// The requested resource does not exist.
    #[error("{kind} not found: {id}")]
    NotFound {
        /// Kind of resource (e.g. "source schema").
        kind: &'static str,
        id: String,
    },

    /// An id that cannot be used to address a resource.
    #[error("invalid id: {0:?}")]
    InvalidId(String),

    /// Failed to read a resource.
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Failed to decode a resource.
    #[error("failed to parse {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The backend reported an error.
    #[error("backend error: {message} (code: {code})")]
    Remote {
        /// Error code from the backend.
        code: String,
        /// Error message from the backend.
        message: String,
    },
}

impl ProviderError {
    pub fn not_found(kind: &'static str, id: impl Into<String>) -> Self {
        Self::NotFound {
            kind,
            id: id.into(),
        }
    }

    /// Create a remote error from a backend error response.
    pub fn remote(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Remote {
            code: code.into(),
            message: message.into(),
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}
