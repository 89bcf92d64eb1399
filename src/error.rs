//! Error types for the cache core
//!
//! A page fetch fails in one of three ways, and the fetch executor returns
//! the classification instead of raising: the store records it on the
//! affected page, and the controller surfaces it for the page being viewed.

use thiserror::Error;

/// Classified outcome of a failed page fetch.
///
/// The variants carry owned data (no source error) so a failure can be
/// recorded on a cached page and surfaced again later.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    /// No response was received (connect failure, timeout, DNS, ...).
    #[error("transport failure: {message}")]
    Transport {
        /// Description of the underlying transport error
        message: String,
    },

    /// The remote answered with a non-2xx status.
    #[error("remote rejected request: HTTP {status}")]
    RemoteRejected {
        /// HTTP status code returned by the remote
        status: u16,
    },

    /// The response body could not be parsed into the expected shape.
    #[error("malformed response body: {message}")]
    Decode {
        /// Description of the decode failure
        message: String,
    },
}

impl FetchError {
    /// Create a transport error
    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport {
            message: message.into(),
        }
    }

    /// Create a remote-rejected error from an HTTP status
    pub fn remote_rejected(status: u16) -> Self {
        Self::RemoteRejected { status }
    }

    /// Create a decode error
    pub fn decode(message: impl Into<String>) -> Self {
        Self::Decode {
            message: message.into(),
        }
    }

    /// HTTP status of a remote rejection, if that is what this error is
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::RemoteRejected { status } => Some(*status),
            _ => None,
        }
    }
}

/// Result type alias for page fetches
pub type FetchResult<T> = std::result::Result<T, FetchError>;
