//! Fetch error taxonomy.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Why a single fetch failed. The batch runner reports these and moves on.
#[derive(Debug, Error)]
pub enum FetchError {
    /// URL did not parse, or is not http/https. No request was made.
    #[error("invalid URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },
    /// DNS, connect, timeout, reset and friends.
    #[error("network error: {0}")]
    Network(#[from] curl::Error),
    /// Server answered with a non-2xx status.
    #[error("HTTP {0}")]
    Transfer(u32),
    /// Directory creation, temp file write/sync, or the final move.
    #[error("failed to {op} {}: {source}", .path.display())]
    Filesystem {
        op: &'static str,
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl FetchError {
    pub(crate) fn fs(op: &'static str, path: impl Into<PathBuf>, source: io::Error) -> Self {
        FetchError::Filesystem {
            op,
            path: path.into(),
            source,
        }
    }

    /// Short category name for logs.
    pub fn kind(&self) -> &'static str {
        match self {
            FetchError::InvalidUrl { .. } => "invalid_url",
            FetchError::Network(_) => "network",
            FetchError::Transfer(_) => "transfer",
            FetchError::Filesystem { .. } => "filesystem",
        }
    }
}
