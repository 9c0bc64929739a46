//! Error types for docedit.
//!
//! Unknown content blocks are not errors: they render as nothing.
//! Everything here is a failure of the whole operation.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while loading or rendering documents.
#[derive(Debug, Error)]
pub enum DocError {
    /// Subsection nesting exceeded the configured depth limit
    #[error("subsection nesting exceeds depth limit {limit} at {path}")]
    DepthExceeded {
        /// Configured maximum depth
        limit: usize,
        /// Index path of the offending node, e.g. `0/3/1`
        path: String,
    },

    /// Template JSON did not match the schema
    #[error("invalid template json: {0}")]
    Json(#[from] serde_json::Error),

    /// Template file could not be read or written
    #[error("failed to access {}: {source}", .path.display())]
    Io {
        /// File that was accessed
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// No template registered under this name
    #[error("unknown template: {0}")]
    UnknownTemplate(String),
}

/// Result type alias for docedit operations.
pub type DocResult<T> = Result<T, DocError>;

impl DocError {
    /// Create an I/O error for a path.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
