use std::path::PathBuf;

use thiserror::Error;

/// Unified error type for version-sync operations
#[derive(Error, Debug)]
pub enum VersionSyncError {
    #[error("invalid version: {0} (expected X.Y.Z)")]
    InvalidVersionFormat(String),

    #[error("failed to find canonical version in {path}")]
    CanonicalVersionNotFound { path: String },

    #[error("{path}: replacement count mismatch for pattern '{pattern}' (expected {expected}, got {actual})")]
    ReplacementCountMismatch {
        path: String,
        pattern: String,
        expected: usize,
        actual: usize,
    },

    #[error("file not found: {}", .0.display())]
    FileNotFound(PathBuf),

    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid pattern '{pattern}': {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("Configuration error: {0}")]
    Config(String),
}

/// Convenience type alias for Results in version-sync
pub type Result<T> = std::result::Result<T, VersionSyncError>;

impl VersionSyncError {
    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        VersionSyncError::Config(msg.into())
    }

    /// Map an I/O failure on `path`, folding `NotFound` into [`VersionSyncError::FileNotFound`].
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        if source.kind() == std::io::ErrorKind::NotFound {
            VersionSyncError::FileNotFound(path)
        } else {
            VersionSyncError::Io { path, source }
        }
    }
}
