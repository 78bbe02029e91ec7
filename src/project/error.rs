//! Error types for project operations.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while loading files or snapshot files from disk.
#[derive(Debug, Error)]
pub enum ProjectError {
    /// The directory to load does not exist or is not a directory.
    #[error("Directory not found: {}", .0.display())]
    DirectoryNotFound(PathBuf),

    /// IO error during read/write.
    #[error("IO error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The snapshot could not be encoded or decoded.
    #[error(transparent)]
    Snapshot(#[from] SnapshotError),
}

impl ProjectError {
    /// Create an IO error for `path`.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// Errors in a persisted snapshot's contents.
#[derive(Debug, Error)]
pub enum SnapshotError {
    /// JSON parsing or serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The snapshot was written by an incompatible format version.
    #[error("Unsupported snapshot version: {0}")]
    UnsupportedVersion(u32),
}
