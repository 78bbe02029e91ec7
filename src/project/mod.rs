//! Everything that touches the file system: configuration, directory
//! loading and snapshot files.

pub mod config;
mod error;
pub mod snapshot_file;
#[cfg(feature = "loader")]
pub mod workspace_loader;

pub use config::IndexConfig;
pub use error::{ProjectError, SnapshotError};
#[cfg(feature = "loader")]
pub use workspace_loader::{LoadReport, WorkspaceLoader, document_uri};
