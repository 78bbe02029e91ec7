//! Reading and writing workspace snapshots on disk.
//!
//! The location is chosen by the caller. A missing, corrupt or
//! version-mismatched file is a cold start, not an error; only I/O failures
//! other than "not found" are reported.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use crate::hir::{SNAPSHOT_VERSION, Snapshot, WorkspaceIndex};

use super::error::{ProjectError, SnapshotError};

/// Write `snapshot` as UTF-8 JSON, creating parent directories as needed.
pub fn save(path: impl AsRef<Path>, snapshot: &Snapshot) -> Result<(), ProjectError> {
    let path = path.as_ref();
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| ProjectError::io(parent, e))?;
    }

    let json = serde_json::to_string(snapshot).map_err(SnapshotError::from)?;
    fs::write(path, json).map_err(|e| ProjectError::io(path, e))?;

    tracing::debug!(
        "[SNAPSHOT] wrote {} document(s) to {}",
        snapshot.entries.len(),
        path.display()
    );
    Ok(())
}

/// Read a snapshot file.
///
/// Returns `Ok(None)` when the file does not exist or its contents are not
/// a valid snapshot (logged at `warn`).
pub fn load(path: impl AsRef<Path>) -> Result<Option<Snapshot>, ProjectError> {
    let path = path.as_ref();
    let text = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            tracing::debug!("[SNAPSHOT] no snapshot at {}", path.display());
            return Ok(None);
        }
        Err(e) if e.kind() == ErrorKind::InvalidData => {
            tracing::warn!("[SNAPSHOT] {} is not UTF-8, starting cold", path.display());
            return Ok(None);
        }
        Err(e) => return Err(ProjectError::io(path, e)),
    };

    match decode(&text) {
        Ok(snapshot) => Ok(Some(snapshot)),
        Err(err) => {
            tracing::warn!("[SNAPSHOT] ignoring {}: {}", path.display(), err);
            Ok(None)
        }
    }
}

/// Read a snapshot file into `index`. Returns the number of documents
/// imported (0 on a cold start).
pub fn load_into(
    path: impl AsRef<Path>,
    index: &mut WorkspaceIndex,
) -> Result<usize, ProjectError> {
    Ok(load(path)?.map_or(0, |snapshot| index.import_snapshot(snapshot)))
}

/// Decode snapshot JSON, rejecting other format versions.
pub fn decode(text: &str) -> Result<Snapshot, SnapshotError> {
    let snapshot: Snapshot = serde_json::from_str(text)?;
    if snapshot.version != SNAPSHOT_VERSION {
        return Err(SnapshotError::UnsupportedVersion(snapshot.version));
    }
    Ok(snapshot)
}
