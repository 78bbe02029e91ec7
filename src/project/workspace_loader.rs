use std::fs;
use std::path::{Path, PathBuf};

use rayon::prelude::*;
use walkdir::WalkDir;

use crate::hir::{Symbol, WorkspaceIndex, extract_symbols_from_text};
use crate::ide::AnalysisHost;

use super::config::IndexConfig;
use super::error::ProjectError;

/// Outcome of loading a directory.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadReport {
    /// Files indexed.
    pub indexed: usize,
    /// Files with a matching extension skipped for exceeding the size limit.
    pub skipped: usize,
    /// Files that could not be read, with the reason.
    pub failed: Vec<(PathBuf, String)>,
}

/// Loads workspace files from disk into a [`WorkspaceIndex`].
///
/// Files are read and extracted in parallel; the index is only touched on
/// the calling thread.
#[derive(Debug, Clone, Default)]
pub struct WorkspaceLoader {
    config: IndexConfig,
}

impl WorkspaceLoader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: IndexConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &IndexConfig {
        &self.config
    }

    /// Loads all matching files under `path` into `index`.
    pub fn load_directory<P: AsRef<Path>>(
        &self,
        path: P,
        index: &mut WorkspaceIndex,
    ) -> Result<LoadReport, ProjectError> {
        let path = path.as_ref();
        if !path.is_dir() {
            return Err(ProjectError::DirectoryNotFound(path.to_path_buf()));
        }

        let (paths, skipped) = self.collect_file_paths(path);

        // Read and extract files in parallel
        let results: Vec<(PathBuf, Result<(String, Vec<Symbol>), String>)> = paths
            .into_par_iter()
            .map(|path| {
                let result = read_and_extract(&path);
                (path, result)
            })
            .collect();

        let mut report = LoadReport {
            skipped,
            ..LoadReport::default()
        };
        for (path, result) in results {
            match result {
                Ok((uri, symbols)) => {
                    index.insert_symbols(&uri, symbols);
                    report.indexed += 1;
                }
                Err(reason) => {
                    tracing::warn!("[LOADER] failed to read {}: {}", path.display(), reason);
                    report.failed.push((path, reason));
                }
            }
        }

        tracing::info!(
            "[LOADER] {}: indexed {}, skipped {}, failed {}",
            path.display(),
            report.indexed,
            report.skipped,
            report.failed.len()
        );
        Ok(report)
    }

    /// Loads all matching files under `path` into the host's workspace index.
    pub fn load_directory_into_host<P: AsRef<Path>>(
        &self,
        path: P,
        host: &mut AnalysisHost,
    ) -> Result<LoadReport, ProjectError> {
        self.load_directory(path, host.workspace_mut())
    }

    /// Loads a single file, regardless of its extension or size.
    pub fn load_file<P: AsRef<Path>>(
        &self,
        path: P,
        index: &mut WorkspaceIndex,
    ) -> Result<(), ProjectError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|e| ProjectError::io(path, e))?;
        index.index(&document_uri(path), &text);
        Ok(())
    }

    /// Collect indexable files under `dir`, sorted by path.
    ///
    /// Returns the paths and the number of files skipped for size.
    fn collect_file_paths(&self, dir: &Path) -> (Vec<PathBuf>, usize) {
        let mut paths = Vec::new();
        let mut skipped = 0;

        for entry in WalkDir::new(dir)
            .follow_links(false)
            .into_iter()
            .filter_map(Result::ok)
        {
            if !entry.file_type().is_file() {
                continue;
            }
            let path = entry.path();
            let matches = path
                .extension()
                .and_then(|ext| ext.to_str())
                .is_some_and(|ext| self.config.accepts_extension(ext));
            if !matches {
                continue;
            }

            let size = entry.metadata().map(|m| m.len()).unwrap_or(0);
            if size > self.config.max_file_size {
                tracing::debug!("[LOADER] skipping {} ({} bytes)", path.display(), size);
                skipped += 1;
                continue;
            }
            paths.push(path.to_path_buf());
        }

        paths.sort();
        (paths, skipped)
    }
}

/// The document identifier used for a file on disk.
pub fn document_uri(path: &Path) -> String {
    let path = path.to_string_lossy().replace('\\', "/");
    if path.starts_with('/') {
        format!("file://{path}")
    } else {
        format!("file:///{path}")
    }
}

fn read_and_extract(path: &Path) -> Result<(String, Vec<Symbol>), String> {
    let text = fs::read_to_string(path).map_err(|e| e.to_string())?;
    let uri = document_uri(path);
    let symbols = extract_symbols_from_text(&uri, &text);
    Ok((uri, symbols))
}
