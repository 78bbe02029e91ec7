//! Indexing configuration.
//!
//! Loading a configuration file is the caller's job; this type only fixes
//! the shape and the defaults. Every field is optional when deserializing.

use serde::{Deserialize, Serialize};

/// File extensions indexed by default.
pub const DEFAULT_EXTENSIONS: &[&str] = &["rs", "c", "h", "cc", "cpp", "hpp", "cs", "java", "ts"];

/// Files larger than this are not indexed by default (1 MiB).
pub const DEFAULT_MAX_FILE_SIZE: u64 = 1024 * 1024;

/// Default cap on workspace symbol search results.
pub const DEFAULT_WORKSPACE_SYMBOL_LIMIT: usize = 256;

/// Settings for workspace indexing and search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct IndexConfig {
    /// Extensions (without the dot) of files to index.
    pub extensions: Vec<String>,
    /// Maximum file size in bytes.
    pub max_file_size: u64,
    /// Maximum number of workspace symbol results.
    pub workspace_symbol_limit: usize,
}

impl Default for IndexConfig {
    fn default() -> Self {
        Self {
            extensions: DEFAULT_EXTENSIONS.iter().map(|ext| ext.to_string()).collect(),
            max_file_size: DEFAULT_MAX_FILE_SIZE,
            workspace_symbol_limit: DEFAULT_WORKSPACE_SYMBOL_LIMIT,
        }
    }
}

impl IndexConfig {
    /// Whether a file with this extension should be indexed.
    /// Comparison ignores ASCII case and a leading dot.
    pub fn accepts_extension(&self, extension: &str) -> bool {
        let extension = extension.trim_start_matches('.');
        self.extensions
            .iter()
            .any(|ext| ext.trim_start_matches('.').eq_ignore_ascii_case(extension))
    }
}
