//! Workspace-wide symbol index and its persisted snapshot.
//!
//! The index maps a document identifier to the symbols extracted from it.
//! It is owned by the analysis session and mutated only through explicit
//! index/update/remove calls. A [`Snapshot`] dump can warm-start a new
//! session; malformed snapshots are ignored, never reported as errors.

use std::sync::Arc;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::symbols::{Symbol, extract_symbols_from_text};

/// The only snapshot format version this crate reads and writes.
pub const SNAPSHOT_VERSION: u32 = 1;

/// One document's symbols inside a snapshot.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SnapshotEntry {
    pub uri: Arc<str>,
    pub symbols: Vec<Symbol>,
}

/// Serializable dump of a [`WorkspaceIndex`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub version: u32,
    pub entries: Vec<SnapshotEntry>,
}

/// Map from document identifier to that document's symbols.
#[derive(Clone, Debug, Default)]
pub struct WorkspaceIndex {
    documents: IndexMap<Arc<str>, Vec<Symbol>>,
}

impl WorkspaceIndex {
    /// Create a new empty index.
    pub fn new() -> Self {
        Self::default()
    }

    /// Extract symbols from `text` and store them for `document_id`,
    /// replacing any previous entry.
    pub fn index(&mut self, document_id: &str, text: &str) {
        let symbols = extract_symbols_from_text(document_id, text);
        self.insert_symbols(document_id, symbols);
    }

    /// Same as [`index`](Self::index).
    pub fn update(&mut self, document_id: &str, text: &str) {
        self.index(document_id, text);
    }

    /// Store already extracted symbols for `document_id`.
    pub fn insert_symbols(&mut self, document_id: &str, symbols: Vec<Symbol>) {
        tracing::trace!("[WORKSPACE] {} -> {} symbol(s)", document_id, symbols.len());
        self.documents.insert(Arc::from(document_id), symbols);
    }

    /// Remove a document entirely. Returns whether it was indexed.
    pub fn remove(&mut self, document_id: &str) -> bool {
        self.documents.shift_remove(document_id).is_some()
    }

    pub fn clear(&mut self) {
        self.documents.clear();
    }

    /// All documents and their symbols, in insertion order.
    pub fn all(&self) -> &IndexMap<Arc<str>, Vec<Symbol>> {
        &self.documents
    }

    /// Symbols for one document.
    pub fn symbols_for(&self, document_id: &str) -> Option<&[Symbol]> {
        self.documents.get(document_id).map(Vec::as_slice)
    }

    /// Every indexed symbol.
    pub fn all_symbols(&self) -> impl Iterator<Item = &Symbol> {
        self.documents.values().flatten()
    }

    /// Number of indexed documents.
    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    /// Dump the index.
    pub fn export_snapshot(&self) -> Snapshot {
        Snapshot {
            version: SNAPSHOT_VERSION,
            entries: self
                .documents
                .iter()
                .map(|(uri, symbols)| SnapshotEntry {
                    uri: uri.clone(),
                    symbols: symbols.clone(),
                })
                .collect(),
        }
    }

    /// Load a snapshot, replacing entries for the documents it contains.
    ///
    /// Returns the number of documents imported; a snapshot with any other
    /// version is ignored and yields 0.
    pub fn import_snapshot(&mut self, snapshot: Snapshot) -> usize {
        if snapshot.version != SNAPSHOT_VERSION {
            tracing::debug!(
                "[WORKSPACE] ignoring snapshot with version {}",
                snapshot.version
            );
            return 0;
        }

        let count = snapshot.entries.len();
        for entry in snapshot.entries {
            self.documents.insert(entry.uri, entry.symbols);
        }
        count
    }

    /// Load an untyped snapshot payload.
    ///
    /// The payload must be an object with `version == 1` and an array
    /// `entries`; anything else is treated as "no snapshot". Entries that do
    /// not deserialize are skipped one by one.
    pub fn import_snapshot_value(&mut self, payload: &Value) -> usize {
        let version = payload.get("version").and_then(Value::as_u64);
        let entries = payload.get("entries").and_then(Value::as_array);

        let (Some(version), Some(entries)) = (version, entries) else {
            tracing::debug!("[WORKSPACE] ignoring malformed snapshot payload");
            return 0;
        };
        if version != u64::from(SNAPSHOT_VERSION) {
            tracing::debug!("[WORKSPACE] ignoring snapshot with version {}", version);
            return 0;
        }

        let entries: Vec<SnapshotEntry> = entries
            .iter()
            .filter_map(|entry| match SnapshotEntry::deserialize(entry) {
                Ok(entry) => Some(entry),
                Err(err) => {
                    tracing::debug!("[WORKSPACE] skipping snapshot entry: {}", err);
                    None
                }
            })
            .collect();

        self.import_snapshot(Snapshot {
            version: SNAPSHOT_VERSION,
            entries,
        })
    }
}
