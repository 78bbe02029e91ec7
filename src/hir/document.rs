//! Per-document index and the version-keyed cache in front of it.
//!
//! A [`DocumentIndex`] bundles everything derived from one version of a
//! document: its mask, the flat symbol list, the name multimap and the
//! outline tree. The [`DocumentCache`] hands out shared indexes keyed by
//! document identifier and version; any version change rebuilds the whole
//! entry.

use std::sync::Arc;

use indexmap::IndexMap;
use rustc_hash::FxHashMap;

use crate::base::{LineIndex, Position};
use crate::scan::{Mask, ScanResult, scan_chars};

use super::symbols::{Symbol, extract_from_chars};

/// A node of the document outline.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OutlineNode {
    pub symbol: Symbol,
    pub children: Vec<OutlineNode>,
}

/// Everything derived from one version of a document.
#[derive(Debug)]
pub struct DocumentIndex {
    document_id: Arc<str>,
    version: i32,
    text: Arc<str>,
    chars: Vec<char>,
    scan: ScanResult,
    line_index: LineIndex,
    /// Symbols in extraction (source) order.
    flat: Vec<Symbol>,
    /// Name -> indices into `flat`.
    by_name: FxHashMap<Arc<str>, Vec<usize>>,
    outline: Vec<OutlineNode>,
}

impl DocumentIndex {
    /// Scan, extract and index `text`.
    pub fn build(document_id: &str, version: i32, text: &str) -> Self {
        let document_id: Arc<str> = Arc::from(document_id);
        let chars: Vec<char> = text.chars().collect();
        let scan = scan_chars(&chars);
        let line_index = LineIndex::from_chars(&chars);
        let flat = extract_from_chars(document_id.clone(), &chars, &scan.mask, &line_index);

        let mut by_name: FxHashMap<Arc<str>, Vec<usize>> = FxHashMap::default();
        for (idx, symbol) in flat.iter().enumerate() {
            by_name.entry(symbol.name.clone()).or_default().push(idx);
        }

        let outline = build_outline(&flat, &by_name);

        Self {
            document_id,
            version,
            text: Arc::from(text),
            chars,
            scan,
            line_index,
            flat,
            by_name,
            outline,
        }
    }

    pub fn document_id(&self) -> &Arc<str> {
        &self.document_id
    }

    pub fn version(&self) -> i32 {
        self.version
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn chars(&self) -> &[char] {
        &self.chars
    }

    pub fn scan(&self) -> &ScanResult {
        &self.scan
    }

    pub fn mask(&self) -> &Mask {
        &self.scan.mask
    }

    pub fn line_index(&self) -> &LineIndex {
        &self.line_index
    }

    /// All symbols, in source order.
    pub fn symbols(&self) -> &[Symbol] {
        &self.flat
    }

    /// The hierarchical outline.
    pub fn outline(&self) -> &[OutlineNode] {
        &self.outline
    }

    /// All symbols with exactly this name.
    pub fn symbols_named(&self, name: &str) -> Vec<&Symbol> {
        self.by_name
            .get(name)
            .map(|indices| indices.iter().map(|&idx| &self.flat[idx]).collect())
            .unwrap_or_default()
    }

    /// Char offset of a position, if the line exists.
    pub fn offset_at(&self, position: Position) -> Option<usize> {
        self.line_index.offset(position)
    }

    /// Char offset where a symbol's name starts.
    pub fn symbol_offset(&self, symbol: &Symbol) -> usize {
        self.line_index.offset(symbol.start()).unwrap_or(self.chars.len())
    }
}

/// Build the outline from the extractor's own containment.
///
/// Each symbol's parent is the nearest preceding symbol named by its
/// `container_name` whose range still encloses it.
fn build_outline(flat: &[Symbol], by_name: &FxHashMap<Arc<str>, Vec<usize>>) -> Vec<OutlineNode> {
    let mut order: Vec<usize> = (0..flat.len()).collect();
    order.sort_by_key(|&idx| flat[idx].start());

    let mut children: Vec<Vec<usize>> = vec![Vec::new(); flat.len()];
    let mut roots = Vec::new();

    for &idx in &order {
        let symbol = &flat[idx];
        let parent = symbol.container_name.as_ref().and_then(|container| {
            by_name
                .get(container)?
                .iter()
                .copied()
                .filter(|&p| p != idx)
                .filter(|&p| flat[p].start() < symbol.start() && flat[p].encloses(symbol.start()))
                .max_by_key(|&p| flat[p].start())
        });
        match parent {
            Some(p) => children[p].push(idx),
            None => roots.push(idx),
        }
    }

    fn node(idx: usize, flat: &[Symbol], children: &[Vec<usize>]) -> OutlineNode {
        OutlineNode {
            symbol: flat[idx].clone(),
            children: children[idx]
                .iter()
                .map(|&child| node(child, flat, children))
                .collect(),
        }
    }

    roots
        .into_iter()
        .map(|idx| node(idx, flat, &children))
        .collect()
}

/// Version-keyed cache of document indexes.
///
/// Entries keep first-seen order, which callers rely on to break ties
/// deterministically.
#[derive(Debug, Default)]
pub struct DocumentCache {
    entries: IndexMap<Arc<str>, Arc<DocumentIndex>>,
}

impl DocumentCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the index for `(document_id, version)`, building it on a miss.
    ///
    /// The version is the sole cache key: a hit returns the cached index
    /// even if `text` differs from what it was built from.
    pub fn get(&mut self, document_id: &str, version: i32, text: &str) -> Arc<DocumentIndex> {
        if let Some(entry) = self.entries.get(document_id) {
            if entry.version == version {
                tracing::trace!("[DOC_CACHE] hit {} v{}", document_id, version);
                return entry.clone();
            }
        }

        tracing::debug!("[DOC_CACHE] rebuilding {} v{}", document_id, version);
        let index = Arc::new(DocumentIndex::build(document_id, version, text));
        self.entries.insert(index.document_id.clone(), index.clone());
        index
    }

    /// The cached index for a document, whatever its version.
    pub fn peek(&self, document_id: &str) -> Option<&Arc<DocumentIndex>> {
        self.entries.get(document_id)
    }

    /// Drop a document (on close). Returns whether it was cached.
    pub fn evict(&mut self, document_id: &str) -> bool {
        let removed = self.entries.shift_remove(document_id).is_some();
        if removed {
            tracing::debug!("[DOC_CACHE] evicted {}", document_id);
        }
        removed
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Cached indexes in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = &Arc<DocumentIndex>> {
        self.entries.values()
    }
}
