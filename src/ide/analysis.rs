//! AnalysisHost and Analysis: the session state behind IDE requests.
//!
//! The `AnalysisHost` owns all mutable state (the open-document cache and
//! the workspace index) and hands out `Analysis` views for querying. There
//! is no global state; a server keeps one host per session.
//!
//! ## Usage
//!
//! ```
//! use lexis::base::Position;
//! use lexis::ide::AnalysisHost;
//!
//! let mut host = AnalysisHost::new();
//! host.open_document("file:///a.rs", 1, "struct Foo {}\nfn make() -> Foo { Foo {} }\n");
//!
//! let analysis = host.analysis();
//! let targets = analysis.goto_definition("file:///a.rs", Position::new(1, 14));
//! assert_eq!(targets[0].name.as_ref(), "Foo");
//! ```

use std::sync::Arc;

use crate::base::{Position, Range};
use crate::hir::{DocumentCache, DocumentIndex, OutlineNode, Snapshot, Symbol, WorkspaceIndex};
use crate::project::IndexConfig;

use super::{
    FoldingRange, PrepareRename, SemanticToken, SymbolMatch, TextEdit, cursor,
    definition_at_position, folding_ranges, prepare_rename, references_at_position, rename_symbol,
    search_workspace_symbols, semantic_tokens, workspace_definitions, workspace_symbols,
};

/// Owns all mutable state for the IDE layer.
///
/// Open documents go through `open_document`/`change_document` and are
/// released with `close_document`; other workspace files are ingested with
/// `index_text`.
#[derive(Debug, Default)]
pub struct AnalysisHost {
    documents: DocumentCache,
    workspace: WorkspaceIndex,
    config: IndexConfig,
}

impl AnalysisHost {
    /// Create a new empty AnalysisHost.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: IndexConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    pub fn config(&self) -> &IndexConfig {
        &self.config
    }

    /// Open a document, or fetch its cached index if `version` is unchanged.
    ///
    /// The workspace entry for the document is refreshed whenever the index
    /// is rebuilt.
    pub fn open_document(&mut self, uri: &str, version: i32, text: &str) -> Arc<DocumentIndex> {
        let previous = self.documents.peek(uri).cloned();
        let index = self.documents.get(uri, version, text);
        let rebuilt = previous.is_none_or(|prev| !Arc::ptr_eq(&prev, &index));
        if rebuilt || self.workspace.symbols_for(uri).is_none() {
            self.workspace.insert_symbols(uri, index.symbols().to_vec());
        }
        index
    }

    /// Apply a new version of an open document.
    pub fn change_document(&mut self, uri: &str, version: i32, text: &str) -> Arc<DocumentIndex> {
        self.open_document(uri, version, text)
    }

    /// Close a document: evict its cached index and drop its symbols from
    /// the workspace.
    pub fn close_document(&mut self, uri: &str) {
        self.documents.evict(uri);
        self.workspace.remove(uri);
    }

    /// Index a document that is not open (e.g. read from disk).
    pub fn index_text(&mut self, uri: &str, text: &str) {
        self.workspace.index(uri, text);
    }

    pub fn workspace(&self) -> &WorkspaceIndex {
        &self.workspace
    }

    pub fn workspace_mut(&mut self) -> &mut WorkspaceIndex {
        &mut self.workspace
    }

    pub fn documents(&self) -> &DocumentCache {
        &self.documents
    }

    pub fn export_snapshot(&self) -> Snapshot {
        self.workspace.export_snapshot()
    }

    /// Warm-start the workspace index. Returns the number of documents
    /// imported.
    pub fn import_snapshot(&mut self, snapshot: Snapshot) -> usize {
        self.workspace.import_snapshot(snapshot)
    }

    /// Get a read-only view for querying.
    pub fn analysis(&self) -> Analysis<'_> {
        Analysis {
            documents: &self.documents,
            workspace: &self.workspace,
            symbol_limit: self.config.workspace_symbol_limit,
        }
    }
}

/// A read-only view of the analysis state.
///
/// Document queries return empty results for documents that are not open.
pub struct Analysis<'a> {
    documents: &'a DocumentCache,
    workspace: &'a WorkspaceIndex,
    symbol_limit: usize,
}

impl<'a> Analysis<'a> {
    /// The cached index of an open document.
    pub fn document(&self, uri: &str) -> Option<&'a DocumentIndex> {
        self.documents.peek(uri).map(|doc| &**doc)
    }

    /// Get the outline of a document.
    pub fn document_symbols(&self, uri: &str) -> Vec<OutlineNode> {
        self.document(uri)
            .map(super::document_symbols)
            .unwrap_or_default()
    }

    /// Search for symbols across the workspace index.
    pub fn workspace_symbols(&self, query: &str) -> Vec<SymbolMatch> {
        search_workspace_symbols(self.workspace, query, self.symbol_limit)
    }

    /// Search for symbols across the open documents only.
    pub fn open_document_symbols(&self, query: &str) -> Vec<SymbolMatch> {
        workspace_symbols(
            query,
            self.documents.iter().map(|doc| &**doc),
            self.symbol_limit,
        )
    }

    /// Go to definition at a position.
    ///
    /// Declarations in the same document come first; when there are none,
    /// same-named declarations from the workspace index are returned.
    pub fn goto_definition(&self, uri: &str, position: Position) -> Vec<Symbol> {
        let Some(doc) = self.document(uri) else {
            return Vec::new();
        };
        let local = definition_at_position(doc, position);
        if !local.is_empty() {
            return local;
        }
        match cursor::word_at(doc, position) {
            Some(word) => workspace_definitions(self.workspace, &word.text),
            None => Vec::new(),
        }
    }

    /// Find all references to the identifier at a position.
    pub fn find_references(&self, uri: &str, position: Position) -> Vec<Range> {
        self.document(uri)
            .map(|doc| references_at_position(doc, position))
            .unwrap_or_default()
    }

    pub fn prepare_rename(&self, uri: &str, position: Position) -> Option<PrepareRename> {
        prepare_rename(self.document(uri)?, position)
    }

    pub fn rename(&self, uri: &str, position: Position, new_name: &str) -> Vec<TextEdit> {
        self.document(uri)
            .map(|doc| rename_symbol(doc, position, new_name))
            .unwrap_or_default()
    }

    /// Get semantic tokens for a document.
    pub fn semantic_tokens(&self, uri: &str) -> Vec<SemanticToken> {
        self.document(uri)
            .map(|doc| semantic_tokens(doc.text(), doc.scan()))
            .unwrap_or_default()
    }

    /// Get folding ranges for a document.
    pub fn folding_ranges(&self, uri: &str) -> Vec<FoldingRange> {
        self.document(uri)
            .map(|doc| folding_ranges(doc.text(), doc.scan()))
            .unwrap_or_default()
    }
}
