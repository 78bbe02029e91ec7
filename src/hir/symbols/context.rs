//! Extraction context: tracks pending bodies, open braces and the active
//! container stack while the extractor walks a document.

use std::sync::Arc;

use crate::base::LineIndex;

use super::types::{Symbol, SymbolKind};

/// A declaration awaiting confirmation of whether it owns a `{ ... }` block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) struct PendingBody {
    pub symbol_index: usize,
    pub allow_bodyless: bool,
    pub start_offset: usize,
    /// Offset of the `{` found by the body probe.
    pub body_offset: Option<usize>,
    /// The probe stopped at a `;` the declaration cannot end with. Such
    /// entries stay pending but are never matched by the fallback.
    pub unresolved: bool,
}

/// Extraction state passed through the extractor.
pub(super) struct ExtractionContext<'a> {
    pub document_id: Arc<str>,
    pub line_index: &'a LineIndex,
    pub symbols: Vec<Symbol>,
    pending: Vec<PendingBody>,
    /// One frame per open `{`; the frame records the symbol owning it.
    braces: Vec<Option<usize>>,
    /// Symbols whose bodies are currently open, innermost last.
    active: Vec<usize>,
}

impl<'a> ExtractionContext<'a> {
    pub fn new(document_id: Arc<str>, line_index: &'a LineIndex) -> Self {
        Self {
            document_id,
            line_index,
            symbols: Vec::new(),
            pending: Vec::new(),
            braces: Vec::new(),
            active: Vec::new(),
        }
    }

    /// The innermost open container.
    pub fn current_container(&self) -> Option<&Symbol> {
        self.active.last().map(|&idx| &self.symbols[idx])
    }

    /// Record a symbol whose name starts at `name_offset`.
    pub fn push_symbol(&mut self, name: String, kind: SymbolKind, name_offset: usize) -> usize {
        let start = self.line_index.position(name_offset);
        let symbol = Symbol {
            name: Arc::from(name),
            kind,
            document_id: self.document_id.clone(),
            start_line: start.line,
            start_char: start.character,
            end_line: None,
            end_char: None,
            container_name: self.current_container().map(|c| c.name.clone()),
        };
        self.symbols.push(symbol);
        self.symbols.len() - 1
    }

    pub fn push_pending(&mut self, pending: PendingBody) {
        self.pending.push(pending);
    }

    /// Handle a code `{` at `offset`.
    pub fn open_brace(&mut self, offset: usize) {
        let matched = self
            .pending
            .iter()
            .rposition(|p| p.body_offset == Some(offset))
            .or_else(|| {
                self.pending
                    .iter()
                    .rposition(|p| p.body_offset.is_none() && !p.unresolved)
            });

        let owner = matched.map(|i| self.pending.remove(i).symbol_index);
        if let Some(idx) = owner {
            self.active.push(idx);
        }
        self.braces.push(owner);
    }

    /// Handle a code `}` at `offset`. Unmatched closers are ignored.
    pub fn close_brace(&mut self, offset: usize) {
        let Some(frame) = self.braces.pop() else {
            return;
        };
        let Some(idx) = frame else {
            return;
        };

        let end = self.line_index.position(offset + 1);
        let symbol = &mut self.symbols[idx];
        symbol.end_line = Some(end.line);
        symbol.end_char = Some(end.character);

        if let Some(pos) = self.active.iter().rposition(|&a| a == idx) {
            self.active.truncate(pos);
        }
    }

    /// Handle a code `;` at `offset`: the most recent bodyless-capable
    /// declaration still waiting for its body is complete without one.
    pub fn semicolon(&mut self, offset: usize) {
        if let Some(i) = self.pending.iter().rposition(|p| {
            p.allow_bodyless && p.body_offset.is_none() && p.start_offset < offset
        }) {
            self.pending.remove(i);
        }
    }

    /// Number of declarations still waiting on a body.
    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }
}
