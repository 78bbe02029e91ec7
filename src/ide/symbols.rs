//! Symbol listing for workspace and document views.

use crate::hir::{DocumentIndex, OutlineNode, Symbol, WorkspaceIndex};

use super::fuzzy;

/// A symbol matched by a search, with its fuzzy score.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SymbolMatch {
    pub symbol: Symbol,
    pub score: u32,
}

/// Get the outline of a document.
pub fn document_symbols(doc: &DocumentIndex) -> Vec<OutlineNode> {
    doc.outline().to_vec()
}

/// Search every symbol in the workspace index.
///
/// Results are sorted by score (best first), then by kind rank, then by
/// name, and truncated to `limit`.
pub fn search_workspace_symbols(
    index: &WorkspaceIndex,
    query: &str,
    limit: usize,
) -> Vec<SymbolMatch> {
    let mut results = score_all(index.all_symbols(), query);
    results.sort_by(|a, b| {
        b.score
            .cmp(&a.score)
            .then_with(|| a.symbol.kind.rank().cmp(&b.symbol.kind.rank()))
            .then_with(|| a.symbol.name.cmp(&b.symbol.name))
    });
    results.truncate(limit);
    results
}

/// Search the symbols of the given open documents.
///
/// Same scoring as [`search_workspace_symbols`], but ties keep the order in
/// which symbols were first seen: document order, then source order.
pub fn workspace_symbols<'a>(
    query: &str,
    open_documents: impl IntoIterator<Item = &'a DocumentIndex>,
    limit: usize,
) -> Vec<SymbolMatch> {
    let symbols = open_documents
        .into_iter()
        .flat_map(|doc| doc.symbols().iter());
    let mut results = score_all(symbols, query);
    results.sort_by(|a, b| b.score.cmp(&a.score));
    results.truncate(limit);
    results
}

fn score_all<'a>(symbols: impl Iterator<Item = &'a Symbol>, query: &str) -> Vec<SymbolMatch> {
    symbols
        .filter_map(|symbol| {
            let score = fuzzy::score(query, &symbol.name);
            (score > 0).then(|| SymbolMatch {
                symbol: symbol.clone(),
                score,
            })
        })
        .collect()
}
