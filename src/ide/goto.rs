//! Go-to-definition implementation.

use crate::base::Position;
use crate::hir::{DocumentIndex, Symbol, WorkspaceIndex};

use super::cursor::word_at;

/// Find declarations of the identifier at `position` in the same document.
///
/// All same-named symbols are returned, best first: by kind rank, then by
/// distance between the declaration and the cursor.
pub fn definition_at_position(doc: &DocumentIndex, position: Position) -> Vec<Symbol> {
    let Some(word) = word_at(doc, position) else {
        return Vec::new();
    };

    let mut candidates: Vec<(&Symbol, usize)> = doc
        .symbols_named(&word.text)
        .into_iter()
        .map(|symbol| (symbol, doc.symbol_offset(symbol).abs_diff(word.start)))
        .collect();
    candidates.sort_by_key(|(symbol, distance)| (symbol.kind.rank(), *distance));

    candidates
        .into_iter()
        .map(|(symbol, _)| symbol.clone())
        .collect()
}

/// Find declarations named `name` anywhere in the workspace, by kind rank.
pub fn workspace_definitions(index: &WorkspaceIndex, name: &str) -> Vec<Symbol> {
    let mut found: Vec<Symbol> = index
        .all_symbols()
        .filter(|symbol| symbol.name.as_ref() == name)
        .cloned()
        .collect();
    found.sort_by_key(|symbol| symbol.kind.rank());
    found
}
