//! Find-references and rename.
//!
//! Both work on text alone: the identifier under the cursor is matched as a
//! whole word at every code position of the document. Comments and strings
//! never match.

use crate::base::text_utils::{is_valid_identifier, is_whole_word};
use crate::base::{Position, Range};
use crate::hir::DocumentIndex;
use crate::scan::Mask;

use super::cursor::word_at;

/// A single text replacement.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TextEdit {
    pub range: Range,
    pub new_text: String,
}

/// Result of a successful rename precondition check.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PrepareRename {
    /// Exact range of the identifier under the cursor.
    pub range: Range,
    /// The identifier's current text.
    pub placeholder: String,
}

/// Ranges of every code occurrence of the identifier at `position`.
pub fn references_at_position(doc: &DocumentIndex, position: Position) -> Vec<Range> {
    let Some(word) = word_at(doc, position) else {
        return Vec::new();
    };
    if !is_valid_identifier(&word.text) {
        return Vec::new();
    }

    let needle: Vec<char> = word.text.chars().collect();
    find_occurrences(doc.chars(), doc.mask(), &needle)
        .into_iter()
        .map(|start| doc.line_index().range(start, start + needle.len()))
        .collect()
}

/// Edits renaming every reference of the identifier at `position`.
///
/// Returns no edits when the cursor is not on a renamable identifier or
/// `new_name` is not a legal identifier.
pub fn rename_symbol(doc: &DocumentIndex, position: Position, new_name: &str) -> Vec<TextEdit> {
    if !is_valid_identifier(new_name) {
        tracing::debug!("[RENAME] rejected new name {:?}", new_name);
        return Vec::new();
    }
    if prepare_rename(doc, position).is_none() {
        return Vec::new();
    }

    references_at_position(doc, position)
        .into_iter()
        .map(|range| TextEdit {
            range,
            new_text: new_name.to_string(),
        })
        .collect()
}

/// Check that the cursor is on a renamable identifier: a legal,
/// non-reserved identifier in code.
pub fn prepare_rename(doc: &DocumentIndex, position: Position) -> Option<PrepareRename> {
    let word = word_at(doc, position)?;
    if !is_valid_identifier(&word.text) || !word.is_code(doc) {
        return None;
    }
    Some(PrepareRename {
        range: doc.line_index().range(word.start, word.end),
        placeholder: word.text,
    })
}

/// Start offsets of whole-word, code-only matches of `needle`.
fn find_occurrences(chars: &[char], mask: &Mask, needle: &[char]) -> Vec<usize> {
    let Some(&first) = needle.first() else {
        return Vec::new();
    };
    if needle.len() > chars.len() {
        return Vec::new();
    }

    (0..=chars.len() - needle.len())
        .filter(|&start| chars[start] == first)
        .filter(|&start| chars[start..start + needle.len()] == *needle)
        .filter(|&start| is_whole_word(chars, start, start + needle.len()))
        .filter(|&start| (start..start + needle.len()).all(|offset| mask.is_code(offset)))
        .collect()
}
