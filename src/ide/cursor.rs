//! Locating the identifier under the cursor.

use crate::base::Position;
use crate::base::text_utils::{is_identifier_start, word_touching};
use crate::hir::DocumentIndex;

/// The identifier touching a cursor position.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct WordAt {
    pub start: usize,
    pub end: usize,
    pub text: String,
}

impl WordAt {
    /// Whether every char of the word is code (not comment or string).
    pub fn is_code(&self, doc: &DocumentIndex) -> bool {
        (self.start..self.end).all(|offset| doc.mask().is_code(offset))
    }
}

/// The maximal run of identifier chars touching `position`.
///
/// Runs that cannot start an identifier (`42`, `9abc`) are not words.
pub(crate) fn word_at(doc: &DocumentIndex, position: Position) -> Option<WordAt> {
    let offset = doc.offset_at(position)?;
    let chars = doc.chars();
    let (start, end) = word_touching(chars, offset)?;
    if !is_identifier_start(chars[start]) {
        return None;
    }
    Some(WordAt {
        start,
        end,
        text: chars[start..end].iter().collect(),
    })
}
