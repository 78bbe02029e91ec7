//! Text manipulation utilities for working with source code.

use super::keywords::is_reserved;

/// Check if a character is considered part of a word (identifier).
///
/// Uses Unicode Standard Annex #31 rules for identifier characters.
#[inline]
pub fn is_word_character(c: char) -> bool {
    unicode_ident::is_xid_continue(c)
}

/// Check if a character may begin an identifier.
#[inline]
pub fn is_identifier_start(c: char) -> bool {
    c == '_' || unicode_ident::is_xid_start(c)
}

/// Find the boundaries of a word at the given position.
///
/// Returns `Some((start, end))` where `start` is the character index of the word start
/// and `end` is the character index after the last word character.
/// Returns `None` if there is no word at the position.
pub fn find_word_boundaries(chars: &[char], position: usize) -> Option<(usize, usize)> {
    if position >= chars.len() || !is_word_character(chars[position]) {
        return None;
    }

    let mut start = position;
    while start > 0 && is_word_character(chars[start - 1]) {
        start -= 1;
    }

    let mut end = position;
    while end < chars.len() && is_word_character(chars[end]) {
        end += 1;
    }

    Some((start, end))
}

/// Find the word touching `position`: the word under the cursor, or the word
/// ending exactly at the cursor when the cursor sits just after it.
pub fn word_touching(chars: &[char], position: usize) -> Option<(usize, usize)> {
    find_word_boundaries(chars, position)
        .or_else(|| position.checked_sub(1).and_then(|p| find_word_boundaries(chars, p)))
}

/// Check that the run `chars[start..end]` is a whole word: the characters
/// immediately before and after it are not word characters.
#[inline]
pub fn is_whole_word(chars: &[char], start: usize, end: usize) -> bool {
    let before_ok = start == 0 || !is_word_character(chars[start - 1]);
    let after_ok = end >= chars.len() || !is_word_character(chars[end]);
    before_ok && after_ok
}

/// Check that `name` is a syntactically legal, non-reserved identifier.
pub fn is_valid_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    if !is_identifier_start(first) || !chars.all(is_word_character) {
        return false;
    }
    name != "_" && !is_reserved(name)
}
