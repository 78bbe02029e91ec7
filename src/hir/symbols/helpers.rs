//! Char-level readers shared by the extractor and the token emitter.
//!
//! All readers only look at code positions; anything masked out (comments,
//! strings) is treated as trivia.

use crate::base::text_utils::{is_identifier_start, is_word_character};
use crate::scan::Mask;

/// Skip whitespace and masked-out chars starting at `pos`.
pub(crate) fn skip_trivia(chars: &[char], mask: &Mask, mut pos: usize) -> usize {
    while pos < chars.len() && (chars[pos].is_whitespace() || !mask.is_code(pos)) {
        pos += 1;
    }
    pos
}

/// End of the word starting at `pos` (which must be a word char).
pub(crate) fn word_end(chars: &[char], mut pos: usize) -> usize {
    while pos < chars.len() && is_word_character(chars[pos]) {
        pos += 1;
    }
    pos
}

/// Is `pos` the first char of an identifier (not the middle of a word)?
pub(crate) fn starts_identifier(chars: &[char], mask: &Mask, pos: usize) -> bool {
    mask.is_code(pos)
        && is_identifier_start(chars[pos])
        && (pos == 0 || !is_word_character(chars[pos - 1]))
}

/// Read a single identifier at `pos`. Returns its `[start, end)` span.
pub(crate) fn read_identifier(chars: &[char], mask: &Mask, pos: usize) -> Option<(usize, usize)> {
    if pos >= chars.len() || !mask.is_code(pos) || !is_identifier_start(chars[pos]) {
        return None;
    }
    Some((pos, word_end(chars, pos)))
}

/// Read identifiers joined by `::` or `.` at `pos`.
pub(crate) fn read_qualified(chars: &[char], mask: &Mask, pos: usize) -> Option<(usize, usize)> {
    let (start, mut end) = read_identifier(chars, mask, pos)?;
    loop {
        let sep = match (chars.get(end), chars.get(end + 1)) {
            (Some(':'), Some(':')) => 2,
            (Some('.'), _) => 1,
            _ => break,
        };
        match read_identifier(chars, mask, end + sep) {
            Some((_, next_end)) => end = next_end,
            None => break,
        }
    }
    Some((start, end))
}

/// Skip a balanced `open ... close` group starting at `pos` (which must hold
/// `open`). Returns the offset after the matching `close`, or the end of
/// text when it never closes.
pub(crate) fn skip_balanced(
    chars: &[char],
    mask: &Mask,
    pos: usize,
    open: char,
    close: char,
) -> usize {
    let mut depth = 0usize;
    let mut i = pos;
    while i < chars.len() {
        if mask.is_code(i) {
            if chars[i] == open {
                depth += 1;
            } else if chars[i] == close {
                depth = depth.saturating_sub(1);
                if depth == 0 {
                    return i + 1;
                }
            }
        }
        i += 1;
    }
    chars.len()
}

/// If `pos` starts an attribute (`#[...]` or `#![...]`), return the offset
/// after it.
pub(crate) fn skip_attribute(chars: &[char], mask: &Mask, pos: usize) -> Option<usize> {
    if chars.get(pos) != Some(&'#') {
        return None;
    }
    let bracket = match chars.get(pos + 1) {
        Some('[') => pos + 1,
        Some('!') if chars.get(pos + 2) == Some(&'[') => pos + 2,
        _ => return None,
    };
    Some(skip_balanced(chars, mask, bracket, '[', ']'))
}

/// Collect a `[start, end)` char span into a `String`.
pub(crate) fn collect(chars: &[char], start: usize, end: usize) -> String {
    chars[start..end].iter().collect()
}
