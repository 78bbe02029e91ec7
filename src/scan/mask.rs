//! Masking scanner.
//!
//! A single left-to-right walk that classifies every char as code or
//! non-code (comment/string content) and records the spans it skipped.
//! Recognized, in priority order at each position:
//!
//! - line comments: `//`, or `#` not opening an attribute (`#[`, `#![`)
//! - block comments: `/* ... */`, non-nesting
//! - raw strings: `r#*"..."#*` (optionally `b`-prefixed)
//! - quoted strings: `"..."` and `'...'` with `\` escapes
//!
//! Unterminated constructs run to the end of the text.

use crate::base::text_utils::{is_identifier_start, is_word_character};

/// A `[start, end)` range of char offsets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.end <= self.start
    }

    /// Check whether two spans share at least one offset.
    pub fn overlaps(&self, other: &Span) -> bool {
        self.start < other.end && other.start < self.end
    }
}

/// Per-char code/non-code classification. Same length as the scanned text.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Mask {
    bits: Vec<bool>,
}

impl Mask {
    /// `true` if the char at `offset` is code. Out-of-range offsets are not code.
    #[inline]
    pub fn is_code(&self, offset: usize) -> bool {
        self.bits.get(offset).copied().unwrap_or(false)
    }

    pub fn len(&self) -> usize {
        self.bits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    pub fn as_slice(&self) -> &[bool] {
        &self.bits
    }

    fn clear(&mut self, span: Span) {
        for bit in &mut self.bits[span.start..span.end] {
            *bit = false;
        }
    }
}

/// Output of [`scan`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ScanResult {
    pub mask: Mask,
    /// String and raw-string spans, in source order.
    pub strings: Vec<Span>,
    /// Line and block comment spans, in source order.
    pub comments: Vec<Span>,
}

/// Scan `text` and classify every char.
pub fn scan(text: &str) -> ScanResult {
    let chars: Vec<char> = text.chars().collect();
    scan_chars(&chars)
}

/// Scan an already collected char buffer.
pub fn scan_chars(chars: &[char]) -> ScanResult {
    let mut result = ScanResult {
        mask: Mask {
            bits: vec![true; chars.len()],
        },
        strings: Vec::new(),
        comments: Vec::new(),
    };

    let mut pos = 0;
    while pos < chars.len() {
        if let Some(end) = line_comment(chars, pos) {
            push_span(&mut result.comments, &mut result.mask, pos, end);
            pos = end;
        } else if let Some(end) = block_comment(chars, pos) {
            push_span(&mut result.comments, &mut result.mask, pos, end);
            pos = end;
        } else if let Some(end) = raw_string(chars, pos) {
            push_span(&mut result.strings, &mut result.mask, pos, end);
            pos = end;
        } else if let Some(end) = quoted_string(chars, pos) {
            push_span(&mut result.strings, &mut result.mask, pos, end);
            pos = end;
        } else {
            pos += 1;
        }
    }

    result
}

fn push_span(spans: &mut Vec<Span>, mask: &mut Mask, start: usize, end: usize) {
    let span = Span::new(start, end);
    mask.clear(span);
    spans.push(span);
}

fn line_comment(chars: &[char], pos: usize) -> Option<usize> {
    let opens = match chars[pos] {
        '/' => chars.get(pos + 1) == Some(&'/'),
        '#' => !opens_attribute(chars, pos) && !follows_word(chars, pos),
        _ => false,
    };
    if !opens {
        return None;
    }
    let end = chars[pos..]
        .iter()
        .position(|&c| c == '\n')
        .map(|n| pos + n)
        .unwrap_or(chars.len());
    Some(end)
}

/// `#[` or `#![` starts an attribute, which is code.
fn opens_attribute(chars: &[char], pos: usize) -> bool {
    match chars.get(pos + 1) {
        Some('[') => true,
        Some('!') => chars.get(pos + 2) == Some(&'['),
        _ => false,
    }
}

/// `#` glued to a preceding identifier (`r#type`) is not a comment.
fn follows_word(chars: &[char], pos: usize) -> bool {
    pos > 0 && is_word_character(chars[pos - 1])
}

fn block_comment(chars: &[char], pos: usize) -> Option<usize> {
    if chars[pos] != '/' || chars.get(pos + 1) != Some(&'*') {
        return None;
    }
    let mut i = pos + 2;
    while i + 1 < chars.len() {
        if chars[i] == '*' && chars[i + 1] == '/' {
            return Some(i + 2);
        }
        i += 1;
    }
    Some(chars.len())
}

fn raw_string(chars: &[char], pos: usize) -> Option<usize> {
    let mut i = pos;
    if chars[i] == 'b' {
        i += 1;
    }
    if chars.get(i) != Some(&'r') || follows_word(chars, pos) {
        return None;
    }
    i += 1;

    let mut hashes = 0;
    while chars.get(i) == Some(&'#') {
        hashes += 1;
        i += 1;
    }
    if chars.get(i) != Some(&'"') {
        return None;
    }
    i += 1;

    while i < chars.len() {
        if chars[i] == '"' {
            let closing = chars[i + 1..].iter().take(hashes).filter(|&&c| c == '#').count();
            if closing == hashes {
                return Some(i + 1 + hashes);
            }
        }
        i += 1;
    }
    Some(chars.len())
}

fn quoted_string(chars: &[char], pos: usize) -> Option<usize> {
    let quote = chars[pos];
    if quote != '"' && (quote != '\'' || is_lifetime(chars, pos)) {
        return None;
    }

    let mut i = pos + 1;
    while i < chars.len() {
        match chars[i] {
            '\\' => i += 2,
            c if c == quote => return Some(i + 1),
            _ => i += 1,
        }
    }
    Some(chars.len())
}

/// `'a` in `&'a str` or `'outer: loop` is code; `'a'`, `'hello'` and
/// `'http://x'` are literals.
///
/// After the identifier run, a literal needs a closing `'` later on the same
/// line. A `'` directly followed by an identifier char opens another
/// lifetime rather than closing a literal.
fn is_lifetime(chars: &[char], pos: usize) -> bool {
    let Some(&first) = chars.get(pos + 1) else {
        return false;
    };
    if !is_identifier_start(first) {
        return false;
    }

    let mut i = pos + 2;
    while chars.get(i).is_some_and(|&c| is_word_character(c)) {
        i += 1;
    }
    if chars.get(i) == Some(&'\'') {
        return false;
    }
    !closes_on_line(chars, i)
}

/// Does a `'` that ends a literal appear at or after `from` on this line?
fn closes_on_line(chars: &[char], from: usize) -> bool {
    let mut i = from;
    while i < chars.len() {
        match chars[i] {
            '\n' => return false,
            '\\' => i += 2,
            '\'' => return !chars.get(i + 1).is_some_and(|&c| is_identifier_start(c)),
            _ => i += 1,
        }
    }
    false
}
