//! Semantic tokens: syntax highlighting from the masked text.
//!
//! Spans are collected in a fixed priority order and a span that overlaps
//! an already accepted one is dropped, so earlier categories win:
//!
//! 1. comments and strings (from the scanner)
//! 2. numeric literals
//! 3. reserved keywords
//! 4. declaration names (same keyword table as the symbol extractor)
//! 5. function parameter names
//! 6. struct field names
//!
//! Accepted spans are then split into per-line tokens.

use std::collections::BTreeMap;

use crate::base::LineIndex;
use crate::base::keywords::{VISIBILITY, is_reserved};
use crate::base::text_utils::is_word_character;
use crate::hir::helpers::{
    collect, read_identifier, skip_attribute, skip_balanced, skip_trivia, starts_identifier,
    word_end,
};
use crate::hir::{SymbolKind, declaration_rule, read_name};
use crate::scan::{Mask, ScanResult};

/// Token type for semantic highlighting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u32)]
pub enum TokenType {
    Namespace = 0,
    Type = 1,
    Struct = 2,
    Enum = 3,
    Interface = 4,
    Function = 5,
    Method = 6,
    Parameter = 7,
    Property = 8,
    Variable = 9,
    Keyword = 10,
    Comment = 11,
    String = 12,
    Number = 13,
}

impl TokenType {
    /// Token type names, indexed by [`to_lsp_index`](Self::to_lsp_index).
    pub const LEGEND: &'static [&'static str] = &[
        "namespace",
        "type",
        "struct",
        "enum",
        "interface",
        "function",
        "method",
        "parameter",
        "property",
        "variable",
        "keyword",
        "comment",
        "string",
        "number",
    ];

    /// Convert to LSP token type index.
    pub fn to_lsp_index(self) -> u32 {
        self as u32
    }

    pub fn as_str(self) -> &'static str {
        Self::LEGEND[self as usize]
    }
}

impl From<SymbolKind> for TokenType {
    fn from(kind: SymbolKind) -> Self {
        match kind {
            SymbolKind::Module | SymbolKind::Namespace => TokenType::Namespace,
            SymbolKind::Struct => TokenType::Struct,
            SymbolKind::Enum => TokenType::Enum,
            SymbolKind::Interface => TokenType::Interface,
            SymbolKind::Class | SymbolKind::TypeParameter => TokenType::Type,
            SymbolKind::Function | SymbolKind::Constructor => TokenType::Function,
            SymbolKind::Method => TokenType::Method,
            SymbolKind::Property | SymbolKind::Field => TokenType::Property,
            SymbolKind::Variable | SymbolKind::Constant => TokenType::Variable,
        }
    }
}

/// A classified `[start, end)` char span.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TokenSpan {
    pub start: usize,
    pub end: usize,
    pub token_type: TokenType,
}

/// A semantic token for syntax highlighting. Never crosses a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SemanticToken {
    /// Line number (0-indexed)
    pub line: u32,
    /// Column number (0-indexed)
    pub col: u32,
    /// Length of the token in characters
    pub length: u32,
    /// The token type
    pub token_type: TokenType,
}

/// Non-overlapping spans keyed by start offset.
#[derive(Default)]
struct SpanSet {
    spans: BTreeMap<usize, (usize, TokenType)>,
}

impl SpanSet {
    /// Insert unless empty or overlapping an accepted span.
    fn insert(&mut self, start: usize, end: usize, token_type: TokenType) -> bool {
        if start >= end {
            return false;
        }
        if let Some((_, &(prev_end, _))) = self.spans.range(..=start).next_back() {
            if prev_end > start {
                return false;
            }
        }
        if let Some((&next_start, _)) = self.spans.range(start..).next() {
            if next_start < end {
                return false;
            }
        }
        self.spans.insert(start, (end, token_type));
        true
    }

    fn into_sorted(self) -> Vec<TokenSpan> {
        self.spans
            .into_iter()
            .map(|(start, (end, token_type))| TokenSpan {
                start,
                end,
                token_type,
            })
            .collect()
    }
}

/// A declaration found by the emitter: its name span and kind.
struct Declaration {
    start: usize,
    end: usize,
    kind: SymbolKind,
}

/// Collect classified spans, sorted by start offset.
pub fn semantic_spans(text: &str, scan: &ScanResult) -> Vec<TokenSpan> {
    let chars: Vec<char> = text.chars().collect();
    collect_spans(&chars, scan)
}

/// Get semantic tokens for a document, split per line and sorted by position.
pub fn semantic_tokens(text: &str, scan: &ScanResult) -> Vec<SemanticToken> {
    let chars: Vec<char> = text.chars().collect();
    let lines = LineIndex::from_chars(&chars);

    let mut tokens = Vec::new();
    for span in collect_spans(&chars, scan) {
        split_by_line(&lines, span, &mut tokens);
    }
    tokens
}

/// Delta-encode tokens as `[deltaLine, deltaStart, length, type, modifiers]`
/// quintuples.
pub fn encode_relative(tokens: &[SemanticToken]) -> Vec<u32> {
    let mut data = Vec::with_capacity(tokens.len() * 5);
    let (mut prev_line, mut prev_col) = (0u32, 0u32);

    for token in tokens {
        let delta_line = token.line.saturating_sub(prev_line);
        let delta_col = if delta_line == 0 {
            token.col.saturating_sub(prev_col)
        } else {
            token.col
        };
        data.extend([
            delta_line,
            delta_col,
            token.length,
            token.token_type.to_lsp_index(),
            0,
        ]);
        prev_line = token.line;
        prev_col = token.col;
    }

    data
}

fn collect_spans(chars: &[char], scan: &ScanResult) -> Vec<TokenSpan> {
    let mask = &scan.mask;
    let mut set = SpanSet::default();

    for span in &scan.comments {
        set.insert(span.start, span.end, TokenType::Comment);
    }
    for span in &scan.strings {
        set.insert(span.start, span.end, TokenType::String);
    }
    for (start, end) in numbers(chars, mask) {
        set.insert(start, end, TokenType::Number);
    }
    for (start, end) in keywords(chars, mask) {
        set.insert(start, end, TokenType::Keyword);
    }

    let declarations = declarations(chars, mask);
    for decl in &declarations {
        set.insert(decl.start, decl.end, TokenType::from(decl.kind));
    }
    for decl in declarations.iter().filter(|d| d.kind == SymbolKind::Function) {
        for (start, end) in parameters(chars, mask, decl.end) {
            set.insert(start, end, TokenType::Parameter);
        }
    }
    for decl in declarations.iter().filter(|d| d.kind == SymbolKind::Struct) {
        for (start, end) in fields(chars, mask, decl.end) {
            set.insert(start, end, TokenType::Property);
        }
    }

    let spans = set.into_sorted();
    tracing::trace!("[TOKENS] {} span(s)", spans.len());
    spans
}

fn split_by_line(lines: &LineIndex, span: TokenSpan, tokens: &mut Vec<SemanticToken>) {
    let start = lines.position(span.start);
    let end = lines.position(span.end);
    let mut push = |line: u32, col: u32, length: u32| {
        if length > 0 {
            tokens.push(SemanticToken {
                line,
                col,
                length,
                token_type: span.token_type,
            });
        }
    };

    if start.line == end.line {
        push(start.line, start.character, end.character - start.character);
        return;
    }

    let first_len = lines.line_len(start.line) as u32;
    push(start.line, start.character, first_len.saturating_sub(start.character));
    for line in start.line + 1..end.line {
        push(line, 0, lines.line_len(line) as u32);
    }
    push(end.line, 0, end.character);
}

/// Numeric literals at code positions: decimal with optional fraction and
/// exponent, `0x`/`0o`/`0b` prefixed, with trailing type suffixes.
fn numbers(chars: &[char], mask: &Mask) -> Vec<(usize, usize)> {
    let digits = |mut i: usize, hex: bool| {
        while i < chars.len()
            && (chars[i] == '_'
                || if hex {
                    chars[i].is_ascii_hexdigit()
                } else {
                    chars[i].is_ascii_digit()
                })
        {
            i += 1;
        }
        i
    };
    let is_digit_at = |i: usize| chars.get(i).is_some_and(char::is_ascii_digit);

    let mut found = Vec::new();
    let mut pos = 0;
    while pos < chars.len() {
        let starts = mask.is_code(pos)
            && chars[pos].is_ascii_digit()
            && (pos == 0 || !is_word_character(chars[pos - 1]));
        if !starts {
            pos += 1;
            continue;
        }

        let mut end = if chars[pos] == '0'
            && matches!(chars.get(pos + 1), Some('x' | 'X' | 'o' | 'O' | 'b' | 'B'))
        {
            digits(pos + 2, true)
        } else {
            let mut end = digits(pos, false);
            // `1.5` but not `1..2` or `1.max()`
            if chars.get(end) == Some(&'.') && is_digit_at(end + 1) {
                end = digits(end + 1, false);
            }
            if matches!(chars.get(end), Some('e' | 'E')) {
                let sign = usize::from(matches!(chars.get(end + 1), Some('+' | '-')));
                if is_digit_at(end + 1 + sign) {
                    end = digits(end + 1 + sign, false);
                }
            }
            end
        };
        // suffix: `u8`, `f64`
        end = word_end(chars, end);

        found.push((pos, end));
        pos = end;
    }
    found
}

fn keywords(chars: &[char], mask: &Mask) -> Vec<(usize, usize)> {
    let mut found = Vec::new();
    let mut pos = 0;
    while pos < chars.len() {
        if starts_identifier(chars, mask, pos) {
            let end = word_end(chars, pos);
            if is_reserved(&collect(chars, pos, end)) {
                found.push((pos, end));
            }
            pos = end;
        } else {
            pos += 1;
        }
    }
    found
}

/// Declaration names anchored on the declaration keywords.
fn declarations(chars: &[char], mask: &Mask) -> Vec<Declaration> {
    let mut found = Vec::new();
    let mut pos = 0;
    while pos < chars.len() {
        if !starts_identifier(chars, mask, pos) {
            pos += 1;
            continue;
        }
        let end = word_end(chars, pos);
        if let Some(rule) = declaration_rule(&collect(chars, pos, end)) {
            if let Some((start, name_end)) = read_name(chars, mask, rule.name, end) {
                if !is_reserved(&collect(chars, start, name_end)) {
                    found.push(Declaration {
                        start,
                        end: name_end,
                        kind: rule.kind,
                    });
                }
            }
        }
        pos = end;
    }
    found
}

/// Parameter names of the function whose name ends at `name_end`.
fn parameters(chars: &[char], mask: &Mask, name_end: usize) -> Vec<(usize, usize)> {
    let mut pos = skip_trivia(chars, mask, name_end);
    if chars.get(pos) == Some(&'<') {
        pos = skip_trivia(chars, mask, skip_generics(chars, mask, pos));
    }
    if chars.get(pos) != Some(&'(') {
        return Vec::new();
    }
    let (start, end) = inner(chars, mask, pos, '(', ')');

    let mut names = Vec::new();
    for (seg_start, seg_end) in split_top_level(chars, mask, start, end) {
        // `self`, `&mut self` and anything without a type annotation
        let Some(colon) = type_colon(chars, mask, seg_start, seg_end) else {
            continue;
        };
        pattern_names(chars, mask, seg_start, colon, &mut names);
    }
    names
}

/// Field names of the struct whose name ends at `name_end`. Tuple and unit
/// structs have none.
fn fields(chars: &[char], mask: &Mask, name_end: usize) -> Vec<(usize, usize)> {
    let Some(open) = struct_body(chars, mask, name_end) else {
        return Vec::new();
    };
    let (start, end) = inner(chars, mask, open, '{', '}');

    let mut names = Vec::new();
    for (seg_start, seg_end) in split_top_level(chars, mask, start, end) {
        let mut pos = skip_trivia(chars, mask, seg_start);
        while let Some(after) = skip_attribute(chars, mask, pos) {
            pos = skip_trivia(chars, mask, after);
        }
        if let Some((s, e)) = read_identifier(chars, mask, pos) {
            if collect(chars, s, e) == VISIBILITY {
                pos = skip_trivia(chars, mask, e);
                if chars.get(pos) == Some(&'(') {
                    pos = skip_trivia(chars, mask, skip_balanced(chars, mask, pos, '(', ')'));
                }
            }
        }

        let Some((s, e)) = read_identifier(chars, mask, pos) else {
            continue;
        };
        let next = skip_trivia(chars, mask, e);
        if next < seg_end && chars[next] == ':' && chars.get(next + 1) != Some(&':') {
            names.push((s, e));
        }
    }
    names
}

/// Find the `{` opening a struct body, stopping at `;`, `(` or `}`.
fn struct_body(chars: &[char], mask: &Mask, name_end: usize) -> Option<usize> {
    let mut pos = skip_trivia(chars, mask, name_end);
    if chars.get(pos) == Some(&'<') {
        pos = skip_generics(chars, mask, pos);
    }
    (pos..chars.len())
        .filter(|&i| mask.is_code(i))
        .find(|&i| matches!(chars[i], '{' | ';' | '(' | '}'))
        .filter(|&i| chars[i] == '{')
}

/// Offset after the `>` closing a generics list at `pos`.
fn skip_generics(chars: &[char], mask: &Mask, pos: usize) -> usize {
    let mut depth = 0usize;
    for i in pos..chars.len() {
        if !mask.is_code(i) {
            continue;
        }
        match chars[i] {
            '<' => depth += 1,
            '>' if i > 0 && chars[i - 1] == '-' => {}
            '>' => {
                depth = depth.saturating_sub(1);
                if depth == 0 {
                    return i + 1;
                }
            }
            '{' | ';' => return i,
            _ => {}
        }
    }
    chars.len()
}

/// The span strictly inside the group opened at `open_pos`.
fn inner(chars: &[char], mask: &Mask, open_pos: usize, open: char, close: char) -> (usize, usize) {
    let after = skip_balanced(chars, mask, open_pos, open, close);
    let end = if after > open_pos + 1 && chars.get(after - 1) == Some(&close) {
        after - 1
    } else {
        after
    };
    (open_pos + 1, end)
}

/// Split `[start, end)` at commas outside any nested group.
fn split_top_level(chars: &[char], mask: &Mask, start: usize, end: usize) -> Vec<(usize, usize)> {
    let mut segments = Vec::new();
    let mut depth = 0usize;
    let mut seg_start = start;

    for i in start..end {
        if !mask.is_code(i) {
            continue;
        }
        match chars[i] {
            '(' | '[' | '{' | '<' => depth += 1,
            '>' if i > 0 && chars[i - 1] == '-' => {}
            ')' | ']' | '}' | '>' => depth = depth.saturating_sub(1),
            ',' if depth == 0 => {
                segments.push((seg_start, i));
                seg_start = i + 1;
            }
            _ => {}
        }
    }
    if seg_start < end {
        segments.push((seg_start, end));
    }
    segments
}

/// The first top-level single `:` in a parameter segment.
fn type_colon(chars: &[char], mask: &Mask, start: usize, end: usize) -> Option<usize> {
    let mut depth = 0usize;
    for i in start..end {
        if !mask.is_code(i) {
            continue;
        }
        match chars[i] {
            '(' | '[' | '{' => depth += 1,
            ')' | ']' | '}' => depth = depth.saturating_sub(1),
            ':' if depth == 0 => {
                let doubled = chars.get(i + 1) == Some(&':') || (i > 0 && chars[i - 1] == ':');
                if !doubled {
                    return Some(i);
                }
            }
            _ => {}
        }
    }
    None
}

/// Binding names in a parameter pattern such as `mut x` or `(a, b)`.
fn pattern_names(
    chars: &[char],
    mask: &Mask,
    start: usize,
    end: usize,
    names: &mut Vec<(usize, usize)>,
) {
    let mut pos = start;
    while pos < end {
        if let Some(after) = skip_attribute(chars, mask, pos) {
            pos = after;
            continue;
        }
        if !starts_identifier(chars, mask, pos) {
            pos += 1;
            continue;
        }
        let word_stop = word_end(chars, pos);
        let word = collect(chars, pos, word_stop);
        let next = skip_trivia(chars, mask, word_stop);
        // `Point { x, y }`, `Some(v)`, `path::Type`
        let is_path_or_constructor = next < end && matches!(chars[next], '(' | '{' | ':');
        if word != "_" && !is_reserved(&word) && !is_path_or_constructor {
            names.push((pos, word_stop));
        }
        pos = word_stop;
    }
}
