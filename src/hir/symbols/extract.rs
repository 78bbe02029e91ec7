//! The symbol extractor: a single scan over code positions.
//!
//! Structural chars (`{`, `}`, `;`, `#[`) drive the container protocol;
//! identifier runs are checked against the declaration table. Declarations
//! that may own a body probe forward for it and are queued as pending until
//! the matching `{` is reached.

use std::sync::Arc;

use rustc_hash::FxHashSet;

use crate::base::LineIndex;
use crate::base::keywords::{VISIBILITY, is_reserved};
use crate::scan::{Mask, scan_chars};

use super::context::{ExtractionContext, PendingBody};
use super::helpers::{
    collect, read_identifier, read_qualified, skip_attribute, skip_balanced, skip_trivia,
    starts_identifier, word_end,
};
use super::rules::{DeclarationRule, NameReader, declaration_rule};
use super::types::{Symbol, SymbolKind};

/// Outcome of probing for a declaration's body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BodyProbe {
    /// A top-level `{` at this offset.
    Body(usize),
    /// The declaration ends without a body (`;` when allowed, or `=`).
    NoBody,
    /// A `;` the declaration cannot end with, a closing `}`, or end of text.
    Unresolved { terminated: bool },
}

/// Extract symbols from `text`, scanning it first.
pub fn extract_symbols_from_text(document_id: &str, text: &str) -> Vec<Symbol> {
    let chars: Vec<char> = text.chars().collect();
    let scan = scan_chars(&chars);
    let line_index = LineIndex::from_chars(&chars);
    extract_from_chars(Arc::from(document_id), &chars, &scan.mask, &line_index)
}

/// Extract symbols from `text` using a precomputed mask.
pub fn extract_symbols(document_id: &str, text: &str, mask: &Mask) -> Vec<Symbol> {
    let chars: Vec<char> = text.chars().collect();
    let line_index = LineIndex::from_chars(&chars);
    extract_from_chars(Arc::from(document_id), &chars, mask, &line_index)
}

/// Extraction over an already collected char buffer.
pub(crate) fn extract_from_chars(
    document_id: Arc<str>,
    chars: &[char],
    mask: &Mask,
    line_index: &LineIndex,
) -> Vec<Symbol> {
    let mut ctx = ExtractionContext::new(document_id, line_index);

    let mut pos = 0;
    while pos < chars.len() {
        if !mask.is_code(pos) {
            pos += 1;
            continue;
        }
        match chars[pos] {
            '{' => {
                ctx.open_brace(pos);
                pos += 1;
            }
            '}' => {
                ctx.close_brace(pos);
                pos += 1;
            }
            ';' => {
                ctx.semicolon(pos);
                pos += 1;
            }
            '#' => pos = skip_attribute(chars, mask, pos).unwrap_or(pos + 1),
            _ if starts_identifier(chars, mask, pos) => {
                let end = word_end(chars, pos);
                let word = collect(chars, pos, end);
                pos = if word == VISIBILITY {
                    skip_visibility(chars, mask, end)
                } else if let Some(rule) = declaration_rule(&word) {
                    declare(&mut ctx, chars, mask, rule, pos, end)
                } else {
                    end
                };
            }
            _ => pos += 1,
        }
    }

    if ctx.pending_count() > 0 {
        tracing::trace!(
            "[EXTRACT] {}: {} declaration(s) left pending",
            ctx.document_id,
            ctx.pending_count()
        );
    }

    dedup(ctx.symbols)
}

/// Skip `pub` arguments such as `(crate)`; `end` is just past `pub`.
fn skip_visibility(chars: &[char], mask: &Mask, end: usize) -> usize {
    let next = skip_trivia(chars, mask, end);
    if chars.get(next) == Some(&'(') {
        skip_balanced(chars, mask, next, '(', ')')
    } else {
        end
    }
}

/// Handle a declaration keyword spanning `[keyword_start, keyword_end)`.
/// Returns the offset to resume scanning from.
fn declare(
    ctx: &mut ExtractionContext<'_>,
    chars: &[char],
    mask: &Mask,
    rule: &DeclarationRule,
    keyword_start: usize,
    keyword_end: usize,
) -> usize {
    let Some((name_start, name_end)) = read_name(chars, mask, rule.name, keyword_end) else {
        return keyword_end;
    };
    let name = collect(chars, name_start, name_end);
    if is_reserved(&name) {
        // `const fn f`: let the next keyword declare.
        return keyword_end;
    }

    let kind = match (rule.kind, ctx.current_container()) {
        (SymbolKind::Function, Some(container)) if container.kind.is_type_like() => {
            SymbolKind::Method
        }
        (kind, _) => kind,
    };
    let symbol_index = ctx.push_symbol(name, kind, name_start);

    if rule.expect_body {
        let probe = probe_body(chars, mask, name_end, rule.allow_bodyless);
        tracing::trace!("[EXTRACT] {} {:?}", rule.keyword, probe);
        let pending = |body_offset, unresolved| PendingBody {
            symbol_index,
            allow_bodyless: rule.allow_bodyless,
            start_offset: keyword_start,
            body_offset,
            unresolved,
        };
        match probe {
            BodyProbe::Body(offset) => ctx.push_pending(pending(Some(offset), false)),
            BodyProbe::NoBody => {}
            BodyProbe::Unresolved { terminated } => ctx.push_pending(pending(None, terminated)),
        }
    }

    name_end
}

/// Read the declared name following a keyword that ends at `from`.
pub(crate) fn read_name(
    chars: &[char],
    mask: &Mask,
    reader: NameReader,
    from: usize,
) -> Option<(usize, usize)> {
    let start = skip_trivia(chars, mask, from);
    let read = |at| match reader {
        NameReader::Simple => read_identifier(chars, mask, at),
        NameReader::Qualified => read_qualified(chars, mask, at),
    };
    let (name_start, name_end) = read(start)?;
    if collect(chars, name_start, name_end) == "mut" {
        // `static mut NAME`
        return read(skip_trivia(chars, mask, name_end));
    }
    Some((name_start, name_end))
}

/// Walk forward from a declaration's name looking for its body.
///
/// Tracks `()`, `<>` and `[]` depth; only delimiters at depth zero decide.
fn probe_body(chars: &[char], mask: &Mask, from: usize, allow_bodyless: bool) -> BodyProbe {
    let (mut parens, mut angles, mut brackets) = (0usize, 0usize, 0usize);

    for pos in from..chars.len() {
        if !mask.is_code(pos) {
            continue;
        }
        let prev = pos.checked_sub(1).map(|p| chars[p]);
        let next = chars.get(pos + 1).copied();
        let top = parens == 0 && angles == 0 && brackets == 0;

        match chars[pos] {
            '(' => parens += 1,
            ')' => parens = parens.saturating_sub(1),
            '[' => brackets += 1,
            ']' => brackets = brackets.saturating_sub(1),
            '<' => angles += 1,
            // `->` and `=>` are arrows, not closing angles.
            '>' if matches!(prev, Some('-') | Some('=')) => {}
            '>' => angles = angles.saturating_sub(1),
            '{' if top => return BodyProbe::Body(pos),
            '}' if top => return BodyProbe::Unresolved { terminated: true },
            ';' if top => {
                return if allow_bodyless {
                    BodyProbe::NoBody
                } else {
                    BodyProbe::Unresolved { terminated: true }
                };
            }
            '=' if top
                && !matches!(next, Some('=') | Some('>'))
                && !matches!(prev, Some('=') | Some('!') | Some('<') | Some('>')) =>
            {
                return BodyProbe::NoBody;
            }
            _ => {}
        }
    }

    BodyProbe::Unresolved { terminated: false }
}

/// Drop later duplicates of `(kind, name, line, char)`, keeping source order.
fn dedup(symbols: Vec<Symbol>) -> Vec<Symbol> {
    let keep: Vec<bool> = {
        let mut seen = FxHashSet::default();
        symbols.iter().map(|s| seen.insert(s.dedup_key())).collect()
    };
    symbols
        .into_iter()
        .zip(keep)
        .filter_map(|(symbol, keep)| keep.then_some(symbol))
        .collect()
}
