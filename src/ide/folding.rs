//! Folding ranges from brace pairs and block comments.

use crate::base::LineIndex;
use crate::scan::ScanResult;

/// Kind of a foldable region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FoldingKind {
    Region,
    Comment,
}

/// A foldable line range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FoldingRange {
    pub start_line: u32,
    pub end_line: u32,
    pub kind: FoldingKind,
}

impl FoldingRange {
    fn region(start_line: u32, end_line: u32) -> Self {
        Self {
            start_line,
            end_line,
            kind: FoldingKind::Region,
        }
    }

    fn comment(start_line: u32, end_line: u32) -> Self {
        Self {
            start_line,
            end_line,
            kind: FoldingKind::Comment,
        }
    }
}

/// Compute folding ranges for `text`.
///
/// One range per code `{ ... }` pair and one per comment, keeping only those
/// that span more than one line. Unmatched braces are ignored.
pub fn folding_ranges(text: &str, scan: &ScanResult) -> Vec<FoldingRange> {
    let chars: Vec<char> = text.chars().collect();
    let lines = LineIndex::from_chars(&chars);
    let mut ranges = Vec::new();
    let mut open = Vec::new();

    for (offset, &c) in chars.iter().enumerate() {
        if !scan.mask.is_code(offset) {
            continue;
        }
        match c {
            '{' => open.push(offset),
            '}' => {
                if let Some(start) = open.pop() {
                    ranges.push(FoldingRange::region(
                        lines.position(start).line,
                        lines.position(offset).line,
                    ));
                }
            }
            _ => {}
        }
    }

    for comment in &scan.comments {
        let start = lines.position(comment.start).line;
        // `end` is exclusive; a line comment ends before its newline
        let end = lines.position(comment.end.saturating_sub(1).max(comment.start)).line;
        ranges.push(FoldingRange::comment(start, end));
    }

    // Keep only multiline ranges and sort by start line
    ranges.retain(|r| r.end_line > r.start_line);
    ranges.sort_by_key(|r| (r.start_line, r.end_line));
    ranges
}
