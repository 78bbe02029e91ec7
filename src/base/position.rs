//! Position tracking for symbols, references and edits.
//!
//! All coordinates are 0-indexed for LSP compatibility. Columns are counted in
//! `char`s, matching the offsets produced by the masking scanner.

use serde::{Deserialize, Serialize};

/// A position in source code (0-indexed).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
pub struct Position {
    pub line: u32,
    pub character: u32,
}

/// A half-open range in source code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Range {
    pub start: Position,
    pub end: Position,
}

impl Position {
    pub fn new(line: u32, character: u32) -> Self {
        Self { line, character }
    }
}

impl Range {
    pub fn new(start: Position, end: Position) -> Self {
        Self { start, end }
    }

    /// Create a range from line/column coordinates.
    pub fn from_coords(start_line: u32, start_col: u32, end_line: u32, end_col: u32) -> Self {
        Self {
            start: Position::new(start_line, start_col),
            end: Position::new(end_line, end_col),
        }
    }

    /// Check if a position falls within this range (end exclusive).
    pub fn contains(&self, position: Position) -> bool {
        position >= self.start && position < self.end
    }
}

/// Maps char offsets to line/column positions and back.
///
/// Built once per document; lookups are `O(log lines)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineIndex {
    /// Char offset at which each line starts. Always contains at least `0`.
    line_starts: Vec<usize>,
    /// Total number of chars in the text.
    len: usize,
}

impl LineIndex {
    pub fn new(text: &str) -> Self {
        let mut line_starts = vec![0];
        let mut len = 0;
        for (i, c) in text.chars().enumerate() {
            if c == '\n' {
                line_starts.push(i + 1);
            }
            len = i + 1;
        }
        Self { line_starts, len }
    }

    /// Build from an already collected char buffer.
    pub fn from_chars(chars: &[char]) -> Self {
        let mut line_starts = vec![0];
        for (i, &c) in chars.iter().enumerate() {
            if c == '\n' {
                line_starts.push(i + 1);
            }
        }
        Self {
            line_starts,
            len: chars.len(),
        }
    }

    /// Number of lines (a trailing newline opens a final empty line).
    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }

    /// Total length in chars.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Char offset where `line` starts, if the line exists.
    pub fn line_start(&self, line: u32) -> Option<usize> {
        self.line_starts.get(line as usize).copied()
    }

    /// Length of `line` in chars, excluding its `\n` terminator.
    pub fn line_len(&self, line: u32) -> usize {
        let line = line as usize;
        let Some(&start) = self.line_starts.get(line) else {
            return 0;
        };
        let end = self
            .line_starts
            .get(line + 1)
            .map(|next| next - 1)
            .unwrap_or(self.len);
        end.saturating_sub(start)
    }

    /// Convert a char offset to a position. Offsets past the end clamp to the end.
    pub fn position(&self, offset: usize) -> Position {
        let offset = offset.min(self.len);
        let line = match self.line_starts.binary_search(&offset) {
            Ok(line) => line,
            Err(next) => next - 1,
        };
        Position::new(line as u32, (offset - self.line_starts[line]) as u32)
    }

    /// Convert a position to a char offset.
    ///
    /// A column past the end of its line clamps to the line end; a line past
    /// the end of the text returns `None`.
    pub fn offset(&self, position: Position) -> Option<usize> {
        let start = self.line_start(position.line)?;
        let col = (position.character as usize).min(self.line_len(position.line));
        Some(start + col)
    }

    /// Convert a `[start, end)` char span into a range.
    pub fn range(&self, start: usize, end: usize) -> Range {
        Range::new(self.position(start), self.position(end))
    }
}
