//! Helpers for setting up analysis hosts.

use lexis::ide::AnalysisHost;

pub const TEST_URI: &str = "file:///test.rs";

/// Creates an AnalysisHost with a single open document.
pub fn host_with_document(source: &str) -> AnalysisHost {
    let mut host = AnalysisHost::new();
    host.open_document(TEST_URI, 1, source);
    host
}

/// Char offset of the first occurrence of `needle` in `source`, as a
/// `(line, character)` pair.
pub fn position_of(source: &str, needle: &str) -> lexis::Position {
    let byte = source
        .find(needle)
        .unwrap_or_else(|| panic!("'{}' not found in source", needle));
    let before = &source[..byte];
    let line = before.matches('\n').count() as u32;
    let line_start = before.rfind('\n').map(|i| i + 1).unwrap_or(0);
    let character = before[line_start..].chars().count() as u32;
    lexis::Position::new(line, character)
}
