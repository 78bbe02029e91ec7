//! Folding range tests.

use lexis::ide::{FoldingKind, FoldingRange};

use crate::helpers::host_helpers::*;
use crate::helpers::source_fixtures::NESTED_MODULES;

fn lines(ranges: &[FoldingRange]) -> Vec<(u32, u32)> {
    ranges.iter().map(|r| (r.start_line, r.end_line)).collect()
}

#[test]
fn test_nested_braces_fold() {
    let host = host_with_document(NESTED_MODULES);
    let ranges = host.analysis().folding_ranges(TEST_URI);

    assert_eq!(
        lines(&ranges),
        vec![(1, 18), (2, 5), (7, 11), (8, 10), (13, 17), (14, 16), (20, 22)]
    );
    assert!(ranges.iter().all(|r| r.kind == FoldingKind::Region));
}

#[test]
fn test_block_comment_folds() {
    let source = "/* first\n   second */\nfn f() {}\n// one line\n";
    let host = host_with_document(source);
    let ranges = host.analysis().folding_ranges(TEST_URI);

    assert_eq!(ranges.len(), 1);
    assert_eq!(ranges[0].kind, FoldingKind::Comment);
    assert_eq!((ranges[0].start_line, ranges[0].end_line), (0, 1));
}

#[test]
fn test_braces_in_strings_do_not_fold() {
    let source = "fn f() {\n    let s = \"}\";\n}\nconst C: char = '{';\n";
    let host = host_with_document(source);
    assert_eq!(lines(&host.analysis().folding_ranges(TEST_URI)), vec![(0, 2)]);
}

#[test]
fn test_unbalanced_braces_are_ignored() {
    let source = "fn f() {\n    if x {\n        y();\n    }\n";
    let host = host_with_document(source);
    assert_eq!(lines(&host.analysis().folding_ranges(TEST_URI)), vec![(1, 3)]);
}
