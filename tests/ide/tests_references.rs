//! Find-references and rename tests.

use lexis::{Position, Range};
use rstest::rstest;

use crate::helpers::host_helpers::*;
use crate::helpers::source_fixtures::RENAME_WITH_COMMENT;

#[test]
fn test_rename_edits_code_occurrences_and_excludes_comment() {
    let host = host_with_document(RENAME_WITH_COMMENT);
    let edits = host
        .analysis()
        .rename(TEST_URI, position_of(RENAME_WITH_COMMENT, "x = 1"), "count");

    let ranges: Vec<Range> = edits.iter().map(|edit| edit.range).collect();
    assert_eq!(
        ranges,
        vec![
            Range::from_coords(0, 4, 0, 5),
            Range::from_coords(1, 8, 1, 9),
            Range::from_coords(1, 12, 1, 13),
        ]
    );
    assert!(edits.iter().all(|edit| edit.new_text == "count"));
    assert!(ranges.iter().all(|r| r.start != Position::new(0, 14)));
}

#[test]
fn test_prepare_rename_inside_comment_is_refused() {
    let host = host_with_document(RENAME_WITH_COMMENT);
    let analysis = host.analysis();

    assert!(analysis.prepare_rename(TEST_URI, Position::new(0, 14)).is_none());
    assert!(analysis.rename(TEST_URI, Position::new(0, 14), "y2").is_empty());

    let prepared = analysis.prepare_rename(TEST_URI, Position::new(1, 8)).unwrap();
    assert_eq!(prepared.placeholder, "x");
    assert_eq!(prepared.range, Range::from_coords(1, 8, 1, 9));
}

#[rstest]
#[case("")]
#[case("1abc")]
#[case("fn")]
#[case("two words")]
fn test_rename_rejects_illegal_names(#[case] new_name: &str) {
    let host = host_with_document(RENAME_WITH_COMMENT);
    let edits = host.analysis().rename(TEST_URI, Position::new(1, 8), new_name);
    assert!(edits.is_empty());
}

#[test]
fn test_prepare_rename_on_keyword_is_refused() {
    let host = host_with_document(RENAME_WITH_COMMENT);
    assert!(host.analysis().prepare_rename(TEST_URI, Position::new(0, 1)).is_none());
}

#[test]
fn test_references_are_whole_words() {
    let source = "fn item() {}\nfn items() { item(); let item_count = 0; }\n";
    let host = host_with_document(source);
    let refs = host.analysis().find_references(TEST_URI, Position::new(0, 3));

    assert_eq!(
        refs,
        vec![Range::from_coords(0, 3, 0, 7), Range::from_coords(1, 13, 1, 17)]
    );
}

#[test]
fn test_rename_across_single_quoted_string() {
    let source = "let x = 'a x b';\nlet y = x;";
    let host = host_with_document(source);
    let edits = host.analysis().rename(TEST_URI, Position::new(1, 8), "z");

    let ranges: Vec<Range> = edits.iter().map(|edit| edit.range).collect();
    assert_eq!(
        ranges,
        vec![Range::from_coords(0, 4, 0, 5), Range::from_coords(1, 8, 1, 9)]
    );
}

#[test]
fn test_references_in_unknown_document() {
    let host = host_with_document(RENAME_WITH_COMMENT);
    assert!(host.analysis().find_references("file:///other.rs", Position::new(0, 4)).is_empty());
}
