//! Masking scanner tests.

use lexis::scan::{Span, scan};
use rstest::rstest;

use crate::helpers::source_fixtures::TRICKY_LEXING;

fn assert_spans_masked(text: &str) {
    let result = scan(text);
    let len = text.chars().count();
    assert_eq!(result.mask.len(), len);

    for span in result.strings.iter().chain(&result.comments) {
        assert!(span.end <= len, "span {:?} past end of text", span);
        for offset in span.start..span.end {
            assert!(
                !result.mask.is_code(offset),
                "offset {} inside {:?} is marked as code in {:?}",
                offset,
                span,
                text
            );
        }
    }

    let mut all: Vec<Span> = result.strings.iter().chain(&result.comments).copied().collect();
    all.sort_by_key(|s| s.start);
    for pair in all.windows(2) {
        assert!(!pair[0].overlaps(&pair[1]), "overlapping spans {:?}", pair);
    }
}

#[rstest]
#[case::line_comment("a // b\nc")]
#[case::hash_comment("# note\nx")]
#[case::attribute_is_code("#[derive(Debug)]\nstruct A;")]
#[case::block_comment("a /* b */ c")]
#[case::unterminated_block("a /* never closed")]
#[case::escaped_quote(r#"let s = "a \" b";"#)]
#[case::unterminated_string("let s = \"open")]
#[case::raw_string(r###"let r = r##"a "# b"##;"###)]
#[case::byte_raw_string(r#"br"x""#)]
#[case::char_literal("let c = '}';")]
#[case::lifetime("fn f<'a>(x: &'a str) {}")]
#[case::single_quoted_word("let s = 'hello'; fn after() {}")]
#[case::single_quoted_url("const URL = 'http://x'; const Y = 1;")]
#[case::trailing_backslash("\"abc\\")]
#[case::mixed(TRICKY_LEXING)]
#[case::empty("")]
fn test_string_and_comment_offsets_are_masked(#[case] text: &str) {
    assert_spans_masked(text);
}

#[test]
fn test_code_between_masked_regions() {
    let text = "x /* a */ y \"b\" z";
    let result = scan(text);
    for (offset, c) in text.chars().enumerate() {
        if matches!(c, 'x' | 'y' | 'z') {
            assert!(result.mask.is_code(offset), "{} at {} should be code", c, offset);
        }
    }
    assert_eq!(result.comments, vec![Span::new(2, 9)]);
    assert_eq!(result.strings, vec![Span::new(12, 15)]);
}

#[test]
fn test_lifetime_does_not_open_string() {
    let text = "fn f<'a>(x: &'a str) { x }";
    let result = scan(text);
    assert!(result.strings.is_empty());
    assert!(result.mask.as_slice().iter().all(|&code| code));
}

#[test]
fn test_single_quoted_url_is_a_string_not_a_comment() {
    let text = "const URL = 'http://x'; const Y = 1;";
    let result = scan(text);
    assert_eq!(result.strings, vec![Span::new(12, 22)]);
    assert!(result.comments.is_empty());
    assert!(result.mask.is_code(22));
}

#[test]
fn test_unterminated_raw_string_runs_to_end() {
    let text = "let r = r#\"open";
    let result = scan(text);
    assert_eq!(result.strings, vec![Span::new(8, text.chars().count())]);
}
