//! Semantic token tests.

use lexis::ide::{SemanticToken, TokenType, encode_relative, semantic_spans};
use lexis::scan::scan;
use rstest::rstest;

use crate::helpers::host_helpers::*;
use crate::helpers::source_fixtures::*;

fn token(line: u32, col: u32, length: u32, token_type: TokenType) -> SemanticToken {
    SemanticToken {
        line,
        col,
        length,
        token_type,
    }
}

#[rstest]
#[case(TRICKY_LEXING)]
#[case(NESTED_MODULES)]
#[case(STRUCT_AND_FUNCTION)]
#[case(UNTERMINATED_FUNCTION)]
#[case("let s = \"never closed\nfn hidden() {}\n")]
fn test_code_tokens_never_start_in_masked_text(#[case] source: &str) {
    let result = scan(source);
    for span in semantic_spans(source, &result) {
        match span.token_type {
            TokenType::Comment | TokenType::String => {}
            _ => assert!(
                result.mask.is_code(span.start),
                "{:?} starts at masked offset {}",
                span.token_type,
                span.start
            ),
        }
    }
}

#[test]
fn test_spans_are_sorted_and_disjoint() {
    let result = scan(TRICKY_LEXING);
    let spans = semantic_spans(TRICKY_LEXING, &result);
    assert!(!spans.is_empty());
    for pair in spans.windows(2) {
        assert!(pair[0].end <= pair[1].start);
    }
}

#[test]
fn test_struct_and_function_tokens() {
    let host = host_with_document(STRUCT_AND_FUNCTION);
    let tokens = host.analysis().semantic_tokens(TEST_URI);

    for expected in [
        token(0, 0, 6, TokenType::Keyword),
        token(0, 7, 3, TokenType::Struct),
        token(1, 2, 3, TokenType::Property),
        token(3, 0, 2, TokenType::Keyword),
        token(3, 3, 3, TokenType::Function),
    ] {
        assert!(tokens.contains(&expected), "missing {expected:?}");
    }
}

#[test]
fn test_multiline_comment_is_split_per_line() {
    let host = host_with_document("/* a\nbc */ fn f() {}\n");
    let tokens = host.analysis().semantic_tokens(TEST_URI);

    assert_eq!(tokens[0], token(0, 0, 4, TokenType::Comment));
    assert_eq!(tokens[1], token(1, 0, 5, TokenType::Comment));
}

#[test]
fn test_relative_encoding_of_document() {
    let host = host_with_document("fn f() {}\nfn g() {}\n");
    let data = encode_relative(&host.analysis().semantic_tokens(TEST_URI));

    assert_eq!(
        data,
        vec![
            0, 0, 2, TokenType::Keyword.to_lsp_index(), 0, //
            0, 3, 1, TokenType::Function.to_lsp_index(), 0, //
            1, 0, 2, TokenType::Keyword.to_lsp_index(), 0, //
            0, 3, 1, TokenType::Function.to_lsp_index(), 0,
        ]
    );
}
