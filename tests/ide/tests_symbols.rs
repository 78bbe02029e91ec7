//! Workspace and document symbol tests.

use lexis::hir::{DocumentIndex, WorkspaceIndex};
use lexis::ide::{SymbolMatch, fuzzy, search_workspace_symbols, workspace_symbols};
use rstest::rstest;

use crate::helpers::host_helpers::*;
use crate::helpers::source_fixtures::*;

fn names(results: &[SymbolMatch]) -> Vec<&str> {
    results.iter().map(|m| m.symbol.name.as_ref()).collect()
}

#[test]
fn test_fuzzy_ranking_exact_prefix_subsequence() {
    let mut index = WorkspaceIndex::new();
    index.index("file:///f.rs", FUZZY_CANDIDATES);

    let results = search_workspace_symbols(&index, "fetch", 10);
    assert_eq!(names(&results)[0], "fetch");
    assert_eq!(names(&results)[1], "fetchUser");
    assert_eq!(names(&results), vec!["fetch", "fetchUser", "userFetch"]);
}

#[test]
fn test_exact_match_first_regardless_of_order() {
    let mut index = WorkspaceIndex::new();
    index.index("file:///1.rs", "fn fetchAll() {}\nmod fetcher {}\n");
    index.index("file:///2.rs", "const FETCH: u8 = 0;\n");

    let results = search_workspace_symbols(&index, "fetch", 10);
    assert_eq!(results[0].symbol.name.as_ref(), "FETCH");
    assert_eq!(results[0].score, fuzzy::EXACT_SCORE);
}

#[rstest]
#[case("conn", "Connection")]
#[case("hshk", "Handshake")]
#[case("NETWORK", "network")]
fn test_queries_find_nested_symbols(#[case] query: &str, #[case] expected: &str) {
    let mut index = WorkspaceIndex::new();
    index.index("file:///n.rs", NESTED_MODULES);
    let results = search_workspace_symbols(&index, query, 10);
    assert_eq!(names(&results)[0], expected);
}

#[test]
fn test_open_documents_search() {
    let a = DocumentIndex::build("file:///a.rs", 1, "fn item() {}\n");
    let b = DocumentIndex::build("file:///b.rs", 1, "fn item() {}\nfn items() {}\n");

    let results = workspace_symbols("item", [&a, &b], 10);
    let docs: Vec<_> = results.iter().map(|m| m.symbol.document_id.as_ref()).collect();
    assert_eq!(docs, vec!["file:///a.rs", "file:///b.rs", "file:///b.rs"]);
    assert_eq!(results[2].symbol.name.as_ref(), "items");

    assert_eq!(workspace_symbols("item", [&a, &b], 1).len(), 1);
}

#[test]
fn test_document_symbols_through_host() {
    let host = host_with_document(NESTED_MODULES);
    let outline = host.analysis().document_symbols(TEST_URI);

    assert_eq!(outline.len(), 2);
    assert_eq!(outline[0].children.len(), 3);
}
