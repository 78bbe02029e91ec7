//! Document index and cache tests.

use std::sync::Arc;

use lexis::hir::{DocumentCache, DocumentIndex, OutlineNode, SymbolKind};

use crate::helpers::source_fixtures::NESTED_MODULES;

fn outline_names(nodes: &[OutlineNode]) -> Vec<String> {
    nodes.iter().map(|n| n.symbol.name.to_string()).collect()
}

#[test]
fn test_same_version_is_identical_even_with_new_text() {
    let mut cache = DocumentCache::new();
    let first = cache.get("file:///a.rs", 7, "fn before() {}");
    let second = cache.get("file:///a.rs", 7, "fn after() {}");

    assert!(Arc::ptr_eq(&first, &second));
    assert_eq!(second.text(), "fn before() {}");
}

#[test]
fn test_documents_are_cached_independently() {
    let mut cache = DocumentCache::new();
    let a = cache.get("a", 1, "fn a() {}");
    let b = cache.get("b", 1, "fn b() {}");
    assert!(!Arc::ptr_eq(&a, &b));
    assert_eq!(cache.len(), 2);

    cache.evict("a");
    let a_again = cache.get("a", 1, "fn a() {}");
    assert!(!Arc::ptr_eq(&a, &a_again));
    assert!(Arc::ptr_eq(&b, &cache.get("b", 1, "")));
}

#[test]
fn test_outline_follows_containers() {
    let doc = DocumentIndex::build("file:///n.rs", 1, NESTED_MODULES);
    let outline = doc.outline();

    assert_eq!(outline_names(outline), vec!["network", "main"]);
    let network = &outline[0];
    assert_eq!(outline_names(&network.children), vec!["Connection", "open", "tls"]);
    let tls = &network.children[2];
    assert_eq!(tls.children[0].symbol.kind, SymbolKind::Interface);
    assert_eq!(tls.children[0].children[0].symbol.name.as_ref(), "handshake");
}

#[test]
fn test_flat_list_and_name_lookup() {
    let doc = DocumentIndex::build("file:///n.rs", 1, NESTED_MODULES);
    assert_eq!(doc.symbols().len(), 7);
    assert_eq!(doc.symbols_named("Connection").len(), 1);
    assert_eq!(doc.symbols_named("Connection")[0].kind, SymbolKind::Struct);
    assert!(doc.symbols_named("addr").is_empty());
}
