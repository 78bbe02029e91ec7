//! Go-to-definition tests.

use lexis::hir::SymbolKind;
use lexis::ide::definition_at_position;

use crate::helpers::host_helpers::*;
use crate::helpers::source_fixtures::NESTED_MODULES;

#[test]
fn test_goto_type_from_use_site() {
    let host = host_with_document(NESTED_MODULES);
    let analysis = host.analysis();
    let position = position_of(NESTED_MODULES, "Connection::open");

    let targets = analysis.goto_definition(TEST_URI, position);
    assert_eq!(targets[0].kind, SymbolKind::Struct);
    assert_eq!(targets[0].start_line, 2);
}

#[test]
fn test_goto_on_declaration_returns_itself() {
    let host = host_with_document(NESTED_MODULES);
    let doc = host.analysis().document(TEST_URI).unwrap();
    let position = position_of(NESTED_MODULES, "handshake(");

    let targets = definition_at_position(doc, position);
    assert_eq!(targets.len(), 1);
    assert_eq!(targets[0].kind, SymbolKind::Method);
}

#[test]
fn test_goto_with_cursor_after_word() {
    let source = "fn helper() {}\nfn main() { helper(); }\n";
    let host = host_with_document(source);
    let mut position = position_of(source, "helper();");
    position.character += "helper".len() as u32;

    let targets = host.analysis().goto_definition(TEST_URI, position);
    assert_eq!(targets[0].start_line, 0);
}

#[test]
fn test_goto_across_documents() {
    let mut host = host_with_document("fn main() { let c = Config::load(); }\n");
    host.index_text("file:///config.rs", "pub struct Config {}\n");
    let position = position_of("fn main() { let c = Config::load(); }", "Config");

    let targets = host.analysis().goto_definition(TEST_URI, position);
    assert_eq!(targets.len(), 1);
    assert_eq!(targets[0].document_id.as_ref(), "file:///config.rs");
}

#[test]
fn test_goto_on_literal_finds_nothing() {
    let source = "const N: u8 = 42;\n";
    let host = host_with_document(source);
    let targets = host.analysis().goto_definition(TEST_URI, position_of(source, "42"));
    assert!(targets.is_empty());
}
