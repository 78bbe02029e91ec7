//! Workspace index snapshot tests.

use std::collections::BTreeSet;

use lexis::hir::{Snapshot, WorkspaceIndex};
use serde_json::{Value, json};

use crate::helpers::source_fixtures::{NESTED_MODULES, STRUCT_AND_FUNCTION, TRICKY_LEXING};

fn pairs(index: &WorkspaceIndex) -> BTreeSet<(String, String)> {
    index
        .all()
        .iter()
        .flat_map(|(uri, symbols)| {
            symbols
                .iter()
                .map(move |s| (uri.to_string(), serde_json::to_string(s).unwrap()))
        })
        .collect()
}

fn populated() -> WorkspaceIndex {
    let mut index = WorkspaceIndex::new();
    index.index("file:///a.rs", STRUCT_AND_FUNCTION);
    index.index("file:///b.rs", NESTED_MODULES);
    index.index("file:///c.rs", TRICKY_LEXING);
    index.index("file:///empty.rs", "");
    index
}

#[test]
fn test_roundtrip_through_json_text() {
    let index = populated();
    let text = serde_json::to_string(&index.export_snapshot()).unwrap();

    let snapshot: Snapshot = serde_json::from_str(&text).unwrap();
    let mut restored = WorkspaceIndex::new();
    assert_eq!(restored.import_snapshot(snapshot), 4);
    assert_eq!(pairs(&restored), pairs(&index));
}

#[test]
fn test_roundtrip_through_untyped_value() {
    let index = populated();
    let value: Value = serde_json::to_value(index.export_snapshot()).unwrap();

    let mut restored = WorkspaceIndex::new();
    assert_eq!(restored.import_snapshot_value(&value), 4);
    assert_eq!(pairs(&restored), pairs(&index));
}

#[test]
fn test_malformed_payloads_are_cold_starts() {
    for payload in [
        json!("snapshot"),
        json!({"version": "1", "entries": []}),
        json!({"version": 0, "entries": []}),
        json!({"version": 1}),
        json!({"version": 1, "entries": null}),
    ] {
        let mut index = WorkspaceIndex::new();
        assert_eq!(index.import_snapshot_value(&payload), 0, "{payload}");
        assert!(index.is_empty());
    }
}

#[test]
fn test_import_replaces_only_listed_documents() {
    let mut index = populated();
    let mut other = WorkspaceIndex::new();
    other.index("file:///a.rs", "fn replaced() {}");

    index.import_snapshot(other.export_snapshot());
    assert_eq!(index.len(), 4);
    assert_eq!(index.symbols_for("file:///a.rs").unwrap()[0].name.as_ref(), "replaced");
}
