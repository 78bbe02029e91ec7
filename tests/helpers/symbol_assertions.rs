//! Symbol assertion helpers.

use lexis::hir::{Symbol, SymbolKind};

/// Find a symbol by name, panicking with the full list when absent.
pub fn get_symbol<'a>(symbols: &'a [Symbol], name: &str) -> &'a Symbol {
    symbols
        .iter()
        .find(|s| s.name.as_ref() == name)
        .unwrap_or_else(|| panic!("Expected symbol '{}' in {:?}", name, names(symbols)))
}

/// Assert a symbol exists with the given kind and start line.
pub fn assert_symbol(symbols: &[Symbol], name: &str, kind: SymbolKind, line: u32) {
    let symbol = get_symbol(symbols, name);
    assert_eq!(
        (symbol.kind, symbol.start_line),
        (kind, line),
        "Unexpected kind/line for '{}'",
        name
    );
}

/// Assert no symbol has the given name.
pub fn assert_no_symbol(symbols: &[Symbol], name: &str) {
    assert!(
        symbols.iter().all(|s| s.name.as_ref() != name),
        "Did not expect symbol '{}' in {:?}",
        name,
        names(symbols)
    );
}

/// Symbol names in order.
pub fn names(symbols: &[Symbol]) -> Vec<&str> {
    symbols.iter().map(|s| s.name.as_ref()).collect()
}
