//! Reserved words of the recognized source dialect.
//!
//! Declaration keywords (`fn`, `struct`, `mod`, ...) are reserved too; the
//! table describing how each one declares a symbol lives in
//! `hir::symbols::rules`.

/// All reserved keywords, sorted for binary search.
pub const RESERVED: &[&str] = &[
    "Self", "as", "async", "await", "break", "class", "const", "continue", "crate", "dyn", "else",
    "enum", "extern", "false", "fn", "for", "if", "impl", "in", "interface", "let", "loop",
    "match", "mod", "module", "move", "mut", "namespace", "pub", "ref", "return", "self",
    "static", "struct", "super", "trait", "true", "type", "union", "unsafe", "use", "where",
    "while",
];

/// The visibility modifier skipped in front of declarations.
pub const VISIBILITY: &str = "pub";

/// Check whether `word` is a reserved keyword.
#[inline]
pub fn is_reserved(word: &str) -> bool {
    RESERVED.binary_search(&word).is_ok()
}
