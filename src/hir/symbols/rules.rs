//! The declaration rule table.
//!
//! One table drives every consumer that needs to know "which keyword
//! declares what": the symbol extractor and the semantic token emitter.

use super::types::SymbolKind;

/// How the name following a declaration keyword is read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameReader {
    /// A single identifier.
    Simple,
    /// Identifiers joined by `::` or `.` (`a::b`, `a.b.c`).
    Qualified,
}

/// How a declaration keyword introduces a symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeclarationRule {
    pub keyword: &'static str,
    pub kind: SymbolKind,
    /// The declaration may own a `{ ... }` body.
    pub expect_body: bool,
    /// A trailing `;` in place of the body is legal (`mod m;`, `fn f();`).
    pub allow_bodyless: bool,
    pub name: NameReader,
}

const fn rule(
    keyword: &'static str,
    kind: SymbolKind,
    expect_body: bool,
    allow_bodyless: bool,
    name: NameReader,
) -> DeclarationRule {
    DeclarationRule {
        keyword,
        kind,
        expect_body,
        allow_bodyless,
        name,
    }
}

/// Every recognized declaration keyword.
pub const DECLARATIONS: &[DeclarationRule] = &[
    rule("mod", SymbolKind::Module, true, true, NameReader::Qualified),
    rule("module", SymbolKind::Module, true, true, NameReader::Qualified),
    rule("namespace", SymbolKind::Namespace, true, true, NameReader::Qualified),
    rule("struct", SymbolKind::Struct, true, false, NameReader::Simple),
    rule("union", SymbolKind::Struct, true, false, NameReader::Simple),
    rule("enum", SymbolKind::Enum, true, false, NameReader::Simple),
    rule("trait", SymbolKind::Interface, true, false, NameReader::Simple),
    rule("interface", SymbolKind::Interface, true, false, NameReader::Simple),
    rule("class", SymbolKind::Class, true, false, NameReader::Simple),
    rule("type", SymbolKind::TypeParameter, false, false, NameReader::Simple),
    rule("fn", SymbolKind::Function, true, true, NameReader::Simple),
    rule("const", SymbolKind::Constant, false, false, NameReader::Simple),
    rule("static", SymbolKind::Variable, false, false, NameReader::Simple),
];

/// Look up the rule for a (case-sensitive, lowercase) keyword.
pub fn declaration_rule(keyword: &str) -> Option<&'static DeclarationRule> {
    DECLARATIONS.iter().find(|rule| rule.keyword == keyword)
}
