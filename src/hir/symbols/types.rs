//! Public type definitions for symbol extraction.
//!
//! Contains `Symbol` and `SymbolKind`, the values every later stage
//! (document outline, workspace index, queries) is built from.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::base::{Position, Range};

// ============================================================================
// SYMBOL KIND
// ============================================================================

/// The kind of a symbol.
///
/// Discriminants match the editor protocol's `SymbolKind` numbering and are
/// serialized as plain integers. Never renumber them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "u32", try_from = "u32")]
#[repr(u32)]
pub enum SymbolKind {
    Module = 2,
    Namespace = 3,
    Class = 5,
    Method = 6,
    Property = 7,
    Field = 8,
    Constructor = 9,
    Enum = 10,
    Interface = 11,
    Function = 12,
    Variable = 13,
    Constant = 14,
    Struct = 23,
    TypeParameter = 26,
}

/// A serialized kind value outside the supported set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("unknown symbol kind: {0}")]
pub struct UnknownSymbolKind(pub u32);

impl SymbolKind {
    /// The protocol integer for this kind.
    pub fn lsp_value(self) -> u32 {
        self as u32
    }

    /// Returns true for kinds that introduce a type (and so own methods).
    pub fn is_type_like(self) -> bool {
        matches!(
            self,
            SymbolKind::Class
                | SymbolKind::Struct
                | SymbolKind::Enum
                | SymbolKind::Interface
                | SymbolKind::TypeParameter
        )
    }

    /// Ordering used to break ties between equally scored symbols.
    ///
    /// Lower is better: namespaces, then types, then callables, then
    /// members, then values.
    pub fn rank(self) -> u8 {
        match self {
            SymbolKind::Module | SymbolKind::Namespace => 0,
            SymbolKind::Class
            | SymbolKind::Struct
            | SymbolKind::Enum
            | SymbolKind::Interface
            | SymbolKind::TypeParameter => 1,
            SymbolKind::Function | SymbolKind::Method | SymbolKind::Constructor => 2,
            SymbolKind::Property | SymbolKind::Field => 3,
            SymbolKind::Variable | SymbolKind::Constant => 4,
        }
    }

    /// Get a display label for this kind.
    pub fn display(self) -> &'static str {
        match self {
            SymbolKind::Module => "module",
            SymbolKind::Namespace => "namespace",
            SymbolKind::Class => "class",
            SymbolKind::Method => "method",
            SymbolKind::Property => "property",
            SymbolKind::Field => "field",
            SymbolKind::Constructor => "constructor",
            SymbolKind::Enum => "enum",
            SymbolKind::Interface => "interface",
            SymbolKind::Function => "function",
            SymbolKind::Variable => "variable",
            SymbolKind::Constant => "constant",
            SymbolKind::Struct => "struct",
            SymbolKind::TypeParameter => "type",
        }
    }
}

impl From<SymbolKind> for u32 {
    fn from(kind: SymbolKind) -> Self {
        kind.lsp_value()
    }
}

impl TryFrom<u32> for SymbolKind {
    type Error = UnknownSymbolKind;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Ok(match value {
            2 => SymbolKind::Module,
            3 => SymbolKind::Namespace,
            5 => SymbolKind::Class,
            6 => SymbolKind::Method,
            7 => SymbolKind::Property,
            8 => SymbolKind::Field,
            9 => SymbolKind::Constructor,
            10 => SymbolKind::Enum,
            11 => SymbolKind::Interface,
            12 => SymbolKind::Function,
            13 => SymbolKind::Variable,
            14 => SymbolKind::Constant,
            23 => SymbolKind::Struct,
            26 => SymbolKind::TypeParameter,
            other => return Err(UnknownSymbolKind(other)),
        })
    }
}

// ============================================================================
// SYMBOL
// ============================================================================

/// A declaration found in a document.
///
/// The start position is the position of the declared *name*. The end
/// position is set only when the declaration's `{ ... }` body was closed;
/// declarations without a body, or whose body never closed, have none.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Symbol {
    /// Symbol name. Module names may be qualified (`a::b`, `a.b`).
    pub name: Arc<str>,
    pub kind: SymbolKind,
    /// Identifier (URI) of the document declaring the symbol.
    pub document_id: Arc<str>,
    pub start_line: u32,
    pub start_char: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_line: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_char: Option<u32>,
    /// Name of the enclosing symbol. A weak reference: resolved by name
    /// lookup, never an owning pointer.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub container_name: Option<Arc<str>>,
}

impl Symbol {
    pub fn start(&self) -> Position {
        Position::new(self.start_line, self.start_char)
    }

    /// End of the body, if the body was closed.
    pub fn end(&self) -> Option<Position> {
        Some(Position::new(self.end_line?, self.end_char?))
    }

    /// Range covering the name only.
    pub fn selection_range(&self) -> Range {
        let len = self.name.chars().count() as u32;
        Range::new(
            self.start(),
            Position::new(self.start_line, self.start_char + len),
        )
    }

    /// Range from the name to the end of the body, or the name range when
    /// there is no closed body.
    pub fn range(&self) -> Range {
        match self.end() {
            Some(end) => Range::new(self.start(), end),
            None => self.selection_range(),
        }
    }

    /// Does the declaration enclose `position`?
    ///
    /// A declaration without an end is treated as open to the end of file.
    pub fn encloses(&self, position: Position) -> bool {
        position >= self.start() && self.end().is_none_or(|end| position < end)
    }

    /// Identity used for deduplication.
    pub fn dedup_key(&self) -> (SymbolKind, &str, u32, u32) {
        (self.kind, &self.name, self.start_line, self.start_char)
    }
}
