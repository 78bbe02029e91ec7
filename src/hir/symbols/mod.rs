//! Symbol extraction from masked text: pure functions that return symbols.
//!
//! There is no grammar: declarations are recognized by keyword, names are
//! read with small char-level readers, and nesting is tracked with a
//! pending-body / brace-stack protocol.
//!
//! # Module structure
//!
//! - [`types`]: `Symbol` and `SymbolKind`
//! - [`rules`]: The declaration keyword table
//! - [`context`]: ExtractionContext: pending bodies, brace frames, containers
//! - [`helpers`]: Name, attribute and balanced-group readers
//! - [`extract`]: The extraction scan and body probe

mod context;
mod extract;
pub(crate) mod helpers;
pub mod rules;
mod types;


pub use extract::{extract_symbols, extract_symbols_from_text};
pub(crate) use extract::{extract_from_chars, read_name};
pub use rules::{DECLARATIONS, DeclarationRule, NameReader, declaration_rule};
pub use types::{Symbol, SymbolKind, UnknownSymbolKind};
