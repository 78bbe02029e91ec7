//! IDE features: High-level APIs for editor requests.
//!
//! This module provides the interface between the symbol model (HIR)
//! and an editor server. Each function corresponds to one request.
//!
//! ## Design Principles
//!
//! 1. **Pure functions**: Take data in, return data out
//! 2. **No protocol types**: Uses our own types, converted at the server boundary
//! 3. **Composable**: Built on top of HIR queries
//!
//! ## Usage
//!
//! The recommended way to use this module is through `AnalysisHost`:
//!
//! ```
//! use lexis::ide::AnalysisHost;
//!
//! let mut host = AnalysisHost::new();
//! host.open_document("file:///lib.rs", 1, "mod net {\n    fn connect() {}\n}\n");
//!
//! let analysis = host.analysis();
//! let outline = analysis.document_symbols("file:///lib.rs");
//! assert_eq!(outline[0].children[0].symbol.name.as_ref(), "connect");
//! ```

mod analysis;
mod cursor;
mod folding;
pub mod fuzzy;
mod goto;
mod references;
mod semantic_tokens;
mod symbols;

pub use analysis::{Analysis, AnalysisHost};
pub use folding::{FoldingKind, FoldingRange, folding_ranges};
pub use goto::{definition_at_position, workspace_definitions};
pub use references::{
    PrepareRename, TextEdit, prepare_rename, references_at_position, rename_symbol,
};
pub use semantic_tokens::{
    SemanticToken, TokenSpan, TokenType, encode_relative, semantic_spans, semantic_tokens,
};
pub use symbols::{SymbolMatch, document_symbols, search_workspace_symbols, workspace_symbols};
