//! Symbol model: everything derived from masked text.
//!
//! ## Key Types
//!
//! - [`Symbol`]: A declaration with its location and container
//! - [`DocumentIndex`]: Flat list, name multimap and outline for one document version
//! - [`DocumentCache`]: Version-keyed cache of document indexes
//! - [`WorkspaceIndex`]: Workspace-wide document → symbols map, with snapshots
//!
//! ## Layers
//!
//! ```text
//! text                      ← INPUT: raw source text
//!     │
//!     ▼
//! scan(text)                ← Mask + skipped spans
//!     │
//!     ▼
//! extract_symbols           ← Symbols (per document)
//!     │
//!     ├──▶ DocumentIndex    ← outline, by-name lookup (cached per version)
//!     │
//!     └──▶ WorkspaceIndex   ← workspace-wide search, snapshots
//! ```

mod document;
mod symbols;
mod workspace;

pub use document::{DocumentCache, DocumentIndex, OutlineNode};
pub(crate) use symbols::{helpers, read_name};
pub use symbols::{
    DECLARATIONS, DeclarationRule, NameReader, Symbol, SymbolKind, UnknownSymbolKind,
    declaration_rule, extract_symbols, extract_symbols_from_text,
};
pub use workspace::{SNAPSHOT_VERSION, Snapshot, SnapshotEntry, WorkspaceIndex};
