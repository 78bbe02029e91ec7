//! # lexis-base
//!
//! Parser-free source intelligence for an editor server: a comment/string
//! masking scanner, keyword-driven symbol extraction, document and
//! workspace indexes, navigation, search and semantic highlighting.
//!
//! Everything works on partial and syntactically invalid text; there is no
//! grammar and no syntax tree.
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! ide       → IDE features (outline, search, goto-def, references, rename, tokens)
//!   ↓
//! project   → Workspace loading, snapshot files, configuration
//!   ↓
//! hir       → Symbols, document index and cache, workspace index
//!   ↓
//! scan      → Masking scanner (code vs. comment/string)
//!   ↓
//! base      → Primitives (Position, Range, LineIndex, keywords, text utils)
//! ```

// ============================================================================
// MODULES (dependency order: base → scan → hir → project → ide)
// ============================================================================

/// Foundation types: positions, line index, reserved words
pub mod base;

/// Masking scanner
pub mod scan;

/// Symbol model: extraction, per-document and workspace indexes
pub mod hir;

/// Project management: configuration, workspace loading, snapshot files
pub mod project;

/// IDE features: outline, workspace symbols, goto-definition, references,
/// rename, semantic tokens, folding
pub mod ide;

// Re-export commonly needed items
pub use base::keywords;

// Re-export foundation types
pub use base::{LineIndex, Position, Range};
