//! IDE layer tests
//!
//! Tests for the request-level features built on the symbol model.

pub mod tests_folding;
pub mod tests_goto;
pub mod tests_references;
pub mod tests_semantic_tokens;
pub mod tests_symbols;
