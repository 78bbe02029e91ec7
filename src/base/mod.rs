//! Foundation types for the lexis toolchain.
//!
//! This module provides fundamental types used throughout the engine:
//! - [`Position`], [`Range`] - Line/column positions
//! - [`LineIndex`] - Char offset ↔ line/column conversion
//! - [`keywords`] - Reserved words
//! - [`text_utils`] - Identifier and word-boundary helpers
//!
//! This module has NO dependencies on other lexis modules.

pub mod keywords;
mod position;
pub mod text_utils;

pub use position::{LineIndex, Position, Range};
