//! Shared test helpers.

#![allow(dead_code)]

pub mod host_helpers;
pub mod source_fixtures;
pub mod symbol_assertions;
