//! Foundation types for FOLIO.
//!
//! This crate contains the platform-agnostic core types shared by all FOLIO
//! crates: colors, error types, and the flat key-value settings store.

pub mod color;
pub mod error;
pub mod settings;
