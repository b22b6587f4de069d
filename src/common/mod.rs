//! Common types and utilities shared by the RTF engine and its front ends.
//!
//! This module holds the crate-wide error type and the helpers that turn raw
//! document bytes into the character sequence the converter consumes.

// Submodule declarations
pub mod bom;
pub mod encoding;
pub mod error;

// Re-exports for convenience
pub use bom::{BomKind, detect_bom, strip_bom};
pub use encoding::{codepage_to_encoding, decode_text};
pub use error::{Error, Result};
