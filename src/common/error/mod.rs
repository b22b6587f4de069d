//! Unified error types for contexto.
//!
//! This module provides a single error type for the byte and file front ends,
//! presenting a consistent API to users.

// Submodule declarations
pub mod types;

// Re-exports
pub use types::{Error, Result};
