//! Contexto - plain-text extraction from Rich Text Format documents
//!
//! This library turns RTF sources into the plain text that downstream text
//! processing (vectorizers, indexers, classifiers) consumes.
//!
//! # Features
//!
//! - **RTF converter**: hand-written lexer and group-scoped state machine that
//!   keeps visible text only, with correct `\uc`/`\u` fallback handling
//! - **Byte and file readers**: BOM, UTF-8 and legacy code page decoding with
//!   optional size limits
//! - **Text helpers**: XML sanitising, plus multi-keyword search behind the
//!   `text` feature (on by default)
//!
//! # Example - Converting an RTF string
//!
//! ```
//! use contexto::convert_rtf_to_text;
//!
//! let rtf = r"{\rtf1\ansi{\fonttbl{\f0 Arial;}}\f0 Hello\par World}";
//! assert_eq!(convert_rtf_to_text(rtf)?, "Hello\nWorld");
//! # Ok::<(), contexto::rtf::RtfError>(())
//! ```
//!
//! # Example - Reading an RTF file
//!
//! ```no_run
//! use contexto::{RtfReadOptions, RtfReader};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let reader = RtfReader::new(RtfReadOptions::new().with_max_input_len(Some(50 << 20)));
//! let text = reader.read_file("document.rtf")?;
//! println!("{text}");
//! # Ok(())
//! # }
//! ```

/// Shared error type and byte decoding utilities
pub mod common;

/// RTF to plain text conversion
pub mod rtf;

/// Sanitising and keyword search helpers for extracted text
pub mod text;

// Re-export commonly used types for convenience
pub use common::{Error, Result};
pub use rtf::{RtfError, RtfReadOptions, RtfReader, convert_rtf_to_text};
