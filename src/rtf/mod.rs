//! RTF (Rich Text Format) to plain text conversion.
//!
//! A small hand-written engine that extracts the visible text of an RTF
//! document. It understands nested groups, destination groups, escaped
//! characters and Unicode escapes with their fallback characters; fonts,
//! colors, tables and all other formatting are discarded.
//!
//! # Architecture
//!
//! - **Lexer**: splits the source into control words, hex escapes, control
//!   symbols, braces and literal characters
//! - **State**: group-scoped attributes (`\uc` width, ignorable flag) saved
//!   and restored at brace boundaries
//! - **Tables**: compile-time sets of destination words and special characters
//! - **Converter**: applies tokens one at a time and accumulates the output
//! - **Reader**: decodes bytes and files before conversion
//!
//! # Example
//!
//! ```rust
//! use contexto::rtf::convert_rtf_to_text;
//!
//! let rtf = r"{\rtf1\ansi{\fonttbl\f0\fswiss Helvetica;}\f0\pard Hello World!\par}";
//! assert_eq!(convert_rtf_to_text(rtf)?, "Hello World!\n");
//! # Ok::<(), contexto::rtf::RtfError>(())
//! ```

mod converter;
mod error;
mod lexer;
mod reader;
mod state;
mod tables;

#[cfg(test)]
mod tests;

// Re-exports
pub use converter::convert_rtf_to_text;
pub use error::{RtfError, RtfResult};
pub use lexer::{Lexer, Token};
pub use reader::{RtfReadOptions, RtfReader, is_rtf};
pub use tables::{is_destination, special_char};
