//! Helpers for working with extracted text.
//!
//! Keyword lookups used to classify documents after extraction (`text`
//! feature), and a sanitiser that makes text safe to embed in XML.

mod sanitize;
#[cfg(feature = "text")]
mod search;

pub use sanitize::{is_xml_char, sanitize_xml_text};
#[cfg(feature = "text")]
pub use search::{contains_any, matches_any_rule};
