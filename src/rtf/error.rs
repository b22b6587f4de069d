//! Error types for RTF conversion.

use thiserror::Error;

/// Result type for RTF operations.
pub type RtfResult<T> = Result<T, RtfError>;

/// RTF conversion errors.
///
/// Unbalanced closing braces and unknown control words are tolerated by the
/// converter and never surface here.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RtfError {
    /// A control word that needs a numeric argument has none, or the argument
    /// is out of range (`\uc`, `\u`).
    #[error("Invalid argument for control word \\{word} at byte {position}")]
    InvalidControlArgument {
        /// Control word name, without the leading backslash
        word: String,
        /// Byte offset of the control word in the source
        position: usize,
    },
}
