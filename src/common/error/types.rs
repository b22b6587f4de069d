//! Unified error types for contexto.
//!
//! The RTF engine reports its own [`RtfError`](crate::rtf::RtfError); the
//! byte and file front ends wrap it together with I/O and decoding failures.
use thiserror::Error;

/// Main error type for contexto operations.
#[derive(Error, Debug)]
pub enum Error {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The RTF converter rejected the document
    #[error("RTF error: {0}")]
    Rtf(#[from] crate::rtf::RtfError),

    /// Input exceeds the configured size limit
    #[error("Input too large: {size} bytes exceeds the limit of {limit} bytes")]
    InputTooLarge { size: usize, limit: usize },

    /// Input is not in the expected format
    #[error("Invalid format: {0}")]
    InvalidFormat(String),
}

/// Result type for contexto operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rtf::RtfError;

    #[test]
    fn test_rtf_error_is_wrapped() {
        let err: Error = RtfError::InvalidControlArgument {
            word: "uc".to_string(),
            position: 7,
        }
        .into();

        assert!(matches!(err, Error::Rtf(RtfError::InvalidControlArgument { position: 7, .. })));
        assert_eq!(
            err.to_string(),
            "RTF error: Invalid argument for control word \\uc at byte 7"
        );
    }
}
