//! Byte and file front end for the converter.
//!
//! [`convert_rtf_to_text`] works on text. Documents on disk are bytes, so
//! [`RtfReader`] decodes them first (BOM, then UTF-8, then a configurable
//! legacy code page), applies the configured size limit and hands the text
//! to the converter.

use super::converter::convert_rtf_to_text;
use crate::common::encoding::{codepage_to_encoding, decode_text};
use crate::common::{Error, Result};
use encoding_rs::Encoding;
use std::io::Read;
use std::path::Path;
use tracing::debug;

/// Signature every RTF document starts with.
const RTF_HEADER: &str = "{\\rtf";

/// Check whether `bytes` look like an RTF document.
///
/// The bytes are decoded the way [`RtfReader`] decodes them (BOM, UTF-8,
/// Windows-1252), then leading whitespace is skipped before looking for the
/// `{\rtf` header. UTF-16 documents with a BOM are recognised.
///
/// # Examples
///
/// ```
/// use contexto::rtf::is_rtf;
///
/// assert!(is_rtf(b"{\\rtf1\\ansi Hello}"));
/// assert!(is_rtf(b"\xEF\xBB\xBF\r\n{\\rtf1}"));
/// assert!(!is_rtf(b"Hello"));
/// ```
pub fn is_rtf(bytes: &[u8]) -> bool {
    let (text, _) = decode_text(bytes, encoding_rs::WINDOWS_1252);
    has_rtf_header(&text)
}

#[inline]
fn has_rtf_header(text: &str) -> bool {
    text.trim_start_matches(|ch: char| ch.is_ascii_whitespace())
        .starts_with(RTF_HEADER)
}

/// Configuration for [`RtfReader`].
///
/// # Examples
///
/// ```rust
/// use contexto::rtf::RtfReadOptions;
///
/// let options = RtfReadOptions::new()
///     .with_max_input_len(Some(10 * 1024 * 1024))
///     .with_require_header(true)
///     .with_codepage(1251)?;
/// # Ok::<(), contexto::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct RtfReadOptions {
    /// Reject inputs larger than this many bytes
    pub max_input_len: Option<usize>,
    /// Encoding for input that has no BOM and is not valid UTF-8
    pub fallback_encoding: &'static Encoding,
    /// Reject input that does not start with `{\rtf`
    pub require_header: bool,
}

impl Default for RtfReadOptions {
    fn default() -> Self {
        Self {
            max_input_len: None,
            fallback_encoding: encoding_rs::WINDOWS_1252,
            require_header: false,
        }
    }
}

impl RtfReadOptions {
    /// Create options with default values.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the maximum accepted input size in bytes.
    #[inline]
    pub fn with_max_input_len(mut self, limit: Option<usize>) -> Self {
        self.max_input_len = limit;
        self
    }

    /// Set the fallback encoding directly.
    #[inline]
    pub fn with_fallback_encoding(mut self, encoding: &'static Encoding) -> Self {
        self.fallback_encoding = encoding;
        self
    }

    /// Set the fallback encoding from a Windows code page number.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidFormat`] for code pages without a known encoding.
    pub fn with_codepage(mut self, codepage: u32) -> Result<Self> {
        self.fallback_encoding = codepage_to_encoding(codepage)
            .ok_or_else(|| Error::InvalidFormat(format!("Unsupported code page: {codepage}")))?;
        Ok(self)
    }

    /// Require the `{\rtf` header.
    #[inline]
    pub fn with_require_header(mut self, require: bool) -> Self {
        self.require_header = require;
        self
    }
}

/// Reads RTF documents from bytes, readers or files and extracts their text.
///
/// # Examples
///
/// ```rust
/// use contexto::rtf::{RtfReadOptions, RtfReader};
///
/// let reader = RtfReader::new(RtfReadOptions::default());
/// let text = reader.read_bytes(b"{\\rtf1\\ansi caf\\'e9}")?;
/// assert_eq!(text, "caf\u{e9}");
/// # Ok::<(), contexto::Error>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct RtfReader {
    options: RtfReadOptions,
}

impl RtfReader {
    /// Create a reader with the given options.
    #[inline]
    pub fn new(options: RtfReadOptions) -> Self {
        Self { options }
    }

    /// Options in use.
    #[inline]
    pub fn options(&self) -> &RtfReadOptions {
        &self.options
    }

    /// Extract text from an in-memory document.
    pub fn read_bytes(&self, bytes: &[u8]) -> Result<String> {
        self.check_size(bytes.len())?;

        let (source, encoding) = decode_text(bytes, self.options.fallback_encoding);
        debug!(len = bytes.len(), encoding = encoding.name(), "decoded RTF source");

        if self.options.require_header && !has_rtf_header(&source) {
            return Err(Error::InvalidFormat(
                "Missing {\\rtf header".to_string(),
            ));
        }

        Ok(convert_rtf_to_text(&source)?)
    }

    /// Extract text from everything `reader` yields.
    ///
    /// With a size limit configured, reading stops one byte past the limit so
    /// oversized streams are rejected without being buffered whole.
    pub fn read_from<R: Read>(&self, mut reader: R) -> Result<String> {
        let mut bytes = Vec::new();
        match self.options.max_input_len {
            Some(limit) => {
                let cap = u64::try_from(limit).unwrap_or(u64::MAX).saturating_add(1);
                reader.take(cap).read_to_end(&mut bytes)?;
            },
            None => {
                reader.read_to_end(&mut bytes)?;
            },
        }
        self.read_bytes(&bytes)
    }

    /// Extract text from a file.
    pub fn read_file<P: AsRef<Path>>(&self, path: P) -> Result<String> {
        let path = path.as_ref();
        if let Some(limit) = self.options.max_input_len {
            let size = std::fs::metadata(path)?.len();
            let size = usize::try_from(size).unwrap_or(usize::MAX);
            if size > limit {
                return Err(Error::InputTooLarge { size, limit });
            }
        }
        let bytes = std::fs::read(path)?;
        self.read_bytes(&bytes)
    }

    fn check_size(&self, size: usize) -> Result<()> {
        match self.options.max_input_len {
            Some(limit) if size > limit => Err(Error::InputTooLarge { size, limit }),
            _ => Ok(()),
        }
    }
}
