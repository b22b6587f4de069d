//! Byte Order Mark (BOM) utilities.
//!
//! RTF sources are nominally 7-bit ASCII, but files produced by editors and
//! export tools sometimes carry a Unicode BOM. The readers strip it before
//! sniffing the header and decoding the text.

use encoding_rs::Encoding;

/// Supported BOM encodings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BomKind {
    Utf8,
    Utf16Le,
    Utf16Be,
}

impl BomKind {
    /// Returns the byte representation of the BOM.
    #[inline]
    pub const fn as_bytes(&self) -> &'static [u8] {
        match self {
            BomKind::Utf8 => &UTF8_BOM,
            BomKind::Utf16Le => &UTF16_LE_BOM,
            BomKind::Utf16Be => &UTF16_BE_BOM,
        }
    }

    /// Returns the length in bytes of the BOM.
    #[inline]
    #[allow(clippy::len_without_is_empty)] // No need to check for empty BOMs
    pub const fn len(&self) -> usize {
        self.as_bytes().len()
    }

    /// Returns the encoding announced by the BOM.
    #[inline]
    pub fn encoding(&self) -> &'static Encoding {
        match self {
            BomKind::Utf8 => encoding_rs::UTF_8,
            BomKind::Utf16Le => encoding_rs::UTF_16LE,
            BomKind::Utf16Be => encoding_rs::UTF_16BE,
        }
    }
}

/// UTF-8 BOM bytes.
pub const UTF8_BOM: [u8; 3] = [0xEF, 0xBB, 0xBF];
/// UTF-16 little-endian BOM bytes.
pub const UTF16_LE_BOM: [u8; 2] = [0xFF, 0xFE];
/// UTF-16 big-endian BOM bytes.
pub const UTF16_BE_BOM: [u8; 2] = [0xFE, 0xFF];

/// Detects a BOM at the start of `bytes`.
pub fn detect_bom(bytes: &[u8]) -> Option<BomKind> {
    if bytes.starts_with(&UTF8_BOM) {
        return Some(BomKind::Utf8);
    }
    if bytes.starts_with(&UTF16_LE_BOM) {
        return Some(BomKind::Utf16Le);
    }
    if bytes.starts_with(&UTF16_BE_BOM) {
        return Some(BomKind::Utf16Be);
    }
    None
}

/// Splits a leading BOM off `bytes`.
///
/// Returns the detected BOM kind together with the remaining payload. When no
/// BOM is found the input is returned untouched.
#[inline]
pub fn strip_bom(bytes: &[u8]) -> (Option<BomKind>, &[u8]) {
    match detect_bom(bytes) {
        Some(kind) => (Some(kind), &bytes[kind.len()..]),
        None => (None, bytes),
    }
}
