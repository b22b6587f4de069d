//! Character encoding utilities.
//!
//! RTF readers hand the converter a character sequence, not bytes. This module
//! turns file contents into text: a BOM wins, then strict UTF-8, then a legacy
//! Windows code page chosen by the caller.

use super::bom::strip_bom;
use encoding_rs::Encoding;
use std::borrow::Cow;
use tracing::debug;

/// Map a Windows code page identifier to an `encoding_rs` encoding.
///
/// Covers the code pages that appear in `\ansicpg` declarations of RTF files
/// written by Word, WordPad and TextEdit.
///
/// # Examples
/// ```
/// use contexto::common::encoding::codepage_to_encoding;
///
/// let encoding = codepage_to_encoding(1252).unwrap();
/// assert_eq!(encoding.name(), "windows-1252");
/// assert!(codepage_to_encoding(12345).is_none());
/// ```
#[inline]
pub fn codepage_to_encoding(codepage: u32) -> Option<&'static Encoding> {
    match codepage {
        // DOS Cyrillic; 437 and 850 have no encoding_rs equivalent
        866 => Some(encoding_rs::IBM866),

        // Windows, western and middle-eastern scripts
        874 => Some(encoding_rs::WINDOWS_874),
        1250 => Some(encoding_rs::WINDOWS_1250),
        1251 => Some(encoding_rs::WINDOWS_1251),
        1252 => Some(encoding_rs::WINDOWS_1252),
        1253 => Some(encoding_rs::WINDOWS_1253),
        1254 => Some(encoding_rs::WINDOWS_1254),
        1255 => Some(encoding_rs::WINDOWS_1255),
        1256 => Some(encoding_rs::WINDOWS_1256),
        1257 => Some(encoding_rs::WINDOWS_1257),
        1258 => Some(encoding_rs::WINDOWS_1258),

        // East Asian
        932 => Some(encoding_rs::SHIFT_JIS),
        936 => Some(encoding_rs::GBK),
        949 => Some(encoding_rs::EUC_KR),
        950 => Some(encoding_rs::BIG5),
        54936 => Some(encoding_rs::GB18030),

        // ISO 8859
        28591 => Some(encoding_rs::WINDOWS_1252),
        28592 => Some(encoding_rs::ISO_8859_2),
        28595 => Some(encoding_rs::ISO_8859_5),
        28597 => Some(encoding_rs::ISO_8859_7),
        28605 => Some(encoding_rs::ISO_8859_15),

        // Macintosh
        10000 => Some(encoding_rs::MACINTOSH),

        // Unicode
        1200 => Some(encoding_rs::UTF_16LE),
        1201 => Some(encoding_rs::UTF_16BE),
        65001 => Some(encoding_rs::UTF_8),

        _ => None,
    }
}

/// Decode raw document bytes into text.
///
/// Returns the decoded text and the encoding that produced it. Valid UTF-8
/// without a BOM is borrowed as-is; anything else is decoded with `fallback`
/// and malformed sequences become U+FFFD.
pub fn decode_text<'a>(
    bytes: &'a [u8],
    fallback: &'static Encoding,
) -> (Cow<'a, str>, &'static Encoding) {
    let (bom, payload) = strip_bom(bytes);
    if let Some(kind) = bom {
        let encoding = kind.encoding();
        return (encoding.decode_without_bom_handling(payload).0, encoding);
    }

    match std::str::from_utf8(payload) {
        Ok(text) => (Cow::Borrowed(text), encoding_rs::UTF_8),
        Err(err) => {
            debug!(
                valid_up_to = err.valid_up_to(),
                encoding = fallback.name(),
                "input is not valid UTF-8, decoding with fallback encoding"
            );
            (fallback.decode_without_bom_handling(payload).0, fallback)
        },
    }
}
