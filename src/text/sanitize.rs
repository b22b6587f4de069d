//! Removal of characters that XML 1.0 cannot carry.

/// Whether `ch` may appear in an XML 1.0 document.
#[inline]
pub fn is_xml_char(ch: char) -> bool {
    matches!(
        ch,
        '\t' | '\n' | '\r'
            | '\u{20}'..='\u{D7FF}'
            | '\u{E000}'..='\u{FFFD}'
            | '\u{10000}'..='\u{10FFFF}'
    )
}

/// Drop every character that is not allowed in XML 1.0.
///
/// Extracted text often carries control characters (form feeds, vertical
/// tabs, stray NULs) that make XML writers fail.
///
/// # Examples
///
/// ```
/// use contexto::text::sanitize_xml_text;
///
/// assert_eq!(sanitize_xml_text("page\u{0C}break\u{0}"), "pagebreak");
/// assert_eq!(sanitize_xml_text("tab\tkept"), "tab\tkept");
/// ```
pub fn sanitize_xml_text(text: &str) -> String {
    text.chars().filter(|&ch| is_xml_char(ch)).collect()
}
