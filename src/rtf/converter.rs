//! RTF to plain text conversion.
//!
//! The converter walks the token stream once, applying each token to a
//! [`ParserState`] as soon as it is lexed, so `\ucN` takes effect for the
//! tokens that follow it in the same group.
//!
//! Only visible text survives. Formatting control words are dropped, and
//! everything inside destination groups (font and color tables, pictures,
//! document properties, `\*` extension groups) is discarded.
//!
//! # Known limitation
//!
//! Hex escapes (`\'XX`) are decoded as Latin-1 code points regardless of the
//! document's `\ansicpg`, so `\'93` yields U+0093 rather than a curly quote.

use super::error::{RtfError, RtfResult};
use super::lexer::{Lexer, Token};
use super::state::ParserState;
use super::tables::{is_destination, special_char};
use tracing::{debug, trace};

const HIGH_SURROGATES: std::ops::RangeInclusive<u32> = 0xD800..=0xDBFF;
const LOW_SURROGATES: std::ops::RangeInclusive<u32> = 0xDC00..=0xDFFF;

/// Extract the visible text of an RTF document.
///
/// Paragraph and line breaks become `\n`, section and page breaks `\n\n`,
/// and `\tab` a tab character. Text that contains no RTF syntax is returned
/// unchanged, except that carriage returns and line feeds are dropped.
///
/// # Errors
///
/// Returns [`RtfError::InvalidControlArgument`] when `\uc` or `\u` lacks a
/// numeric argument, or when a `\u` argument is not a valid code point. No
/// partial output is returned in that case.
///
/// # Examples
///
/// ```
/// use contexto::rtf::convert_rtf_to_text;
///
/// let text = convert_rtf_to_text(r"{\rtf1\ansi{\fonttbl{\f0 Arial;}}Hello\par W\u246?rld}")?;
/// assert_eq!(text, "Hello\nW\u{f6}rld");
/// # Ok::<(), contexto::rtf::RtfError>(())
/// ```
pub fn convert_rtf_to_text(source: &str) -> RtfResult<String> {
    let mut lexer = Lexer::new(source);
    let mut state = ParserState::with_capacity(source.len());

    while let Some(token) = lexer.next() {
        apply_token(&mut state, token, lexer.offset())?;
    }

    if state.depth() > 0 {
        debug!(unclosed_groups = state.depth(), "document ended inside a group");
    }

    let text = state.into_output();
    trace!(
        input_len = source.len(),
        output_len = text.len(),
        "converted RTF to text"
    );
    Ok(text)
}

/// Apply a single token to the parser state.
fn apply_token(state: &mut ParserState, token: Token<'_>, position: usize) -> RtfResult<()> {
    match token {
        Token::BraceOpen => {
            state.flush_high_surrogate();
            state.push_scope();
        },
        Token::BraceClose => {
            state.flush_high_surrogate();
            if !state.pop_scope() {
                debug!(position, "ignoring unbalanced closing brace");
            }
        },
        Token::ControlSymbol(symbol) => {
            state.flush_high_surrogate();
            state.clear_fallback();
            apply_control_symbol(state, symbol);
        },
        Token::ControlWord { name, arg } => {
            state.clear_fallback();
            apply_control_word(state, name, arg, position)?;
        },
        Token::HexEscape(byte) => apply_literal(state, char::from(byte)),
        Token::Literal(ch) => apply_literal(state, ch),
    }
    Ok(())
}

fn apply_control_symbol(state: &mut ParserState, symbol: char) {
    match symbol {
        '*' => state.mark_ignorable(),
        '~' if !state.is_ignorable() => state.push_char('\u{00A0}'),
        '{' | '}' | '\\' if !state.is_ignorable() => state.push_char(symbol),
        _ => {},
    }
}

fn apply_control_word(
    state: &mut ParserState,
    name: &str,
    arg: Option<i64>,
    position: usize,
) -> RtfResult<()> {
    if is_destination(name) {
        state.flush_high_surrogate();
        state.mark_ignorable();
        return Ok(());
    }
    if state.is_ignorable() {
        return Ok(());
    }
    if name == "u" {
        return apply_unicode(state, arg, position);
    }

    state.flush_high_surrogate();
    if let Some(text) = special_char(name) {
        state.push_str(text);
    } else if name == "uc" {
        let width = arg.ok_or_else(|| invalid_argument(name, position))?;
        // Negative widths disable fallback skipping
        state.set_unicode_skip_width(usize::try_from(width.max(0)).unwrap_or(usize::MAX));
    }
    Ok(())
}

/// `\uN`: emit the code point, then skip the fallback representation.
///
/// Arguments above `0x7FFF` are written as negative 16-bit values. UTF-16
/// surrogate pairs spread over two `\u` words are joined into one character.
fn apply_unicode(state: &mut ParserState, arg: Option<i64>, position: usize) -> RtfResult<()> {
    let mut code = arg.ok_or_else(|| invalid_argument("u", position))?;
    if code < 0 {
        code += 0x10000;
    }
    let code = u32::try_from(code).map_err(|_| invalid_argument("u", position))?;

    if HIGH_SURROGATES.contains(&code) {
        state.flush_high_surrogate();
        state.hold_high_surrogate(code);
    } else if LOW_SURROGATES.contains(&code) {
        match state.take_high_surrogate() {
            Some(high) => {
                let combined = 0x10000 + ((high - 0xD800) << 10) + (code - 0xDC00);
                let ch = char::from_u32(combined).unwrap_or(char::REPLACEMENT_CHARACTER);
                state.push_char(ch);
            },
            None => state.push_char(char::REPLACEMENT_CHARACTER),
        }
    } else {
        state.flush_high_surrogate();
        let ch = char::from_u32(code).ok_or_else(|| invalid_argument("u", position))?;
        state.push_char(ch);
    }

    state.start_fallback();
    Ok(())
}

/// Plain characters and hex escapes: fallback skipping first, then visibility.
fn apply_literal(state: &mut ParserState, ch: char) {
    if state.take_fallback() || state.is_ignorable() {
        return;
    }
    state.flush_high_surrogate();
    state.push_char(ch);
}

#[inline]
fn invalid_argument(word: &str, position: usize) -> RtfError {
    RtfError::InvalidControlArgument {
        word: word.to_string(),
        position,
    }
}
