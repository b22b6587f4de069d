//! RTF lexer/tokenizer.
//!
//! Splits RTF source into control words, hex escapes, control symbols, group
//! delimiters and literal characters. The lexer never fails: every input
//! position belongs to exactly one token, and runs of line breaks are dropped.

/// Maximum number of letters in a control word name.
const MAX_WORD_LEN: usize = 32;

/// Maximum number of digits in a control word argument.
const MAX_ARG_DIGITS: usize = 10;

/// Token types.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token<'a> {
    /// `\name` or `\nameN`, e.g. `\par`, `\u8212`
    ControlWord { name: &'a str, arg: Option<i64> },
    /// `\'XX`
    HexEscape(u8),
    /// Backslash followed by a single non-letter character
    ControlSymbol(char),
    /// Opening brace
    BraceOpen,
    /// Closing brace
    BraceClose,
    /// Any other character
    Literal(char),
}

/// Single-pass RTF lexer.
///
/// Tokens are produced lazily through the [`Iterator`] implementation. The
/// byte offset of the most recently returned token is available from
/// [`Lexer::offset`].
pub struct Lexer<'a> {
    /// Source input
    input: &'a str,
    /// Current position in bytes
    pos: usize,
    /// Start of the last token returned
    token_start: usize,
}

impl<'a> Lexer<'a> {
    /// Create a new lexer.
    #[inline]
    pub fn new(input: &'a str) -> Self {
        Self {
            input,
            pos: 0,
            token_start: 0,
        }
    }

    /// Byte offset where the last returned token starts.
    #[inline]
    pub fn offset(&self) -> usize {
        self.token_start
    }

    /// Parse whatever follows a backslash at `self.pos`.
    fn lex_escape(&mut self) -> Token<'a> {
        let input = self.input;
        let bytes = input.as_bytes();
        let after = self.pos + 1;

        if let Some(token) = self.lex_control_word(after) {
            return token;
        }

        if bytes.get(after) == Some(&b'\'')
            && let Some(byte) = self.hex_pair(after + 1)
        {
            self.pos = after + 3;
            return Token::HexEscape(byte);
        }

        match input[after..].chars().next() {
            Some(ch) => {
                self.pos = after + ch.len_utf8();
                Token::ControlSymbol(ch)
            },
            None => {
                // Trailing backslash: nothing left to escape
                self.pos = after;
                Token::Literal('\\')
            },
        }
    }

    /// Letters, optional signed argument and an optional space delimiter.
    fn lex_control_word(&mut self, start: usize) -> Option<Token<'a>> {
        let input = self.input;
        let bytes = input.as_bytes();

        let name_len = bytes[start..]
            .iter()
            .take(MAX_WORD_LEN)
            .take_while(|b| b.is_ascii_alphabetic())
            .count();
        if name_len == 0 {
            return None;
        }
        let name_end = start + name_len;
        let name = &input[start..name_end];

        let sign_len = usize::from(
            bytes.get(name_end) == Some(&b'-')
                && bytes.get(name_end + 1).is_some_and(u8::is_ascii_digit),
        );
        let digits_start = name_end + sign_len;
        let digit_len = bytes[digits_start..]
            .iter()
            .take(MAX_ARG_DIGITS)
            .take_while(|b| b.is_ascii_digit())
            .count();

        let (arg, mut end) = if digit_len == 0 {
            (None, name_end)
        } else {
            let digits_end = digits_start + digit_len;
            // At most ten digits and a sign always fit in an i64
            let arg = input[name_end..digits_end].parse::<i64>().ok();
            (arg, digits_end)
        };

        if bytes.get(end) == Some(&b' ') {
            end += 1;
        }

        self.pos = end;
        Some(Token::ControlWord { name, arg })
    }

    /// Decode two hex digits at `start`, if present.
    fn hex_pair(&self, start: usize) -> Option<u8> {
        let pair = self.input.as_bytes().get(start..start + 2)?;
        if !pair.iter().all(u8::is_ascii_hexdigit) {
            return None;
        }
        let hi = (pair[0] as char).to_digit(16)?;
        let lo = (pair[1] as char).to_digit(16)?;
        u8::try_from(hi * 16 + lo).ok()
    }

    /// Skip a run of carriage returns and line feeds.
    #[inline]
    fn skip_line_breaks(&mut self) {
        let input = self.input;
        let bytes = input.as_bytes();
        while matches!(bytes.get(self.pos), Some(b'\r' | b'\n')) {
            self.pos += 1;
        }
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Token<'a>> {
        self.skip_line_breaks();

        let input = self.input;
        let ch = input[self.pos..].chars().next()?;
        self.token_start = self.pos;

        let token = match ch {
            '\\' => return Some(self.lex_escape()),
            '{' => Token::BraceOpen,
            '}' => Token::BraceClose,
            _ => Token::Literal(ch),
        };
        self.pos += ch.len_utf8();
        Some(token)
    }
}
