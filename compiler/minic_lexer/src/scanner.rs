//! Hand-written scanner producing owned [`Token`]s.
//!
//! The scanner skips whitespace, then dispatches on the first byte of the
//! next token. Each arm calls a focused method that advances the cursor and
//! builds the token from the consumed source text.
//!
//! Unrecognized input never fails the scan: it comes back as a
//! [`TokenKind::Unknown`] token for the consumer to reject or recover from.
//! Only allocation failure is reported as `Err`.

use tracing::{debug, trace};

use crate::cursor::{utf8_char_width, Cursor};
use crate::{keywords, LexError, Token, TokenKind};

/// Scanner over a borrowed source buffer.
///
/// Produces one token per [`next_token`](Self::next_token) call. Once the
/// input is exhausted, every further call returns [`TokenKind::Eof`]
/// without reading past the buffer.
pub struct Scanner<'a> {
    cursor: Cursor<'a>,
}

impl<'a> Scanner<'a> {
    /// Create a scanner at line 1, column 1.
    ///
    /// The source is borrowed, not copied. Scanning stops at the first NUL
    /// byte if the text contains one.
    pub fn new(source: &'a str) -> Self {
        let cursor = Cursor::new(source);
        debug!(len = cursor.source_len(), "scanner created");
        Self { cursor }
    }

    /// Produce the next token.
    pub fn next_token(&mut self) -> Result<Token, LexError> {
        self.cursor.skip_whitespace();

        let line = self.cursor.line();
        let column = self.cursor.column();
        if self.cursor.is_eof() {
            return Ok(Token::eof(line, column));
        }

        let start = self.cursor.pos();
        let token = match self.cursor.advance() {
            b'+' => self.emit(TokenKind::Plus, start, line, column),
            b'-' => self.emit(TokenKind::Minus, start, line, column),
            b'*' => self.emit(TokenKind::Star, start, line, column),
            b'/' => self.emit(TokenKind::Slash, start, line, column),
            b'(' => self.emit(TokenKind::LeftParen, start, line, column),
            b')' => self.emit(TokenKind::RightParen, start, line, column),
            b'{' => self.emit(TokenKind::LeftBrace, start, line, column),
            b'}' => self.emit(TokenKind::RightBrace, start, line, column),
            b';' => self.emit(TokenKind::Semicolon, start, line, column),
            b',' => self.emit(TokenKind::Comma, start, line, column),
            b'=' => self.with_equal(TokenKind::Equal, TokenKind::Assign, start, line, column),
            b'<' => self.with_equal(TokenKind::LessEqual, TokenKind::Less, start, line, column),
            b'>' => {
                self.with_equal(TokenKind::GreaterEqual, TokenKind::Greater, start, line, column)
            }
            b'!' => self.bang(start, line, column),
            b'a'..=b'z' | b'A'..=b'Z' | b'_' => self.identifier(start, line, column),
            b'0'..=b'9' => self.number(start, line, column),
            b'"' => self.string(line, column),
            first => self.unknown(first, start, line, column),
        }?;

        trace!(kind = ?token.kind(), line, column, "token");
        Ok(token)
    }

    /// Current line (1-based).
    #[inline]
    pub fn line(&self) -> u32 {
        self.cursor.line()
    }

    /// Current column (1-based).
    #[inline]
    pub fn column(&self) -> u32 {
        self.cursor.column()
    }

    /// Current byte offset into the source.
    #[inline]
    pub fn position(&self) -> u32 {
        self.cursor.pos()
    }

    /// Length of the scanned input in bytes.
    #[inline]
    pub fn source_len(&self) -> u32 {
        self.cursor.source_len()
    }

    /// Build a token from everything consumed since `start`.
    fn emit(&self, kind: TokenKind, start: u32, line: u32, column: u32) -> Result<Token, LexError> {
        Token::new(kind, self.cursor.slice_from(start), line, column)
    }

    // ─── Operators ─────────────────────────────────────────────────

    /// `=`, `<`, `>`: the two-byte form when followed by `=`.
    fn with_equal(
        &mut self,
        long: TokenKind,
        short: TokenKind,
        start: u32,
        line: u32,
        column: u32,
    ) -> Result<Token, LexError> {
        let kind = if self.cursor.eat(b'=') { long } else { short };
        self.emit(kind, start, line, column)
    }

    /// `!` only exists as part of `!=`.
    fn bang(&mut self, start: u32, line: u32, column: u32) -> Result<Token, LexError> {
        let kind = if self.cursor.eat(b'=') {
            TokenKind::NotEqual
        } else {
            TokenKind::Unknown
        };
        self.emit(kind, start, line, column)
    }

    // ─── Identifiers ───────────────────────────────────────────────

    fn identifier(&mut self, start: u32, line: u32, column: u32) -> Result<Token, LexError> {
        self.cursor.eat_while(is_ident_continue);
        let text = self.cursor.slice_from(start);
        let kind = keywords::lookup(text).unwrap_or(TokenKind::Identifier);
        Token::new(kind, text, line, column)
    }

    // ─── Numeric Literals ──────────────────────────────────────────

    fn number(&mut self, start: u32, line: u32, column: u32) -> Result<Token, LexError> {
        self.cursor.eat_while(|b| b.is_ascii_digit());

        // Fraction needs at least one digit after the dot; `1.` leaves the
        // dot for the next token.
        let kind = if self.cursor.current() == b'.' && self.cursor.peek().is_ascii_digit() {
            self.cursor.advance(); // consume '.'
            self.cursor.eat_while(|b| b.is_ascii_digit());
            TokenKind::FloatLiteral
        } else {
            TokenKind::IntLiteral
        };
        self.emit(kind, start, line, column)
    }

    // ─── String Literals ───────────────────────────────────────────

    /// Opening quote already consumed. Line feeds inside the literal are
    /// part of its text and advance the line through the cursor like any
    /// other byte.
    fn string(&mut self, line: u32, column: u32) -> Result<Token, LexError> {
        let content_start = self.cursor.pos();
        self.cursor.eat_while(|b| b != b'"');

        if self.cursor.is_eof() {
            debug!(line, column, "unterminated string literal");
            return Ok(Token::unterminated_string(line, column));
        }

        let content_end = self.cursor.pos();
        self.cursor.advance(); // consume closing '"'
        Token::new(
            TokenKind::StringLiteral,
            self.cursor.slice(content_start, content_end),
            line,
            column,
        )
    }

    // ─── Error tokens ──────────────────────────────────────────────

    /// One unrecognized character. A non-ASCII lead byte takes the rest of
    /// its UTF-8 sequence with it so the lexeme stays valid text.
    fn unknown(&mut self, first: u8, start: u32, line: u32, column: u32) -> Result<Token, LexError> {
        for _ in 1..utf8_char_width(first) {
            self.cursor.advance();
        }
        self.emit(TokenKind::Unknown, start, line, column)
    }
}

impl Iterator for Scanner<'_> {
    type Item = Result<Token, LexError>;

    /// Yields tokens up to, but not including, end of input.
    fn next(&mut self) -> Option<Self::Item> {
        match self.next_token() {
            Ok(tok) if tok.is_eof() => None,
            other => Some(other),
        }
    }
}

/// Returns `true` for bytes that may continue an identifier.
#[inline]
fn is_ident_continue(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_'
}

/// Scan a whole source string.
///
/// Returns every token including the final `Eof`, or the first allocation
/// failure.
pub fn tokenize(source: &str) -> Result<Vec<Token>, LexError> {
    let mut scanner = Scanner::new(source);
    let mut tokens = Vec::new();
    loop {
        let tok = scanner.next_token()?;
        let done = tok.is_eof();
        tokens.push(tok);
        if done {
            break;
        }
    }
    Ok(tokens)
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    clippy::expect_used,
    reason = "test assertions use unwrap/expect for clarity"
)]
