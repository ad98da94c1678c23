//! Token kinds and owned token values.
//!
//! A [`Token`] owns an independent copy of its lexeme, so it stays valid
//! after the [`Scanner`](crate::Scanner) and the source buffer are gone.
//! Construction reserves the lexeme storage fallibly and reports
//! exhaustion as [`LexError::Allocation`] instead of aborting.

use std::fmt;

use crate::LexError;

/// Closed set of token kinds produced by the scanner.
///
/// Discriminants are grouped into contiguous ranges with gaps between
/// categories:
///
/// | Range   | Category      |
/// |---------|---------------|
/// | 0-3     | Identifiers & literals |
/// | 16-23   | Keywords      |
/// | 32-42   | Operators     |
/// | 64-69   | Punctuation   |
/// | 240     | Unknown       |
/// | 255     | End of input  |
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum TokenKind {
    // === Identifiers & Literals (0-3) ===
    Identifier = 0,
    IntLiteral = 1,
    FloatLiteral = 2,
    /// Lexeme is the text between the quotes, without escape processing.
    StringLiteral = 3,

    // === Keywords (16-23) ===
    If = 16,
    Else = 17,
    While = 18,
    For = 19,
    Return = 20,
    Int = 21,
    Float = 22,
    Char = 23,

    // === Operators (32-42) ===
    Plus = 32,
    Minus = 33,
    Star = 34,
    Slash = 35,
    /// `=`
    Assign = 36,
    /// `==`
    Equal = 37,
    /// `!=`
    NotEqual = 38,
    Less = 39,
    LessEqual = 40,
    Greater = 41,
    GreaterEqual = 42,

    // === Punctuation (64-69) ===
    LeftParen = 64,
    RightParen = 65,
    LeftBrace = 66,
    RightBrace = 67,
    Semicolon = 68,
    Comma = 69,

    // === Errors (240) ===
    /// Unrecognized character, or an unterminated string literal (empty lexeme).
    Unknown = 240,

    // === Control (255) ===
    Eof = 255,
}

impl TokenKind {
    /// Every kind, in discriminant order.
    pub const ALL: [TokenKind; 31] = [
        TokenKind::Identifier,
        TokenKind::IntLiteral,
        TokenKind::FloatLiteral,
        TokenKind::StringLiteral,
        TokenKind::If,
        TokenKind::Else,
        TokenKind::While,
        TokenKind::For,
        TokenKind::Return,
        TokenKind::Int,
        TokenKind::Float,
        TokenKind::Char,
        TokenKind::Plus,
        TokenKind::Minus,
        TokenKind::Star,
        TokenKind::Slash,
        TokenKind::Assign,
        TokenKind::Equal,
        TokenKind::NotEqual,
        TokenKind::Less,
        TokenKind::LessEqual,
        TokenKind::Greater,
        TokenKind::GreaterEqual,
        TokenKind::LeftParen,
        TokenKind::RightParen,
        TokenKind::LeftBrace,
        TokenKind::RightBrace,
        TokenKind::Semicolon,
        TokenKind::Comma,
        TokenKind::Unknown,
        TokenKind::Eof,
    ];

    /// Spelling of kinds whose lexeme never varies.
    ///
    /// Returns `None` for identifiers, literals, `Unknown`, and `Eof`.
    pub const fn fixed_lexeme(self) -> Option<&'static str> {
        match self {
            TokenKind::If => Some("if"),
            TokenKind::Else => Some("else"),
            TokenKind::While => Some("while"),
            TokenKind::For => Some("for"),
            TokenKind::Return => Some("return"),
            TokenKind::Int => Some("int"),
            TokenKind::Float => Some("float"),
            TokenKind::Char => Some("char"),
            TokenKind::Plus => Some("+"),
            TokenKind::Minus => Some("-"),
            TokenKind::Star => Some("*"),
            TokenKind::Slash => Some("/"),
            TokenKind::Assign => Some("="),
            TokenKind::Equal => Some("=="),
            TokenKind::NotEqual => Some("!="),
            TokenKind::Less => Some("<"),
            TokenKind::LessEqual => Some("<="),
            TokenKind::Greater => Some(">"),
            TokenKind::GreaterEqual => Some(">="),
            TokenKind::LeftParen => Some("("),
            TokenKind::RightParen => Some(")"),
            TokenKind::LeftBrace => Some("{"),
            TokenKind::RightBrace => Some("}"),
            TokenKind::Semicolon => Some(";"),
            TokenKind::Comma => Some(","),
            TokenKind::Identifier
            | TokenKind::IntLiteral
            | TokenKind::FloatLiteral
            | TokenKind::StringLiteral
            | TokenKind::Unknown
            | TokenKind::Eof => None,
        }
    }

    /// Human-readable name for diagnostics.
    pub const fn display_name(self) -> &'static str {
        match self {
            TokenKind::Identifier => "identifier",
            TokenKind::IntLiteral => "integer literal",
            TokenKind::FloatLiteral => "float literal",
            TokenKind::StringLiteral => "string literal",
            TokenKind::Unknown => "unknown character",
            TokenKind::Eof => "end of input",
            TokenKind::If => "`if`",
            TokenKind::Else => "`else`",
            TokenKind::While => "`while`",
            TokenKind::For => "`for`",
            TokenKind::Return => "`return`",
            TokenKind::Int => "`int`",
            TokenKind::Float => "`float`",
            TokenKind::Char => "`char`",
            TokenKind::Plus => "`+`",
            TokenKind::Minus => "`-`",
            TokenKind::Star => "`*`",
            TokenKind::Slash => "`/`",
            TokenKind::Assign => "`=`",
            TokenKind::Equal => "`==`",
            TokenKind::NotEqual => "`!=`",
            TokenKind::Less => "`<`",
            TokenKind::LessEqual => "`<=`",
            TokenKind::Greater => "`>`",
            TokenKind::GreaterEqual => "`>=`",
            TokenKind::LeftParen => "`(`",
            TokenKind::RightParen => "`)`",
            TokenKind::LeftBrace => "`{`",
            TokenKind::RightBrace => "`}`",
            TokenKind::Semicolon => "`;`",
            TokenKind::Comma => "`,`",
        }
    }

    #[inline]
    pub const fn is_keyword(self) -> bool {
        matches!(self as u8, 16..=23)
    }

    #[inline]
    pub const fn is_literal(self) -> bool {
        matches!(
            self,
            TokenKind::IntLiteral | TokenKind::FloatLiteral | TokenKind::StringLiteral
        )
    }

    #[inline]
    pub const fn is_operator(self) -> bool {
        matches!(self as u8, 32..=42)
    }

    #[inline]
    pub const fn is_punctuation(self) -> bool {
        matches!(self as u8, 64..=69)
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// A scanned token: kind, owned lexeme, and the 1-based position of its
/// first character.
///
/// Immutable once built. Dropping the token releases its lexeme.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Token {
    kind: TokenKind,
    lexeme: String,
    line: u32,
    column: u32,
}

impl Token {
    /// Build a token owning a copy of `text`.
    ///
    /// The lexeme storage is reserved with [`String::try_reserve_exact`];
    /// if the allocator refuses, no token is produced and the failure is
    /// returned as [`LexError::Allocation`].
    pub fn new(kind: TokenKind, text: &str, line: u32, column: u32) -> Result<Self, LexError> {
        let mut lexeme = String::new();
        lexeme
            .try_reserve_exact(text.len())
            .map_err(|source| LexError::allocation(kind, text.len(), line, column, source))?;
        lexeme.push_str(text);
        Ok(Token {
            kind,
            lexeme,
            line,
            column,
        })
    }

    /// End-of-input token. An empty `String` never allocates.
    pub(crate) fn eof(line: u32, column: u32) -> Self {
        Token {
            kind: TokenKind::Eof,
            lexeme: String::new(),
            line,
            column,
        }
    }

    /// `Unknown` token with an empty lexeme, marking a string literal that
    /// reached end of input before its closing quote.
    pub(crate) fn unterminated_string(line: u32, column: u32) -> Self {
        Token {
            kind: TokenKind::Unknown,
            lexeme: String::new(),
            line,
            column,
        }
    }

    #[inline]
    pub fn kind(&self) -> TokenKind {
        self.kind
    }

    #[inline]
    pub fn lexeme(&self) -> &str {
        &self.lexeme
    }

    #[inline]
    pub fn line(&self) -> u32 {
        self.line
    }

    #[inline]
    pub fn column(&self) -> u32 {
        self.column
    }

    #[inline]
    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::Eof
    }

    /// Returns `true` for the unterminated-string marker.
    ///
    /// An unrecognized character always carries exactly one character, so an
    /// `Unknown` token with an empty lexeme can only come from a string
    /// literal that ran into end of input.
    pub fn is_unterminated_string(&self) -> bool {
        self.kind == TokenKind::Unknown && self.lexeme.is_empty()
    }

    /// Consume the token, returning its lexeme.
    pub fn into_lexeme(self) -> String {
        self.lexeme
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:?}({:?}) @ {}:{}",
            self.kind, self.lexeme, self.line, self.column
        )
    }
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    clippy::expect_used,
    reason = "test assertions use unwrap/expect for clarity"
)]
mod tests;
