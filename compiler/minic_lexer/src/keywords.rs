//! Reserved-word resolution.
//!
//! The eight reserved words are matched exactly (case-sensitive, whole
//! identifier). Lookup buckets by length first: identifiers shorter than 2
//! or longer than 6 bytes are rejected without any string comparison.

use crate::TokenKind;

/// All reserved words, in the order they appear in [`TokenKind`].
pub const RESERVED: [&str; 8] = ["if", "else", "while", "for", "return", "int", "float", "char"];

/// Look up a reserved word by its exact spelling.
///
/// Returns `None` for ordinary identifiers, including near-misses such as
/// `Int`, `intx`, or `_int`.
#[inline]
pub fn lookup(text: &str) -> Option<TokenKind> {
    match text.len() {
        2 => match text {
            "if" => Some(TokenKind::If),
            _ => None,
        },
        3 => match text {
            "for" => Some(TokenKind::For),
            "int" => Some(TokenKind::Int),
            _ => None,
        },
        4 => match text {
            "else" => Some(TokenKind::Else),
            "char" => Some(TokenKind::Char),
            _ => None,
        },
        5 => match text {
            "while" => Some(TokenKind::While),
            "float" => Some(TokenKind::Float),
            _ => None,
        },
        6 => match text {
            "return" => Some(TokenKind::Return),
            _ => None,
        },
        _ => None,
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, reason = "test assertions use unwrap for clarity")]
mod tests;
