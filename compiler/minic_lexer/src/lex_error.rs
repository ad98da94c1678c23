//! Hard failures surfaced by the scanner.
//!
//! Lexical problems (unrecognized characters, unterminated strings) are not
//! errors here: they come back as ordinary `Unknown` tokens. The only hard
//! failure is running out of memory while materializing a token.

use std::collections::TryReserveError;

use thiserror::Error;

use crate::TokenKind;

/// A failure that ends the scanning session.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum LexError {
    /// Storage for a token's lexeme could not be reserved.
    #[error("failed to allocate {len} bytes for {kind} token at {line}:{column}")]
    Allocation {
        /// Kind of the token being built.
        kind: TokenKind,
        /// Requested lexeme length in bytes.
        len: usize,
        line: u32,
        column: u32,
        #[source]
        source: TryReserveError,
    },
}

impl LexError {
    pub(crate) fn allocation(
        kind: TokenKind,
        len: usize,
        line: u32,
        column: u32,
        source: TryReserveError,
    ) -> Self {
        LexError::Allocation {
            kind,
            len,
            line,
            column,
            source,
        }
    }

    /// Line and column of the token that could not be built.
    pub fn position(&self) -> (u32, u32) {
        match self {
            LexError::Allocation { line, column, .. } => (*line, *column),
        }
    }
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    clippy::expect_used,
    reason = "test assertions use unwrap/expect for clarity"
)]
