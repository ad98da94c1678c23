//! Lexical scanner for minic, a small C-like language.
//!
//! Turns a source buffer into a stream of [`Token`]s, each carrying its
//! kind, an owned copy of the matched text, and the line and column of its
//! first character.
//!
//! # Usage
//!
//! ```
//! use minic_lexer::{Scanner, TokenKind};
//!
//! let mut scanner = Scanner::new("int x = 42;");
//! let first = scanner.next_token()?;
//! assert_eq!(first.kind(), TokenKind::Int);
//! assert_eq!((first.line(), first.column()), (1, 1));
//! # Ok::<(), minic_lexer::LexError>(())
//! ```
//!
//! # Architecture
//!
//! - [`Cursor`]: byte offset, line, and column over the borrowed source
//! - [`Scanner`]: recognition rules, one token per call
//! - [`keywords`]: reserved-word table
//! - [`Token`] / [`TokenKind`]: owned token values and the closed kind set
//! - [`LexError`]: allocation failure, the only hard error
//!
//! Lexical problems are not errors: unknown characters and unterminated
//! string literals come back as [`TokenKind::Unknown`] tokens.

mod cursor;
pub mod keywords;
mod lex_error;
mod scanner;
mod token;

use std::sync::Once;

pub use cursor::Cursor;
pub use lex_error::LexError;
pub use scanner::{tokenize, Scanner};
pub use token::{Token, TokenKind};

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Call this once at startup. Safe to call multiple times.
/// Enable with `RUST_LOG=minic_lexer=debug` or `RUST_LOG=minic_lexer=trace`.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        // Only initialize if RUST_LOG is set
        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(filter)
                .init();
        }
    });
}

#[cfg(test)]
mod tests {
    use super::{init_tracing, Scanner, Token};

    fn assert_send_sync<T: Send + Sync>() {}

    #[test]
    fn scanner_and_token_are_send_sync() {
        assert_send_sync::<Scanner<'static>>();
        assert_send_sync::<Token>();
    }

    #[test]
    fn init_tracing_is_idempotent() {
        init_tracing();
        init_tracing();
    }
}
