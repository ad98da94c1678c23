//! Position-tracking cursor over a borrowed source buffer.
//!
//! Every byte the scanner consumes goes through [`Cursor::advance`], which
//! is the only place the byte offset, line, and column change. A line feed
//! bumps the line and resets the column to 1; any other byte bumps the
//! column.
//!
//! # NUL Termination
//!
//! Input follows the NUL-terminated text contract: scanning stops at the
//! first `0x00` byte, if any. Bytes past it are never read. Reads at or
//! beyond the end return `0x00`, which no classification predicate accepts.

/// Cursor over a borrowed source buffer.
///
/// The cursor holds a non-owning view of the source; the borrow keeps the
/// caller's buffer alive for as long as the cursor exists. It is [`Copy`],
/// so a snapshot of the scan state costs nothing.
///
/// # Invariants
///
/// - `pos <= source_len`, and `pos` never decreases.
/// - `line >= 1` and `column >= 1`.
#[derive(Clone, Copy, Debug)]
pub struct Cursor<'a> {
    source: &'a str,
    /// Read position (byte offset into `source`).
    pos: u32,
    /// Length of the scanned input (up to the first NUL).
    source_len: u32,
    line: u32,
    column: u32,
}

impl<'a> Cursor<'a> {
    /// Create a cursor at line 1, column 1.
    ///
    /// Inputs longer than `u32::MAX` bytes are truncated to that length.
    pub fn new(source: &'a str) -> Self {
        let bytes = source.as_bytes();
        let len = memchr::memchr(0, bytes).unwrap_or(bytes.len());
        Self {
            source,
            pos: 0,
            source_len: u32::try_from(len).unwrap_or(u32::MAX),
            line: 1,
            column: 1,
        }
    }

    /// Byte at the read position, or `0x00` at end of input.
    #[inline]
    pub fn current(&self) -> u8 {
        self.byte_at(self.pos)
    }

    /// Byte one position ahead, or `0x00` past end of input.
    #[inline]
    pub fn peek(&self) -> u8 {
        self.byte_at(self.pos.saturating_add(1))
    }

    #[inline]
    fn byte_at(&self, pos: u32) -> u8 {
        if pos < self.source_len {
            self.source.as_bytes()[pos as usize]
        } else {
            0
        }
    }

    #[inline]
    pub fn is_eof(&self) -> bool {
        self.pos >= self.source_len
    }

    /// Consume one byte and return it. At end of input, returns `0x00`
    /// without moving.
    #[inline]
    pub fn advance(&mut self) -> u8 {
        if self.is_eof() {
            return 0;
        }
        let b = self.current();
        self.pos += 1;
        if b == b'\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        b
    }

    /// Consume the current byte if it equals `expected`.
    #[inline]
    pub fn eat(&mut self, expected: u8) -> bool {
        if !self.is_eof() && self.current() == expected {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Advance while `pred` accepts the current byte. Stops at end of input
    /// regardless of what `pred` says about `0x00`.
    #[inline]
    pub fn eat_while(&mut self, pred: impl Fn(u8) -> bool) {
        while !self.is_eof() && pred(self.current()) {
            self.advance();
        }
    }

    /// Skip spaces, tabs, carriage returns, and line feeds.
    pub fn skip_whitespace(&mut self) {
        self.eat_while(|b| matches!(b, b' ' | b'\t' | b'\r' | b'\n'));
    }

    /// Current byte offset.
    #[inline]
    pub fn pos(&self) -> u32 {
        self.pos
    }

    /// Length of the scanned input in bytes.
    #[inline]
    pub fn source_len(&self) -> u32 {
        self.source_len
    }

    #[inline]
    pub fn line(&self) -> u32 {
        self.line
    }

    #[inline]
    pub fn column(&self) -> u32 {
        self.column
    }

    /// Source text between two byte offsets.
    ///
    /// # Contract
    ///
    /// `start <= end <= source_len`, both on character boundaries. The
    /// scanner only slices at token boundaries, which always sit next to an
    /// ASCII byte or at the end of a whole UTF-8 sequence.
    pub fn slice(&self, start: u32, end: u32) -> &'a str {
        debug_assert!(
            end <= self.source_len,
            "slice end {end} exceeds source length {}",
            self.source_len
        );
        debug_assert!(start <= end, "slice start {start} exceeds end {end}");
        self.source
            .get(start as usize..end as usize)
            .unwrap_or_default()
    }

    /// Source text from `start` up to the read position.
    pub fn slice_from(&self, start: u32) -> &'a str {
        self.slice(start, self.pos)
    }
}

/// Number of bytes in the UTF-8 sequence introduced by `byte`.
///
/// Continuation and invalid lead bytes count as one.
#[inline]
pub(crate) fn utf8_char_width(byte: u8) -> u32 {
    match byte {
        0xC0..=0xDF => 2,
        0xE0..=0xEF => 3,
        0xF0..=0xF7 => 4,
        _ => 1,
    }
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    clippy::expect_used,
    reason = "test assertions use unwrap/expect for clarity"
)]
