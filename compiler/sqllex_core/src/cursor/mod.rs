//! Position-tracking cursor over a sentinel-terminated buffer.
//!
//! The cursor owns its [`SourceBuffer`] and walks it one character at a
//! time, keeping the (line, column, offset) triple current as it goes.
//! Looking ahead is byte-oriented: [`peek`](Cursor::peek) and
//! [`peek_nth`](Cursor::peek_nth) return `0x00` past the end of input, so
//! the scanner never has to bounds-check before inspecting a delimiter.
//!
//! # Interior Null Bytes
//!
//! A NUL inside the SQL text and the sentinel read the same through
//! `peek()`. [`is_eof`](Cursor::is_eof) compares the offset against the
//! source length to tell them apart.
//!
//! # Backtracking
//!
//! The numeric and feature-list scanners read ahead and then give up.
//! They save [`position`](Cursor::position) before trying and hand it back
//! to [`restore`](Cursor::restore); there is no other way to move backwards.

use memchr::memmem;

use crate::class::{is_continuation, utf8_char_width};
use crate::{Position, SourceBuffer};

/// Read head over SQL text.
#[derive(Clone, Debug, Default)]
pub struct Cursor {
    buf: SourceBuffer,
    pos: Position,
}

impl Cursor {
    /// Create a cursor at the start of `source`.
    pub fn new(source: &str) -> Self {
        Self {
            buf: SourceBuffer::new(source),
            pos: Position::START,
        }
    }

    /// Rebind the cursor to new text, reusing the buffer allocation.
    pub fn reset(&mut self, source: &str) {
        self.buf.reset(source);
        self.pos = Position::START;
    }

    // ─── Look-ahead ───

    /// The next unconsumed byte, or `0x00` at end of input.
    #[inline]
    pub fn peek(&self) -> u8 {
        self.buf.byte_at(self.pos.offset)
    }

    /// The byte `n` positions past the next unconsumed one.
    ///
    /// `peek_nth(0)` is [`peek()`](Self::peek). Reads past the source return
    /// the sentinel.
    #[inline]
    pub fn peek_nth(&self, n: usize) -> u8 {
        self.buf.byte_at(self.pos.offset + n)
    }

    /// The next unconsumed character, decoded. `None` at end of input.
    #[inline]
    pub fn peek_char(&self) -> Option<char> {
        self.rest_str().chars().next()
    }

    /// `true` once every byte of the source has been consumed.
    #[inline]
    pub fn is_eof(&self) -> bool {
        self.pos.offset >= self.buf.len()
    }

    // ─── Consuming ───

    /// Consume and return the next character. `None` at end of input.
    pub fn read(&mut self) -> Option<char> {
        let ch = self.peek_char()?;
        self.advance_to(self.pos.offset + ch.len_utf8());
        Some(ch)
    }

    /// Consume one character. No-op at end of input.
    #[inline]
    pub fn advance(&mut self) {
        if self.is_eof() {
            return;
        }
        let width = utf8_char_width(self.peek());
        self.advance_to(self.pos.offset + width);
    }

    /// Consume `n` characters, stopping early at end of input.
    pub fn advance_n(&mut self, n: usize) {
        for _ in 0..n {
            self.advance();
        }
    }

    /// Consume characters while `pred` holds for their first byte.
    ///
    /// A multi-byte character is consumed whole when `pred` accepts its lead
    /// byte. `pred(0)` should return `false` so the sentinel ends the run.
    #[inline]
    pub fn eat_while(&mut self, pred: impl Fn(u8) -> bool) {
        while pred(self.peek()) && !self.is_eof() {
            self.advance();
        }
    }

    /// Advance to the next `\n` (left unconsumed) or to end of input.
    pub fn eat_until_newline(&mut self) {
        let target = match memchr::memchr(b'\n', self.rest()) {
            Some(found) => self.pos.offset + found,
            None => self.buf.len(),
        };
        self.advance_to(target);
    }

    /// Advance to the next occurrence of the ASCII `byte`, leaving it
    /// unconsumed. Returns `false` with the cursor at end of input when it
    /// does not occur.
    pub fn skip_until(&mut self, byte: u8) -> bool {
        debug_assert!(byte.is_ascii(), "needle must be ASCII");
        match memchr::memchr(byte, self.rest()) {
            Some(found) => {
                self.advance_to(self.pos.offset + found);
                true
            }
            None => {
                self.advance_to(self.buf.len());
                false
            }
        }
    }

    /// Advance to the next occurrence of `a` or `b` and return it, leaving
    /// it unconsumed. Returns `0x00` with the cursor at end of input when
    /// neither occurs.
    ///
    /// Both needles must be ASCII so the stop lands on a character boundary.
    pub fn skip_until_either(&mut self, a: u8, b: u8) -> u8 {
        debug_assert!(a.is_ascii() && b.is_ascii(), "needles must be ASCII");
        match memchr::memchr2(a, b, self.rest()) {
            Some(found) => {
                self.advance_to(self.pos.offset + found);
                self.peek()
            }
            None => {
                self.advance_to(self.buf.len());
                0
            }
        }
    }

    /// Absolute offset of the next occurrence of the ASCII `needle`, if any.
    pub fn find(&self, needle: &[u8]) -> Option<usize> {
        memmem::find(self.rest(), needle).map(|found| self.pos.offset + found)
    }

    /// Consume every byte up to `target`, keeping line and column current.
    ///
    /// `target` is clamped to the source length and must lie on a character
    /// boundary. Targets behind the cursor are ignored; use
    /// [`restore`](Self::restore) to move backwards.
    pub fn advance_to(&mut self, target: usize) {
        let target = target.min(self.buf.len());
        if target <= self.pos.offset {
            return;
        }
        let Position {
            mut line,
            mut column,
            ..
        } = self.pos;
        for &b in &self.buf.as_bytes()[self.pos.offset..target] {
            if b == b'\n' {
                line += 1;
                column = 0;
            }
            if !is_continuation(b) {
                column += 1;
            }
        }
        self.pos = Position::new(line, column, target);
    }

    // ─── Position ───

    /// Position of the next unconsumed character.
    #[inline]
    pub fn position(&self) -> Position {
        self.pos
    }

    /// Byte offset of the next unconsumed character.
    #[inline]
    pub fn offset(&self) -> usize {
        self.pos.offset
    }

    /// Move back to a position previously returned by
    /// [`position`](Self::position).
    #[inline]
    pub fn restore(&mut self, pos: Position) {
        debug_assert!(pos.offset <= self.buf.len(), "restore past end of input");
        self.pos = pos;
    }

    // ─── Slicing ───

    /// The whole source text.
    #[inline]
    pub fn source(&self) -> &str {
        self.buf.as_str()
    }

    /// Source byte at an absolute offset, `0x00` past the end.
    #[inline]
    pub fn byte_at(&self, offset: usize) -> u8 {
        self.buf.byte_at(offset)
    }

    /// Source text between two offsets taken from this cursor.
    ///
    /// Returns `""` for a range that is out of bounds or splits a character.
    #[inline]
    pub fn slice(&self, start: usize, end: usize) -> &str {
        self.buf.as_str().get(start..end).unwrap_or_default()
    }

    /// Source text from `start` up to the cursor.
    #[inline]
    pub fn slice_from(&self, start: usize) -> &str {
        self.slice(start, self.pos.offset)
    }

    /// Unconsumed source bytes.
    #[inline]
    pub fn rest(&self) -> &[u8] {
        self.rest_str().as_bytes()
    }

    /// Unconsumed source text.
    #[inline]
    pub fn rest_str(&self) -> &str {
        self.buf.as_str().get(self.pos.offset..).unwrap_or_default()
    }
}
