//! Numeric literals: integers, decimals, floats, `0x`/`0b` literals and
//! the quoted `x'..'` / `b'..'` forms.
//!
//! A digit run that runs into identifier characters is an identifier
//! (`123abc`, `0x7fz3`, `9eTSs`), which is why several paths restore to the
//! token start and rescan.

use sqllex_core::class::{is_bit_digit, is_digit, is_hex_digit, is_ident_char};

use super::Scanner;
use crate::lex_error::LexErrorKind;
use crate::token::{Position, RawToken, TokenKind};

impl Scanner {
    pub(super) fn number(&mut self, start: Position) -> RawToken {
        // `t.1e5`: a qualified name part, not a number
        if self.identifier_dot {
            return self.identifier(start);
        }

        let first = self.cursor.peek();
        self.cursor.advance();
        if first == b'0' {
            match self.cursor.peek() {
                b'x' | b'X' => return self.prefixed_binary(start, is_hex_digit, TokenKind::HEX_LIT),
                b'b' => return self.prefixed_binary(start, is_bit_digit, TokenKind::BIT_LIT),
                b'B' => return self.identifier(start),
                _ => {}
            }
        }

        self.cursor.eat_while(is_digit);
        match self.cursor.peek() {
            b'.' | b'e' | b'E' => self.float(start),
            b if is_ident_char(b) => self.identifier(start),
            _ => self.token(TokenKind::INT_LIT, start),
        }
    }

    /// `0x1F` / `0b101`, with the cursor on the `x`/`b`. An empty body or
    /// a body running into identifier characters makes the whole run an
    /// identifier.
    fn prefixed_binary(
        &mut self,
        start: Position,
        is_body_digit: fn(u8) -> bool,
        kind: TokenKind,
    ) -> RawToken {
        self.cursor.advance();
        let body = self.cursor.offset();
        self.cursor.eat_while(is_body_digit);
        if self.cursor.offset() == body || is_ident_char(self.cursor.peek()) {
            return self.identifier(start);
        }
        self.token(kind, start)
    }

    /// Rescan from `start` as `D1[.D2][e[+-]D3]`.
    ///
    /// Produces `DECIMAL_LIT` without an exponent and `FLOAT_LIT` with one.
    /// An exponent marker without digits (`9e`, `9e+x`) turns the run into
    /// an identifier instead.
    pub(super) fn float(&mut self, start: Position) -> RawToken {
        self.cursor.restore(start);
        self.cursor.eat_while(is_digit);
        if self.cursor.peek() == b'.' {
            self.cursor.advance();
            self.cursor.eat_while(is_digit);
        }
        if !matches!(self.cursor.peek(), b'e' | b'E') {
            return self.token(TokenKind::DECIMAL_LIT, start);
        }

        self.cursor.advance();
        if matches!(self.cursor.peek(), b'+' | b'-') {
            self.cursor.advance();
        }
        if is_digit(self.cursor.peek()) {
            self.cursor.eat_while(is_digit);
            return self.token(TokenKind::FLOAT_LIT, start);
        }

        self.cursor.restore(start);
        self.identifier(start)
    }

    /// `.` on its own, or a number with no integer part (`.5`, `.1e3`).
    pub(super) fn dot(&mut self, start: Position) -> RawToken {
        if self.identifier_dot || !is_digit(self.cursor.peek_nth(1)) {
            self.cursor.advance();
            return self.token(TokenKind::from_byte(b'.'), start);
        }

        let token = self.float(start);
        if token.kind != TokenKind::IDENTIFIER {
            return token;
        }

        // `.1e`: no exponent digits, and `.` cannot start an identifier
        self.cursor.restore(start);
        self.cursor.advance();
        self.cursor.eat_while(is_digit);
        self.cursor.advance();
        if matches!(self.cursor.peek(), b'+' | b'-') {
            self.cursor.advance();
        }
        self.invalid(start, LexErrorKind::EmptyExponent)
    }

    /// `x'..'`, with the cursor on the `x`.
    pub(super) fn hex_string(&mut self, start: Position) -> RawToken {
        self.quoted_binary(start, is_hex_digit, TokenKind::HEX_LIT)
            .unwrap_or_else(|| self.invalid(start, LexErrorKind::UnterminatedHexString))
    }

    /// `b'..'`, with the cursor on the `b`.
    pub(super) fn bit_string(&mut self, start: Position) -> RawToken {
        self.quoted_binary(start, is_bit_digit, TokenKind::BIT_LIT)
            .unwrap_or_else(|| self.invalid(start, LexErrorKind::UnterminatedBitString))
    }

    fn quoted_binary(
        &mut self,
        start: Position,
        is_body_digit: fn(u8) -> bool,
        kind: TokenKind,
    ) -> Option<RawToken> {
        self.cursor.advance_n(2);
        self.cursor.eat_while(is_body_digit);
        if self.cursor.peek() != b'\'' {
            return None;
        }
        self.cursor.advance();
        Some(self.token(kind, start))
    }
}
