//! User variables (`@name`) and system variables (`@@[scope.]name`).

use sqllex_core::class::is_user_var_char;

use super::Scanner;
use crate::token::{Position, RawToken, TokenKind};

/// Scope prefixes of a system variable, matched case-insensitively.
const SCOPES: [&str; 3] = ["global.", "session.", "local."];

impl Scanner {
    /// `@...`, with the cursor on the first `@`.
    ///
    /// A user variable's token text is the bare name. A system variable's
    /// text is verbatim source (`@@global.autocommit`), except that a quoted
    /// name is unquoted.
    pub(super) fn variable(&mut self, start: Position) -> RawToken {
        self.cursor.advance();
        if self.cursor.peek() == b'@' {
            self.cursor.advance();
            return self.system_variable(start);
        }

        if is_quote(self.cursor.peek()) {
            return self.quoted_variable_name(start, TokenKind::SINGLE_AT_IDENTIFIER, "");
        }
        let name = self.cursor.offset();
        self.cursor.eat_while(is_user_var_char);
        RawToken::new(
            TokenKind::SINGLE_AT_IDENTIFIER,
            start,
            self.cursor.slice_from(name),
        )
    }

    fn system_variable(&mut self, start: Position) -> RawToken {
        let scope_start = self.cursor.offset();
        if let Some(scope) = SCOPES
            .iter()
            .find(|scope| starts_with_ignore_case(self.cursor.rest(), scope.as_bytes()))
        {
            self.cursor.advance_n(scope.len());
        }

        if is_quote(self.cursor.peek()) {
            let prefix = format!("@@{}", self.cursor.slice_from(scope_start));
            return self.quoted_variable_name(start, TokenKind::DOUBLE_AT_IDENTIFIER, &prefix);
        }
        self.cursor.eat_while(is_user_var_char);
        self.token(TokenKind::DOUBLE_AT_IDENTIFIER, start)
    }

    /// Variable whose name is a quoted string or identifier. A malformed
    /// quoted name makes the whole variable invalid.
    fn quoted_variable_name(&mut self, start: Position, kind: TokenKind, prefix: &str) -> RawToken {
        let quote_start = self.cursor.position();
        let quoted = if self.cursor.peek() == b'`' {
            self.quoted_identifier(quote_start)
        } else {
            self.string(quote_start)
        };

        if quoted.kind.is_invalid() {
            if let Some(err) = self.errors.last_mut() {
                err.pos = start;
            }
            return RawToken::new(
                TokenKind::INVALID,
                start,
                self.cursor.slice_from(start.offset),
            );
        }
        RawToken::new(kind, start, format!("{prefix}{}", quoted.text))
    }
}

#[inline]
fn is_quote(b: u8) -> bool {
    matches!(b, b'\'' | b'"' | b'`')
}

fn starts_with_ignore_case(haystack: &[u8], prefix: &[u8]) -> bool {
    haystack
        .get(..prefix.len())
        .is_some_and(|head| head.eq_ignore_ascii_case(prefix))
}
