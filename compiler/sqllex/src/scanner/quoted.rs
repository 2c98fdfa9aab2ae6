//! Quoted forms: string literals, backtick identifiers and the `N'..'`
//! national-charset introducer.
//!
//! Bodies are unescaped while scanning, so the token text of a string is
//! its value. Runs without escapes are copied in one piece; the search for
//! the next quote or backslash is `memchr`-driven.

use super::Scanner;
use crate::lex_error::LexErrorKind;
use crate::sql_mode::SqlMode;
use crate::token::{Position, RawToken, TokenKind};

/// Character sets accepted after `_` as an introducer (`_utf8mb4'abc'`).
const CHARSET_NAMES: &[&str] = &["ascii", "binary", "gbk", "latin1", "utf8", "utf8mb4"];

/// Lower-case charset name if `text` is `_<charset>`.
pub(super) fn charset_introducer(text: &str) -> Option<String> {
    let name = text.strip_prefix('_')?;
    CHARSET_NAMES
        .iter()
        .find(|charset| charset.eq_ignore_ascii_case(name))
        .map(|&charset| charset.to_owned())
}

impl Scanner {
    /// `'...'` or `"..."`, with the cursor on the opening quote.
    ///
    /// A doubled quote stands for one quote character. Unless
    /// `NO_BACKSLASH_ESCAPES` is set, backslash escapes are decoded. Under
    /// `ANSI_QUOTES` a `"`-quoted body is a quoted identifier.
    pub(super) fn string(&mut self, start: Position) -> RawToken {
        let quote = self.cursor.peek();
        self.cursor.advance();
        let escape = if self.sql_mode().contains(SqlMode::NO_BACKSLASH_ESCAPES) {
            quote
        } else {
            b'\\'
        };

        let mut value = String::new();
        loop {
            let run = self.cursor.offset();
            let found = self.cursor.skip_until_either(quote, escape);
            value.push_str(self.cursor.slice_from(run));
            if found == 0 {
                return self.invalid(start, LexErrorKind::UnterminatedString);
            }
            self.cursor.advance();

            if found == quote {
                if self.cursor.peek() == quote {
                    self.cursor.advance();
                    value.push(char::from(quote));
                    continue;
                }
                let kind = if quote == b'"' && self.sql_mode().contains(SqlMode::ANSI_QUOTES) {
                    TokenKind::QUOTED_IDENTIFIER
                } else {
                    TokenKind::STRING_LIT
                };
                return RawToken::new(kind, start, value);
            }

            match self.cursor.read() {
                Some(ch) => push_escaped(ch, &mut value),
                None => return self.invalid(start, LexErrorKind::UnterminatedString),
            }
        }
    }

    /// `` `...` ``, with the cursor on the opening backtick. A doubled
    /// backtick stands for one; there are no other escapes.
    pub(super) fn quoted_identifier(&mut self, start: Position) -> RawToken {
        self.cursor.advance();
        let mut name = String::new();
        loop {
            let run = self.cursor.offset();
            let found = self.cursor.skip_until(b'`');
            name.push_str(self.cursor.slice_from(run));
            if !found {
                return self.invalid(start, LexErrorKind::UnterminatedQuotedIdentifier);
            }
            self.cursor.advance();
            if self.cursor.peek() != b'`' {
                return RawToken::new(TokenKind::QUOTED_IDENTIFIER, start, name);
            }
            self.cursor.advance();
            name.push('`');
        }
    }

    /// `N` directly followed by `'`. Only the `N` is consumed; the string
    /// is the next token.
    pub(super) fn national_introducer(&mut self, start: Position) -> RawToken {
        self.cursor.advance();
        self.token(TokenKind::CHARSET_INTRODUCER, start)
    }
}

/// Decode the character after a backslash.
///
/// `\%` and `\_` keep their backslash so `LIKE` patterns can still tell an
/// escaped wildcard from a bare one. Unknown escapes drop the backslash.
fn push_escaped(ch: char, out: &mut String) {
    match ch {
        '0' => out.push('\0'),
        'b' => out.push('\u{8}'),
        'n' => out.push('\n'),
        'r' => out.push('\r'),
        't' => out.push('\t'),
        'Z' => out.push('\u{1a}'),
        '%' | '_' => {
            out.push('\\');
            out.push(ch);
        }
        _ => out.push(ch),
    }
}
