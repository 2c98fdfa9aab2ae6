//! Hand-written SQL scanner.
//!
//! Scanning happens in two layers, both on [`Scanner`]:
//!
//! - [`Scanner::scan_raw`] is the raw layer. It skips whitespace and comments,
//!   dispatches on the first byte of the next token and returns a
//!   [`RawToken`] carrying the token's category, start position and text.
//!   Strings and quoted identifiers come back unescaped; everything else is
//!   verbatim source.
//! - [`Scanner::next_token`] is the cooking layer the parser consumes. It
//!   resolves identifiers to keywords, applies the SQL-mode dependent
//!   remapping (`||`, `NOT`), decodes numeric and binary literals, and
//!   folds quoted identifiers into plain ones.
//!
//! # Context
//!
//! The scanner is not context-free. It remembers:
//!
//! - whether it is inside an executable comment (`/*!...*/` or an enabled
//!   `/*T![id]...*/`), so the matching `*/` is skipped,
//! - whether the previous token was an identifier immediately followed by
//!   `.`, so `t.1e5` scans `1e5` as an identifier,
//! - the keyword ids of the last three tokens, which decide whether a
//!   `/*+ ... */` comment is an optimizer hint.
//!
//! # Errors
//!
//! Malformed input produces an `INVALID` token; the matching [`LexError`]
//! is appended to [`errors()`](Scanner::errors). Scanning continues after an
//! invalid token, but callers are expected to stop.

mod comment;
mod number;
mod quoted;
mod variable;

use sqllex_core::class::{is_ident_char, is_space};
use sqllex_core::Cursor;
use tracing::trace;

use crate::config::ScannerConfig;
use crate::keywords;
use crate::lex_error::{LexError, LexErrorKind};
use crate::literal::BinaryLiteral;
use crate::sql_mode::SqlMode;
use crate::token::{Literal, Position, RawToken, Token, TokenKind};

const DOT: TokenKind = TokenKind::from_byte(b'.');

/// SQL scanner over one input string.
///
/// A scanner is reusable: [`reset`](Self::reset) rebinds it to new text and
/// keeps the buffer allocation.
pub struct Scanner {
    cursor: Cursor,
    config: ScannerConfig,
    /// Inside `/*!` or an enabled `/*T![..]`: the next `*/` is skipped.
    in_bang_comment: bool,
    /// The last token was an identifier directly followed by `.`.
    identifier_dot: bool,
    /// Keyword ids of the last three tokens, most recent first.
    recent_keywords: [Option<TokenKind>; 3],
    errors: Vec<LexError>,
    warnings: Vec<LexError>,
}

impl Scanner {
    /// Scanner with the default configuration: no SQL modes, no features,
    /// window functions enabled.
    pub fn new(input: &str) -> Self {
        Self::with_config(input, ScannerConfig::default())
    }

    pub fn with_config(input: &str, config: ScannerConfig) -> Self {
        Self {
            cursor: Cursor::new(input),
            config,
            in_bang_comment: false,
            identifier_dot: false,
            recent_keywords: [None; 3],
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }

    /// Rebind to new input, clearing all scanning state and diagnostics.
    /// The configuration is kept.
    pub fn reset(&mut self, input: &str) {
        self.cursor.reset(input);
        self.in_bang_comment = false;
        self.identifier_dot = false;
        self.recent_keywords = [None; 3];
        self.errors.clear();
        self.warnings.clear();
    }

    /// Change the SQL mode for the tokens that follow.
    pub fn set_sql_mode(&mut self, sql_mode: SqlMode) {
        self.config.sql_mode = sql_mode;
    }

    #[inline]
    pub fn sql_mode(&self) -> SqlMode {
        self.config.sql_mode
    }

    pub fn config(&self) -> &ScannerConfig {
        &self.config
    }

    /// One entry per `INVALID` token (plus unterminated comments), in
    /// source order.
    pub fn errors(&self) -> &[LexError] {
        &self.errors
    }

    /// Non-fatal findings, such as a dropped optimizer hint.
    pub fn warnings(&self) -> &[LexError] {
        &self.warnings
    }

    /// Position of the next unscanned character.
    pub fn position(&self) -> Position {
        self.cursor.position()
    }

    // ─── Cooking ───────────────────────────────────────────────────────

    /// Produce the next token for the parser.
    ///
    /// Returns a token of kind [`TokenKind::EOF`] once the input is
    /// exhausted, and keeps returning it on further calls.
    pub fn next_token(&mut self) -> Token {
        let RawToken { kind, pos, text } = self.scan_raw();
        let followed_by_dot = self.cursor.peek() == b'.';
        self.recent_keywords.rotate_right(1);
        self.recent_keywords[0] = None;

        let token = match kind {
            TokenKind::IDENTIFIER => self.cook_identifier(pos, text, followed_by_dot),
            TokenKind::QUOTED_IDENTIFIER => Token::new(TokenKind::IDENTIFIER, pos, text),
            TokenKind::CHARSET_INTRODUCER => {
                Token::new(kind, pos, text).with_value(Literal::Charset("utf8".to_owned()))
            }
            TokenKind::PIPES if !self.sql_mode().contains(SqlMode::PIPES_AS_CONCAT) => {
                Token::new(TokenKind::PIPES_AS_OR, pos, text)
            }
            TokenKind::INT_LIT
            | TokenKind::DECIMAL_LIT
            | TokenKind::FLOAT_LIT
            | TokenKind::HEX_LIT
            | TokenKind::BIT_LIT => self.cook_number(kind, pos, text),
            _ => Token::new(kind, pos, text),
        };

        self.identifier_dot = match kind {
            TokenKind::IDENTIFIER | TokenKind::QUOTED_IDENTIFIER => followed_by_dot,
            DOT => self.identifier_dot,
            _ => false,
        };

        trace!(
            kind = %token.kind,
            line = pos.line,
            column = pos.column,
            text = %token.text,
            "token"
        );
        token
    }

    fn cook_identifier(&mut self, pos: Position, text: String, followed_by_dot: bool) -> Token {
        if let Some(charset) = quoted::charset_introducer(&text) {
            return Token::new(TokenKind::CHARSET_INTRODUCER, pos, text)
                .with_value(Literal::Charset(charset));
        }

        // `t.select`, `select.t`: qualified name parts are never keywords
        let preceded_by_dot = pos.offset > 0 && self.cursor.byte_at(pos.offset - 1) == b'.';
        if followed_by_dot || preceded_by_dot {
            return Token::new(TokenKind::IDENTIFIER, pos, text);
        }

        let Some(kind) = keywords::lookup(&text) else {
            return Token::new(TokenKind::IDENTIFIER, pos, text);
        };
        if !self.config.window_functions && keywords::is_window_function(kind) {
            return Token::new(TokenKind::IDENTIFIER, pos, text);
        }

        self.recent_keywords[0] = Some(kind);
        if kind == TokenKind::NOT && self.sql_mode().contains(SqlMode::HIGH_NOT_PRECEDENCE) {
            return Token::new(TokenKind::NOT2, pos, text);
        }
        Token::new(kind, pos, text)
    }

    fn cook_number(&mut self, kind: TokenKind, pos: Position, text: String) -> Token {
        let value = match kind {
            TokenKind::INT_LIT => match text.parse::<u64>() {
                Ok(n) => i64::try_from(n).map_or(Literal::Uint(n), Literal::Int),
                // too large for u64: carried as a decimal
                Err(_) => {
                    let value = Literal::Decimal(text.clone());
                    return Token::new(TokenKind::DECIMAL_LIT, pos, text).with_value(value);
                }
            },
            TokenKind::DECIMAL_LIT => Literal::Decimal(text.clone()),
            TokenKind::FLOAT_LIT => match text.parse::<f64>() {
                Ok(f) if f.is_finite() => Literal::Float(f),
                _ => return self.invalid_token(pos, text, LexErrorKind::FloatOutOfRange),
            },
            TokenKind::HEX_LIT => match BinaryLiteral::from_hex_literal(&text) {
                Ok(bits) => Literal::Bits(bits),
                Err(err) => return self.invalid_token(pos, text, err.into()),
            },
            TokenKind::BIT_LIT => match BinaryLiteral::from_bit_literal(&text) {
                Ok(bits) => Literal::Bits(bits),
                Err(err) => return self.invalid_token(pos, text, err.into()),
            },
            _ => Literal::None,
        };
        Token::new(kind, pos, text).with_value(value)
    }

    #[cold]
    fn invalid_token(&mut self, pos: Position, text: String, kind: LexErrorKind) -> Token {
        self.errors.push(LexError::new(kind, pos, &text));
        Token::new(TokenKind::INVALID, pos, text)
    }

    // ─── Raw Scanning ──────────────────────────────────────────────────

    /// Produce the next raw token: no keyword resolution, no literal
    /// decoding, quoted identifiers still marked as such.
    pub fn scan_raw(&mut self) -> RawToken {
        loop {
            self.skip_whitespace();
            let start = self.cursor.position();
            if self.cursor.is_eof() {
                return RawToken::eof(start);
            }
            if let Some(token) = self.dispatch(start) {
                return token;
            }
        }
    }

    /// Scan one token starting at `start`. `None` when only trivia was
    /// consumed.
    fn dispatch(&mut self, start: Position) -> Option<RawToken> {
        let token = match self.cursor.peek() {
            b'0'..=b'9' => self.number(start),
            b'.' => self.dot(start),
            b'\'' | b'"' => self.string(start),
            b'`' => self.quoted_identifier(start),
            b'@' => self.variable(start),
            b'/' if self.cursor.peek_nth(1) == b'*' => return self.block_comment(start),
            b'*' if self.in_bang_comment && self.cursor.peek_nth(1) == b'/' => {
                self.close_bang_comment();
                return None;
            }
            b'-' if self.at_dash_comment() => {
                self.cursor.eat_until_newline();
                return None;
            }
            b'#' => {
                self.cursor.eat_until_newline();
                return None;
            }
            b'x' | b'X' if self.cursor.peek_nth(1) == b'\'' => self.hex_string(start),
            b'b' | b'B' if self.cursor.peek_nth(1) == b'\'' => self.bit_string(start),
            b'n' | b'N' if self.cursor.peek_nth(1) == b'\'' => self.national_introducer(start),
            b if is_ident_char(b) => self.identifier(start),
            _ => self.operator(start),
        };
        Some(token)
    }

    // ─── Whitespace ────────────────────────────────────────────────────

    fn skip_whitespace(&mut self) {
        loop {
            self.cursor.eat_while(is_space);
            if self.cursor.peek() < 0x80 || !self.cursor.peek_char().is_some_and(char::is_whitespace)
            {
                return;
            }
            self.cursor.advance();
        }
    }

    /// `--` opens a comment only when followed by whitespace or end of input.
    fn at_dash_comment(&self) -> bool {
        if self.cursor.peek_nth(1) != b'-' {
            return false;
        }
        let after = self.cursor.offset() + 2;
        after >= self.cursor.source().len() || is_space(self.cursor.byte_at(after))
    }

    // ─── Identifiers & Operators ───────────────────────────────────────

    /// Consume an identifier run. Callers may already have consumed part
    /// of it; the token text always starts at `start`.
    fn identifier(&mut self, start: Position) -> RawToken {
        self.cursor.eat_while(is_ident_char);
        self.token(TokenKind::IDENTIFIER, start)
    }

    fn operator(&mut self, start: Position) -> RawToken {
        if let Some((kind, len)) = keywords::operator(self.cursor.rest()) {
            self.cursor.advance_to(start.offset + len);
            return self.token(kind, start);
        }
        let ch = self.cursor.read().unwrap_or('\0');
        self.invalid(start, LexErrorKind::UnexpectedChar(ch))
    }

    // ─── Helpers ───────────────────────────────────────────────────────

    /// Token of `kind` whose text is the source from `start` to the cursor.
    #[inline]
    fn token(&self, kind: TokenKind, start: Position) -> RawToken {
        RawToken::new(kind, start, self.cursor.slice_from(start.offset))
    }

    /// `INVALID` token over the source consumed since `start`, with its
    /// error recorded.
    #[cold]
    fn invalid(&mut self, start: Position, kind: LexErrorKind) -> RawToken {
        let text = self.cursor.slice_from(start.offset).to_owned();
        self.errors.push(LexError::new(kind, start, &text));
        RawToken::new(TokenKind::INVALID, start, text)
    }
}

impl Iterator for Scanner {
    type Item = Token;

    /// Tokens up to, not including, end of input. `INVALID` tokens are
    /// yielded like any other.
    fn next(&mut self) -> Option<Token> {
        let token = self.next_token();
        (!token.kind.is_eof()).then_some(token)
    }
}

/// Scan all of `input`, stopping at the first error.
///
/// The returned tokens exclude the end-of-input marker.
///
/// # Errors
///
/// Returns the error recorded for the first `INVALID` token, or for an
/// unterminated comment.
pub fn tokenize(input: &str, config: ScannerConfig) -> Result<Vec<Token>, LexError> {
    let mut scanner = Scanner::with_config(input, config);
    let mut tokens = Vec::new();
    loop {
        let token = scanner.next_token();
        if token.kind.is_eof() || token.kind.is_invalid() {
            return match scanner.errors.first() {
                Some(err) => Err(err.clone()),
                None if token.kind.is_eof() => Ok(tokens),
                None => {
                    let ch = token.text.chars().next().unwrap_or('\0');
                    Err(LexError::new(
                        LexErrorKind::UnexpectedChar(ch),
                        token.pos,
                        &token.text,
                    ))
                }
            };
        }
        tokens.push(token);
    }
}
