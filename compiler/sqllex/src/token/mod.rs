//! Token identifiers and the token record handed to the parser.
//!
//! # Token Id Space
//!
//! [`TokenKind`] is a `u16` newtype shared with the grammar:
//!
//! | Range | Meaning |
//! |---|---|
//! | `0` | end of input |
//! | `1..=255` | single-character punctuation, id = byte value |
//! | `256..=KEYWORD_BASE` | literal, identifier and operator categories |
//! | `> KEYWORD_BASE` | keywords, in [`keywords()`](crate::keywords::keywords) order |
//!
//! Both ranges above 255 are allocated by `define_tokens!` / `define_keywords!`
//! from a private `#[repr(u16)]` enum, so adding an entry never requires
//! renumbering by hand.

use std::fmt;

pub use sqllex_core::Position;

use crate::keywords;
use crate::literal::BinaryLiteral;

/// Classification of a scanned token.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TokenKind(pub(crate) u16);

macro_rules! define_tokens {
    ( $( $(#[$meta:meta])* $name:ident => $label:literal, )* ) => {
        #[allow(non_camel_case_types, dead_code, clippy::upper_case_acronyms)]
        #[repr(u16)]
        enum Ordinal {
            Base = 255,
            $( $name, )*
            End,
        }

        impl TokenKind {
            $(
                $(#[$meta])*
                pub const $name: Self = Self(Ordinal::$name as u16);
            )*
        }

        /// Last id used by the literal/operator categories. Keyword ids start
        /// right after it.
        pub(crate) const KEYWORD_BASE: u16 = Ordinal::End as u16;

        fn category_label(kind: TokenKind) -> Option<&'static str> {
            match kind {
                $( TokenKind::$name => Some($label), )*
                _ => None,
            }
        }
    };
}

define_tokens! {
    /// A byte sequence that cannot start any token, or a literal that could
    /// not be completed or decoded.
    INVALID => "invalid",
    IDENTIFIER => "identifier",
    /// Backtick-quoted (or ANSI `"`-quoted) identifier. Only produced by
    /// [`Scanner::scan_raw`](crate::Scanner::scan_raw); `next_token` folds it into
    /// [`IDENTIFIER`](Self::IDENTIFIER).
    QUOTED_IDENTIFIER => "quoted identifier",
    STRING_LIT => "string literal",
    INT_LIT => "integer literal",
    DECIMAL_LIT => "decimal literal",
    FLOAT_LIT => "float literal",
    HEX_LIT => "hex literal",
    BIT_LIT => "bit literal",
    /// `_utf8mb4`, `N`: names the character set of the string that follows.
    CHARSET_INTRODUCER => "charset introducer",
    /// `@name`
    SINGLE_AT_IDENTIFIER => "user variable",
    /// `@@[scope.]name`
    DOUBLE_AT_IDENTIFIER => "system variable",
    /// `/*+ ... */` after a statement keyword.
    HINT_COMMENT => "optimizer hint",
    /// `?`
    PARAM_MARKER => "?",
    EQ => "=",
    /// `<=>`
    NULL_EQ => "<=>",
    GE => ">=",
    LE => "<=",
    NEQ => "!=",
    NEQ_SYNONYM => "<>",
    LSH => "<<",
    RSH => ">>",
    AND_AND => "&&",
    AND_NOT => "&^",
    /// `||` under `PIPES_AS_CONCAT`.
    PIPES => "||",
    /// `||` as logical OR (the default).
    PIPES_AS_OR => "|| (or)",
    /// `:=`
    ASSIGNMENT_EQ => ":=",
    /// `->`
    JSON_EXTRACT => "->",
    /// `->>`
    JSON_UNQUOTE_EXTRACT => "->>",
    /// `NOT` under `HIGH_NOT_PRECEDENCE`.
    NOT2 => "NOT (high precedence)",
}

impl TokenKind {
    /// End of input.
    pub const EOF: Self = Self(0);

    /// Id of a single-character punctuation token.
    #[inline]
    #[allow(clippy::cast_lossless, reason = "u16::from is not const")]
    pub const fn from_byte(byte: u8) -> Self {
        Self(byte as u16)
    }

    /// Numeric id, as the grammar sees it.
    #[inline]
    pub const fn id(self) -> u16 {
        self.0
    }

    #[inline]
    pub fn is_eof(self) -> bool {
        self == Self::EOF
    }

    #[inline]
    pub fn is_invalid(self) -> bool {
        self == Self::INVALID
    }

    /// The punctuation character, for ids in `1..=255`.
    pub fn as_char(self) -> Option<char> {
        match u8::try_from(self.0) {
            Ok(0) | Err(_) => None,
            Ok(byte) => Some(char::from(byte)),
        }
    }

    /// `true` for ids allocated by the keyword table.
    #[inline]
    pub fn is_keyword(self) -> bool {
        self.0 > KEYWORD_BASE
    }

    /// Canonical spelling for keywords, a short label for every other
    /// category. `None` for punctuation and end of input.
    pub fn name(self) -> Option<&'static str> {
        if self.is_keyword() {
            keywords::spelling(self)
        } else {
            category_label(self)
        }
    }

    /// Position of a keyword id within the keyword table.
    pub(crate) fn keyword_index(self) -> Option<usize> {
        self.0.checked_sub(KEYWORD_BASE + 1).map(usize::from)
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_eof() {
            return f.write_str("end of input");
        }
        match (self.name(), self.as_char()) {
            (Some(name), _) => f.write_str(name),
            (None, Some(ch)) => write!(f, "'{ch}'"),
            (None, None) => write!(f, "#{}", self.0),
        }
    }
}

impl fmt::Debug for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TokenKind({self})")
    }
}

// ─── Tokens ───

/// Decoded value of a literal token.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum Literal {
    /// No value beyond the token text.
    #[default]
    None,
    /// Integer literal that fits `i64`.
    Int(i64),
    /// Integer literal above `i64::MAX` that fits `u64`.
    Uint(u64),
    /// Decimal literal (or an integer too large for `u64`), kept as text.
    Decimal(String),
    Float(f64),
    /// Hex or bit literal as its big-endian byte pattern.
    Bits(BinaryLiteral),
    /// Character set named by a charset introducer, lower-case.
    Charset(String),
}

/// One token as handed to the parser by
/// [`Scanner::next_token`](crate::Scanner::next_token).
#[derive(Clone, Debug, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    /// Where the token starts.
    pub pos: Position,
    /// Unescaped body for strings and quoted identifiers, verbatim source
    /// text for everything else.
    pub text: String,
    pub value: Literal,
}

impl Token {
    pub fn new(kind: TokenKind, pos: Position, text: impl Into<String>) -> Self {
        Self {
            kind,
            pos,
            text: text.into(),
            value: Literal::None,
        }
    }

    #[must_use]
    pub fn with_value(mut self, value: Literal) -> Self {
        self.value = value;
        self
    }
}

/// A token before keyword resolution and literal decoding, as produced by
/// [`Scanner::scan_raw`](crate::Scanner::scan_raw).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RawToken {
    pub kind: TokenKind,
    pub pos: Position,
    pub text: String,
}

impl RawToken {
    pub fn new(kind: TokenKind, pos: Position, text: impl Into<String>) -> Self {
        Self {
            kind,
            pos,
            text: text.into(),
        }
    }

    pub(crate) fn eof(pos: Position) -> Self {
        Self::new(TokenKind::EOF, pos, String::new())
    }
}
