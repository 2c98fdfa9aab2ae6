//! Scanner diagnostics.
//!
//! The token stream itself only ever says `INVALID`; the scanner records a
//! [`LexError`] next to every invalid token so callers can report what went
//! wrong and where. Non-fatal findings (an optimizer hint the scanner had to
//! drop) use the same type and go to the warning list instead.

use thiserror::Error;

use crate::literal::LiteralError;
use crate::token::Position;

/// Longest excerpt kept in [`LexError::near`], in characters.
const NEAR_LIMIT: usize = 64;

/// A scanner diagnostic: where, what, and the source text involved.
#[derive(Clone, Debug, Error, PartialEq, Eq, Hash)]
#[error("{pos} near \"{near}\": {kind}")]
pub struct LexError {
    /// Start of the offending token.
    pub pos: Position,
    pub kind: LexErrorKind,
    /// The offending source text, truncated.
    pub near: String,
}

/// What went wrong.
#[derive(Clone, Debug, Error, PartialEq, Eq, Hash)]
pub enum LexErrorKind {
    // === Unterminated Literals ===
    #[error("unterminated string literal")]
    UnterminatedString,
    #[error("unterminated quoted identifier")]
    UnterminatedQuotedIdentifier,
    #[error("unterminated hex string literal")]
    UnterminatedHexString,
    #[error("unterminated bit string literal")]
    UnterminatedBitString,
    #[error("unterminated comment")]
    UnterminatedComment,

    // === Characters ===
    #[error("unexpected character {0:?}")]
    UnexpectedChar(char),

    // === Numbers ===
    #[error("exponent has no digits")]
    EmptyExponent,
    #[error("float literal out of range")]
    FloatOutOfRange,
    #[error(transparent)]
    Literal(#[from] LiteralError),

    // === Warnings ===
    #[error("optimizer hint after FOR UPDATE is ignored")]
    HintAfterForUpdate,
}

impl LexError {
    #[cold]
    pub fn new(kind: LexErrorKind, pos: Position, near: &str) -> Self {
        Self {
            pos,
            kind,
            near: truncate_near(near),
        }
    }

    /// `true` for findings that do not invalidate the token stream.
    pub fn is_warning(&self) -> bool {
        matches!(self.kind, LexErrorKind::HintAfterForUpdate)
    }
}

fn truncate_near(text: &str) -> String {
    match text.char_indices().nth(NEAR_LIMIT) {
        Some((cut, _)) => format!("{}...", &text[..cut]),
        None => text.to_owned(),
    }
}
