//! SQL mode flags that change how text is tokenized.
//!
//! Only the modes with a lexical effect are represented. [`SqlMode`] parses
//! MySQL's comma-separated `sql_mode` value; modes that matter to the
//! server but not to the scanner (`STRICT_TRANS_TABLES`, ...) are accepted
//! and dropped.

use std::str::FromStr;

use bitflags::bitflags;
use thiserror::Error;

bitflags! {
    /// Lexically relevant SQL mode flags.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct SqlMode: u32 {
        /// `"..."` quotes an identifier instead of a string.
        const ANSI_QUOTES = 1 << 0;
        /// `||` is string concatenation rather than logical OR.
        const PIPES_AS_CONCAT = 1 << 1;
        /// `NOT` binds tighter than comparison operators.
        const HIGH_NOT_PRECEDENCE = 1 << 2;
        /// Backslash is an ordinary character inside string literals.
        const NO_BACKSLASH_ESCAPES = 1 << 3;
    }
}

/// MySQL modes without a lexical effect.
const IGNORED_MODES: &[&str] = &[
    "ALLOW_INVALID_DATES",
    "ERROR_FOR_DIVISION_BY_ZERO",
    "IGNORE_SPACE",
    "NO_AUTO_CREATE_USER",
    "NO_AUTO_VALUE_ON_ZERO",
    "NO_DIR_IN_CREATE",
    "NO_ENGINE_SUBSTITUTION",
    "NO_FIELD_OPTIONS",
    "NO_KEY_OPTIONS",
    "NO_TABLE_OPTIONS",
    "NO_UNSIGNED_SUBTRACTION",
    "NO_ZERO_DATE",
    "NO_ZERO_IN_DATE",
    "ONLY_FULL_GROUP_BY",
    "PAD_CHAR_TO_FULL_LENGTH",
    "REAL_AS_FLOAT",
    "STRICT_ALL_TABLES",
    "STRICT_TRANS_TABLES",
    "TIME_TRUNCATE_FRACTIONAL",
    "TRADITIONAL",
];

/// Unknown name in an `sql_mode` string.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[error("unknown sql_mode {0:?}")]
pub struct ParseSqlModeError(pub String);

impl SqlMode {
    fn from_mode_name(name: &str) -> Option<Self> {
        let mode = match name {
            "ANSI_QUOTES" => Self::ANSI_QUOTES,
            "PIPES_AS_CONCAT" => Self::PIPES_AS_CONCAT,
            "HIGH_NOT_PRECEDENCE" => Self::HIGH_NOT_PRECEDENCE,
            "NO_BACKSLASH_ESCAPES" => Self::NO_BACKSLASH_ESCAPES,
            "ANSI" => Self::ANSI_QUOTES | Self::PIPES_AS_CONCAT,
            _ if IGNORED_MODES.contains(&name) => Self::empty(),
            _ => return None,
        };
        Some(mode)
    }
}

impl FromStr for SqlMode {
    type Err = ParseSqlModeError;

    /// Parse a comma-separated, case-insensitive list such as
    /// `"ansi_quotes,STRICT_TRANS_TABLES"`. Empty entries are skipped.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut mode = Self::empty();
        for part in s.split(',') {
            let name = part.trim().to_ascii_uppercase();
            if name.is_empty() {
                continue;
            }
            match Self::from_mode_name(&name) {
                Some(flags) => mode |= flags,
                None => return Err(ParseSqlModeError(part.trim().to_owned())),
            }
        }
        Ok(mode)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests;
