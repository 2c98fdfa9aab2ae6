//! Source positions attached to tokens and diagnostics.

use std::fmt;

/// A point in the source text: zero-based line, column and byte offset.
///
/// Columns count characters, not bytes. The line counter advances when a
/// `\n` is consumed, and that `\n` occupies column 0 of the line it opens,
/// so the first character after a line break sits at column 1.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    pub line: usize,
    pub column: usize,
    pub offset: usize,
}

impl Position {
    /// Start of input.
    pub const START: Self = Self::new(0, 0, 0);

    #[inline]
    pub const fn new(line: usize, column: usize, offset: usize) -> Self {
        Self {
            line,
            column,
            offset,
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {} column {}", self.line, self.column)
    }
}
