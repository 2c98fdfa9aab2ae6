//! Block comments and their executable variants.
//!
//! | Opener | Meaning |
//! |---|---|
//! | `/*! [version]` | MySQL executable comment: the body is scanned as SQL |
//! | `/*T! [id,..]` | feature-gated comment: executable when any listed feature is enabled, a plain comment otherwise |
//! | `/*+` | optimizer hint, when it directly follows a statement keyword |
//! | `/*` | plain comment |
//!
//! Executable comments are not tokens. The scanner notes that it is inside
//! one and drops the closing `*/` when it reaches it.

use sqllex_core::class::{is_digit, is_ident_char};
use tracing::{debug, trace, warn};

use super::Scanner;
use crate::lex_error::{LexError, LexErrorKind};
use crate::token::{Position, RawToken, TokenKind};

/// Version after `/*!`: five or six digits (`40101`, `100001`).
const VERSION_MIN_DIGITS: usize = 5;
const VERSION_MAX_DIGITS: usize = 6;

/// Keywords a hint comment may directly follow.
const HINT_ANCHORS: [TokenKind; 6] = [
    TokenKind::SELECT,
    TokenKind::UPDATE,
    TokenKind::INSERT,
    TokenKind::REPLACE,
    TokenKind::DELETE,
    TokenKind::CREATE,
];

/// How a `/*+` comment is treated.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum HintPlacement {
    /// Not after a statement keyword: an ordinary comment.
    Stray,
    Anchored,
    /// After `FOR UPDATE`, where hints are not allowed: dropped with a
    /// warning.
    AfterForUpdate,
}

impl Scanner {
    /// `/*...`, with the cursor on the `/`.
    pub(super) fn block_comment(&mut self, start: Position) -> Option<RawToken> {
        self.cursor.advance_n(2);
        let mut hint = HintPlacement::Stray;
        match self.cursor.peek() {
            b'!' => {
                self.cursor.advance();
                self.scan_version_digits(VERSION_MIN_DIGITS, VERSION_MAX_DIGITS);
                self.in_bang_comment = true;
                return None;
            }
            b'T' if self.cursor.peek_nth(1) == b'!' => {
                self.cursor.advance_n(2);
                if let Some(ids) = self.scan_feature_ids() {
                    if self.config.features.contains_any(ids.as_slice()) {
                        debug!(?ids, "executing feature-gated comment");
                        self.in_bang_comment = true;
                        return None;
                    }
                    debug!(?ids, "skipping feature-gated comment");
                }
            }
            b'+' => hint = self.hint_placement(),
            _ => {}
        }

        let Some(end) = self.cursor.find(b"*/") else {
            self.cursor.advance_to(usize::MAX);
            self.errors.push(LexError::new(
                LexErrorKind::UnterminatedComment,
                start,
                self.cursor.slice_from(start.offset),
            ));
            return Some(RawToken::eof(self.cursor.position()));
        };
        self.cursor.advance_to(end + 2);

        match hint {
            HintPlacement::Anchored => Some(self.token(TokenKind::HINT_COMMENT, start)),
            HintPlacement::AfterForUpdate => {
                let text = self.cursor.slice_from(start.offset);
                warn!(line = start.line, column = start.column, "hint after FOR UPDATE ignored");
                self.warnings.push(LexError::new(
                    LexErrorKind::HintAfterForUpdate,
                    start,
                    text,
                ));
                None
            }
            HintPlacement::Stray => {
                trace!(offset = start.offset, "comment");
                None
            }
        }
    }

    /// The `*/` that closes an executable comment.
    pub(super) fn close_bang_comment(&mut self) {
        self.cursor.advance_n(2);
        self.in_bang_comment = false;
    }

    fn hint_placement(&self) -> HintPlacement {
        let [last, before, before_that] = self.recent_keywords;
        if !last.is_some_and(|kind| HINT_ANCHORS.contains(&kind)) {
            return HintPlacement::Stray;
        }
        // `FOR UPDATE /*+ */` drops the hint; `CREATE BINDING FOR UPDATE` keeps it
        if before == Some(TokenKind::FOR) && before_that != Some(TokenKind::BINDING) {
            return HintPlacement::AfterForUpdate;
        }
        HintPlacement::Anchored
    }

    /// Consume between `min` and `max` digits. Fewer than `min` digits
    /// are left unconsumed.
    pub(super) fn scan_version_digits(&mut self, min: usize, max: usize) {
        let saved = self.cursor.position();
        for count in 0..max {
            if is_digit(self.cursor.peek()) {
                self.cursor.advance();
            } else if count < min {
                self.cursor.restore(saved);
                return;
            } else {
                return;
            }
        }
    }

    /// `[id1,id2,...]` after `/*T!`. Any deviation (whitespace, empty
    /// entries, a missing `]`) consumes nothing and yields `None`.
    pub(super) fn scan_feature_ids(&mut self) -> Option<Vec<String>> {
        let saved = self.cursor.position();
        let ids = self.feature_id_list();
        if ids.is_none() {
            self.cursor.restore(saved);
        }
        ids
    }

    fn feature_id_list(&mut self) -> Option<Vec<String>> {
        if self.cursor.peek() != b'[' {
            return None;
        }
        self.cursor.advance();

        let mut ids = Vec::new();
        loop {
            let id = self.cursor.offset();
            self.cursor.eat_while(is_ident_char);
            if self.cursor.offset() == id {
                return None;
            }
            ids.push(self.cursor.slice_from(id).to_owned());
            match self.cursor.peek() {
                b',' => self.cursor.advance(),
                b']' => {
                    self.cursor.advance();
                    return Some(ids);
                }
                _ => return None,
            }
        }
    }
}
