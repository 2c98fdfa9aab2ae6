//! Lexical scanner for the MySQL/TiDB SQL dialect.
//!
//! Turns SQL text into the token stream a grammar consumes, one token per
//! call:
//!
//! ```
//! use sqllex::{Scanner, TokenKind};
//!
//! let mut scanner = Scanner::new("SELECT a FROM t WHERE b = 'x'");
//! assert_eq!(scanner.next_token().kind, TokenKind::SELECT);
//! ```
//!
//! # Crate Layout
//!
//! - [`Scanner`]: the scanner itself, with a raw layer
//!   ([`scan_raw`](Scanner::scan_raw)) and a cooking layer
//!   ([`next_token`](Scanner::next_token)).
//! - [`token`]: token ids and the [`Token`] record.
//! - [`keywords`]: keyword, alias and operator tables.
//! - [`ScannerConfig`], [`SqlMode`], [`FeatureSet`]: what changes how text
//!   is classified.
//! - [`LexError`]: diagnostics recorded next to `INVALID` tokens.
//!
//! Source navigation (buffer, cursor, positions) lives in `sqllex_core`.
//!
//! # Tracing
//!
//! The scanner emits `tracing` events under the `sqllex` target. Call
//! [`init_tracing`] and set `RUST_LOG=sqllex=trace` to see every token.

pub mod config;
pub mod features;
pub mod keywords;
pub mod lex_error;
pub mod literal;
mod scanner;
pub mod sql_mode;
pub mod token;
mod tracing_setup;

pub use config::ScannerConfig;
pub use features::FeatureSet;
pub use keywords::KeywordCategory;
pub use lex_error::{LexError, LexErrorKind};
pub use literal::BinaryLiteral;
pub use scanner::{tokenize, Scanner};
pub use sql_mode::SqlMode;
pub use token::{Literal, Position, RawToken, Token, TokenKind};
pub use tracing_setup::init_tracing;
