//! Low-level source navigation for the `sqllex` SQL scanner.
//!
//! This crate owns the input text and the read head that walks it:
//!
//! - [`SourceBuffer`]: owned, sentinel-terminated copy of the SQL text,
//!   reusable across inputs without reallocating.
//! - [`Cursor`]: byte-addressable read head with one-byte look-ahead,
//!   character-aware advancing and line/column/offset tracking.
//! - [`Position`]: the (line, column, offset) triple attached to tokens.
//! - [`class`]: byte classification shared by the scanner's sub-scanners.
//!
//! Nothing here knows about tokens or keywords; that lives in `sqllex`.

pub mod class;
mod cursor;
mod position;
mod source_buffer;

pub use cursor::Cursor;
pub use position::Position;
pub use source_buffer::SourceBuffer;
