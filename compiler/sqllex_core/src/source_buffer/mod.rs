//! Sentinel-terminated source buffer.
//!
//! The buffer guarantees `0x00` sentinel bytes after the SQL text, so the
//! cursor can look a few bytes ahead near the end of input without bounds
//! checks in the scanner. The total size is rounded up to the next 64-byte
//! boundary for cache-line alignment.
//!
//! The padding is made of `'\0'` characters, which are valid UTF-8, so the
//! whole buffer stays a `String` and every source slice can be borrowed as
//! `&str` without re-validation or `unsafe`.
//!
//! Unlike a one-shot buffer, a `SourceBuffer` is meant to be reused: a
//! scanner that is handed a new statement calls [`reset`](SourceBuffer::reset)
//! and keeps its allocation.

/// Cache line size in bytes, used for buffer alignment padding.
const CACHE_LINE: usize = 64;

/// Minimum number of sentinel bytes after the source.
///
/// The scanner looks at most three bytes past the current one (`<=>`,
/// `->>`), so four zero bytes keep every look-ahead inside the buffer.
pub const SENTINEL_LEN: usize = 4;

/// Owned, sentinel-terminated copy of the SQL text.
///
/// # Layout
///
/// ```text
/// [source_bytes..., 0x00 x SENTINEL_LEN, padding_zeros...]
///  ^                ^                     ^
///  0                source_len            rounded up to 64-byte boundary
/// ```
#[derive(Clone, Debug, Default)]
pub struct SourceBuffer {
    /// Source text followed by sentinel and padding `'\0'` characters.
    text: String,
    /// Length of the actual source content (excludes sentinel and padding).
    source_len: usize,
}

impl SourceBuffer {
    /// Create a new sentinel-terminated buffer from source text.
    pub fn new(source: &str) -> Self {
        let mut buf = Self {
            text: String::with_capacity(padded_len(source.len())),
            source_len: 0,
        };
        buf.reset(source);
        buf
    }

    /// Replace the contents with `source`, keeping the allocation.
    pub fn reset(&mut self, source: &str) {
        let padded = padded_len(source.len());
        self.text.clear();
        self.text.reserve(padded);
        self.text.push_str(source);
        self.text
            .extend(std::iter::repeat('\0').take(padded - source.len()));
        self.source_len = source.len();
    }

    /// The source text (without sentinel or padding).
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.text[..self.source_len]
    }

    /// The source bytes (without sentinel or padding).
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        self.as_str().as_bytes()
    }

    /// The full buffer including sentinel and cache-line padding.
    #[inline]
    pub fn as_sentinel_bytes(&self) -> &[u8] {
        self.text.as_bytes()
    }

    /// Byte at `index`, or `0x00` anywhere past the source content.
    #[inline]
    pub fn byte_at(&self, index: usize) -> u8 {
        self.text.as_bytes().get(index).copied().unwrap_or(0)
    }

    /// Length of the source content in bytes.
    #[inline]
    pub fn len(&self) -> usize {
        self.source_len
    }

    /// Returns `true` if the source content is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.source_len == 0
    }
}

/// Buffer length for a source of `source_len` bytes: at least
/// [`SENTINEL_LEN`] trailing zeros, rounded up to a cache line.
fn padded_len(source_len: usize) -> usize {
    (source_len + SENTINEL_LEN + CACHE_LINE - 1) & !(CACHE_LINE - 1)
}
