//! Binary literal decoding for hex (`0x1F`, `x'1F'`) and bit (`0b101`,
//! `b'101'`) literals.
//!
//! Both forms denote a byte string rather than a number: `x'0041'` is the
//! two bytes `00 41`. The value is kept as its big-endian byte pattern and
//! only turned into an integer on request ([`BinaryLiteral::to_u64`]).
//!
//! Digit validity was already checked by the scanner; what can still fail
//! here is the shape of the literal (an odd number of digits inside
//! `x'...'`) and integer conversion.

use std::fmt;

use thiserror::Error;

/// Why a hex or bit literal could not be decoded.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq, Hash)]
pub enum LiteralError {
    #[error("hex string literal must have an even number of digits")]
    OddHexDigits,
    #[error("invalid hex digit")]
    InvalidHexDigit,
    #[error("invalid bit digit")]
    InvalidBitDigit,
    #[error("not a hex or bit literal")]
    Malformed,
    #[error("binary literal does not fit in 64 bits")]
    Overflow,
}

/// Byte string denoted by a hex or bit literal.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct BinaryLiteral(Vec<u8>);

impl BinaryLiteral {
    pub fn new(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }

    /// Decode `0x..`/`0X..` or `x'..'`/`X'..'` source text.
    ///
    /// `0x` literals with an odd digit count are left-padded with `0`;
    /// the quoted form must have an even count.
    pub fn from_hex_literal(text: &str) -> Result<Self, LiteralError> {
        let prefixed = text.strip_prefix("0x").or_else(|| text.strip_prefix("0X"));
        let digits = if let Some(rest) = prefixed {
            rest
        } else {
            let quoted = strip_quotes(text, b'x').ok_or(LiteralError::Malformed)?;
            if quoted.len() % 2 != 0 {
                return Err(LiteralError::OddHexDigits);
            }
            quoted
        };

        let digits = digits.as_bytes();
        let mut bytes = Vec::with_capacity(digits.len().div_ceil(2));
        let (head, tail) = digits.split_at(digits.len() % 2);
        if let [nibble] = head {
            bytes.push(hex_value(*nibble)?);
        }
        for pair in tail.chunks_exact(2) {
            bytes.push((hex_value(pair[0])? << 4) | hex_value(pair[1])?);
        }
        Ok(Self(bytes))
    }

    /// Decode `0b..` or `b'..'`/`B'..'` source text, left-padding the
    /// digits to whole bytes.
    pub fn from_bit_literal(text: &str) -> Result<Self, LiteralError> {
        let digits = match text.strip_prefix("0b") {
            Some(rest) => rest,
            None => strip_quotes(text, b'b').ok_or(LiteralError::Malformed)?,
        };

        let digits = digits.as_bytes();
        let mut bytes = Vec::with_capacity(digits.len().div_ceil(8));
        let (head, tail) = digits.split_at(digits.len() % 8);
        if !head.is_empty() {
            bytes.push(bit_value(head)?);
        }
        for octet in tail.chunks_exact(8) {
            bytes.push(bit_value(octet)?);
        }
        Ok(Self(bytes))
    }

    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Unsigned value of the byte string. Leading zero bytes are ignored;
    /// the empty literal is `0`.
    pub fn to_u64(&self) -> Result<u64, LiteralError> {
        let first_nonzero = self.0.iter().position(|&b| b != 0).unwrap_or(self.0.len());
        let significant = &self.0[first_nonzero..];
        if significant.len() > 8 {
            return Err(LiteralError::Overflow);
        }
        Ok(significant
            .iter()
            .fold(0u64, |acc, &b| (acc << 8) | u64::from(b)))
    }
}

impl fmt::Display for BinaryLiteral {
    /// `0x`-prefixed upper-case hex, or `''` for the empty literal.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return f.write_str("''");
        }
        f.write_str("0x")?;
        for b in &self.0 {
            write!(f, "{b:02X}")?;
        }
        Ok(())
    }
}

/// Body of `p'...'` / `P'...'`.
fn strip_quotes(text: &str, prefix: u8) -> Option<&str> {
    let bytes = text.as_bytes();
    let well_formed = bytes.len() >= 3
        && bytes[0].eq_ignore_ascii_case(&prefix)
        && bytes[1] == b'\''
        && bytes[bytes.len() - 1] == b'\'';
    well_formed.then(|| &text[2..text.len() - 1])
}

fn hex_value(digit: u8) -> Result<u8, LiteralError> {
    match digit {
        b'0'..=b'9' => Ok(digit - b'0'),
        b'a'..=b'f' => Ok(digit - b'a' + 10),
        b'A'..=b'F' => Ok(digit - b'A' + 10),
        _ => Err(LiteralError::InvalidHexDigit),
    }
}

/// Value of up to eight bit digits.
fn bit_value(digits: &[u8]) -> Result<u8, LiteralError> {
    digits.iter().try_fold(0u8, |acc, &d| match d {
        b'0' => Ok(acc << 1),
        b'1' => Ok((acc << 1) | 1),
        _ => Err(LiteralError::InvalidBitDigit),
    })
}
