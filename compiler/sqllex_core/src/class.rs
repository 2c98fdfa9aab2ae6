//! Byte classification for the SQL scanner.
//!
//! All predicates return `false` for `0x00`, which is what lets
//! [`Cursor::eat_while`](crate::Cursor::eat_while) stop on the sentinel.
//! Any byte `>= 0x80` belongs to a multi-byte character; the dialect treats
//! every non-ASCII character as an identifier character.

/// Letters, digits, `_`, `$` and any non-ASCII byte.
#[inline]
pub fn is_ident_char(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_' || b == b'$' || b >= 0x80
}

/// Identifier characters plus `.`, which user variables (`@a.b`) allow.
#[inline]
pub fn is_user_var_char(b: u8) -> bool {
    is_ident_char(b) || b == b'.'
}

#[inline]
pub fn is_digit(b: u8) -> bool {
    b.is_ascii_digit()
}

#[inline]
pub fn is_hex_digit(b: u8) -> bool {
    b.is_ascii_hexdigit()
}

#[inline]
pub fn is_bit_digit(b: u8) -> bool {
    b == b'0' || b == b'1'
}

/// ASCII whitespace: space, `\t`, `\n`, `\r`, vertical tab and form feed.
#[inline]
pub fn is_space(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\n' | b'\r' | 0x0B | 0x0C)
}

/// `true` for UTF-8 continuation bytes (`10xx_xxxx`).
#[inline]
pub fn is_continuation(b: u8) -> bool {
    b & 0xC0 == 0x80
}

/// Number of bytes in the UTF-8 character starting with `byte`.
///
/// Continuation and invalid lead bytes count as one byte.
#[inline]
pub fn utf8_char_width(byte: u8) -> usize {
    match byte {
        0xC0..=0xDF => 2,
        0xE0..=0xEF => 3,
        0xF0..=0xF7 => 4,
        _ => 1,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sentinel_is_in_no_class() {
        let preds: [fn(u8) -> bool; 6] = [
            is_ident_char,
            is_user_var_char,
            is_digit,
            is_hex_digit,
            is_bit_digit,
            is_space,
        ];
        for pred in preds {
            assert!(!pred(0));
        }
    }

    #[test]
    fn ident_chars() {
        for b in b"azAZ09_$".iter().copied().chain([0x80, 0xE5, 0xFF]) {
            assert!(is_ident_char(b), "{b:#x} should be an identifier char");
        }
        for b in b".@'`\" -+*/(),;".iter().copied() {
            assert!(!is_ident_char(b), "{b:#x} should not be an identifier char");
        }
    }

    #[test]
    fn user_var_chars_add_dot() {
        assert!(is_user_var_char(b'.'));
        assert!(is_user_var_char(b'a'));
        assert!(!is_user_var_char(b'-'));
        assert!(!is_user_var_char(b'!'));
    }

    #[test]
    fn char_widths() {
        assert_eq!(utf8_char_width(b'a'), 1);
        assert_eq!(utf8_char_width("é".as_bytes()[0]), 2);
        assert_eq!(utf8_char_width("哈".as_bytes()[0]), 3);
        assert_eq!(utf8_char_width("😀".as_bytes()[0]), 4);
        assert!(is_continuation("哈".as_bytes()[1]));
        assert!(!is_continuation(b'a'));
    }
}
