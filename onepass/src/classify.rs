//! Byte classes recognized by the scanner.
//!
//! Every predicate is pure and total. Classification is ASCII-only because
//! the scanner reads a byte stream; a non-ASCII byte belongs to no class and
//! is reported by whichever scanner expected something else.

/// Recognize an alpha character.
#[inline]
pub fn is_alpha(c: u8) -> bool {
    c.is_ascii_alphabetic()
}

/// Recognize a decimal digit.
#[inline]
pub fn is_digit(c: u8) -> bool {
    c.is_ascii_digit()
}

/// Recognize an alphanumeric.
#[inline]
pub fn is_alnum(c: u8) -> bool {
    is_alpha(c) || is_digit(c)
}

/// Recognize white space. Line terminators are not white space; they end
/// statements.
#[inline]
pub fn is_white(c: u8) -> bool {
    c == b' ' || c == b'\t'
}

/// Recognize an additive operator.
#[inline]
pub fn is_addop(c: u8) -> bool {
    c == b'+' || c == b'-'
}

/// Recognize a multiplicative operator.
#[inline]
pub fn is_mulop(c: u8) -> bool {
    c == b'*' || c == b'/'
}
