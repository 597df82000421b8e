//! # Scanner
//!
//! A [`Scanner`] owns the input byte stream and exactly one byte of
//! lookahead. Grammar procedures inspect [`Scanner::look`] to decide what to
//! do next and then consume with [`Scanner::match_char`], [`Scanner::scan_name`]
//! or [`Scanner::scan_number`]. Between two such calls the lookahead always
//! holds the next byte nobody has consumed yet.
//!
//! In the whitespace-aware configuration (the default) every successful
//! consumption also skips the spaces and tabs that follow, so grammar code
//! never sees white space at all.
//!
//! ## Example
//! ```rust
//! # use onepass::{Scanner, ScanOptions};
//! let mut s = Scanner::new("alpha = 42".bytes(), ScanOptions::default());
//! assert_eq!(s.scan_name().unwrap(), "ALPHA");
//! s.match_char(b'=').unwrap();
//! assert_eq!(s.scan_number().unwrap(), 42);
//! assert_eq!(s.look(), None);
//! ```

use crate::classify::{is_alnum, is_alpha, is_digit, is_white};
use crate::{Cursor, Found, Position, ScanError};
use smartstring::alias::String;
use std::iter::Fuse;

/// Tunables of the scanner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScanOptions {
    /// Names take the longest run of alphanumerics. When off, a name is
    /// exactly one letter.
    pub maximal_munch: bool,
    /// Skip spaces and tabs after every consumed token.
    pub skip_white: bool,
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self {
            maximal_munch: true,
            skip_white: true,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanStats {
    /// Bytes consumed.
    pub chars: usize,
    /// Successful terminal matches.
    pub matches: usize,
}

pub struct Scanner<I>
where
    I: Iterator<Item = u8>,
{
    input: Fuse<I>,
    look: Option<u8>,
    cursor: Cursor,
    options: ScanOptions,
    stats: ScanStats,
}

impl<I> Scanner<I>
where
    I: Iterator<Item = u8>,
{
    /// Creates a scanner and primes the lookahead with the first byte.
    pub fn new(input: I, options: ScanOptions) -> Self {
        let mut input = input.fuse();
        let look = input.next();
        let mut scanner = Self {
            input,
            look,
            cursor: Cursor::new(),
            options,
            stats: ScanStats::default(),
        };
        scanner.skip_white();
        scanner
    }

    /// The lookahead byte, `None` at end of input.
    #[inline]
    pub fn look(&self) -> Option<u8> {
        self.look
    }

    #[inline]
    pub fn is_look(&self, b: u8) -> bool {
        self.look == Some(b)
    }

    /// Position of the lookahead byte.
    #[inline]
    pub fn position(&self) -> Position {
        self.cursor.position
    }

    pub fn options(&self) -> ScanOptions {
        self.options
    }

    pub fn stats(&self) -> ScanStats {
        self.stats.clone()
    }

    /// Consumes the lookahead byte and reads the next one.
    ///
    /// Must be called exactly once per consumed byte. At end of input this is
    /// a no-op.
    pub fn advance(&mut self) {
        if let Some(b) = self.look {
            self.cursor.advance(b);
            self.stats.chars += 1;
            self.look = self.input.next();
        }
    }

    /// Skips spaces and tabs. A no-op unless `skip_white` is on.
    pub fn skip_white(&mut self) {
        if !self.options.skip_white {
            return;
        }
        while self.look.is_some_and(is_white) {
            self.advance();
        }
    }

    /// Consumes `expected` or fails naming it.
    pub fn match_char(&mut self, expected: u8) -> Result<(), ScanError> {
        if self.look != Some(expected) {
            return Err(ScanError::Unexpected {
                expected,
                found: Found(self.look),
                position: self.position(),
            });
        }
        log::trace!("MATCH: {:?} at {}", expected as char, self.position());
        self.stats.matches += 1;
        self.advance();
        self.skip_white();
        Ok(())
    }

    /// Recognizes and skips line terminators.
    ///
    /// Any run of `\r` and `\n` is consumed, and so is the white space that
    /// starts the following line. Finding no terminator is not an error.
    pub fn new_line(&mut self) {
        while matches!(self.look, Some(b'\r' | b'\n')) {
            self.advance();
        }
        self.skip_white();
    }

    /// Gets an identifier, upper-cased.
    pub fn scan_name(&mut self) -> Result<String, ScanError> {
        if !self.look.is_some_and(is_alpha) {
            return Err(ScanError::MalformedName {
                found: Found(self.look),
                position: self.position(),
            });
        }
        let mut name = String::new();
        while let Some(b) = self.look.filter(|&b| is_alnum(b)) {
            name.push(b.to_ascii_uppercase() as char);
            self.advance();
            if !self.options.maximal_munch {
                break;
            }
        }
        self.skip_white();
        Ok(name)
    }

    /// Gets an unsigned decimal integer.
    pub fn scan_number(&mut self) -> Result<i64, ScanError> {
        let start = self.position();
        if !self.look.is_some_and(is_digit) {
            return Err(ScanError::MalformedInteger {
                found: Found(self.look),
                position: start,
            });
        }
        let mut value: i64 = 0;
        while let Some(b) = self.look.filter(|&b| is_digit(b)) {
            value = value
                .checked_mul(10)
                .and_then(|v| v.checked_add(i64::from(b - b'0')))
                .ok_or(ScanError::IntegerOverflow { position: start })?;
            self.advance();
        }
        self.skip_white();
        Ok(value)
    }
}
