//! Scan errors.
//!
//! Every grammar violation the scanner can detect is a [`ScanError`]. Each
//! variant carries the [`Position`] of the offending lookahead byte and what
//! was found there, so a single line of text is enough to report it.
//!
//! # Examples
//!
//! ```rust
//! # use onepass::{Found, Position, ScanError};
//! let err = ScanError::MalformedInteger {
//!     found: Found(Some(b'.')),
//!     position: Position::new(0, 4),
//! };
//! assert_eq!(err.to_string(), "Integer expected, found '.' at 1:5");
//! ```

use crate::Position;
use std::fmt;
use thiserror::Error;

/// The lookahead byte at the point of failure, or end of input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Found(pub Option<u8>);

impl fmt::Display for Found {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(b) => write!(f, "{:?}", b as char),
            None => f.write_str("end of input"),
        }
    }
}

fn quoted(b: &u8) -> String {
    format!("{:?}", *b as char)
}

/// Errors raised while matching terminals and scanning tokens.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScanError {
    /// The matcher expected one specific byte.
    #[error("{} expected, found {found} at {position}", quoted(.expected))]
    Unexpected {
        expected: u8,
        found: Found,
        position: Position,
    },

    /// A name must start with a letter.
    #[error("Name expected, found {found} at {position}")]
    MalformedName { found: Found, position: Position },

    /// A number must start with a digit.
    #[error("Integer expected, found {found} at {position}")]
    MalformedInteger { found: Found, position: Position },

    /// An integer literal does not fit in `i64`.
    #[error("Integer literal out of range at {position}")]
    IntegerOverflow { position: Position },
}

impl ScanError {
    /// Position of the lookahead byte that caused the error.
    pub fn position(&self) -> Position {
        match self {
            Self::Unexpected { position, .. }
            | Self::MalformedName { position, .. }
            | Self::MalformedInteger { position, .. }
            | Self::IntegerOverflow { position } => *position,
        }
    }
}
