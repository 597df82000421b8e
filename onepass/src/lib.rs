//! # onepass
//!
//! Runtime pieces for translators that recognize, parse and act in a single
//! pass over their input, one byte of lookahead at a time.
//!
//! There is no token stream: a grammar procedure looks at the current byte,
//! decides which production applies, and consumes terminals directly from
//! the [`Scanner`]. The crate provides:
//!
//! - [`classify`]: byte-class predicates (letters, digits, white space,
//!   additive and multiplicative operators),
//! - [`Cursor`] and [`Position`]: location tracking for diagnostics,
//! - [`Scanner`]: the lookahead cursor, the matcher and the name/number
//!   scanners,
//! - [`ScanError`]: what went wrong and where.
//!
//! ## Example
//! ```rust
//! use onepass::{ScanError, ScanOptions, Scanner};
//!
//! let mut s = Scanner::new("(1 + x".bytes(), ScanOptions::default());
//! s.match_char(b'(').unwrap();
//! assert_eq!(s.scan_number().unwrap(), 1);
//! s.match_char(b'+').unwrap();
//! assert_eq!(s.scan_name().unwrap(), "X");
//! let err = s.match_char(b')').unwrap_err();
//! assert!(matches!(err, ScanError::Unexpected { expected: b')', .. }));
//! ```
pub mod classify;
mod cursor;
mod error;
mod scanner;

pub use cursor::{Cursor, Position};
pub use error::{Found, ScanError};
pub use scanner::{ScanOptions, ScanStats, Scanner};
