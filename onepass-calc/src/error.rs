//! # Calculator Error Type
//!
//! This module defines [`CalcError`], the single error surface of the
//! interpreter. It aggregates failures from:
//!
//! - **Scanning** (a terminal or token was not where the grammar needs it),
//! - **Arithmetic** (division by zero, `i64` overflow),
//! - **Routine calls** (a `Name()` with nothing registered under that name),
//! - **Input values** (malformed or missing values for `?` statements),
//! - **I/O** on the output or input channel.
//!
//! Every variant is fatal: the first one ends the run. Conversions from
//! underlying error types are derived with `#[from]`, so grammar code
//! propagates with `?`.
use onepass::{Position, ScanError};
use smartstring::alias::String;
use thiserror::Error;

/// Represents all possible errors that can occur within the calculator.
///
/// # Examples
/// Propagating a scan failure:
/// ```rust
/// # use onepass::{Found, Position, ScanError};
/// # use onepass_calc::CalcError;
/// let underlying = ScanError::MalformedName {
///     found: Found(Some(b'=')),
///     position: Position::new(0, 0),
/// };
/// let err: CalcError = underlying.into();
/// assert!(matches!(err, CalcError::Scan(_)));
/// assert!(err.to_string().starts_with("Name expected"));
/// ```
#[derive(Debug, Error)]
pub enum CalcError {
    /// The program text violates the grammar.
    #[error(transparent)]
    Scan(#[from] ScanError),

    /// The right operand of `/` evaluated to zero.
    #[error("Division by zero at {position}")]
    DivisionByZero { position: Position },

    /// An arithmetic result does not fit in `i64`.
    #[error("Arithmetic overflow at {position}")]
    Overflow { position: Position },

    /// `Name()` was used but no routine is registered under `name`.
    #[error("Unknown routine {name} at {position}")]
    UnknownRoutine { name: String, position: Position },

    /// An input value is not an unsigned decimal integer.
    #[error("Input value {text:?} is not an unsigned integer")]
    BadInput { text: String },

    /// An input value has only digits but does not fit in `i64`.
    #[error("unable to parse {0:?}")]
    ParseInt(#[from] std::num::ParseIntError),

    /// A `?` statement ran after the input channel ended.
    #[error("Input exhausted")]
    InputExhausted,

    /// Reading input values or writing output failed.
    #[error("i/o error {0}")]
    Io(#[from] std::io::Error),
}
