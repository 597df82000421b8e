//! # Backends
//!
//! The grammar in [`crate::parser`] does not compute anything itself. Each
//! time it recognizes a piece of a statement it calls a hook on a
//! [`Backend`], and the backend decides what recognizing that piece means:
//! [`crate::Evaluator`] computes integers on the spot, [`crate::Emitter`]
//! writes 68000 assembly that would compute them.
//!
//! Hooks are called in source order, so a backend that produces output
//! (rather than values) sees exactly the sequence a one-pass code generator
//! needs.
use crate::CalcError;
use onepass::Position;

/// A binary arithmetic operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinOp {
    Add,
    Sub,
    Mul,
    Div,
}

impl BinOp {
    /// Maps `+` and `-`.
    pub fn additive(b: u8) -> Option<Self> {
        match b {
            b'+' => Some(Self::Add),
            b'-' => Some(Self::Sub),
            _ => None,
        }
    }

    /// Maps `*` and `/`.
    pub fn multiplicative(b: u8) -> Option<Self> {
        match b {
            b'*' => Some(Self::Mul),
            b'/' => Some(Self::Div),
            _ => None,
        }
    }

    /// The source byte of the operator.
    pub fn symbol(self) -> u8 {
        match self {
            Self::Add => b'+',
            Self::Sub => b'-',
            Self::Mul => b'*',
            Self::Div => b'/',
        }
    }
}

/// Semantic hooks driven by [`crate::CalcParser`].
///
/// `Value` is whatever an expression produces: a number for an interpreter,
/// `()` for a code generator whose result lives in a register.
pub trait Backend {
    type Value;

    /// An integer literal.
    fn number(&mut self, value: i64) -> Result<Self::Value, CalcError>;

    /// A variable read.
    fn variable(&mut self, name: &str) -> Result<Self::Value, CalcError>;

    /// A zero-argument call `name()` found at `at`.
    fn call(&mut self, name: &str, at: Position) -> Result<Self::Value, CalcError>;

    /// The implicit left operand of a leading `+` or `-`.
    fn zero(&mut self) -> Result<Self::Value, CalcError>;

    /// Called with the left operand just before the right operand is parsed.
    fn push(&mut self, lhs: Self::Value) -> Result<Self::Value, CalcError> {
        Ok(lhs)
    }

    /// Combines both operands of `op`, whose source position is `at`.
    fn binary(
        &mut self,
        op: BinOp,
        lhs: Self::Value,
        rhs: Self::Value,
        at: Position,
    ) -> Result<Self::Value, CalcError>;

    /// Stores `value` into `name`.
    fn assign(&mut self, name: &str, value: Self::Value) -> Result<(), CalcError>;

    /// Reads a value from the input channel.
    fn input(&mut self) -> Result<Self::Value, CalcError>;

    /// Writes the value of `name` to the output channel.
    fn output(&mut self, name: &str) -> Result<(), CalcError>;
}
