//! # Code-emitting backend
//!
//! [`Emitter`] translates the same grammar into Motorola 68000 assembly
//! text instead of evaluating it. Expression results live in `D0`; a left
//! operand is pushed on the stack while the right one is computed and
//! popped again by the combining instruction.
//!
//! | Source              | Emitted                                  |
//! |---------------------|------------------------------------------|
//! | `7`                 | `MOVE #7,D0`                             |
//! | `X`                 | `MOVE X(PC),D0`                          |
//! | `F()`               | `BSR F`                                  |
//! | leading sign        | `CLR D0`                                 |
//! | before right operand| `MOVE D0,-(SP)`                          |
//! | `+`                 | `ADD (SP)+,D0`                           |
//! | `-`                 | `SUB (SP)+,D0`, `NEG D0`                 |
//! | `*`                 | `MULS (SP)+,D0`                          |
//! | `/`                 | `MOVE (SP)+,D1`, `DIVS D1,D0`            |
//! | `X = ...`           | `LEA X(PC),A0`, `MOVE D0,(A0)`           |
//! | `?X`                | `BSR READ`, then the store               |
//! | `!X`                | `MOVE X(PC),D0`, `BSR WRITE`             |
//!
//! Every instruction is written on its own line, indented by a tab.

use crate::{Backend, BinOp, CalcError};
use onepass::Position;
use std::io::Write;

pub struct Emitter<W> {
    out: W,
}

impl<W> Emitter<W>
where
    W: Write,
{
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    /// Outputs an instruction with tab and newline.
    fn emit_ln(&mut self, s: &str) -> Result<(), CalcError> {
        log::trace!("EMIT: {s}");
        writeln!(self.out, "\t{s}")?;
        Ok(())
    }
}

impl<W> Backend for Emitter<W>
where
    W: Write,
{
    type Value = ();

    fn number(&mut self, value: i64) -> Result<(), CalcError> {
        self.emit_ln(&format!("MOVE #{value},D0"))
    }

    fn variable(&mut self, name: &str) -> Result<(), CalcError> {
        self.emit_ln(&format!("MOVE {name}(PC),D0"))
    }

    fn call(&mut self, name: &str, _at: Position) -> Result<(), CalcError> {
        self.emit_ln(&format!("BSR {name}"))
    }

    fn zero(&mut self) -> Result<(), CalcError> {
        self.emit_ln("CLR D0")
    }

    fn push(&mut self, _lhs: ()) -> Result<(), CalcError> {
        self.emit_ln("MOVE D0,-(SP)")
    }

    fn binary(&mut self, op: BinOp, _lhs: (), _rhs: (), _at: Position) -> Result<(), CalcError> {
        match op {
            BinOp::Add => self.emit_ln("ADD (SP)+,D0"),
            BinOp::Sub => {
                self.emit_ln("SUB (SP)+,D0")?;
                self.emit_ln("NEG D0")
            }
            BinOp::Mul => self.emit_ln("MULS (SP)+,D0"),
            BinOp::Div => {
                self.emit_ln("MOVE (SP)+,D1")?;
                self.emit_ln("DIVS D1,D0")
            }
        }
    }

    fn assign(&mut self, name: &str, _value: ()) -> Result<(), CalcError> {
        self.emit_ln(&format!("LEA {name}(PC),A0"))?;
        self.emit_ln("MOVE D0,(A0)")
    }

    fn input(&mut self) -> Result<(), CalcError> {
        self.emit_ln("BSR READ")
    }

    fn output(&mut self, name: &str) -> Result<(), CalcError> {
        self.variable(name)?;
        self.emit_ln("BSR WRITE")
    }
}
