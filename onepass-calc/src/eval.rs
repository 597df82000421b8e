//! # Evaluating backend
//!
//! [`Evaluator`] gives every grammar hook its arithmetic meaning. It owns the
//! [`SymTab`], the routines callable as `Name()`, the channel `?` statements
//! read values from and the writer `!` statements print to.
//!
//! Arithmetic is checked `i64`: a result that does not fit is
//! [`CalcError::Overflow`], a zero divisor is [`CalcError::DivisionByZero`].
//! Division truncates toward zero.
//!
//! ## Example
//! ```rust
//! # use onepass_calc::{CalcParser, Evaluator, Options};
//! let mut eval = Evaluator::new(std::io::empty(), Vec::new());
//! eval.register("ANSWER", || 42);
//! let mut parser = CalcParser::new("x = answer() / 2\n!x.".bytes(), eval, Options::default());
//! parser.run().unwrap();
//! assert_eq!(parser.backend().symtab().get("X"), 21);
//! assert_eq!(parser.backend().writer(), b"21\n");
//! ```

use crate::input::ValueReader;
use crate::{Backend, BinOp, CalcError, SymTab};
use indexmap::IndexMap;
use onepass::Position;
use smartstring::alias::String;
use std::io::{BufRead, Write};

type Routine = Box<dyn FnMut() -> i64>;

pub struct Evaluator<R, W> {
    symtab: SymTab,
    routines: IndexMap<String, Routine>,
    values: ValueReader<R>,
    out: W,
}

impl<R, W> Evaluator<R, W>
where
    R: BufRead,
    W: Write,
{
    /// Creates an evaluator with an empty symbol table that reads `?` values
    /// from `values` and prints to `out`.
    pub fn new(values: R, out: W) -> Self {
        Self {
            symtab: SymTab::new(),
            routines: IndexMap::new(),
            values: ValueReader::new(values),
            out,
        }
    }

    /// Registers a zero-argument routine callable as `name()`.
    ///
    /// Names are case-insensitive like every other name in the language.
    pub fn register<F>(&mut self, name: &str, routine: F)
    where
        F: FnMut() -> i64 + 'static,
    {
        let name: String = name.chars().map(|c| c.to_ascii_uppercase()).collect();
        self.routines.insert(name, Box::new(routine));
    }

    pub fn symtab(&self) -> &SymTab {
        &self.symtab
    }

    pub fn writer(&self) -> &W {
        &self.out
    }

    pub fn into_parts(self) -> (SymTab, W) {
        (self.symtab, self.out)
    }
}

impl<R, W> Backend for Evaluator<R, W>
where
    R: BufRead,
    W: Write,
{
    type Value = i64;

    fn number(&mut self, value: i64) -> Result<i64, CalcError> {
        Ok(value)
    }

    fn variable(&mut self, name: &str) -> Result<i64, CalcError> {
        Ok(self.symtab.get(name))
    }

    fn call(&mut self, name: &str, at: Position) -> Result<i64, CalcError> {
        let routine = self
            .routines
            .get_mut(name)
            .ok_or_else(|| CalcError::UnknownRoutine {
                name: String::from(name),
                position: at,
            })?;
        Ok(routine())
    }

    fn zero(&mut self) -> Result<i64, CalcError> {
        Ok(0)
    }

    fn binary(&mut self, op: BinOp, lhs: i64, rhs: i64, at: Position) -> Result<i64, CalcError> {
        let result = match op {
            BinOp::Add => lhs.checked_add(rhs),
            BinOp::Sub => lhs.checked_sub(rhs),
            BinOp::Mul => lhs.checked_mul(rhs),
            BinOp::Div => {
                if rhs == 0 {
                    return Err(CalcError::DivisionByZero { position: at });
                }
                lhs.checked_div(rhs)
            }
        };
        result.ok_or(CalcError::Overflow { position: at })
    }

    fn assign(&mut self, name: &str, value: i64) -> Result<(), CalcError> {
        log::debug!("ASSIGN: {name} = {value}");
        self.symtab.set(name, value);
        Ok(())
    }

    fn input(&mut self) -> Result<i64, CalcError> {
        self.values.next_value()
    }

    fn output(&mut self, name: &str) -> Result<(), CalcError> {
        writeln!(self.out, "{}", self.symtab.get(name))?;
        Ok(())
    }
}
