//! # onepass-calc
//!
//! An interpreter for a tiny integer language, built on **onepass**. A
//! program is a sequence of assignments, input statements and output
//! statements ending in a `.`:
//!
//! ```text
//! ?n
//! square = n * n
//! !square
//! .
//! ```
//!
//! Recognition, parsing and execution happen in a single pass with one byte
//! of lookahead; there is no token stream and no syntax tree.
//!
//! ## Overview
//!
//! - [`parser`]: [`CalcParser`], the grammar procedures and the statement
//!   loop,
//! - [`backend`]: the [`Backend`] hooks the grammar drives,
//! - [`eval`]: [`Evaluator`], the backend that computes values,
//! - [`emit`]: [`Emitter`], the backend that writes 68000 assembly instead,
//! - [`symtab`]: [`SymTab`], variable storage with zero defaults,
//! - [`input`]: [`ValueReader`], values for `?` statements,
//! - [`error`]: [`CalcError`], the single error surface.
//!
//! ## Example
//!
//! ```rust
//! use onepass_calc::{CalcParser, Evaluator, Options};
//!
//! let eval = Evaluator::new("6\n".as_bytes(), Vec::new());
//! let mut parser = CalcParser::new("?n\nsquare = n * n\n!square\n.".bytes(), eval, Options::default());
//! assert_eq!(parser.run().unwrap(), 3);
//!
//! let (symtab, out) = parser.into_backend().into_parts();
//! assert_eq!(symtab.get("SQUARE"), 36);
//! assert_eq!(out, b"36\n");
//! ```
pub mod backend;
pub mod emit;
pub mod error;
pub mod eval;
pub mod input;
pub mod parser;
pub mod symtab;

pub use backend::{Backend, BinOp};
pub use emit::Emitter;
pub use error::CalcError;
pub use eval::Evaluator;
pub use input::ValueReader;
pub use parser::{CalcParser, Options, SENTINEL};
pub use symtab::SymTab;
