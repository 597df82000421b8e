//! # Calculator Parser
//!
//! [`CalcParser`] recognizes, parses and executes a program in one pass.
//! There is no token stream and no tree: each grammar procedure inspects the
//! scanner's lookahead byte, consumes what it recognizes and immediately
//! calls the matching [`Backend`] hook.
//!
//! ## Grammar
//! ```text
//! Program    := { Statement NewLine } '.' ;
//! Statement  := '?' Name | '!' Name | Name '=' Expression ;
//! Expression := [ ('+'|'-') ] Term { ('+'|'-') Term } ;
//! Term       := Factor { ('*'|'/') Factor } ;
//! Factor     := '(' Expression ')' | Name [ '(' ')' ] | Number ;
//! ```
//!
//! ## Behavior highlights
//! - **Precedence** is structural: `Term` sits inside `Expression`, so `*`
//!   and `/` bind tighter than `+` and `-`.
//! - **Associativity** is left: each loop iteration folds the next operand
//!   into the running value immediately.
//! - **A leading sign** seeds the running value with the backend's zero, so
//!   `-x` is `0 - x`.
//! - **The sentinel** `.` is checked before each statement and is never
//!   dispatched itself.
//! - **Any other leading byte** is parsed as an assignment, which reports
//!   `Name expected` when the byte is not a letter.

use crate::{Backend, BinOp, CalcError};
use onepass::classify::{is_addop, is_alpha};
use onepass::{ScanOptions, ScanStats, Scanner};

/// Ends the program.
pub const SENTINEL: u8 = b'.';

/// Parser configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Options {
    pub scan: ScanOptions,
    /// `?` statements take their value from the program text (`?X 7`)
    /// instead of the backend's input channel.
    pub inline_input: bool,
}

pub struct CalcParser<I, B>
where
    I: Iterator<Item = u8>,
    B: Backend,
{
    scanner: Scanner<I>,
    backend: B,
    options: Options,
}

impl<I, B> CalcParser<I, B>
where
    I: Iterator<Item = u8>,
    B: Backend,
{
    /// Creates a parser reading program text from `input`. The first byte is
    /// read immediately.
    pub fn new(input: I, backend: B, options: Options) -> Self {
        Self {
            scanner: Scanner::new(input, options.scan),
            backend,
            options,
        }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn backend_mut(&mut self) -> &mut B {
        &mut self.backend
    }

    pub fn into_backend(self) -> B {
        self.backend
    }

    pub fn stats(&self) -> ScanStats {
        self.scanner.stats()
    }

    /// Executes statements until the sentinel and returns how many ran.
    ///
    /// The first error stops the run; statements before it keep their
    /// effects.
    pub fn run(&mut self) -> Result<usize, CalcError> {
        let mut count = 0;
        while !self.scanner.is_look(SENTINEL) {
            self.statement()?;
            self.scanner.new_line();
            count += 1;
        }
        log::info!("Reached sentinel after {count} statement(s)");
        Ok(count)
    }

    /// Parses and executes one statement, chosen by the lookahead byte.
    pub fn statement(&mut self) -> Result<(), CalcError> {
        log::debug!("STATEMENT at {}", self.scanner.position());
        match self.scanner.look() {
            Some(b'?') => self.input(),
            Some(b'!') => self.output(),
            _ => self.assignment(),
        }
    }

    fn assignment(&mut self) -> Result<(), CalcError> {
        let name = self.scanner.scan_name()?;
        self.scanner.match_char(b'=')?;
        let value = self.expression()?;
        self.backend.assign(&name, value)
    }

    fn input(&mut self) -> Result<(), CalcError> {
        self.scanner.match_char(b'?')?;
        let name = self.scanner.scan_name()?;
        let value = if self.options.inline_input {
            let n = self.scanner.scan_number()?;
            self.backend.number(n)?
        } else {
            self.backend.input()?
        };
        self.backend.assign(&name, value)
    }

    fn output(&mut self) -> Result<(), CalcError> {
        self.scanner.match_char(b'!')?;
        let name = self.scanner.scan_name()?;
        self.backend.output(&name)
    }

    /// Parses an expression: terms joined by `+` and `-`.
    pub fn expression(&mut self) -> Result<B::Value, CalcError> {
        let mut value = if self.scanner.look().is_some_and(is_addop) {
            self.backend.zero()?
        } else {
            self.term()?
        };
        while let Some(op) = self.scanner.look().and_then(BinOp::additive) {
            let at = self.scanner.position();
            let lhs = self.backend.push(value)?;
            self.scanner.match_char(op.symbol())?;
            let rhs = self.term()?;
            value = self.backend.binary(op, lhs, rhs, at)?;
        }
        Ok(value)
    }

    /// Parses a term: factors joined by `*` and `/`.
    fn term(&mut self) -> Result<B::Value, CalcError> {
        let mut value = self.factor()?;
        while let Some(op) = self.scanner.look().and_then(BinOp::multiplicative) {
            let at = self.scanner.position();
            let lhs = self.backend.push(value)?;
            self.scanner.match_char(op.symbol())?;
            let rhs = self.factor()?;
            value = self.backend.binary(op, lhs, rhs, at)?;
        }
        Ok(value)
    }

    fn factor(&mut self) -> Result<B::Value, CalcError> {
        match self.scanner.look() {
            Some(b'(') => {
                self.scanner.match_char(b'(')?;
                let value = self.expression()?;
                self.scanner.match_char(b')')?;
                Ok(value)
            }
            Some(b) if is_alpha(b) => self.ident(),
            _ => {
                let n = self.scanner.scan_number()?;
                self.backend.number(n)
            }
        }
    }

    /// A variable, or a call when followed by `()`.
    fn ident(&mut self) -> Result<B::Value, CalcError> {
        let at = self.scanner.position();
        let name = self.scanner.scan_name()?;
        if self.scanner.is_look(b'(') {
            self.scanner.match_char(b'(')?;
            self.scanner.match_char(b')')?;
            self.backend.call(&name, at)
        } else {
            self.backend.variable(&name)
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::{CalcError, CalcParser, Emitter, Evaluator, Options, SymTab};
    use onepass::{Found, Position, ScanError, ScanOptions};

    type Eval = Evaluator<&'static [u8], Vec<u8>>;

    fn init_logger() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    fn parser(src: &'static str, values: &'static str) -> CalcParser<std::str::Bytes<'static>, Eval> {
        init_logger();
        let eval = Evaluator::new(values.as_bytes(), Vec::new());
        CalcParser::new(src.bytes(), eval, Options::default())
    }

    /// Runs `src` to the sentinel and returns the symbols and printed text.
    fn run(src: &'static str, values: &'static str) -> (SymTab, String) {
        let mut p = parser(src, values);
        p.run().unwrap();
        let (symtab, out) = p.into_backend().into_parts();
        (symtab, String::from_utf8(out).unwrap())
    }

    /// Evaluates a single expression.
    fn eval(expr: &str) -> Result<i64, CalcError> {
        init_logger();
        let eval = Evaluator::new(b"".as_slice(), Vec::new());
        let mut p = CalcParser::new(expr.bytes(), eval, Options::default());
        p.expression()
    }

    #[test]
    fn multiplication_binds_tighter() {
        for (a, b, c) in [(2, 3, 4), (7, 1, 5), (0, 9, 9), (12, 0, 6)] {
            assert_eq!(eval(&format!("{a}+{b}*{c}")).unwrap(), a + b * c);
            assert_eq!(eval(&format!("{a}*{b}+{c}")).unwrap(), a * b + c);
            assert_eq!(eval(&format!("{a}-{b}*{c}")).unwrap(), a - b * c);
        }
        assert_eq!(eval("10-6/3").unwrap(), 8);
    }

    #[test]
    fn operators_are_left_associative() {
        assert_eq!(eval("10-4-3").unwrap(), 3);
        assert_eq!(eval("100/10/5").unwrap(), 2);
        assert_eq!(eval("2*9/4").unwrap(), 4);
        assert_eq!(eval("1-2+3").unwrap(), 2);
    }

    #[test]
    fn parentheses_override_precedence() {
        assert_eq!(eval("(2+3)*4").unwrap(), 20);
        assert_eq!(eval("2*(3+4)").unwrap(), 14);
        assert_eq!(eval("((1))").unwrap(), 1);
        assert_eq!(eval("10-(4-3)").unwrap(), 9);
    }

    #[test]
    fn leading_sign_applies_to_first_term() {
        assert_eq!(eval("-3").unwrap(), -3);
        assert_eq!(eval("+3").unwrap(), 3);
        assert_eq!(eval("-2*3+10").unwrap(), 4);
        assert_eq!(eval("(-5)*2").unwrap(), -10);
    }

    #[test]
    fn doubled_sign_is_rejected() {
        assert!(matches!(
            eval("--2"),
            Err(CalcError::Scan(ScanError::MalformedInteger {
                found: Found(Some(b'-')),
                ..
            }))
        ));
    }

    #[test]
    fn white_space_between_tokens_is_ignored() {
        assert_eq!(eval("  ( 1 +\t2 ) *  3 ").unwrap(), 9);
    }

    #[test]
    fn scenario_precedence_program() {
        let (symtab, out) = run("X=2+3*4\n!X.", "");
        assert_eq!(symtab.get("X"), 14);
        assert_eq!(out, "14\n");
    }

    #[test]
    fn scenario_parenthesized_program() {
        let (symtab, _) = run("X=(2+3)*4.", "");
        assert_eq!(symtab.get("X"), 20);
    }

    #[test]
    fn scenario_input_then_output() {
        let (symtab, out) = run("?X!X.", "7\n");
        assert_eq!(symtab.get("X"), 7);
        assert_eq!(out, "7\n");
    }

    #[test]
    fn scenario_unassigned_reads_zero() {
        let (symtab, _) = run("X=A.", "");
        assert_eq!(symtab.get("X"), 0);
        assert!(symtab.contains("X"));
        assert!(!symtab.contains("A"));
    }

    #[test]
    fn scenario_missing_operand_aborts_before_assigning() {
        let mut p = parser("X=1+.", "");
        let err = p.run().unwrap_err();
        assert!(err.to_string().starts_with("Integer expected"), "{err}");
        assert!(!p.backend().symtab().contains("X"));
    }

    #[test]
    fn sentinel_alone_runs_nothing() {
        let mut p = parser(".", "");
        assert_eq!(p.run().unwrap(), 0);
        assert!(p.backend().symtab().is_empty());
    }

    #[test]
    fn assignment_is_visible_to_later_statements() {
        let (symtab, out) = run("x = 5\ny = x + 1\n!Y\n.", "");
        assert_eq!(symtab.get("Y"), 6);
        assert_eq!(out, "6\n");
    }

    #[test]
    fn statements_and_line_endings() {
        let mut p = parser("a=1\r\nb=2\n\n  c = a+b\r\n!c\n.", "");
        assert_eq!(p.run().unwrap(), 4);
        assert_eq!(p.backend().writer(), b"3\n");
    }

    #[test]
    fn multi_character_names_are_case_insensitive() {
        let (symtab, out) = run("total = 40\nTotal = TOTAL + 2\n!toTAL.", "");
        assert_eq!(symtab.get("TOTAL"), 42);
        assert_eq!(out, "42\n");
    }

    #[test]
    fn output_before_error_stays_written() {
        let mut p = parser("x=3\n!x\ny=x/0\n!y.", "");
        let err = p.run().unwrap_err();
        assert!(matches!(
            err,
            CalcError::DivisionByZero {
                position: Position { line: 2, column: 3 }
            }
        ));
        assert_eq!(p.backend().writer(), b"3\n");
        assert!(!p.backend().symtab().contains("Y"));
    }

    #[test]
    fn overflow_aborts() {
        let mut p = parser("x=9223372036854775807+1.", "");
        assert!(matches!(p.run(), Err(CalcError::Overflow { .. })));
    }

    #[test]
    fn non_letter_statement_needs_a_name() {
        let mut p = parser("5=1.", "");
        match p.run() {
            Err(CalcError::Scan(ScanError::MalformedName { found, position })) => {
                assert_eq!(found, Found(Some(b'5')));
                assert_eq!(position, Position::new(0, 0));
            }
            other => panic!("expected MalformedName, got {:?}", other),
        }
    }

    #[test]
    fn missing_sentinel_is_an_error() {
        let mut p = parser("x=1\n", "");
        assert!(matches!(
            p.run(),
            Err(CalcError::Scan(ScanError::MalformedName {
                found: Found(None),
                ..
            }))
        ));
        assert_eq!(p.backend().symtab().get("X"), 1);
    }

    #[test]
    fn missing_equals_is_reported() {
        let mut p = parser("x 1.", "");
        let err = p.run().unwrap_err();
        assert_eq!(err.to_string(), "'=' expected, found '1' at 1:3");
    }

    #[test]
    fn unbalanced_parenthesis_is_reported() {
        let mut p = parser("x=(1+2.", "");
        assert!(matches!(
            p.run(),
            Err(CalcError::Scan(ScanError::Unexpected { expected: b')', .. }))
        ));
    }

    #[test]
    fn registered_routine_call() {
        init_logger();
        let mut eval = Evaluator::new(b"".as_slice(), Vec::new());
        eval.register("seven", || 7);
        let mut p = CalcParser::new("x = 2 * seven ( )\n.".bytes(), eval, Options::default());
        p.run().unwrap();
        assert_eq!(p.backend().symtab().get("X"), 14);
    }

    #[test]
    fn unregistered_routine_call_aborts() {
        let mut p = parser("x = nothing()\n.", "");
        match p.run() {
            Err(CalcError::UnknownRoutine { name, position }) => {
                assert_eq!(name, "NOTHING");
                assert_eq!(position, Position::new(0, 4));
            }
            other => panic!("expected UnknownRoutine, got {:?}", other),
        }
    }

    #[test]
    fn input_exhaustion_aborts() {
        let mut p = parser("?a\n?b\n.", "1\n");
        assert!(matches!(p.run(), Err(CalcError::InputExhausted)));
        assert_eq!(p.backend().symtab().get("A"), 1);
    }

    #[test]
    fn inline_input_reads_program_text() {
        init_logger();
        let eval = Evaluator::new(b"".as_slice(), Vec::new());
        let options = Options {
            inline_input: true,
            ..Options::default()
        };
        let mut p = CalcParser::new("?x 12\n!x.".bytes(), eval, options);
        p.run().unwrap();
        assert_eq!(p.backend().writer(), b"12\n");
    }

    #[test]
    fn single_character_strict_configuration() {
        init_logger();
        let options = Options {
            scan: ScanOptions {
                maximal_munch: false,
                skip_white: false,
            },
            inline_input: false,
        };
        let eval = Evaluator::new(b"".as_slice(), Vec::new());
        let mut p = CalcParser::new("a=2\nb=a*3\n!b.".bytes(), eval, options);
        p.run().unwrap();
        assert_eq!(p.backend().writer(), b"6\n");

        let eval = Evaluator::new(b"".as_slice(), Vec::new());
        let mut p = CalcParser::new("a = 2.".bytes(), eval, options);
        assert!(matches!(
            p.run(),
            Err(CalcError::Scan(ScanError::Unexpected {
                expected: b'=',
                found: Found(Some(b' ')),
                ..
            }))
        ));

        // without maximal munch, "ab" is the name A followed by junk
        let eval = Evaluator::new(b"".as_slice(), Vec::new());
        let mut p = CalcParser::new("ab=1.".bytes(), eval, options);
        assert!(p.run().is_err());
    }

    #[test]
    fn emitter_translates_assignment() {
        init_logger();
        let mut p = CalcParser::new(
            "x = -a + b * (c - 1)\n.".bytes(),
            Emitter::new(Vec::new()),
            Options::default(),
        );
        assert_eq!(p.run().unwrap(), 1);
        let text = String::from_utf8(p.into_backend().into_inner()).unwrap();
        let expected = [
            "CLR D0",
            "MOVE D0,-(SP)",
            "MOVE A(PC),D0",
            "SUB (SP)+,D0",
            "NEG D0",
            "MOVE D0,-(SP)",
            "MOVE B(PC),D0",
            "MOVE D0,-(SP)",
            "MOVE C(PC),D0",
            "MOVE D0,-(SP)",
            "MOVE #1,D0",
            "SUB (SP)+,D0",
            "NEG D0",
            "MULS (SP)+,D0",
            "ADD (SP)+,D0",
            "LEA X(PC),A0",
            "MOVE D0,(A0)",
        ]
        .iter()
        .map(|l| format!("\t{l}\n"))
        .collect::<String>();
        assert_eq!(text, expected);
    }

    #[test]
    fn emitter_translates_io_and_calls() {
        init_logger();
        let mut p = CalcParser::new(
            "?n\ny = f() / n\n!y\n.".bytes(),
            Emitter::new(Vec::new()),
            Options::default(),
        );
        assert_eq!(p.run().unwrap(), 3);
        let text = String::from_utf8(p.into_backend().into_inner()).unwrap();
        let expected = [
            "BSR READ",
            "LEA N(PC),A0",
            "MOVE D0,(A0)",
            "BSR F",
            "MOVE D0,-(SP)",
            "MOVE N(PC),D0",
            "MOVE (SP)+,D1",
            "DIVS D1,D0",
            "LEA Y(PC),A0",
            "MOVE D0,(A0)",
            "MOVE Y(PC),D0",
            "BSR WRITE",
        ]
        .iter()
        .map(|l| format!("\t{l}\n"))
        .collect::<String>();
        assert_eq!(text, expected);
    }

    #[test]
    fn scan_statistics_are_collected() {
        let mut p = parser("x=1.", "");
        p.run().unwrap();
        let stats = p.stats();
        assert_eq!(stats.chars, 3);
        assert_eq!(stats.matches, 1);
    }
}
