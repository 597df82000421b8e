//! Values for `?` statements.
//!
//! [`ValueReader`] pulls whitespace-separated tokens from a [`BufRead`], one
//! line at a time, and hands them out one per request. A token must consist
//! of decimal digits only; there is no sign, matching integer literals in
//! program text.

use crate::CalcError;
use smartstring::alias::String;
use std::collections::VecDeque;
use std::io::BufRead;

pub struct ValueReader<R> {
    reader: R,
    pending: VecDeque<String>,
    line: std::string::String,
}

impl<R> ValueReader<R>
where
    R: BufRead,
{
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            pending: VecDeque::new(),
            line: std::string::String::new(),
        }
    }

    /// Returns the next value, reading more lines as needed.
    pub fn next_value(&mut self) -> Result<i64, CalcError> {
        while self.pending.is_empty() {
            self.line.clear();
            if self.reader.read_line(&mut self.line)? == 0 {
                return Err(CalcError::InputExhausted);
            }
            self.pending
                .extend(self.line.split_whitespace().map(String::from));
        }
        let Some(text) = self.pending.pop_front() else {
            return Err(CalcError::InputExhausted);
        };
        if !text.bytes().all(|b| b.is_ascii_digit()) {
            return Err(CalcError::BadInput { text });
        }
        let value = text.parse::<i64>()?;
        log::debug!("INPUT: {value}");
        Ok(value)
    }
}
