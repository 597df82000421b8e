use std::fmt;

/// A 0-based line/column position in source text.
#[derive(Debug, Clone, Default, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Position {
    /// 0-based line number.
    pub line: usize,
    /// 0-based column number (byte position in the line).
    pub column: usize,
}

impl Position {
    /// Creates a new `Position`.
    #[inline]
    pub const fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

/// Renders the position 1-based, the way editors count.
impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line + 1, self.column + 1)
    }
}

/// Tracks where the lookahead byte sits in the input.
///
/// The cursor only moves forward: the scanner never un-reads a byte, so there
/// is no line history to keep.
#[derive(Debug, Clone, Default)]
pub struct Cursor {
    /// Number of bytes consumed so far.
    pub pos: usize,
    /// Position of the next unconsumed byte.
    pub position: Position,
}

impl Cursor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance past the consumed byte `b`.
    pub fn advance(&mut self, b: u8) {
        if b == b'\n' {
            self.position.line += 1;
            self.position.column = 0;
        } else {
            self.position.column += 1;
        }
        self.pos += 1;
    }
}
