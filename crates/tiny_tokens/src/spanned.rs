//! A trait that can provide the [Span] of a token or syntax tree node

use std::fmt::{Display, Formatter};
use std::ops::RangeInclusive;

/// A trait that can provide the [Span] of the complete context of a token or tree node
pub trait Spanned {
    fn span(&self) -> Span;
}

/// A point in the source text. Both fields start at 1.
#[derive(Debug, Copy, Clone, Ord, PartialOrd, Eq, PartialEq, Hash)]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

impl Position {
    /// The first character of any source
    pub const START: Position = Position { line: 1, column: 1 };

    pub const fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::START
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// A region of the source text.
///
/// `offset` and `len` are measured in bytes, `start` and `end` in lines and characters. `end` is
/// the position directly after the last character of the region.
#[derive(Debug, Copy, Clone, Ord, PartialOrd, Eq, PartialEq, Hash, Default)]
pub struct Span {
    offset: usize,
    len: usize,
    start: Position,
    end: Position,
}

impl Span {
    /// Creates a new span
    pub const fn new(offset: usize, len: usize, start: Position, end: Position) -> Self {
        Self {
            offset,
            len,
            start,
            end,
        }
    }

    /// Creates an empty span at a given point
    pub const fn point(offset: usize, at: Position) -> Self {
        Self::new(offset, 0, at, at)
    }

    /// Gets a span directly after this span
    pub const fn end(&self) -> Self {
        Self::point(self.offset + self.len, self.end)
    }

    pub const fn offset(&self) -> usize {
        self.offset
    }

    pub const fn len(&self) -> usize {
        self.len
    }

    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub const fn start(&self) -> Position {
        self.start
    }

    pub const fn end_position(&self) -> Position {
        self.end
    }

    #[inline]
    pub const fn line(&self) -> usize {
        self.start.line
    }

    #[inline]
    pub const fn column(&self) -> usize {
        self.start.column
    }
}

impl Display for Span {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.start)
    }
}

impl Spanned for Span {
    fn span(&self) -> Span {
        *self
    }
}

/// A line reader struct that's responsible for getting the lines of a source around a span
#[derive(Debug, Default)]
pub struct LineReader {
    before: usize,
    after: usize,
}

impl LineReader {
    /// Creates a new line reader that gets `before` number of lines before a span and `after` number
    /// of lines after.
    pub fn new(before: usize, after: usize) -> Self {
        Self { before, after }
    }

    /// Gets the lines of `source` surrounding a given span, plus the base line index.
    ///
    /// Only the base line has a non-zero `col`, which is the 0-indexed character column of the
    /// span's start.
    pub fn lines(&self, source: &str, span: &Span) -> (Vec<Line>, usize) {
        let base_line = span.line();
        let range: RangeInclusive<usize> =
            base_line.saturating_sub(self.before)..=base_line.saturating_add(self.after);

        let mut byte_offset = 0usize;
        let mut lines = vec![];
        for (index, src) in source.split('\n').enumerate() {
            let line = index + 1;
            if range.contains(&line) {
                lines.push(Line {
                    line,
                    col: if line == base_line {
                        span.column().saturating_sub(1)
                    } else {
                        0
                    },
                    byte_offset,
                    src: src.trim_end_matches('\r').to_string(),
                });
            }
            byte_offset += src.len() + 1;
        }
        if lines.iter().all(|line| line.line != base_line) {
            // span past the last newline of the source, eg the EOF after a trailing newline
            lines.push(Line {
                line: base_line,
                col: span.column().saturating_sub(1),
                byte_offset: source.len(),
                src: String::new(),
            });
        }

        (lines, base_line)
    }
}

#[derive(Debug)]
pub struct Line {
    pub line: usize,
    pub col: usize,
    pub byte_offset: usize,
    pub src: String,
}

#[cfg(test)]
mod tests {
    use crate::spanned::{LineReader, Position, Span, Spanned};

    #[test]
    fn test_span_is_spanned() {
        let p = Span::new(0, 2, Position::new(1, 1), Position::new(1, 3)).span();
        assert_eq!(p.offset(), 0);
        assert_eq!(p.len(), 2);
        assert_eq!(p.column(), 1);
    }

    #[test]
    fn test_span_end() {
        let p = Span::new(3, 5, Position::new(2, 4), Position::new(2, 9)).end();
        assert_eq!(p.offset(), 8);
        assert!(p.is_empty());
        assert_eq!(p.start(), Position::new(2, 9));
    }

    #[test]
    fn test_line_reader() {
        let source = "read x;\nx := x + 1;\nwrite x\n";
        let span = Span::new(11, 2, Position::new(2, 3), Position::new(2, 5));
        let (lines, base) = LineReader::new(1, 0).lines(source, &span);
        assert_eq!(base, 2);
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].src, "read x;");
        assert_eq!(lines[1].src, "x := x + 1;");
        assert_eq!(lines[1].col, 2);
        assert_eq!(lines[1].byte_offset, 8);
    }

    #[test]
    fn test_line_reader_past_end() {
        let source = "write x\n";
        let span = Span::point(8, Position::new(2, 1));
        let (lines, base) = LineReader::new(0, 0).lines(source, &span);
        assert_eq!(base, 2);
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].src, "");
    }
}
