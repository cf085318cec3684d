//! Cursor over the input source.
//!
//! The parser never indexes the input directly; it goes through a
//! [`SourceContext`] that keeps the original text for span extraction
//! and a byte-offset cursor with line/column bookkeeping.

/// A point in the input: 0-based byte offset, 1-based line and column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    pub offset: usize,
    pub line: usize,
    pub column: usize,
}

/// Source range of one node, with the exact text it covers.
///
/// The `source` field is diagnostic-only; nothing downstream consumes
/// it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceSpan {
    pub start: Position,
    pub end: Position,
    pub source: String,
}

/// Immutable original source plus the advancing cursor.
///
/// Invariant: the unconsumed suffix always starts at `offset`, so
/// `original.len() - remaining().len() == offset`.
#[derive(Debug)]
pub struct SourceContext<'a> {
    original: &'a str,
    offset: usize,
    line: usize,
    column: usize,
}

impl<'a> SourceContext<'a> {
    #[must_use]
    pub const fn new(original: &'a str) -> Self {
        Self {
            original,
            offset: 0,
            line: 1,
            column: 1,
        }
    }

    /// The suffix of the input not yet consumed.
    #[must_use]
    pub fn remaining(&self) -> &'a str {
        &self.original[self.offset..]
    }

    #[must_use]
    pub const fn is_end(&self) -> bool {
        self.offset >= self.original.len()
    }

    #[must_use]
    pub const fn cursor(&self) -> Position {
        Position {
            offset: self.offset,
            line: self.line,
            column: self.column,
        }
    }

    /// Consume `n` bytes (clamped to the remaining input, must land on
    /// a character boundary).
    ///
    /// The column is recomputed from the last newline inside the
    /// consumed chunk, counted in characters. It is not a running
    /// counter: a chunk without a newline adds its full character
    /// count, a chunk with one resets relative to that newline.
    pub fn advance_by(&mut self, n: usize) {
        let n = n.min(self.original.len() - self.offset);
        let chunk = &self.original[self.offset..self.offset + n];
        match chunk.rfind('\n') {
            None => self.column += chunk.chars().count(),
            Some(last) => {
                self.line += chunk.bytes().filter(|&b| b == b'\n').count();
                self.column = chunk[last..].chars().count();
            }
        }
        self.offset += n;
    }

    /// Strip the maximal leading run of `{tab, CR, LF, FF, space}`.
    pub fn advance_spaces(&mut self) {
        let n = self
            .remaining()
            .bytes()
            .take_while(|b| matches!(b, b'\t' | b'\r' | b'\n' | b'\x0C' | b' '))
            .count();
        if n > 0 {
            self.advance_by(n);
        }
    }

    /// Span from `start` to the current cursor.
    #[must_use]
    pub fn span_from(&self, start: Position) -> SourceSpan {
        SourceSpan {
            start,
            end: self.cursor(),
            source: self.original[start.offset..self.offset].to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_at_line_one_column_one() {
        let ctx = SourceContext::new("abc");
        assert_eq!(
            ctx.cursor(),
            Position {
                offset: 0,
                line: 1,
                column: 1
            }
        );
    }

    #[test]
    fn advance_without_newline_accumulates_column() {
        let mut ctx = SourceContext::new("abcdef");
        ctx.advance_by(2);
        ctx.advance_by(3);
        let pos = ctx.cursor();
        assert_eq!(pos.offset, 5);
        assert_eq!(pos.line, 1);
        assert_eq!(pos.column, 6);
        assert_eq!(ctx.remaining(), "f");
    }

    #[test]
    fn advance_across_newline_resets_column() {
        let mut ctx = SourceContext::new("a\nbc");
        ctx.advance_by(3);
        let pos = ctx.cursor();
        assert_eq!(pos.line, 2);
        // chunk "a\nb": two characters from the newline inclusive
        assert_eq!(pos.column, 2);
    }

    #[test]
    fn advance_counts_every_newline() {
        let mut ctx = SourceContext::new("a\n\n\nb");
        ctx.advance_by(4);
        assert_eq!(ctx.cursor().line, 4);
        assert_eq!(ctx.cursor().column, 1);
    }

    #[test]
    fn advance_spaces_strips_whitespace_class() {
        let mut ctx = SourceContext::new(" \t\r\n\x0C x");
        ctx.advance_spaces();
        assert_eq!(ctx.remaining(), "x");
    }

    #[test]
    fn advance_spaces_is_noop_on_non_space() {
        let mut ctx = SourceContext::new("x ");
        ctx.advance_spaces();
        assert_eq!(ctx.cursor().offset, 0);
    }

    #[test]
    fn span_extracts_original_text() {
        let mut ctx = SourceContext::new("key: value");
        let start = ctx.cursor();
        ctx.advance_by(3);
        let span = ctx.span_from(start);
        assert_eq!(span.source, "key");
        assert_eq!(span.start.offset, 0);
        assert_eq!(span.end.offset, 3);
    }

    #[test]
    fn advance_clamps_past_end() {
        let mut ctx = SourceContext::new("ab");
        ctx.advance_by(10);
        assert!(ctx.is_end());
        assert_eq!(ctx.cursor().offset, 2);
    }

    #[test]
    fn suffix_length_invariant_holds() {
        let input = "a\nbc def";
        let mut ctx = SourceContext::new(input);
        for step in [1, 3, 2] {
            ctx.advance_by(step);
            assert_eq!(input.len() - ctx.remaining().len(), ctx.cursor().offset);
        }
    }
}
