//! Line cursor used by block recognizers.

use std::borrow::Cow;

use crate::parser::block_parser::utils::tab_width;

/// Cursor over the input's lines.
///
/// The cursor sits at a byte position inside the current line. When a tab is
/// only partially consumed, the remaining columns are kept as `padding`:
/// virtual spaces that [`LineReader::peek_line`] prepends to the rest of the line.
#[derive(Debug, Clone)]
pub struct LineReader<'a> {
    lines: Vec<&'a str>,
    line: usize,
    pos: usize,
    padding: usize,
}

impl<'a> LineReader<'a> {
    /// Split `input` into lines. Line endings are not part of the lines.
    pub fn new(input: &'a str) -> Self {
        Self {
            lines: input.lines().collect(),
            line: 0,
            pos: 0,
            padding: 0,
        }
    }

    pub fn is_eof(&self) -> bool {
        self.line >= self.lines.len()
    }

    /// Zero-based index of the current line.
    pub fn line_number(&self) -> usize {
        self.line
    }

    /// Byte position inside the current line.
    pub fn position(&self) -> usize {
        self.pos
    }

    pub fn padding(&self) -> usize {
        self.padding
    }

    /// The unconsumed rest of the current line, or `None` at end of input.
    pub fn peek_line(&self) -> Option<Cow<'a, str>> {
        let line = *self.lines.get(self.line)?;
        let rest = &line[self.pos..];
        if self.padding == 0 {
            Some(Cow::Borrowed(rest))
        } else {
            Some(Cow::Owned(format!("{}{rest}", " ".repeat(self.padding))))
        }
    }

    /// Column of the cursor, with tabs expanded and padding accounted for.
    pub fn line_offset(&self) -> usize {
        let Some(line) = self.lines.get(self.line) else {
            return 0;
        };
        let mut col = 0;
        for b in line[..self.pos].bytes() {
            if b == b'\t' {
                col += tab_width(col);
            } else {
                col += 1;
            }
        }
        col - self.padding
    }

    /// Consume `n` characters of the peeked line: padding first, then bytes.
    /// Never moves past the end of the current line.
    pub fn advance(&mut self, n: usize) {
        let len = self.current_len();
        for _ in 0..n {
            if self.padding > 0 {
                self.padding -= 1;
            } else if self.pos < len {
                self.pos += 1;
            } else {
                break;
            }
        }
    }

    pub fn advance_and_set_padding(&mut self, n: usize, padding: usize) {
        self.advance(n);
        if padding > self.padding {
            self.padding = padding;
        }
    }

    pub fn advance_to_eol(&mut self) {
        self.pos = self.current_len();
        self.padding = 0;
    }

    pub fn advance_line(&mut self) {
        self.line += 1;
        self.pos = 0;
        self.padding = 0;
    }

    /// Skip whole blank lines at the cursor. Returns how many were skipped,
    /// or `None` when the input is exhausted.
    pub fn skip_blank_lines(&mut self) -> Option<usize> {
        let mut skipped = 0;
        loop {
            let line = self.peek_line()?;
            if !line.trim().is_empty() {
                return Some(skipped);
            }
            self.advance_line();
            skipped += 1;
        }
    }

    fn current_len(&self) -> usize {
        self.lines.get(self.line).map_or(0, |line| line.len())
    }
}
