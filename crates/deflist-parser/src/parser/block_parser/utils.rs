//! Indentation helpers shared by the block recognizers.
//!
//! Tabs expand to the next multiple of [`TAB_STOP`] columns. Every function takes
//! the column the text starts at, because a tab's width depends on it.

pub const TAB_STOP: usize = 4;

/// Columns a tab occupies when it starts at `column`.
pub fn tab_width(column: usize) -> usize {
    TAB_STOP - column % TAB_STOP
}

/// Width in columns of the leading whitespace of `text`, and the byte position
/// of the first other character.
pub fn indent_width(text: &str, column: usize) -> (usize, usize) {
    let mut width = 0;
    let mut pos = 0;
    for b in text.bytes() {
        match b {
            b' ' => width += 1,
            b'\t' => width += tab_width(column + width),
            _ => break,
        }
        pos += 1;
    }
    (width, pos)
}

/// Byte position at which `width` columns of leading whitespace have been
/// consumed, plus the columns a tab overshot the target by (the padding).
///
/// Returns `None` if `text` does not start with that much whitespace.
pub fn indent_position(text: &str, column: usize, width: usize) -> Option<(usize, usize)> {
    if width == 0 {
        return Some((0, 0));
    }
    let mut consumed = 0;
    let mut pos = 0;
    for b in text.bytes() {
        if consumed >= width {
            break;
        }
        match b {
            b' ' => consumed += 1,
            b'\t' => consumed += tab_width(column + consumed),
            _ => break,
        }
        pos += 1;
    }
    (consumed >= width).then(|| (pos, consumed - width))
}

pub fn is_blank(line: &str) -> bool {
    line.trim().is_empty()
}
