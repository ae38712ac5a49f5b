//! Inline text of paragraphs, text blocks, headings and terms.

/// Write `lines` joined with `\n`, each trimmed at the end and HTML-escaped.
pub(super) fn write_inline(out: &mut String, lines: &[String]) {
    for (i, line) in lines.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        out.push_str(&html_escape::encode_text(line.trim_end()));
    }
}

/// Write verbatim code lines, each escaped and terminated by `\n`.
pub(super) fn write_code_lines(out: &mut String, lines: &[String]) {
    for line in lines {
        out.push_str(&html_escape::encode_text(line));
        out.push('\n');
    }
}
