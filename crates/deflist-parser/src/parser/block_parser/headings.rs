//! ATX heading recognizer.

use crate::parser::ParseContext;
use crate::reader::LineReader;
use crate::syntax::{Document, NodeId, NodeKind};

use super::{BlockRecognizer, BlockState, Continuation};

/// Try to parse an ATX heading from content that starts at the marker.
/// Returns the heading level (1-6) and the heading text.
pub(crate) fn try_parse_atx_heading(content: &str) -> Option<(u8, &str)> {
    // Must start with 1-6 # characters
    let hash_count = content.bytes().take_while(|&b| b == b'#').count();
    if hash_count == 0 || hash_count > 6 {
        return None;
    }

    // After hashes, must be end of line, space, or tab
    let after_hashes = &content[hash_count..];
    if !after_hashes.is_empty() && !after_hashes.starts_with(' ') && !after_hashes.starts_with('\t')
    {
        return None;
    }

    let text = after_hashes.trim();
    // An optional closing sequence must be preceded by whitespace (or be all there is)
    let without_closing = text.trim_end_matches('#');
    let text = if without_closing.is_empty() {
        without_closing
    } else if without_closing.ends_with([' ', '\t']) {
        without_closing.trim_end()
    } else {
        text
    };

    Some((hash_count as u8, text))
}

pub struct AtxHeadingRecognizer;

impl BlockRecognizer for AtxHeadingRecognizer {
    fn name(&self) -> &'static str {
        "atx-heading"
    }

    fn triggers(&self) -> &[u8] {
        b"#"
    }

    fn open(
        &self,
        doc: &mut Document,
        _parent: NodeId,
        reader: &mut LineReader<'_>,
        ctx: &ParseContext,
    ) -> Option<(NodeId, BlockState)> {
        let line = reader.peek_line()?;
        let pos = ctx.block_offset()?;
        let (level, text) = try_parse_atx_heading(&line[pos..])?;
        let node = doc.alloc(NodeKind::Heading { level });
        if !text.is_empty() {
            doc.lines_mut(node).push(text.to_string());
        }
        reader.advance_to_eol();
        Some((node, BlockState::NoChildren))
    }

    fn continue_block(
        &self,
        _doc: &mut Document,
        _node: NodeId,
        _reader: &mut LineReader<'_>,
        _ctx: &ParseContext,
    ) -> Continuation {
        Continuation::Close
    }

    fn can_interrupt_paragraph(&self) -> bool {
        true
    }

    fn can_accept_indented_line(&self) -> bool {
        false
    }
}
