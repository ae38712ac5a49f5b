//! Thematic break (horizontal rule) recognizer.

use crate::parser::ParseContext;
use crate::reader::LineReader;
use crate::syntax::{Document, NodeId, NodeKind};

use super::{BlockRecognizer, BlockState, Continuation};

/// Try to parse a horizontal rule from a line.
///
/// A horizontal rule is 3 or more `*`, `-`, or `_` characters,
/// optionally separated by spaces.
pub(crate) fn try_parse_horizontal_rule(line: &str) -> Option<char> {
    let trimmed = line.trim();

    let rule_char = trimmed.chars().next()?;
    if !matches!(rule_char, '*' | '-' | '_') {
        return None;
    }

    // Check that the line only contains the rule character and spaces
    let mut count = 0;
    for ch in trimmed.chars() {
        match ch {
            c if c == rule_char => count += 1,
            ' ' | '\t' => continue,
            _ => return None,
        }
    }

    if count >= 3 { Some(rule_char) } else { None }
}

pub struct ThematicBreakRecognizer;

impl BlockRecognizer for ThematicBreakRecognizer {
    fn name(&self) -> &'static str {
        "thematic-break"
    }

    fn triggers(&self) -> &[u8] {
        b"*-_"
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
        try_parse_horizontal_rule(&line[pos..])?;
        reader.advance_to_eol();
        Some((doc.alloc(NodeKind::ThematicBreak), BlockState::NoChildren))
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
