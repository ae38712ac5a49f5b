//! Indented code block recognizer.
//!
//! A block of text indented four columns is treated as verbatim text. The
//! initial four columns are not part of the text. Blank lines inside the block
//! need not be indented.

use crate::parser::ParseContext;
use crate::reader::LineReader;
use crate::syntax::{Document, NodeId, NodeKind};

use super::utils::{indent_position, is_blank};
use super::{BlockRecognizer, BlockState, Continuation};

pub(crate) const CODE_INDENT: usize = 4;

/// Consume the code indentation and return the verbatim rest of the line.
fn take_code_line(reader: &mut LineReader<'_>) -> Option<String> {
    let line = reader.peek_line()?;
    let (pos, padding) = indent_position(&line, reader.line_offset(), CODE_INDENT)?;
    reader.advance_and_set_padding(pos, padding);
    let rest = reader.peek_line()?.into_owned();
    reader.advance_to_eol();
    Some(rest)
}

pub struct IndentedCodeRecognizer;

impl BlockRecognizer for IndentedCodeRecognizer {
    fn name(&self) -> &'static str {
        "indented-code"
    }

    fn open(
        &self,
        doc: &mut Document,
        _parent: NodeId,
        reader: &mut LineReader<'_>,
        _ctx: &ParseContext,
    ) -> Option<(NodeId, BlockState)> {
        let line = reader.peek_line()?;
        if is_blank(&line) {
            return None;
        }
        let text = take_code_line(reader)?;
        let node = doc.alloc(NodeKind::CodeBlock);
        doc.lines_mut(node).push(text);
        Some((node, BlockState::NoChildren))
    }

    fn continue_block(
        &self,
        doc: &mut Document,
        node: NodeId,
        reader: &mut LineReader<'_>,
        _ctx: &ParseContext,
    ) -> Continuation {
        let Some(line) = reader.peek_line() else {
            return Continuation::Close;
        };
        if is_blank(&line) {
            doc.lines_mut(node).push(String::new());
            reader.advance_to_eol();
            return Continuation::Continue(BlockState::NoChildren);
        }
        match take_code_line(reader) {
            Some(text) => {
                doc.lines_mut(node).push(text);
                Continuation::Continue(BlockState::NoChildren)
            }
            None => Continuation::Close,
        }
    }

    fn close(&self, doc: &mut Document, node: NodeId, _reader: &LineReader<'_>) {
        let lines = doc.lines_mut(node);
        while lines.last().is_some_and(|line| is_blank(line)) {
            lines.pop();
        }
    }

    fn can_interrupt_paragraph(&self) -> bool {
        false
    }

    fn can_accept_indented_line(&self) -> bool {
        true
    }
}
