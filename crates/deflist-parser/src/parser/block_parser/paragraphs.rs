//! Paragraph recognizer: the fallback for any non-blank line.

use crate::parser::ParseContext;
use crate::reader::LineReader;
use crate::syntax::{Document, NodeId, NodeKind};

use super::utils::is_blank;
use super::{BlockRecognizer, BlockState, Continuation};

pub struct ParagraphRecognizer;

impl BlockRecognizer for ParagraphRecognizer {
    fn name(&self) -> &'static str {
        "paragraph"
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
        if is_blank(&line) {
            return None;
        }
        let node = doc.alloc(NodeKind::Paragraph);
        doc.lines_mut(node).push(line[pos..].to_string());
        reader.advance_to_eol();
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
            return Continuation::Close;
        }
        doc.lines_mut(node).push(line.trim_start().to_string());
        reader.advance_to_eol();
        Continuation::Continue(BlockState::NoChildren)
    }

    fn close(&self, doc: &mut Document, node: NodeId, _reader: &LineReader<'_>) {
        let lines = doc.lines_mut(node);
        if let Some(last) = lines.last_mut() {
            let trimmed = last.trim_end().len();
            last.truncate(trimmed);
        }
        if lines.is_empty() {
            doc.detach(node);
        }
    }

    fn can_interrupt_paragraph(&self) -> bool {
        false
    }

    fn can_accept_indented_line(&self) -> bool {
        false
    }
}
