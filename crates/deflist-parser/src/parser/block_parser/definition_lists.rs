//! Definition lists: a paragraph of terms followed by `:`-prefixed descriptions.
//!
//! ```text
//! Apple
//! Pomme
//! :   A red fruit.
//!
//! :   A company.
//! ```
//!
//! Two recognizers cooperate. [`DefinitionListRecognizer`] opens (or reuses) the
//! list container and owns the continuation offset; [`DefinitionDescriptionRecognizer`]
//! runs inside the list, turns the pending paragraph into terms and opens the
//! description whose content is parsed as ordinary blocks.

use crate::parser::ParseContext;
use crate::reader::LineReader;
use crate::syntax::{DefinitionListState, Document, NodeId, NodeKind};

use super::utils::{indent_position, indent_width, is_blank};
use super::{BlockRecognizer, BlockState, Continuation};

pub(crate) const DEFINITION_MARKER: u8 = b':';

/// Indentation after the marker at which the content would read as indented code.
const CODE_INDENT_THRESHOLD: usize = 8;
/// Indentation used instead when the threshold is reached.
const CLAMPED_INDENT: usize = 5;
/// Blank lines after which a list no longer picks up new items.
const MAX_BLANK_RUN: usize = 2;

/// Where a marker line's description goes, decided from the parent's last child.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Placement {
    /// A brand-new list, with the paragraph as its terms when there is one.
    NewList { paragraph: Option<NodeId> },
    /// The paragraph becomes further terms of the list right before it.
    AppendTerms { list: NodeId, paragraph: NodeId },
    /// Another description for the same terms; no new terms.
    AppendDescription { list: NodeId },
}

fn accepts_more_items(doc: &Document, list: NodeId) -> bool {
    doc.definition_list(list)
        .is_some_and(|state| state.blank_run < MAX_BLANK_RUN)
}

fn placement(doc: &Document, parent: NodeId) -> Option<Placement> {
    let last = doc.last_child(parent)?;
    match doc.kind(last) {
        NodeKind::Paragraph => match doc.prev_sibling(last) {
            Some(list) if accepts_more_items(doc, list) => Some(Placement::AppendTerms {
                list,
                paragraph: last,
            }),
            _ => Some(Placement::NewList {
                paragraph: Some(last),
            }),
        },
        NodeKind::DefinitionList(_) if accepts_more_items(doc, last) => {
            Some(Placement::AppendDescription { list: last })
        }
        NodeKind::DefinitionList(_) => Some(Placement::NewList { paragraph: None }),
        _ => None,
    }
}

/// Continuation offset for a marker at byte `pos` of `line`, or `None` when
/// no whitespace follows the marker.
fn continuation_offset(line: &str, pos: usize) -> Option<usize> {
    let after = pos + 1;
    let (mut width, _) = indent_width(&line[after..], after);
    if width == 0 {
        return None;
    }
    if width >= CODE_INDENT_THRESHOLD {
        width = CLAMPED_INDENT;
    }
    Some(width + after)
}

fn list_state_mut(doc: &mut Document, node: NodeId) -> &mut DefinitionListState {
    match doc.kind_mut(node) {
        NodeKind::DefinitionList(state) => state,
        other => panic!("definition list recognizer driven with a {} node", other.tag()),
    }
}

/// Opens or reuses the list container for a `:` marker line.
pub struct DefinitionListRecognizer;

impl BlockRecognizer for DefinitionListRecognizer {
    fn name(&self) -> &'static str {
        "definition-list"
    }

    fn triggers(&self) -> &[u8] {
        b":"
    }

    fn open(
        &self,
        doc: &mut Document,
        parent: NodeId,
        reader: &mut LineReader<'_>,
        ctx: &ParseContext,
    ) -> Option<(NodeId, BlockState)> {
        // Inside a list the marker belongs to the description recognizer.
        if doc.kind(parent).is_definition_list() {
            return None;
        }
        let line = reader.peek_line()?;
        let pos = ctx.block_offset()?;
        if line.as_bytes().get(pos) != Some(&DEFINITION_MARKER) {
            return None;
        }
        let offset = continuation_offset(&line, pos)?;

        let list = match placement(doc, parent)? {
            Placement::NewList { paragraph } => {
                log::debug!("New definition list over {paragraph:?}, offset {offset}");
                doc.alloc(NodeKind::DefinitionList(DefinitionListState::new(offset, paragraph)))
            }
            Placement::AppendTerms { list, paragraph } => {
                log::debug!("Reusing {list:?} for terms in {paragraph:?}, offset {offset}");
                let state = list_state_mut(doc, list);
                state.offset = offset;
                state.pending_paragraph = Some(paragraph);
                state.blank_run = 0;
                list
            }
            Placement::AppendDescription { list } => {
                log::debug!("Reusing {list:?} for another description, offset {offset}");
                let state = list_state_mut(doc, list);
                state.offset = offset;
                state.pending_paragraph = None;
                state.blank_run = 0;
                list
            }
        };
        Some((list, BlockState::HasChildren))
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
        let state = list_state_mut(doc, node);
        if is_blank(&line) {
            state.blank_run += 1;
            return Continuation::Continue(BlockState::HasChildren);
        }
        let column = reader.line_offset();
        let (width, _) = indent_width(&line, column);
        if width < state.offset {
            return Continuation::Close;
        }
        let Some((pos, padding)) = indent_position(&line, column, state.offset) else {
            return Continuation::Close;
        };
        state.blank_run = 0;
        reader.advance_and_set_padding(pos, padding);
        Continuation::Continue(BlockState::HasChildren)
    }

    fn can_interrupt_paragraph(&self) -> bool {
        true
    }

    fn can_accept_indented_line(&self) -> bool {
        false
    }
}

/// Opens a description inside a list, extracting the pending terms first.
pub struct DefinitionDescriptionRecognizer;

impl BlockRecognizer for DefinitionDescriptionRecognizer {
    fn name(&self) -> &'static str {
        "definition-description"
    }

    fn triggers(&self) -> &[u8] {
        b":"
    }

    fn open(
        &self,
        doc: &mut Document,
        parent: NodeId,
        reader: &mut LineReader<'_>,
        ctx: &ParseContext,
    ) -> Option<(NodeId, BlockState)> {
        let line = reader.peek_line()?;
        let pos = ctx.block_offset()?;
        if line.as_bytes().get(pos) != Some(&DEFINITION_MARKER) {
            return None;
        }
        let state = doc.definition_list_mut(parent)?;
        let offset = state.offset;
        let pending = state.pending_paragraph.take();

        if let Some(paragraph) = pending {
            let terms: Vec<String> = doc
                .lines(paragraph)
                .iter()
                .map(|line| line.trim_end().to_string())
                .collect();
            log::debug!("Extracting {} term(s) from {paragraph:?}", terms.len());
            for text in terms {
                let term = doc.alloc(NodeKind::DefinitionTerm);
                doc.lines_mut(term).push(text);
                doc.append_child(parent, term);
            }
            doc.detach(paragraph);
        }

        let after = pos + 1;
        let target = offset.saturating_sub(after);
        let (content_pos, padding) = indent_position(&line[after..], after, target).unwrap_or((0, 0));
        reader.advance_and_set_padding(after + content_pos, padding);

        let description = doc.alloc(NodeKind::DefinitionDescription { is_tight: false });
        Some((description, BlockState::HasChildren))
    }

    fn continue_block(
        &self,
        _doc: &mut Document,
        _node: NodeId,
        _reader: &mut LineReader<'_>,
        _ctx: &ParseContext,
    ) -> Continuation {
        // The list decides where a description ends.
        Continuation::Continue(BlockState::HasChildren)
    }

    fn close(&self, doc: &mut Document, node: NodeId, _reader: &LineReader<'_>) {
        let tight = !doc.has_blank_previous_lines(node);
        match doc.kind_mut(node) {
            NodeKind::DefinitionDescription { is_tight } => *is_tight = tight,
            other => panic!("description recognizer closed a {} node", other.tag()),
        }
        if !tight {
            return;
        }
        let paragraphs: Vec<NodeId> = doc
            .children(node)
            .filter(|&child| doc.kind(child).is_paragraph())
            .collect();
        for paragraph in paragraphs {
            let text_block = doc.alloc(NodeKind::TextBlock);
            let lines = std::mem::take(doc.lines_mut(paragraph));
            *doc.lines_mut(text_block) = lines;
            doc.replace_child(node, paragraph, text_block);
        }
    }

    fn can_interrupt_paragraph(&self) -> bool {
        true
    }

    fn can_accept_indented_line(&self) -> bool {
        false
    }
}
