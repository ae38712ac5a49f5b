//! Block recognizers and the contract the parse driver drives them through.

use crate::reader::LineReader;
use crate::syntax::{Document, NodeId};

use super::{ParseContext, Prioritized};

mod definition_lists;
mod headings;
mod horizontal_rules;
mod indented_code;
mod paragraphs;
pub mod utils;

pub use definition_lists::{DefinitionDescriptionRecognizer, DefinitionListRecognizer};
pub use headings::AtxHeadingRecognizer;
pub use horizontal_rules::ThematicBreakRecognizer;
pub use indented_code::IndentedCodeRecognizer;
pub use paragraphs::ParagraphRecognizer;

/// Whether the driver should offer the rest of the line to child recognizers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockState {
    HasChildren,
    NoChildren,
}

/// Outcome of asking an open block whether the current line still belongs to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Continuation {
    Continue(BlockState),
    Close,
}

/// A pluggable recognizer for one kind of block.
///
/// The driver calls `open` on lines that could start the block, `continue_block`
/// on every following line while the block is open, and `close` exactly once
/// when the block stops accepting lines (unless the node was detached by then).
pub trait BlockRecognizer {
    fn name(&self) -> &'static str;

    /// Characters (at the block offset) that can start this block.
    /// An empty slice means the recognizer is offered every line.
    fn triggers(&self) -> &[u8] {
        &[]
    }

    /// Try to start a block under `parent`. The returned node is appended to
    /// `parent` by the driver; it may be a node that already exists in the tree.
    fn open(
        &self,
        doc: &mut Document,
        parent: NodeId,
        reader: &mut LineReader<'_>,
        ctx: &ParseContext,
    ) -> Option<(NodeId, BlockState)>;

    fn continue_block(
        &self,
        doc: &mut Document,
        node: NodeId,
        reader: &mut LineReader<'_>,
        ctx: &ParseContext,
    ) -> Continuation;

    fn close(&self, _doc: &mut Document, _node: NodeId, _reader: &LineReader<'_>) {}

    /// May this block start on a line that would otherwise continue a paragraph?
    fn can_interrupt_paragraph(&self) -> bool;

    /// May this block start on a line indented four or more columns?
    fn can_accept_indented_line(&self) -> bool;
}

/// Priority of the host's paragraph recognizer; everything else is tried first.
pub const PARAGRAPH_PRIORITY: i32 = 1000;

fn prioritized<R>(recognizer: R, priority: i32) -> Prioritized<Box<dyn BlockRecognizer>>
where
    R: BlockRecognizer + 'static,
{
    Prioritized::new(Box::new(recognizer) as Box<dyn BlockRecognizer>, priority)
}

/// The generic recognizers every document gets.
pub fn default_block_recognizers() -> Vec<Prioritized<Box<dyn BlockRecognizer>>> {
    vec![
        prioritized(ThematicBreakRecognizer, 200),
        prioritized(IndentedCodeRecognizer, 500),
        prioritized(AtxHeadingRecognizer, 600),
        prioritized(ParagraphRecognizer, PARAGRAPH_PRIORITY),
    ]
}

/// The list recognizer and the description recognizer, at adjacent priorities
/// ahead of every generic recognizer.
pub fn definition_list_recognizers() -> Vec<Prioritized<Box<dyn BlockRecognizer>>> {
    vec![
        prioritized(DefinitionListRecognizer, 101),
        prioritized(DefinitionDescriptionRecognizer, 102),
    ]
}
