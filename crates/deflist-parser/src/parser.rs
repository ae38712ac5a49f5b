//! Line-by-line parse driver.
//!
//! The driver keeps a stack of open blocks. For every line it asks the open
//! blocks, outermost first, whether the line still belongs to them; the rest
//! of the line is then offered to the registered [`BlockRecognizer`]s in
//! priority order. A line no block claims closes the blocks that rejected it,
//! unless it lazily continues an open paragraph.

pub mod block_parser;

use crate::reader::LineReader;
use crate::syntax::{Document, NodeId};

use block_parser::utils::{indent_width, is_blank};
use block_parser::{
    BlockRecognizer, BlockState, Continuation, default_block_recognizers,
    definition_list_recognizers,
};

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// A value with a priority; smaller numbers are tried (or win) first.
#[derive(Debug, Clone)]
pub struct Prioritized<T> {
    pub value: T,
    pub priority: i32,
}

impl<T> Prioritized<T> {
    pub fn new(value: T, priority: i32) -> Self {
        Self { value, priority }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct OpenBlock {
    node: NodeId,
    recognizer: usize,
}

/// Per-document state visible to recognizers.
#[derive(Debug, Default)]
pub struct ParseContext {
    block_offset: Option<usize>,
    block_indent: Option<usize>,
    opened: Vec<OpenBlock>,
}

impl ParseContext {
    /// Byte position, within the peeked line, of the first non-whitespace
    /// character. `None` on blank lines.
    pub fn block_offset(&self) -> Option<usize> {
        self.block_offset
    }

    /// Width in columns of the whitespace before [`Self::block_offset`].
    pub fn block_indent(&self) -> Option<usize> {
        self.block_indent
    }

    /// Innermost block still accepting lines.
    pub fn last_opened_block(&self) -> Option<NodeId> {
        self.opened.last().map(|block| block.node)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OpenResult {
    NoBlocksOpened,
    ParagraphContinuation,
    NewBlocksOpened,
}

#[derive(Debug, Clone, Copy)]
struct LineStat {
    line: usize,
    level: usize,
    is_blank: bool,
}

/// Whether the line `line` was blank as seen from nesting `level`.
/// A blank line at an outer level counts for every level inside it.
fn is_blank_line(line: Option<usize>, level: usize, stats: &[LineStat]) -> bool {
    let Some(line) = line else {
        return true;
    };
    let Some(start) = stats.len().checked_sub(level + 1) else {
        return true;
    };
    for stat in stats[..=start].iter().rev() {
        if stat.line == line {
            if stat.level < level && stat.is_blank {
                return true;
            } else if stat.level == level {
                return stat.is_blank;
            }
        }
        if stat.line < line {
            return false;
        }
    }
    false
}

/// Builder for a [`Parser`] with a custom recognizer set.
#[derive(Default)]
pub struct ParserBuilder {
    recognizers: Vec<Prioritized<Box<dyn BlockRecognizer>>>,
}

impl ParserBuilder {
    pub fn with_block_recognizer(mut self, recognizer: Prioritized<Box<dyn BlockRecognizer>>) -> Self {
        self.add_block_recognizer(recognizer);
        self
    }

    pub fn add_block_recognizer(&mut self, recognizer: Prioritized<Box<dyn BlockRecognizer>>) {
        self.recognizers.push(recognizer);
    }

    pub fn with_default_block_recognizers(mut self) -> Self {
        for recognizer in default_block_recognizers() {
            self.add_block_recognizer(recognizer);
        }
        self
    }

    pub fn with_definition_lists(mut self) -> Self {
        for recognizer in definition_list_recognizers() {
            self.add_block_recognizer(recognizer);
        }
        self
    }

    pub fn build(mut self) -> Parser {
        // Stable sort: equal priorities keep registration order.
        self.recognizers.sort_by_key(|r| r.priority);
        log::debug!(
            "Block recognizers: {:?}",
            self.recognizers
                .iter()
                .map(|r| (r.value.name(), r.priority))
                .collect::<Vec<_>>()
        );
        Parser {
            recognizers: self.recognizers.into_iter().map(|r| r.value).collect(),
        }
    }
}

/// Block parser driving a prioritized set of recognizers over the input lines.
pub struct Parser {
    recognizers: Vec<Box<dyn BlockRecognizer>>,
}

impl Default for Parser {
    /// Generic blocks plus definition lists.
    fn default() -> Self {
        Self::builder()
            .with_default_block_recognizers()
            .with_definition_lists()
            .build()
    }
}

impl Parser {
    pub fn builder() -> ParserBuilder {
        ParserBuilder::default()
    }

    pub fn parse(&self, input: &str) -> Document {
        #[cfg(debug_assertions)]
        {
            init_logger();
        }

        let mut doc = Document::new();
        let mut reader = LineReader::new(input);
        let mut ctx = ParseContext::default();
        let root = doc.root();
        self.parse_blocks(&mut doc, root, &mut reader, &mut ctx);
        doc
    }

    fn recognizer(&self, block: OpenBlock) -> &dyn BlockRecognizer {
        self.recognizers[block.recognizer].as_ref()
    }

    fn parse_blocks(
        &self,
        doc: &mut Document,
        root: NodeId,
        reader: &mut LineReader<'_>,
        ctx: &mut ParseContext,
    ) {
        let mut blank_lines: Vec<LineStat> = Vec::with_capacity(128);
        // Each round starts with no open blocks and runs until they are all closed.
        loop {
            let Some(skipped) = reader.skip_blank_lines() else {
                return;
            };
            let line = reader.line_number();
            if skipped != 0 {
                blank_lines.clear();
            }
            let blank_before = is_blank_line(line.checked_sub(1), 0, &blank_lines);
            if self.open_blocks(doc, root, blank_before, reader, ctx) != OpenResult::NewBlocksOpened {
                log::trace!("Line {} opened nothing", line + 1);
                reader.advance_line();
                continue;
            }
            reader.advance_line();

            while !ctx.opened.is_empty() {
                let last_index = ctx.opened.len() - 1;
                for i in 0..=last_index {
                    let block = ctx.opened[i];
                    let Some(text) = reader.peek_line() else {
                        self.close_blocks(doc, last_index, 0, reader, ctx);
                        return;
                    };
                    let line = reader.line_number();
                    blank_lines.push(LineStat {
                        line,
                        level: i,
                        is_blank: is_blank(&text),
                    });

                    // Open paragraphs are continued through `open_blocks`.
                    if !doc.kind(block.node).is_paragraph() {
                        let state = self.recognizer(block).continue_block(doc, block.node, reader, ctx);
                        if let Continuation::Continue(state) = state {
                            if state == BlockState::HasChildren && i == last_index {
                                let blank_before = is_blank_line(line.checked_sub(1), i, &blank_lines);
                                self.open_blocks(doc, block.node, blank_before, reader, ctx);
                                break;
                            }
                            continue;
                        }
                    }

                    // The block rejected the line: try siblings, then lazy continuation.
                    let blank_before = is_blank_line(line.checked_sub(1), i, &blank_lines);
                    let this_parent = if i == 0 { root } else { ctx.opened[i - 1].node };
                    let last_node = ctx.opened[last_index].node;
                    let result = self.open_blocks(doc, this_parent, blank_before, reader, ctx);
                    if result != OpenResult::ParagraphContinuation {
                        // The innermost block may already have been closed and replaced.
                        let last = if ctx.opened[last_index].node != last_node {
                            last_index.checked_sub(1)
                        } else {
                            Some(last_index)
                        };
                        if let Some(last) = last
                            && last >= i
                        {
                            self.close_blocks(doc, last, i, reader, ctx);
                        }
                    } else {
                        log::trace!("Line {} lazily continues a paragraph", line + 1);
                    }
                    break;
                }

                reader.advance_line();
            }
        }
    }

    fn open_blocks(
        &self,
        doc: &mut Document,
        mut parent: NodeId,
        blank_line: bool,
        reader: &mut LineReader<'_>,
        ctx: &mut ParseContext,
    ) -> OpenResult {
        let mut result = OpenResult::NoBlocksOpened;
        let mut last_block = ctx.opened.last().copied();
        let continuable = last_block.is_some_and(|block| doc.kind(block.node).is_paragraph());

        'retry: loop {
            let Some(line) = reader.peek_line() else {
                break;
            };
            let (width, pos) = indent_width(&line, reader.line_offset());
            if is_blank(&line) {
                ctx.block_offset = None;
                ctx.block_indent = None;
                break;
            }
            ctx.block_offset = Some(pos);
            ctx.block_indent = Some(width);
            let trigger = line.as_bytes()[pos];

            for (index, recognizer) in self.recognizers.iter().enumerate() {
                let triggers = recognizer.triggers();
                if !triggers.is_empty() && !triggers.contains(&trigger) {
                    continue;
                }
                if continuable
                    && result == OpenResult::NoBlocksOpened
                    && !recognizer.can_interrupt_paragraph()
                {
                    continue;
                }
                if width > 3 && !recognizer.can_accept_indented_line() {
                    continue;
                }
                last_block = ctx.opened.last().copied();
                let Some((node, state)) = recognizer.open(doc, parent, reader, ctx) else {
                    continue;
                };
                log::debug!(
                    "Line {}: {} opened {:?} under {:?}",
                    reader.line_number() + 1,
                    recognizer.name(),
                    node,
                    parent
                );
                doc.set_blank_previous_lines(node, blank_line);
                if let Some(last) = last_block
                    && doc.parent(last.node).is_none()
                {
                    let last_pos = ctx.opened.len() - 1;
                    self.close_blocks(doc, last_pos, last_pos, reader, ctx);
                }
                doc.append_child(parent, node);
                result = OpenResult::NewBlocksOpened;
                ctx.opened.push(OpenBlock {
                    node,
                    recognizer: index,
                });
                if state == BlockState::HasChildren {
                    parent = node;
                    continue 'retry;
                }
                break 'retry;
            }
            break;
        }

        if result == OpenResult::NoBlocksOpened
            && continuable
            && let Some(last) = last_block
            && let Continuation::Continue(_) =
                self.recognizer(last).continue_block(doc, last.node, reader, ctx)
        {
            result = OpenResult::ParagraphContinuation;
        }
        result
    }

    /// Close open blocks `from` down to `to` (inclusive) and drop them from the stack.
    fn close_blocks(
        &self,
        doc: &mut Document,
        from: usize,
        to: usize,
        reader: &LineReader<'_>,
        ctx: &mut ParseContext,
    ) {
        for i in (to..=from).rev() {
            let block = ctx.opened[i];
            if doc.parent(block.node).is_some() {
                log::debug!(
                    "Closing {:?} ({})",
                    block.node,
                    self.recognizer(block).name()
                );
                self.recognizer(block).close(doc, block.node, reader);
            }
        }
        ctx.opened.drain(to..=from);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::syntax::NodeKindTag;

    fn kinds(doc: &Document, id: NodeId) -> Vec<NodeKindTag> {
        doc.children(id).map(|c| doc.kind(c).tag()).collect()
    }

    #[test]
    fn is_blank_line_looks_at_the_requested_level() {
        let stats = [
            LineStat {
                line: 3,
                level: 0,
                is_blank: true,
            },
            LineStat {
                line: 3,
                level: 1,
                is_blank: true,
            },
            LineStat {
                line: 4,
                level: 0,
                is_blank: false,
            },
        ];
        assert!(is_blank_line(Some(3), 0, &stats));
        assert!(!is_blank_line(Some(4), 0, &stats));
        assert!(is_blank_line(None, 0, &stats));
    }

    #[test]
    fn paragraphs_split_on_blank_lines() {
        let doc = Parser::default().parse("one\ntwo\n\nthree\n");
        let root = doc.root();
        assert_eq!(kinds(&doc, root), vec![NodeKindTag::Paragraph, NodeKindTag::Paragraph]);
        let first = doc.first_child(root).unwrap();
        assert_eq!(doc.lines(first), ["one", "two"]);
    }

    #[test]
    fn heading_interrupts_paragraph() {
        let doc = Parser::default().parse("text\n# Title\n");
        assert_eq!(
            kinds(&doc, doc.root()),
            vec![NodeKindTag::Paragraph, NodeKindTag::Heading]
        );
    }

    #[test]
    fn indented_code_does_not_interrupt_paragraph() {
        let doc = Parser::default().parse("text\n    more\n");
        let root = doc.root();
        assert_eq!(kinds(&doc, root), vec![NodeKindTag::Paragraph]);
        assert_eq!(doc.lines(doc.first_child(root).unwrap()), ["text", "more"]);
    }

    #[test]
    fn builder_without_definition_lists_leaves_markers_as_text() {
        let parser = Parser::builder().with_default_block_recognizers().build();
        let doc = parser.parse("Term\n: description\n");
        let root = doc.root();
        assert_eq!(kinds(&doc, root), vec![NodeKindTag::Paragraph]);
        assert_eq!(
            doc.lines(doc.first_child(root).unwrap()),
            ["Term", ": description"]
        );
    }

    #[test]
    fn empty_input_yields_empty_document() {
        let doc = Parser::default().parse("");
        assert_eq!(doc.first_child(doc.root()), None);
        let doc = Parser::default().parse("\n\n  \n");
        assert_eq!(doc.first_child(doc.root()), None);
    }
}
