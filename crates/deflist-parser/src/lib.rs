//! Block parser with definition list support.
//!
//! Input is read line by line; prioritized [`BlockRecognizer`](parser::block_parser::BlockRecognizer)s
//! open, continue and close blocks in an arena [`Document`]. Besides paragraphs,
//! ATX headings, thematic breaks and indented code, the default parser recognizes
//! definition lists:
//!
//! ```text
//! Term
//! :   Description
//! ```

pub mod parser;
pub mod reader;
pub mod syntax;

pub use parser::{ParseContext, Parser, ParserBuilder, Prioritized};
pub use syntax::{Document, NodeId, NodeKind, NodeKindTag, WalkStatus};

/// Parses `input` with the default recognizers (generic blocks plus definition lists).
///
/// # Examples
///
/// ```rust
/// use deflist_parser::{NodeKindTag, parse};
///
/// let doc = parse("Term\n: Description\n");
/// let list = doc.first_child(doc.root()).unwrap();
/// assert_eq!(doc.kind(list).tag(), NodeKindTag::DefinitionList);
/// ```
pub fn parse(input: &str) -> Document {
    Parser::default().parse(input)
}
