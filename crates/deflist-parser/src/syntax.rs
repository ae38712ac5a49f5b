//! Arena-backed block tree produced by the parser.

mod document;
mod kind;

pub use document::{Children, Document, WalkStatus};
pub use kind::{DefinitionListState, NodeKind, NodeKindTag};

/// Handle to a node stored in a [`Document`] arena.
///
/// Handles are only meaningful for the document that allocated them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(usize);

impl NodeId {
    pub fn index(self) -> usize {
        self.0
    }
}
