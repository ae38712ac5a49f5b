use super::NodeId;

/// Per-list state carried by a [`NodeKind::DefinitionList`] node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DefinitionListState {
    /// Minimum indentation (in columns) a line needs to stay inside the list.
    pub offset: usize,
    /// Paragraph waiting to be turned into terms by the next description.
    /// Consumed with `Option::take`, so it is handed over at most once.
    pub pending_paragraph: Option<NodeId>,
    /// Blank lines seen since the last line that continued the list.
    pub blank_run: usize,
}

impl DefinitionListState {
    pub fn new(offset: usize, pending_paragraph: Option<NodeId>) -> Self {
        Self {
            offset,
            pending_paragraph,
            blank_run: 0,
        }
    }
}

/// Kind of a block node, together with the data that kind needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeKind {
    Document,
    Paragraph,
    /// Paragraph content rendered without block wrapping (tight descriptions).
    TextBlock,
    Heading {
        level: u8,
    },
    ThematicBreak,
    CodeBlock,
    DefinitionList(DefinitionListState),
    DefinitionTerm,
    DefinitionDescription {
        is_tight: bool,
    },
}

/// Field-less mirror of [`NodeKind`], used as a registry key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum NodeKindTag {
    Document,
    Paragraph,
    TextBlock,
    Heading,
    ThematicBreak,
    CodeBlock,
    DefinitionList,
    DefinitionTerm,
    DefinitionDescription,
}

impl NodeKind {
    pub fn tag(&self) -> NodeKindTag {
        match self {
            NodeKind::Document => NodeKindTag::Document,
            NodeKind::Paragraph => NodeKindTag::Paragraph,
            NodeKind::TextBlock => NodeKindTag::TextBlock,
            NodeKind::Heading { .. } => NodeKindTag::Heading,
            NodeKind::ThematicBreak => NodeKindTag::ThematicBreak,
            NodeKind::CodeBlock => NodeKindTag::CodeBlock,
            NodeKind::DefinitionList(_) => NodeKindTag::DefinitionList,
            NodeKind::DefinitionTerm => NodeKindTag::DefinitionTerm,
            NodeKind::DefinitionDescription { .. } => NodeKindTag::DefinitionDescription,
        }
    }

    pub fn is_paragraph(&self) -> bool {
        matches!(self, NodeKind::Paragraph)
    }

    pub fn is_definition_list(&self) -> bool {
        matches!(self, NodeKind::DefinitionList(_))
    }

    /// Whether the node's `lines` hold inline text (as opposed to verbatim code).
    pub fn has_inline_content(&self) -> bool {
        matches!(
            self,
            NodeKind::Paragraph
                | NodeKind::TextBlock
                | NodeKind::Heading { .. }
                | NodeKind::DefinitionTerm
        )
    }
}

impl std::fmt::Display for NodeKindTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            NodeKindTag::Document => "Document",
            NodeKindTag::Paragraph => "Paragraph",
            NodeKindTag::TextBlock => "TextBlock",
            NodeKindTag::Heading => "Heading",
            NodeKindTag::ThematicBreak => "ThematicBreak",
            NodeKindTag::CodeBlock => "CodeBlock",
            NodeKindTag::DefinitionList => "DefinitionList",
            NodeKindTag::DefinitionTerm => "DefinitionTerm",
            NodeKindTag::DefinitionDescription => "DefinitionDescription",
        };
        f.write_str(name)
    }
}
