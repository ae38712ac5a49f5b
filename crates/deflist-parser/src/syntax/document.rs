use std::fmt::Write;

use super::{DefinitionListState, NodeId, NodeKind};

/// Result of a visitor callback during [`Document::walk`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WalkStatus {
    Continue,
    /// Do not descend into the current node. Its exit callback still runs.
    SkipChildren,
    Stop,
}

#[derive(Debug, Clone)]
struct Node {
    kind: NodeKind,
    parent: Option<NodeId>,
    first_child: Option<NodeId>,
    last_child: Option<NodeId>,
    prev_sibling: Option<NodeId>,
    next_sibling: Option<NodeId>,
    lines: Vec<String>,
    blank_previous_lines: bool,
}

impl Node {
    fn new(kind: NodeKind) -> Self {
        Self {
            kind,
            parent: None,
            first_child: None,
            last_child: None,
            prev_sibling: None,
            next_sibling: None,
            lines: Vec::new(),
            blank_previous_lines: false,
        }
    }
}

/// A parsed document: every node lives in one arena and is linked by handles.
///
/// Detached nodes stay allocated but are unreachable from the root.
#[derive(Debug, Clone)]
pub struct Document {
    nodes: Vec<Node>,
    root: NodeId,
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Document {
    pub fn new() -> Self {
        Self {
            nodes: vec![Node::new(NodeKind::Document)],
            root: NodeId(0),
        }
    }

    pub fn root(&self) -> NodeId {
        self.root
    }

    /// Allocate a detached node.
    pub fn alloc(&mut self, kind: NodeKind) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node::new(kind));
        id
    }

    fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.0]
    }

    fn node_mut(&mut self, id: NodeId) -> &mut Node {
        &mut self.nodes[id.0]
    }

    pub fn kind(&self, id: NodeId) -> &NodeKind {
        &self.node(id).kind
    }

    pub fn kind_mut(&mut self, id: NodeId) -> &mut NodeKind {
        &mut self.node_mut(id).kind
    }

    pub fn definition_list(&self, id: NodeId) -> Option<&DefinitionListState> {
        match self.kind(id) {
            NodeKind::DefinitionList(state) => Some(state),
            _ => None,
        }
    }

    pub fn definition_list_mut(&mut self, id: NodeId) -> Option<&mut DefinitionListState> {
        match self.kind_mut(id) {
            NodeKind::DefinitionList(state) => Some(state),
            _ => None,
        }
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.node(id).parent
    }

    pub fn first_child(&self, id: NodeId) -> Option<NodeId> {
        self.node(id).first_child
    }

    pub fn last_child(&self, id: NodeId) -> Option<NodeId> {
        self.node(id).last_child
    }

    pub fn prev_sibling(&self, id: NodeId) -> Option<NodeId> {
        self.node(id).prev_sibling
    }

    pub fn next_sibling(&self, id: NodeId) -> Option<NodeId> {
        self.node(id).next_sibling
    }

    pub fn children(&self, id: NodeId) -> Children<'_> {
        Children {
            doc: self,
            next: self.first_child(id),
        }
    }

    pub fn lines(&self, id: NodeId) -> &[String] {
        &self.node(id).lines
    }

    pub fn lines_mut(&mut self, id: NodeId) -> &mut Vec<String> {
        &mut self.node_mut(id).lines
    }

    pub fn has_blank_previous_lines(&self, id: NodeId) -> bool {
        self.node(id).blank_previous_lines
    }

    pub fn set_blank_previous_lines(&mut self, id: NodeId, blank: bool) {
        self.node_mut(id).blank_previous_lines = blank;
    }

    /// Append `child` as the last child of `parent`, detaching it from its
    /// current position first.
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) {
        self.detach(child);
        let last = self.node(parent).last_child;
        {
            let node = self.node_mut(child);
            node.parent = Some(parent);
            node.prev_sibling = last;
        }
        match last {
            Some(last) => self.node_mut(last).next_sibling = Some(child),
            None => self.node_mut(parent).first_child = Some(child),
        }
        self.node_mut(parent).last_child = Some(child);
    }

    /// Unlink a node from its parent and siblings. Its own children stay attached to it.
    pub fn detach(&mut self, id: NodeId) {
        let Some(parent) = self.node(id).parent else {
            return;
        };
        let prev = self.node(id).prev_sibling;
        let next = self.node(id).next_sibling;
        match prev {
            Some(prev) => self.node_mut(prev).next_sibling = next,
            None => self.node_mut(parent).first_child = next,
        }
        match next {
            Some(next) => self.node_mut(next).prev_sibling = prev,
            None => self.node_mut(parent).last_child = prev,
        }
        let node = self.node_mut(id);
        node.parent = None;
        node.prev_sibling = None;
        node.next_sibling = None;
    }

    /// Put `new` where `old` is under `parent`; `old` ends up detached.
    pub fn replace_child(&mut self, parent: NodeId, old: NodeId, new: NodeId) {
        assert_eq!(
            self.parent(old),
            Some(parent),
            "replace_child: {old:?} is not a child of {parent:?}"
        );
        self.detach(new);
        let prev = self.node(old).prev_sibling;
        let next = self.node(old).next_sibling;
        {
            let node = self.node_mut(new);
            node.parent = Some(parent);
            node.prev_sibling = prev;
            node.next_sibling = next;
        }
        match prev {
            Some(prev) => self.node_mut(prev).next_sibling = Some(new),
            None => self.node_mut(parent).first_child = Some(new),
        }
        match next {
            Some(next) => self.node_mut(next).prev_sibling = Some(new),
            None => self.node_mut(parent).last_child = Some(new),
        }
        let old = self.node_mut(old);
        old.parent = None;
        old.prev_sibling = None;
        old.next_sibling = None;
    }

    /// Depth-first traversal calling `visit(node, entering)` on the way in and out.
    pub fn walk<E, F>(&self, id: NodeId, visit: &mut F) -> Result<WalkStatus, E>
    where
        F: FnMut(NodeId, bool) -> Result<WalkStatus, E>,
    {
        let status = visit(id, true)?;
        if status == WalkStatus::Stop {
            return Ok(WalkStatus::Stop);
        }
        if status != WalkStatus::SkipChildren {
            let mut child = self.first_child(id);
            while let Some(current) = child {
                if self.walk(current, visit)? == WalkStatus::Stop {
                    return Ok(WalkStatus::Stop);
                }
                child = self.next_sibling(current);
            }
        }
        if visit(id, false)? == WalkStatus::Stop {
            return Ok(WalkStatus::Stop);
        }
        Ok(WalkStatus::Continue)
    }

    /// Indented listing of the reachable tree, one node per line.
    pub fn dump(&self) -> String {
        let mut out = String::new();
        self.dump_node(self.root, 0, &mut out);
        out
    }

    fn dump_node(&self, id: NodeId, depth: usize, out: &mut String) {
        let indent = "  ".repeat(depth);
        let _ = write!(out, "{indent}{}", self.kind(id).tag());
        match self.kind(id) {
            NodeKind::Heading { level } => {
                let _ = write!(out, " level={level}");
            }
            NodeKind::DefinitionList(state) => {
                let _ = write!(out, " offset={}", state.offset);
            }
            NodeKind::DefinitionDescription { is_tight } => {
                out.push_str(if *is_tight { " tight" } else { " loose" });
            }
            _ => {}
        }
        out.push('\n');
        for line in self.lines(id) {
            let _ = writeln!(out, "{indent}  | {line:?}");
        }
        for child in self.children(id) {
            self.dump_node(child, depth + 1, out);
        }
    }
}

/// Iterator over the direct children of a node.
pub struct Children<'a> {
    doc: &'a Document,
    next: Option<NodeId>,
}

impl Iterator for Children<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        let current = self.next?;
        self.next = self.doc.next_sibling(current);
        Some(current)
    }
}
