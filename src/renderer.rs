//! HTML rendering of a parsed [`Document`].
//!
//! Each node kind is rendered by one function taken from a [`RendererRegistry`].
//! [`NodeRenderer`]s fill the registry; when two of them claim the same kind,
//! the one with the smaller priority wins.

use std::collections::HashMap;

use deflist_parser::{Document, NodeId, NodeKindTag, Prioritized, WalkStatus};

mod core;
mod definition_lists;
mod inline;

pub use self::core::{CORE_RENDERER_PRIORITY, CoreRenderer};
pub use definition_lists::{DEFINITION_LIST_RENDERER_PRIORITY, DefinitionListRenderer};

/// Errors that can occur while rendering a document.
#[derive(Debug)]
pub enum RenderError {
    /// Writing into the output buffer failed
    Fmt(std::fmt::Error),
    /// No renderer is registered for a node kind present in the tree
    MissingRenderer(NodeKindTag),
}

impl std::fmt::Display for RenderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Fmt(e) => write!(f, "failed to write output: {}", e),
            Self::MissingRenderer(kind) => write!(f, "no renderer registered for {}", kind),
        }
    }
}

impl std::error::Error for RenderError {}

impl From<std::fmt::Error> for RenderError {
    fn from(e: std::fmt::Error) -> Self {
        Self::Fmt(e)
    }
}

/// Renders one node; called with `entering == true` before its children and
/// `false` after them.
pub type RenderFn =
    fn(&mut String, &Document, NodeId, bool) -> Result<WalkStatus, RenderError>;

/// Render functions keyed by node kind.
#[derive(Clone, Default)]
pub struct RendererRegistry {
    funcs: HashMap<NodeKindTag, RenderFn>,
}

impl RendererRegistry {
    /// Register `func` for `kind`, replacing any earlier registration.
    pub fn register(&mut self, kind: NodeKindTag, func: RenderFn) {
        self.funcs.insert(kind, func);
    }

    pub fn get(&self, kind: NodeKindTag) -> Option<RenderFn> {
        self.funcs.get(&kind).copied()
    }

    pub fn len(&self) -> usize {
        self.funcs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.funcs.is_empty()
    }
}

/// A set of render functions for some node kinds.
pub trait NodeRenderer {
    fn register(&self, registry: &mut RendererRegistry);
}

/// Collects [`NodeRenderer`]s and walks documents with the winning functions.
pub struct HtmlRenderer {
    renderers: Vec<Prioritized<Box<dyn NodeRenderer>>>,
    registry: RendererRegistry,
    line_ending: &'static str,
}

impl Default for HtmlRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl HtmlRenderer {
    /// A renderer with no node renderers registered.
    pub fn new() -> Self {
        Self {
            renderers: Vec::new(),
            registry: RendererRegistry::default(),
            line_ending: "\n",
        }
    }

    /// A renderer for the generic blocks only.
    pub fn with_core() -> Self {
        let mut renderer = Self::new();
        renderer.add_node_renderer(CoreRenderer, CORE_RENDERER_PRIORITY);
        renderer
    }

    /// Add `renderer` at `priority`; a smaller priority wins over a larger one.
    pub fn add_node_renderer<R>(&mut self, renderer: R, priority: i32)
    where
        R: NodeRenderer + 'static,
    {
        let renderer: Box<dyn NodeRenderer> = Box::new(renderer);
        self.renderers.push(Prioritized::new(renderer, priority));
        self.rebuild_registry();
    }

    /// Line ending written in place of `\n` in the output.
    pub fn set_line_ending(&mut self, line_ending: &'static str) {
        self.line_ending = line_ending;
    }

    pub fn registry(&self) -> &RendererRegistry {
        &self.registry
    }

    fn rebuild_registry(&mut self) {
        self.renderers.sort_by_key(|r| r.priority);
        let mut registry = RendererRegistry::default();
        // Largest priority first, so smaller priorities overwrite it.
        for renderer in self.renderers.iter().rev() {
            renderer.value.register(&mut registry);
        }
        self.registry = registry;
    }

    pub fn render(&self, doc: &Document) -> Result<String, RenderError> {
        let mut out = String::new();
        doc.walk(doc.root(), &mut |id, entering| {
            self.render_node(&mut out, doc, id, entering)
        })?;
        if self.line_ending != "\n" {
            out = out.replace('\n', self.line_ending);
        }
        Ok(out)
    }

    fn render_node(
        &self,
        out: &mut String,
        doc: &Document,
        id: NodeId,
        entering: bool,
    ) -> Result<WalkStatus, RenderError> {
        let kind = doc.kind(id);
        let func = self
            .registry
            .get(kind.tag())
            .ok_or(RenderError::MissingRenderer(kind.tag()))?;
        let status = func(out, doc, id, entering)?;
        if entering && status == WalkStatus::Continue && kind.has_inline_content() {
            inline::write_inline(out, doc.lines(id));
        }
        Ok(status)
    }
}
