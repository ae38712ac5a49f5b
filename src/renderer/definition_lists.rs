//! Render functions for definition lists.
//!
//! A tight description holds text blocks and renders inline with its tags;
//! a loose one keeps its paragraphs and starts on its own line.

use deflist_parser::{Document, NodeId, NodeKind, NodeKindTag, WalkStatus};

use super::{NodeRenderer, RenderError, RendererRegistry};

/// Wins over [`super::CORE_RENDERER_PRIORITY`].
pub const DEFINITION_LIST_RENDERER_PRIORITY: i32 = 500;

pub struct DefinitionListRenderer;

impl NodeRenderer for DefinitionListRenderer {
    fn register(&self, registry: &mut RendererRegistry) {
        registry.register(NodeKindTag::DefinitionList, render_definition_list);
        registry.register(NodeKindTag::DefinitionTerm, render_definition_term);
        registry.register(NodeKindTag::DefinitionDescription, render_definition_description);
    }
}

fn render_definition_list(
    out: &mut String,
    _doc: &Document,
    _node: NodeId,
    entering: bool,
) -> Result<WalkStatus, RenderError> {
    out.push_str(if entering { "<dl>\n" } else { "</dl>\n" });
    Ok(WalkStatus::Continue)
}

fn render_definition_term(
    out: &mut String,
    _doc: &Document,
    _node: NodeId,
    entering: bool,
) -> Result<WalkStatus, RenderError> {
    out.push_str(if entering { "<dt>" } else { "</dt>\n" });
    Ok(WalkStatus::Continue)
}

fn render_definition_description(
    out: &mut String,
    doc: &Document,
    node: NodeId,
    entering: bool,
) -> Result<WalkStatus, RenderError> {
    let NodeKind::DefinitionDescription { is_tight } = doc.kind(node) else {
        unreachable!("description renderer called for {}", doc.kind(node).tag());
    };
    if !entering {
        out.push_str("</dd>\n");
    } else if *is_tight {
        out.push_str("<dd>");
    } else {
        out.push_str("<dd>\n");
    }
    Ok(WalkStatus::Continue)
}
