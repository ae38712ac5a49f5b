//! Render functions for the generic block kinds.

use std::fmt::Write;

use deflist_parser::{Document, NodeId, NodeKind, NodeKindTag, WalkStatus};

use super::inline::write_code_lines;
use super::{NodeRenderer, RenderError, RendererRegistry};

pub const CORE_RENDERER_PRIORITY: i32 = 1000;

pub struct CoreRenderer;

impl NodeRenderer for CoreRenderer {
    fn register(&self, registry: &mut RendererRegistry) {
        registry.register(NodeKindTag::Document, render_document);
        registry.register(NodeKindTag::Paragraph, render_paragraph);
        registry.register(NodeKindTag::TextBlock, render_text_block);
        registry.register(NodeKindTag::Heading, render_heading);
        registry.register(NodeKindTag::ThematicBreak, render_thematic_break);
        registry.register(NodeKindTag::CodeBlock, render_code_block);
    }
}

fn render_document(
    _out: &mut String,
    _doc: &Document,
    _node: NodeId,
    _entering: bool,
) -> Result<WalkStatus, RenderError> {
    Ok(WalkStatus::Continue)
}

fn render_paragraph(
    out: &mut String,
    _doc: &Document,
    _node: NodeId,
    entering: bool,
) -> Result<WalkStatus, RenderError> {
    out.push_str(if entering { "<p>" } else { "</p>\n" });
    Ok(WalkStatus::Continue)
}

fn render_text_block(
    out: &mut String,
    doc: &Document,
    node: NodeId,
    entering: bool,
) -> Result<WalkStatus, RenderError> {
    if !entering && doc.next_sibling(node).is_some() {
        out.push('\n');
    }
    Ok(WalkStatus::Continue)
}

fn render_heading(
    out: &mut String,
    doc: &Document,
    node: NodeId,
    entering: bool,
) -> Result<WalkStatus, RenderError> {
    let NodeKind::Heading { level } = doc.kind(node) else {
        unreachable!("heading renderer called for {}", doc.kind(node).tag());
    };
    if entering {
        write!(out, "<h{level}>")?;
    } else {
        writeln!(out, "</h{level}>")?;
    }
    Ok(WalkStatus::Continue)
}

fn render_thematic_break(
    out: &mut String,
    _doc: &Document,
    _node: NodeId,
    entering: bool,
) -> Result<WalkStatus, RenderError> {
    if entering {
        out.push_str("<hr />\n");
    }
    Ok(WalkStatus::SkipChildren)
}

fn render_code_block(
    out: &mut String,
    doc: &Document,
    node: NodeId,
    entering: bool,
) -> Result<WalkStatus, RenderError> {
    if entering {
        out.push_str("<pre><code>");
        write_code_lines(out, doc.lines(node));
    } else {
        out.push_str("</code></pre>\n");
    }
    Ok(WalkStatus::Continue)
}

#[cfg(test)]
mod tests {
    use crate::renderer::HtmlRenderer;

    fn html(input: &str) -> String {
        HtmlRenderer::with_core()
            .render(&deflist_parser::parse(input))
            .unwrap()
    }

    #[test]
    fn paragraph_lines_are_joined() {
        assert_eq!(html("one\n  two\n"), "<p>one\ntwo</p>\n");
    }

    #[test]
    fn heading_levels() {
        assert_eq!(html("### Three ###\n"), "<h3>Three</h3>\n");
        assert_eq!(html("#\n"), "<h1></h1>\n");
    }

    #[test]
    fn code_block_is_escaped_verbatim() {
        assert_eq!(
            html("    <b>\n\n      x\n"),
            "<pre><code>&lt;b&gt;\n\n  x\n</code></pre>\n"
        );
    }
}
