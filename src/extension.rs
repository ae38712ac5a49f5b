//! Pluggable syntax: an [`Extension`] adds block recognizers to the parser and
//! node renderers to the HTML renderer.

use deflist_parser::parser::block_parser::definition_list_recognizers;
use deflist_parser::{Document, Parser, ParserBuilder};

use crate::config::{Config, LineEnding};
use crate::renderer::{
    DEFINITION_LIST_RENDERER_PRIORITY, DefinitionListRenderer, HtmlRenderer, RenderError,
};

pub trait Extension {
    fn extend(&self, parser: &mut ParserBuilder, renderer: &mut HtmlRenderer);
}

/// Definition lists:
///
/// ```text
/// Apple
/// :   A red fruit.
/// ```
pub struct DefinitionList;

impl Extension for DefinitionList {
    fn extend(&self, parser: &mut ParserBuilder, renderer: &mut HtmlRenderer) {
        for recognizer in definition_list_recognizers() {
            parser.add_block_recognizer(recognizer);
        }
        renderer.add_node_renderer(DefinitionListRenderer, DEFINITION_LIST_RENDERER_PRIORITY);
    }
}

/// A configured parser and renderer pair.
pub struct Markdown {
    parser: Parser,
    renderer: HtmlRenderer,
    line_ending: LineEnding,
}

impl Default for Markdown {
    fn default() -> Self {
        Self::new(&Config::default())
    }
}

impl Markdown {
    /// Generic blocks plus the extensions enabled in `config`.
    pub fn new(config: &Config) -> Self {
        let mut extensions: Vec<&dyn Extension> = Vec::new();
        if config.extensions.definition_lists {
            extensions.push(&DefinitionList);
        }
        let mut markdown = Self::with_extensions(&extensions);
        markdown.line_ending = config.line_ending;
        if config.line_ending == LineEnding::Crlf {
            markdown.renderer.set_line_ending("\r\n");
        }
        markdown
    }

    /// Generic blocks plus `extensions`, applied in order.
    pub fn with_extensions(extensions: &[&dyn Extension]) -> Self {
        let mut builder = Parser::builder().with_default_block_recognizers();
        let mut renderer = HtmlRenderer::with_core();
        for extension in extensions {
            extension.extend(&mut builder, &mut renderer);
        }
        Self {
            parser: builder.build(),
            renderer,
            line_ending: LineEnding::Lf,
        }
    }

    pub fn parser(&self) -> &Parser {
        &self.parser
    }

    pub fn renderer(&self) -> &HtmlRenderer {
        &self.renderer
    }

    pub fn parse(&self, input: &str) -> Document {
        self.parser.parse(input)
    }

    pub fn render(&self, doc: &Document) -> Result<String, RenderError> {
        self.renderer.render(doc)
    }

    /// Parse and render `input`; with [`LineEnding::Auto`] the output follows
    /// the input's first line ending.
    pub fn convert(&self, input: &str) -> Result<String, RenderError> {
        let out = self.render(&self.parse(input))?;
        if self.line_ending == LineEnding::Auto && crate::detect_line_ending(input) == "\r\n" {
            return Ok(out.replace('\n', "\r\n"));
        }
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConfigBuilder;

    #[test]
    fn default_enables_definition_lists() {
        let html = Markdown::default().convert("Term\n: text\n").unwrap();
        assert_eq!(html, "<dl>\n<dt>Term</dt>\n<dd>text</dd>\n</dl>\n");
    }

    #[test]
    fn disabled_definition_lists_leave_paragraph_text() {
        let config = ConfigBuilder::default().definition_lists(false).build();
        let html = Markdown::new(&config).convert("Term\n: text\n").unwrap();
        assert_eq!(html, "<p>Term\n: text</p>\n");
    }

    #[test]
    fn extensions_apply_in_order() {
        let markdown = Markdown::with_extensions(&[&DefinitionList]);
        assert!(
            markdown
                .renderer()
                .registry()
                .get(deflist_parser::NodeKindTag::DefinitionList)
                .is_some()
        );
        let doc = markdown.parse("a\n: b\n");
        let list = doc.first_child(doc.root()).unwrap();
        assert!(doc.kind(list).is_definition_list());
    }

    #[test]
    fn auto_line_ending_follows_input() {
        let html = Markdown::default().convert("Term\r\n: text\r\n").unwrap();
        assert_eq!(html, "<dl>\r\n<dt>Term</dt>\r\n<dd>text</dd>\r\n</dl>\r\n");
    }

    #[test]
    fn forced_lf_ignores_input_line_endings() {
        let config = ConfigBuilder::default().line_ending(LineEnding::Lf).build();
        let html = Markdown::new(&config).convert("a\r\n").unwrap();
        assert_eq!(html, "<p>a</p>\n");
    }
}
