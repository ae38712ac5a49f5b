//! Definition lists for a line-oriented Markdown block parser, rendered to HTML.
//!
//! ```text
//! Apple
//! :   A red fruit.
//! ```
//!
//! renders as
//!
//! ```html
//! <dl>
//! <dt>Apple</dt>
//! <dd>A red fruit.</dd>
//! </dl>
//! ```

pub mod config;
pub mod extension;
pub mod renderer;

pub use config::Config;
pub use config::ConfigBuilder;
pub use config::LineEnding;
pub use deflist_parser::{Document, NodeId, NodeKind, NodeKindTag, WalkStatus};
pub use extension::{DefinitionList, Extension, Markdown};
pub use renderer::{HtmlRenderer, RenderError};

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn detect_line_ending(input: &str) -> &str {
    // Check for first occurrence of \r\n or \n
    let rn_pos = input.find("\r\n");
    let n_pos = input.find('\n');

    if let (Some(rn), Some(n)) = (rn_pos, n_pos) {
        if rn < n {
            return "\r\n";
        }
    } else if rn_pos.is_some() {
        return "\r\n";
    }

    "\n"
}

/// Parses a document into its block tree.
///
/// # Examples
///
/// ```rust
/// use deflist::{NodeKindTag, parse};
///
/// let doc = parse("Term\n: Description\n", None);
/// let list = doc.first_child(doc.root()).unwrap();
/// assert_eq!(doc.kind(list).tag(), NodeKindTag::DefinitionList);
/// ```
pub fn parse(input: &str, config: Option<Config>) -> Document {
    #[cfg(debug_assertions)]
    {
        init_logger();
    }

    let normalized_input = input.replace("\r\n", "\n");
    let config = config.unwrap_or_default();
    Markdown::new(&config).parse(&normalized_input)
}

/// Renders a parsed document to HTML.
///
/// With [`LineEnding::Auto`] the output uses `\n`, as the input is not known here.
pub fn render(doc: &Document, config: Option<Config>) -> Result<String, RenderError> {
    let config = config.unwrap_or_default();
    Markdown::new(&config).render(doc)
}

/// Parses and renders a document to HTML.
///
/// # Arguments
///
/// * `input` - The Markdown source
/// * `config` - Optional configuration (defaults to default config)
pub fn to_html(input: &str, config: Option<Config>) -> Result<String, RenderError> {
    #[cfg(debug_assertions)]
    {
        init_logger();
    }

    let config = config.unwrap_or_default();
    log::debug!(
        "Rendering with line_ending={:?}, definition_lists={}",
        config.line_ending,
        config.extensions.definition_lists
    );
    Markdown::new(&config).convert(input)
}
