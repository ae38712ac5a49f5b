use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "deflist")]
#[command(author, version)]
#[command(about = "Render Markdown with definition lists to HTML")]
#[command(
    long_about = "deflist parses Markdown documents containing definition lists (a term line \
    followed by one or more `:`-prefixed description lines) and renders them to HTML. Besides \
    definition lists it understands paragraphs, ATX headings, thematic breaks and indented code."
)]
#[command(after_help = "\
EXAMPLES:

    # Render a file to stdout
    deflist render glossary.md

    # Render from stdin
    cat glossary.md | deflist render

    # Write the HTML to a file
    deflist render glossary.md --output glossary.html

    # Inspect the block tree
    deflist parse glossary.md

CONFIGURATION:

deflist looks for configuration files in this order:
  1. Explicit --config path
  2. deflist.toml or .deflist.toml in current/parent directories
  3. ~/.config/deflist/config.toml (XDG)
  4. Built-in defaults

Example .deflist.toml:

    line_ending = \"lf\"

    [extensions]
    definition_lists = true")]
#[command(arg_required_else_help = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to config file
    #[arg(long, global = true)]
    #[arg(help = "Path to configuration file")]
    #[arg(
        long_help = "Path to a custom configuration file. If not specified, deflist will \
        search for .deflist.toml or deflist.toml in the input's directory and its parents, \
        then fall back to ~/.config/deflist/config.toml."
    )]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Render a document to HTML
    #[command(
        long_about = "Render a Markdown document to HTML. Definition lists become <dl> elements; \
        a description directly under its term is rendered tight (<dd>text</dd>), one separated \
        by a blank line keeps its paragraphs."
    )]
    #[command(after_help = "\
EXAMPLES:

    # Render to stdout
    deflist render glossary.md

    # Render from stdin
    printf 'Term\\n: Description\\n' | deflist render

    # Render to a file
    deflist render glossary.md --output glossary.html")]
    Render {
        /// Input file (stdin if not provided)
        #[arg(help = "Input file path")]
        file: Option<PathBuf>,

        /// Write the HTML to this file instead of stdout
        #[arg(long, short)]
        output: Option<PathBuf>,
    },
    /// Parse and display the block tree for debugging
    #[command(
        long_about = "Parse a document and print its block tree, one node per line, with the \
        text lines each block holds. Definition lists show their continuation offset and \
        descriptions show whether they are tight or loose."
    )]
    #[command(after_help = "\
EXAMPLES:

    # Parse a file and show the tree
    deflist parse glossary.md

    # Parse from stdin
    printf 'Term\\n: Description\\n' | deflist parse")]
    Parse {
        /// Input file (stdin if not provided)
        #[arg(help = "Input file path")]
        #[arg(
            long_help = "Path to the input file to parse. If not provided, reads from stdin. \
            The parser respects extension flags from the configuration file."
        )]
        file: Option<PathBuf>,
    },
}
