//! Definition list behavior through the public API.

use deflist::{ConfigBuilder, Markdown, NodeKind, NodeKindTag, parse, render, to_html};

fn html(input: &str) -> String {
    to_html(input, None).unwrap()
}

#[test]
fn term_and_tight_description() {
    similar_asserts::assert_eq!(
        html("Term\n: text"),
        "<dl>\n<dt>Term</dt>\n<dd>text</dd>\n</dl>\n"
    );
}

#[test]
fn one_term_per_paragraph_line() {
    similar_asserts::assert_eq!(
        html("Apple\nPomme\nMalus\n: A fruit.\n"),
        "<dl>\n<dt>Apple</dt>\n<dt>Pomme</dt>\n<dt>Malus</dt>\n<dd>A fruit.</dd>\n</dl>\n"
    );
}

#[test]
fn descriptions_separated_by_one_blank_line_share_a_list() {
    similar_asserts::assert_eq!(
        html("Term\n: one\n\n: two\n"),
        "<dl>\n<dt>Term</dt>\n<dd>one</dd>\n<dd>\n<p>two</p>\n</dd>\n</dl>\n"
    );
}

#[test]
fn two_blank_lines_end_the_list() {
    let out = html("Apple\n: fruit\n\n\nOrange\n: citrus\n");
    assert_eq!(out.matches("<dl>").count(), 2);
}

#[test]
fn bare_marker_after_two_blank_lines_opens_its_own_list() {
    let out = html("Apple\n: fruit\n\n\n: orphan\n");
    assert_eq!(out.matches("<dl>").count(), 2);
    assert!(!out.contains("<p>: orphan</p>"));
    assert!(out.contains("orphan</"));
}

#[test]
fn reused_list_continues_at_latest_marker_offset() {
    let out = html("T\n:   a\n: b\n\n  more\n");
    assert_eq!(out.matches("<dl>").count(), 1);
    assert!(!out.contains("<p>more</p>"));
    assert!(out.ends_with("more</dd>\n</dl>\n"));
}

#[test]
fn unrelated_block_between_groups_ends_the_list() {
    let out = html("Apple\n: fruit\n\n***\n\nOrange\n: citrus\n");
    similar_asserts::assert_eq!(
        out,
        "<dl>\n<dt>Apple</dt>\n<dd>fruit</dd>\n</dl>\n<hr />\n<dl>\n<dt>Orange</dt>\n<dd>citrus</dd>\n</dl>\n"
    );
}

#[test]
fn loose_description_keeps_paragraphs() {
    similar_asserts::assert_eq!(
        html("Term\n\n: text\n"),
        "<dl>\n<dt>Term</dt>\n<dd>\n<p>text</p>\n</dd>\n</dl>\n"
    );
}

#[test]
fn content_at_offset_continues_with_offset_stripped() {
    let doc = parse("Term\n:   first\n\n      indented more\n", None);
    let list = doc.first_child(doc.root()).unwrap();
    let description = doc.last_child(list).unwrap();
    let last = doc.last_child(description).unwrap();
    assert_eq!(doc.kind(last), &NodeKind::TextBlock);
    assert_eq!(doc.lines(last), ["indented more"]);
}

#[test]
fn content_at_offset_plus_four_is_code() {
    let doc = parse("Term\n: first\n\n      code\n", None);
    let list = doc.first_child(doc.root()).unwrap();
    let description = doc.last_child(list).unwrap();
    let last = doc.last_child(description).unwrap();
    assert_eq!(doc.kind(last), &NodeKind::CodeBlock);
    assert_eq!(doc.lines(last), ["code"]);
}

#[test]
fn content_below_offset_ends_the_list() {
    similar_asserts::assert_eq!(
        html("Term\n:   text\n\n  not enough\n"),
        "<dl>\n<dt>Term</dt>\n<dd>text</dd>\n</dl>\n<p>not enough</p>\n"
    );
}

#[test]
fn lazy_line_continues_description_paragraph() {
    similar_asserts::assert_eq!(
        html("Term\n:   text\nlazy\n"),
        "<dl>\n<dt>Term</dt>\n<dd>text\nlazy</dd>\n</dl>\n"
    );
}

#[test]
fn marker_without_space_is_text() {
    similar_asserts::assert_eq!(html("Term\n:text\n"), "<p>Term\n:text</p>\n");
}

#[test]
fn marker_without_term_is_text() {
    similar_asserts::assert_eq!(html(": text\n"), "<p>: text</p>\n");
}

#[test]
fn rendering_twice_is_identical() {
    let doc = parse("Apple\n: fruit\n\n: company\n\nOrange\n\n: citrus\n", None);
    let first = render(&doc, None).unwrap();
    let second = render(&doc, None).unwrap();
    similar_asserts::assert_eq!(first, second);
}

#[test]
fn tree_shape_after_reuse() {
    let doc = parse("Apple\n: fruit\n\nOrange\n: citrus\n", None);
    let root = doc.root();
    let top: Vec<_> = doc.children(root).map(|c| doc.kind(c).tag()).collect();
    assert_eq!(top, vec![NodeKindTag::DefinitionList]);

    let list = doc.first_child(root).unwrap();
    let state = doc.definition_list(list).unwrap();
    assert_eq!(state.pending_paragraph, None);
    let items: Vec<_> = doc.children(list).map(|c| doc.kind(c).tag()).collect();
    assert_eq!(
        items,
        vec![
            NodeKindTag::DefinitionTerm,
            NodeKindTag::DefinitionDescription,
            NodeKindTag::DefinitionTerm,
            NodeKindTag::DefinitionDescription,
        ]
    );
}

#[test]
fn markdown_can_be_reused_for_many_documents() {
    let config = ConfigBuilder::default().build();
    let markdown = Markdown::new(&config);
    for _ in 0..3 {
        assert_eq!(
            markdown.convert("a\n: b\n").unwrap(),
            "<dl>\n<dt>a</dt>\n<dd>b</dd>\n</dl>\n"
        );
    }
}
