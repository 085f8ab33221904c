//! Unit tests for the Markdown previewer

use devtoolbox::tools::markdown_previewer::{render, Block, SAMPLE_MARKDOWN};
use devtoolbox::tools::{MarkdownPreviewer, OutputRegion, Phase, Transform};

#[test]
fn test_block_kinds() {
    let doc = render("# Title\n\nSome *text*.\n\n> quoted\n\n---\n\n## Sub\n");
    assert!(matches!(doc.blocks[0], Block::Heading { level: 1, .. }));
    assert!(matches!(doc.blocks[1], Block::Paragraph { quote_depth: 0, .. }));
    assert!(matches!(doc.blocks[2], Block::Paragraph { quote_depth: 1, .. }));
    assert!(matches!(doc.blocks[3], Block::Rule));
    assert!(matches!(doc.blocks[4], Block::Heading { level: 2, .. }));
    assert_eq!(doc.plain_text(), "Title\nSome text.\nquoted\n---\nSub");
}

#[test]
fn test_strikethrough() {
    let doc = render("~~gone~~ kept");
    let Block::Paragraph { spans, .. } = &doc.blocks[0] else {
        panic!("expected paragraph");
    };
    assert!(spans[0].style.strikethrough);
    assert_eq!(spans[0].text, "gone");
    assert!(!spans[1].style.strikethrough);
}

#[test]
fn test_table_cells() {
    let doc = render("| Name | Age |\n|------|-----|\n| Ann  | 30  |\n| Bob  | 41  |\n");
    let Block::Table { header, rows } = &doc.blocks[0] else {
        panic!("expected table");
    };
    let cell = |spans: &Vec<devtoolbox::tools::markdown_previewer::InlineSpan>| {
        spans.iter().map(|s| s.text.as_str()).collect::<String>()
    };
    assert_eq!(header.iter().map(cell).collect::<Vec<_>>(), ["Name", "Age"]);
    assert_eq!(rows.len(), 2);
    assert_eq!(cell(&rows[1][0]), "Bob");
}

#[test]
fn test_task_list_states() {
    let doc = render("- [x] shipped\n- [ ] pending\n- plain\n");
    let states: Vec<Option<bool>> = doc
        .blocks
        .iter()
        .filter_map(|b| match b {
            Block::ListItem { checked, .. } => Some(*checked),
            _ => None,
        })
        .collect();
    assert_eq!(states, [Some(true), Some(false), None]);
}

#[test]
fn test_fenced_code_is_highlighted() {
    let doc = render("```rust\nfn main() {}\n```\n");
    let Block::CodeBlock { language, code } = &doc.blocks[0] else {
        panic!("expected code block");
    };
    assert_eq!(language.as_deref(), Some("rust"));
    assert_eq!(code.syntax.as_deref(), Some("Rust"));
    assert!(code.lines[0].iter().any(|span| span.color.is_some()));
}

#[test]
fn test_unknown_language_falls_back_to_plain() {
    let doc = render("```nosuchlang\nline one\nline two\n```\n");
    let Block::CodeBlock { code, .. } = &doc.blocks[0] else {
        panic!("expected code block");
    };
    assert!(code.syntax.is_none());
    assert_eq!(code.lines.len(), 2);
}

#[test]
fn test_malformed_input_never_fails() {
    let mut tool = MarkdownPreviewer::new();
    tool.set_input("**unclosed [link( `tick\n|a|\n".to_string());
    assert_eq!(tool.phase(), Phase::Result);
    assert!(tool.error().is_none());
}

#[test]
fn test_html_comment_does_not_join_next_paragraph() {
    let doc = render("<!-- note -->\nText after\n");
    assert_eq!(doc.blocks.len(), 2);
    assert_eq!(doc.plain_text().lines().last(), Some("Text after"));
}

#[test]
fn test_set_input_renders_immediately() {
    let mut tool = MarkdownPreviewer::new();
    tool.set_input("# One".to_string());
    assert!(matches!(
        tool.document().map(|d| &d.blocks[0]),
        Some(Block::Heading { level: 1, .. })
    ));

    tool.input_mut().push_str("\n\ntwo");
    tool.run_transform();
    assert_eq!(tool.document().map(|d| d.blocks.len()), Some(2));
}

#[test]
fn test_sample_and_clear() {
    let mut tool = MarkdownPreviewer::with_sample();
    assert_eq!(tool.input(), SAMPLE_MARKDOWN);
    assert_eq!(tool.phase(), Phase::Result);
    assert_eq!(
        tool.copy_text(OutputRegion::Main).as_deref(),
        Some(SAMPLE_MARKDOWN)
    );

    tool.clear_all();
    assert_eq!(tool.input(), "");
    assert_eq!(tool.phase(), Phase::Empty);
    assert!(MarkdownPreviewer::new().document().is_none());
}
