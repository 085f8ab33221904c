//! Markdown previewer
//!
//! Renders CommonMark (plus strikethrough, tables and task lists) into a
//! small block model that the UI layer paints. Fenced code blocks are
//! highlighted by their info-string language. Malformed Markdown never
//! fails; the parser degrades to literal text.
//!
//! Unlike the other tools the preview is recomputed on every input change.

use pulldown_cmark::{CodeBlockKind, Event, HeadingLevel, Options, Parser, Tag, TagEnd};

use super::{OutputRegion, Phase, ToolDescriptor, ToolKey, ToolSession, Transform};
use crate::highlight::{self, HighlightedCode};

/// Document shown when the previewer opens
pub const SAMPLE_MARKDOWN: &str = "# Markdown Previewer\n\n\
- Live preview\n\
- **Bold**, *italic*, [link](https://example.com)\n\
- Code block:\n\n\
```js\n\
console.log('Hello, world!');\n\
```\n";

/// Inline formatting flags
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InlineStyle {
    pub strong: bool,
    pub emphasis: bool,
    pub strikethrough: bool,
    pub code: bool,
    /// Destination URL when the text is part of a link or image
    pub link: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InlineSpan {
    pub text: String,
    pub style: InlineStyle,
}

/// Cells of one table row; each cell is a run of inline spans
pub type TableRow = Vec<Vec<InlineSpan>>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    Heading {
        level: u8,
        spans: Vec<InlineSpan>,
    },
    Paragraph {
        spans: Vec<InlineSpan>,
        quote_depth: usize,
    },
    ListItem {
        /// Nesting depth, 0 for top-level items
        depth: usize,
        marker: String,
        /// Task list state, `None` for ordinary items
        checked: Option<bool>,
        spans: Vec<InlineSpan>,
        quote_depth: usize,
    },
    CodeBlock {
        language: Option<String>,
        code: HighlightedCode,
    },
    Rule,
    Table {
        header: TableRow,
        rows: Vec<TableRow>,
    },
}

/// Rendered Markdown
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MarkdownDocument {
    pub blocks: Vec<Block>,
}

impl MarkdownDocument {
    /// Text content without formatting, one block per line
    pub fn plain_text(&self) -> String {
        fn join(spans: &[InlineSpan]) -> String {
            spans.iter().map(|s| s.text.as_str()).collect()
        }

        self.blocks
            .iter()
            .map(|block| match block {
                Block::Heading { spans, .. } | Block::Paragraph { spans, .. } => join(spans),
                Block::ListItem { marker, spans, .. } => format!("{} {}", marker, join(spans)),
                Block::CodeBlock { code, .. } => code
                    .lines
                    .iter()
                    .map(|line| line.iter().map(|s| s.text.as_str()).collect::<String>())
                    .collect::<Vec<_>>()
                    .join("\n"),
                Block::Rule => "---".to_string(),
                Block::Table { header, rows } => std::iter::once(header)
                    .chain(rows.iter())
                    .map(|row| row.iter().map(|c| join(c)).collect::<Vec<_>>().join(" | "))
                    .collect::<Vec<_>>()
                    .join("\n"),
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[derive(Default)]
struct TableState {
    header: TableRow,
    rows: Vec<TableRow>,
    row: TableRow,
}

/// Event-to-block folding state
#[derive(Default)]
struct DocumentBuilder {
    blocks: Vec<Block>,
    spans: Vec<InlineSpan>,
    strong: usize,
    emphasis: usize,
    strikethrough: usize,
    links: Vec<String>,
    lists: Vec<Option<u64>>,
    pending_item: Option<String>,
    checked: Option<bool>,
    quote_depth: usize,
    heading: Option<u8>,
    code: Option<(Option<String>, String)>,
    table: Option<TableState>,
}

fn heading_level(level: HeadingLevel) -> u8 {
    match level {
        HeadingLevel::H1 => 1,
        HeadingLevel::H2 => 2,
        HeadingLevel::H3 => 3,
        HeadingLevel::H4 => 4,
        HeadingLevel::H5 => 5,
        HeadingLevel::H6 => 6,
    }
}

impl DocumentBuilder {
    fn style(&self, code: bool) -> InlineStyle {
        InlineStyle {
            strong: self.strong > 0,
            emphasis: self.emphasis > 0,
            strikethrough: self.strikethrough > 0,
            code,
            link: self.links.last().cloned(),
        }
    }

    fn push_text(&mut self, text: &str, code: bool) {
        if let Some((_, source)) = self.code.as_mut() {
            source.push_str(text);
            return;
        }
        let style = self.style(code);
        self.spans.push(InlineSpan {
            text: text.to_string(),
            style,
        });
    }

    /// Close the current run of inline text as a paragraph or list item
    fn flush_text(&mut self) {
        let spans = std::mem::take(&mut self.spans);
        if let Some(marker) = self.pending_item.take() {
            self.blocks.push(Block::ListItem {
                depth: self.lists.len().saturating_sub(1),
                marker,
                checked: self.checked.take(),
                spans,
                quote_depth: self.quote_depth,
            });
        } else if !spans.is_empty() {
            self.blocks.push(Block::Paragraph {
                spans,
                quote_depth: self.quote_depth,
            });
        }
    }

    fn next_marker(&mut self) -> String {
        match self.lists.last_mut() {
            Some(Some(number)) => {
                let marker = format!("{}.", number);
                *number += 1;
                marker
            }
            _ => "•".to_string(),
        }
    }

    fn start(&mut self, tag: Tag<'_>) {
        match tag {
            Tag::Heading { level, .. } => {
                self.flush_text();
                self.heading = Some(heading_level(level));
            }
            Tag::BlockQuote(_) => {
                self.flush_text();
                self.quote_depth += 1;
            }
            Tag::CodeBlock(kind) => {
                self.flush_text();
                let language = match kind {
                    CodeBlockKind::Fenced(info) => highlight::language_token(&info),
                    CodeBlockKind::Indented => None,
                };
                self.code = Some((language, String::new()));
            }
            Tag::List(start) => {
                self.flush_text();
                self.lists.push(start);
            }
            Tag::Item => {
                self.flush_text();
                let marker = self.next_marker();
                self.pending_item = Some(marker);
            }
            Tag::Table(_) => {
                self.flush_text();
                self.table = Some(TableState::default());
            }
            Tag::HtmlBlock => self.flush_text(),
            Tag::Emphasis => self.emphasis += 1,
            Tag::Strong => self.strong += 1,
            Tag::Strikethrough => self.strikethrough += 1,
            Tag::Link { dest_url, .. } | Tag::Image { dest_url, .. } => {
                self.links.push(dest_url.to_string());
            }
            _ => {}
        }
    }

    fn end(&mut self, tag: TagEnd) {
        match tag {
            TagEnd::Paragraph | TagEnd::Item | TagEnd::HtmlBlock => self.flush_text(),
            TagEnd::Heading(_) => {
                let spans = std::mem::take(&mut self.spans);
                let level = self.heading.take().unwrap_or(1);
                self.blocks.push(Block::Heading { level, spans });
            }
            TagEnd::BlockQuote(_) => {
                self.flush_text();
                self.quote_depth = self.quote_depth.saturating_sub(1);
            }
            TagEnd::CodeBlock => {
                if let Some((language, source)) = self.code.take() {
                    let code = highlight::highlight(&source, language.as_deref());
                    self.blocks.push(Block::CodeBlock { language, code });
                }
            }
            TagEnd::List(_) => {
                self.flush_text();
                self.lists.pop();
            }
            TagEnd::TableCell => {
                let cell = std::mem::take(&mut self.spans);
                if let Some(table) = self.table.as_mut() {
                    table.row.push(cell);
                }
            }
            TagEnd::TableHead => {
                if let Some(table) = self.table.as_mut() {
                    table.header = std::mem::take(&mut table.row);
                }
            }
            TagEnd::TableRow => {
                if let Some(table) = self.table.as_mut() {
                    let row = std::mem::take(&mut table.row);
                    table.rows.push(row);
                }
            }
            TagEnd::Table => {
                if let Some(table) = self.table.take() {
                    self.blocks.push(Block::Table {
                        header: table.header,
                        rows: table.rows,
                    });
                }
            }
            TagEnd::Emphasis => self.emphasis = self.emphasis.saturating_sub(1),
            TagEnd::Strong => self.strong = self.strong.saturating_sub(1),
            TagEnd::Strikethrough => self.strikethrough = self.strikethrough.saturating_sub(1),
            TagEnd::Link | TagEnd::Image => {
                self.links.pop();
            }
            _ => {}
        }
    }

    fn process(&mut self, event: Event<'_>) {
        match event {
            Event::Start(tag) => self.start(tag),
            Event::End(tag) => self.end(tag),
            Event::Text(text) => self.push_text(&text, false),
            Event::Code(code) => self.push_text(&code, true),
            Event::Html(html) | Event::InlineHtml(html) => self.push_text(&html, false),
            Event::SoftBreak => self.push_text(" ", false),
            Event::HardBreak => self.push_text("\n", false),
            Event::Rule => {
                self.flush_text();
                self.blocks.push(Block::Rule);
            }
            Event::TaskListMarker(checked) => self.checked = Some(checked),
            _ => {}
        }
    }

    fn finish(mut self) -> MarkdownDocument {
        self.flush_text();
        MarkdownDocument {
            blocks: self.blocks,
        }
    }
}

/// Render Markdown source into the block model
pub fn render(markdown: &str) -> MarkdownDocument {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_TASKLISTS);

    let mut builder = DocumentBuilder::default();
    for event in Parser::new_ext(markdown, options) {
        builder.process(event);
    }
    builder.finish()
}

#[derive(Debug, Default)]
pub struct MarkdownPreviewer {
    session: ToolSession<MarkdownDocument>,
}

impl MarkdownPreviewer {
    /// Empty previewer
    pub fn new() -> Self {
        Self::default()
    }

    /// Previewer preloaded with [`SAMPLE_MARKDOWN`]
    pub fn with_sample() -> Self {
        let mut previewer = Self::new();
        previewer.set_input(SAMPLE_MARKDOWN.to_string());
        previewer
    }

    pub fn session(&self) -> &ToolSession<MarkdownDocument> {
        &self.session
    }

    /// Mutable source buffer. Call [`Transform::run_transform`] after edits.
    pub fn input_mut(&mut self) -> &mut String {
        self.session.input_mut()
    }

    pub fn document(&self) -> Option<&MarkdownDocument> {
        self.session.output()
    }
}

impl Transform for MarkdownPreviewer {
    fn descriptor(&self) -> &'static ToolDescriptor {
        ToolKey::Markdown.descriptor()
    }

    fn input(&self) -> &str {
        self.session.input()
    }

    fn set_input(&mut self, text: String) {
        self.session.set_input(text);
        self.run_transform();
    }

    fn run_transform(&mut self) {
        let document = render(self.session.input());
        self.session.succeed(document);
    }

    fn phase(&self) -> Phase {
        self.session.phase()
    }

    fn error(&self) -> Option<&str> {
        self.session.error()
    }

    fn copy_text(&self, region: OutputRegion) -> Option<String> {
        match region {
            OutputRegion::Main => Some(self.session.input().to_string()),
            _ => None,
        }
    }

    fn clear_all(&mut self) {
        self.session.reset();
    }
}
