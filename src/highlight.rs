//! Syntax highlighting for fenced code blocks
//!
//! Thin wrapper around `syntect`. The syntax and theme sets are loaded once
//! per process on first use.

use once_cell::sync::Lazy;
use syntect::easy::HighlightLines;
use syntect::highlighting::{FontStyle, Style as SyntectStyle, Theme, ThemeSet};
use syntect::parsing::{SyntaxReference, SyntaxSet};
use syntect::util::LinesWithEndings;

static SYNTAX_SET: Lazy<SyntaxSet> = Lazy::new(SyntaxSet::load_defaults_newlines);
static THEME_SET: Lazy<ThemeSet> = Lazy::new(ThemeSet::load_defaults);

/// Theme used for code blocks; they are always drawn on a dark background
pub const CODE_THEME: &str = "base16-ocean.dark";

/// Common info-string aliases that syntect does not resolve by token
const ALIASES: [(&str, &str); 8] = [
    ("jsx", "js"),
    ("ts", "js"),
    ("tsx", "js"),
    ("typescript", "js"),
    ("shell", "sh"),
    ("zsh", "sh"),
    ("yml", "yaml"),
    ("py3", "py"),
];

/// An RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

/// One styled run of code
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeSpan {
    pub text: String,
    /// `None` for unhighlighted text
    pub color: Option<Rgb>,
    pub italic: bool,
}

impl CodeSpan {
    fn plain(text: &str) -> Self {
        Self {
            text: text.to_string(),
            color: None,
            italic: false,
        }
    }

    fn styled(style: &SyntectStyle, text: &str) -> Self {
        Self {
            text: text.to_string(),
            color: Some(Rgb(style.foreground.r, style.foreground.g, style.foreground.b)),
            italic: style.font_style.contains(FontStyle::ITALIC),
        }
    }
}

/// Highlighted code, one entry per source line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HighlightedCode {
    pub lines: Vec<Vec<CodeSpan>>,
    /// Name of the syntax used, `None` when the language was not recognized
    pub syntax: Option<String>,
}

/// Extract the language token from a fence info string (`js title=x` → `js`)
pub fn language_token(info: &str) -> Option<String> {
    let token = info.split_whitespace().next()?;
    let token = token.strip_prefix("language-").unwrap_or(token);
    let token = token.trim_matches(|c| c == '{' || c == '}' || c == '.');
    if token.is_empty() {
        None
    } else {
        Some(token.to_ascii_lowercase())
    }
}

/// Resolve a language token to a syntax definition
pub fn detect_syntax(language: &str) -> Option<&'static SyntaxReference> {
    let language = language.trim().to_ascii_lowercase();
    let token = ALIASES
        .iter()
        .find(|(alias, _)| *alias == language)
        .map(|(_, target)| *target)
        .unwrap_or(language.as_str());

    SYNTAX_SET.find_syntax_by_token(token)
}

fn theme() -> Option<&'static Theme> {
    THEME_SET.themes.get(CODE_THEME)
}

fn plain_lines(code: &str) -> Vec<Vec<CodeSpan>> {
    code.lines().map(|l| vec![CodeSpan::plain(l)]).collect()
}

/// Highlight `code` for `language`, falling back to plain text
pub fn highlight(code: &str, language: Option<&str>) -> HighlightedCode {
    let syntax = language.and_then(detect_syntax);
    let (Some(syntax), Some(theme)) = (syntax, theme()) else {
        return HighlightedCode {
            lines: plain_lines(code),
            syntax: None,
        };
    };

    let mut highlighter = HighlightLines::new(syntax, theme);
    let mut lines = Vec::new();

    for line in LinesWithEndings::from(code) {
        match highlighter.highlight_line(line, &SYNTAX_SET) {
            Ok(regions) => lines.push(
                regions
                    .into_iter()
                    .map(|(style, text)| CodeSpan::styled(&style, text.trim_end_matches('\n')))
                    .filter(|span| !span.text.is_empty())
                    .collect(),
            ),
            Err(e) => {
                debug!("Highlighting failed for {}: {}", syntax.name, e);
                lines.push(vec![CodeSpan::plain(line.trim_end_matches('\n'))]);
            }
        }
    }

    HighlightedCode {
        lines,
        syntax: Some(syntax.name.clone()),
    }
}
