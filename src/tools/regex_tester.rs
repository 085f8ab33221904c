//! Regex tester
//!
//! Compiles a pattern with JavaScript-style flags and scans a test string
//! for matches. Scanning mirrors `RegExp.prototype.exec` in a loop:
//!
//! - without `g` only the first match is reported
//! - with `y` each match must start exactly at the scan position
//! - a zero-length match advances the scan position by one character
//! - at most [`MAX_MATCHES`] matches are collected
//!
//! Flag mapping onto the `regex` crate: `i` case-insensitive, `m` multi-line
//! anchors, `s` dot matches newline. `u` is accepted; the engine is always
//! Unicode-aware.

use regex::{Regex, RegexBuilder};

use super::{OutputRegion, Phase, ToolDescriptor, ToolKey, ToolSession, Transform};
use crate::error::ToolError;

/// Hard cap on collected matches
pub const MAX_MATCHES: usize = 1000;

/// Flag characters accepted in the flags field
pub const ALLOWED_FLAGS: &str = "gimsuy";

/// Flags used when the tool is mounted or cleared
pub const DEFAULT_FLAGS: &str = "g";

/// Parsed flag set
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RegexFlags {
    pub global: bool,
    pub ignore_case: bool,
    pub multiline: bool,
    pub dot_all: bool,
    pub unicode: bool,
    pub sticky: bool,
}

impl RegexFlags {
    /// Parse a flag string. Unknown or repeated flags are rejected.
    pub fn parse(flags: &str) -> Result<Self, ToolError> {
        let mut parsed = RegexFlags::default();
        for c in flags.chars() {
            let slot = match c {
                'g' => &mut parsed.global,
                'i' => &mut parsed.ignore_case,
                'm' => &mut parsed.multiline,
                's' => &mut parsed.dot_all,
                'u' => &mut parsed.unicode,
                'y' => &mut parsed.sticky,
                _ => return Err(ToolError::InvalidRegexFlags(flags.to_string())),
            };
            if *slot {
                return Err(ToolError::InvalidRegexFlags(flags.to_string()));
            }
            *slot = true;
        }
        Ok(parsed)
    }

    /// Drop characters that are not flags, keeping at most six
    pub fn sanitize(raw: &str) -> String {
        raw.chars()
            .filter(|c| ALLOWED_FLAGS.contains(*c))
            .take(ALLOWED_FLAGS.len())
            .collect()
    }
}

/// One match found in the test string
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchRecord {
    /// Character offset of the match
    pub index: usize,
    /// Byte range of the match
    pub start: usize,
    pub end: usize,
    /// Full matched text
    pub text: String,
    /// Named capture groups, in pattern order. `None` when a group did not
    /// participate in the match.
    pub groups: Vec<(String, Option<String>)>,
}

/// All matches from one scan
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanResult {
    pub matches: Vec<MatchRecord>,
    /// Set when scanning stopped at [`MAX_MATCHES`] with matches left
    pub truncated: bool,
}

impl ScanResult {
    pub fn len(&self) -> usize {
        self.matches.len()
    }

    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }

    /// Match texts, one per line
    pub fn joined(&self) -> String {
        self.matches
            .iter()
            .map(|m| m.text.as_str())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// A slice of the test string, marked if it is part of a match
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment<'a> {
    pub text: &'a str,
    pub is_match: bool,
}

/// Compile `pattern` with the given flags
pub fn compile(pattern: &str, flags: RegexFlags) -> Result<Regex, ToolError> {
    RegexBuilder::new(pattern)
        .case_insensitive(flags.ignore_case)
        .multi_line(flags.multiline)
        .dot_matches_new_line(flags.dot_all)
        .build()
        .map_err(|e| ToolError::InvalidRegex(e.to_string()))
}

fn advance_one_char(text: &str, pos: usize) -> usize {
    text[pos..]
        .chars()
        .next()
        .map(|c| pos + c.len_utf8())
        .unwrap_or(text.len() + 1)
}

/// Scan `text` with a compiled regex
pub fn scan(re: &Regex, flags: RegexFlags, text: &str) -> ScanResult {
    let names: Vec<Option<&str>> = re.capture_names().collect();
    let mut result = ScanResult::default();
    let mut pos = 0;

    while pos <= text.len() {
        if result.matches.len() >= MAX_MATCHES {
            result.truncated = re
                .find_at(text, pos)
                .is_some_and(|m| !flags.sticky || m.start() == pos);
            break;
        }

        let Some(caps) = re.captures_at(text, pos) else {
            break;
        };
        let Some(whole) = caps.get(0) else {
            break;
        };
        if flags.sticky && whole.start() != pos {
            break;
        }

        let groups = names
            .iter()
            .enumerate()
            .filter_map(|(i, name)| {
                name.map(|n| (n.to_string(), caps.get(i).map(|m| m.as_str().to_string())))
            })
            .collect();

        result.matches.push(MatchRecord {
            index: text[..whole.start()].chars().count(),
            start: whole.start(),
            end: whole.end(),
            text: whole.as_str().to_string(),
            groups,
        });

        if !flags.global {
            break;
        }

        pos = if whole.is_empty() {
            advance_one_char(text, whole.end())
        } else {
            whole.end()
        };
    }

    result
}

/// Parse flags, compile and scan in one step
pub fn find_all(pattern: &str, flags: &str, text: &str) -> Result<ScanResult, ToolError> {
    let flags = RegexFlags::parse(flags)?;
    let re = compile(pattern, flags)?;
    Ok(scan(&re, flags, text))
}

/// Split `text` into matched and unmatched slices.
///
/// Records that no longer fit `text` (the input was edited after the scan)
/// are skipped.
pub fn highlight_segments<'a>(text: &'a str, matches: &[MatchRecord]) -> Vec<Segment<'a>> {
    let mut segments = Vec::new();
    let mut last = 0;

    for m in matches {
        if m.start < last {
            continue;
        }
        let (Some(before), Some(matched)) = (text.get(last..m.start), text.get(m.start..m.end))
        else {
            continue;
        };
        if !before.is_empty() {
            segments.push(Segment {
                text: before,
                is_match: false,
            });
        }
        if !matched.is_empty() {
            segments.push(Segment {
                text: matched,
                is_match: true,
            });
        }
        last = m.end;
    }

    if let Some(rest) = text.get(last..).filter(|r| !r.is_empty()) {
        segments.push(Segment {
            text: rest,
            is_match: false,
        });
    }
    segments
}

/// Regex tester state. The session input is the test string.
#[derive(Debug)]
pub struct RegexTester {
    pattern: String,
    flags: String,
    session: ToolSession<ScanResult>,
}

impl Default for RegexTester {
    fn default() -> Self {
        Self {
            pattern: String::new(),
            flags: DEFAULT_FLAGS.to_string(),
            session: ToolSession::new(),
        }
    }
}

impl RegexTester {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn session(&self) -> &ToolSession<ScanResult> {
        &self.session
    }

    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    pub fn pattern_mut(&mut self) -> &mut String {
        &mut self.pattern
    }

    pub fn set_pattern(&mut self, pattern: impl Into<String>) {
        self.pattern = pattern.into();
    }

    pub fn flags(&self) -> &str {
        &self.flags
    }

    /// Set the flag string, dropping unsupported characters
    pub fn set_flags(&mut self, flags: &str) {
        self.flags = RegexFlags::sanitize(flags);
    }

    pub fn input_mut(&mut self) -> &mut String {
        self.session.input_mut()
    }

    pub fn result(&self) -> Option<&ScanResult> {
        self.session.output()
    }

    /// Test string split for highlighting against the last scan
    pub fn segments(&self) -> Vec<Segment<'_>> {
        let matches = self
            .result()
            .map(|r| r.matches.as_slice())
            .unwrap_or_default();
        highlight_segments(self.session.input(), matches)
    }
}

impl Transform for RegexTester {
    fn descriptor(&self) -> &'static ToolDescriptor {
        ToolKey::Regex.descriptor()
    }

    fn input(&self) -> &str {
        self.session.input()
    }

    fn set_input(&mut self, text: String) {
        self.session.set_input(text);
    }

    fn run_transform(&mut self) {
        let outcome = find_all(&self.pattern, &self.flags, self.session.input());
        match &outcome {
            Ok(result) if result.truncated => {
                warn!("Regex scan stopped at {} matches", MAX_MATCHES)
            }
            Ok(result) => debug!("Regex scan found {} matches", result.len()),
            Err(e) => debug!("Regex compile failed: {}", e),
        }
        self.session.apply(outcome);
    }

    fn phase(&self) -> Phase {
        self.session.phase()
    }

    fn error(&self) -> Option<&str> {
        self.session.error()
    }

    fn copy_text(&self, region: OutputRegion) -> Option<String> {
        match region {
            OutputRegion::Main => self.result().filter(|r| !r.is_empty()).map(ScanResult::joined),
            _ => None,
        }
    }

    fn clear_all(&mut self) {
        self.pattern.clear();
        self.flags = DEFAULT_FLAGS.to_string();
        self.session.reset();
    }
}
