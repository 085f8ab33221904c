//! Transform tools and the tool registry
//!
//! Every tool follows the same interaction contract, expressed by the
//! [`Transform`] trait: the user edits an input, triggers the transform, and
//! the tool lands in either a result or an error state. Tools never share
//! state; the shell mounts a fresh [`ActiveTool`] on every switch.
//!
//! ## Module Organization
//!
//! - `json_formatter` - pretty-print JSON, insert templates
//! - `jwt_decoder` - split and decode JWT header/payload (no verification)
//! - `regex_tester` - scan a test string with JS-style flags
//! - `uuid_generator` - v1 / v4 identifiers
//! - `base64_converter` - text/file to base64 and back, image previews
//! - `markdown_previewer` - CommonMark to a renderable block model
//!
//! ## State Machine
//!
//! ```text
//!            run_transform            run_transform
//!   Empty ─────────────────▶ Result ◀─────────────▶ Error
//!     ▲                        │                      │
//!     └──────── clear_all ─────┴──────────────────────┘
//! ```

pub mod base64_converter;
pub mod json_formatter;
pub mod jwt_decoder;
pub mod markdown_previewer;
pub mod regex_tester;
pub mod uuid_generator;

pub use base64_converter::{Base64Converter, Base64Mode, Base64Output, ImageFormat, ImagePreview};
pub use json_formatter::{JsonFormatter, JsonTemplate, TEMPLATES};
pub use jwt_decoder::{DecodedJwt, JwtDecoder, TimeClaim};
pub use markdown_previewer::{MarkdownDocument, MarkdownPreviewer};
pub use regex_tester::{MatchRecord, RegexFlags, RegexTester, ScanResult, MAX_MATCHES};
pub use uuid_generator::{GeneratedUuid, UuidGenerator, UuidVersion};

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::clipboard::ClipboardSink;
use crate::config::ToolsConfig;
use crate::error::{Error, ToolError};

/// Identifier of a registered tool
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToolKey {
    Json,
    Jwt,
    Regex,
    Uuid,
    Base64,
    Markdown,
}

impl ToolKey {
    /// Stable string id used in configuration and on the command line
    pub fn id(self) -> &'static str {
        match self {
            ToolKey::Json => "json",
            ToolKey::Jwt => "jwt",
            ToolKey::Regex => "regex",
            ToolKey::Uuid => "uuid",
            ToolKey::Base64 => "base64",
            ToolKey::Markdown => "markdown",
        }
    }

    /// Static metadata for this tool
    pub fn descriptor(self) -> &'static ToolDescriptor {
        // Every key has exactly one registry row; the fallback is unreachable.
        REGISTRY
            .iter()
            .find(|d| d.key == self)
            .unwrap_or(&REGISTRY[0])
    }
}

impl Default for ToolKey {
    fn default() -> Self {
        ToolKey::Json
    }
}

impl fmt::Display for ToolKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for ToolKey {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        REGISTRY
            .iter()
            .map(|d| d.key)
            .find(|k| k.id().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| Error::UnknownTool(s.to_string()))
    }
}

/// Static metadata identifying a tool in the sidebar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToolDescriptor {
    pub key: ToolKey,
    pub label: &'static str,
    pub tooltip: &'static str,
}

/// The tool registry, in sidebar order
pub static REGISTRY: [ToolDescriptor; 6] = [
    ToolDescriptor {
        key: ToolKey::Json,
        label: "JSON",
        tooltip: "JSON Formatter",
    },
    ToolDescriptor {
        key: ToolKey::Jwt,
        label: "JWT",
        tooltip: "JWT Decoder",
    },
    ToolDescriptor {
        key: ToolKey::Regex,
        label: "Regex",
        tooltip: "Regex Tester",
    },
    ToolDescriptor {
        key: ToolKey::Uuid,
        label: "UUID",
        tooltip: "UUID Generator",
    },
    ToolDescriptor {
        key: ToolKey::Base64,
        label: "B64",
        tooltip: "Base64 Encoder/Decoder",
    },
    ToolDescriptor {
        key: ToolKey::Markdown,
        label: "MD",
        tooltip: "Markdown Previewer",
    },
];

/// Ordered list of registered tools
pub fn descriptors() -> &'static [ToolDescriptor] {
    &REGISTRY
}

/// Observable state of a tool
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Empty,
    Result,
    Error,
}

/// Outcome of the last transform.
///
/// A result and an error can never coexist: each transition replaces the
/// whole state.
#[derive(Debug, Clone, PartialEq)]
pub enum ToolState<T> {
    Empty,
    Result(T),
    Error(String),
}

/// Transient input/output state owned by one mounted tool
#[derive(Debug, Clone, PartialEq)]
pub struct ToolSession<T> {
    input: String,
    state: ToolState<T>,
}

impl<T> Default for ToolSession<T> {
    fn default() -> Self {
        Self {
            input: String::new(),
            state: ToolState::Empty,
        }
    }
}

impl<T> ToolSession<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_input(input: impl Into<String>) -> Self {
        Self {
            input: input.into(),
            state: ToolState::Empty,
        }
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn input_mut(&mut self) -> &mut String {
        &mut self.input
    }

    pub fn set_input(&mut self, input: impl Into<String>) {
        self.input = input.into();
    }

    pub fn state(&self) -> &ToolState<T> {
        &self.state
    }

    pub fn output(&self) -> Option<&T> {
        match &self.state {
            ToolState::Result(output) => Some(output),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match &self.state {
            ToolState::Error(message) => Some(message),
            _ => None,
        }
    }

    pub fn phase(&self) -> Phase {
        match self.state {
            ToolState::Empty => Phase::Empty,
            ToolState::Result(_) => Phase::Result,
            ToolState::Error(_) => Phase::Error,
        }
    }

    /// Store a successful output, dropping any previous error
    pub fn succeed(&mut self, output: T) {
        self.state = ToolState::Result(output);
    }

    /// Store an error message, dropping any previous output
    pub fn fail(&mut self, message: impl Into<String>) {
        self.state = ToolState::Error(message.into());
    }

    /// Apply the outcome of a transform
    pub fn apply(&mut self, outcome: std::result::Result<T, ToolError>) {
        match outcome {
            Ok(output) => self.succeed(output),
            Err(e) => self.fail(e.to_string()),
        }
    }

    /// Forget the last output or error but keep the input
    pub fn clear_state(&mut self) {
        self.state = ToolState::Empty;
    }

    /// Back to the initial empty session
    pub fn reset(&mut self) {
        self.input.clear();
        self.state = ToolState::Empty;
    }
}

/// A copyable output area of a tool
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OutputRegion {
    /// The tool's primary output
    Main,
    /// Decoded JWT header
    Header,
    /// Decoded JWT payload
    Payload,
}

/// The interaction contract shared by every tool
pub trait Transform {
    /// Registry metadata for this tool
    fn descriptor(&self) -> &'static ToolDescriptor;

    /// Current raw input
    fn input(&self) -> &str;

    /// Replace the raw input. Does not recompute unless the tool auto-renders.
    fn set_input(&mut self, text: String);

    /// Run the tool's algorithm on the current input and auxiliary settings
    fn run_transform(&mut self);

    /// Observable state
    fn phase(&self) -> Phase;

    /// Error message of the last transform, if it failed
    fn error(&self) -> Option<&str>;

    /// Text that a copy of `region` would place on the clipboard
    fn copy_text(&self, region: OutputRegion) -> Option<String>;

    /// Reset input, output, error and auxiliary settings
    fn clear_all(&mut self);

    /// Copy `region` to the clipboard.
    ///
    /// Does nothing when the region is empty. Clipboard failures are logged
    /// and swallowed. Returns whether text was written.
    fn copy_output(&self, region: OutputRegion, clipboard: &mut dyn ClipboardSink) -> bool {
        let Some(text) = self.copy_text(region).filter(|t| !t.is_empty()) else {
            return false;
        };

        match clipboard.set_text(&text) {
            Ok(()) => {
                debug!(
                    "Copied {} bytes from {} ({:?})",
                    text.len(),
                    self.descriptor().key,
                    region
                );
                true
            }
            Err(e) => {
                warn!("Copy from {} failed: {}", self.descriptor().key, e);
                false
            }
        }
    }
}

/// The mounted tool, one variant per registry entry
#[derive(Debug)]
pub enum ActiveTool {
    Json(JsonFormatter),
    Jwt(JwtDecoder),
    Regex(RegexTester),
    Uuid(UuidGenerator),
    Base64(Base64Converter),
    Markdown(MarkdownPreviewer),
}

macro_rules! dispatch {
    ($self:expr, $tool:ident => $body:expr) => {
        match $self {
            ActiveTool::Json($tool) => $body,
            ActiveTool::Jwt($tool) => $body,
            ActiveTool::Regex($tool) => $body,
            ActiveTool::Uuid($tool) => $body,
            ActiveTool::Base64($tool) => $body,
            ActiveTool::Markdown($tool) => $body,
        }
    };
}

impl ActiveTool {
    /// Build a fresh tool for `key`
    pub fn mount(key: ToolKey, config: &ToolsConfig) -> Self {
        match key {
            ToolKey::Json => ActiveTool::Json(JsonFormatter::new()),
            ToolKey::Jwt => ActiveTool::Jwt(JwtDecoder::new()),
            ToolKey::Regex => ActiveTool::Regex(RegexTester::new()),
            ToolKey::Uuid => ActiveTool::Uuid(UuidGenerator::new()),
            ToolKey::Base64 => ActiveTool::Base64(Base64Converter::new()),
            ToolKey::Markdown => ActiveTool::Markdown(if config.markdown_sample {
                MarkdownPreviewer::with_sample()
            } else {
                MarkdownPreviewer::new()
            }),
        }
    }

    pub fn key(&self) -> ToolKey {
        self.descriptor().key
    }
}

impl Transform for ActiveTool {
    fn descriptor(&self) -> &'static ToolDescriptor {
        dispatch!(self, t => t.descriptor())
    }

    fn input(&self) -> &str {
        dispatch!(self, t => t.input())
    }

    fn set_input(&mut self, text: String) {
        dispatch!(self, t => t.set_input(text))
    }

    fn run_transform(&mut self) {
        dispatch!(self, t => t.run_transform())
    }

    fn phase(&self) -> Phase {
        dispatch!(self, t => t.phase())
    }

    fn error(&self) -> Option<&str> {
        dispatch!(self, t => t.error())
    }

    fn copy_text(&self, region: OutputRegion) -> Option<String> {
        dispatch!(self, t => t.copy_text(region))
    }

    fn clear_all(&mut self) {
        dispatch!(self, t => t.clear_all())
    }
}
