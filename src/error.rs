//! Error types and Result aliases for DevToolbox
//!
//! Two layers of errors exist:
//!
//! - [`ToolError`] describes a problem with the *input* of a transform tool.
//!   It is always recovered locally: the tool stores its `Display` text as
//!   the session's error message and the user fixes the input.
//! - [`Error`] covers application-level failures (configuration, I/O,
//!   clipboard, image decoding). Only startup code propagates these.

use std::path::PathBuf;

/// Result type alias for DevToolbox operations
pub type Result<T> = std::result::Result<T, Error>;

/// Input-format failures produced by the transform tools.
///
/// The `Display` output is exactly what the tool shows next to its input.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ToolError {
    // === JSON formatter ===
    #[error("Invalid JSON: {0}")]
    InvalidJson(String),

    // === JWT decoder ===
    #[error("JWT must have 3 parts (found {found})")]
    JwtPartCount { found: usize },

    #[error("Invalid base64 in JWT {segment}")]
    JwtBase64 { segment: JwtSegment },

    #[error("Invalid JSON in JWT {segment}: {reason}")]
    JwtJson { segment: JwtSegment, reason: String },

    // === Regex tester ===
    #[error("{0}")]
    InvalidRegex(String),

    #[error("Invalid regular expression flags '{0}'")]
    InvalidRegexFlags(String),

    // === Base64 converter ===
    #[error("Invalid Base64 string")]
    InvalidBase64,

    #[error("Conversion error: decoded bytes are not valid UTF-8")]
    NotUtf8,
}

/// The two decoded parts of a JWT, used to tell errors apart
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JwtSegment {
    Header,
    Payload,
}

impl std::fmt::Display for JwtSegment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            JwtSegment::Header => write!(f, "header"),
            JwtSegment::Payload => write!(f, "payload"),
        }
    }
}

/// Main error type for DevToolbox
#[derive(Debug, thiserror::Error)]
pub enum Error {
    // === Configuration errors ===
    /// Failed to load configuration file
    #[error("Failed to load config from '{}': {reason}", path.display())]
    ConfigLoadFailed { path: PathBuf, reason: String },

    /// Failed to parse configuration
    #[error("Failed to parse {format} config: {reason}")]
    ConfigParseFailed { format: String, reason: String },

    /// Configuration validation failed
    #[error("Configuration validation failed for '{field}': {reason}")]
    ConfigValidationFailed { field: String, reason: String },

    /// Unknown tool id in configuration or on the command line
    #[error("Unknown tool '{0}'")]
    UnknownTool(String),

    /// Unknown theme name
    #[error("Unknown theme '{0}'")]
    UnknownTheme(String),

    // === Host services ===
    /// Failed to read a file chosen by the user
    #[error("Failed to read '{}': {reason}", path.display())]
    FileReadFailed { path: PathBuf, reason: String },

    /// Clipboard unavailable or write rejected
    #[error("Clipboard error: {0}")]
    Clipboard(#[from] arboard::Error),

    /// Image bytes could not be decoded for preview
    #[error("Image decoding error: {0}")]
    Image(#[from] image::ImageError),

    /// Generic errors (for cases not yet categorized)
    #[error("Error: {0}")]
    Other(String),
}

impl From<String> for Error {
    fn from(err: String) -> Self {
        Error::Other(err)
    }
}

impl From<&str> for Error {
    fn from(err: &str) -> Self {
        Error::Other(err.to_string())
    }
}
