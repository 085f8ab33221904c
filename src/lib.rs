//! DevToolbox - small developer utilities in one window
//!
//! This library provides the tools, the shell that mounts them, and the egui
//! views the desktop binary draws them with.
//!
//! ## Features
//!
//! - **JSON Formatter:** pretty-print with preserved key order, templates
//! - **JWT Decoder:** header/payload decoding, time claims, no verification
//! - **Regex Tester:** JavaScript-style flags, match list and highlighting
//! - **UUID Generator:** v1 (time-based) and v4 (random)
//! - **Base64 Converter:** text and files, PNG/JPEG previews
//! - **Markdown Previewer:** CommonMark with tables, task lists and
//!   highlighted code blocks
//!
//! ## Module Organization
//!
//! ### Core Functionality
//!
//! - [`tools`] - the six tools, the [`Transform`] contract and the registry
//! - [`shell`] - tool selection and mounting
//! - [`shortcuts`] - the shared keyboard contract and scoped listeners
//! - [`config`] - read-only TOML/JSON configuration
//! - [`mod@error`] - Error types and Result aliases
//!
//! ### UI Components
//!
//! - [`ui`] - sidebar, tool views, Markdown painting, image previews
//!
//! ### Utilities
//!
//! - [`clipboard`] - clipboard sink trait with system and in-memory backends
//! - [`highlight`] - syntax highlighting for fenced code
//!
//! ## Quick Start
//!
//! ```
//! use devtoolbox::shell::Shell;
//! use devtoolbox::tools::{ToolKey, Transform};
//!
//! let mut shell = Shell::default();
//! shell.select(ToolKey::Json);
//!
//! if let Some(tool) = shell.active_mut() {
//!     tool.set_input(r#"{"a":1}"#.to_string());
//!     tool.run_transform();
//!     assert!(tool.error().is_none());
//! }
//! ```
//!
//! ## Architecture
//!
//! Everything runs on the egui UI thread. Transforms are synchronous and
//! tools share no state; switching tools drops the old one.

#[macro_use]
extern crate tracing;

pub mod clipboard;
pub mod config;
pub mod error;
pub mod highlight;
pub mod shell;
pub mod shortcuts;
pub mod tools;
pub mod ui;

// Re-exports for convenience
pub use clipboard::{ClipboardSink, MemoryClipboard, SystemClipboard};
pub use config::Config;
pub use error::{Error, Result, ToolError};
pub use shell::Shell;
pub use tools::{ActiveTool, OutputRegion, Phase, ToolKey, Transform};

/// Application version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name
pub const NAME: &str = "DevToolbox";
