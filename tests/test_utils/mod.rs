//! Test Utilities and Fixtures
//!
//! Shared helpers for the integration and property tests. Included with
//! `#[path]` from each test target, so not every target uses every helper.

#![allow(dead_code, unused_imports)]

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine as _;
use devtoolbox::config::ToolsConfig;
use devtoolbox::shell::Shell;
use devtoolbox::tools::ToolKey;

pub use devtoolbox::clipboard::MemoryClipboard;

/// Build an unsigned compact JWT from header and payload JSON
pub fn make_jwt(header: &str, payload: &str, signature: &str) -> String {
    format!(
        "{}.{}.{}",
        URL_SAFE_NO_PAD.encode(header),
        URL_SAFE_NO_PAD.encode(payload),
        signature
    )
}

/// A typical HS256 token
pub fn sample_jwt() -> String {
    make_jwt(
        r#"{"alg":"HS256","typ":"JWT"}"#,
        r#"{"sub":"1234567890","name":"John Doe","iat":1516239022}"#,
        "SflKxwRJSMeKKF2QT4fwpMeJf36POk6yJV_adQssw5c",
    )
}

/// Shell with `key` mounted
pub fn shell_with(key: ToolKey) -> Shell {
    let mut shell = Shell::new(ToolsConfig {
        default_tool: key,
        markdown_sample: false,
    });
    shell.select(key);
    shell
}

/// Smallest valid PNG: 1x1 transparent pixel
pub const TINY_PNG_BASE64: &str =
    "iVBORw0KGgoAAAANSUhEUgAAAAEAAAABCAYAAAAfFcSJAAAADUlEQVR42mNkYPhfDwAChwGA60e6kgAAAABJRU5ErkJggg==";
