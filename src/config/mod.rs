//! Configuration management for DevToolbox
//!
//! Configuration is read-only: an optional TOML or JSON file can tune the
//! window, theme and start-up tool. Nothing is ever written back, and every
//! field has a default so an empty file is valid.

pub mod loader;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};
use crate::tools::ToolKey;

/// Main configuration structure for DevToolbox
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// UI configuration
    pub ui: UiConfig,

    /// Window configuration
    pub window: WindowConfig,

    /// Tool defaults
    pub tools: ToolsConfig,
}

impl Config {
    /// Check that all values are usable
    pub fn validate(&self) -> Result<()> {
        let w = &self.window;
        let sizes = [
            ("ui.sidebar_width", self.ui.sidebar_width),
            ("window.width", w.width),
            ("window.height", w.height),
            ("window.min_width", w.min_width),
            ("window.min_height", w.min_height),
        ];
        // NaN slips past every comparison below
        if let Some((field, value)) = sizes.iter().find(|(_, value)| !value.is_finite()) {
            return Err(Error::ConfigValidationFailed {
                field: field.to_string(),
                reason: format!("{} is not a finite size", value),
            });
        }

        if !(8.0..=48.0).contains(&self.ui.font_size) {
            return Err(Error::ConfigValidationFailed {
                field: "ui.font_size".to_string(),
                reason: format!("{} is outside 8-48", self.ui.font_size),
            });
        }

        if self.ui.sidebar_width < 48.0 {
            return Err(Error::ConfigValidationFailed {
                field: "ui.sidebar_width".to_string(),
                reason: "Sidebar must be at least 48 points wide".to_string(),
            });
        }

        if w.min_width < 400.0 || w.min_height < 300.0 {
            return Err(Error::ConfigValidationFailed {
                field: "window.min_width".to_string(),
                reason: format!(
                    "Minimum size {}x{} is below 400x300",
                    w.min_width, w.min_height
                ),
            });
        }

        if w.width < w.min_width || w.height < w.min_height {
            return Err(Error::ConfigValidationFailed {
                field: "window.width".to_string(),
                reason: format!(
                    "Initial size {}x{} is smaller than minimum {}x{}",
                    w.width, w.height, w.min_width, w.min_height
                ),
            });
        }

        Ok(())
    }
}

/// UI-related configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Color theme
    pub theme: ThemeName,

    /// Base font size in points
    pub font_size: f32,

    /// Sidebar width in points
    pub sidebar_width: f32,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            theme: ThemeName::Dark,
            font_size: 14.0,
            sidebar_width: 80.0,
        }
    }
}

/// Native window configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub width: f32,
    pub height: f32,
    pub min_width: f32,
    pub min_height: f32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 1200.0,
            height: 800.0,
            min_width: 900.0,
            min_height: 600.0,
        }
    }
}

/// Defaults applied when tools are mounted
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ToolsConfig {
    /// Tool selected at start-up
    pub default_tool: ToolKey,

    /// Open the Markdown previewer with a sample document
    pub markdown_sample: bool,
}

impl Default for ToolsConfig {
    fn default() -> Self {
        Self {
            default_tool: ToolKey::Json,
            markdown_sample: true,
        }
    }
}

/// Built-in color themes
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeName {
    #[default]
    Dark,
    Light,
}

impl fmt::Display for ThemeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ThemeName::Dark => write!(f, "dark"),
            ThemeName::Light => write!(f, "light"),
        }
    }
}

impl FromStr for ThemeName {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "dark" => Ok(ThemeName::Dark),
            "light" => Ok(ThemeName::Light),
            other => Err(Error::UnknownTheme(other.to_string())),
        }
    }
}
