//! Color utilities for UI rendering
//!
//! Palettes for the built-in themes, plus conversion of highlighter colors
//! to egui colors.

use crate::config::ThemeName;
use crate::highlight::Rgb;
use eframe::egui;

/// Extension trait to convert a model color to egui::Color32
pub trait ToEguiColor {
    /// Convert to egui::Color32
    fn to_egui(&self) -> egui::Color32;
}

impl ToEguiColor for Rgb {
    fn to_egui(&self) -> egui::Color32 {
        egui::Color32::from_rgb(self.0, self.1, self.2)
    }
}

/// Colors used by the shell and every tool view
#[derive(Debug, Clone)]
pub struct UiColors {
    pub dark_mode: bool,
    pub background: egui::Color32,
    pub foreground: egui::Color32,
    pub muted: egui::Color32,
    pub accent: egui::Color32,
    pub success: egui::Color32,
    pub error: egui::Color32,
    pub warning: egui::Color32,
    pub selection: egui::Color32,
    pub border: egui::Color32,

    /// Sidebar colors
    pub sidebar: SidebarColors,

    /// Output panels (formatted JSON, decoded parts, code blocks)
    pub output_background: egui::Color32,
    pub code_background: egui::Color32,
    pub code_foreground: egui::Color32,

    /// Regex match highlight
    pub match_background: egui::Color32,
    pub match_foreground: egui::Color32,
}

#[derive(Debug, Clone)]
pub struct SidebarColors {
    pub background: egui::Color32,
    pub text: egui::Color32,
    pub selected_background: egui::Color32,
    pub selected_text: egui::Color32,
    pub border: egui::Color32,
}

impl UiColors {
    pub fn from_theme(theme: ThemeName) -> Self {
        match theme {
            ThemeName::Dark => Self::dark(),
            ThemeName::Light => Self::light(),
        }
    }

    fn dark() -> Self {
        Self {
            dark_mode: true,
            background: egui::Color32::from_rgb(24, 26, 33),
            foreground: egui::Color32::from_rgb(220, 223, 228),
            muted: egui::Color32::from_rgb(140, 146, 160),
            accent: egui::Color32::from_rgb(97, 175, 239),
            success: egui::Color32::from_rgb(152, 195, 121),
            error: egui::Color32::from_rgb(224, 108, 117),
            warning: egui::Color32::from_rgb(229, 192, 123),
            selection: egui::Color32::from_rgb(62, 68, 81),
            border: egui::Color32::from_rgb(56, 60, 72),
            sidebar: SidebarColors {
                background: egui::Color32::from_rgb(18, 20, 26),
                text: egui::Color32::from_rgb(170, 176, 190),
                selected_background: egui::Color32::from_rgb(97, 175, 239),
                selected_text: egui::Color32::from_rgb(18, 20, 26),
                border: egui::Color32::from_rgb(40, 44, 52),
            },
            output_background: egui::Color32::from_rgb(32, 35, 44),
            code_background: egui::Color32::from_rgb(43, 48, 59),
            code_foreground: egui::Color32::from_rgb(192, 197, 206),
            match_background: egui::Color32::from_rgb(229, 192, 123),
            match_foreground: egui::Color32::from_rgb(24, 26, 33),
        }
    }

    fn light() -> Self {
        Self {
            dark_mode: false,
            background: egui::Color32::from_rgb(250, 250, 250),
            foreground: egui::Color32::from_rgb(36, 41, 47),
            muted: egui::Color32::from_rgb(101, 109, 118),
            accent: egui::Color32::from_rgb(9, 105, 218),
            success: egui::Color32::from_rgb(26, 127, 55),
            error: egui::Color32::from_rgb(207, 34, 46),
            warning: egui::Color32::from_rgb(154, 103, 0),
            selection: egui::Color32::from_rgb(221, 244, 255),
            border: egui::Color32::from_rgb(208, 215, 222),
            sidebar: SidebarColors {
                background: egui::Color32::from_rgb(238, 240, 243),
                text: egui::Color32::from_rgb(66, 74, 83),
                selected_background: egui::Color32::from_rgb(9, 105, 218),
                selected_text: egui::Color32::WHITE,
                border: egui::Color32::from_rgb(208, 215, 222),
            },
            output_background: egui::Color32::from_rgb(246, 248, 250),
            // Code blocks keep a dark background to match the highlighter theme
            code_background: egui::Color32::from_rgb(43, 48, 59),
            code_foreground: egui::Color32::from_rgb(192, 197, 206),
            match_background: egui::Color32::from_rgb(255, 223, 93),
            match_foreground: egui::Color32::from_rgb(36, 41, 47),
        }
    }
}

impl Default for UiColors {
    fn default() -> Self {
        Self::from_theme(ThemeName::default())
    }
}
