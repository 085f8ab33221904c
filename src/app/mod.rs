//! Main application structure
//!
//! `DevToolboxApp` implements `eframe::App` on top of the library's
//! [`Shell`]: the sidebar selects a tool, the central panel draws it.
//!
//! ### UI Layout
//!
//! ```text
//! ┌──────┬──────────────────────────────────┐
//! │ JSON │                                  │
//! │ JWT  │ Central Panel (mounted tool)     │
//! │ Regex│ - input, actions, output         │
//! │ UUID │                                  │
//! │ B64  │                                  │
//! │ MD   │                                  │
//! └──────┴──────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - `mod.rs` - application struct, eframe::App impl, panel layout
//! - `input.rs` - keyboard shortcuts and dropped files

mod input;

use devtoolbox::clipboard::SystemClipboard;
use devtoolbox::config::Config;
use devtoolbox::shell::Shell;
use devtoolbox::tools::{descriptors, OutputRegion};
use devtoolbox::ui::{self, ImagePreviewCache, UiColors, ViewContext};
use eframe::egui;
use tracing::info;

/// Main application
pub struct DevToolboxApp {
    shell: Shell,
    colors: UiColors,
    font_size: f32,
    sidebar_width: f32,
    clipboard: SystemClipboard,
    images: ImagePreviewCache,
    /// Output region that had keyboard focus last frame
    focused_output: Option<OutputRegion>,
    style_applied: bool,
}

impl DevToolboxApp {
    /// Create the application from a loaded configuration
    pub fn with_config(config: &Config) -> Self {
        info!(
            "Starting with tool '{}' and {} theme",
            config.tools.default_tool, config.ui.theme
        );
        Self {
            shell: Shell::new(config.tools.clone()),
            colors: UiColors::from_theme(config.ui.theme),
            font_size: config.ui.font_size,
            sidebar_width: config.ui.sidebar_width,
            clipboard: SystemClipboard::new(),
            images: ImagePreviewCache::new(),
            focused_output: None,
            style_applied: false,
        }
    }

    fn render_sidebar(&mut self, ctx: &egui::Context) {
        let frame = egui::Frame::none()
            .fill(self.colors.sidebar.background)
            .stroke(egui::Stroke::new(1.0, self.colors.sidebar.border))
            .inner_margin(egui::Margin::symmetric(6.0, 6.0));

        egui::SidePanel::left("tool-sidebar")
            .exact_width(self.sidebar_width)
            .resizable(false)
            .frame(frame)
            .show(ctx, |ui| {
                let selected = self.shell.selected_key();
                if let Some(key) = ui::sidebar::show(ui, descriptors(), selected, &self.colors) {
                    self.shell.select(key);
                    self.images.clear();
                    self.focused_output = None;
                }
            });
    }

    fn render_tool(&mut self, ctx: &egui::Context) {
        let frame = egui::Frame::none()
            .fill(self.colors.background)
            .inner_margin(egui::Margin::symmetric(20.0, 16.0));

        egui::CentralPanel::default().frame(frame).show(ctx, |ui| {
            let mut cx = ViewContext {
                colors: &self.colors,
                clipboard: &mut self.clipboard,
                images: &mut self.images,
                font_size: self.font_size,
            };

            self.focused_output = match self.shell.active_mut() {
                Some(tool) => ui::show_tool(ui, tool, &mut cx),
                None => {
                    ui::show_placeholder(ui, cx.colors);
                    None
                }
            };
        });
    }
}

impl eframe::App for DevToolboxApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if !self.style_applied {
            ui::apply_style(ctx, &self.colors, self.font_size);
            self.style_applied = true;
        }

        // Shortcuts are consumed before any widget sees the key events
        self.handle_keyboard_shortcuts(ctx);
        self.handle_dropped_files(ctx);

        self.render_sidebar(ctx);
        self.render_tool(ctx);
    }
}
