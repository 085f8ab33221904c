//! UI components and rendering
//!
//! egui front-end for the shell: the sidebar, one view per tool, and the
//! shared widgets those views are built from. Views only call into the
//! [`Transform`](crate::tools::Transform) contract; all tool logic lives in
//! [`crate::tools`].

pub mod code;
pub mod colors;
pub mod image_preview;
pub mod markdown;
pub mod sidebar;
pub mod views;

pub use colors::{ToEguiColor, UiColors};
pub use image_preview::ImagePreviewCache;
pub use views::show_tool;

use eframe::egui;

use crate::clipboard::ClipboardSink;
use crate::tools::ToolDescriptor;

/// Everything a tool view needs besides the tool itself
pub struct ViewContext<'a> {
    pub colors: &'a UiColors,
    pub clipboard: &'a mut dyn ClipboardSink,
    pub images: &'a mut ImagePreviewCache,
    pub font_size: f32,
}

/// Apply the theme and font size to the context
pub fn apply_style(ctx: &egui::Context, colors: &UiColors, font_size: f32) {
    let mut style = (*ctx.style()).clone();

    style.visuals = if colors.dark_mode {
        egui::Visuals::dark()
    } else {
        egui::Visuals::light()
    };
    style.visuals.window_fill = colors.background;
    style.visuals.panel_fill = colors.background;
    style.visuals.extreme_bg_color = colors.output_background;
    style.visuals.override_text_color = Some(colors.foreground);

    style.visuals.selection.bg_fill = colors.selection;
    style.visuals.selection.stroke = egui::Stroke::new(1.0, colors.accent);

    style.spacing.item_spacing = egui::vec2(8.0, 6.0);
    style.spacing.button_padding = egui::vec2(10.0, 5.0);

    style
        .text_styles
        .insert(egui::TextStyle::Body, egui::FontId::proportional(font_size));
    style.text_styles.insert(
        egui::TextStyle::Button,
        egui::FontId::proportional(font_size),
    );
    style.text_styles.insert(
        egui::TextStyle::Monospace,
        egui::FontId::monospace(font_size - 1.0),
    );
    style.text_styles.insert(
        egui::TextStyle::Heading,
        egui::FontId::proportional(font_size + 8.0),
    );

    ctx.set_style(style);
}

/// Title row shown at the top of every tool view
pub fn tool_header(ui: &mut egui::Ui, descriptor: &ToolDescriptor, colors: &UiColors) {
    ui.label(
        egui::RichText::new(descriptor.tooltip)
            .heading()
            .color(colors.foreground)
            .strong(),
    );
    ui.label(
        egui::RichText::new("Ctrl/Cmd+Enter to run · Ctrl/Cmd+L to clear")
            .small()
            .color(colors.muted),
    );
    ui.add_space(8.0);
}

/// Section caption
pub fn caption(ui: &mut egui::Ui, text: &str, colors: &UiColors) {
    ui.label(egui::RichText::new(text).strong().color(colors.muted));
}

/// Error message shown next to the input
pub fn error_label(ui: &mut egui::Ui, error: Option<&str>, colors: &UiColors) {
    if let Some(message) = error {
        ui.label(egui::RichText::new(message).color(colors.error));
    }
}

/// Multi-line text input filling the available width
pub fn input_area(
    ui: &mut egui::Ui,
    id: &str,
    text: &mut String,
    hint: &str,
    rows: usize,
) -> egui::Response {
    ui.add(
        egui::TextEdit::multiline(text)
            .id(egui::Id::new(("input", id)))
            .hint_text(hint)
            .font(egui::TextStyle::Monospace)
            .desired_width(f32::INFINITY)
            .desired_rows(rows),
    )
}

/// JSON input drawn on the code background with colored tokens
pub fn json_input_area(
    ui: &mut egui::Ui,
    id: &str,
    text: &mut String,
    hint: &str,
    rows: usize,
    colors: &UiColors,
) -> egui::Response {
    let mut layouter = code::json_layouter(colors);
    framed(ui, colors.code_background, colors, |ui| {
        ui.add(
            egui::TextEdit::multiline(text)
                .id(egui::Id::new(("input", id)))
                .hint_text(hint)
                .font(egui::TextStyle::Monospace)
                .frame(false)
                .desired_width(f32::INFINITY)
                .desired_rows(rows)
                .layouter(&mut layouter),
        )
    })
}

fn framed<R>(
    ui: &mut egui::Ui,
    fill: egui::Color32,
    colors: &UiColors,
    add: impl FnOnce(&mut egui::Ui) -> R,
) -> R {
    egui::Frame::none()
        .fill(fill)
        .stroke(egui::Stroke::new(1.0, colors.border))
        .rounding(egui::Rounding::same(4.0))
        .inner_margin(egui::Margin::symmetric(6.0, 4.0))
        .show(ui, add)
        .inner
}

fn output_edit<'t>(id: &str, text: &'t mut &str, rows: usize) -> egui::TextEdit<'t> {
    egui::TextEdit::multiline(text)
        .id(egui::Id::new(("output", id)))
        .font(egui::TextStyle::Monospace)
        .frame(false)
        .desired_width(f32::INFINITY)
        .desired_rows(rows)
}

/// Read-only output that can still take focus, so Ctrl/Cmd+C can target it
pub fn output_area(
    ui: &mut egui::Ui,
    id: &str,
    text: &str,
    rows: usize,
    colors: &UiColors,
) -> egui::Response {
    let mut view = text;
    framed(ui, colors.output_background, colors, |ui| {
        ui.add(output_edit(id, &mut view, rows))
    })
}

/// Read-only JSON output, colored like a fenced code block
pub fn json_output_area(
    ui: &mut egui::Ui,
    id: &str,
    text: &str,
    rows: usize,
    colors: &UiColors,
) -> egui::Response {
    let mut view = text;
    let mut layouter = code::json_layouter(colors);
    framed(ui, colors.code_background, colors, |ui| {
        ui.add(output_edit(id, &mut view, rows).layouter(&mut layouter))
    })
}

/// Primary action button
pub fn primary_button(ui: &mut egui::Ui, label: &str, colors: &UiColors) -> bool {
    ui.add(
        egui::Button::new(egui::RichText::new(label).color(colors.background).strong())
            .fill(colors.accent)
            .rounding(egui::Rounding::same(4.0)),
    )
    .clicked()
}

/// Copy button, disabled while there is nothing to copy
pub fn copy_button(ui: &mut egui::Ui, enabled: bool) -> bool {
    ui.add_enabled(enabled, egui::Button::new("Copy")).clicked()
}

/// Neutral view for a selection with no registered tool
pub fn show_placeholder(ui: &mut egui::Ui, colors: &UiColors) {
    ui.vertical_centered(|ui| {
        ui.add_space(ui.available_height() / 3.0);
        ui.label(
            egui::RichText::new("Coming soon…")
                .font(egui::FontId::proportional(24.0))
                .color(colors.muted),
        );
    });
}
