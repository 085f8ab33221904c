//! Markdown document painting
//!
//! Draws the block model produced by the Markdown previewer. Parsing and
//! highlighting happen in [`crate::tools::markdown_previewer`] and
//! [`crate::highlight`]; this module only maps the result onto egui widgets.

use eframe::egui;

use super::code::code_job;
use super::colors::UiColors;
use crate::tools::markdown_previewer::{Block, InlineSpan, TableRow};
use crate::tools::MarkdownDocument;

const INDENT: f32 = 18.0;

fn heading_size(level: u8, base: f32) -> f32 {
    match level {
        1 => base + 14.0,
        2 => base + 10.0,
        3 => base + 6.0,
        4 => base + 3.0,
        5 => base + 1.0,
        _ => base,
    }
}

fn span_text(span: &InlineSpan, size: f32, colors: &UiColors) -> egui::RichText {
    let mut text = egui::RichText::new(&span.text).size(size);
    if span.style.code {
        text = text.code();
    }
    if span.style.strong {
        text = text.strong();
    }
    if span.style.emphasis {
        text = text.italics();
    }
    if span.style.strikethrough {
        text = text.strikethrough();
    }
    if span.style.link.is_some() {
        text = text.color(colors.accent);
    }
    text
}

fn inline(ui: &mut egui::Ui, spans: &[InlineSpan], size: f32, colors: &UiColors) {
    ui.horizontal_wrapped(|ui| {
        ui.spacing_mut().item_spacing.x = 0.0;
        for span in spans {
            let text = span_text(span, size, colors);
            match &span.style.link {
                Some(url) => {
                    ui.hyperlink_to(text, url);
                }
                None => {
                    ui.label(text);
                }
            }
        }
    });
}

fn quoted(ui: &mut egui::Ui, depth: usize, colors: &UiColors, add: impl FnOnce(&mut egui::Ui)) {
    if depth == 0 {
        add(ui);
        return;
    }
    ui.horizontal_top(|ui| {
        for _ in 0..depth {
            ui.label(egui::RichText::new("▍").color(colors.muted));
        }
        ui.vertical(add);
    });
}

fn table(
    ui: &mut egui::Ui,
    id: usize,
    header: &TableRow,
    rows: &[TableRow],
    size: f32,
    colors: &UiColors,
) {
    egui::Frame::none()
        .stroke(egui::Stroke::new(1.0, colors.border))
        .inner_margin(egui::Margin::symmetric(6.0, 4.0))
        .show(ui, |ui| {
            egui::Grid::new(("markdown-table", id))
                .striped(true)
                .spacing(egui::vec2(16.0, 4.0))
                .show(ui, |ui| {
                    for cell in header {
                        ui.horizontal_wrapped(|ui| {
                            ui.spacing_mut().item_spacing.x = 0.0;
                            for span in cell {
                                ui.label(span_text(span, size, colors).strong());
                            }
                        });
                    }
                    ui.end_row();

                    for row in rows {
                        for cell in row {
                            inline(ui, cell, size, colors);
                        }
                        ui.end_row();
                    }
                });
        });
}

/// Paint `document` into `ui`
pub fn show(ui: &mut egui::Ui, document: &MarkdownDocument, base_size: f32, colors: &UiColors) {
    for (index, block) in document.blocks.iter().enumerate() {
        match block {
            Block::Heading { level, spans } => {
                ui.add_space(6.0);
                let size = heading_size(*level, base_size);
                ui.horizontal_wrapped(|ui| {
                    ui.spacing_mut().item_spacing.x = 0.0;
                    for span in spans {
                        ui.label(span_text(span, size, colors).strong());
                    }
                });
                if *level <= 2 {
                    ui.separator();
                }
            }
            Block::Paragraph { spans, quote_depth } => {
                quoted(ui, *quote_depth, colors, |ui| inline(ui, spans, base_size, colors));
                ui.add_space(4.0);
            }
            Block::ListItem {
                depth,
                marker,
                checked,
                spans,
                quote_depth,
            } => {
                quoted(ui, *quote_depth, colors, |ui| {
                    ui.horizontal_top(|ui| {
                        ui.add_space(INDENT * (*depth as f32 + 1.0));
                        let bullet = match checked {
                            Some(true) => "☑".to_string(),
                            Some(false) => "☐".to_string(),
                            None => marker.clone(),
                        };
                        ui.label(egui::RichText::new(bullet).size(base_size).color(colors.muted));
                        ui.vertical(|ui| inline(ui, spans, base_size, colors));
                    });
                });
            }
            Block::CodeBlock { language, code } => {
                egui::Frame::none()
                    .fill(colors.code_background)
                    .rounding(egui::Rounding::same(4.0))
                    .inner_margin(egui::Margin::symmetric(10.0, 8.0))
                    .show(ui, |ui| {
                        ui.set_min_width(ui.available_width());
                        if let Some(language) = language {
                            ui.label(
                                egui::RichText::new(language)
                                    .small()
                                    .color(colors.code_foreground),
                            );
                        }
                        ui.label(code_job(code, base_size - 1.0, colors));
                    });
                ui.add_space(4.0);
            }
            Block::Rule => {
                ui.separator();
            }
            Block::Table { header, rows } => {
                table(ui, index, header, rows, base_size, colors);
                ui.add_space(4.0);
            }
        }
    }
}
