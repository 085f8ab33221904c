//! Syntax-colored text layout
//!
//! Turns [`HighlightedCode`] into egui layout jobs, for Markdown code blocks
//! and for the JSON editors of the formatter and the JWT decoder.

use std::sync::Arc;

use eframe::egui;
use eframe::egui::text::LayoutJob;

use super::colors::{ToEguiColor, UiColors};
use crate::highlight::{self, HighlightedCode};

/// Buffers larger than this are laid out without colors
const HIGHLIGHT_LIMIT: usize = 64 * 1024;

/// Lay out highlighted lines in the code colors
pub fn code_job(code: &HighlightedCode, size: f32, colors: &UiColors) -> LayoutJob {
    let mut job = LayoutJob::default();
    let font_id = egui::FontId::monospace(size);
    let plain = egui::TextFormat::simple(font_id.clone(), colors.code_foreground);

    for (i, line) in code.lines.iter().enumerate() {
        if i > 0 {
            job.append("\n", 0.0, plain.clone());
        }
        for span in line {
            job.append(
                &span.text,
                0.0,
                egui::TextFormat {
                    font_id: font_id.clone(),
                    color: span
                        .color
                        .map(|c| c.to_egui())
                        .unwrap_or(colors.code_foreground),
                    italics: span.italic,
                    ..Default::default()
                },
            );
        }
    }
    job
}

/// Lay out `text` as colored JSON
///
/// The job text always equals `text`, so editor cursors stay in place.
pub fn json_job(text: &str, size: f32, colors: &UiColors) -> LayoutJob {
    let font_id = egui::FontId::monospace(size);
    let plain = || LayoutJob::simple(text.to_owned(), font_id.clone(), colors.code_foreground, 0.0);

    if text.len() > HIGHLIGHT_LIMIT {
        return plain();
    }

    let mut job = code_job(&highlight::highlight(text, Some("json")), size, colors);
    if text.ends_with('\n') {
        job.append("\n", 0.0, egui::TextFormat::simple(font_id.clone(), colors.code_foreground));
    }
    if job.text != text {
        return plain();
    }
    job
}

/// Layouter for a `TextEdit` holding JSON
pub fn json_layouter(
    colors: &UiColors,
) -> impl FnMut(&egui::Ui, &str, f32) -> Arc<egui::Galley> + '_ {
    move |ui, text, wrap_width| {
        let size = egui::TextStyle::Monospace.resolve(ui.style()).size;
        let mut job = json_job(text, size, colors);
        job.wrap.max_width = wrap_width;
        ui.fonts(|fonts| fonts.layout_job(job))
    }
}
