use eframe::egui;

use crate::tools::{MarkdownPreviewer, OutputRegion, Transform};
use crate::ui::{self, ViewContext};

/// Focus target for the rendered pane; Ctrl/Cmd+C there copies the source
fn preview_id() -> egui::Id {
    egui::Id::new("markdown-preview")
}

pub(super) fn show(
    ui: &mut egui::Ui,
    tool: &mut MarkdownPreviewer,
    cx: &mut ViewContext<'_>,
) -> Option<OutputRegion> {
    let colors = cx.colors;
    ui::tool_header(ui, tool.descriptor(), colors);

    let mut copy = false;
    let mut clear = false;
    ui.horizontal(|ui| {
        copy = ui::copy_button(ui, !tool.input().is_empty());
        clear = ui.button("Clear").clicked();
    });
    if clear {
        tool.clear_all();
    }

    let height = ui.available_height();
    let mut focused = false;
    ui.columns(2, |columns| {
        ui::caption(&mut columns[0], "Markdown", colors);
        egui::ScrollArea::vertical()
            .auto_shrink([false; 2])
            .max_height(height)
            .show(&mut columns[0], |ui| {
                let response = ui::input_area(ui, "markdown", tool.input_mut(), "# Hello", 30);
                if response.changed() {
                    tool.run_transform();
                }
            });

        ui::caption(&mut columns[1], "Preview", colors);
        // Registered before the content so links inside stay clickable
        let rect = columns[1].available_rect_before_wrap();
        let pane = columns[1].interact(rect, preview_id(), egui::Sense::click());
        if pane.clicked() {
            pane.request_focus();
        }
        focused = pane.has_focus();
        if focused {
            columns[1]
                .painter()
                .rect_stroke(rect, 4.0, egui::Stroke::new(1.0, colors.accent));
        }

        egui::ScrollArea::vertical()
            .auto_shrink([false; 2])
            .max_height(height)
            .show(&mut columns[1], |ui| {
                if let Some(document) = tool.document() {
                    ui::markdown::show(ui, document, cx.font_size, colors);
                }
            });
    });

    if copy {
        tool.copy_output(OutputRegion::Main, cx.clipboard);
    }
    focused.then_some(OutputRegion::Main)
}
