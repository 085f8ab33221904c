//! Tool views
//!
//! One view per registered tool. Each view draws its tool and returns the
//! output region that holds keyboard focus, which the app uses to route
//! Ctrl/Cmd+C.

mod base64;
mod json;
mod jwt;
mod markdown;
mod regex;
mod uuid;

use eframe::egui;

use super::ViewContext;
use crate::tools::{ActiveTool, OutputRegion};

/// Draw the mounted tool
pub fn show_tool(
    ui: &mut egui::Ui,
    tool: &mut ActiveTool,
    cx: &mut ViewContext<'_>,
) -> Option<OutputRegion> {
    // The previewer scrolls its two panes independently.
    if let ActiveTool::Markdown(previewer) = tool {
        return markdown::show(ui, previewer, cx);
    }

    egui::ScrollArea::vertical()
        .auto_shrink([false; 2])
        .show(ui, |ui| match tool {
            ActiveTool::Json(t) => json::show(ui, t, cx),
            ActiveTool::Jwt(t) => jwt::show(ui, t, cx),
            ActiveTool::Regex(t) => regex::show(ui, t, cx),
            ActiveTool::Uuid(t) => uuid::show(ui, t, cx),
            ActiveTool::Base64(t) => base64::show(ui, t, cx),
            ActiveTool::Markdown(_) => None,
        })
        .inner
}

/// Run / Clear button row shared by the tools with an explicit action
fn action_row(
    ui: &mut egui::Ui,
    run_label: &str,
    cx: &ViewContext<'_>,
) -> (bool, bool) {
    let mut run = false;
    let mut clear = false;
    ui.horizontal(|ui| {
        run = super::primary_button(ui, run_label, cx.colors);
        clear = ui.button("Clear").clicked();
    });
    (run, clear)
}
