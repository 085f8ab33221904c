use eframe::egui;

use crate::tools::{JsonFormatter, OutputRegion, Transform, TEMPLATES};
use crate::ui::{self, ViewContext};

pub(super) fn show(
    ui: &mut egui::Ui,
    tool: &mut JsonFormatter,
    cx: &mut ViewContext<'_>,
) -> Option<OutputRegion> {
    let colors = cx.colors;
    ui::tool_header(ui, tool.descriptor(), colors);

    ui.horizontal(|ui| {
        ui::caption(ui, "Templates", colors);
        for (index, template) in TEMPLATES.iter().enumerate() {
            let selected = tool.selected_template() == Some(index);
            if ui.selectable_label(selected, template.name).clicked() {
                tool.insert_template(index);
            }
        }
    });

    ui::caption(ui, "Input", colors);
    ui::json_input_area(ui, "json", tool.input_mut(), "Paste JSON here…", 10, colors);
    ui::error_label(ui, tool.error(), colors);

    let (run, clear) = super::action_row(ui, "Format", cx);
    if run {
        tool.run_transform();
    }
    if clear {
        tool.clear_all();
    }

    ui.add_space(8.0);
    let mut copy = false;
    ui.horizontal(|ui| {
        ui::caption(ui, "Output", colors);
        copy = ui::copy_button(ui, tool.output().is_some());
    });
    if copy {
        tool.copy_output(OutputRegion::Main, cx.clipboard);
    }

    let output = tool.output().unwrap_or_default();
    let response = ui::json_output_area(ui, "json", output, 12, colors);
    response.has_focus().then_some(OutputRegion::Main)
}
