use eframe::egui;

use crate::tools::uuid_generator::UUID_EXPLANATION;
use crate::tools::{OutputRegion, Transform, UuidGenerator, UuidVersion};
use crate::ui::{self, ViewContext};

pub(super) fn show(
    ui: &mut egui::Ui,
    tool: &mut UuidGenerator,
    cx: &mut ViewContext<'_>,
) -> Option<OutputRegion> {
    let colors = cx.colors;
    ui::tool_header(ui, tool.descriptor(), colors);

    ui.horizontal(|ui| {
        ui::caption(ui, "Version", colors);
        for version in UuidVersion::ALL {
            if ui
                .selectable_label(tool.version() == version, version.label())
                .clicked()
            {
                tool.set_version(version);
            }
        }
    });

    let (run, clear) = super::action_row(ui, "Generate", cx);
    if run {
        tool.run_transform();
    }
    if clear {
        tool.clear_all();
    }

    ui.add_space(8.0);
    let mut copy = false;
    ui.horizontal(|ui| {
        ui::caption(ui, "Generated UUID", colors);
        copy = ui::copy_button(ui, tool.current().is_some());
    });

    let text = tool.current().map(|g| g.text()).unwrap_or_default();
    let focused = ui::output_area(ui, "uuid", &text, 1, colors)
        .has_focus()
        .then_some(OutputRegion::Main);

    if let Some(at) = tool.current().and_then(|g| g.timestamp()) {
        ui.label(
            egui::RichText::new(format!("Timestamp: {}", at.format("%Y-%m-%d %H:%M:%S%.3f UTC")))
                .color(colors.muted),
        );
    }

    ui.add_space(12.0);
    ui.label(egui::RichText::new(UUID_EXPLANATION).color(colors.muted));

    if copy {
        tool.copy_output(OutputRegion::Main, cx.clipboard);
    }
    focused
}
