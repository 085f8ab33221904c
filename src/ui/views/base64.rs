use std::path::Path;

use eframe::egui;

use crate::tools::{Base64Converter, Base64Mode, OutputRegion, Transform};
use crate::ui::image_preview::fit_size;
use crate::ui::{self, ViewContext};

pub(super) fn show(
    ui: &mut egui::Ui,
    tool: &mut Base64Converter,
    cx: &mut ViewContext<'_>,
) -> Option<OutputRegion> {
    let colors = cx.colors;
    ui::tool_header(ui, tool.descriptor(), colors);

    ui.horizontal(|ui| {
        for mode in [Base64Mode::Encode, Base64Mode::Decode] {
            if ui.selectable_label(tool.mode() == mode, mode.label()).clicked() {
                tool.set_mode(mode);
            }
        }
    });

    let hint = match tool.mode() {
        Base64Mode::Encode => "Text to encode…",
        Base64Mode::Decode => "Base64 to decode…",
    };
    ui::caption(ui, "Input", colors);
    ui::input_area(ui, "base64", tool.input_mut(), hint, 8);

    ui.horizontal(|ui| {
        ui.add(
            egui::TextEdit::singleline(tool.path_mut())
                .id(egui::Id::new("base64-path"))
                .hint_text("File path, or drop a file on the window")
                .desired_width(ui.available_width() - 100.0),
        );
        if ui.button("Load file").clicked() {
            let path = tool.path_mut().trim().to_string();
            if !path.is_empty() {
                // Failure is recorded as the tool's error.
                let _ = tool.load_file(Path::new(&path));
            }
        }
    });
    ui::error_label(ui, tool.error(), colors);

    let run_label = match tool.mode() {
        Base64Mode::Encode => "Encode",
        Base64Mode::Decode => "Decode",
    };
    let (run, clear) = super::action_row(ui, run_label, cx);
    if run {
        tool.run_transform();
    }
    if clear {
        tool.clear_all();
        cx.images.clear();
    }

    ui.add_space(8.0);
    let mut copy = false;
    ui.horizontal(|ui| {
        ui::caption(ui, "Output", colors);
        copy = ui::copy_button(ui, tool.output().is_some());
    });

    let text = tool.output().map(|o| o.text.as_str()).unwrap_or_default();
    let focused = ui::output_area(ui, "base64", text, 8, colors)
        .has_focus()
        .then_some(OutputRegion::Main);

    if let Some(preview) = tool.preview() {
        ui.add_space(8.0);
        ui::caption(ui, &format!("Image preview ({})", preview.format.mime()), colors);
        match cx.images.texture(ui.ctx(), preview) {
            Some(texture) => {
                let size = fit_size(texture.size_vec2());
                ui.image((texture.id(), size));
            }
            None => {
                ui.label(egui::RichText::new("Preview unavailable").color(colors.muted));
            }
        }
    }

    if copy {
        tool.copy_output(OutputRegion::Main, cx.clipboard);
    }
    focused
}
