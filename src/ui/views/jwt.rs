use chrono::Utc;
use eframe::egui;

use crate::tools::{JwtDecoder, OutputRegion, Transform};
use crate::ui::{self, ViewContext};

pub(super) fn show(
    ui: &mut egui::Ui,
    tool: &mut JwtDecoder,
    cx: &mut ViewContext<'_>,
) -> Option<OutputRegion> {
    let colors = cx.colors;
    ui::tool_header(ui, tool.descriptor(), colors);

    ui::caption(ui, "Encoded token", colors);
    ui::input_area(ui, "jwt", tool.input_mut(), "Paste a JWT (xxxxx.yyyyy.zzzzz)…", 4);
    ui::error_label(ui, tool.error(), colors);

    let (run, clear) = super::action_row(ui, "Decode", cx);
    if run {
        tool.run_transform();
    }
    if clear {
        tool.clear_all();
    }

    let decoded = tool.decoded()?;

    let mut focused = None;
    let mut copy = None;

    for (region, title, text) in [
        (OutputRegion::Header, "Header", decoded.header_text()),
        (OutputRegion::Payload, "Payload", decoded.payload_text()),
    ] {
        ui.add_space(8.0);
        ui.horizontal(|ui| {
            ui::caption(ui, title, colors);
            if ui::copy_button(ui, true) {
                copy = Some(region);
            }
        });
        if ui::json_output_area(ui, title, text, 6, colors).has_focus() {
            focused = Some(region);
        }
    }

    let claims = decoded.time_claims();
    if !claims.is_empty() {
        ui.add_space(8.0);
        ui::caption(ui, "Time claims", colors);
        let now = Utc::now();
        egui::Grid::new("jwt-time-claims")
            .spacing(egui::vec2(16.0, 4.0))
            .show(ui, |ui| {
                for claim in &claims {
                    ui.monospace(claim.name);
                    ui.monospace(claim.display());
                    if claim.name == "exp" && claim.is_past(now) {
                        ui.label(egui::RichText::new("expired").color(colors.error));
                    } else {
                        ui.label("");
                    }
                    ui.end_row();
                }
            });
    }

    ui.add_space(8.0);
    ui::caption(ui, "Signature", colors);
    ui.label(
        egui::RichText::new(&decoded.signature)
            .monospace()
            .color(colors.muted),
    );
    ui.label(
        egui::RichText::new("The signature is shown as-is and is not verified.")
            .small()
            .color(colors.warning),
    );

    if let Some(region) = copy {
        tool.copy_output(region, cx.clipboard);
    }
    focused
}
