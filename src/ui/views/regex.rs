use eframe::egui;
use eframe::egui::text::LayoutJob;

use crate::tools::regex_tester::Segment;
use crate::tools::{OutputRegion, RegexTester, Transform, MAX_MATCHES};
use crate::ui::{self, UiColors, ViewContext};

fn highlighted(segments: &[Segment<'_>], size: f32, colors: &UiColors) -> LayoutJob {
    let mut job = LayoutJob::default();
    for segment in segments {
        let mut format = egui::TextFormat::simple(egui::FontId::monospace(size), colors.foreground);
        if segment.is_match {
            format.background = colors.match_background;
            format.color = colors.match_foreground;
        }
        job.append(segment.text, 0.0, format);
    }
    job
}

pub(super) fn show(
    ui: &mut egui::Ui,
    tool: &mut RegexTester,
    cx: &mut ViewContext<'_>,
) -> Option<OutputRegion> {
    let colors = cx.colors;
    ui::tool_header(ui, tool.descriptor(), colors);

    ui::caption(ui, "Pattern", colors);
    ui.horizontal(|ui| {
        ui.monospace("/");
        ui.add(
            egui::TextEdit::singleline(tool.pattern_mut())
                .id(egui::Id::new("regex-pattern"))
                .font(egui::TextStyle::Monospace)
                .hint_text("[a-z]+")
                .desired_width(ui.available_width() - 120.0),
        );
        ui.monospace("/");

        let mut flags = tool.flags().to_string();
        let response = ui.add(
            egui::TextEdit::singleline(&mut flags)
                .id(egui::Id::new("regex-flags"))
                .font(egui::TextStyle::Monospace)
                .char_limit(6)
                .desired_width(80.0),
        );
        if response.changed() {
            tool.set_flags(&flags);
        }
    })
    .response
    .on_hover_text("Flags: g global, i ignore case, m multiline, s dot-all, u unicode, y sticky");

    ui::caption(ui, "Test string", colors);
    ui::input_area(ui, "regex", tool.input_mut(), "Text to search…", 6);
    ui::error_label(ui, tool.error(), colors);

    let (run, clear) = super::action_row(ui, "Test", cx);
    if run {
        tool.run_transform();
    }
    if clear {
        tool.clear_all();
    }

    let result = tool.result()?;

    ui.add_space(8.0);
    let mut copy = false;
    ui.horizontal(|ui| {
        let mut summary = format!("Matches: {}", result.len());
        if result.truncated {
            summary.push_str(&format!(" (stopped at {})", MAX_MATCHES));
        }
        ui.label(egui::RichText::new(summary).strong().color(colors.success));
        copy = ui::copy_button(ui, !result.is_empty());
    });

    egui::Frame::none()
        .fill(colors.output_background)
        .stroke(egui::Stroke::new(1.0, colors.border))
        .inner_margin(egui::Margin::symmetric(6.0, 4.0))
        .show(ui, |ui| {
            ui.set_min_width(ui.available_width());
            ui.label(highlighted(&tool.segments(), cx.font_size - 1.0, colors));
        });

    ui.add_space(8.0);
    ui::caption(ui, "Match details", colors);
    let mut focused = None;
    if ui::output_area(ui, "regex", &result.joined(), 4, colors).has_focus() {
        focused = Some(OutputRegion::Main);
    }

    egui::Grid::new("regex-matches")
        .striped(true)
        .spacing(egui::vec2(16.0, 4.0))
        .show(ui, |ui| {
            for (n, m) in result.matches.iter().enumerate().take(100) {
                ui.monospace(format!("#{}", n + 1));
                ui.monospace(format!("index {}", m.index));
                ui.monospace(&m.text);
                let groups: Vec<String> = m
                    .groups
                    .iter()
                    .map(|(name, value)| {
                        format!("{}={}", name, value.as_deref().unwrap_or("undefined"))
                    })
                    .collect();
                ui.label(egui::RichText::new(groups.join(", ")).color(colors.muted));
                ui.end_row();
            }
        });
    if result.len() > 100 {
        ui.label(
            egui::RichText::new(format!("… {} more", result.len() - 100)).color(colors.muted),
        );
    }

    if copy {
        tool.copy_output(OutputRegion::Main, cx.clipboard);
    }
    focused
}
