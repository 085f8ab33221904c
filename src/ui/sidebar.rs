//! Tool sidebar
//!
//! One selectable control per registered tool. The sidebar holds no state:
//! it draws the descriptors and reports a click.

use eframe::egui;

use super::colors::UiColors;
use crate::tools::{ToolDescriptor, ToolKey};

const BUTTON_HEIGHT: f32 = 48.0;

/// Draw the sidebar. Returns the key the user clicked, if any.
pub fn show(
    ui: &mut egui::Ui,
    descriptors: &[ToolDescriptor],
    selected: Option<ToolKey>,
    colors: &UiColors,
) -> Option<ToolKey> {
    let mut clicked = None;
    let width = ui.available_width();

    ui.vertical_centered(|ui| {
        ui.add_space(8.0);
        for descriptor in descriptors {
            let is_selected = selected == Some(descriptor.key);
            let (fill, text) = if is_selected {
                (
                    colors.sidebar.selected_background,
                    colors.sidebar.selected_text,
                )
            } else {
                (egui::Color32::TRANSPARENT, colors.sidebar.text)
            };

            let button = egui::Button::new(
                egui::RichText::new(descriptor.label)
                    .font(egui::FontId::proportional(13.0))
                    .color(text)
                    .strong(),
            )
            .fill(fill)
            .rounding(egui::Rounding::same(6.0))
            .min_size(egui::vec2(width - 12.0, BUTTON_HEIGHT));

            let response = ui.add(button).on_hover_text(descriptor.tooltip);
            if response.clicked() && !is_selected {
                clicked = Some(descriptor.key);
            }
            ui.add_space(4.0);
        }
    });

    clicked
}
