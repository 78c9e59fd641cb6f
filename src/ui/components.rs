//! Reusable UI components
//!
//! Painters for the trigger buttons and the count display.

use crate::theme;
use crate::ui::surface::{DisplayLabel, TriggerButton};
use eframe::egui;

/// Custom-painted trigger button in the trigger's own colour
pub fn trigger_button(ui: &mut egui::Ui, button: &TriggerButton) -> egui::Response {
    let (rect, response) = ui.allocate_exact_size(theme::TRIGGER_SIZE, egui::Sense::click());

    if ui.is_rect_visible(rect) {
        let painter = ui.painter();
        let fill = theme::trigger_fill(&response, button.color);
        let rect = if response.is_pointer_button_down_on() { rect.shrink(1.5) } else { rect };

        painter.rect_filled(rect, theme::RADIUS_DEFAULT, fill);
        painter.text(
            rect.center(),
            egui::Align2::CENTER_CENTER,
            format!("{}  {}", egui_phosphor::regular::PLUS, button.label),
            egui::FontId::proportional(theme::FONT_BUTTON),
            theme::TEXT_PRIMARY,
        );
    }

    if let Some(key) = button.shortcut {
        response.on_hover_text(format!("Shortcut: {}", key.name()))
    } else {
        response
    }
}

/// Framed label showing the current count
pub fn count_display(ui: &mut egui::Ui, display: &DisplayLabel) {
    theme::display_frame().show(ui, |ui| {
        ui.set_min_width(theme::TRIGGER_SIZE.x * 2.0 + theme::SPACING_MD);
        ui.vertical_centered(|ui| {
            ui.add(
                egui::Label::new(
                    egui::RichText::new(&display.text)
                        .size(theme::FONT_COUNT)
                        .color(theme::TEXT_PRIMARY),
                )
                .selectable(false),
            );
        });
    });
}

/// Small dim caption line
pub fn caption(ui: &mut egui::Ui, text: impl Into<String>) {
    ui.add(
        egui::Label::new(
            egui::RichText::new(text.into())
                .size(theme::FONT_SMALL)
                .color(theme::TEXT_DIM),
        )
        .selectable(false),
    );
}
