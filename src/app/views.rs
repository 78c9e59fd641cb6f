//! View rendering (count display, trigger buttons, shortcuts)
//!
//! Rendering never touches the counter. It only reports which triggers
//! fired this frame; `App::handle_events` dispatches them afterwards.

use super::App;
use crate::theme;
use crate::types::TriggerEvent;
use crate::ui::components;
use crate::ui::surface::TriggerButton;
use eframe::egui;

impl App {
    /// Shortcut presses this frame, ignored while a text field has focus.
    pub(crate) fn collect_shortcuts(&self, ctx: &egui::Context) -> Vec<TriggerEvent> {
        if ctx.wants_keyboard_input() {
            return Vec::new();
        }
        ctx.input(|i| shortcut_events(self.surface.buttons(), i))
    }

    /// Draw the display and the trigger row. Returns the clicks.
    pub(crate) fn render_counter(&self, ui: &mut egui::Ui) -> Vec<TriggerEvent> {
        let mut events = Vec::new();

        ui.vertical_centered(|ui| {
            ui.add_space(theme::SPACING_XL);
            components::count_display(ui, self.surface.display());
            ui.add_space(theme::SPACING_XL);

            let buttons = self.surface.buttons();
            let n = buttons.len() as f32;
            let row_w = n * theme::TRIGGER_SIZE.x + (n - 1.0).max(0.0) * theme::SPACING_MD;
            ui.horizontal(|ui| {
                ui.add_space(((ui.available_width() - row_w) / 2.0).max(0.0));
                for button in buttons {
                    if components::trigger_button(ui, button).clicked() {
                        events.push(TriggerEvent::click(button.id.clone()));
                    }
                }
            });

            ui.add_space(theme::SPACING_MD);
            components::caption(ui, self.tally_line());
        });

        events
    }

    fn tally_line(&self) -> String {
        self.binder
            .triggers()
            .map(|id| format!("{} {}", id, self.binder.tally(id).unwrap_or(0)))
            .collect::<Vec<_>>()
            .join("  ·  ")
    }
}

/// One event per fresh (non-repeat, unmodified) press of a button's shortcut.
pub(crate) fn shortcut_events(buttons: &[TriggerButton], input: &egui::InputState) -> Vec<TriggerEvent> {
    let mut events = Vec::new();
    for event in &input.events {
        if let egui::Event::Key { key, pressed: true, repeat: false, modifiers, .. } = event {
            if !modifiers.is_none() {
                continue;
            }
            if let Some(button) = buttons.iter().find(|b| b.shortcut == Some(*key)) {
                events.push(TriggerEvent::key(button.id.clone()));
            }
        }
    }
    events
}
