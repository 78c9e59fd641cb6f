//! The concrete elements shown in the window
//!
//! `CounterSurface` is what the binder wires against. It is built once from
//! the layout settings and only its display text changes afterwards.

use crate::binder::{Surface, WiringError};
use crate::settings::{ButtonSpec, LayoutSettings};
use crate::theme;
use crate::types::ElementId;
use eframe::egui;
use std::collections::HashSet;
use tracing::warn;

pub struct TriggerButton {
    pub id: ElementId,
    pub label: String,
    pub color: egui::Color32,
    pub shortcut: Option<egui::Key>,
}

pub struct DisplayLabel {
    pub id: ElementId,
    pub text: String,
}

pub struct CounterSurface {
    buttons: Vec<TriggerButton>,
    display: DisplayLabel,
}

impl TriggerButton {
    fn from_spec(spec: &ButtonSpec) -> Self {
        let color = theme::parse_hex_color(&spec.color).unwrap_or_else(|| {
            warn!(id = %spec.id, color = %spec.color, "Invalid button color, using default");
            theme::BTN_DEFAULT
        });

        let shortcut = spec.shortcut.as_deref().and_then(|name| {
            let key = egui::Key::from_name(name);
            if key.is_none() {
                warn!(id = %spec.id, shortcut = name, "Unknown shortcut key, ignoring");
            }
            key
        });

        Self { id: spec.id.clone(), label: spec.label.clone(), color, shortcut }
    }
}

impl CounterSurface {
    /// Build the elements described by `layout`. Element ids must be unique.
    pub fn from_layout(layout: &LayoutSettings) -> Result<Self, WiringError> {
        let mut seen = HashSet::new();
        let ids = layout
            .buttons
            .iter()
            .map(|b| &b.id)
            .chain(std::iter::once(&layout.display));
        for id in ids {
            if !seen.insert(id) {
                return Err(WiringError::DuplicateElement(id.clone()));
            }
        }

        Ok(Self {
            buttons: layout.buttons.iter().map(TriggerButton::from_spec).collect(),
            display: DisplayLabel { id: layout.display.clone(), text: String::new() },
        })
    }

    pub fn buttons(&self) -> &[TriggerButton] {
        &self.buttons
    }

    pub fn display(&self) -> &DisplayLabel {
        &self.display
    }
}

impl Surface for CounterSurface {
    fn has_trigger(&self, id: &ElementId) -> bool {
        self.buttons.iter().any(|b| &b.id == id)
    }

    fn has_display(&self, id: &ElementId) -> bool {
        &self.display.id == id
    }

    fn write_display(&mut self, id: &ElementId, text: &str) {
        if &self.display.id == id {
            self.display.text.clear();
            self.display.text.push_str(text);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_layout_has_two_triggers_and_a_display() {
        let surface = CounterSurface::from_layout(&LayoutSettings::default()).unwrap();
        assert_eq!(surface.buttons().len(), 2);
        assert!(surface.has_trigger(&"red".into()));
        assert!(surface.has_trigger(&"blue".into()));
        assert!(surface.has_display(&"count".into()));
        assert!(!surface.has_trigger(&"count".into()));
        assert!(!surface.has_display(&"red".into()));
    }

    #[test]
    fn default_buttons_carry_colors_and_shortcuts() {
        let surface = CounterSurface::from_layout(&LayoutSettings::default()).unwrap();
        let red = &surface.buttons()[0];
        assert_eq!(red.color, egui::Color32::from_rgb(0xdc, 0x26, 0x26));
        assert_eq!(red.shortcut, Some(egui::Key::R));
        assert_eq!(surface.buttons()[1].shortcut, Some(egui::Key::B));
    }

    #[test]
    fn bad_color_and_shortcut_fall_back() {
        let mut layout = LayoutSettings::default();
        layout.buttons[0].color = "crimson".to_owned();
        layout.buttons[0].shortcut = Some("NotAKey".to_owned());

        let surface = CounterSurface::from_layout(&layout).unwrap();
        assert_eq!(surface.buttons()[0].color, theme::BTN_DEFAULT);
        assert_eq!(surface.buttons()[0].shortcut, None);
    }

    #[test]
    fn duplicate_button_ids_are_rejected() {
        let mut layout = LayoutSettings::default();
        layout.buttons[1].id = "red".into();
        let err = CounterSurface::from_layout(&layout).err();
        assert_eq!(err, Some(WiringError::DuplicateElement("red".into())));
    }

    #[test]
    fn display_id_may_not_shadow_a_button() {
        let mut layout = LayoutSettings::default();
        layout.display = "blue".into();
        let err = CounterSurface::from_layout(&layout).err();
        assert_eq!(err, Some(WiringError::DuplicateElement("blue".into())));
    }

    #[test]
    fn writes_only_reach_the_matching_display() {
        let mut surface = CounterSurface::from_layout(&LayoutSettings::default()).unwrap();
        surface.write_display(&"count".into(), "3");
        surface.write_display(&"other".into(), "9");
        assert_eq!(surface.display().text, "3");
    }
}
