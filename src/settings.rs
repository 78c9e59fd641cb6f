//! User settings stored as settings.json in the app data directory

use crate::types::ElementId;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, warn};

const SETTINGS_FILE: &str = "settings.json";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // Window geometry
    pub window_x: Option<f32>,
    pub window_y: Option<f32>,
    pub window_w: Option<f32>,
    pub window_h: Option<f32>,

    // Elements shown in the window
    pub layout: LayoutSettings,

    // Which elements the counter is wired to
    pub bindings: BindingSettings,
}

/// A trigger button as configured by the user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ButtonSpec {
    pub id: ElementId,
    pub label: String,
    /// `#rrggbb`
    pub color: String,
    /// egui key name, e.g. "R" or "Space"
    #[serde(default)]
    pub shortcut: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutSettings {
    pub buttons: Vec<ButtonSpec>,
    pub display: ElementId,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BindingSettings {
    pub triggers: Vec<ElementId>,
    pub display: ElementId,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            window_x: None,
            window_y: None,
            window_w: None,
            window_h: None,
            layout: LayoutSettings::default(),
            bindings: BindingSettings::default(),
        }
    }
}

impl Default for LayoutSettings {
    fn default() -> Self {
        Self {
            buttons: vec![
                ButtonSpec {
                    id: ElementId::new("red"),
                    label: "Red".to_owned(),
                    color: "#dc2626".to_owned(),
                    shortcut: Some("R".to_owned()),
                },
                ButtonSpec {
                    id: ElementId::new("blue"),
                    label: "Blue".to_owned(),
                    color: "#2563eb".to_owned(),
                    shortcut: Some("B".to_owned()),
                },
            ],
            display: ElementId::new("count"),
        }
    }
}

impl Default for BindingSettings {
    fn default() -> Self {
        Self {
            triggers: vec![ElementId::new("red"), ElementId::new("blue")],
            display: ElementId::new("count"),
        }
    }
}

impl Settings {
    pub fn load(data_dir: &Path) -> Self {
        let path = data_dir.join(SETTINGS_FILE);
        match std::fs::read_to_string(&path) {
            Ok(s) => match serde_json::from_str(&s) {
                Ok(settings) => {
                    debug!(path = %path.display(), "Settings loaded");
                    settings
                }
                Err(e) => {
                    warn!(error = %e, "Failed to parse settings, using defaults");
                    Self::default()
                }
            },
            Err(_) => {
                debug!("No settings file found, using defaults");
                Self::default()
            }
        }
    }

    pub fn save(&self, data_dir: &Path) {
        let path = data_dir.join(SETTINGS_FILE);
        match serde_json::to_string_pretty(self) {
            Ok(json) => {
                if let Err(e) = std::fs::write(&path, json) {
                    warn!(error = %e, "Failed to save settings");
                }
            }
            Err(e) => warn!(error = %e, "Failed to serialize settings"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_wire_both_buttons_to_the_count_label() {
        let settings = Settings::default();
        let ids: Vec<_> = settings.layout.buttons.iter().map(|b| b.id.clone()).collect();
        assert_eq!(ids, settings.bindings.triggers);
        assert_eq!(settings.layout.display, settings.bindings.display);
    }

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(Settings::load(dir.path()), Settings::default());
    }

    #[test]
    fn unparseable_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(SETTINGS_FILE), "{ not json").unwrap();
        assert_eq!(Settings::load(dir.path()), Settings::default());
    }

    #[test]
    fn partial_file_fills_in_defaults() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(SETTINGS_FILE), r#"{ "window_w": 640.0 }"#).unwrap();

        let settings = Settings::load(dir.path());
        assert_eq!(settings.window_w, Some(640.0));
        assert_eq!(settings.window_h, None);
        assert_eq!(settings.layout, LayoutSettings::default());
        assert_eq!(settings.bindings, BindingSettings::default());
    }

    #[test]
    fn save_then_load_keeps_custom_bindings() {
        let dir = tempfile::tempdir().unwrap();
        let mut settings = Settings::default();
        settings.window_x = Some(10.0);
        settings.bindings.triggers = vec![ElementId::new("blue")];
        settings.save(dir.path());

        assert_eq!(Settings::load(dir.path()), settings);
    }

    #[test]
    fn element_ids_serialize_as_plain_strings() {
        let json = serde_json::to_value(BindingSettings::default()).unwrap();
        assert_eq!(json["triggers"], serde_json::json!(["red", "blue"]));
        assert_eq!(json["display"], "count");
    }
}
