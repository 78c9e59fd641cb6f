//! App module - contains the main application state and logic

mod views;

use crate::binder::{Binder, WiringError};
use crate::counter::Counter;
use crate::settings::Settings;
use crate::theme;
use crate::types::TriggerEvent;
use crate::ui::surface::CounterSurface;
use eframe::egui;
use std::path::PathBuf;
use tracing::{debug, error};

// ============================================================================
// APP STATE
// ============================================================================

pub struct App {
    pub(crate) binder: Binder,
    pub(crate) surface: CounterSurface,
    pub(crate) settings: Settings,
    pub(crate) window_pos: Option<egui::Pos2>,
    pub(crate) window_size: Option<egui::Vec2>,
    pub(crate) needs_center: bool,
    pub(crate) data_dir: PathBuf,
}

/// Build the window's elements and wire a fresh counter to them.
pub fn build_counter(settings: &Settings) -> Result<(CounterSurface, Binder), WiringError> {
    let mut surface = CounterSurface::from_layout(&settings.layout)?;
    let binder = Binder::wire(Counter::new(), &mut surface, &settings.bindings)?;
    Ok((surface, binder))
}

/// `build_counter` for startup: a wiring failure aborts before the window opens.
pub fn build_counter_or_abort(settings: &Settings) -> eframe::Result<(CounterSurface, Binder)> {
    build_counter(settings).map_err(|e| {
        error!(error = %e, "Failed to wire counter");
        eframe::Error::AppCreation(Box::new(e))
    })
}

// ============================================================================
// APP INITIALIZATION & HELPERS
// ============================================================================

impl App {
    pub fn new(
        cc: &eframe::CreationContext<'_>,
        surface: CounterSurface,
        binder: Binder,
        settings: Settings,
        data_dir: PathBuf,
    ) -> Self {
        // Force dark theme
        cc.egui_ctx.set_theme(egui::Theme::Dark);

        // Phosphor icons font
        let mut fonts = egui::FontDefinitions::default();
        egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);
        cc.egui_ctx.set_fonts(fonts);

        theme::apply_visuals(&cc.egui_ctx);

        Self {
            binder,
            surface,
            settings,
            window_pos: None,
            window_size: None,
            needs_center: false,
            data_dir,
        }
    }

    /// Dispatch this frame's trigger events, in order.
    pub(crate) fn handle_events(&mut self, events: Vec<TriggerEvent>) {
        let handled = self.binder.dispatch_all(&mut self.surface, events);
        debug!(handled, count = self.binder.count(), "Frame events dispatched");
    }

    pub fn save_settings(&self) {
        let settings = Settings {
            window_x: self.window_pos.map(|p| p.x),
            window_y: self.window_pos.map(|p| p.y),
            window_w: self.window_size.map(|s| s.x),
            window_h: self.window_size.map(|s| s.y),
            ..self.settings.clone()
        };
        settings.save(&self.data_dir);
    }
}
