//! Wires trigger sources to the counter and mirrors the count into a display
//!
//! The binder only sees the [`Surface`] trait, so it knows nothing about egui.
//! Every event from a wired trigger performs one increment followed by one
//! display update, in that order.

use crate::counter::Counter;
use crate::settings::BindingSettings;
use crate::types::{Dispatch, ElementId, TriggerEvent};
use std::collections::BTreeMap;
use thiserror::Error;
use tracing::{debug, info};

/// Elements the binder can be wired against
pub trait Surface {
    fn has_trigger(&self, id: &ElementId) -> bool;
    fn has_display(&self, id: &ElementId) -> bool;
    fn write_display(&mut self, id: &ElementId, text: &str);
}

/// Setup failures. All of them are fatal at startup.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WiringError {
    #[error("trigger source `{0}` not found")]
    MissingTrigger(ElementId),
    #[error("display target `{0}` not found")]
    MissingDisplay(ElementId),
    #[error("element id `{0}` is used more than once")]
    DuplicateElement(ElementId),
    #[error("no trigger sources configured")]
    NoTriggers,
}

pub struct Binder {
    counter: Counter,
    // activations per wired trigger
    tallies: BTreeMap<ElementId, u64>,
    display: ElementId,
}

impl Binder {
    /// Validate the bindings against `surface` and show the initial count.
    pub fn wire<S: Surface>(
        counter: Counter,
        surface: &mut S,
        bindings: &BindingSettings,
    ) -> Result<Self, WiringError> {
        if bindings.triggers.is_empty() {
            return Err(WiringError::NoTriggers);
        }

        let mut tallies = BTreeMap::new();
        for id in &bindings.triggers {
            if !surface.has_trigger(id) {
                return Err(WiringError::MissingTrigger(id.clone()));
            }
            tallies.insert(id.clone(), 0);
        }

        if !surface.has_display(&bindings.display) {
            return Err(WiringError::MissingDisplay(bindings.display.clone()));
        }

        let binder = Self { counter, tallies, display: bindings.display.clone() };
        binder.refresh(surface);
        info!(
            triggers = binder.tallies.len(),
            display = %binder.display,
            "Counter wired"
        );
        Ok(binder)
    }

    /// Handle one trigger event.
    pub fn dispatch<S: Surface>(&mut self, surface: &mut S, event: &TriggerEvent) -> Dispatch {
        let Some(tally) = self.tallies.get_mut(&event.source) else {
            debug!(source = %event.source, "Ignoring event from unwired source");
            return Dispatch::Ignored;
        };
        *tally = tally.saturating_add(1);

        self.counter.increment();
        self.refresh(surface);

        let count = self.counter.get_count();
        debug!(source = %event.source, origin = ?event.origin, count, "Trigger handled");
        Dispatch::Handled(count)
    }

    /// Handle events in order, returning how many were from wired triggers.
    pub fn dispatch_all<S, I>(&mut self, surface: &mut S, events: I) -> usize
    where
        S: Surface,
        I: IntoIterator<Item = TriggerEvent>,
    {
        events
            .into_iter()
            .filter(|event| matches!(self.dispatch(surface, event), Dispatch::Handled(_)))
            .count()
    }

    pub fn count(&self) -> u64 {
        self.counter.get_count()
    }

    /// Activations seen from one trigger, `None` if it isn't wired.
    pub fn tally(&self, id: &ElementId) -> Option<u64> {
        self.tallies.get(id).copied()
    }

    pub fn triggers(&self) -> impl Iterator<Item = &ElementId> {
        self.tallies.keys()
    }

    fn refresh<S: Surface>(&self, surface: &mut S) {
        surface.write_display(&self.display, &self.counter.get_count().to_string());
    }
}
