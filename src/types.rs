//! Common types and data structures

use serde::{Deserialize, Serialize};
use std::fmt;

/// Stable identifier of a UI element (trigger button or display label)
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ElementId(String);

impl ElementId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }
}

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ElementId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

/// How a trigger was activated
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TriggerOrigin {
    Pointer,
    Keyboard,
}

/// One activation of a trigger source, produced by the view
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TriggerEvent {
    pub source: ElementId,
    pub origin: TriggerOrigin,
}

impl TriggerEvent {
    pub fn click(source: impl Into<ElementId>) -> Self {
        Self { source: source.into(), origin: TriggerOrigin::Pointer }
    }

    pub fn key(source: impl Into<ElementId>) -> Self {
        Self { source: source.into(), origin: TriggerOrigin::Keyboard }
    }
}

/// Outcome of dispatching a trigger event to the binder
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dispatch {
    /// Event came from a wired trigger; carries the new count
    Handled(u64),
    /// Event came from a source the binder is not wired to
    Ignored,
}
