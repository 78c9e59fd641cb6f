//! UI module - contains UI rendering components
//!
//! `surface` holds the element state the binder writes into,
//! `components` paints it.

pub mod components;
pub mod surface;
