//! dropdeck-ui - pure view components and stores for dropdeck
//!
//! Components are props-based and perform no I/O; the launcher owns the
//! store and wires platform events (file dialogs, drag-and-drop) into it.

pub mod components;
pub mod stores;

pub use components::*;
