//! Store types for UI state management

pub mod share;

pub use share::*;
