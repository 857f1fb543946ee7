//! dropdeck-mocks - seed data for the drop-zone demo
//!
//! Provides the fixture records shown on first load, so an otherwise
//! empty demo has something to render. Nothing here is persisted.

mod seed_data;

pub use seed_data::{load_seed_files, SeedError};
