//! mentio - a terminal comment composer with @mention autocomplete
//!
//! This library exposes modules for use in integration tests.

pub mod adapters;
pub mod app;
pub mod candidates;
pub mod config;
pub mod error;
pub mod events;
pub mod input;
pub mod mention;
pub mod models;
pub mod traits;
pub mod ui;
pub mod widgets;
