//! # Events Module
//!
//! Event types flowing into the application controller, plus the small
//! enums shared by commands and the view model.

pub mod app_events;
pub mod types;

// Re-export all types for easy access
pub use app_events::{AppEvent, DispatchCompletion, DispatchOutcome};
pub use types::{Pane, ScrollAction, TextEdit};
