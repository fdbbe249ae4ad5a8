//! # ViewModel Module
//!
//! The application state aggregate, split by concern. Every mutation goes
//! through a method here; the controller calls them in response to command
//! events and request completions.

mod core;
pub mod focus;
mod http_manager;
mod pane_manager;


// Re-export the main ViewModel
pub use core::ViewModel;
pub use focus::FocusManager;
