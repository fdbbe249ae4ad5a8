//! # Controllers Module
//!
//! The application controller and its event loop.

pub mod app_controller;

// Re-export main types for convenience
pub use app_controller::AppController;
