//! # Utils Module
//!
//! Contains utility functions and helpers used across the REPL.

pub mod display_width;

// Re-export main functions for convenience
pub use display_width::{
    char_display_width, display_width, fit_to_width, sanitize_line, truncate_to_width,
};
