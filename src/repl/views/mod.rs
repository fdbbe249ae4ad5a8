//! # Views Module
//!
//! Frame composition, the style theme and the terminal renderer.

pub mod frame;
pub mod terminal_renderer;
pub mod theme;

// Re-export main types for convenience
pub use frame::{compose_frame, Frame, FrameLine, Span};
pub use terminal_renderer::{TerminalRenderer, ViewRenderer};
pub use theme::{SpanStyle, Theme};
