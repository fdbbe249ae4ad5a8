//! # Core Event Types
//!
//! Types shared between the event system, the view model and the views.

/// Which panel currently receives directional and scroll keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Pane {
    /// Method list and URL input (left)
    #[default]
    Methods,
    /// Response viewport (right)
    Response,
}

impl Pane {
    /// Human-readable name for the status footer
    pub fn label(self) -> &'static str {
        match self {
            Pane::Methods => "methods",
            Pane::Response => "response",
        }
    }
}

/// Viewport scroll operations reachable from the keyboard
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollAction {
    LineUp,
    LineDown,
    HalfPageUp,
    HalfPageDown,
    PageUp,
    PageDown,
    Top,
    Bottom,
}

/// Edits applied to the URL text field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextEdit {
    Insert(char),
    Backspace,
    Delete,
    CursorLeft,
    CursorRight,
    CursorStart,
    CursorEnd,
}
