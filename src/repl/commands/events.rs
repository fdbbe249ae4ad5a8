//! # Command Events
//!
//! Events produced by commands that describe what should happen.
//! Commands produce these events, and the controller applies them to the ViewModel.

use crate::repl::events::{Pane, ScrollAction, TextEdit};

/// Direction for method list movement
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionDirection {
    Up,
    Down,
}

/// Events that commands can produce to request changes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandEvent {
    /// Request to quit application
    QuitRequested,

    /// Request focus on another panel
    PaneSwitchRequested { target_pane: Pane },

    /// Move the method selection
    MethodSelectionRequested { direction: SelectionDirection },

    /// Scroll the response viewport
    ViewportScrollRequested { action: ScrollAction },

    /// Focus or blur the URL field
    UrlFocusToggleRequested,

    /// Edit the URL field
    TextEditRequested { edit: TextEdit },

    /// Send the current method and URL
    HttpRequestRequested,

    /// No action needed
    NoAction,
}

impl CommandEvent {
    /// Create a pane switch event
    pub fn pane_switch(target_pane: Pane) -> Self {
        Self::PaneSwitchRequested { target_pane }
    }

    pub fn method_selection(direction: SelectionDirection) -> Self {
        Self::MethodSelectionRequested { direction }
    }

    pub fn scroll(action: ScrollAction) -> Self {
        Self::ViewportScrollRequested { action }
    }

    pub fn text_edit(edit: TextEdit) -> Self {
        Self::TextEditRequested { edit }
    }
}
