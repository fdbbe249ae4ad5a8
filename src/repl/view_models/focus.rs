//! # Focus Manager
//!
//! Two-state machine deciding which panel receives directional and scroll
//! keys. Only the explicit move-left/move-right transitions change it.

use crate::repl::events::Pane;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FocusManager {
    panel: Pane,
}

impl FocusManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Panel currently receiving directional keys
    pub fn focused(&self) -> Pane {
        self.panel
    }

    /// Methods to Response. Returns true when focus changed.
    pub fn move_right(&mut self) -> bool {
        self.transition(Pane::Methods, Pane::Response)
    }

    /// Response to Methods. Returns true when focus changed.
    pub fn move_left(&mut self) -> bool {
        self.transition(Pane::Response, Pane::Methods)
    }

    fn transition(&mut self, from: Pane, to: Pane) -> bool {
        if self.panel != from {
            return false;
        }
        tracing::debug!("Focus moved from {:?} to {:?}", from, to);
        self.panel = to;
        true
    }
}
