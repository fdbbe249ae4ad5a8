//! # Command Context
//!
//! Read-only view of the state handed to commands.

use crate::repl::events::Pane;
use crate::repl::view_models::ViewModel;

/// Read-only snapshot of ViewModel state for commands
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewModelSnapshot {
    pub focused_pane: Pane,
    pub url_focused: bool,
    pub request_in_flight: bool,
}

impl ViewModelSnapshot {
    /// Create snapshot from current ViewModel state
    pub fn from_view_model(view_model: &ViewModel) -> Self {
        Self {
            focused_pane: view_model.focused_pane(),
            url_focused: view_model.url_field().is_focused(),
            request_in_flight: view_model.is_request_in_flight(),
        }
    }
}

/// Context available to all commands
#[derive(Debug, Clone)]
pub struct CommandContext {
    pub state: ViewModelSnapshot,
}

impl CommandContext {
    pub fn new(state: ViewModelSnapshot) -> Self {
        Self { state }
    }

    pub fn from_view_model(view_model: &ViewModel) -> Self {
        Self::new(ViewModelSnapshot::from_view_model(view_model))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snapshot_should_mirror_view_model() {
        let mut vm = ViewModel::with_initial_request(Some("example.com"), "DELETE").unwrap();
        vm.update_terminal_size(80, 24);
        vm.switch_to_response_panel();

        let snapshot = ViewModelSnapshot::from_view_model(&vm);
        assert_eq!(snapshot.focused_pane, Pane::Response);
        assert!(snapshot.url_focused);
        assert!(!snapshot.request_in_flight);

        vm.begin_request();
        assert!(ViewModelSnapshot::from_view_model(&vm).request_in_flight);
    }
}
