//! # HTTP Request Commands
//!
//! Commands for executing HTTP requests

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};

use super::{Command, CommandContext, CommandEvent};

/// Send the selected method to the typed URL (Enter). Global.
pub struct SendRequestCommand;

impl Command for SendRequestCommand {
    fn is_relevant(&self, _context: &CommandContext, event: &KeyEvent) -> bool {
        matches!(event.code, KeyCode::Enter)
    }

    fn execute(&self, _event: KeyEvent, context: &CommandContext) -> Result<Vec<CommandEvent>> {
        if context.state.request_in_flight {
            tracing::debug!("Sending while a request is in flight; the older one will be superseded");
        }
        Ok(vec![CommandEvent::HttpRequestRequested])
    }

    fn name(&self) -> &'static str {
        "SendRequest"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repl::commands::ViewModelSnapshot;
    use crate::repl::events::Pane;
    use crossterm::event::KeyModifiers;

    fn create_test_key_event(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::empty())
    }

    #[test]
    fn send_request_should_be_relevant_for_enter_in_both_panels() {
        let cmd = SendRequestCommand;
        for focused_pane in [Pane::Methods, Pane::Response] {
            let context = CommandContext::new(ViewModelSnapshot {
                focused_pane,
                ..ViewModelSnapshot::default()
            });
            assert!(cmd.is_relevant(&context, &create_test_key_event(KeyCode::Enter)));
        }
    }

    #[test]
    fn send_request_should_not_be_relevant_for_other_keys() {
        let context = CommandContext::new(ViewModelSnapshot::default());
        assert!(!SendRequestCommand.is_relevant(&context, &create_test_key_event(KeyCode::Char('s'))));
    }

    #[test]
    fn send_request_should_fire_even_while_in_flight() {
        let context = CommandContext::new(ViewModelSnapshot {
            request_in_flight: true,
            ..ViewModelSnapshot::default()
        });
        let events = SendRequestCommand
            .execute(create_test_key_event(KeyCode::Enter), &context)
            .unwrap();
        assert_eq!(events, vec![CommandEvent::HttpRequestRequested]);
    }
}
