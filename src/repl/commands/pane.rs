//! # Pane Management Commands
//!
//! Commands for moving focus between the methods panel and the response panel

use crate::repl::events::Pane;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::{Command, CommandContext, CommandEvent};

/// Focus the methods panel (Alt+Left or Alt+h)
pub struct SwitchToMethodsPanelCommand;

impl Command for SwitchToMethodsPanelCommand {
    fn is_relevant(&self, _context: &CommandContext, event: &KeyEvent) -> bool {
        matches!(event.code, KeyCode::Left | KeyCode::Char('h'))
            && event.modifiers.contains(KeyModifiers::ALT)
    }

    fn execute(&self, _event: KeyEvent, context: &CommandContext) -> Result<Vec<CommandEvent>> {
        if context.state.focused_pane != Pane::Response {
            return Ok(vec![CommandEvent::NoAction]);
        }
        Ok(vec![CommandEvent::pane_switch(Pane::Methods)])
    }

    fn name(&self) -> &'static str {
        "SwitchToMethodsPanel"
    }
}

/// Focus the response panel (Alt+Right or Alt+l)
pub struct SwitchToResponsePanelCommand;

impl Command for SwitchToResponsePanelCommand {
    fn is_relevant(&self, _context: &CommandContext, event: &KeyEvent) -> bool {
        matches!(event.code, KeyCode::Right | KeyCode::Char('l'))
            && event.modifiers.contains(KeyModifiers::ALT)
    }

    fn execute(&self, _event: KeyEvent, context: &CommandContext) -> Result<Vec<CommandEvent>> {
        if context.state.focused_pane != Pane::Methods {
            return Ok(vec![CommandEvent::NoAction]);
        }
        Ok(vec![CommandEvent::pane_switch(Pane::Response)])
    }

    fn name(&self) -> &'static str {
        "SwitchToResponsePanel"
    }
}
