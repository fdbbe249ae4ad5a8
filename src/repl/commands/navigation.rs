//! # Navigation Commands
//!
//! Directional keys are routed by panel focus: in the methods panel
//! up/down move the selection, in the response panel they and the paging
//! keys scroll the viewport.

use crate::repl::events::{Pane, ScrollAction};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::{Command, CommandContext, CommandEvent, SelectionDirection};

fn is_unmodified(event: &KeyEvent) -> bool {
    !event
        .modifiers
        .intersects(KeyModifiers::ALT | KeyModifiers::CONTROL)
}

/// Move the method selection (Up/Down in the methods panel)
pub struct SelectMethodCommand;

impl Command for SelectMethodCommand {
    fn is_relevant(&self, context: &CommandContext, event: &KeyEvent) -> bool {
        context.state.focused_pane == Pane::Methods
            && matches!(event.code, KeyCode::Up | KeyCode::Down)
            && is_unmodified(event)
    }

    fn execute(&self, event: KeyEvent, _context: &CommandContext) -> Result<Vec<CommandEvent>> {
        let direction = match event.code {
            KeyCode::Up => SelectionDirection::Up,
            _ => SelectionDirection::Down,
        };
        Ok(vec![CommandEvent::method_selection(direction)])
    }

    fn name(&self) -> &'static str {
        "SelectMethod"
    }
}

/// Scroll the response viewport (response panel only)
pub struct ScrollResponseCommand;

impl ScrollResponseCommand {
    fn action_for(event: &KeyEvent) -> Option<ScrollAction> {
        if event.modifiers.contains(KeyModifiers::CONTROL) {
            return match event.code {
                KeyCode::Char('u') => Some(ScrollAction::HalfPageUp),
                KeyCode::Char('d') => Some(ScrollAction::HalfPageDown),
                _ => None,
            };
        }
        if !is_unmodified(event) {
            return None;
        }
        match event.code {
            KeyCode::Up => Some(ScrollAction::LineUp),
            KeyCode::Down => Some(ScrollAction::LineDown),
            KeyCode::PageUp => Some(ScrollAction::PageUp),
            KeyCode::PageDown => Some(ScrollAction::PageDown),
            KeyCode::Home => Some(ScrollAction::Top),
            KeyCode::End => Some(ScrollAction::Bottom),
            _ => None,
        }
    }
}

impl Command for ScrollResponseCommand {
    fn is_relevant(&self, context: &CommandContext, event: &KeyEvent) -> bool {
        context.state.focused_pane == Pane::Response && Self::action_for(event).is_some()
    }

    fn execute(&self, event: KeyEvent, _context: &CommandContext) -> Result<Vec<CommandEvent>> {
        Ok(Self::action_for(&event)
            .map(CommandEvent::scroll)
            .into_iter()
            .collect())
    }

    fn name(&self) -> &'static str {
        "ScrollResponse"
    }
}
