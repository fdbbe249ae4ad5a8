//! # Editing Commands
//!
//! URL field focus toggling and text editing. Editing keys only apply while
//! the field is focused.

use crate::repl::events::TextEdit;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::{Command, CommandContext, CommandEvent};

/// Toggle URL field focus (Tab). Global.
pub struct ToggleUrlFocusCommand;

impl Command for ToggleUrlFocusCommand {
    fn is_relevant(&self, _context: &CommandContext, event: &KeyEvent) -> bool {
        matches!(event.code, KeyCode::Tab)
    }

    fn execute(&self, _event: KeyEvent, _context: &CommandContext) -> Result<Vec<CommandEvent>> {
        Ok(vec![CommandEvent::UrlFocusToggleRequested])
    }

    fn name(&self) -> &'static str {
        "ToggleUrlFocus"
    }
}

/// Edit the URL field with whatever key nothing else claimed
pub struct EditUrlCommand;

impl EditUrlCommand {
    fn edit_for(event: &KeyEvent) -> Option<TextEdit> {
        let modifiers = event.modifiers;

        if modifiers.contains(KeyModifiers::CONTROL) {
            return match event.code {
                KeyCode::Char('a') => Some(TextEdit::CursorStart),
                KeyCode::Char('e') => Some(TextEdit::CursorEnd),
                _ => None,
            };
        }
        if modifiers.contains(KeyModifiers::ALT) {
            return None;
        }

        match event.code {
            KeyCode::Char(ch) => Some(TextEdit::Insert(ch)),
            KeyCode::Backspace => Some(TextEdit::Backspace),
            KeyCode::Delete => Some(TextEdit::Delete),
            KeyCode::Left => Some(TextEdit::CursorLeft),
            KeyCode::Right => Some(TextEdit::CursorRight),
            KeyCode::Home => Some(TextEdit::CursorStart),
            KeyCode::End => Some(TextEdit::CursorEnd),
            _ => None,
        }
    }
}

impl Command for EditUrlCommand {
    fn is_relevant(&self, context: &CommandContext, event: &KeyEvent) -> bool {
        context.state.url_focused && Self::edit_for(event).is_some()
    }

    fn execute(&self, event: KeyEvent, _context: &CommandContext) -> Result<Vec<CommandEvent>> {
        Ok(Self::edit_for(&event)
            .map(CommandEvent::text_edit)
            .into_iter()
            .collect())
    }

    fn name(&self) -> &'static str {
        "EditUrl"
    }
}
