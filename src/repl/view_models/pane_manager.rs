//! # Pane Management
//!
//! Focus transitions and the keyboard-driven state changes inside each
//! panel: method selection, viewport scrolling and URL editing.

use crate::repl::events::{ScrollAction, TextEdit};
use crate::repl::view_models::core::ViewModel;

impl ViewModel {
    /// Move focus to the methods panel. Leaving the response panel also
    /// blurs the URL field.
    pub fn switch_to_methods_panel(&mut self) -> bool {
        if !self.focus.move_left() {
            return false;
        }
        self.url_field.blur();
        true
    }

    /// Move focus to the response panel. The URL field keeps its focus.
    pub fn switch_to_response_panel(&mut self) -> bool {
        self.focus.move_right()
    }

    /// Focus the URL field if blurred, blur it otherwise
    pub fn toggle_url_focus(&mut self) {
        if self.url_field.is_focused() {
            self.url_field.blur();
        } else {
            self.url_field.focus();
        }
        tracing::debug!("URL field focused: {}", self.url_field.is_focused());
    }

    pub fn move_method_up(&mut self) -> bool {
        self.methods.move_up()
    }

    pub fn move_method_down(&mut self) -> bool {
        self.methods.move_down()
    }

    pub fn scroll_response(&mut self, action: ScrollAction) {
        let viewport = &mut self.response_viewport;
        match action {
            ScrollAction::LineUp => viewport.line_up(1),
            ScrollAction::LineDown => viewport.line_down(1),
            ScrollAction::HalfPageUp => viewport.half_page_up(),
            ScrollAction::HalfPageDown => viewport.half_page_down(),
            ScrollAction::PageUp => viewport.page_up(),
            ScrollAction::PageDown => viewport.page_down(),
            ScrollAction::Top => viewport.goto_top(),
            ScrollAction::Bottom => viewport.goto_bottom(),
        }
    }

    /// Apply an edit to the URL field. A blurred field ignores input.
    pub fn edit_url(&mut self, edit: TextEdit) -> bool {
        if !self.url_field.is_focused() {
            return false;
        }
        let field = &mut self.url_field;
        match edit {
            TextEdit::Insert(ch) => field.insert(ch),
            TextEdit::Backspace => field.backspace(),
            TextEdit::Delete => field.delete(),
            TextEdit::CursorLeft => {
                field.move_cursor(-1);
                true
            }
            TextEdit::CursorRight => {
                field.move_cursor(1);
                true
            }
            TextEdit::CursorStart => {
                field.cursor_start();
                true
            }
            TextEdit::CursorEnd => {
                field.cursor_end();
                true
            }
        }
    }
}
