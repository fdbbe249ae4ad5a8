//! Single-line text field model
//!
//! Owns the URL being edited: its characters, a cursor expressed as a
//! character index, the focus flag and the blink phase of the cursor.
//! Input beyond the character limit is dropped without signalling.

use crate::repl::utils::{char_display_width, display_width};

/// Editable single-line input
#[derive(Debug, Clone)]
pub struct TextField {
    value: Vec<char>,
    cursor: usize,
    focused: bool,
    placeholder: String,
    /// Zero means unlimited
    char_limit: usize,
    cursor_visible: bool,
}

impl TextField {
    /// Create an empty, unfocused field
    pub fn new(placeholder: impl Into<String>, char_limit: usize) -> Self {
        Self {
            value: Vec::new(),
            cursor: 0,
            focused: false,
            placeholder: placeholder.into(),
            char_limit,
            cursor_visible: true,
        }
    }

    /// Insert a character at the cursor.
    ///
    /// Returns false when the character was rejected, either because the
    /// limit is reached or because it is a control character.
    pub fn insert(&mut self, ch: char) -> bool {
        if ch.is_control() || self.is_full() {
            return false;
        }
        self.value.insert(self.cursor, ch);
        self.cursor += 1;
        self.cursor_visible = true;
        true
    }

    /// Delete the character before the cursor
    pub fn backspace(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        self.cursor -= 1;
        self.value.remove(self.cursor);
        self.cursor_visible = true;
        true
    }

    /// Delete the character under the cursor
    pub fn delete(&mut self) -> bool {
        if self.cursor >= self.value.len() {
            return false;
        }
        self.value.remove(self.cursor);
        self.cursor_visible = true;
        true
    }

    /// Move the cursor by `delta` characters, clamped to the value
    pub fn move_cursor(&mut self, delta: isize) {
        let target = self.cursor as isize + delta;
        self.cursor = target.clamp(0, self.value.len() as isize) as usize;
        self.cursor_visible = true;
    }

    pub fn cursor_start(&mut self) {
        self.cursor = 0;
        self.cursor_visible = true;
    }

    pub fn cursor_end(&mut self) {
        self.cursor = self.value.len();
        self.cursor_visible = true;
    }

    /// Replace the whole value, keeping only what fits in the limit
    pub fn set_value(&mut self, text: &str) {
        self.value = text
            .chars()
            .filter(|ch| !ch.is_control())
            .take(self.effective_limit())
            .collect();
        self.cursor = self.value.len();
    }

    pub fn focus(&mut self) {
        self.focused = true;
        self.cursor_visible = true;
    }

    pub fn blur(&mut self) {
        self.focused = false;
    }

    /// Advance the blink phase. Only a focused field blinks.
    pub fn blink(&mut self) {
        if self.focused {
            self.cursor_visible = !self.cursor_visible;
        }
    }

    pub fn value(&self) -> String {
        self.value.iter().collect()
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn placeholder(&self) -> &str {
        &self.placeholder
    }

    pub fn cursor_visible(&self) -> bool {
        self.focused && self.cursor_visible
    }

    /// Slice of the value that fits in `width` columns with the cursor kept
    /// on screen.
    ///
    /// Returns the visible text and the cursor column inside it. One column
    /// is reserved so the cursor can sit after the last character.
    pub fn visible_window(&self, width: usize) -> (String, usize) {
        if width == 0 {
            return (String::new(), 0);
        }
        let text_width = width - 1;

        // Walk left from the cursor until the window is full
        let mut start = self.cursor;
        let mut used = 0;
        while start > 0 {
            let ch_width = char_display_width(self.value[start - 1]);
            if used + ch_width > text_width {
                break;
            }
            used += ch_width;
            start -= 1;
        }

        let cursor_col = used;
        let mut visible: String = self.value[start..self.cursor].iter().collect();
        for &ch in &self.value[self.cursor..] {
            let ch_width = char_display_width(ch);
            if used + ch_width > text_width {
                break;
            }
            used += ch_width;
            visible.push(ch);
        }

        debug_assert!(display_width(&visible) <= text_width);
        (visible, cursor_col)
    }

    fn effective_limit(&self) -> usize {
        if self.char_limit == 0 {
            usize::MAX
        } else {
            self.char_limit
        }
    }

    fn is_full(&self) -> bool {
        self.value.len() >= self.effective_limit()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn field_with(text: &str) -> TextField {
        let mut field = TextField::new("placeholder", 0);
        field.set_value(text);
        field
    }

    #[test]
    fn text_field_should_start_empty_and_blurred() {
        let field = TextField::new("Enter URL", 10);
        assert_eq!(field.value(), "");
        assert!(!field.is_focused());
        assert_eq!(field.cursor(), 0);
        assert_eq!(field.placeholder(), "Enter URL");
    }

    #[test]
    fn insert_should_append_at_cursor() {
        let mut field = TextField::new("", 0);
        for ch in "abc".chars() {
            assert!(field.insert(ch));
        }
        assert_eq!(field.value(), "abc");
        assert_eq!(field.cursor(), 3);
    }

    #[test]
    fn insert_should_place_character_in_middle() {
        let mut field = field_with("ac");
        field.move_cursor(-1);
        field.insert('b');
        assert_eq!(field.value(), "abc");
        assert_eq!(field.cursor(), 2);
    }

    #[test]
    fn insert_beyond_limit_should_be_silently_rejected() {
        let mut field = TextField::new("", 3);
        for ch in "abcdef".chars() {
            field.insert(ch);
        }
        assert_eq!(field.value(), "abc");
        assert_eq!(field.cursor(), 3);
        assert!(!field.insert('x'));
    }

    #[test]
    fn insert_should_reject_control_characters() {
        let mut field = TextField::new("", 0);
        assert!(!field.insert('\n'));
        assert!(field.is_empty());
    }

    #[test]
    fn backspace_should_remove_previous_character() {
        let mut field = field_with("abc");
        assert!(field.backspace());
        assert_eq!(field.value(), "ab");
        assert_eq!(field.cursor(), 2);
    }

    #[test]
    fn backspace_at_start_should_do_nothing() {
        let mut field = field_with("abc");
        field.cursor_start();
        assert!(!field.backspace());
        assert_eq!(field.value(), "abc");
    }

    #[test]
    fn delete_should_remove_character_under_cursor() {
        let mut field = field_with("abc");
        field.cursor_start();
        assert!(field.delete());
        assert_eq!(field.value(), "bc");
        field.cursor_end();
        assert!(!field.delete());
    }

    #[test]
    fn move_cursor_should_clamp_to_bounds() {
        let mut field = field_with("abc");
        field.move_cursor(-10);
        assert_eq!(field.cursor(), 0);
        field.move_cursor(10);
        assert_eq!(field.cursor(), 3);
        field.move_cursor(-1);
        assert_eq!(field.cursor(), 2);
    }

    #[test]
    fn set_value_should_respect_limit() {
        let mut field = TextField::new("", 4);
        field.set_value("example.com");
        assert_eq!(field.value(), "exam");
        assert_eq!(field.cursor(), 4);
    }

    #[test]
    fn focus_and_blur_should_toggle_flag() {
        let mut field = TextField::new("", 0);
        field.focus();
        assert!(field.is_focused());
        field.blur();
        assert!(!field.is_focused());
    }

    #[test]
    fn blink_should_only_toggle_when_focused() {
        let mut field = TextField::new("", 0);
        field.blink();
        assert!(!field.cursor_visible());

        field.focus();
        assert!(field.cursor_visible());
        field.blink();
        assert!(!field.cursor_visible());
        field.blink();
        assert!(field.cursor_visible());
    }

    #[test]
    fn editing_should_make_cursor_visible_again() {
        let mut field = TextField::new("", 0);
        field.focus();
        field.blink();
        assert!(!field.cursor_visible());
        field.insert('a');
        assert!(field.cursor_visible());
    }

    #[test]
    fn visible_window_should_show_whole_short_value() {
        let field = field_with("abc");
        assert_eq!(field.visible_window(10), ("abc".to_string(), 3));
    }

    #[test]
    fn visible_window_should_follow_cursor_at_end() {
        let field = field_with("abcdefghij");
        let (text, col) = field.visible_window(5);
        assert_eq!(text, "ghij");
        assert_eq!(col, 4);
    }

    #[test]
    fn visible_window_should_show_text_after_cursor() {
        let mut field = field_with("abcdefghij");
        field.cursor_start();
        let (text, col) = field.visible_window(5);
        assert_eq!(text, "abcd");
        assert_eq!(col, 0);
    }

    #[test]
    fn visible_window_with_zero_width_is_empty() {
        let field = field_with("abc");
        assert_eq!(field.visible_window(0), (String::new(), 0));
    }
}
