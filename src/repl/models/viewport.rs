//! Scrollable viewport model
//!
//! Holds a block of text split into lines and a vertical offset into it.
//! The offset always satisfies `0 <= y_offset <= max(0, lines - height)`;
//! every mutating operation re-clamps before returning.

use crate::repl::utils::{fit_to_width, sanitize_line};

#[derive(Debug, Clone, Default)]
pub struct Viewport {
    width: usize,
    height: usize,
    y_offset: usize,
    lines: Vec<String>,
}

impl Viewport {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            y_offset: 0,
            lines: Vec::new(),
        }
    }

    /// Replace the displayed content.
    ///
    /// The offset is kept when the new content is long enough to support it
    /// and pulled back to the last page otherwise.
    pub fn set_content(&mut self, text: &str) {
        self.lines = text.lines().map(sanitize_line).collect();
        if self.y_offset > self.max_y_offset() {
            self.goto_bottom();
        }
    }

    /// Change geometry and re-clamp the offset
    pub fn resize(&mut self, width: usize, height: usize) {
        self.width = width;
        self.height = height;
        self.clamp_offset();
    }

    pub fn line_up(&mut self, n: usize) {
        self.y_offset = self.y_offset.saturating_sub(n);
    }

    pub fn line_down(&mut self, n: usize) {
        self.y_offset = self.y_offset.saturating_add(n);
        self.clamp_offset();
    }

    pub fn half_page_up(&mut self) {
        self.line_up(self.half_page());
    }

    pub fn half_page_down(&mut self) {
        self.line_down(self.half_page());
    }

    pub fn page_up(&mut self) {
        self.line_up(self.height.max(1));
    }

    pub fn page_down(&mut self) {
        self.line_down(self.height.max(1));
    }

    pub fn goto_top(&mut self) {
        self.y_offset = 0;
    }

    pub fn goto_bottom(&mut self) {
        self.y_offset = self.max_y_offset();
    }

    /// Largest offset that still fills the viewport
    pub fn max_y_offset(&self) -> usize {
        self.lines.len().saturating_sub(self.height)
    }

    pub fn y_offset(&self) -> usize {
        self.y_offset
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn total_line_count(&self) -> usize {
        self.lines.len()
    }

    pub fn at_top(&self) -> bool {
        self.y_offset == 0
    }

    pub fn at_bottom(&self) -> bool {
        self.y_offset >= self.max_y_offset()
    }

    /// Fraction of the content scrolled past, from 0.0 to 1.0
    pub fn scroll_percent(&self) -> f64 {
        let max = self.max_y_offset();
        if max == 0 {
            return 1.0;
        }
        (self.y_offset as f64 / max as f64).clamp(0.0, 1.0)
    }

    /// Exactly `height` lines, each exactly `width` columns wide.
    ///
    /// Rows past the end of the content are blank.
    pub fn visible_lines(&self) -> Vec<String> {
        (0..self.height)
            .map(|row| {
                let line = self
                    .lines
                    .get(self.y_offset + row)
                    .map(String::as_str)
                    .unwrap_or("");
                fit_to_width(line, self.width)
            })
            .collect()
    }

    fn half_page(&self) -> usize {
        (self.height / 2).max(1)
    }

    fn clamp_offset(&mut self) {
        self.y_offset = self.y_offset.min(self.max_y_offset());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn numbered_lines(count: usize) -> String {
        (1..=count)
            .map(|n| format!("line {n}"))
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn viewport_with(lines: usize, height: usize) -> Viewport {
        let mut viewport = Viewport::new(20, height);
        viewport.set_content(&numbered_lines(lines));
        viewport
    }

    #[test]
    fn viewport_should_start_at_top() {
        let viewport = viewport_with(50, 10);
        assert_eq!(viewport.y_offset(), 0);
        assert_eq!(viewport.total_line_count(), 50);
        assert_eq!(viewport.max_y_offset(), 40);
    }

    #[test]
    fn line_down_should_clamp_to_max_offset() {
        let mut viewport = viewport_with(15, 10);
        viewport.line_down(3);
        assert_eq!(viewport.y_offset(), 3);
        viewport.line_down(100);
        assert_eq!(viewport.y_offset(), 5);
        assert!(viewport.at_bottom());
    }

    #[test]
    fn line_up_should_clamp_to_zero() {
        let mut viewport = viewport_with(15, 10);
        viewport.line_down(2);
        viewport.line_up(5);
        assert_eq!(viewport.y_offset(), 0);
        assert!(viewport.at_top());
    }

    #[test]
    fn short_content_should_never_scroll() {
        let mut viewport = viewport_with(3, 10);
        viewport.line_down(1);
        viewport.half_page_down();
        viewport.page_down();
        viewport.goto_bottom();
        assert_eq!(viewport.y_offset(), 0);
    }

    #[test]
    fn half_page_should_move_by_half_height() {
        let mut viewport = viewport_with(100, 10);
        viewport.half_page_down();
        assert_eq!(viewport.y_offset(), 5);
        viewport.half_page_down();
        assert_eq!(viewport.y_offset(), 10);
        viewport.half_page_up();
        assert_eq!(viewport.y_offset(), 5);
    }

    #[test]
    fn page_down_should_move_by_full_height() {
        let mut viewport = viewport_with(100, 10);
        viewport.page_down();
        assert_eq!(viewport.y_offset(), 10);
        viewport.page_up();
        assert_eq!(viewport.y_offset(), 0);
    }

    #[test]
    fn goto_top_and_bottom_should_jump_to_ends() {
        let mut viewport = viewport_with(30, 10);
        viewport.goto_bottom();
        assert_eq!(viewport.y_offset(), 20);
        viewport.goto_top();
        assert_eq!(viewport.y_offset(), 0);
    }

    #[test]
    fn offset_should_stay_within_bounds_for_mixed_sequence() {
        let mut viewport = viewport_with(37, 8);
        let ops: [fn(&mut Viewport); 8] = [
            |v| v.line_down(3),
            |v| v.page_down(),
            |v| v.half_page_down(),
            |v| v.line_up(1),
            |v| v.goto_bottom(),
            |v| v.line_down(9),
            |v| v.half_page_up(),
            |v| v.page_up(),
        ];
        for _ in 0..3 {
            for op in ops {
                op(&mut viewport);
                assert!(viewport.y_offset() <= viewport.max_y_offset());
            }
        }
    }

    #[test]
    fn set_content_shorter_than_offset_should_pull_back() {
        let mut viewport = viewport_with(100, 10);
        viewport.line_down(80);
        viewport.set_content(&numbered_lines(20));
        assert_eq!(viewport.y_offset(), 10);
        viewport.set_content("one line");
        assert_eq!(viewport.y_offset(), 0);
    }

    #[test]
    fn set_content_long_enough_should_keep_offset() {
        let mut viewport = viewport_with(100, 10);
        viewport.line_down(30);
        viewport.set_content(&numbered_lines(60));
        assert_eq!(viewport.y_offset(), 30);
    }

    #[test]
    fn resize_should_reclamp_offset() {
        let mut viewport = viewport_with(20, 5);
        viewport.goto_bottom();
        assert_eq!(viewport.y_offset(), 15);
        viewport.resize(20, 18);
        assert_eq!(viewport.y_offset(), 2);
        viewport.resize(20, 30);
        assert_eq!(viewport.y_offset(), 0);
    }

    #[test]
    fn visible_lines_should_be_exact_height_and_width() {
        let mut viewport = Viewport::new(6, 4);
        viewport.set_content("abcdefghij\nxy");
        let lines = viewport.visible_lines();
        assert_eq!(lines, vec!["abcdef", "xy    ", "      ", "      "]);
    }

    #[test]
    fn visible_lines_should_start_at_offset() {
        let mut viewport = viewport_with(10, 3);
        viewport.line_down(2);
        let lines = viewport.visible_lines();
        assert_eq!(lines[0].trim_end(), "line 3");
        assert_eq!(lines[2].trim_end(), "line 5");
    }

    #[test]
    fn scroll_percent_should_track_offset() {
        let mut viewport = viewport_with(30, 10);
        assert_eq!(viewport.scroll_percent(), 0.0);
        viewport.line_down(10);
        assert_eq!(viewport.scroll_percent(), 0.5);
        viewport.goto_bottom();
        assert_eq!(viewport.scroll_percent(), 1.0);
    }

    #[test]
    fn zero_sized_viewport_should_render_nothing() {
        let mut viewport = Viewport::default();
        viewport.set_content("text");
        assert!(viewport.visible_lines().is_empty());
        viewport.line_down(1);
        assert_eq!(viewport.y_offset(), 1);
    }
}
