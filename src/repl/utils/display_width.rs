//! # Display Width Utilities
//!
//! Column-aware string helpers. Wide characters (CJK, emoji) occupy two
//! terminal columns, so every truncation and padding in the console goes
//! through these functions instead of counting chars or bytes.

use unicode_width::UnicodeWidthChar;

/// Number of spaces a tab expands to in displayed content
pub const TAB_WIDTH: usize = 4;

/// Display width of a single character in terminal columns
pub fn char_display_width(ch: char) -> usize {
    UnicodeWidthChar::width(ch).unwrap_or(0)
}

/// Display width of a string in terminal columns
pub fn display_width(text: &str) -> usize {
    text.chars().map(char_display_width).sum()
}

/// Cut `text` so it occupies at most `width` columns.
///
/// A wide character that would straddle the limit is dropped rather than
/// split.
pub fn truncate_to_width(text: &str, width: usize) -> String {
    let mut used = 0;
    let mut result = String::new();

    for ch in text.chars() {
        let ch_width = char_display_width(ch);
        if used + ch_width > width {
            break;
        }
        used += ch_width;
        result.push(ch);
    }

    result
}

/// Truncate or right-pad `text` with spaces to exactly `width` columns
pub fn fit_to_width(text: &str, width: usize) -> String {
    let mut fitted = truncate_to_width(text, width);
    let used = display_width(&fitted);
    fitted.extend(std::iter::repeat(' ').take(width - used));
    fitted
}

/// Make a line of response content safe to paint.
///
/// Tabs become spaces and other control characters (including stray ANSI
/// escape introducers) are dropped so the body cannot move the terminal
/// cursor or change colours.
pub fn sanitize_line(line: &str) -> String {
    let mut clean = String::with_capacity(line.len());
    for ch in line.chars() {
        match ch {
            '\t' => clean.extend(std::iter::repeat(' ').take(TAB_WIDTH)),
            c if c.is_control() => {}
            c => clean.push(c),
        }
    }
    clean
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_width_counts_wide_characters_twice() {
        assert_eq!(display_width("abc"), 3);
        assert_eq!(display_width("日本"), 4);
        assert_eq!(display_width(""), 0);
    }

    #[test]
    fn truncate_to_width_keeps_short_text() {
        assert_eq!(truncate_to_width("hello", 10), "hello");
    }

    #[test]
    fn truncate_to_width_cuts_long_text() {
        assert_eq!(truncate_to_width("hello world", 5), "hello");
    }

    #[test]
    fn truncate_to_width_drops_straddling_wide_char() {
        assert_eq!(truncate_to_width("a日本", 2), "a");
    }

    #[test]
    fn fit_to_width_pads_with_spaces() {
        assert_eq!(fit_to_width("ab", 5), "ab   ");
    }

    #[test]
    fn fit_to_width_pads_after_dropped_wide_char() {
        let fitted = fit_to_width("a日本", 4);
        assert_eq!(fitted, "a日 ");
        assert_eq!(display_width(&fitted), 4);
    }

    #[test]
    fn fit_to_width_zero_width_is_empty() {
        assert_eq!(fit_to_width("abc", 0), "");
    }

    #[test]
    fn sanitize_line_expands_tabs_and_strips_controls() {
        assert_eq!(sanitize_line("a\tb"), "a    b");
        assert_eq!(sanitize_line("\x1b[31mred\x1b[0m"), "[31mred[0m");
        assert_eq!(sanitize_line("line\r"), "line");
    }
}
