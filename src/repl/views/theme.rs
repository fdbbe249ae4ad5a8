//! # Theme
//!
//! Immutable style table built once at startup and handed to the renderer.
//! Frame composition only names a [`SpanStyle`]; the theme decides what it
//! looks like.

use crossterm::style::{Attribute, Color, ContentStyle};

/// Semantic style of a run of text in a frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SpanStyle {
    #[default]
    Plain,
    /// Border of the panel holding focus
    FocusedBorder,
    /// Border of the other panel
    BlurredBorder,
    /// Panel titles
    Title,
    /// Highlighted method
    Selected,
    /// Placeholder, hints and other secondary text
    Muted,
    /// Failed request output
    Error,
    /// Cell under the text cursor
    Cursor,
    /// Top header row
    Header,
    /// Bottom status row
    Footer,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    plain: ContentStyle,
    focused_border: ContentStyle,
    blurred_border: ContentStyle,
    title: ContentStyle,
    selected: ContentStyle,
    muted: ContentStyle,
    error: ContentStyle,
    cursor: ContentStyle,
    header: ContentStyle,
    footer: ContentStyle,
}

fn styled(foreground: Option<Color>, attributes: &[Attribute]) -> ContentStyle {
    let mut style = ContentStyle::new();
    style.foreground_color = foreground;
    for attribute in attributes {
        style.attributes.set(*attribute);
    }
    style
}

impl Theme {
    /// Colour theme used on real terminals
    pub fn new() -> Self {
        Self {
            plain: ContentStyle::new(),
            focused_border: styled(Some(Color::Magenta), &[]),
            blurred_border: styled(Some(Color::DarkGrey), &[]),
            title: styled(Some(Color::Cyan), &[Attribute::Bold]),
            selected: styled(Some(Color::Magenta), &[Attribute::Bold]),
            muted: styled(Some(Color::DarkGrey), &[]),
            error: styled(Some(Color::Red), &[]),
            cursor: styled(None, &[Attribute::Reverse]),
            header: styled(Some(Color::White), &[Attribute::Bold]),
            footer: styled(Some(Color::DarkGrey), &[]),
        }
    }

    /// No colours or attributes at all
    pub fn monochrome() -> Self {
        let plain = ContentStyle::new();
        Self {
            plain,
            focused_border: plain,
            blurred_border: plain,
            title: plain,
            selected: plain,
            muted: plain,
            error: plain,
            cursor: styled(None, &[Attribute::Reverse]),
            header: plain,
            footer: plain,
        }
    }

    pub fn style(&self, span_style: SpanStyle) -> ContentStyle {
        match span_style {
            SpanStyle::Plain => self.plain,
            SpanStyle::FocusedBorder => self.focused_border,
            SpanStyle::BlurredBorder => self.blurred_border,
            SpanStyle::Title => self.title,
            SpanStyle::Selected => self.selected,
            SpanStyle::Muted => self.muted,
            SpanStyle::Error => self.error,
            SpanStyle::Cursor => self.cursor,
            SpanStyle::Header => self.header,
            SpanStyle::Footer => self.footer,
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::new()
    }
}
