//! # Frame Composition
//!
//! Turns the view model into a [`Frame`]: one styled line per terminal row.
//! Composition is pure, so everything about what ends up on screen can be
//! tested without a terminal.
//!
//! ```text
//!  reqpane  GET httpbin.org/get                      <- header row
//! ╭──────────────╮╭─────────────────────────────╮
//! │Methods       ││                             │
//! │              ││  Result · 200 OK · 132 ms   │
//! │> GET         ││                             │
//! │  POST        ││  {                          │
//! │  ...         ││    "ok": true               │
//! │URL           ││  }                          │
//! │> httpbin.org ││                             │
//! │              ││                       100%  │
//! │enter send ...││                             │
//! ╰──────────────╯╰─────────────────────────────╯
//!  methods panel · idle                              <- footer row
//! ```

use crate::config::{LOADING_TEXT, PANEL_PADDING_X, PANEL_PADDING_Y, RESULT_FOOTER_ROWS, RESULT_HEADER_ROWS};
use crate::repl::events::Pane;
use crate::repl::models::{ResponseState, TextField};
use crate::repl::utils::{char_display_width, display_width, truncate_to_width};
use crate::repl::view_models::ViewModel;
use crate::repl::views::theme::SpanStyle;

const HINT_TEXT: &str = "enter send · tab url · alt+←/→ panel · q quit";
const URL_PROMPT: &str = "> ";

/// A run of text sharing one style
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    pub text: String,
    pub style: SpanStyle,
}

impl Span {
    pub fn new(text: impl Into<String>, style: SpanStyle) -> Self {
        Self {
            text: text.into(),
            style,
        }
    }

    pub fn plain(text: impl Into<String>) -> Self {
        Self::new(text, SpanStyle::Plain)
    }

    pub fn width(&self) -> usize {
        display_width(&self.text)
    }
}

/// One terminal row
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrameLine {
    spans: Vec<Span>,
}

impl FrameLine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, span: Span) -> Self {
        self.spans.push(span);
        self
    }

    pub fn append(&mut self, other: FrameLine) {
        self.spans.extend(other.spans);
    }

    pub fn spans(&self) -> &[Span] {
        &self.spans
    }

    pub fn width(&self) -> usize {
        self.spans.iter().map(Span::width).sum()
    }

    pub fn plain_text(&self) -> String {
        self.spans.iter().map(|span| span.text.as_str()).collect()
    }

    /// Truncate or pad with spaces to exactly `width` columns
    pub fn fit(self, width: usize) -> Self {
        let mut remaining = width;
        let mut spans = Vec::with_capacity(self.spans.len() + 1);
        for span in self.spans {
            if remaining == 0 {
                break;
            }
            let text = truncate_to_width(&span.text, remaining);
            remaining -= display_width(&text);
            if !text.is_empty() {
                spans.push(Span::new(text, span.style));
            }
        }
        if remaining > 0 {
            spans.push(Span::plain(" ".repeat(remaining)));
        }
        Self { spans }
    }
}

impl From<Span> for FrameLine {
    fn from(span: Span) -> Self {
        Self { spans: vec![span] }
    }
}

/// A full screen worth of lines, top to bottom
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Frame {
    lines: Vec<FrameLine>,
}

impl Frame {
    pub fn lines(&self) -> &[FrameLine] {
        &self.lines
    }

    /// Frame text without styling, rows joined by newlines
    pub fn to_plain_text(&self) -> String {
        self.lines
            .iter()
            .map(FrameLine::plain_text)
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Compose the frame for the current state
pub fn compose_frame(view_model: &ViewModel) -> Frame {
    if !view_model.is_ready() {
        return Frame {
            lines: vec![FrameLine::from(Span::new(LOADING_TEXT, SpanStyle::Muted))],
        };
    }

    let (width, height) = view_model.terminal_size();
    let (width, height) = (width as usize, height as usize);
    let layout = view_model.layout();
    let focused = view_model.focused_pane();

    let left = boxed(
        methods_panel(view_model, layout.left.width, layout.left.height),
        layout.left.width,
        layout.left.height,
        focused == Pane::Methods,
    );
    let right = boxed(
        response_panel(view_model, layout.right.width, layout.right.height),
        layout.right.width,
        layout.right.height,
        focused == Pane::Response,
    );

    let mut lines = Vec::with_capacity(height);
    lines.push(header_line(view_model).fit(width));
    for (mut row, right_row) in left.into_iter().zip(right) {
        row.append(right_row);
        lines.push(row.fit(width));
    }
    lines.push(footer_line(view_model).fit(width));
    lines.truncate(height);

    Frame { lines }
}

fn header_line(view_model: &ViewModel) -> FrameLine {
    let url = view_model.url();
    let target = if url.is_empty() {
        view_model.url_field().placeholder().to_string()
    } else {
        url
    };
    FrameLine::new()
        .with(Span::new(" reqpane ", SpanStyle::Header))
        .with(Span::new(
            format!(" {} {}", view_model.selected_method(), target),
            SpanStyle::Muted,
        ))
}

fn footer_line(view_model: &ViewModel) -> FrameLine {
    let activity = if view_model.is_request_in_flight() {
        "request in flight"
    } else {
        "idle"
    };
    let url_state = if view_model.url_field().is_focused() {
        "url editing"
    } else {
        "url locked"
    };
    FrameLine::from(Span::new(
        format!(
            " {} panel · {} · {}",
            view_model.focused_pane().label(),
            url_state,
            activity
        ),
        SpanStyle::Footer,
    ))
}

/// Surround `content` with a rounded border. The result is
/// `inner_height + 2` rows of `inner_width + 2` columns.
fn boxed(
    content: Vec<FrameLine>,
    inner_width: usize,
    inner_height: usize,
    focused: bool,
) -> Vec<FrameLine> {
    let border = if focused {
        SpanStyle::FocusedBorder
    } else {
        SpanStyle::BlurredBorder
    };
    let horizontal = "─".repeat(inner_width);

    let mut rows = Vec::with_capacity(inner_height + 2);
    rows.push(FrameLine::from(Span::new(format!("╭{horizontal}╮"), border)));

    let mut content = content.into_iter();
    for _ in 0..inner_height {
        let mut row = FrameLine::from(Span::new("│", border));
        row.append(content.next().unwrap_or_default().fit(inner_width));
        rows.push(row.with(Span::new("│", border)));
    }

    rows.push(FrameLine::from(Span::new(format!("╰{horizontal}╯"), border)));
    rows
}

fn methods_panel(view_model: &ViewModel, width: usize, height: usize) -> Vec<FrameLine> {
    let mut lines = vec![
        FrameLine::from(Span::new("Methods", SpanStyle::Title)),
        FrameLine::new(),
    ];

    let selector = view_model.methods();
    for (index, method) in selector.methods().iter().enumerate() {
        let line = if index == selector.selected_index() {
            Span::new(format!("> {method}"), SpanStyle::Selected)
        } else {
            Span::plain(format!("  {method}"))
        };
        lines.push(line.into());
    }

    lines.push(FrameLine::new());
    lines.push(Span::new("URL", SpanStyle::Title).into());
    lines.push(url_line(view_model.url_field(), width));

    while lines.len() + 1 < height {
        lines.push(FrameLine::new());
    }
    lines.push(Span::new(HINT_TEXT, SpanStyle::Muted).into());
    lines
}

fn url_line(field: &TextField, width: usize) -> FrameLine {
    let prompt_style = if field.is_focused() {
        SpanStyle::Selected
    } else {
        SpanStyle::Muted
    };
    let line = FrameLine::from(Span::new(URL_PROMPT, prompt_style));
    let field_width = width.saturating_sub(URL_PROMPT.len());

    if field.is_empty() {
        return placeholder_spans(line, field);
    }

    let (visible, cursor_col) = field.visible_window(field_width);
    let (before, after) = split_at_column(&visible, cursor_col);
    let mut after = after.chars();
    let under_cursor = after.next().map_or(" ".to_string(), String::from);
    let cursor_style = if field.cursor_visible() {
        SpanStyle::Cursor
    } else {
        SpanStyle::Plain
    };

    line.with(Span::plain(before))
        .with(Span::new(under_cursor, cursor_style))
        .with(Span::plain(after.as_str()))
}

fn placeholder_spans(line: FrameLine, field: &TextField) -> FrameLine {
    let placeholder = field.placeholder();
    if !field.cursor_visible() {
        return line.with(Span::new(placeholder, SpanStyle::Muted));
    }
    let mut chars = placeholder.chars();
    let first = chars.next().map_or(" ".to_string(), String::from);
    line.with(Span::new(first, SpanStyle::Cursor))
        .with(Span::new(chars.as_str(), SpanStyle::Muted))
}

/// Split `text` at display column `column`
fn split_at_column(text: &str, column: usize) -> (&str, &str) {
    let mut used = 0;
    for (index, ch) in text.char_indices() {
        if used >= column {
            return text.split_at(index);
        }
        used += char_display_width(ch);
    }
    (text, "")
}

fn response_panel(view_model: &ViewModel, width: usize, height: usize) -> Vec<FrameLine> {
    let padding = " ".repeat(PANEL_PADDING_X);
    let padded = |span: Span| FrameLine::from(Span::plain(padding.as_str())).with(span);

    let mut lines = Vec::with_capacity(height);
    lines.extend((0..PANEL_PADDING_Y).map(|_| FrameLine::new()));

    let response = view_model.response();
    let mut title = padded(Span::new("Result", SpanStyle::Title));
    if let Some(summary) = response.summary() {
        let summary_style = match response.state() {
            ResponseState::Received { status, .. } if !status.is_success() => SpanStyle::Error,
            _ => SpanStyle::Muted,
        };
        title = title.with(Span::new(format!(" · {summary}"), summary_style));
    }
    lines.push(title);
    lines.extend((1..RESULT_HEADER_ROWS).map(|_| FrameLine::new()));

    let body_style = match response.state() {
        ResponseState::Failed => SpanStyle::Error,
        _ => SpanStyle::Plain,
    };
    let viewport = view_model.response_viewport();
    for line in viewport.visible_lines() {
        lines.push(padded(Span::new(line, body_style)));
    }

    lines.extend((1..RESULT_FOOTER_ROWS).map(|_| FrameLine::new()));
    let percent = format!("{:.0}%", viewport.scroll_percent() * 100.0);
    lines.push(padded(Span::new(
        format!("{percent:>width$}", width = viewport.width()),
        SpanStyle::Muted,
    )));

    lines.truncate(height);
    lines
}
