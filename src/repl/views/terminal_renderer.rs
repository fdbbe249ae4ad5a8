//! # Terminal Renderer
//!
//! Paints composed frames onto a [`RenderStream`] and owns the terminal
//! mode switches around the session.

use crate::repl::io::RenderStream;
use crate::repl::view_models::ViewModel;
use crate::repl::views::frame::{compose_frame, Frame};
use crate::repl::views::theme::Theme;
use anyhow::Result;
use crossterm::queue;
use crossterm::style::PrintStyledContent;

/// Trait for rendering views
pub trait ViewRenderer {
    /// Initialize the terminal for rendering
    fn initialize(&mut self) -> Result<()>;

    /// Render the full application state
    fn render_full(&mut self, view_model: &ViewModel) -> Result<()>;

    /// Cleanup terminal on exit
    fn cleanup(&mut self) -> Result<()>;
}

/// Renderer writing styled frames to any render stream
pub struct TerminalRenderer<RS: RenderStream> {
    render_stream: RS,
    theme: Theme,
    terminal_size: (u16, u16),
    needs_clear: bool,
}

impl<RS: RenderStream> TerminalRenderer<RS> {
    /// Create a renderer with the default theme
    pub fn with_render_stream(render_stream: RS) -> Result<Self> {
        Self::with_theme(render_stream, Theme::default())
    }

    pub fn with_theme(render_stream: RS, theme: Theme) -> Result<Self> {
        let terminal_size = render_stream.get_size()?;
        Ok(Self {
            render_stream,
            theme,
            terminal_size,
            needs_clear: true,
        })
    }

    /// Update terminal size
    pub fn update_size(&mut self, width: u16, height: u16) {
        self.terminal_size = (width, height);
        self.needs_clear = true;
    }

    /// Get current terminal size
    pub fn terminal_size(&self) -> (u16, u16) {
        self.terminal_size
    }

    pub fn render_stream(&self) -> &RS {
        &self.render_stream
    }

    fn paint(&mut self, frame: &Frame) -> Result<()> {
        if self.needs_clear {
            self.render_stream.clear_screen()?;
            self.needs_clear = false;
        }
        for (row, line) in frame.lines().iter().enumerate() {
            self.render_stream.move_cursor(0, row as u16)?;
            for span in line.spans() {
                let styled = self.theme.style(span.style).apply(span.text.as_str());
                queue!(self.render_stream, PrintStyledContent(styled))?;
            }
        }
        self.render_stream.flush()?;
        Ok(())
    }
}

impl<RS: RenderStream> ViewRenderer for TerminalRenderer<RS> {
    fn initialize(&mut self) -> Result<()> {
        self.render_stream.enable_raw_mode()?;
        self.render_stream.enter_alternate_screen()?;
        self.render_stream.hide_cursor()?;
        self.needs_clear = true;
        tracing::debug!("Terminal initialized at {:?}", self.terminal_size);
        Ok(())
    }

    fn render_full(&mut self, view_model: &ViewModel) -> Result<()> {
        let frame = compose_frame(view_model);
        // The loading line is far shorter than a real frame
        if !view_model.is_ready() {
            self.needs_clear = true;
        }
        self.paint(&frame)
    }

    fn cleanup(&mut self) -> Result<()> {
        self.render_stream.show_cursor()?;
        self.render_stream.leave_alternate_screen()?;
        self.render_stream.disable_raw_mode()?;
        self.render_stream.flush()?;
        tracing::debug!("Terminal restored");
        Ok(())
    }
}
