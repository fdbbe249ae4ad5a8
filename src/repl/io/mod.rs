//! # I/O Abstraction Layer
//!
//! Trait seams between the controller and the terminal, so the event loop
//! can be driven by scripted events and a recording sink in tests.
//!
//! ```text
//! Production:  AppController ──▶ TerminalEventStream ──▶ crossterm::event::poll/read
//!                            ──▶ TerminalRenderStream ──▶ stdout
//!
//! Testing:     AppController ──▶ MockEventStream     ──▶ VecDeque<Event>
//!                            ──▶ MockRenderStream    ──▶ Vec<RenderCommand>
//! ```

use anyhow::Result;
use crossterm::event::Event;
use std::io::Write;
use std::time::Duration;

pub mod mock;
pub mod terminal;

pub use terminal::{TerminalEventStream, TerminalRenderStream};

pub use mock::{MockEventStream, MockRenderStream, RenderCommand};

/// Type alias for terminal size (width, height)
pub type TerminalSize = (u16, u16);

/// Source of key, resize and other terminal events
pub trait EventStream: Send {
    /// Wait up to `timeout` for an event to become readable
    fn poll(&mut self, timeout: Duration) -> Result<bool>;

    /// Read the next event. Only call after `poll` returned true.
    fn read(&mut self) -> Result<Event>;

    /// Poll and read in one step
    fn next_event(&mut self, timeout: Duration) -> Result<Option<Event>> {
        if self.poll(timeout)? {
            self.read().map(Some)
        } else {
            Ok(None)
        }
    }
}

/// Sink for rendered frames plus the terminal mode switches around them
pub trait RenderStream: Write + Send {
    fn clear_screen(&mut self) -> Result<()>;

    /// Move cursor to (column, row)
    fn move_cursor(&mut self, x: u16, y: u16) -> Result<()>;

    fn hide_cursor(&mut self) -> Result<()>;

    fn show_cursor(&mut self) -> Result<()>;

    /// Terminal size as (width, height)
    fn get_size(&self) -> Result<TerminalSize>;

    fn enter_alternate_screen(&mut self) -> Result<()>;

    fn leave_alternate_screen(&mut self) -> Result<()>;

    fn enable_raw_mode(&mut self) -> Result<()>;

    fn disable_raw_mode(&mut self) -> Result<()>;
}
