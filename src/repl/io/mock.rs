//! # Mock I/O Implementations for Testing
//!
//! Scripted events in, recorded render commands out.

use super::{EventStream, RenderStream, TerminalSize};
use anyhow::Result;
use crossterm::event::Event;
use std::collections::VecDeque;
use std::io::Write;
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

/// Mock event stream for testing
///
/// Yields the pre-programmed events in order, then reports nothing ready.
pub struct MockEventStream {
    events: VecDeque<Event>,
}

impl MockEventStream {
    /// Create a new mock event stream with pre-programmed events
    pub fn new(events: Vec<Event>) -> Self {
        Self {
            events: events.into_iter().collect(),
        }
    }

    /// Create an empty mock event stream
    pub fn empty() -> Self {
        Self::new(Vec::new())
    }

    /// Add an event to the stream
    pub fn push_event(&mut self, event: Event) {
        self.events.push_back(event);
    }
}

impl EventStream for MockEventStream {
    fn poll(&mut self, _timeout: Duration) -> Result<bool> {
        Ok(!self.events.is_empty())
    }

    fn read(&mut self) -> Result<Event> {
        self.events
            .pop_front()
            .ok_or_else(|| anyhow::anyhow!("No events available"))
    }
}

/// Recorded render command for verification
#[derive(Debug, Clone, PartialEq)]
pub enum RenderCommand {
    ClearScreen,
    MoveCursor(u16, u16),
    HideCursor,
    ShowCursor,
    GetSize,
    EnterAlternateScreen,
    LeaveAlternateScreen,
    EnableRawMode,
    DisableRawMode,
    Write(Vec<u8>),
    Flush,
}

/// Shared command log. Tests keep a handle after the stream moves into the
/// controller.
pub type CommandHistory = Arc<Mutex<Vec<RenderCommand>>>;

/// Mock render stream for testing
///
/// Records all rendering commands for verification in tests.
pub struct MockRenderStream {
    commands: CommandHistory,
    terminal_size: TerminalSize,
    cursor_visible: bool,
    raw_mode: bool,
    alternate_screen: bool,
}

impl MockRenderStream {
    /// Create a new mock render stream
    pub fn new() -> Self {
        Self::with_size((80, 24))
    }

    /// Create a mock render stream with specific terminal size
    pub fn with_size(size: TerminalSize) -> Self {
        Self {
            commands: Arc::new(Mutex::new(Vec::new())),
            terminal_size: size,
            cursor_visible: true,
            raw_mode: false,
            alternate_screen: false,
        }
    }

    /// Handle on the command log that outlives moving the stream
    pub fn history(&self) -> CommandHistory {
        Arc::clone(&self.commands)
    }

    /// Get recorded commands for verification
    pub fn get_commands(&self) -> Vec<RenderCommand> {
        self.lock().clone()
    }

    /// Check if a specific command was recorded
    pub fn has_command(&self, command: &RenderCommand) -> bool {
        self.lock().contains(command)
    }

    /// Everything written since the last clear, escape sequences included
    pub fn written_text(&self) -> String {
        written_since_clear(&self.lock())
    }

    pub fn is_raw_mode(&self) -> bool {
        self.raw_mode
    }

    pub fn is_alternate_screen(&self) -> bool {
        self.alternate_screen
    }

    pub fn is_cursor_visible(&self) -> bool {
        self.cursor_visible
    }

    fn lock(&self) -> MutexGuard<'_, Vec<RenderCommand>> {
        // A poisoned log only means another test thread panicked mid-push
        self.commands
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn record(&self, command: RenderCommand) {
        self.lock().push(command);
    }
}

/// Concatenate the `Write` payloads recorded after the last `ClearScreen`
pub fn written_since_clear(commands: &[RenderCommand]) -> String {
    let start = commands
        .iter()
        .rposition(|command| *command == RenderCommand::ClearScreen)
        .map_or(0, |index| index + 1);
    let bytes: Vec<u8> = commands[start..]
        .iter()
        .filter_map(|command| match command {
            RenderCommand::Write(bytes) => Some(bytes.as_slice()),
            _ => None,
        })
        .flatten()
        .copied()
        .collect();
    String::from_utf8_lossy(&bytes).into_owned()
}

impl Write for MockRenderStream {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.record(RenderCommand::Write(buf.to_vec()));
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        self.record(RenderCommand::Flush);
        Ok(())
    }
}

impl RenderStream for MockRenderStream {
    fn clear_screen(&mut self) -> Result<()> {
        self.record(RenderCommand::ClearScreen);
        Ok(())
    }

    fn move_cursor(&mut self, x: u16, y: u16) -> Result<()> {
        self.record(RenderCommand::MoveCursor(x, y));
        Ok(())
    }

    fn hide_cursor(&mut self) -> Result<()> {
        self.record(RenderCommand::HideCursor);
        self.cursor_visible = false;
        Ok(())
    }

    fn show_cursor(&mut self) -> Result<()> {
        self.record(RenderCommand::ShowCursor);
        self.cursor_visible = true;
        Ok(())
    }

    fn get_size(&self) -> Result<TerminalSize> {
        self.record(RenderCommand::GetSize);
        Ok(self.terminal_size)
    }

    fn enter_alternate_screen(&mut self) -> Result<()> {
        self.record(RenderCommand::EnterAlternateScreen);
        self.alternate_screen = true;
        Ok(())
    }

    fn leave_alternate_screen(&mut self) -> Result<()> {
        self.record(RenderCommand::LeaveAlternateScreen);
        self.alternate_screen = false;
        Ok(())
    }

    fn enable_raw_mode(&mut self) -> Result<()> {
        self.record(RenderCommand::EnableRawMode);
        self.raw_mode = true;
        Ok(())
    }

    fn disable_raw_mode(&mut self) -> Result<()> {
        self.record(RenderCommand::DisableRawMode);
        self.raw_mode = false;
        Ok(())
    }
}

impl Default for MockEventStream {
    fn default() -> Self {
        Self::empty()
    }
}

impl Default for MockRenderStream {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    #[test]
    fn mock_event_stream_should_provide_events_in_order() {
        let events = vec![
            Event::Key(KeyEvent::new(KeyCode::Char('a'), KeyModifiers::empty())),
            Event::Resize(100, 30),
        ];

        let mut stream = MockEventStream::new(events);

        assert!(stream.poll(Duration::from_millis(0)).unwrap());
        match stream.read().unwrap() {
            Event::Key(key) => assert_eq!(key.code, KeyCode::Char('a')),
            other => panic!("Expected key event, got {other:?}"),
        }

        assert_eq!(
            stream.next_event(Duration::ZERO).unwrap(),
            Some(Event::Resize(100, 30))
        );

        // Drained
        assert!(!stream.poll(Duration::from_millis(0)).unwrap());
        assert_eq!(stream.next_event(Duration::ZERO).unwrap(), None);
        assert!(stream.read().is_err());
    }

    #[test]
    fn mock_render_stream_should_record_commands() {
        let mut stream = MockRenderStream::new();

        stream.clear_screen().unwrap();
        stream.move_cursor(10, 20).unwrap();
        stream.hide_cursor().unwrap();
        stream.write_all(b"Hello").unwrap();
        stream.flush().unwrap();

        let commands = stream.get_commands();
        assert_eq!(commands.len(), 5);
        assert_eq!(commands[0], RenderCommand::ClearScreen);
        assert_eq!(commands[1], RenderCommand::MoveCursor(10, 20));
        assert_eq!(commands[2], RenderCommand::HideCursor);
        assert_eq!(commands[3], RenderCommand::Write(b"Hello".to_vec()));
        assert_eq!(commands[4], RenderCommand::Flush);

        assert_eq!(stream.written_text(), "Hello");
    }

    #[test]
    fn written_text_should_start_after_last_clear() {
        let mut stream = MockRenderStream::new();
        stream.write_all(b"old frame").unwrap();
        stream.clear_screen().unwrap();
        stream.write_all(b"new ").unwrap();
        stream.write_all(b"frame").unwrap();

        assert_eq!(stream.written_text(), "new frame");
    }

    #[test]
    fn history_handle_should_see_later_commands() {
        let mut stream = MockRenderStream::new();
        let history = stream.history();
        stream.enable_raw_mode().unwrap();

        assert!(history
            .lock()
            .unwrap()
            .contains(&RenderCommand::EnableRawMode));
    }

    #[test]
    fn mock_render_stream_should_track_state() {
        let mut stream = MockRenderStream::with_size((120, 40));

        assert_eq!(stream.get_size().unwrap(), (120, 40));
        assert!(stream.is_cursor_visible());
        assert!(!stream.is_raw_mode());
        assert!(!stream.is_alternate_screen());

        stream.hide_cursor().unwrap();
        stream.enable_raw_mode().unwrap();
        stream.enter_alternate_screen().unwrap();

        assert!(!stream.is_cursor_visible());
        assert!(stream.is_raw_mode());
        assert!(stream.is_alternate_screen());
    }
}
