//! # Command Pattern Implementation
//!
//! Maps key presses to [`CommandEvent`]s. Commands never touch the view
//! model: they inspect a [`ViewModelSnapshot`] and describe what should
//! happen, and the controller applies the events.
//!
//! The registry asks each command in registration order whether it is
//! relevant and executes the first match, so order encodes precedence:
//! global keys first, then panel-specific navigation, then text editing.

use anyhow::Result;
use crossterm::event::KeyEvent;

pub mod app;
pub mod context;
pub mod editing;
pub mod events;
pub mod navigation;
pub mod pane;
pub mod request;

pub use app::{AppTerminateCommand, QuitCommand};
pub use context::{CommandContext, ViewModelSnapshot};
pub use editing::{EditUrlCommand, ToggleUrlFocusCommand};
pub use events::{CommandEvent, SelectionDirection};
pub use navigation::{ScrollResponseCommand, SelectMethodCommand};
pub use pane::{SwitchToMethodsPanelCommand, SwitchToResponsePanelCommand};
pub use request::SendRequestCommand;

/// A key binding: decides whether it applies and what it asks for
pub trait Command: Send + Sync {
    /// Check if command is relevant for current state and event
    fn is_relevant(&self, context: &CommandContext, event: &KeyEvent) -> bool;

    /// Produce the events this key press should cause
    fn execute(&self, event: KeyEvent, context: &CommandContext) -> Result<Vec<CommandEvent>>;

    /// Get command name for debugging
    fn name(&self) -> &'static str;
}

/// Type alias for the command collection
type CommandCollection = Vec<Box<dyn Command>>;

/// Ordered set of commands consulted for every key press
pub struct CommandRegistry {
    commands: CommandCollection,
}

impl CommandRegistry {
    /// Create new command registry with default commands
    pub fn new() -> Self {
        let mut registry = Self {
            commands: Vec::new(),
        };

        registry.register_default_commands();
        registry
    }

    /// Register all default commands
    fn register_default_commands(&mut self) {
        // Global
        self.add_command(Box::new(QuitCommand));
        self.add_command(Box::new(AppTerminateCommand));
        self.add_command(Box::new(SendRequestCommand));
        self.add_command(Box::new(ToggleUrlFocusCommand));

        // Panel focus
        self.add_command(Box::new(SwitchToMethodsPanelCommand));
        self.add_command(Box::new(SwitchToResponsePanelCommand));

        // Panel-specific navigation
        self.add_command(Box::new(SelectMethodCommand));
        self.add_command(Box::new(ScrollResponseCommand));

        // Everything else goes to the URL field
        self.add_command(Box::new(EditUrlCommand));
    }

    /// Add a command to the registry
    pub fn add_command(&mut self, command: Box<dyn Command>) {
        self.commands.push(command);
    }

    /// Run the first relevant command. Unmatched keys produce no events.
    pub fn process_event(
        &self,
        event: KeyEvent,
        context: &CommandContext,
    ) -> Result<Vec<CommandEvent>> {
        for command in &self.commands {
            if command.is_relevant(context, &event) {
                tracing::debug!("Key {:?} handled by {}", event.code, command.name());
                return command.execute(event, context);
            }
        }
        tracing::debug!("No command for key {:?}", event);
        Ok(Vec::new())
    }

    /// Get all commands (for testing/debugging)
    pub fn commands(&self) -> &CommandCollection {
        &self.commands
    }
}

impl Default for CommandRegistry {
    fn default() -> Self {
        Self::new()
    }
}
