//! # Application Events
//!
//! Everything the controller reacts to arrives as an [`AppEvent`]: raw
//! terminal input, the blink tick, and request completions posted back by the
//! dispatcher. Completions travel through the same handler as key presses, so
//! the view model has a single writer.

use std::time::Duration;

use crossterm::event::Event;

/// Result of one dispatched request
#[derive(Debug, Clone, PartialEq)]
pub enum DispatchOutcome {
    /// The server answered; `text` is the formatted body
    ResponseReady {
        text: String,
        status: u16,
        elapsed: Duration,
    },
    /// Construction, transport or timeout failure
    RequestFailed { message: String },
}

impl DispatchOutcome {
    pub fn is_failure(&self) -> bool {
        matches!(self, DispatchOutcome::RequestFailed { .. })
    }
}

/// A dispatch outcome tagged with the generation of the request it answers
#[derive(Debug, Clone, PartialEq)]
pub struct DispatchCompletion {
    pub generation: u64,
    pub outcome: DispatchOutcome,
}

impl DispatchCompletion {
    pub fn new(generation: u64, outcome: DispatchOutcome) -> Self {
        Self {
            generation,
            outcome,
        }
    }
}

/// Input to the controller's event handler
#[derive(Debug, Clone, PartialEq)]
pub enum AppEvent {
    /// Key press, resize or any other terminal event
    Terminal(Event),
    /// Periodic tick driving the cursor blink
    Tick,
    /// A background request finished
    RequestCompleted(DispatchCompletion),
}
