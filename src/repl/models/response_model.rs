//! Response model
//!
//! Tracks what the result pane is showing: the text itself, the status and
//! timing of the last successful response, and the generation tag of the
//! newest request so late completions from superseded requests can be
//! recognised and dropped.

use std::time::Duration;

use reqwest::StatusCode;

use crate::config::{ERROR_PREFIX, MAKING_REQUEST_TEXT, WAITING_TEXT};

/// HTTP response status information
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResponseStatus {
    pub code: u16,
}

impl ResponseStatus {
    pub fn new(code: u16) -> Self {
        Self { code }
    }

    /// Check if the status indicates success (2xx)
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.code)
    }

    /// Status as display string (e.g., "200 OK")
    pub fn as_string(&self) -> String {
        let reason = StatusCode::from_u16(self.code)
            .ok()
            .and_then(|status| status.canonical_reason());
        match reason {
            Some(reason) => format!("{} {}", self.code, reason),
            None => self.code.to_string(),
        }
    }
}

/// Where the result pane currently stands
#[derive(Debug, Clone, PartialEq)]
pub enum ResponseState {
    /// Nothing has been sent yet
    Waiting,
    /// A request is in flight
    Loading,
    /// Last request completed with a response
    Received {
        status: ResponseStatus,
        duration: Duration,
    },
    /// Last request failed
    Failed,
}

#[derive(Debug, Clone)]
pub struct ResponseModel {
    text: String,
    state: ResponseState,
    generation: u64,
}

impl ResponseModel {
    pub fn new() -> Self {
        Self {
            text: WAITING_TEXT.to_string(),
            state: ResponseState::Waiting,
            generation: 0,
        }
    }

    /// Mark a new request as in flight and return its generation tag
    pub fn start_request(&mut self) -> u64 {
        self.generation += 1;
        self.text = MAKING_REQUEST_TEXT.to_string();
        self.state = ResponseState::Loading;
        self.generation
    }

    /// True if `generation` belongs to the newest request
    pub fn is_current(&self, generation: u64) -> bool {
        generation == self.generation
    }

    pub fn set_success(&mut self, text: String, status: ResponseStatus, duration: Duration) {
        self.text = text;
        self.state = ResponseState::Received { status, duration };
    }

    pub fn set_failure(&mut self, message: &str) {
        self.text = format!("{ERROR_PREFIX}{message}");
        self.state = ResponseState::Failed;
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn state(&self) -> &ResponseState {
        &self.state
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn is_loading(&self) -> bool {
        self.state == ResponseState::Loading
    }

    /// Status summary for the result title, e.g. "200 OK · 132 ms"
    pub fn summary(&self) -> Option<String> {
        match &self.state {
            ResponseState::Received { status, duration } => Some(format!(
                "{} · {} ms",
                status.as_string(),
                duration.as_millis()
            )),
            _ => None,
        }
    }
}

impl Default for ResponseModel {
    fn default() -> Self {
        Self::new()
    }
}
