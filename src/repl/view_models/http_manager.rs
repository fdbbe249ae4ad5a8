//! # HTTP Management
//!
//! Request bookkeeping on the view model: starting a request and applying
//! its completion. Completions are tagged with the generation of the request
//! that produced them; only the newest generation may touch the state.

use crate::repl::events::{DispatchCompletion, DispatchOutcome};
use crate::repl::models::ResponseStatus;
use crate::repl::services::RequestTicket;
use crate::repl::view_models::core::ViewModel;

impl ViewModel {
    /// Show the in-flight text and hand back what should be sent
    pub fn begin_request(&mut self) -> RequestTicket {
        let generation = self.response.start_request();
        self.refresh_response_viewport();

        let ticket = RequestTicket {
            generation,
            method: self.methods.current().to_string(),
            url: self.url_field.value(),
        };
        tracing::info!(
            "Request #{} started: {} '{}'",
            ticket.generation,
            ticket.method,
            ticket.url
        );
        ticket
    }

    /// Apply a finished request. Returns false when it was superseded.
    pub fn complete_request(&mut self, completion: DispatchCompletion) -> bool {
        if !self.response.is_current(completion.generation) {
            tracing::warn!(
                "Discarding stale completion #{} (latest is #{})",
                completion.generation,
                self.response.generation()
            );
            return false;
        }

        match completion.outcome {
            DispatchOutcome::ResponseReady {
                text,
                status,
                elapsed,
            } => {
                tracing::info!(
                    "Request #{} completed with {} in {:?}",
                    completion.generation,
                    status,
                    elapsed
                );
                self.response
                    .set_success(text, ResponseStatus::new(status), elapsed);
            }
            DispatchOutcome::RequestFailed { message } => {
                tracing::info!("Request #{} failed: {}", completion.generation, message);
                self.response.set_failure(&message);
            }
        }
        self.refresh_response_viewport();
        true
    }

    pub fn is_request_in_flight(&self) -> bool {
        self.response.is_loading()
    }

    fn refresh_response_viewport(&mut self) {
        self.response_viewport.set_content(self.response.text());
        self.response_viewport.goto_top();
    }
}
