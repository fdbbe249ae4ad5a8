//! # Application Controller
//!
//! Owns the view model and runs the event loop. Every input, whether a key
//! press, a resize, a blink tick or a finished request, goes through
//! [`AppController::handle_event`] one at a time, so the view model has a
//! single writer. Requests run on tokio tasks and come back through the
//! dispatcher's channel.

use crate::repl::{
    commands::{CommandContext, CommandEvent, CommandRegistry, SelectionDirection},
    events::{AppEvent, DispatchCompletion, Pane},
    io::{EventStream, RenderStream, TerminalEventStream, TerminalRenderStream},
    services::{HttpDispatcher, HttpTransport, ReqwestTransport},
    view_models::ViewModel,
    views::{TerminalRenderer, ViewRenderer},
};
use crate::{
    cmd_args::CommandLineArgs,
    config::{CURSOR_BLINK_INTERVAL, EVENT_POLL_INTERVAL},
};
use anyhow::Result;
use crossterm::event::{Event, KeyEvent, KeyEventKind};
use std::io;
use std::sync::Arc;
use std::time::Instant;

/// The main application controller
pub struct AppController<ES: EventStream, RS: RenderStream> {
    view_model: ViewModel,
    view_renderer: TerminalRenderer<RS>,
    command_registry: CommandRegistry,
    dispatcher: HttpDispatcher,
    event_stream: ES,
    should_quit: bool,
    last_tick: Instant,
}

impl AppController<TerminalEventStream, TerminalRenderStream<io::Stdout>> {
    /// Controller on the real terminal with the reqwest transport
    pub fn new(cmd_args: CommandLineArgs) -> Result<Self> {
        let transport = Arc::new(ReqwestTransport::new()?);
        Self::with_io_streams(
            cmd_args,
            TerminalEventStream::new(),
            TerminalRenderStream::new(),
            transport,
        )
    }
}

impl<ES: EventStream, RS: RenderStream> AppController<ES, RS> {
    /// Create new application controller with injected I/O streams and transport
    pub fn with_io_streams(
        cmd_args: CommandLineArgs,
        event_stream: ES,
        render_stream: RS,
        transport: Arc<dyn HttpTransport>,
    ) -> Result<Self> {
        Self::with_dispatcher(
            cmd_args,
            event_stream,
            render_stream,
            HttpDispatcher::new(transport),
        )
    }

    /// Like [`with_io_streams`](Self::with_io_streams) with a preconfigured dispatcher
    pub fn with_dispatcher(
        cmd_args: CommandLineArgs,
        event_stream: ES,
        render_stream: RS,
        dispatcher: HttpDispatcher,
    ) -> Result<Self> {
        let view_model = ViewModel::with_initial_request(cmd_args.url(), cmd_args.method())?;
        let view_renderer = TerminalRenderer::with_render_stream(render_stream)?;

        Ok(Self {
            view_model,
            view_renderer,
            command_registry: CommandRegistry::new(),
            dispatcher,
            event_stream,
            should_quit: false,
            last_tick: Instant::now(),
        })
    }

    /// Run the main application loop until quit.
    ///
    /// The terminal is restored even when the loop fails.
    pub async fn run(&mut self) -> Result<()> {
        self.view_renderer.initialize()?;
        let result = self.event_loop().await;
        let cleanup = self.view_renderer.cleanup();
        result.and(cleanup)
    }

    async fn event_loop(&mut self) -> Result<()> {
        // Loading frame, then the first layout at the size we start with
        self.view_renderer.render_full(&self.view_model)?;
        let (width, height) = self.view_renderer.terminal_size();
        self.handle_event(AppEvent::Terminal(Event::Resize(width, height)))?;

        while !self.should_quit {
            while let Some(completion) = self.dispatcher.poll_completion() {
                self.handle_event(AppEvent::RequestCompleted(completion))?;
            }
            if self.should_quit {
                break;
            }

            if let Some(event) = self.event_stream.next_event(EVENT_POLL_INTERVAL)? {
                self.handle_event(AppEvent::Terminal(event))?;
            }

            if self.last_tick.elapsed() >= CURSOR_BLINK_INTERVAL {
                self.last_tick = Instant::now();
                self.handle_event(AppEvent::Tick)?;
            }

            // Give request tasks a chance on this worker
            tokio::task::yield_now().await;
        }

        tracing::info!("Event loop finished");
        Ok(())
    }

    /// Apply one event to the state, then repaint
    pub fn handle_event(&mut self, event: AppEvent) -> Result<()> {
        match event {
            AppEvent::Terminal(Event::Key(key_event)) => self.process_key_event(key_event)?,
            AppEvent::Terminal(Event::Resize(width, height)) => {
                self.view_model.update_terminal_size(width, height);
                self.view_renderer.update_size(width, height);
            }
            AppEvent::Terminal(other) => {
                tracing::trace!("Ignoring terminal event {:?}", other);
                return Ok(());
            }
            AppEvent::Tick => self.view_model.tick(),
            AppEvent::RequestCompleted(completion) => {
                self.view_model.complete_request(completion);
            }
        }

        if !self.should_quit {
            self.view_renderer.render_full(&self.view_model)?;
        }
        Ok(())
    }

    /// Route a key press through the command registry
    pub fn process_key_event(&mut self, key_event: KeyEvent) -> Result<()> {
        if !matches!(key_event.kind, KeyEventKind::Press | KeyEventKind::Repeat) {
            return Ok(());
        }
        tracing::debug!("Received key event: {:?}", key_event);

        let context = CommandContext::from_view_model(&self.view_model);
        let events = self.command_registry.process_event(key_event, &context)?;
        for event in events {
            self.apply_command_event(event);
        }
        Ok(())
    }

    /// Apply a command event to the view model
    fn apply_command_event(&mut self, event: CommandEvent) {
        tracing::debug!("Applying {:?}", event);
        match event {
            CommandEvent::QuitRequested => {
                self.should_quit = true;
            }
            CommandEvent::PaneSwitchRequested { target_pane } => {
                match target_pane {
                    Pane::Methods => self.view_model.switch_to_methods_panel(),
                    Pane::Response => self.view_model.switch_to_response_panel(),
                };
            }
            CommandEvent::MethodSelectionRequested { direction } => {
                match direction {
                    SelectionDirection::Up => self.view_model.move_method_up(),
                    SelectionDirection::Down => self.view_model.move_method_down(),
                };
            }
            CommandEvent::ViewportScrollRequested { action } => {
                self.view_model.scroll_response(action);
            }
            CommandEvent::UrlFocusToggleRequested => {
                self.view_model.toggle_url_focus();
            }
            CommandEvent::TextEditRequested { edit } => {
                self.view_model.edit_url(edit);
            }
            CommandEvent::HttpRequestRequested => {
                let ticket = self.view_model.begin_request();
                self.dispatcher.dispatch(ticket);
            }
            CommandEvent::NoAction => {}
        }
    }

    /// Wait for the next request to finish and apply it.
    ///
    /// Returns the completion, or `None` if the dispatcher has shut down.
    pub async fn wait_for_completion(&mut self) -> Result<Option<DispatchCompletion>> {
        let Some(completion) = self.dispatcher.next_completion().await else {
            return Ok(None);
        };
        self.handle_event(AppEvent::RequestCompleted(completion.clone()))?;
        Ok(Some(completion))
    }

    pub fn view_model(&self) -> &ViewModel {
        &self.view_model
    }

    pub fn renderer(&self) -> &TerminalRenderer<RS> {
        &self.view_renderer
    }

    /// Check if the application should quit
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }
}
