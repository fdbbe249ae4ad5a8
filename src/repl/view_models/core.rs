//! # Core ViewModel Structure
//!
//! The single state aggregate of the console. The controller is its only
//! writer; commands only ever see a snapshot of it.

use anyhow::Result;

use crate::config::{URL_CHAR_LIMIT, URL_PLACEHOLDER};
use crate::repl::events::Pane;
use crate::repl::geometry::PanelLayout;
use crate::repl::models::{MethodSelector, ResponseModel, TextField, Viewport};
use crate::repl::view_models::focus::FocusManager;

/// Application state shared by the panels
#[derive(Debug, Clone)]
pub struct ViewModel {
    pub(super) terminal_size: (u16, u16),
    pub(super) layout: PanelLayout,
    /// Set by the first resize; nothing but the loading line renders before
    pub(super) ready: bool,
    pub(super) url_field: TextField,
    pub(super) methods: MethodSelector,
    pub(super) response: ResponseModel,
    pub(super) response_viewport: Viewport,
    pub(super) focus: FocusManager,
}

impl ViewModel {
    /// Default state: first method selected, empty focused URL field,
    /// placeholder response text, not ready.
    pub fn new() -> Self {
        let mut url_field = TextField::new(URL_PLACEHOLDER, URL_CHAR_LIMIT);
        url_field.focus();

        let response = ResponseModel::new();
        let mut response_viewport = Viewport::new(0, 0);
        response_viewport.set_content(response.text());

        Self {
            terminal_size: (0, 0),
            layout: PanelLayout::default(),
            ready: false,
            url_field,
            methods: MethodSelector::with_default_methods(),
            response,
            response_viewport,
            focus: FocusManager::new(),
        }
    }

    /// Default state with the URL and method taken from the command line
    pub fn with_initial_request(url: Option<&str>, method: &str) -> Result<Self> {
        let mut view_model = Self::new();
        view_model.methods.select(method)?;
        if let Some(url) = url {
            view_model.url_field.set_value(url);
        }
        tracing::debug!(
            "Initial request: {} '{}'",
            view_model.selected_method(),
            view_model.url()
        );
        Ok(view_model)
    }

    /// Recompute geometry for a new terminal size. The first call marks the
    /// state ready.
    pub fn update_terminal_size(&mut self, width: u16, height: u16) {
        self.terminal_size = (width, height);
        self.layout = PanelLayout::compute(width as usize, height as usize);
        self.response_viewport
            .resize(self.layout.viewport.width, self.layout.viewport.height);

        if !self.ready {
            self.ready = true;
            tracing::info!("Terminal ready at {}x{}", width, height);
        } else {
            tracing::debug!("Terminal resized to {}x{}", width, height);
        }
    }

    /// Advance time-driven state (cursor blink)
    pub fn tick(&mut self) {
        self.url_field.blink();
    }

    pub fn terminal_size(&self) -> (u16, u16) {
        self.terminal_size
    }

    pub fn layout(&self) -> &PanelLayout {
        &self.layout
    }

    pub fn is_ready(&self) -> bool {
        self.ready
    }

    pub fn url_field(&self) -> &TextField {
        &self.url_field
    }

    pub fn url(&self) -> String {
        self.url_field.value()
    }

    pub fn methods(&self) -> &MethodSelector {
        &self.methods
    }

    pub fn selected_method(&self) -> &str {
        self.methods.current()
    }

    pub fn response(&self) -> &ResponseModel {
        &self.response
    }

    pub fn response_text(&self) -> &str {
        self.response.text()
    }

    pub fn response_viewport(&self) -> &Viewport {
        &self.response_viewport
    }

    pub fn focused_pane(&self) -> Pane {
        self.focus.focused()
    }
}

impl Default for ViewModel {
    fn default() -> Self {
        Self::new()
    }
}
