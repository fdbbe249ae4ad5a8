//! # MVVM Architecture Implementation
//!
//! Key presses become [`CommandEvent`]s through the [`CommandRegistry`], the
//! [`AppController`] applies them to the [`ViewModel`], and the views turn
//! the view model into a frame on every change. Requests run on background
//! tasks owned by the [`HttpDispatcher`] and come back as completion events.

pub mod commands;
pub mod controllers;
pub mod events;
pub mod geometry;
pub mod io;
pub mod models;
pub mod services;
pub mod utils;
pub mod view_models;
pub mod views;

// Re-export core types
pub use controllers::AppController;
pub use events::*;
pub use view_models::*;
pub use views::*;

// Re-export specific items from commands to avoid conflicts
pub use commands::{Command, CommandContext, CommandEvent, CommandRegistry, ViewModelSnapshot};

pub use models::{MethodSelector, ResponseModel, ResponseState, TextField, Viewport};
pub use services::{format_response, HttpDispatcher, HttpTransport, ReqwestTransport};
