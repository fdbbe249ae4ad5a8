//! # Models Module
//!
//! Plain state holders for the console: the URL text field, the method
//! selector, the response viewport and the response model. None of them know
//! about terminals or key events.

pub mod method_selector;
pub mod response_model;
pub mod text_field;
pub mod viewport;

// Re-export all models for easy access
pub use method_selector::MethodSelector;
pub use response_model::{ResponseModel, ResponseState, ResponseStatus};
pub use text_field::TextField;
pub use viewport::Viewport;
