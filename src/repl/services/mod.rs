//! # Services Layer
//!
//! Work that happens outside the view model: formatting response bodies and
//! running requests on background tasks.
//!
//! Services should only exist when they add real value by:
//! - Managing their own state (like the dispatcher's completion channel)
//! - Providing complex business logic
//! - Abstracting external resources

pub mod formatter;
pub mod http;

// Re-export service types
pub use formatter::format_response;
pub use http::{
    normalize_url, send_request, HttpDispatcher, HttpTransport, OutboundRequest,
    ReqwestTransport, RequestTicket, TransportFuture, TransportResponse,
};
