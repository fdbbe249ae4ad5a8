//! # reqpane
//!
//! A two-panel terminal console for firing simple HTTP requests.
//!
//! The left panel holds the method list and a URL field, the right panel a
//! scrollable view of the last response. JSON bodies are pretty-printed,
//! anything else is shown as received.
//!
//! ```text
//!  ┌ Methods ──────────┐┌ Result · 200 OK ─────────────────┐
//!  │ > GET             ││ {                                │
//!  │   POST            ││   "ok": true                     │
//!  │   PUT             ││ }                                │
//!  │   DELETE          ││                                  │
//!  │ URL               ││                                  │
//!  │ > httpbin.org/get ││                                  │
//!  └───────────────────┘└──────────────────────────────────┘
//! ```
//!
//! ## Architecture
//!
//! ```text
//!  terminal events ──▶ CommandRegistry ──▶ CommandEvent ──▶ AppController
//!                                                              │
//!        HttpDispatcher ◀── RequestTicket ◀── ViewModel ◀──────┘
//!              │                                  │
//!              └──── DispatchCompletion ─────────▶│──▶ compose_frame ──▶ TerminalRenderer
//! ```

pub mod cmd_args;
pub mod config;
pub mod repl;

pub use repl::*;
