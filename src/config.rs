//! Configuration constants for reqpane
//!
//! There is no configuration file. Everything that shapes the console at
//! runtime lives here as a constant; the command line only chooses the
//! initial URL, method and log destination.

use std::time::Duration;

/// HTTP methods offered by the method selector, in display order
pub const DEFAULT_METHODS: [&str; 4] = ["GET", "POST", "PUT", "DELETE"];

/// Hard deadline for a single request
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Maximum number of characters accepted by the URL field
pub const URL_CHAR_LIMIT: usize = 2048;

/// Placeholder shown in the URL field while it is empty
pub const URL_PLACEHOLDER: &str = "httpbin.org/get";

/// Response text before the first request is sent
pub const WAITING_TEXT: &str = "Waiting request...";

/// Response text while a request is in flight
pub const MAKING_REQUEST_TEXT: &str = "Making request...";

/// Shown instead of the panels until the first resize event arrives
pub const LOADING_TEXT: &str = "Initializing...";

/// Prefix for failed request messages in the response pane
pub const ERROR_PREFIX: &str = "Error: ";

/// Scheme prepended to URLs that do not start with `http`
pub const DEFAULT_SCHEME_PREFIX: &str = "http://";

/// How long the event loop waits for terminal input per iteration
pub const EVENT_POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Cursor blink period for the focused text field
pub const CURSOR_BLINK_INTERVAL: Duration = Duration::from_millis(500);

/// Environment variable holding the tracing filter directives
pub const LOG_LEVEL_ENV_VAR: &str = "REQPANE_LOG_LEVEL";

// Layout metrics. The panel and viewport margins are derived from these in
// `repl::geometry`.

/// Border width on each side of a panel box
pub const PANEL_BORDER_WIDTH: usize = 1;

/// Horizontal padding between a panel border and its content
pub const PANEL_PADDING_X: usize = 2;

/// Vertical padding between a panel border and its content
pub const PANEL_PADDING_Y: usize = 1;

/// Rows above the panels (application title)
pub const FRAME_HEADER_ROWS: usize = 1;

/// Rows below the panels (status footer)
pub const FRAME_FOOTER_ROWS: usize = 1;

/// Rows above the viewport inside the result panel (title and gap)
pub const RESULT_HEADER_ROWS: usize = 2;

/// Rows below the viewport inside the result panel (gap and scroll position)
pub const RESULT_FOOTER_ROWS: usize = 2;

/// Share of the terminal width given to the methods panel, in tenths
pub const LEFT_PANEL_TENTHS: usize = 4;

/// Share of the terminal width given to the result panel, in tenths
pub const RIGHT_PANEL_TENTHS: usize = 6;
