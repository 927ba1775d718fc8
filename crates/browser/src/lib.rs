//! Marketplace Browser Stubs
//!
//! Thin wrappers over the CDP browser-automation capability, one stub per
//! primitive (navigate, click, wait, screenshot, route interception), each
//! adding a documented default for its option. The composite
//! [`full_page_setup`] and [`cleanup`] calls collapse the per-test
//! boilerplate into one setup and one teardown.
//!
//! # Handle ownership
//!
//! ```text
//! Session ── owns the CDP event-loop drivers
//!   └── BrowserHandle ── one Chromium process
//!         └── ContextHandle ── isolated cookie/storage jar per test
//!               └── PageHandle ── one tab
//! ```
//!
//! Handles are released in strict reverse-creation order: the page goes down
//! with its context, then the browser, then the session. [`cleanup`] accepts
//! any subset of handles and is a best-effort, never-failing teardown.

use std::time::Duration;

pub mod context;
pub mod error;
pub mod log;
pub mod page;
pub mod routes;
pub mod session;
pub mod setup;

pub use context::{ContextHandle, CookieSpec};
pub use error::{BrowserError, BrowserResult};
pub use log::{ConsoleEntry, ConsoleLog, NetworkLog, RequestEntry};
pub use page::{sleep, wait_for_default_load_state, ElementState, LoadState, PageHandle};
pub use routes::{intercept_route, RouteAction, RouteInterceptor};
pub use session::{launch_browser, start_session, BrowserHandle, LaunchOptions, Session};
pub use setup::{cleanup, full_page_setup, SetupOptions};

/// Target frontend unless overridden per call.
pub const DEFAULT_BASE_URL: &str = "http://localhost:3000";

/// Default timeout for element interactions (click, fill, select).
pub const DEFAULT_INTERACTION_TIMEOUT: Duration = Duration::from_millis(5_000);

/// Default timeout for navigations.
pub const DEFAULT_NAVIGATION_TIMEOUT: Duration = Duration::from_millis(10_000);

/// Default timeout for visible-text assertions.
pub const DEFAULT_ASSERTION_TIMEOUT: Duration = Duration::from_millis(30_000);

/// Default timeout for load-state waits (the swallowed class).
pub const DEFAULT_LOAD_STATE_TIMEOUT: Duration = Duration::from_millis(3_000);

/// Polling interval for auto-waiting stubs.
pub const POLL_INTERVAL: Duration = Duration::from_millis(50);
