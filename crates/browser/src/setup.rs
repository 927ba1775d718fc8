//! Composite setup and teardown stubs.
//!
//! [`full_page_setup`] replaces the forty-odd lines of per-test boilerplate:
//! session, browser, context, page, navigation, load-state settle. The
//! caller receives all four handles and owns their release, normally through
//! [`cleanup`], which must run whether the test body passed or raised.

use std::sync::Arc;
use std::time::Duration;

use tracing::{info, warn};

use crate::context::ContextHandle;
use crate::page::{LoadState, PageHandle};
use crate::session::{launch_browser, start_session, BrowserHandle, LaunchOptions, Session};
use crate::{
    BrowserResult, DEFAULT_BASE_URL, DEFAULT_INTERACTION_TIMEOUT, DEFAULT_LOAD_STATE_TIMEOUT,
    DEFAULT_NAVIGATION_TIMEOUT,
};

/// Options for [`full_page_setup`], all defaulted to the suite conventions.
#[derive(Debug, Clone)]
pub struct SetupOptions {
    /// Target URL (default `http://localhost:3000`).
    pub url: String,
    pub headless: bool,
    /// Interaction timeout inherited by the context (default 5000 ms).
    pub default_timeout: Duration,
    /// Navigation budget (default 10000 ms).
    pub navigation_timeout: Duration,
    pub window_size: (u32, u32),
}

impl Default for SetupOptions {
    fn default() -> Self {
        Self {
            url: DEFAULT_BASE_URL.to_string(),
            headless: true,
            default_timeout: DEFAULT_INTERACTION_TIMEOUT,
            navigation_timeout: DEFAULT_NAVIGATION_TIMEOUT,
            window_size: (1280, 720),
        }
    }
}

impl SetupOptions {
    pub fn with_url(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Default::default()
        }
    }
}

/// Complete page setup: start session, launch browser, create context, open
/// a page, navigate, and let load states settle.
///
/// Creation failures (session, browser, context, page) propagate; the test
/// cannot proceed without handles. Navigation and load-state failures are
/// logged and swallowed: a dead or slow frontend is itself a legitimate
/// thing for the scenario's assertion to report, and an unreachable URL
/// still yields four live handles.
pub async fn full_page_setup(
    options: &SetupOptions,
) -> BrowserResult<(Session, Arc<BrowserHandle>, ContextHandle, PageHandle)> {
    let session = start_session();
    let browser = Arc::new(
        launch_browser(
            &session,
            &LaunchOptions {
                headless: options.headless,
                window_size: options.window_size,
            },
        )
        .await?,
    );
    let context = ContextHandle::create(browser.clone(), options.default_timeout).await?;
    let page = context.new_page().await?;

    if let Err(e) = page.navigate(&options.url, options.navigation_timeout).await {
        warn!(url = %options.url, error = %e, "navigation failed during setup; continuing");
    }
    page.wait_for_load_state(LoadState::default(), DEFAULT_LOAD_STATE_TIMEOUT)
        .await;
    page.wait_for_all_frames(LoadState::default(), DEFAULT_LOAD_STATE_TIMEOUT)
        .await;

    info!(url = %options.url, "page setup complete");
    Ok((session, browser, context, page))
}

/// Release whichever handles are present, in the order context, browser,
/// session. Best-effort and infallible: a close failure on one handle is
/// logged and the next handle is still attempted, so one test's teardown
/// can never cascade into the next test's setup. A no-op when all handles
/// are `None`.
pub async fn cleanup(
    context: Option<ContextHandle>,
    browser: Option<Arc<BrowserHandle>>,
    session: Option<Session>,
) {
    if let Some(context) = context {
        if let Err(e) = context.close().await {
            warn!(error = %e, "context close failed during cleanup");
        }
    }
    if let Some(browser) = browser {
        browser.close().await;
    }
    if let Some(session) = session {
        session.stop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn setup_options_defaults_match_suite_conventions() {
        let options = SetupOptions::default();
        assert_eq!(options.url, "http://localhost:3000");
        assert!(options.headless);
        assert_eq!(options.default_timeout, Duration::from_millis(5000));
        assert_eq!(options.navigation_timeout, Duration::from_millis(10000));
        assert_eq!(options.window_size, (1280, 720));
    }

    #[test]
    fn with_url_keeps_other_defaults() {
        let options = SetupOptions::with_url("http://localhost:3000/products");
        assert_eq!(options.url, "http://localhost:3000/products");
        assert_eq!(options.default_timeout, Duration::from_millis(5000));
    }

    #[tokio::test]
    async fn cleanup_with_no_handles_is_a_no_op() {
        // Idempotent on all-absent handles; must simply return.
        cleanup(None, None, None).await;
    }

    #[tokio::test]
    async fn cleanup_with_only_a_session_stops_it() {
        let session = start_session();
        cleanup(None, None, Some(session)).await;
    }
}
