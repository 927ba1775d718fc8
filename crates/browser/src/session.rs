//! Session and browser lifecycle stubs.
//!
//! A [`Session`] owns the CDP event-loop driver tasks; stopping it is the
//! final step of teardown. A [`BrowserHandle`] owns one Chromium process and
//! is shared read-mostly across tests; only the suite-level teardown may
//! close it.

use std::sync::Arc;

use chromiumoxide::browser::{Browser, BrowserConfig};
use chromiumoxide::cdp::browser_protocol::browser::BrowserContextId;
use chromiumoxide::cdp::browser_protocol::network::{Cookie, CookieParam};
use chromiumoxide::cdp::browser_protocol::storage;
use chromiumoxide::cdp::browser_protocol::target::{
    CreateBrowserContextParams, CreateTargetParams, DisposeBrowserContextParams,
};
use chromiumoxide::Page;
use futures::StreamExt;
use parking_lot::Mutex;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

use crate::error::{BrowserError, BrowserResult};

/// Owns the driver tasks that pump CDP events for every browser launched
/// under it. Created once per test run (or per scenario script).
pub struct Session {
    drivers: Mutex<Vec<JoinHandle<()>>>,
}

impl Session {
    pub fn start() -> Self {
        Self {
            drivers: Mutex::new(Vec::new()),
        }
    }

    fn adopt(&self, driver: JoinHandle<()>) {
        self.drivers.lock().push(driver);
    }

    /// Stop the session, aborting any driver still running. Idempotent.
    pub fn stop(&self) {
        for driver in self.drivers.lock().drain(..) {
            driver.abort();
        }
        debug!("session stopped");
    }
}

impl Drop for Session {
    fn drop(&mut self) {
        self.stop();
    }
}

/// Initialize a browser-automation session.
pub fn start_session() -> Session {
    Session::start()
}

/// Launch options with safe defaults: headless, 1280x720.
#[derive(Debug, Clone)]
pub struct LaunchOptions {
    pub headless: bool,
    pub window_size: (u32, u32),
}

impl Default for LaunchOptions {
    fn default() -> Self {
        Self {
            headless: true,
            window_size: (1280, 720),
        }
    }
}

/// One Chromium process. The inner mutex serializes process-level operations;
/// page-level traffic goes through per-page channels and does not contend.
pub struct BrowserHandle {
    inner: tokio::sync::Mutex<Browser>,
}

/// Launch a Chromium browser with the standard launch arguments and register
/// its event-loop driver with the session.
pub async fn launch_browser(
    session: &Session,
    options: &LaunchOptions,
) -> BrowserResult<BrowserHandle> {
    let (width, height) = options.window_size;
    let mut builder = BrowserConfig::builder()
        .window_size(width, height)
        .no_sandbox()
        .args(vec!["--disable-dev-shm-usage", "--disable-gpu"]);
    if !options.headless {
        builder = builder.with_head();
    }
    let config = builder.build().map_err(BrowserError::Launch)?;

    let (browser, mut handler) = Browser::launch(config).await?;
    debug!(headless = options.headless, width, height, "browser launched");

    // Drive the CDP event loop until the browser goes away.
    let driver = tokio::spawn(async move {
        while let Some(event) = handler.next().await {
            if let Err(e) = event {
                debug!(error = %e, "cdp handler event");
            }
        }
    });
    session.adopt(driver);

    Ok(BrowserHandle {
        inner: tokio::sync::Mutex::new(browser),
    })
}

impl BrowserHandle {
    /// Create an isolated browsing context (fresh cookie/storage jar).
    pub(crate) async fn create_context(&self) -> BrowserResult<BrowserContextId> {
        let browser = self.inner.lock().await;
        let response = browser
            .execute(CreateBrowserContextParams::default())
            .await?;
        Ok(response.result.browser_context_id)
    }

    pub(crate) async fn dispose_context(&self, id: BrowserContextId) -> BrowserResult<()> {
        let browser = self.inner.lock().await;
        browser
            .execute(DisposeBrowserContextParams::new(id))
            .await?;
        Ok(())
    }

    /// Open a fresh page bound to the given context.
    pub(crate) async fn new_page_in_context(&self, id: &BrowserContextId) -> BrowserResult<Page> {
        let params = CreateTargetParams::builder()
            .url("about:blank")
            .browser_context_id(id.clone())
            .build()
            .map_err(BrowserError::Protocol)?;
        let browser = self.inner.lock().await;
        Ok(browser.new_page(params).await?)
    }

    pub(crate) async fn set_context_cookies(
        &self,
        id: &BrowserContextId,
        cookies: Vec<CookieParam>,
    ) -> BrowserResult<()> {
        let params = storage::SetCookiesParams::builder()
            .cookies(cookies)
            .browser_context_id(id.clone())
            .build()
            .map_err(BrowserError::Protocol)?;
        let browser = self.inner.lock().await;
        browser.execute(params).await?;
        Ok(())
    }

    pub(crate) async fn get_context_cookies(
        &self,
        id: &BrowserContextId,
    ) -> BrowserResult<Vec<Cookie>> {
        let params = storage::GetCookiesParams::builder()
            .browser_context_id(id.clone())
            .build();
        let browser = self.inner.lock().await;
        let response = browser.execute(params).await?;
        Ok(response.result.cookies)
    }

    pub(crate) async fn clear_context_cookies(&self, id: &BrowserContextId) -> BrowserResult<()> {
        let params = storage::ClearCookiesParams::builder()
            .browser_context_id(id.clone())
            .build();
        let browser = self.inner.lock().await;
        browser.execute(params).await?;
        Ok(())
    }

    /// Close the browser process. Best-effort; failures are logged, not
    /// surfaced, so teardown can proceed to the session.
    pub async fn close(&self) {
        let mut browser = self.inner.lock().await;
        if let Err(e) = browser.close().await {
            warn!(error = %e, "failed to close browser cleanly");
        }
    }
}

/// Convenience for fixtures that share one browser across many tests.
pub type SharedBrowser = Arc<BrowserHandle>;
