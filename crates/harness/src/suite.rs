//! Suite-scoped browser ownership and per-test page fixtures.
//!
//! One [`Suite`] is started per test binary (or per test, when isolation
//! matters more than speed). Every fixture method mints a fresh browser
//! context, so tests never share cookies or storage; [`TestPage::close`]
//! releases the context without touching the shared browser.

use std::sync::Arc;
use std::time::Duration;

use tracing::info;

use marketplace_browser::{
    intercept_route, launch_browser, start_session, wait_for_default_load_state, BrowserHandle,
    BrowserResult, ContextHandle, CookieSpec, LaunchOptions, PageHandle, RouteAction,
    RouteInterceptor, Session, DEFAULT_BASE_URL, DEFAULT_INTERACTION_TIMEOUT,
    DEFAULT_NAVIGATION_TIMEOUT,
};
use marketplace_mockdata::{mock_auth_success, AuthSuccess};

/// Suite-level knobs, defaulted to the conventions every scenario assumes.
#[derive(Debug, Clone)]
pub struct SuiteOptions {
    /// Frontend under test (default `http://localhost:3000`).
    pub base_url: String,
    pub headless: bool,
    /// Interaction timeout inherited by every context (default 5000 ms).
    pub default_timeout: Duration,
    /// Navigation budget for [`Suite::open`] (default 10000 ms).
    pub navigation_timeout: Duration,
}

impl Default for SuiteOptions {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            headless: true,
            default_timeout: DEFAULT_INTERACTION_TIMEOUT,
            navigation_timeout: DEFAULT_NAVIGATION_TIMEOUT,
        }
    }
}

fn join_url(base: &str, path: &str) -> String {
    format!("{}{}", base.trim_end_matches('/'), path)
}

/// One browser shared by a run of scenarios.
pub struct Suite {
    session: Session,
    browser: Arc<BrowserHandle>,
    options: SuiteOptions,
}

/// A context/page pair handed to one test, plus the interceptor that shapes
/// its network when the fixture installed one.
pub struct TestPage {
    pub context: ContextHandle,
    pub page: PageHandle,
    interceptor: Option<RouteInterceptor>,
}

impl TestPage {
    /// Release the page's context; the suite's browser stays up. Detaches
    /// the route interceptor first so no request stays paused.
    pub async fn close(self) {
        if let Some(interceptor) = self.interceptor {
            interceptor.detach().await;
        }
        marketplace_browser::cleanup(Some(self.context), None, None).await;
    }
}

impl Suite {
    /// Launch the shared browser. Call once, reuse across scenarios.
    pub async fn start(options: SuiteOptions) -> BrowserResult<Self> {
        let session = start_session();
        let browser = Arc::new(
            launch_browser(
                &session,
                &LaunchOptions {
                    headless: options.headless,
                    window_size: (1280, 720),
                },
            )
            .await?,
        );
        info!(base_url = %options.base_url, "suite browser launched");
        Ok(Self {
            session,
            browser,
            options,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.options.base_url
    }

    /// Absolute URL for a frontend path: `"/cart"` becomes
    /// `http://localhost:3000/cart`.
    pub fn url(&self, path: &str) -> String {
        join_url(&self.options.base_url, path)
    }

    async fn fresh_context(&self) -> BrowserResult<ContextHandle> {
        ContextHandle::create(self.browser.clone(), self.options.default_timeout).await
    }

    /// A blank page in its own context. The caller navigates.
    pub async fn page(&self) -> BrowserResult<TestPage> {
        let context = self.fresh_context().await?;
        let page = context.new_page().await?;
        Ok(TestPage {
            context,
            page,
            interceptor: None,
        })
    }

    /// A page already navigated to `path` with load states settled.
    pub async fn open(&self, path: &str) -> BrowserResult<TestPage> {
        let test_page = self.page().await?;
        test_page
            .page
            .navigate(&self.url(path), self.options.navigation_timeout)
            .await?;
        wait_for_default_load_state(&test_page.page).await;
        Ok(test_page)
    }

    /// A page whose context already holds a valid `auth_token` cookie.
    ///
    /// The cookie lands in the context before the page exists, so the very
    /// first document request carries it and the frontend renders
    /// logged-in from the start.
    pub async fn authenticated_page(&self) -> BrowserResult<(TestPage, AuthSuccess)> {
        let auth = mock_auth_success();
        let context = self.fresh_context().await?;
        context
            .set_cookies(vec![CookieSpec::new("auth_token", &auth.token)])
            .await?;
        let page = context.new_page().await?;
        Ok((
            TestPage {
                context,
                page,
                interceptor: None,
            },
            auth,
        ))
    }

    /// A page sized to a phone viewport (375×667, mobile metrics on).
    pub async fn mobile_page(&self) -> BrowserResult<TestPage> {
        let test_page = self.page().await?;
        test_page.page.set_viewport(375, 667, true).await?;
        Ok(test_page)
    }

    /// A page sized to a tablet viewport (768×1024).
    pub async fn tablet_page(&self) -> BrowserResult<TestPage> {
        let test_page = self.page().await?;
        test_page.page.set_viewport(768, 1024, true).await?;
        Ok(test_page)
    }

    /// A page whose every request is held for `latency` before continuing,
    /// for loading-state and spinner checks.
    pub async fn slow_network_page(&self, latency: Duration) -> BrowserResult<TestPage> {
        let mut test_page = self.page().await?;
        let interceptor =
            intercept_route(&test_page.page, "**/*", RouteAction::Delay { latency }).await?;
        test_page.interceptor = Some(interceptor);
        Ok(test_page)
    }

    /// Shut the shared browser down. Contexts still open go down with it.
    pub async fn shutdown(self) {
        marketplace_browser::cleanup(None, Some(self.browser), Some(self.session)).await;
    }
}
