//! Browsing-context stub: the per-test isolation boundary.
//!
//! A context owns its pages and its cookie jar. Cookies set here exist before
//! any page opens, which is what the authenticated-page fixture relies on.

use std::sync::Arc;
use std::time::Duration;

use chromiumoxide::cdp::browser_protocol::browser::BrowserContextId;
use chromiumoxide::cdp::browser_protocol::network::CookieParam;
use tracing::debug;

use crate::error::{BrowserError, BrowserResult};
use crate::page::PageHandle;
use crate::session::BrowserHandle;

/// A cookie to install into a context or page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CookieSpec {
    pub name: String,
    pub value: String,
    pub domain: String,
    pub path: String,
}

impl CookieSpec {
    /// Cookie scoped to `localhost` at `/`, the suite's target frontend.
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            domain: "localhost".to_string(),
            path: "/".to_string(),
        }
    }

    pub(crate) fn into_param(self) -> BrowserResult<CookieParam> {
        CookieParam::builder()
            .name(self.name)
            .value(self.value)
            .domain(self.domain)
            .path(self.path)
            .build()
            .map_err(BrowserError::Protocol)
    }
}

/// Isolated browsing context with a default interaction timeout that its
/// pages inherit (5000 ms unless overridden at creation).
pub struct ContextHandle {
    id: BrowserContextId,
    browser: Arc<BrowserHandle>,
    default_timeout: Duration,
}

impl ContextHandle {
    /// Create a fresh context on the given browser.
    pub async fn create(
        browser: Arc<BrowserHandle>,
        default_timeout: Duration,
    ) -> BrowserResult<Self> {
        let id = browser.create_context().await?;
        debug!(context = ?id, "browser context created");
        Ok(Self {
            id,
            browser,
            default_timeout,
        })
    }

    pub fn default_timeout(&self) -> Duration {
        self.default_timeout
    }

    /// Open a new page in this context.
    pub async fn new_page(&self) -> BrowserResult<PageHandle> {
        let page = self.browser.new_page_in_context(&self.id).await?;
        Ok(PageHandle::new(page, self.default_timeout))
    }

    /// Install cookies into the context jar.
    pub async fn set_cookies(&self, cookies: Vec<CookieSpec>) -> BrowserResult<()> {
        let params = cookies
            .into_iter()
            .map(CookieSpec::into_param)
            .collect::<BrowserResult<Vec<_>>>()?;
        self.browser.set_context_cookies(&self.id, params).await
    }

    /// All cookies currently in the context jar.
    pub async fn cookies(&self) -> BrowserResult<Vec<CookieSpec>> {
        let cookies = self.browser.get_context_cookies(&self.id).await?;
        Ok(cookies
            .into_iter()
            .map(|c| CookieSpec {
                name: c.name,
                value: c.value,
                domain: c.domain,
                path: c.path,
            })
            .collect())
    }

    pub async fn clear_cookies(&self) -> BrowserResult<()> {
        self.browser.clear_context_cookies(&self.id).await
    }

    /// Dispose the context; every page it owns closes with it.
    pub async fn close(self) -> BrowserResult<()> {
        debug!(context = ?self.id, "disposing browser context");
        self.browser.dispose_context(self.id).await
    }
}
