//! Page-level interaction stubs.
//!
//! Every stub is a pass-through to one CDP capability with a documented
//! default timeout. Interaction stubs auto-wait: they poll until the target
//! is actionable or the timeout elapses, and a timeout surfaces as
//! [`BrowserError::Timeout`]. The one exception is the load-state wait
//! family, which swallows its own timeout: slow or partial page loads are
//! routine under test and must not abort setup.

use std::path::Path;
use std::time::{Duration, Instant};

use chromiumoxide::cdp::browser_protocol::emulation::SetDeviceMetricsOverrideParams;
use chromiumoxide::cdp::browser_protocol::network::{
    ClearBrowserCookiesParams, CookieParam,
};
use chromiumoxide::cdp::browser_protocol::page::CaptureScreenshotFormat;
use chromiumoxide::page::ScreenshotParams;
use chromiumoxide::{Element, Page};
use serde_json::Value;
use tracing::{debug, warn};

use crate::error::{BrowserError, BrowserResult};
use crate::{DEFAULT_LOAD_STATE_TIMEOUT, POLL_INTERVAL};

/// Load states a page (or frame) can be waited on, coarsest first.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LoadState {
    /// Navigation committed; the document object exists.
    Commit,
    /// DOM parsed (`readyState` is `interactive` or `complete`).
    #[default]
    DomContentLoaded,
    /// All subresources finished (`readyState` is `complete`).
    Load,
}

impl LoadState {
    fn predicate(self) -> &'static str {
        match self {
            LoadState::Commit => "document !== undefined",
            LoadState::DomContentLoaded => {
                "document.readyState === 'interactive' || document.readyState === 'complete'"
            }
            LoadState::Load => "document.readyState === 'complete'",
        }
    }
}

/// Element states for [`PageHandle::wait_for_selector`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ElementState {
    #[default]
    Visible,
    Hidden,
    Attached,
    Detached,
}

/// JSON-quote a string for safe embedding into an evaluated script.
fn js_string(s: &str) -> String {
    Value::String(s.to_string()).to_string()
}

fn visibility_expr(selector: &str) -> String {
    format!(
        "(() => {{ const el = document.querySelector({sel}); if (!el) return false; \
         const r = el.getBoundingClientRect(); const s = getComputedStyle(el); \
         return r.width > 0 && r.height > 0 && s.visibility !== 'hidden' && s.display !== 'none'; }})()",
        sel = js_string(selector)
    )
}

/// One browser tab plus the interaction timeout it inherited from its
/// context.
#[derive(Clone)]
pub struct PageHandle {
    inner: Page,
    default_timeout: Duration,
}

impl PageHandle {
    pub fn new(page: Page, default_timeout: Duration) -> Self {
        Self {
            inner: page,
            default_timeout,
        }
    }

    /// Escape hatch to the raw CDP page.
    pub fn inner(&self) -> &Page {
        &self.inner
    }

    pub fn default_timeout(&self) -> Duration {
        self.default_timeout
    }

    /// Navigate to `url`, bounded by `timeout` (callers usually pass the
    /// 10000 ms navigation default). The error propagates here; the
    /// composite setup is the one that swallows it.
    pub async fn navigate(&self, url: &str, timeout: Duration) -> BrowserResult<()> {
        debug!(url, "navigating");
        let goto = self.inner.goto(url);
        match tokio::time::timeout(timeout, goto).await {
            Ok(Ok(_)) => Ok(()),
            Ok(Err(e)) => Err(BrowserError::Navigation(format!("{}: {}", url, e))),
            Err(_) => Err(BrowserError::timeout(format!("navigation to {}", url), timeout)),
        }
    }

    /// Poll `expr` (a JS boolean expression) until it is true. Evaluation
    /// errors count as "not yet"; the page may be mid-navigation.
    async fn poll_until(&self, what: &str, timeout: Duration, expr: &str) -> BrowserResult<()> {
        let start = Instant::now();
        loop {
            let ready = match self.inner.evaluate(expr.to_string()).await {
                Ok(result) => result.into_value::<bool>().unwrap_or(false),
                Err(_) => false,
            };
            if ready {
                return Ok(());
            }
            if start.elapsed() >= timeout {
                return Err(BrowserError::timeout(what, timeout));
            }
            tokio::time::sleep(POLL_INTERVAL).await;
        }
    }

    /// Wait for the main document to reach `state`. Timeout is swallowed by
    /// contract; this is the only stub family allowed to do so.
    pub async fn wait_for_load_state(&self, state: LoadState, timeout: Duration) {
        let what = format!("load state {:?}", state);
        if let Err(e) = self.poll_until(&what, timeout, state.predicate()).await {
            debug!(error = %e, "load state wait swallowed");
        }
    }

    /// Best-effort wait for every attached iframe to reach `state`; each
    /// frame's failure is independently swallowed. Cross-origin frames
    /// cannot be inspected and count as loaded.
    pub async fn wait_for_all_frames(&self, state: LoadState, timeout: Duration) {
        let ready_states = match state {
            LoadState::Commit => "true",
            LoadState::DomContentLoaded => {
                "doc.readyState === 'interactive' || doc.readyState === 'complete'"
            }
            LoadState::Load => "doc.readyState === 'complete'",
        };
        let expr = format!(
            "(() => Array.from(document.querySelectorAll('iframe')).every((f) => {{ \
             try {{ const doc = f.contentDocument; return !doc || {ready_states}; }} \
             catch (err) {{ return true; }} }}))()"
        );
        if let Err(e) = self.poll_until("all frames loaded", timeout, &expr).await {
            debug!(error = %e, "frame load wait swallowed");
        }
    }

    /// Resolve a selector to an element, auto-waiting until attached.
    async fn resolve_element(&self, selector: &str, timeout: Duration) -> BrowserResult<Element> {
        let start = Instant::now();
        loop {
            match self.inner.find_element(selector).await {
                Ok(element) => return Ok(element),
                Err(_) if start.elapsed() < timeout => tokio::time::sleep(POLL_INTERVAL).await,
                Err(_) => {
                    return Err(BrowserError::timeout(format!("element {}", selector), timeout))
                }
            }
        }
    }

    /// Click an element (default timeout: the context's 5000 ms).
    pub async fn click_element(&self, selector: &str, timeout: Duration) -> BrowserResult<()> {
        let element = self.resolve_element(selector, timeout).await?;
        element.click().await?;
        Ok(())
    }

    /// Clear an input and type `value` into it.
    pub async fn fill_input(
        &self,
        selector: &str,
        value: &str,
        timeout: Duration,
    ) -> BrowserResult<()> {
        let element = self.resolve_element(selector, timeout).await?;
        element.click().await?;
        let clear = format!(
            "(() => {{ const el = document.querySelector({sel}); if (el) el.value = ''; }})()",
            sel = js_string(selector)
        );
        self.inner.evaluate(clear).await?;
        element.type_str(value).await?;
        Ok(())
    }

    /// Select an option in a `<select>` by value, firing change events.
    pub async fn select_option(
        &self,
        selector: &str,
        value: &str,
        timeout: Duration,
    ) -> BrowserResult<()> {
        self.resolve_element(selector, timeout).await?;
        let script = format!(
            "(() => {{ const el = document.querySelector({sel}); if (!el) return false; \
             el.value = {val}; \
             el.dispatchEvent(new Event('input', {{ bubbles: true }})); \
             el.dispatchEvent(new Event('change', {{ bubbles: true }})); return true; }})()",
            sel = js_string(selector),
            val = js_string(value)
        );
        self.inner.evaluate(script).await?;
        Ok(())
    }

    /// Wait for an element to reach `state` (default timeout: 30000 ms).
    pub async fn wait_for_selector(
        &self,
        selector: &str,
        state: ElementState,
        timeout: Duration,
    ) -> BrowserResult<()> {
        let expr = match state {
            ElementState::Attached => {
                format!("document.querySelector({}) !== null", js_string(selector))
            }
            ElementState::Detached => {
                format!("document.querySelector({}) === null", js_string(selector))
            }
            ElementState::Visible => visibility_expr(selector),
            ElementState::Hidden => format!("!({})", visibility_expr(selector)),
        };
        let what = format!("selector {} to be {:?}", selector, state);
        self.poll_until(&what, timeout, &expr).await
    }

    /// Text content of the first element matching `selector`.
    pub async fn get_text(&self, selector: &str) -> BrowserResult<String> {
        let element = self.resolve_element(selector, self.default_timeout).await?;
        Ok(element.inner_text().await?.unwrap_or_default())
    }

    /// Wait until `text` is present in the page's visible text. This is the
    /// assertion primitive scenario scripts build on.
    pub async fn wait_for_visible_text(&self, text: &str, timeout: Duration) -> BrowserResult<()> {
        let expr = format!(
            "document.body !== null && document.body.innerText.includes({})",
            js_string(text)
        );
        let what = format!("visible text {:?}", text);
        self.poll_until(&what, timeout, &expr).await
    }

    /// Wait until the document is loaded and the resource count has been
    /// stable for one sampling interval, an approximation of a quiet
    /// network. Unlike load-state waits, the timeout here propagates.
    pub async fn wait_for_network_idle(&self, timeout: Duration) -> BrowserResult<()> {
        const SAMPLE_INTERVAL: Duration = Duration::from_millis(500);
        let expr =
            "[document.readyState, performance.getEntriesByType('resource').length]".to_string();
        let start = Instant::now();
        let mut last_count: Option<u64> = None;
        loop {
            if let Ok(result) = self.inner.evaluate(expr.clone()).await {
                if let Ok((ready_state, count)) = result.into_value::<(String, u64)>() {
                    if ready_state == "complete" && last_count == Some(count) {
                        return Ok(());
                    }
                    last_count = Some(count);
                }
            }
            if start.elapsed() >= timeout {
                return Err(BrowserError::timeout("network idle", timeout));
            }
            tokio::time::sleep(SAMPLE_INTERVAL).await;
        }
    }

    /// Evaluate a script, returning its JSON value.
    pub async fn execute_script(&self, script: &str) -> BrowserResult<Value> {
        let result = self.inner.evaluate(script.to_string()).await?;
        Ok(result.into_value::<Value>().unwrap_or(Value::Null))
    }

    /// Screenshot the page to `path` (PNG), creating parent directories.
    pub async fn take_screenshot(&self, path: &Path, full_page: bool) -> BrowserResult<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        let params = ScreenshotParams::builder()
            .format(CaptureScreenshotFormat::Png)
            .full_page(full_page)
            .build();
        self.inner.save_screenshot(params, path).await?;
        debug!(path = %path.display(), "screenshot written");
        Ok(())
    }

    /// Override the viewport (mobile/tablet fixtures use this before
    /// navigation).
    pub async fn set_viewport(&self, width: u32, height: u32, mobile: bool) -> BrowserResult<()> {
        let params = SetDeviceMetricsOverrideParams::builder()
            .width(width as i64)
            .height(height as i64)
            .device_scale_factor(1.0)
            .mobile(mobile)
            .build()
            .map_err(BrowserError::Protocol)?;
        self.inner.execute(params).await?;
        Ok(())
    }

    /// Cookies visible to this page.
    pub async fn get_cookies(&self) -> BrowserResult<Vec<chromiumoxide::cdp::browser_protocol::network::Cookie>> {
        Ok(self.inner.get_cookies().await?)
    }

    /// Set cookies through this page.
    pub async fn set_cookies(&self, cookies: Vec<CookieParam>) -> BrowserResult<()> {
        self.inner.set_cookies(cookies).await?;
        Ok(())
    }

    /// Clear all browser cookies.
    pub async fn clear_cookies(&self) -> BrowserResult<()> {
        self.inner.execute(ClearBrowserCookiesParams::default()).await?;
        Ok(())
    }

    /// Close just this page. Prefer closing the owning context; this exists
    /// for fixtures that open extra pages inside one context.
    pub async fn close(self) {
        if let Err(e) = self.inner.close().await {
            warn!(error = %e, "failed to close page");
        }
    }
}

/// Timed delay stub.
pub async fn sleep(duration: Duration) {
    tokio::time::sleep(duration).await;
}

/// Convenience wrapper mirroring the default load-state wait: state
/// `DomContentLoaded`, timeout 3000 ms, swallowed on failure.
pub async fn wait_for_default_load_state(page: &PageHandle) {
    page.wait_for_load_state(LoadState::default(), DEFAULT_LOAD_STATE_TIMEOUT)
        .await;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn js_string_quotes_and_escapes() {
        assert_eq!(js_string("plain"), "\"plain\"");
        assert_eq!(js_string("with \"quotes\""), "\"with \\\"quotes\\\"\"");
        assert_eq!(js_string("a'b"), "\"a'b\"");
    }

    #[test]
    fn load_state_predicates() {
        assert!(LoadState::Load.predicate().contains("complete"));
        assert!(LoadState::DomContentLoaded.predicate().contains("interactive"));
        assert_eq!(LoadState::default(), LoadState::DomContentLoaded);
    }

    #[test]
    fn visibility_expression_embeds_quoted_selector() {
        let expr = visibility_expr("button[type='submit']");
        assert!(expr.contains("\"button[type='submit']\""));
        assert!(expr.contains("getBoundingClientRect"));
    }
}
