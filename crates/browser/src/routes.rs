//! Route interception: fulfill matched requests locally, let the rest
//! through to the real network.
//!
//! Patterns use the URL glob convention (`**/api/**`): `**` crosses path
//! segments, `*` stays within one, `?` matches a single character.

use std::time::Duration;

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use chromiumoxide::cdp::browser_protocol::fetch::{
    self, ContinueRequestParams, EventRequestPaused, FulfillRequestParams, HeaderEntry,
    RequestPattern,
};
use futures::StreamExt;
use regex::Regex;
use serde_json::Value;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

use crate::error::{BrowserError, BrowserResult};
use crate::page::PageHandle;

/// What to do with a request whose URL matches the pattern.
#[derive(Debug, Clone)]
pub enum RouteAction {
    /// Fulfill with a canned JSON response, bypassing the backend.
    Fulfill { status: u16, body: Value },
    /// Hold the request for `latency`, then let it continue (slow-network
    /// simulation).
    Delay { latency: Duration },
}

/// Fetch.fulfillRequest carries its body as a base64 field; encode the
/// serialized JSON accordingly or Chrome decodes it into garbage.
pub(crate) fn encode_fulfill_body(body: &Value) -> String {
    BASE64.encode(body.to_string())
}

/// Translate a URL glob into an anchored regex.
pub(crate) fn glob_to_regex(pattern: &str) -> BrowserResult<Regex> {
    let mut regex = String::with_capacity(pattern.len() * 2);
    regex.push('^');
    let mut chars = pattern.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '*' => {
                if chars.peek() == Some(&'*') {
                    chars.next();
                    regex.push_str(".*");
                } else {
                    regex.push_str("[^/]*");
                }
            }
            '?' => regex.push('.'),
            c => regex.push_str(&regex::escape(&c.to_string())),
        }
    }
    regex.push('$');
    Regex::new(&regex).map_err(|e| BrowserError::Pattern {
        pattern: pattern.to_string(),
        reason: e.to_string(),
    })
}

/// A live interceptor. Prefer [`detach`], which awaits the disable before
/// stopping the matcher; plain drop stops the matcher and issues the
/// disable fire-and-forget, so a request paused in that window may stall
/// until it lands.
///
/// [`detach`]: RouteInterceptor::detach
pub struct RouteInterceptor {
    task: JoinHandle<()>,
    page: PageHandle,
}

impl RouteInterceptor {
    /// Disable interception and stop the matcher task.
    pub async fn detach(self) {
        if let Err(e) = self.page.inner().execute(fetch::DisableParams::default()).await {
            warn!(error = %e, "failed to disable fetch interception");
        }
        self.task.abort();
    }
}

impl Drop for RouteInterceptor {
    fn drop(&mut self) {
        self.task.abort();
        // Nothing may stay paused once the matcher is gone.
        let page = self.page.clone();
        if let Ok(handle) = tokio::runtime::Handle::try_current() {
            handle.spawn(async move {
                let _ = page.inner().execute(fetch::DisableParams::default()).await;
            });
        }
    }
}

/// Intercept every request on `page` whose URL matches `pattern` and apply
/// `action`; unmatched requests continue to the network untouched.
pub async fn intercept_route(
    page: &PageHandle,
    pattern: &str,
    action: RouteAction,
) -> BrowserResult<RouteInterceptor> {
    let matcher = glob_to_regex(pattern)?;
    let mut paused = page.inner().event_listener::<EventRequestPaused>().await?;

    let target = page.inner().clone();
    let pattern_owned = pattern.to_string();
    let task = tokio::spawn(async move {
        while let Some(event) = paused.next().await {
            let request_id = event.request_id.clone();
            if !matcher.is_match(&event.request.url) {
                if let Err(e) = target.execute(ContinueRequestParams::new(request_id)).await {
                    debug!(error = %e, "continue failed for unmatched request");
                }
                continue;
            }
            debug!(url = %event.request.url, pattern = %pattern_owned, "route matched");
            match &action {
                RouteAction::Fulfill { status, body } => {
                    let params = FulfillRequestParams::builder()
                        .request_id(request_id)
                        .response_code(i64::from(*status))
                        .response_headers(vec![HeaderEntry {
                            name: "Content-Type".to_string(),
                            value: "application/json".to_string(),
                        }])
                        .body(encode_fulfill_body(body))
                        .build();
                    match params {
                        Ok(params) => {
                            if let Err(e) = target.execute(params).await {
                                warn!(error = %e, "failed to fulfill intercepted request");
                            }
                        }
                        Err(e) => warn!(error = %e, "invalid fulfill parameters"),
                    }
                }
                RouteAction::Delay { latency } => {
                    // Sleep off the matcher loop so concurrent paused
                    // requests overlap their delays instead of stacking.
                    let target = target.clone();
                    let latency = *latency;
                    tokio::spawn(async move {
                        tokio::time::sleep(latency).await;
                        if let Err(e) =
                            target.execute(ContinueRequestParams::new(request_id)).await
                        {
                            debug!(error = %e, "continue failed after delay");
                        }
                    });
                }
            }
        }
    });

    // Pause every request; the matcher task decides per URL.
    let enable = fetch::EnableParams::builder()
        .patterns(vec![RequestPattern::builder().url_pattern("*").build()])
        .build();
    page.inner().execute(enable).await?;

    Ok(RouteInterceptor {
        task,
        page: page.clone(),
    })
}
