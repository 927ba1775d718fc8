//! Scenario-level helpers: the final visible-text assertion, failure
//! screenshots, and the envelope-to-route bridge.

use std::path::PathBuf;
use std::time::Duration;

use anyhow::anyhow;
use tracing::{info, warn};

use marketplace_browser::{PageHandle, RouteAction};
use marketplace_mockdata::ApiEnvelope;

/// Wait for `text` to appear in the page body, converting a timeout into
/// the scenario's own failure message.
///
/// Every scenario ends with one of these: the text is the frontend's
/// success marker, the message is what the test plan says a failure means.
pub async fn expect_visible_text(
    page: &PageHandle,
    text: &str,
    timeout: Duration,
    failure_message: &str,
) -> anyhow::Result<()> {
    match page.wait_for_visible_text(text, timeout).await {
        Ok(()) => {
            info!(text, "expected text is visible");
            Ok(())
        }
        Err(e) => Err(anyhow!("{failure_message} ({e})")),
    }
}

/// Save a full-page screenshot under `screenshots/<test_name>.png`.
///
/// Best-effort: called on the failure path, where a screenshot error must
/// not mask the assertion that brought us here.
pub async fn screenshot_on_failure(page: &PageHandle, test_name: &str) {
    let path = PathBuf::from("screenshots").join(format!("{test_name}.png"));
    match page.take_screenshot(&path, true).await {
        Ok(()) => info!(path = %path.display(), "failure screenshot saved"),
        Err(e) => warn!(error = %e, "failure screenshot could not be taken"),
    }
}

/// Turn a canned API envelope into the route action that serves it.
pub fn fulfill_with(envelope: &ApiEnvelope) -> RouteAction {
    RouteAction::Fulfill {
        status: envelope.status,
        body: envelope.body.clone(),
    }
}
