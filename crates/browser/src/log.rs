//! Passive per-test observers: console messages and outgoing requests.
//!
//! Each logger installs one listener for the duration of a test and
//! accumulates what it sees; `detach` (or drop) removes it. Observation
//! only; nothing here alters page behavior.

use std::sync::Arc;

use chromiumoxide::cdp::browser_protocol::network::{self, EventRequestWillBeSent};
use chromiumoxide::cdp::js_protocol::runtime::{self, EventConsoleApiCalled};
use futures::StreamExt;
use parking_lot::Mutex;
use serde::Serialize;
use tokio::task::JoinHandle;

use crate::error::BrowserResult;
use crate::page::PageHandle;

/// One console message.
#[derive(Debug, Clone, Serialize)]
pub struct ConsoleEntry {
    /// Message kind (`Log`, `Error`, `Warning`, ...).
    pub kind: String,
    pub text: String,
}

/// Accumulates console messages emitted by a page.
pub struct ConsoleLog {
    entries: Arc<Mutex<Vec<ConsoleEntry>>>,
    task: JoinHandle<()>,
}

impl ConsoleLog {
    pub async fn attach(page: &PageHandle) -> BrowserResult<Self> {
        page.inner().execute(runtime::EnableParams::default()).await?;
        let mut events = page
            .inner()
            .event_listener::<EventConsoleApiCalled>()
            .await?;

        let entries = Arc::new(Mutex::new(Vec::new()));
        let sink = entries.clone();
        let task = tokio::spawn(async move {
            while let Some(event) = events.next().await {
                let text = event
                    .args
                    .iter()
                    .filter_map(|arg| arg.value.as_ref())
                    .map(|value| match value {
                        serde_json::Value::String(s) => s.clone(),
                        other => other.to_string(),
                    })
                    .collect::<Vec<_>>()
                    .join(" ");
                sink.lock().push(ConsoleEntry {
                    kind: format!("{:?}", event.r#type),
                    text,
                });
            }
        });

        Ok(Self { entries, task })
    }

    /// Messages observed so far.
    pub fn entries(&self) -> Vec<ConsoleEntry> {
        self.entries.lock().clone()
    }

    /// Messages of a given kind (`"Error"` catches page script failures).
    pub fn entries_of_kind(&self, kind: &str) -> Vec<ConsoleEntry> {
        self.entries
            .lock()
            .iter()
            .filter(|e| e.kind == kind)
            .cloned()
            .collect()
    }

    pub fn detach(self) {
        self.task.abort();
    }
}

impl Drop for ConsoleLog {
    fn drop(&mut self) {
        self.task.abort();
    }
}

/// One observed outgoing request.
#[derive(Debug, Clone, Serialize)]
pub struct RequestEntry {
    pub url: String,
    pub method: String,
    pub resource_type: String,
}

/// Accumulates network requests issued by a page.
pub struct NetworkLog {
    entries: Arc<Mutex<Vec<RequestEntry>>>,
    task: JoinHandle<()>,
}

impl NetworkLog {
    pub async fn attach(page: &PageHandle) -> BrowserResult<Self> {
        page.inner().execute(network::EnableParams::default()).await?;
        let mut events = page
            .inner()
            .event_listener::<EventRequestWillBeSent>()
            .await?;

        let entries = Arc::new(Mutex::new(Vec::new()));
        let sink = entries.clone();
        let task = tokio::spawn(async move {
            while let Some(event) = events.next().await {
                sink.lock().push(RequestEntry {
                    url: event.request.url.clone(),
                    method: event.request.method.clone(),
                    resource_type: event
                        .r#type
                        .as_ref()
                        .map(|t| format!("{:?}", t))
                        .unwrap_or_default(),
                });
            }
        });

        Ok(Self { entries, task })
    }

    pub fn entries(&self) -> Vec<RequestEntry> {
        self.entries.lock().clone()
    }

    /// Requests whose URL contains `fragment` (`"/api/"` is the usual probe).
    pub fn requests_containing(&self, fragment: &str) -> Vec<RequestEntry> {
        self.entries
            .lock()
            .iter()
            .filter(|e| e.url.contains(fragment))
            .cloned()
            .collect()
    }

    pub fn detach(self) {
        self.task.abort();
    }
}

impl Drop for NetworkLog {
    fn drop(&mut self) {
        self.task.abort();
    }
}
