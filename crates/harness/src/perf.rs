//! Per-test timing: wall-clock span plus named milestones.

use std::time::{Duration, Instant};

/// One named milestone, offset from the tracker's start.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimedEvent {
    pub name: String,
    /// Offset from `start`; zero when recorded before it.
    pub elapsed: Duration,
}

/// Tracks how long a test (or a phase of it) took, with named events
/// along the way. Scenarios create one per test when they care about
/// timing; nothing installs it automatically.
#[derive(Debug, Default)]
pub struct PerformanceTracker {
    started: Option<Instant>,
    stopped: Option<Instant>,
    events: Vec<TimedEvent>,
}

impl PerformanceTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn start(&mut self) {
        self.started = Some(Instant::now());
    }

    pub fn stop(&mut self) {
        self.stopped = Some(Instant::now());
    }

    /// Record a named milestone at the current offset from `start`.
    pub fn add_event(&mut self, name: &str) {
        let elapsed = self
            .started
            .map(|started| started.elapsed())
            .unwrap_or_default();
        self.events.push(TimedEvent {
            name: name.to_string(),
            elapsed,
        });
    }

    /// Time between `start` and `stop`; `None` until both have run.
    pub fn duration(&self) -> Option<Duration> {
        match (self.started, self.stopped) {
            (Some(started), Some(stopped)) => Some(stopped.saturating_duration_since(started)),
            _ => None,
        }
    }

    /// Milestones recorded so far, in call order.
    pub fn events(&self) -> &[TimedEvent] {
        &self.events
    }
}
