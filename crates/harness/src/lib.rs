//! Marketplace Harness
//!
//! The fixture layer of the E2E suite. A [`Suite`] owns one browser for a
//! whole test run and hands out isolated pages (plain, authenticated,
//! mobile, tablet, throttled); [`TestData`] and [`TestCredentials`] supply
//! the canned records scenarios drive the frontend with; the scenario
//! helpers wrap the visible-text assertion and failure screenshots.
//!
//! Scenario scripts live in this crate's `tests/` directory. They need a
//! local Chromium and the marketplace frontend on `http://localhost:3000`,
//! so they are ignored by default:
//!
//! ```text
//! cargo test -p marketplace-harness -- --ignored
//! ```

pub mod data;
pub mod logging;
pub mod perf;
pub mod scenario;
pub mod suite;

pub use data::{Credentials, TestCredentials, TestData, Timeouts};
pub use logging::init_tracing;
pub use perf::{PerformanceTracker, TimedEvent};
pub use scenario::{expect_visible_text, fulfill_with, screenshot_on_failure};
pub use suite::{Suite, SuiteOptions, TestPage};
