//! Pantalla: Screen-Centric UI Scenario Harness
//!
//! Pantalla (Spanish: "screen") drives browser home-screen scenarios
//! against a deterministic in-process application model, with a local
//! HTTP asset origin for page fixtures and a bounded-retry executor
//! for flake containment.
//!
//! # Architecture
//!
//! ```text
//! ┌────────────────────────────────────────────────────────────────┐
//! │                    PANTALLA Architecture                        │
//! ├────────────────────────────────────────────────────────────────┤
//! │   ┌────────────┐    ┌────────────┐    ┌────────────┐           │
//! │   │ Scenario   │    │ Screen     │    │ App        │           │
//! │   │ + Retry    │───►│ Robots     │───►│ Session    │           │
//! │   │ Executor   │    │ (typed)    │    │ + Origin   │           │
//! │   └────────────┘    └────────────┘    └────────────┘           │
//! └────────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Example
//!
//! ```
//! use pantalla::{RetryRunner, Scenario};
//!
//! let scenario = Scenario::new("first page load", |ctx| {
//!     let page = ctx.server().page(1)?;
//!     ctx.home()?
//!         .dismiss_onboarding()?
//!         .open_url(&page.url)?
//!         .to(|browser| browser.verify_page_content("Page content: 1").map(|_| ()))
//! });
//! assert!(RetryRunner::default().run(&scenario).is_pass());
//! ```

#![warn(missing_docs)]
// Lints are configured in workspace Cargo.toml [workspace.lints.clippy]
#![cfg_attr(test, allow(clippy::unwrap_used))]

/// Simulated application: session state machine and device driver
pub mod app;
/// Local HTTP asset origin and page fixtures
pub mod asset;
/// Suite aggregation, reporting and logging setup
pub mod report;
/// Error and result types
pub mod result;
/// Screen-object navigation layer
pub mod robot;
/// Scenario definitions and the bounded-retry executor
pub mod scenario;
/// Homepage settings overrides
pub mod settings;
/// Bounded wait and poll primitives
pub mod wait;

pub use app::{AppSession, Device, Surface, Tab, UiElement};
pub use asset::{fetch_page, AssetServer, FetchedPage, PageFixture, ASSET_PATH_PREFIX};
pub use report::{init_logging, ReportEntry, ScenarioSuite, Status, SuiteReport};
pub use result::{HarnessError, HarnessResult};
pub use robot::{
    enter, home_screen, BrowserScreen, CustomizePanel, HomeScreen, PrivateHomeScreen, TabOverview,
    Transition,
};
pub use scenario::{
    Outcome, RetryPolicy, RetryRunner, Scenario, ScenarioContext, DEFAULT_RETRY_ATTEMPTS,
};
pub use settings::SettingsOverrides;
pub use wait::{poll_until, WaitOptions, DEFAULT_POLL_INTERVAL_MS, DEFAULT_WAIT_TIMEOUT_MS};

/// Prelude for convenient imports
pub mod prelude {
    pub use super::report::{init_logging, ScenarioSuite, Status, SuiteReport};
    pub use super::result::{HarnessError, HarnessResult};
    pub use super::robot::{
        enter, home_screen, BrowserScreen, CustomizePanel, HomeScreen, PrivateHomeScreen,
        TabOverview, Transition,
    };
    pub use super::scenario::{Outcome, RetryPolicy, RetryRunner, Scenario, ScenarioContext};
    pub use super::settings::SettingsOverrides;
    pub use super::{AssetServer, PageFixture};
}

#[cfg(test)]
mod tests {
    use super::prelude::*;

    #[test]
    fn test_scenario_through_public_api() {
        init_logging();
        let scenario = Scenario::new("smoke", |ctx| {
            let page = ctx.server().page(1)?;
            ctx.home()?
                .dismiss_onboarding()?
                .open_url(&page.url)?
                .to(|browser| {
                    browser
                        .verify_url(&page.url)?
                        .verify_page_content("Page content: 1")
                        .map(|_| ())
                })
        });
        let report = ScenarioSuite::new("smoke").register(scenario).run();
        assert!(report.all_passed());
    }

    #[test]
    fn test_prelude_covers_scenario_building() {
        let scenario = Scenario::new("typed", |_ctx| Ok(()))
            .with_settings(SettingsOverrides::default().with_onboarding(false));
        let outcome = RetryRunner::new(RetryPolicy::no_retries()).run(&scenario);
        assert!(matches!(outcome, Outcome::Passed { attempts: 1 }));
    }
}
