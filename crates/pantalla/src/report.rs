//! Suite aggregation and reporting.
//!
//! A [`ScenarioSuite`] owns an ordered list of scenarios and drives
//! them through one [`RetryRunner`], producing a [`SuiteReport`] that
//! serializes to JSON for machine consumption.

use std::sync::Once;
use std::time::Instant;

use serde::Serialize;

use crate::result::{HarnessError, HarnessResult};
use crate::scenario::{Outcome, RetryRunner, Scenario};

/// Install the global tracing subscriber once per process.
///
/// Filtering follows `RUST_LOG`; repeated calls are no-ops so tests
/// can all invoke it without coordinating.
pub fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}

/// Terminal status of one scenario
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    /// Passed within its attempt budget
    Passed,
    /// Exhausted its budget or hit a fatal error
    Failed,
    /// Marked skipped, never ran
    Skipped,
}

/// One row of a suite report
#[derive(Debug, Clone, Serialize)]
pub struct ReportEntry {
    /// Scenario name
    pub name: String,
    /// Terminal status
    pub status: Status,
    /// Attempts consumed; zero when skipped
    pub attempts: u32,
    /// Wall-clock time across all attempts
    pub duration_ms: u64,
    /// Final error or skip reason, when there is one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

/// Aggregated outcome of a suite run
#[derive(Debug, Clone, Serialize)]
pub struct SuiteReport {
    /// Suite name
    pub suite: String,
    /// One entry per scenario, in registration order
    pub entries: Vec<ReportEntry>,
}

impl SuiteReport {
    /// Count of entries with the given status
    #[must_use]
    pub fn count(&self, status: Status) -> usize {
        self.entries.iter().filter(|e| e.status == status).count()
    }

    /// Whether no scenario failed (skips do not fail a suite)
    #[must_use]
    pub fn all_passed(&self) -> bool {
        self.count(Status::Failed) == 0
    }

    /// Process exit code: 0 on success, 1 when anything failed
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        i32::from(!self.all_passed())
    }

    /// Render the report as pretty-printed JSON
    pub fn to_json(&self) -> HarnessResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| HarnessError::Configuration {
            message: format!("report serialization failed: {e}"),
        })
    }
}

/// An ordered collection of scenarios run under one retry policy
pub struct ScenarioSuite {
    name: String,
    runner: RetryRunner,
    scenarios: Vec<Scenario>,
}

impl std::fmt::Debug for ScenarioSuite {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScenarioSuite")
            .field("name", &self.name)
            .field("runner", &self.runner)
            .field("scenarios", &self.scenarios.len())
            .finish()
    }
}

impl ScenarioSuite {
    /// Empty suite using the default retry policy
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            runner: RetryRunner::default(),
            scenarios: Vec::new(),
        }
    }

    /// Replace the runner used for every scenario
    #[must_use]
    pub fn with_runner(mut self, runner: RetryRunner) -> Self {
        self.runner = runner;
        self
    }

    /// Add a scenario to the end of the run order
    #[must_use]
    pub fn register(mut self, scenario: Scenario) -> Self {
        self.scenarios.push(scenario);
        self
    }

    /// Number of registered scenarios
    #[must_use]
    pub fn len(&self) -> usize {
        self.scenarios.len()
    }

    /// Whether the suite has no scenarios
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.scenarios.is_empty()
    }

    /// Run every scenario in order and collect the report
    #[must_use]
    pub fn run(&self) -> SuiteReport {
        tracing::info!(suite = %self.name, scenarios = self.scenarios.len(), "suite started");
        let entries = self
            .scenarios
            .iter()
            .map(|scenario| {
                let started = Instant::now();
                let outcome = self.runner.run(scenario);
                let duration_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX);
                let (status, attempts, detail) = match outcome {
                    Outcome::Passed { attempts } => (Status::Passed, attempts, None),
                    Outcome::Failed { attempts, error } => {
                        (Status::Failed, attempts, Some(error.to_string()))
                    }
                    Outcome::Skipped { reason } => (Status::Skipped, 0, Some(reason)),
                };
                ReportEntry {
                    name: scenario.name().to_string(),
                    status,
                    attempts,
                    duration_ms,
                    detail,
                }
            })
            .collect();
        let report = SuiteReport {
            suite: self.name.clone(),
            entries,
        };
        tracing::info!(
            suite = %report.suite,
            passed = report.count(Status::Passed),
            failed = report.count(Status::Failed),
            skipped = report.count(Status::Skipped),
            "suite finished"
        );
        report
    }
}
