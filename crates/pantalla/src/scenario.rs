//! Scenario definitions and the bounded-retry executor.
//!
//! A [`Scenario`] owns a body closure plus the settings overrides it
//! needs. Every attempt gets a brand new [`ScenarioContext`]: its own
//! asset origin on a fresh ephemeral port and its own app session, so
//! a retried attempt can never observe state leaked by a failed one.

use std::fmt;

use crate::app::{AppSession, Device};
use crate::asset::AssetServer;
use crate::result::{HarnessError, HarnessResult};
use crate::robot::enter;
use crate::robot::home::{home_screen, HomeScreen};
use crate::settings::SettingsOverrides;
use crate::wait::WaitOptions;

/// Attempts granted to a scenario unless a policy overrides it
pub const DEFAULT_RETRY_ATTEMPTS: u32 = 3;

/// Per-attempt fixture: one asset origin plus one app session
#[derive(Debug)]
pub struct ScenarioContext {
    server: AssetServer,
    device: Device,
}

impl ScenarioContext {
    /// Bring up the origin and a fresh session for one attempt.
    ///
    /// Settings are validated first so an impossible combination fails
    /// fast instead of burning retry attempts.
    pub fn start(settings: SettingsOverrides) -> HarnessResult<Self> {
        settings.validate()?;
        let mut server = AssetServer::new();
        server.start()?;
        let device = Device::new(AppSession::new(settings), WaitOptions::default());
        Ok(Self { server, device })
    }

    /// The asset origin backing this attempt
    #[must_use]
    pub const fn server(&self) -> &AssetServer {
        &self.server
    }

    /// The device handle driving this attempt's session
    #[must_use]
    pub const fn device(&self) -> &Device {
        &self.device
    }

    /// Attach to the home screen, the entry point of every scenario
    pub fn home(&self) -> HarnessResult<HomeScreen> {
        enter(|| home_screen(&self.device))
    }
}

type ScenarioBody = Box<dyn Fn(&mut ScenarioContext) -> HarnessResult<()>>;

/// A named test scenario with its settings and body
pub struct Scenario {
    name: String,
    settings: SettingsOverrides,
    skip: Option<String>,
    body: ScenarioBody,
}

impl fmt::Debug for Scenario {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Scenario")
            .field("name", &self.name)
            .field("settings", &self.settings)
            .field("skip", &self.skip)
            .finish_non_exhaustive()
    }
}

impl Scenario {
    /// Define a scenario with default settings overrides
    pub fn new(
        name: impl Into<String>,
        body: impl Fn(&mut ScenarioContext) -> HarnessResult<()> + 'static,
    ) -> Self {
        Self {
            name: name.into(),
            settings: SettingsOverrides::default(),
            skip: None,
            body: Box::new(body),
        }
    }

    /// Replace the settings overrides applied to every attempt
    #[must_use]
    pub fn with_settings(mut self, settings: SettingsOverrides) -> Self {
        self.settings = settings;
        self
    }

    /// Mark the scenario skipped; the body will never run
    #[must_use]
    pub fn skip(mut self, reason: impl Into<String>) -> Self {
        self.skip = Some(reason.into());
        self
    }

    /// Scenario name as reported
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Skip reason, if marked skipped
    #[must_use]
    pub fn skip_reason(&self) -> Option<&str> {
        self.skip.as_deref()
    }

    /// Execute one attempt against a fresh context
    pub fn run_once(&self) -> HarnessResult<()> {
        let mut context = ScenarioContext::start(self.settings)?;
        (self.body)(&mut context)
    }
}

/// How many attempts a scenario gets before it is reported failed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Total attempts, counting the first run. Treated as at least 1.
    pub attempts: u32,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            attempts: DEFAULT_RETRY_ATTEMPTS,
        }
    }
}

impl RetryPolicy {
    /// Policy with an explicit attempt budget
    #[must_use]
    pub const fn new(attempts: u32) -> Self {
        Self { attempts }
    }

    /// Policy that never retries
    #[must_use]
    pub const fn no_retries() -> Self {
        Self { attempts: 1 }
    }
}

/// Result of driving one scenario through the retry loop
#[derive(Debug)]
pub enum Outcome {
    /// The scenario passed on the recorded attempt
    Passed {
        /// Attempts consumed, counting the successful one
        attempts: u32,
    },
    /// The scenario exhausted its budget or hit a fatal error
    Failed {
        /// Attempts consumed
        attempts: u32,
        /// The error from the final attempt, unmodified
        error: HarnessError,
    },
    /// The scenario was marked skipped and never ran
    Skipped {
        /// Reason given at definition time
        reason: String,
    },
}

impl Outcome {
    /// Whether the scenario passed
    #[must_use]
    pub const fn is_pass(&self) -> bool {
        matches!(self, Self::Passed { .. })
    }

    /// Attempts consumed; zero for skipped scenarios
    #[must_use]
    pub const fn attempts(&self) -> u32 {
        match self {
            Self::Passed { attempts } | Self::Failed { attempts, .. } => *attempts,
            Self::Skipped { .. } => 0,
        }
    }
}

/// Sequential executor applying a [`RetryPolicy`] to scenarios
#[derive(Debug, Default, Clone, Copy)]
pub struct RetryRunner {
    policy: RetryPolicy,
}

impl RetryRunner {
    /// Runner with the given policy
    #[must_use]
    pub const fn new(policy: RetryPolicy) -> Self {
        Self { policy }
    }

    /// Attempt budget per scenario
    #[must_use]
    pub const fn policy(&self) -> RetryPolicy {
        self.policy
    }

    /// Drive a scenario to a terminal outcome.
    ///
    /// Retryable errors consume an attempt and trigger a fresh run;
    /// fatal errors end the scenario immediately. The error carried by
    /// a failed outcome is always the one from the last attempt.
    pub fn run(&self, scenario: &Scenario) -> Outcome {
        if let Some(reason) = scenario.skip_reason() {
            tracing::info!(scenario = scenario.name(), reason, "skipped");
            return Outcome::Skipped {
                reason: reason.to_string(),
            };
        }

        let budget = self.policy.attempts.max(1);
        let mut attempt = 0;
        loop {
            attempt += 1;
            tracing::debug!(scenario = scenario.name(), attempt, budget, "attempt started");
            match scenario.run_once() {
                Ok(()) => {
                    tracing::info!(scenario = scenario.name(), attempt, "passed");
                    return Outcome::Passed { attempts: attempt };
                }
                Err(error) if error.is_retryable() && attempt < budget => {
                    tracing::warn!(
                        scenario = scenario.name(),
                        attempt,
                        %error,
                        "attempt failed, retrying"
                    );
                }
                Err(error) => {
                    tracing::error!(scenario = scenario.name(), attempt, %error, "failed");
                    return Outcome::Failed {
                        attempts: attempt,
                        error,
                    };
                }
            }
        }
    }
}
