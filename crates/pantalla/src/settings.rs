//! Feature-flag overrides for the application under test.
//!
//! Overrides are applied once when a scenario attempt starts and stay
//! immutable for that attempt; UI-driven toggles (the customize panel)
//! mutate the session's own copy, never the override set.

use serde::{Deserialize, Serialize};

use crate::result::{HarnessError, HarnessResult};

/// Boolean feature flags consumed by the application under test
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SettingsOverrides {
    /// Recommended-stories feed on the home screen
    pub stories_enabled: bool,
    /// "Stories by topic" sibling section; requires the feed
    pub stories_by_topic_enabled: bool,
    /// Sponsored entries inside the feed; requires the feed
    pub sponsored_stories_enabled: bool,
    /// Jump-back-in (recently used tabs) section
    pub jump_back_in_enabled: bool,
    /// Recently-visited history section
    pub recently_visited_enabled: bool,
    /// First-run onboarding banner
    pub onboarding_enabled: bool,
}

impl Default for SettingsOverrides {
    fn default() -> Self {
        Self {
            stories_enabled: true,
            stories_by_topic_enabled: true,
            sponsored_stories_enabled: false,
            jump_back_in_enabled: true,
            recently_visited_enabled: true,
            onboarding_enabled: true,
        }
    }
}

impl SettingsOverrides {
    /// Create overrides with the application's default flags
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Toggle the recommended-stories feed
    #[must_use]
    pub const fn with_stories(mut self, enabled: bool) -> Self {
        self.stories_enabled = enabled;
        self
    }

    /// Toggle the stories-by-topic section
    #[must_use]
    pub const fn with_stories_by_topic(mut self, enabled: bool) -> Self {
        self.stories_by_topic_enabled = enabled;
        self
    }

    /// Toggle sponsored stories
    #[must_use]
    pub const fn with_sponsored_stories(mut self, enabled: bool) -> Self {
        self.sponsored_stories_enabled = enabled;
        self
    }

    /// Toggle the jump-back-in section
    #[must_use]
    pub const fn with_jump_back_in(mut self, enabled: bool) -> Self {
        self.jump_back_in_enabled = enabled;
        self
    }

    /// Toggle the recently-visited section
    #[must_use]
    pub const fn with_recently_visited(mut self, enabled: bool) -> Self {
        self.recently_visited_enabled = enabled;
        self
    }

    /// Toggle the onboarding banner
    #[must_use]
    pub const fn with_onboarding(mut self, enabled: bool) -> Self {
        self.onboarding_enabled = enabled;
        self
    }

    /// Validate flag combinations.
    ///
    /// Sections nested inside the stories feed cannot be enabled while
    /// the feed itself is off; retrying cannot fix that, so it is a
    /// configuration error.
    pub fn validate(&self) -> HarnessResult<()> {
        if self.sponsored_stories_enabled && !self.stories_enabled {
            return Err(HarnessError::Configuration {
                message: "sponsored stories require the stories feed".into(),
            });
        }
        if self.stories_by_topic_enabled && !self.stories_enabled {
            return Err(HarnessError::Configuration {
                message: "stories by topic require the stories feed".into(),
            });
        }
        Ok(())
    }
}
