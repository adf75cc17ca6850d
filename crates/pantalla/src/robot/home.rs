//! Home screen objects for the regular and private browsing modes.

use crate::app::{elements, Device};
use crate::result::HarnessResult;
use crate::robot::browser::BrowserScreen;
use crate::robot::customize::CustomizePanel;
use crate::robot::tabs::TabOverview;
use crate::robot::Transition;

/// Entry point: attach to the regular home screen
pub fn home_screen(device: &Device) -> HarnessResult<HomeScreen> {
    HomeScreen::attach(device.clone())
}

/// The regular browsing home screen
#[derive(Debug)]
pub struct HomeScreen {
    device: Device,
}

impl HomeScreen {
    pub(crate) fn attach(device: Device) -> HarnessResult<Self> {
        device.expect_visible(elements::HOME_WORDMARK, "home screen wordmark")?;
        Ok(Self { device })
    }

    /// Check the permanent chrome: wordmark, private-browsing button,
    /// toolbar, menu, tab counter and customize-home button
    pub fn verify_home_chrome(self) -> HarnessResult<Self> {
        self.device
            .expect_visible(elements::HOME_WORDMARK, "home screen wordmark")?;
        self.device
            .expect_visible(elements::PRIVATE_BROWSING_BUTTON, "private-browsing button")?;
        self.device
            .expect_visible(elements::NAVIGATION_TOOLBAR, "navigation toolbar")?;
        self.device
            .expect_visible(elements::MENU_BUTTON, "menu button")?;
        self.device
            .expect_visible(elements::TAB_COUNTER, "tab counter")?;
        self.device
            .expect_visible(elements::CUSTOMIZE_HOME_BUTTON, "customize-home button")?;
        Ok(self)
    }

    /// Check the tab counter shows the given open-tab count
    pub fn verify_tab_counter(self, expected: usize) -> HarnessResult<Self> {
        let text = self.device.text_of(elements::TAB_COUNTER)?;
        if text == expected.to_string() {
            Ok(self)
        } else {
            Err(crate::result::HarnessError::verification(format!(
                "tab counter showing {expected}, got {text}"
            )))
        }
    }

    /// Dismiss the first-run onboarding banner and stay on the home screen
    pub fn dismiss_onboarding(self) -> HarnessResult<Self> {
        self.device.tap(elements::ONBOARDING_DISMISS)?;
        self.device
            .expect_absent(elements::ONBOARDING_DISMISS, "onboarding banner dismissed")?;
        Ok(self)
    }

    /// Switch into private browsing mode
    pub fn toggle_private_mode(self) -> HarnessResult<PrivateHomeScreen> {
        self.device.tap(elements::PRIVATE_BROWSING_BUTTON)?;
        PrivateHomeScreen::attach(self.device)
    }

    /// Check the jump-back-in section shows the given recent tab
    pub fn verify_jump_back_in_item(self, title: &str, url: &str) -> HarnessResult<Self> {
        self.device
            .expect_visible(elements::JUMP_BACK_IN_SECTION, "jump-back-in section")?;
        let shown_title = self.device.text_of(elements::JUMP_BACK_IN_TITLE)?;
        let shown_url = self.device.text_of(elements::JUMP_BACK_IN_URL)?;
        if shown_title == title && shown_url == url {
            Ok(self)
        } else {
            Err(crate::result::HarnessError::verification(format!(
                "jump-back-in showing '{title}' ({url}), got '{shown_title}' ({shown_url})"
            )))
        }
    }

    /// Check the jump-back-in section is not on the home screen
    pub fn verify_jump_back_in_hidden(self) -> HarnessResult<Self> {
        self.device
            .expect_absent(elements::JUMP_BACK_IN_SECTION, "jump-back-in section hidden")?;
        Ok(self)
    }

    /// Check the recommended-stories section is shown
    pub fn verify_stories_shown(self) -> HarnessResult<Self> {
        self.device
            .expect_visible(elements::STORIES_SECTION, "stories section")?;
        Ok(self)
    }

    /// Check the recommended-stories section is not shown
    pub fn verify_stories_hidden(self) -> HarnessResult<Self> {
        self.device
            .expect_absent(elements::STORIES_SECTION, "stories section hidden")?;
        Ok(self)
    }

    /// Check the stories-by-topic section is shown
    pub fn verify_stories_by_topic_shown(self) -> HarnessResult<Self> {
        self.device
            .expect_visible(elements::STORIES_BY_TOPIC_SECTION, "stories-by-topic section")?;
        Ok(self)
    }

    /// Check the recently-visited section is shown
    pub fn verify_recently_visited_shown(self) -> HarnessResult<Self> {
        self.device
            .expect_visible(elements::RECENTLY_VISITED_SECTION, "recently-visited section")?;
        Ok(self)
    }

    /// Check the recently-visited section is not shown
    pub fn verify_recently_visited_hidden(self) -> HarnessResult<Self> {
        self.device.expect_absent(
            elements::RECENTLY_VISITED_SECTION,
            "recently-visited section hidden",
        )?;
        Ok(self)
    }

    /// Type a URL into the toolbar and load it
    pub fn open_url(self, url: &str) -> HarnessResult<Transition<Self, BrowserScreen>> {
        self.device
            .expect_visible(elements::NAVIGATION_TOOLBAR, "navigation toolbar")?;
        self.device.open_url(url)?;
        let destination = BrowserScreen::attach(self.device)?;
        Ok(Transition::new(destination))
    }

    /// Open the tab overview via the counter
    pub fn open_tab_overview(self) -> HarnessResult<Transition<Self, TabOverview>> {
        self.device.tap(elements::TAB_COUNTER)?;
        let destination = TabOverview::attach(self.device)?;
        Ok(Transition::new(destination))
    }

    /// Open the tab overview via the jump-back-in "show all" button.
    ///
    /// Only available while the section is showing a recent tab.
    pub fn show_all_recent_tabs(self) -> HarnessResult<Transition<Self, TabOverview>> {
        self.device.tap(elements::JUMP_BACK_IN_SHOW_ALL)?;
        let destination = TabOverview::attach(self.device)?;
        Ok(Transition::new(destination))
    }

    /// Open the customize-homepage panel from the menu
    pub fn open_customize_home(self) -> HarnessResult<Transition<Self, CustomizePanel>> {
        self.device.tap(elements::MENU_BUTTON)?;
        self.device.tap(elements::CUSTOMIZE_HOME_BUTTON)?;
        let destination = CustomizePanel::attach(self.device)?;
        Ok(Transition::new(destination))
    }
}

/// The private browsing home screen
#[derive(Debug)]
pub struct PrivateHomeScreen {
    device: Device,
}

impl PrivateHomeScreen {
    pub(crate) fn attach(device: Device) -> HarnessResult<Self> {
        device.expect_visible(
            elements::PRIVATE_SESSION_DESCRIPTION,
            "private session description",
        )?;
        Ok(Self { device })
    }

    /// Check the private session explainer text
    pub fn verify_private_session_description(self) -> HarnessResult<Self> {
        let text = self
            .device
            .text_of(elements::PRIVATE_SESSION_DESCRIPTION)?;
        if text.contains("private session") {
            Ok(self)
        } else {
            Err(crate::result::HarnessError::verification(format!(
                "private session description, got '{text}'"
            )))
        }
    }

    /// Check the tab counter shows the given private-tab count
    pub fn verify_tab_counter(self, expected: usize) -> HarnessResult<Self> {
        let text = self.device.text_of(elements::TAB_COUNTER)?;
        if text == expected.to_string() {
            Ok(self)
        } else {
            Err(crate::result::HarnessError::verification(format!(
                "private tab counter showing {expected}, got {text}"
            )))
        }
    }

    /// Switch back to the regular home screen
    pub fn toggle_private_mode(self) -> HarnessResult<HomeScreen> {
        self.device.tap(elements::PRIVATE_BROWSING_BUTTON)?;
        HomeScreen::attach(self.device)
    }

    /// Follow the "common myths" support link
    pub fn open_common_myths_link(self) -> HarnessResult<Transition<Self, BrowserScreen>> {
        self.device.tap(elements::COMMON_MYTHS_LINK)?;
        let destination = BrowserScreen::attach(self.device)?;
        Ok(Transition::new(destination))
    }
}
