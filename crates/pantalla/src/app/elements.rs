//! Stable element identifiers exposed by the application surfaces.

/// Home wordmark / logo
pub const HOME_WORDMARK: &str = "home-wordmark";
/// Private-browsing mode toggle button
pub const PRIVATE_BROWSING_BUTTON: &str = "private-browsing-button";
/// First-run onboarding dismiss control
pub const ONBOARDING_DISMISS: &str = "onboarding-dismiss";
/// Navigation toolbar (URL entry point)
pub const NAVIGATION_TOOLBAR: &str = "navigation-toolbar";
/// Three-dot menu button
pub const MENU_BUTTON: &str = "menu-button";
/// Tab counter; text is the number of tabs in the current mode
pub const TAB_COUNTER: &str = "tab-counter";
/// Customize-homepage entry button
pub const CUSTOMIZE_HOME_BUTTON: &str = "customize-home-button";

/// Jump-back-in section root
pub const JUMP_BACK_IN_SECTION: &str = "jump-back-in-section";
/// Jump-back-in item title
pub const JUMP_BACK_IN_TITLE: &str = "jump-back-in-title";
/// Jump-back-in item URL
pub const JUMP_BACK_IN_URL: &str = "jump-back-in-url";
/// Jump-back-in "show all" button
pub const JUMP_BACK_IN_SHOW_ALL: &str = "jump-back-in-show-all";

/// Recommended-stories section root
pub const STORIES_SECTION: &str = "recommended-stories-section";
/// Stories-by-topic section root
pub const STORIES_BY_TOPIC_SECTION: &str = "stories-by-topic-section";
/// Recently-visited history section root
pub const RECENTLY_VISITED_SECTION: &str = "recently-visited-section";

/// Private-browsing session description
pub const PRIVATE_SESSION_DESCRIPTION: &str = "private-session-description";
/// "Common myths about private browsing" link
pub const COMMON_MYTHS_LINK: &str = "common-myths-link";

/// Browser URL field; text is the loaded URL
pub const URL_FIELD: &str = "url-field";
/// Browser page body; text is the loaded document body
pub const PAGE_BODY: &str = "page-body";
/// Browser home button
pub const BROWSER_HOME_BUTTON: &str = "browser-home-button";

/// Tab overview root
pub const TAB_OVERVIEW: &str = "tab-overview";
/// Close button leaving the tab overview
pub const TAB_OVERVIEW_CLOSE: &str = "tab-overview-close";
/// Close button of the most recently used tab in the overview
pub const TAB_CLOSE_ACTIVE: &str = "tab-close-active";

/// Customize-home panel root
pub const CUSTOMIZE_PANEL: &str = "customize-home-panel";
/// Stories-feed toggle in the customize panel; text is "on"/"off"
pub const CUSTOMIZE_STORIES_TOGGLE: &str = "customize-stories-toggle";
/// Jump-back-in toggle in the customize panel; text is "on"/"off"
pub const CUSTOMIZE_JUMP_BACK_IN_TOGGLE: &str = "customize-jump-back-in-toggle";
/// Back button leaving the customize panel
pub const CUSTOMIZE_BACK_BUTTON: &str = "customize-back-button";

/// Id of a tab entry in the overview
#[must_use]
pub fn tab_item(title: &str) -> String {
    format!("tab-item-{title}")
}

/// Id of a tab's close button in the overview
#[must_use]
pub fn tab_close(title: &str) -> String {
    format!("tab-close-button-{title}")
}
